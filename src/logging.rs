use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter, e.g. `LETTERTILE_LOG=lettertile=trace`.
const LOG_ENV: &str = "LETTERTILE_LOG";

/// Where log lines go. The gallery owns the terminal, so it logs to a file.
pub enum LogTarget {
    Stderr,
    File,
}

/// Level used when `LETTERTILE_LOG` is unset. Commands keep stderr quiet unless verbose.
fn default_level(target: &LogTarget, verbose: bool) -> Level {
    match (target, verbose) {
        (_, true) => Level::DEBUG,
        (LogTarget::File, false) => Level::INFO,
        (LogTarget::Stderr, false) => Level::WARN,
    }
}

pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let default_level = default_level(&target, verbose);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File => {
            let path = log_path();
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false) // No color codes in file
                .try_init()
        }
    }
    .map_err(|e| anyhow!(e))
}

/// Returns the log file path inside the user's data directory.
/// Falls back to `./lettertile.log` when no data dir is found.
pub fn log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let dir = data_dir.join("lettertile");
        std::fs::create_dir_all(&dir).ok();
        dir.join("lettertile.log")
    } else {
        PathBuf::from("lettertile.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_both_targets_to_debug() {
        assert_eq!(default_level(&LogTarget::File, false), Level::INFO);
        assert_eq!(default_level(&LogTarget::Stderr, false), Level::WARN);
        assert_eq!(default_level(&LogTarget::File, true), Level::DEBUG);
        assert_eq!(default_level(&LogTarget::Stderr, true), Level::DEBUG);
    }
}
