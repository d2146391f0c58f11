/// User configuration, read from `<config dir>/lettertile/config.toml`.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::PaletteKind;
use crate::gallery::GalleryOptions;
use crate::label::ShapeKind;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Palette for keyed and random colors.
    pub palette: PaletteKind,
    /// Shape used by `render` when none is given.
    pub shape: ShapeKind,
    /// Corner radius for rounded rectangles, in pixels.
    pub radius: i32,
    /// Border thickness in pixels; 0 disables the border.
    pub border: i32,
    pub bold: bool,
    pub uppercase: bool,
    /// Event poll interval of the gallery.
    pub tick_rate_ms: u64,
    /// How long each animation frame stays on screen.
    pub frame_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette: PaletteKind::Default,
            shape: ShapeKind::Rect,
            radius: 6,
            border: 0,
            bold: false,
            uppercase: false,
            tick_rate_ms: 250,
            frame_duration_ms: 1200,
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn gallery_options(&self) -> GalleryOptions {
        GalleryOptions {
            palette: self.palette,
            radius: self.radius,
            // the border samples need a visible border even when labels default to none
            border: self.border.max(GalleryOptions::default().border),
            frame_duration: Duration::from_millis(self.frame_duration_ms),
            ..GalleryOptions::default()
        }
    }
}

/// Directory holding the config file.
pub fn config_dir() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("lettertile");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

pub fn config_path() -> Option<PathBuf> {
    Some(config_dir()?.join("config.toml"))
}

/// Load config from disk, returning defaults if the file is missing or invalid.
pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_from(&path),
        None => Config::default(),
    }
}

pub fn load_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Config::default()
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            // Create default config file on first run
            let config = Config::default();
            if let Err(e) = write_default_config(path, &config) {
                warn!(path = %path.display(), error = %e, "could not write default config");
            }
            config
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
            Config::default()
        }
    }
}

/// Write a default config file with comments.
fn write_default_config(path: &Path, config: &Config) -> std::io::Result<()> {
    let content = format!(
        "# Lettertile configuration\n\
         \n\
         # Palette: \"default\" or \"material\"\n\
         palette = \"{}\"\n\
         \n\
         # Shape for `render`: \"rect\", \"round\" or \"round-rect\"\n\
         shape = \"rect\"\n\
         \n\
         # Corner radius for round-rect, in pixels\n\
         radius = {}\n\
         \n\
         # Border thickness in pixels (0 = no border)\n\
         border = {}\n\
         \n\
         bold = {}\n\
         uppercase = {}\n\
         \n\
         # Gallery event poll interval and animation frame time, in milliseconds\n\
         tick_rate_ms = {}\n\
         frame_duration_ms = {}\n",
        config.palette.name(),
        config.radius,
        config.border,
        config.bold,
        config.uppercase,
        config.tick_rate_ms,
        config.frame_duration_ms,
    );
    std::fs::write(path, content.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lettertile-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("config.toml")
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str("palette = \"material\"\nborder = 3\n").unwrap();
        assert_eq!(config.palette, PaletteKind::Material);
        assert_eq!(config.border, 3);
        assert_eq!(config.shape, ShapeKind::Rect);
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn shape_names_are_kebab_case() {
        let config: Config = toml::from_str("shape = \"round-rect\"").unwrap();
        assert_eq!(config.shape, ShapeKind::RoundRect);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch_path("missing");
        let _ = std::fs::remove_file(&path);
        assert_eq!(load_from(&path), Config::default());
        assert_eq!(load_from(&path), Config::default());
        assert!(std::fs::read_to_string(&path).unwrap().contains("frame_duration_ms = 1200"));
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = scratch_path("invalid");
        std::fs::write(&path, "palette = 12").unwrap();
        assert_eq!(load_from(&path), Config::default());
    }

    #[test]
    fn non_utf8_file_is_left_untouched() {
        let path = scratch_path("non-utf8");
        let bytes = b"palette = \"material\"\n# caf\xE9\nborder = 3\n";
        std::fs::write(&path, bytes).unwrap();
        assert_eq!(load_from(&path), Config::default());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn gallery_options_follow_config() {
        let config = Config {
            palette: PaletteKind::Material,
            radius: 4,
            frame_duration_ms: 500,
            ..Config::default()
        };
        let options = config.gallery_options();
        assert_eq!(options.palette, PaletteKind::Material);
        assert_eq!(options.radius, 4);
        assert_eq!(options.border, 2);
        assert_eq!(options.frame_duration, Duration::from_millis(500));
    }
}
