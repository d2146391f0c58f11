mod app;
mod cli;
mod event;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use logging::LogTarget;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let target = if cli_opts.command.is_some() {
        LogTarget::Stderr
    } else {
        LogTarget::File
    };
    logging::init(cli_opts.verbose, target)?;

    let config = lettertile::config::load_config();
    if let Some(command) = cli_opts.command {
        return cli::run(command, &config);
    }

    info!(palette = config.palette.name(), "starting gallery");
    let mut app = app::App::new(config.gallery_options());
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal, config.tick_rate());

    tui::restore()?;

    result
}
