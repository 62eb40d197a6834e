/// Entry point, command line and window configuration

mod api;
mod app;
mod config;
mod country;
mod detail;
mod error;
mod flags;
mod headless;
mod listing;
mod logging;
mod model;
mod styles;
mod update;
mod view;

use std::process::ExitCode;

use clap::Parser;
use iced::Size;
use tracing::{error, info, warn};

use crate::config::{Config, LogLevel};

#[derive(Debug, Parser)]
#[command(name = "paises", version, about = "Browse the countries of the world")]
struct Cli {
    /// Base URL of the REST Countries service
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Translation key preferred for country names (e.g. por, fra, deu)
    #[arg(long, value_name = "KEY")]
    translation: Option<String>,

    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Persist the given options as the new defaults
    #[arg(long)]
    save_config: bool,

    /// Run without a window; starts the GUI when omitted
    #[command(subcommand)]
    command: Option<headless::Command>,
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(translation) = &self.translation {
            config.translation = translation.clone();
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (mut config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    cli.apply(&mut config);

    let _log_guard = logging::init(config.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "Ignoring unreadable config, using defaults");
    }

    if cli.save_config {
        if let Err(e) = config::save(&config) {
            error!(error = %e, "Failed to save config");
        }
    }

    match cli.command {
        Some(command) => headless::run(command, &config),
        None => run_gui(config),
    }
}

fn run_gui(config: Config) -> ExitCode {
    info!("Starting GUI");
    let result = iced::application(move || app::new(&config), app::update, app::view)
        .title(app::title)
        .window_size(Size::new(1100.0, 800.0))
        .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "GUI exited with an error");
            ExitCode::FAILURE
        }
    }
}
