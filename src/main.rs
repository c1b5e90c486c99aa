mod alerts;
mod api;
mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod network;
mod session;
mod ui;
mod widgets;
mod workers;

use crate::config::{Config, Overrides, get_config_path};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the live dashboard
    Start {
        /// Base URL of the blood bank backend
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Session cookie to send with every request, e.g. "session=abc123"
        #[arg(long, value_name = "COOKIE")]
        session_cookie: Option<String>,

        /// Print widget events to stdout instead of drawing the dashboard
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Paint a dark background behind the panels
        #[arg(long, action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Save the backend connection settings
    Configure {
        /// Base URL of the blood bank backend
        #[arg(long, value_name = "URL")]
        api_url: String,

        /// Session cookie to send with every request
        #[arg(long, value_name = "COOKIE")]
        session_cookie: Option<String>,
    },
    /// Delete the saved configuration
    Reset,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            api_url,
            session_cookie,
            headless,
            with_background,
        } => {
            let flags = Overrides {
                api_url,
                session_cookie,
            };
            let config = Config::resolve(flags, Overrides::from_env(), load_saved(&config_path));
            if let Err(e) = config.validate() {
                crate::print_cmd_error!("Cannot start the dashboard", e.to_string().as_str());
                return Err(e.into());
            }
            start(config, headless, with_background).await
        }
        Command::Configure {
            api_url,
            session_cookie,
        } => {
            let config = Config::new(api_url, session_cookie);
            if let Err(e) = config.validate() {
                crate::print_cmd_error!("Refusing to save configuration", e.to_string().as_str());
                return Err(e.into());
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!("Configuration saved", "{}", config_path.display());
            Ok(())
        }
        Command::Reset => {
            crate::print_cmd_info!(
                "Clearing the saved dashboard configuration",
                "{}",
                config_path.display()
            );
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Saved settings, if a readable config file exists.
fn load_saved(config_path: &Path) -> Option<Config> {
    if !config_path.exists() {
        return None;
    }
    match Config::load_from_file(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            crate::print_cmd_warn!("Ignoring saved configuration", "{}", e);
            None
        }
    }
}

/// Mounts the widgets and hands the session to the chosen front end.
async fn start(config: Config, headless: bool, with_background: bool) -> Result<(), Box<dyn Error>> {
    let session = setup_session(config).await?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, UIConfig::new(with_background)).await
    }
}
