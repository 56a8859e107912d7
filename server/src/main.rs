mod play;
mod server_config;
mod solve_handler;
mod web_server;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ttt_common::config::ConfigManager;
use ttt_common::{log, log_error, logger};
use server_config::{DEFAULT_CONFIG_PATH, ServerConfig};

#[derive(Parser)]
#[command(name = "ttt_server")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the solver over HTTP (default).
    Serve,
    /// Play against the solver in the terminal.
    Play,
    /// Write the default config to the config path.
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, ServerConfig> =
        ConfigManager::from_yaml_file(args.config.clone());

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config = config_manager.get_config()?;

            let shutdown_signal = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    log_error!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                log!("Shutdown signal received");
            };

            web_server::run_web_server(config, shutdown_signal).await?;
            log!("Server shut down gracefully");
        }
        Command::Play => {
            let status = tokio::task::spawn_blocking(play::run_stdin_game).await??;
            log!("Local game finished: {}", status);
        }
        Command::InitConfig => {
            config_manager.set_config(&ServerConfig::default())?;
            log!("Wrote default config to {}", args.config.display());
        }
    }

    Ok(())
}
