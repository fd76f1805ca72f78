mod config;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::games::tictactoe::{TicTacToeSessionSettings, run_game};
use common::{log, logger};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal")]
struct Args {
    /// Path to the YAML config file (defaults to tictactoe_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        if !logger::try_log(&format!("Fatal error: {err}")) {
            eprintln!("Error: {err}");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::get_config_path);
    let manager = config::get_config_manager(&config_path);

    if args.write_default_config {
        manager.set_config(&config::Config::default())?;
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let config = manager.get_config()?;

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        config.logging.prefix.clone()
    };
    logger::init_logger(prefix, config.logging.enabled);
    log!("Config loaded from {}", config_path.display());

    let settings = TicTacToeSessionSettings::from(&config.tictactoe);
    let status = run_game(io::stdin().lock(), io::stdout().lock(), settings)?;
    log!("Session finished: {:?}", status);

    Ok(())
}
