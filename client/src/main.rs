mod colors;
mod config;
mod game_ui;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use std::path::PathBuf;

use config::{get_config_manager, Config};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&std::path::Path>) -> Config {
    match get_config_manager(path).get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(args.config.as_deref());
    log!(
        "Starting with window {}x{}, cell size {}",
        config.window.width,
        config.window.height,
        config.board.cell_size
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(&config)))),
    )?;

    log!("Window closed");

    Ok(())
}
