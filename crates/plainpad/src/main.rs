#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use plainpad_config::AppConfig;

/// A small notepad with modeless find and replace dialogs.
#[derive(Parser, Debug)]
#[command(name = "plainpad", version, about)]
struct Cli {
    /// File to open on startup.
    file: Option<PathBuf>,

    /// Read settings from this file instead of `plainpad.json` next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting plainpad");

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load(&config_path);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Untitled - Notepad")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    let startup_args = plainpad_ui::StartupArgs {
        file: cli.file,
        config,
    };

    eframe::run_native(
        "plainpad",
        native_options,
        Box::new(move |cc| Ok(Box::new(plainpad_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
