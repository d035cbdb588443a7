#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use statuscard_core::{CardConfig, LoggingBuilder};

/// Global card configuration, set from command line
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card configuration (set from command line or default)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the default data directory (<data_dir>/statuscard)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("statuscard")
}

/// Status Card - live Discord presence and rotating quotes
#[derive(Parser, Debug)]
#[command(name = "statuscard-desktop")]
#[command(about = "Status Card - live Discord presence and rotating quotes")]
struct Args {
    /// Data directory (diagnostics are written to <data-dir>/logs)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Discord user id to show
    #[arg(short, long)]
    user_id: Option<String>,

    /// Quotes file URL
    #[arg(long)]
    quotes_url: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn card_config(&self) -> anyhow::Result<CardConfig> {
        let mut config = match &self.config {
            Some(path) => CardConfig::from_file(path)
                .with_context(|| format!("Failed to read config {:?}", path))?,
            None => CardConfig::default(),
        };
        if let Some(user_id) = &self.user_id {
            config.user_id = user_id.clone();
        }
        if let Some(quotes_url) = &self.quotes_url {
            config.quotes_url = quotes_url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let log_path = LoggingBuilder::new("desktop")
        .verbosity(args.verbose)
        .logs_dir(data_dir.join("logs"))
        .init()?;

    let config = args.card_config()?;
    tracing::info!(
        user_id = %config.user_id,
        log = ?log_path,
        "Starting status card"
    );
    let title = format!("Status Card - {}", config.user_id);
    let _ = CARD_CONFIG.set(config);

    // Narrow portrait window, like a profile card
    let window_width = 480.0;
    let window_height = 760.0;

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
