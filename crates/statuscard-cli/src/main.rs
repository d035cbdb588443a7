//! Status Card CLI
//!
//! Headless front end over statuscard-core.
//!
//! ## Usage
//!
//! ```bash
//! # Fetch presence and quotes once and print the card
//! statuscard once
//!
//! # Same, as JSON (card state plus the raw presence snapshot)
//! statuscard once --json
//!
//! # Keep polling and reprint on every change; Enter shows the next quote
//! statuscard watch
//!
//! # Format a duration the way the card does
//! statuscard elapsed 11100000
//!
//! # Show recent diagnostics
//! statuscard logs --level warn
//! ```

mod terminal;
mod text;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use statuscard_core::{
    format_elapsed, quote_channel, read_entries, CardConfig, CardState, HttpProvider,
    LoggingBuilder, PresenceSnapshot, QuoteDeck, QuoteRemote, StatusCard, SystemClock,
};

use crate::terminal::TerminalSink;
use crate::text::render_text;

/// Status Card - live Discord presence and rotating quotes
#[derive(Parser)]
#[command(name = "statuscard")]
#[command(version = "0.1.0")]
#[command(about = "Status Card - live Discord presence and rotating quotes")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: ~/.statuscard)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// JSON config file; the flags below override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Discord user id to show
    #[arg(short, long, global = true)]
    user_id: Option<String>,

    /// Presence API base URL (the user id is appended)
    #[arg(long, global = true)]
    presence_base: Option<String>,

    /// Quotes file URL
    #[arg(long, global = true)]
    quotes_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch presence and quotes once and print the card
    Once {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the card continuously, reprinting on every change
    Watch {
        /// Stop after this many seconds (default: until Ctrl+C)
        #[arg(long)]
        seconds: Option<u64>,
    },

    /// Format a millisecond duration like the status line does
    Elapsed {
        #[arg(allow_negative_numbers = true)]
        ms: i64,
    },

    /// Print diagnostics written by previous runs
    Logs {
        /// Minimum level to show (trace, debug, info, warn, error)
        #[arg(long, default_value = "info")]
        level: String,
    },
}

impl Cli {
    fn card_config(&self) -> Result<CardConfig> {
        let mut config = match &self.config {
            Some(path) => CardConfig::from_file(path)
                .with_context(|| format!("Failed to read config {:?}", path))?,
            None => CardConfig::default(),
        };
        if let Some(user_id) = &self.user_id {
            config.user_id = user_id.clone();
        }
        if let Some(base) = &self.presence_base {
            config.presence_base = base.clone();
        }
        if let Some(url) = &self.quotes_url {
            config.quotes_url = url.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// `once --json` output
#[derive(Serialize)]
struct OnceReport<'a> {
    card: &'a CardState,
    snapshot: Option<&'a PresenceSnapshot>,
    quotes_loaded: bool,
    presence_ok: bool,
}

/// Get the default data directory (~/.statuscard)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".statuscard")
}

fn level_rank(level: &str) -> u8 {
    match level.to_ascii_lowercase().as_str() {
        "trace" => 0,
        "debug" => 1,
        "info" => 2,
        "warn" => 3,
        "error" => 4,
        _ => 2,
    }
}

/// Forward each line typed on stdin as a "next quote" request.
///
/// Never completes; after EOF it simply stops reading.
async fn forward_stdin(remote: QuoteRemote) {
    let stdin = tokio::io::stdin();
    let reader = tokio::io::BufReader::new(stdin);
    let mut lines = tokio::io::AsyncBufReadExt::lines(reader);

    loop {
        match lines.next_line().await {
            Ok(Some(_)) => {
                remote.next();
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Stdin read error: {}", e);
                break;
            }
        }
    }
    std::future::pending::<()>().await;
}

async fn run_once(config: &CardConfig, json: bool) -> Result<()> {
    let http = HttpProvider::new(config).context("Failed to build HTTP client")?;
    let state = Rc::new(RefCell::new(CardState::default()));

    let mut card = StatusCard::new(
        config,
        &http,
        &http,
        QuoteDeck::new(),
        state.clone(),
        SystemClock,
    );
    let outcome = card.bootstrap().await;

    let state = state.borrow();
    if json {
        let report = OnceReport {
            card: &*state,
            snapshot: card.last_snapshot(),
            quotes_loaded: outcome.quotes.is_ok(),
            presence_ok: outcome.presence.is_ok(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_text(&state));
    }
    Ok(())
}

async fn run_watch(config: &CardConfig, seconds: Option<u64>) -> Result<()> {
    let http = HttpProvider::new(config).context("Failed to build HTTP client")?;
    let sink = Rc::new(RefCell::new(TerminalSink::new(std::io::stdout())));
    let (remote, commands) = quote_channel();

    let mut card = StatusCard::new(
        config,
        &http,
        &http,
        QuoteDeck::new(),
        sink.clone(),
        SystemClock,
    );

    let stop = async {
        match seconds {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        _ = card.run(commands) => {}
        _ = forward_stdin(remote) => {}
        _ = stop => {}
        _ = tokio::signal::ctrl_c() => {
            eprintln!();
            eprintln!("Received shutdown signal...");
        }
    }

    tracing::info!(frames = sink.borrow().frames(), "Watch stopped");
    Ok(())
}

fn show_logs(data_dir: &std::path::Path, level: &str) -> Result<()> {
    let min = level_rank(level);
    let entries = read_entries(data_dir.join("logs"))?;

    let mut shown = 0;
    for entry in entries.iter().filter(|e| level_rank(&e.level) >= min) {
        let fields = entry
            .fields
            .as_ref()
            .map(|f| format!(" {}", f))
            .unwrap_or_default();
        println!(
            "{} {:<5} [{}] {}{}",
            entry.ts,
            entry.level.to_uppercase(),
            entry.instance,
            entry.msg,
            fields
        );
        shown += 1;
    }

    if shown == 0 {
        println!("No log entries.");
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);

    match &cli.command {
        Commands::Elapsed { ms } => {
            println!("{}", format_elapsed(*ms));
            return Ok(());
        }
        Commands::Logs { level } => return show_logs(&data_dir, level),
        _ => {}
    }

    LoggingBuilder::new("cli")
        .verbosity(cli.verbose)
        .logs_dir(data_dir.join("logs"))
        .init()?;

    let config = cli.card_config()?;
    tracing::debug!(presence = %config.presence_url(), quotes = %config.quotes_url, "Using endpoints");

    match cli.command {
        Commands::Once { json } => run_once(&config, json).await,
        Commands::Watch { seconds } => run_watch(&config, seconds).await,
        Commands::Elapsed { .. } | Commands::Logs { .. } => Ok(()),
    }
}
