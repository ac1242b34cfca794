use clap::Parser;
use log::{info, warn};
use pearls::core::config::{self, CliOverrides, PearlsConfig, StartupLog};
use pearls::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "pearls", about = "Flashcard viewer for clinical liver-test pearls")]
struct Args {
    /// Fade-out delay before the next card shows, in milliseconds
    #[arg(long)]
    transition_ms: Option<u64>,

    /// Delay after a card change before navigation unlocks, in milliseconds
    #[arg(long)]
    settle_ms: Option<u64>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut startup_log = StartupLog::default();
    let file_config = config::load_config(&mut startup_log).unwrap_or_else(|e| {
        eprintln!("pearls: {e}; using defaults");
        PearlsConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            transition_ms: args.transition_ms,
            settle_ms: args.settle_ms,
            log_file: args.log_file,
        },
    );

    // Initialize file logger, the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(&resolved.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
        Err(e) => {
            eprintln!("pearls: cannot open {}: {e}", resolved.log_file.display());
            for (level, message) in startup_log.records() {
                eprintln!("pearls: [{level}] {message}");
            }
            for warning in &resolved.warnings {
                eprintln!("pearls: {warning}");
            }
        }
    }

    // Loading and resolution ran before the logger existed.
    startup_log.replay();
    for warning in &resolved.warnings {
        warn!("{warning}");
    }

    info!("Pearls starting up with {:?}", resolved.timing);

    tui::run(resolved)
}
