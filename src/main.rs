use clap::Parser;
use roster::core::config::{self, CliOverrides};
use roster::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "roster", about = "Browse a batch of random users in a terminal table")]
struct Args {
    /// How many users to fetch (1-5000)
    #[arg(short, long)]
    results: Option<usize>,

    /// Seed for a reproducible batch
    #[arg(short, long)]
    seed: Option<String>,

    /// Base URL of the user API
    #[arg(long)]
    url: Option<String>,

    /// Start with alternating row colors
    #[arg(long)]
    colors: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roster.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: {e}, using defaults");
            log::warn!("Config load failed: {}", e);
            Default::default()
        }
    };

    let cli = CliOverrides {
        base_url: args.url,
        results: args.results,
        seed: args.seed,
        show_colors: args.colors,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Roster starting up: url={}, results={}, seed={:?}",
        resolved.base_url,
        resolved.results,
        resolved.seed
    );

    tui::run(resolved)
}
