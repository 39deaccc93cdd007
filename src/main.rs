use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use log::{LevelFilter, info};
use sailings::ScrapingContext;

/// Scrape BC Ferries sailings into JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Read every route from the local sample page instead of bcferries.com.
    #[arg(short, long)]
    local: bool,

    /// Write the schedule here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let context = ScrapingContext::new()?;
    let schedule = context
        .scrape_routes(args.local)
        .await
        .context("scrape aborted")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&schedule)?
    } else {
        serde_json::to_string(&schedule)?
    };

    match args.output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote schedule to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
