use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use portfolio_report::{
    api::tickertape::TickertapeSite,
    app::{HoldingsSource, Portfolio, RunContext},
};

#[derive(Parser)]
#[command(about = "Enrich brokerage holdings with Tickertape data and write a CSV report")]
struct Args {
    /// JSON file with an ordered array of ticker symbols; when absent the
    /// live Kite portfolio is used instead
    #[arg(long)]
    list: Option<PathBuf>,

    /// Base directory for per-run output
    #[arg(long, default_value = "output")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let source = match args.list {
        Some(path) => HoldingsSource::Static { path },
        None => HoldingsSource::Live {
            enctoken: env::var("KITE_ENCTOKEN").context("Missing KITE_ENCTOKEN in environment")?,
        },
    };

    let client = reqwest::Client::new();
    let ctx = RunContext::create(&args.out)?;

    let holdings = source.load(&client).await?;
    let mut portfolio = Portfolio::new(holdings);

    portfolio.enrich(&TickertapeSite::new(client), &ctx).await?;
    portfolio.finalize();
    portfolio.write_report(&ctx)?;

    if let Some(totals) = portfolio.totals() {
        println!("Total current value: {}", totals.total_current_value());
    }
    println!("Report written to {}", ctx.report_path().display());

    Ok(())
}
