use anyhow::{Context, Result};
use csv::Writer;

use crate::{app::RunContext, models::Holding};

const HEADER: [&str; 16] = [
    "Name",
    "Ticker",
    "Quantity",
    "Average Buying Price",
    "Last Price",
    "Description",
    "Sector",
    "Smallcases",
    "Smallcase Count",
    "Percent Of Analysts Suggesting Buy",
    "Tickertape URL",
    "Total Buy Cost",
    "Total Current Value",
    "Profit/Loss",
    "Profit/Loss %",
    "Portfolio Weight %",
];

/// Writes every holding, enriched or not, as one row. Absent optional
/// fields become empty cells.
pub fn write_csv(ctx: &RunContext, holdings: &[Holding]) -> Result<()> {
    let path = ctx.report_path();
    let mut writer = Writer::from_path(&path)
        .with_context(|| format!("Failed to create report at {}", path.display()))?;

    writer.write_record(HEADER)?;
    for holding in holdings {
        writer.write_record(to_record(holding))?;
    }
    writer.flush()?;

    Ok(())
}

fn to_record(holding: &Holding) -> Vec<String> {
    let opt = |value: &Option<String>| value.clone().unwrap_or_default();

    let metrics = holding.metrics().as_ref();
    let metric = |value: Option<String>| value.unwrap_or_default();

    vec![
        opt(holding.name()),
        holding.ticker().clone(),
        holding.quantity().to_string(),
        holding.avg_buying_price().to_string(),
        holding.last_price().to_string(),
        opt(holding.description()),
        opt(holding.sector()),
        holding.smallcases().join(","),
        holding
            .smallcase_count()
            .map(|count| count.to_string())
            .unwrap_or_default(),
        holding
            .analyst_buy_percent()
            .map(|pct| pct.to_string())
            .unwrap_or_default(),
        opt(holding.detail_page_url()),
        metric(metrics.map(|m| m.total_buy_cost().to_string())),
        metric(metrics.map(|m| m.total_current_value().to_string())),
        metric(metrics.map(|m| m.profit_loss().to_string())),
        metric(metrics.and_then(|m| m.profit_loss_percent().map(|pct| pct.to_string()))),
        metric(metrics.and_then(|m| m.portfolio_weight_percent().map(|pct| pct.to_string()))),
    ]
}
