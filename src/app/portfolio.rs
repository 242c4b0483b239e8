use anyhow::Result;

use crate::{
    api::{
        scrape::{self, PagePayload},
        tickertape::{self, StockSite},
    },
    app::{calc, rename, report, run_context::RunContext},
    models::{Holding, PortfolioTotals},
};

/// How far the enrichment stages got for one holding. All three are
/// terminal for that holding only; the batch always continues.
enum EnrichOutcome {
    Enriched,
    PageUnavailable,
    NotFound,
}

pub struct Portfolio {
    holdings: Vec<Holding>,
    totals: Option<PortfolioTotals>,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self {
            holdings,
            totals: None,
        }
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn totals(&self) -> Option<&PortfolioTotals> {
        self.totals.as_ref()
    }

    /// Walks the holdings in order, one at a time. Every holding is
    /// appended to the result log exactly once, whatever its enrichment
    /// outcome; per-ticker failures are written to the run log and the
    /// loop advances.
    pub async fn enrich<S: StockSite>(&mut self, site: &S, ctx: &RunContext) -> Result<()> {
        for holding in &mut self.holdings {
            let canonical = rename::canonical_ticker(holding.ticker()).to_string();
            holding.set_ticker(canonical);

            match enrich_holding(site, holding).await {
                Ok(EnrichOutcome::Enriched) => {}
                Ok(EnrichOutcome::PageUnavailable) => {
                    let line = format!("{} - API error", holding.ticker());
                    eprintln!("{}", line);
                    ctx.append_log(&line)?;
                }
                Ok(EnrichOutcome::NotFound) => {
                    let line = format!("{} - Data Not Found", holding.ticker());
                    println!("{}", line);
                    ctx.append_log(&line)?;
                }
                Err(err) => {
                    let line = format!("{} - {}", holding.ticker(), err);
                    eprintln!("{}", line);
                    ctx.append_log(&line)?;
                }
            }

            println!("{} processed", holding.ticker());
            ctx.append_result(holding)?;
        }

        Ok(())
    }

    pub fn finalize(&mut self) {
        self.totals = Some(calc::compute_metrics(&mut self.holdings));
    }

    pub fn write_report(&self, ctx: &RunContext) -> Result<()> {
        report::write_csv(ctx, &self.holdings)
    }
}

/// Fetch, extract, forecast. Only a malformed payload propagates; the
/// caller logs it against the ticker and moves on.
async fn enrich_holding<S: StockSite>(site: &S, holding: &mut Holding) -> Result<EnrichOutcome> {
    let page = match site.fetch_page(holding.ticker()).await {
        Ok(html) => html,
        Err(_) => return Ok(EnrichOutcome::PageUnavailable),
    };

    let details = match scrape::extract_details(&page)? {
        PagePayload::NotFound => return Ok(EnrichOutcome::NotFound),
        PagePayload::Found(details) => details,
    };

    if let Some(info) = details.info() {
        holding.apply_info(info, tickertape::page_url(holding.ticker()));
    }
    holding.set_smallcases(details.smallcases().clone());

    if let Some(sid) = details.sid() {
        if let Some(percent) = site.fetch_forecast(sid).await {
            holding.set_analyst_buy_percent(percent);
        }
    }

    Ok(EnrichOutcome::Enriched)
}
