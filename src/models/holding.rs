use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{HoldingMetrics, StockInfo};

/// One owned position. Created by the holdings source, then filled in
/// stage by stage: rename, page details, forecast, metrics. Enrichment
/// fields stay `None` when a stage has nothing for this ticker.
#[derive(Clone, Debug, Getters, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    ticker: String,
    quantity: Decimal,
    avg_buying_price: Decimal,
    last_price: Decimal,
    #[new(default)]
    name: Option<String>,
    #[new(default)]
    description: Option<String>,
    #[new(default)]
    sector: Option<String>,
    #[new(default)]
    detail_page_url: Option<String>,
    #[new(default)]
    smallcases: Vec<String>,
    #[new(default)]
    smallcase_count: Option<usize>,
    #[new(default)]
    analyst_buy_percent: Option<Decimal>,
    #[new(default)]
    metrics: Option<HoldingMetrics>,
}

impl Holding {
    /// A holding from a static ticker list, with no financial data.
    pub fn bare(ticker: String) -> Self {
        Self::new(ticker, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }

    pub fn set_ticker(&mut self, ticker: String) {
        self.ticker = ticker;
    }

    pub fn apply_info(&mut self, info: &StockInfo, detail_page_url: String) {
        self.name = info.name().clone();
        self.description = info.description().clone();
        self.sector = info.sector().clone();
        self.detail_page_url = Some(detail_page_url);
    }

    pub fn set_smallcases(&mut self, smallcases: Vec<String>) {
        if smallcases.is_empty() {
            return;
        }
        self.smallcase_count = Some(smallcases.len());
        self.smallcases = smallcases;
    }

    pub fn set_analyst_buy_percent(&mut self, percent: Decimal) {
        self.analyst_buy_percent = Some(percent);
    }

    pub fn set_metrics(&mut self, metrics: HoldingMetrics) {
        self.metrics = Some(metrics);
    }
}
