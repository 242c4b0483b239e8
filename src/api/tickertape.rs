use anyhow::Result;
use reqwest::Client;
use rust_decimal::Decimal;

use crate::api::{tickertape_dto::SummaryResponseDto, utils::get_text};

const PAGE_BASE_URL: &str = "https://stocks.tickertape.in";
const API_BASE_URL: &str = "https://api.tickertape.in";

/// The two Tickertape lookups the pipeline needs. Kept behind a trait so
/// the orchestration loop can run against canned responses.
#[allow(async_fn_in_trait)]
pub trait StockSite {
    /// Rendered detail page for a canonical ticker.
    async fn fetch_page(&self, ticker: &str) -> Result<String>;
    /// Analyst buy percentage for the site's internal identifier, or
    /// `None` for any failure or absent forecast. Never raises.
    async fn fetch_forecast(&self, sid: &str) -> Option<Decimal>;
}

pub fn page_url(ticker: &str) -> String {
    format!("{}/{}", PAGE_BASE_URL, ticker)
}

pub async fn get_stock_page(client: &Client, ticker: &str) -> Result<String> {
    get_text(client, &page_url(ticker)).await
}

pub async fn get_forecast(client: &Client, sid: &str) -> Option<Decimal> {
    let url = format!("{}/stocks/summary/{}", API_BASE_URL, sid);
    let res = client.get(&url).send().await.ok()?;

    if !res.status().is_success() {
        return None;
    }

    let summary = res.json::<SummaryResponseDto>().await.ok()?;
    summary.perc_buy_reco()
}

#[derive(Clone, Debug)]
pub struct TickertapeSite {
    client: Client,
}

impl TickertapeSite {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl StockSite for TickertapeSite {
    async fn fetch_page(&self, ticker: &str) -> Result<String> {
        get_stock_page(&self.client, ticker).await
    }

    async fn fetch_forecast(&self, sid: &str) -> Option<Decimal> {
        get_forecast(&self.client, sid).await
    }
}
