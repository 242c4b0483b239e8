use std::{fs, path::PathBuf};

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{api::kite, models::Holding};

/// Fatal failures of the holdings source. Everything downstream of the
/// source degrades per ticker instead.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Holdings request rejected ({0}); refresh the enctoken")]
    Auth(StatusCode),
    #[error("Holdings request failed")]
    Network(#[from] reqwest::Error),
    #[error("Ticker list invalid: {0}")]
    InputFormat(String),
}

pub enum HoldingsSource {
    /// The live Kite portfolio, authenticated with a browser enctoken.
    Live { enctoken: String },
    /// A JSON file holding an ordered array of ticker symbols.
    Static { path: PathBuf },
}

impl HoldingsSource {
    pub async fn load(&self, client: &Client) -> Result<Vec<Holding>, SourceError> {
        match self {
            Self::Live { enctoken } => {
                let holdings = kite::get_holdings(client, enctoken).await?;
                Ok(holdings.data().iter().map(|dto| dto.to_holding()).collect())
            }
            Self::Static { path } => {
                let text = fs::read_to_string(path)
                    .map_err(|err| SourceError::InputFormat(err.to_string()))?;
                parse_ticker_list(&text)
            }
        }
    }
}

pub fn parse_ticker_list(text: &str) -> Result<Vec<Holding>, SourceError> {
    let tickers: Vec<String> =
        serde_json::from_str(text).map_err(|err| SourceError::InputFormat(err.to_string()))?;

    if tickers.iter().any(|ticker| ticker.trim().is_empty()) {
        return Err(SourceError::InputFormat(String::from(
            "empty ticker symbol",
        )));
    }

    Ok(tickers.into_iter().map(Holding::bare).collect())
}
