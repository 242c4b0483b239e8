use reqwest::{Client, StatusCode, header::AUTHORIZATION};

use crate::{api::kite_dto::KiteHoldingsDto, app::source::SourceError};

const HOLDINGS_URL: &str = "https://kite.zerodha.com/oms/portfolio/holdings";

/// One authenticated request for the full holdings list. No retry; an
/// invalid or expired enctoken is fatal for the run.
pub async fn get_holdings(client: &Client, enctoken: &str) -> Result<KiteHoldingsDto, SourceError> {
    let res = client
        .get(HOLDINGS_URL)
        .header(AUTHORIZATION, enctoken)
        .send()
        .await?;

    if res.status() == StatusCode::UNAUTHORIZED || res.status() == StatusCode::FORBIDDEN {
        return Err(SourceError::Auth(res.status()));
    }

    let res = res.error_for_status()?;

    Ok(res.json::<KiteHoldingsDto>().await?)
}
