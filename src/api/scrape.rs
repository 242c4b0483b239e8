use anyhow::{Context, Result};
use regex::Regex;
use serde_json::Value;

use crate::models::{StockDetails, StockInfo};

const NEXT_DATA_PATTERN: &str = r#"(?s)<script[^>]*id="__NEXT_DATA__"[^>]*>(.*?)</script>"#;

/// Outcome of one page extraction. `NotFound` is a normal result for
/// delisted or renamed tickers, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum PagePayload {
    Found(StockDetails),
    NotFound,
}

/// Recovers the JSON payload embedded in the page's `__NEXT_DATA__`
/// script and reads the shape `props.pageProps.{notFound, overview.data,
/// peers.data.smallcases}`. A missing script node or unparseable payload
/// is an error; a missing info block or smallcase list is not.
pub fn extract_details(html: &str) -> Result<PagePayload> {
    let re = Regex::new(NEXT_DATA_PATTERN).context("Invalid payload pattern")?;

    let caps = re
        .captures(html)
        .context("Page payload script not found")?;
    let body = caps
        .get(1)
        .context("Page payload script is empty")?
        .as_str();

    let root: Value = serde_json::from_str(body).context("Page payload is not valid JSON")?;
    let page_props = root
        .pointer("/props/pageProps")
        .context("Page payload has no pageProps")?;

    if page_props
        .get("notFound")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return Ok(PagePayload::NotFound);
    }

    let overview = page_props.pointer("/overview/data/overview");

    let info = overview
        .and_then(|v| v.pointer("/stock/info"))
        .map(|v| {
            StockInfo::new(
                string_field(v, "name"),
                string_field(v, "description"),
                string_field(v, "sector"),
            )
        });

    let sid = overview
        .and_then(|v| v.get("sid"))
        .and_then(Value::as_str)
        .map(String::from);

    let smallcases = page_props
        .pointer("/peers/data/smallcases")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    entry
                        .pointer("/info/name")
                        .and_then(Value::as_str)
                        .map(String::from)
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(PagePayload::Found(StockDetails::new(info, sid, smallcases)))
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(String::from)
}
