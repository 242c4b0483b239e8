use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct SummaryResponseDto {
    data: Option<SummaryDataDto>,
}

impl SummaryResponseDto {
    /// Percentage of analysts recommending buy, when the summary carries
    /// a forecast block at all. Coverage is incomplete for many symbols.
    pub fn perc_buy_reco(&self) -> Option<Decimal> {
        self.data.as_ref()?.forecast.as_ref()?.perc_buy_reco
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct SummaryDataDto {
    forecast: Option<ForecastDto>,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDto {
    perc_buy_reco: Option<Decimal>,
}
