#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::api::tickertape_dto::SummaryResponseDto;

    #[test]
    fn reads_buy_percentage() {
        let dto: SummaryResponseDto =
            serde_json::from_str(r#"{"data":{"forecast":{"percBuyReco":78.5}}}"#).unwrap();
        assert_eq!(dto.perc_buy_reco(), Some(dec!(78.5)));
    }

    #[test]
    fn absent_forecast_is_none() {
        let dto: SummaryResponseDto = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert_eq!(dto.perc_buy_reco(), None);

        let dto: SummaryResponseDto = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(dto.perc_buy_reco(), None);
    }
}
