#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::api::scrape::{PagePayload, extract_details};

    fn page(payload: serde_json::Value) -> String {
        format!(
            "<html><head><script src=\"/app.js\"></script></head><body><script id=\"__NEXT_DATA__\" type=\"application/json\">{}</script></body></html>",
            payload
        )
    }

    #[test]
    fn extracts_info_sid_and_smallcases() {
        let html = page(json!({
            "props": {"pageProps": {
                "notFound": false,
                "overview": {"data": {"overview": {
                    "sid": "RELI",
                    "stock": {"info": {
                        "name": "Reliance Industries",
                        "description": "Energy conglomerate",
                        "sector": "Energy"
                    }}
                }}},
                "peers": {"data": {"smallcases": [
                    {"info": {"name": "Top 100 Stocks"}},
                    {"info": {"name": "House of Reliance"}}
                ]}}
            }}
        }));

        let PagePayload::Found(details) = extract_details(&html).unwrap() else {
            panic!("expected details");
        };

        let info = details.info().as_ref().unwrap();
        assert_eq!(info.name().as_deref(), Some("Reliance Industries"));
        assert_eq!(info.description().as_deref(), Some("Energy conglomerate"));
        assert_eq!(info.sector().as_deref(), Some("Energy"));
        assert_eq!(details.sid().as_deref(), Some("RELI"));
        assert_eq!(
            details.smallcases(),
            &vec![
                "Top 100 Stocks".to_string(),
                "House of Reliance".to_string()
            ]
        );
    }

    #[test]
    fn not_found_page_is_not_an_error() {
        let html = page(json!({"props": {"pageProps": {"notFound": true}}}));
        assert_eq!(extract_details(&html).unwrap(), PagePayload::NotFound);
    }

    #[test]
    fn missing_info_block_yields_empty_details() {
        let html = page(json!({"props": {"pageProps": {
            "notFound": false,
            "overview": {"data": {"overview": {"sid": "ABCD"}}}
        }}}));

        let PagePayload::Found(details) = extract_details(&html).unwrap() else {
            panic!("expected details");
        };
        assert!(details.info().is_none());
        assert_eq!(details.sid().as_deref(), Some("ABCD"));
        assert!(details.smallcases().is_empty());
    }

    #[test]
    fn missing_script_node_is_an_error() {
        assert!(extract_details("<html><body>maintenance</body></html>").is_err());
    }

    #[test]
    fn garbled_payload_is_an_error() {
        let html = "<html><script id=\"__NEXT_DATA__\">{not json}</script></html>";
        assert!(extract_details(html).is_err());
    }
}
