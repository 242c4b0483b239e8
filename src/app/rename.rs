/// Symbols that were renamed or merged on the exchange and no longer
/// resolve on the detail site under their portfolio name.
const RENAMED_TICKERS: &[(&str, &str)] = &[
    ("FLUOROCHEM-BE", "FLUOROCHEM"),
    ("MOTHERSUMI", "MOTHERSON"),
];

pub fn canonical_ticker(ticker: &str) -> &str {
    RENAMED_TICKERS
        .iter()
        .find(|(from, _)| *from == ticker)
        .map(|(_, to)| *to)
        .unwrap_or(ticker)
}
