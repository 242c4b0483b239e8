use derive_getters::Getters;
use derive_new::new;

/// Display fields from the detail page. Each is individually optional;
/// the page omits them for some instruments.
#[derive(Clone, Debug, Default, Getters, PartialEq, new)]
pub struct StockInfo {
    name: Option<String>,
    description: Option<String>,
    sector: Option<String>,
}

/// Everything extracted from one detail page: the info block, the site's
/// internal identifier used for the forecast lookup, and the smallcase
/// names the ticker belongs to, in page order.
#[derive(Clone, Debug, Default, Getters, PartialEq, new)]
pub struct StockDetails {
    info: Option<StockInfo>,
    sid: Option<String>,
    smallcases: Vec<String>,
}
