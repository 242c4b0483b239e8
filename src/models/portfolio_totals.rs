use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Portfolio-level sums. The two price sums add raw per-share prices
/// across holdings, not position totals; they are informational only —
/// the weight calculation uses `total_current_value`.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct PortfolioTotals {
    sum_avg_buying_price: Decimal,
    sum_last_price: Decimal,
    total_current_value: Decimal,
}
