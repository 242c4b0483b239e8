use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Serialize;

/// Derived figures for one holding. The percent fields are `None` when
/// the divisor is zero rather than a coerced zero.
#[derive(Clone, Debug, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct HoldingMetrics {
    total_buy_cost: Decimal,
    total_current_value: Decimal,
    profit_loss: Decimal,
    profit_loss_percent: Option<Decimal>,
    portfolio_weight_percent: Option<Decimal>,
}
