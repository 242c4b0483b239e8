use rust_decimal::Decimal;

use crate::models::{Holding, HoldingMetrics, PortfolioTotals};

/// Two passes over the enriched list: portfolio-level sums first, then
/// per-holding figures. Percent fields stay `None` when their divisor is
/// zero.
pub fn compute_metrics(holdings: &mut [Holding]) -> PortfolioTotals {
    let hundred = Decimal::from(100);

    let mut sum_avg_buying_price = Decimal::ZERO;
    let mut sum_last_price = Decimal::ZERO;
    let mut total_current_value = Decimal::ZERO;

    for holding in holdings.iter() {
        sum_avg_buying_price += *holding.avg_buying_price();
        sum_last_price += *holding.last_price();
        total_current_value += *holding.last_price() * *holding.quantity();
    }

    for holding in holdings.iter_mut() {
        let total_buy_cost = *holding.avg_buying_price() * *holding.quantity();
        let current_value = *holding.last_price() * *holding.quantity();
        let profit_loss = current_value - total_buy_cost;

        let profit_loss_percent = if total_buy_cost.is_zero() {
            None
        } else {
            Some(profit_loss / total_buy_cost * hundred)
        };

        let portfolio_weight_percent = if total_current_value.is_zero() {
            None
        } else {
            Some(current_value * hundred / total_current_value)
        };

        holding.set_metrics(HoldingMetrics::new(
            total_buy_cost,
            current_value,
            profit_loss,
            profit_loss_percent,
            portfolio_weight_percent,
        ));
    }

    PortfolioTotals::new(sum_avg_buying_price, sum_last_price, total_current_value)
}
