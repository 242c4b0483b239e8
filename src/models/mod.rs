pub mod holding;
pub mod holding_metrics;
pub mod portfolio_totals;
pub mod stock_details;

pub use holding::Holding;
pub use holding_metrics::HoldingMetrics;
pub use portfolio_totals::PortfolioTotals;
pub use stock_details::{StockDetails, StockInfo};
