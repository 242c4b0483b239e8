pub mod calc;
pub mod portfolio;
pub mod rename;
pub mod report;
pub mod run_context;
pub mod source;

pub use portfolio::Portfolio;
pub use run_context::RunContext;
pub use source::HoldingsSource;
