pub mod kite;
pub mod kite_dto;
pub mod scrape;
pub mod tickertape;
pub mod tickertape_dto;
pub mod utils;
