pub mod api;
pub mod app;
pub mod models;

mod test;
