mod report;
mod scrape;
mod tickertape;
