pub mod config;
pub mod logging;

pub mod control;
pub mod monitor;
pub mod output;
pub mod scrape;
pub mod url_model;
