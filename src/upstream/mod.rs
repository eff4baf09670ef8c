pub mod models;

mod client;
mod upstream_error;

pub use client::MarketClient;
pub use upstream_error::FetchError;
