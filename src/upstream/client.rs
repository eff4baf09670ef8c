// client.rs
use crate::upstream::models::{
    CityCounts, CoarseFilterRequest, DetailedFilterRequest, ResultEnvelope,
};
use crate::upstream::FetchError;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

#[derive(Clone)]
pub struct MarketClient {
    client: Client,
    base_url: String,
}

impl MarketClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Reads the upstream base URL from MARKET_API_BASE.
    pub fn from_env() -> Result<Self, FetchError> {
        let base = std::env::var("MARKET_API_BASE").map_err(|_| {
            FetchError::Network("MARKET_API_BASE environment variable not set".into())
        })?;
        Self::new(base)
    }

    /// GET city-count summary: `{ "Mumbai": 120, "Pune": 48, ... }`.
    pub fn city_counts(&self) -> Result<CityCounts, FetchError> {
        let url = format!("{}/cities/counts", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        read_json(resp)
    }

    /// GET the full listing set for one city (city-tile prefetch).
    pub fn city_listings(&self, city: &str) -> Result<ResultEnvelope, FetchError> {
        let url = format!("{}/cities/{}/listings", self.base_url, city);
        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        read_json(resp)
    }

    /// POST the coarse filter (category explorer modal).
    pub fn coarse_filter(&self, req: &CoarseFilterRequest) -> Result<ResultEnvelope, FetchError> {
        self.post_json("/listings/filter", req)
    }

    /// POST the detailed filter (sidebar, extended facets).
    pub fn detailed_filter(
        &self,
        req: &DetailedFilterRequest,
    ) -> Result<ResultEnvelope, FetchError> {
        self.post_json("/listings/filter/detailed", req)
    }

    /// GET quick search. `preference` of None means the land/plot tab, which
    /// has its own endpoint and carries no preference token at all.
    pub fn quick_search(
        &self,
        preference: Option<&str>,
        location: &str,
    ) -> Result<ResultEnvelope, FetchError> {
        let req = match preference {
            Some(token) => self
                .client
                .get(format!("{}/listings/quick", self.base_url))
                .query(&[("preference", token), ("location", location)]),
            None => self
                .client
                .get(format!("{}/listings/quick/plots", self.base_url))
                .query(&[("location", location)]),
        };

        let resp = req.send().map_err(|e| FetchError::Network(e.to_string()))?;
        read_json(resp)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        read_json(resp)
    }
}

fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    let status = resp.status();

    if !status.is_success() {
        let message = resp.text().unwrap_or_default();
        return Err(FetchError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    resp.json().map_err(|e| FetchError::Decode(e.to_string()))
}
