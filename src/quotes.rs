//! Quote provider: one GET, then curation down to the display collection.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::defaults::Defaults;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl Quote {
    /// Length as the quotes service's clients count it (UTF-16 code units).
    pub fn text_len(&self) -> usize {
        self.text.encode_utf16().count()
    }
}

/// Quote fetch error types
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Quote service answered {0}")]
    Status(reqwest::StatusCode),
    #[error("Quote payload is not an array of {{text, author}} records: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Keep quotes shorter than `MAX_QUOTE_LEN`, first `MAX_QUOTES` of them, in order.
pub fn curate(quotes: impl IntoIterator<Item = Quote>) -> Vec<Quote> {
    quotes
        .into_iter()
        .filter(|q| q.text_len() < Defaults::MAX_QUOTE_LEN)
        .take(Defaults::MAX_QUOTES)
        .collect()
}

pub fn decode(body: &[u8]) -> Result<Vec<Quote>, QuoteError> {
    Ok(serde_json::from_slice(body)?)
}

#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the raw, uncurated records.
    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError>;
}

pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
}

impl HttpQuoteSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, QuoteError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch(&self) -> Result<Vec<Quote>, QuoteError> {
        debug!(url = %self.url, "requesting quotes");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status));
        }
        let body = response.bytes().await?;
        let quotes = decode(&body)?;
        info!(count = quotes.len(), "quotes received");
        Ok(quotes)
    }
}
