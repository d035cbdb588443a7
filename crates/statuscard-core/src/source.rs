//! Presence and quote providers.
//!
//! The orchestrator only sees the two traits; [`HttpProvider`] is the
//! production implementation over reqwest. Both requests bypass caches.

#![allow(async_fn_in_trait)]

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};

use crate::config::CardConfig;
use crate::error::{LoadError, PresenceError};
use crate::presence::{parse_envelope, PresenceSnapshot};

/// Read-only presence provider.
pub trait PresenceSource {
    async fn fetch_presence(&self) -> Result<PresenceSnapshot, PresenceError>;
}

/// Read-only quotes provider returning the raw newline-delimited text.
pub trait QuoteSource {
    async fn fetch_quotes(&self) -> Result<String, LoadError>;
}

impl<T: PresenceSource + ?Sized> PresenceSource for &T {
    async fn fetch_presence(&self) -> Result<PresenceSnapshot, PresenceError> {
        (**self).fetch_presence().await
    }
}

impl<T: QuoteSource + ?Sized> QuoteSource for &T {
    async fn fetch_quotes(&self) -> Result<String, LoadError> {
        (**self).fetch_quotes().await
    }
}

/// HTTP client for both providers.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    presence_url: String,
    quotes_url: String,
}

impl HttpProvider {
    pub fn new(config: &CardConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .user_agent(concat!("statuscard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            presence_url: config.presence_url(),
            quotes_url: config.quotes_url.clone(),
        })
    }

    pub fn presence_url(&self) -> &str {
        &self.presence_url
    }

    pub fn quotes_url(&self) -> &str {
        &self.quotes_url
    }
}

impl PresenceSource for HttpProvider {
    async fn fetch_presence(&self) -> Result<PresenceSnapshot, PresenceError> {
        let response = self.client.get(&self.presence_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PresenceError::FetchFailed {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        parse_envelope(&body)
    }
}

impl QuoteSource for HttpProvider {
    async fn fetch_quotes(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.quotes_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::FetchFailed {
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}
