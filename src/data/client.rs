//! Resort feed client
//!
//! This module provides the fetch-or-cache entry point: look for a fresh
//! cached copy of the resort feed, fall back to a plain HTTP GET against the
//! feed endpoint, write the fetched document through to the cache, and map
//! the result into a `Resort`.

use chrono::Utc;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::{feed, Resort};
use crate::cache::FeedCache;

/// Default base URL of the resort feed endpoint
pub const DEFAULT_BASE_URL: &str = "http://www.nordicfrance.fr/stations/stations";

/// Errors that can occur when fetching a resort feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Feed endpoint answered with a non-success status
    #[error("Feed endpoint returned HTTP {0}")]
    HttpStatus(StatusCode),

    /// Response body is not a parseable feed document
    #[error("Failed to parse feed XML: {0}")]
    ParseError(#[from] quick_xml::DeError),
}

/// Client for fetching one resort's feed with cache fallback
///
/// The resort identifier names both the remote path segment
/// (`<base-url>/<identifier>.xml`) and the local cache file stem. A fetch is
/// one sequential cache-or-network-then-map pass; there are no retries and
/// no background refresh.
#[derive(Debug, Clone)]
pub struct ResortFeedClient {
    http: Client,
    base_url: String,
    resort_id: String,
    cache: Option<FeedCache>,
    max_age_secs: u64,
}

impl ResortFeedClient {
    /// Creates a client for the given resort identifier
    ///
    /// Uses the default feed endpoint and no cache; the first fetch always
    /// goes to the network.
    pub fn new(resort_id: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            resort_id: resort_id.into(),
            cache: None,
            max_age_secs: 0,
        }
    }

    /// Overrides the feed endpoint base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Enables the disk cache with the given maximum age in seconds
    ///
    /// A cached document whose age is at most `max_age_secs` is reused
    /// without touching the network. With an age of 0, a cached copy is
    /// only reused when fetched within the same second.
    pub fn with_cache(mut self, cache: FeedCache, max_age_secs: u64) -> Self {
        self.cache = Some(cache);
        self.max_age_secs = max_age_secs;
        self
    }

    /// Uses a custom HTTP client
    #[allow(dead_code)]
    pub fn with_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// The URL the feed is fetched from
    pub fn feed_url(&self) -> String {
        format!(
            "{}/{}.xml",
            self.base_url.trim_end_matches('/'),
            self.resort_id
        )
    }

    /// Fetches the resort feed and maps it into a `Resort`
    ///
    /// Checks the cache first; a fresh cached document that still parses is
    /// used as-is and no network request is made. Otherwise the feed is
    /// fetched from the endpoint, persisted to the cache on success, and
    /// mapped. A failed fetch leaves any existing cache file untouched.
    ///
    /// # Returns
    /// * `Ok(Resort)` - Fully populated record for the resort
    /// * `Err(FeedError)` - If the request fails, the endpoint answers with
    ///   an error status, or the body is not a parseable feed document
    pub async fn fetch(&self) -> Result<Resort, FeedError> {
        if let Some(document) = self.read_cache() {
            if let Ok(parsed) = feed::parse(&document) {
                return Ok(feed::map_resort(&parsed, Utc::now()));
            }
            // Cached copy no longer parses; fall through to the network.
        }

        let response = self.http.get(self.feed_url()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus(status));
        }

        let body = response.text().await?;
        let parsed = feed::parse(&body)?;

        if let Some(cache) = &self.cache {
            // A failed cache write must not fail an otherwise good fetch.
            let _ = cache.write(&self.resort_id, &body);
        }

        Ok(feed::map_resort(&parsed, Utc::now()))
    }

    /// Reads a fresh cached document, if caching is enabled and one exists
    fn read_cache(&self) -> Option<String> {
        self.cache.as_ref()?.read(&self.resort_id, self.max_age_secs)
    }
}
