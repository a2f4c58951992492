//! Command-line interface parsing for Skifeed
//!
//! This module handles parsing of CLI arguments using clap and resolves
//! them into the inputs the feed client is built from: resort identifier,
//! endpoint base URL, cache location, and cache max age.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::cache::FeedCache;
use crate::data::DEFAULT_BASE_URL;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The resort identifier is empty or would escape the cache directory
    #[error("Invalid resort identifier: '{0}'. Identifiers must be non-empty and contain no path separators")]
    InvalidResortId(String),
}

/// Skifeed - View ski resort conditions from the NordicFrance feed
#[derive(Parser, Debug)]
#[command(name = "skifeed")]
#[command(about = "Ski resort weather, snow, and trail conditions")]
#[command(version)]
pub struct Cli {
    /// Resort identifier, e.g. "la-clusaz"
    ///
    /// Names both the remote feed path (<base-url>/<resort>.xml) and the
    /// local cache file.
    pub resort: String,

    /// Directory for cached feed documents (defaults to the user cache dir)
    #[arg(long, value_name = "PATH")]
    pub cache_dir: Option<PathBuf>,

    /// Disable the feed cache entirely
    #[arg(long)]
    pub no_cache: bool,

    /// Maximum cache age in seconds before the feed is refetched
    #[arg(long, value_name = "SECONDS", default_value_t = 0)]
    pub max_age: u64,

    /// Feed endpoint base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

/// Resolved configuration the feed client is constructed from
#[derive(Debug)]
pub struct FetchConfig {
    /// Validated resort identifier
    pub resort: String,
    /// Feed endpoint base URL
    pub base_url: String,
    /// Cache to use, if caching is enabled and a directory is available
    pub cache: Option<FeedCache>,
    /// Maximum cache age in seconds
    pub max_age: u64,
}

/// Validates a resort identifier argument.
///
/// The identifier becomes a path segment in the feed URL and a file name in
/// the cache directory, so it must be non-empty and free of path separators
/// and parent-directory components.
pub fn validate_resort_id(id: &str) -> Result<(), CliError> {
    if id.is_empty() || id == ".." || id.contains('/') || id.contains('\\') {
        return Err(CliError::InvalidResortId(id.to_string()));
    }
    Ok(())
}

impl FetchConfig {
    /// Creates a FetchConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(FetchConfig)` with the resolved settings
    /// * `Err(CliError)` if the resort identifier is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        validate_resort_id(&cli.resort)?;

        let cache = if cli.no_cache {
            None
        } else {
            match &cli.cache_dir {
                Some(dir) => Some(FeedCache::with_dir(dir.clone())),
                // No explicit directory: fall back to the XDG cache dir,
                // or run uncached when none can be determined.
                None => FeedCache::new(),
            }
        };

        Ok(FetchConfig {
            resort: cli.resort.clone(),
            base_url: cli
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache,
            max_age: cli.max_age,
        })
    }
}
