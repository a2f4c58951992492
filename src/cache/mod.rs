//! Cache module for storing fetched feed documents to disk
//!
//! This module provides a cache that persists the raw XML feed to the
//! filesystem. The file's modification timestamp is the sole freshness
//! signal: a cached feed is reused only while it is younger than the
//! configured maximum age, otherwise the caller refetches.

mod store;

pub use store::FeedCache;
