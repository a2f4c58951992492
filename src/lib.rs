//! Skifeed library
//!
//! Exposes the feed client, cache, CLI, and report modules for use in
//! integration tests and as a library.

pub mod cache;
pub mod cli;
pub mod data;
pub mod report;
