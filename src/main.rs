//! Skifeed - View ski resort conditions from the NordicFrance feed
//!
//! Fetches one resort's XML feed (with a local disk cache in front of the
//! network), maps it into typed records, and prints a plain-text report.

mod cache;
mod cli;
mod data;
mod report;

use clap::Parser;

use cli::{Cli, FetchConfig};
use data::ResortFeedClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match FetchConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("skifeed: {}", e);
            std::process::exit(2);
        }
    };

    let mut client =
        ResortFeedClient::new(config.resort).with_base_url(config.base_url);
    if let Some(feed_cache) = config.cache {
        client = client.with_cache(feed_cache, config.max_age);
    }

    match client.fetch().await {
        Ok(resort) => {
            print!("{}", report::render(&resort));
        }
        Err(e) => {
            eprintln!("skifeed: {}", e);
            std::process::exit(1);
        }
    }
}
