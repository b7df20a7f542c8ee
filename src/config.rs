//! Build configuration.
//!
//! Everything that used to be ambient (cache location, validity window,
//! endpoints, directories) lives in one struct constructed in `main` and
//! passed down, so components stay testable with temp dirs and mock
//! servers.

use anyhow::Result;
use chrono::TimeDelta;
use reqwest::Client;
use std::path::PathBuf;

use crate::cache::{CacheStore, SystemClock};

/// Repository the release and bounty data comes from.
pub const WALLET_REPO: &str = "eigenwallet/core";

/// How long a cached API response stays valid.
pub const CACHE_TTL_MINUTES: i64 = 10;

const RELEASE_CACHE_FILE: &str = ".github-cache.json";
const STATS_CACHE_FILE: &str = ".stats-cache.json";
const BOUNTIES_CACHE_FILE: &str = ".bounties-cache.json";

pub struct BuildConfig {
    /// Development mode reuses cached API data between rebuilds.
    pub dev_mode: bool,
    /// Project root holding the static asset directories.
    pub root_dir: PathBuf,
    /// Directory of markdown page sources.
    pub content_dir: PathBuf,
    /// Where the generated site is written.
    pub out_dir: PathBuf,
    /// Where the cache files live.
    pub cache_dir: PathBuf,
    pub cache_ttl: TimeDelta,
    /// Override for the GitHub API base URL (tests point this at a mock
    /// server); `None` uses the public endpoint.
    pub github_api_url: Option<String>,
    /// Override for the swap API base URL.
    pub swap_api_url: Option<String>,
}

impl BuildConfig {
    /// Shared HTTP client for every fetcher in the build.
    pub fn http_client() -> Result<Client> {
        let client = Client::builder().user_agent("eigenweb-builder").build()?;
        Ok(client)
    }

    pub fn release_cache(&self) -> CacheStore<SystemClock> {
        CacheStore::new(self.cache_dir.join(RELEASE_CACHE_FILE), self.cache_ttl)
    }

    pub fn stats_cache(&self) -> CacheStore<SystemClock> {
        CacheStore::new(self.cache_dir.join(STATS_CACHE_FILE), self.cache_ttl)
    }

    pub fn bounties_cache(&self) -> CacheStore<SystemClock> {
        CacheStore::new(self.cache_dir.join(BOUNTIES_CACHE_FILE), self.cache_ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_paths_live_under_cache_dir() {
        let config = BuildConfig {
            dev_mode: true,
            root_dir: PathBuf::from("."),
            content_dir: PathBuf::from("content"),
            out_dir: PathBuf::from("dist"),
            cache_dir: PathBuf::from("/tmp/caches"),
            cache_ttl: TimeDelta::minutes(CACHE_TTL_MINUTES),
            github_api_url: None,
            swap_api_url: None,
        };

        // Constructing the stores must not touch the filesystem
        config.release_cache();
        config.stats_cache();
        config.bounties_cache();
    }
}
