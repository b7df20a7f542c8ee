//! Timestamped JSON cache for API responses.
//!
//! Each fetching flow keeps one cache file so local development can
//! rebuild the site without hammering the APIs. A missing, expired or
//! unparsable cache is simply a miss; corruption never fails a build.

use std::path::PathBuf;

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};
use serde::{Serialize, de::DeserializeOwned};

/// Clock access behind a trait so validity tests can inject fake time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Envelope<T> {
    /// Unix timestamp in milliseconds of the cached fetch.
    timestamp: i64,
    data: T,
}

/// One cache file with a fixed validity window.
pub struct CacheStore<C: Clock> {
    path: PathBuf,
    ttl: TimeDelta,
    clock: C,
}

impl CacheStore<SystemClock> {
    pub fn new(path: PathBuf, ttl: TimeDelta) -> Self {
        Self::with_clock(path, ttl, SystemClock)
    }
}

impl<C: Clock> CacheStore<C> {
    pub fn with_clock(path: PathBuf, ttl: TimeDelta, clock: C) -> Self {
        Self { path, ttl, clock }
    }

    /// Load the cached payload if the file exists, parses, and is still
    /// inside the validity window.
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) => {
                info!("Cache file {} unreadable ({err}), fetching fresh data", self.path.display());
                return None;
            }
        };

        let envelope: Envelope<T> = match serde_json::from_str(&contents) {
            Ok(envelope) => envelope,
            Err(err) => {
                info!("Cache file {} corrupted ({err}), fetching fresh data", self.path.display());
                return None;
            }
        };

        let age_ms = self.clock.now().timestamp_millis() - envelope.timestamp;
        if age_ms < self.ttl.num_milliseconds() {
            debug!("Using cached data from {}", self.path.display());
            Some(envelope.data)
        } else {
            info!("Cache {} expired, fetching fresh data", self.path.display());
            None
        }
    }

    /// Persist a payload with the current timestamp. Failure to write is
    /// logged and ignored; the build already has the data in memory.
    pub fn store<T: Serialize>(&self, data: &T) {
        let envelope = Envelope {
            timestamp: self.clock.now().timestamp_millis(),
            data,
        };

        let result = serde_json::to_string_pretty(&envelope)
            .map_err(anyhow::Error::from)
            .and_then(|json| std::fs::write(&self.path, json).map_err(anyhow::Error::from));

        match result {
            Ok(()) => debug!("Cached data to {}", self.path.display()),
            Err(err) => warn!("Failed to save cache {}: {err}", self.path.display()),
        }
    }
}
