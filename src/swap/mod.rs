//! Swap-network API access: the public peer list and the daily
//! liquidity series.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::future;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const SATOSHIS_PER_BTC: f64 = 100_000_000.0;

/// One maker on the swap network.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    pub peer_id: String,
    pub multi_addr: String,
    pub testnet: bool,
    pub version: String,
    /// Quoted price in satoshis.
    pub price: u64,
    /// Swap bounds in satoshis.
    pub min_swap_amount: u64,
    pub max_swap_amount: u64,
    pub age: u64,
    pub recommended: bool,
    pub relevancy: f64,
}

/// One day of aggregate network liquidity. The API delivers the series
/// newest-first.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityDay {
    /// Calendar date as `[year, day_of_year, ...]`.
    pub date: Vec<i32>,
    /// Already denominated in BTC.
    pub total_liquidity_btc: f64,
}

/// Both datasets the statistics page consumes.
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct NetworkData {
    pub peers: Vec<Peer>,
    pub liquidity: Vec<LiquidityDay>,
}

/// Source of swap-network statistics, mockable for page tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SwapSource: Send + Sync {
    async fn network_data(&self) -> Result<NetworkData>;
}

pub struct SwapApi {
    pub client: Client,
    pub api_url: String,
}

impl SwapApi {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| "https://api.unstoppableswap.net".to_string());
        Self { client, api_url }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.api_url, path);
        debug!("Fetching {}...", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        response
            .error_for_status()
            .with_context(|| format!("Swap API responded with an error status for {path}"))?
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {path}"))
    }
}

#[async_trait]
impl SwapSource for SwapApi {
    /// Both requests go out concurrently; the build waits for both to
    /// settle before either result is used.
    #[tracing::instrument(skip(self))]
    async fn network_data(&self) -> Result<NetworkData> {
        let (peers, liquidity) = future::join(
            self.get_json::<Vec<Peer>>("/api/list"),
            self.get_json::<Vec<LiquidityDay>>("/api/liquidity-daily"),
        )
        .await;

        Ok(NetworkData {
            peers: peers?,
            liquidity: liquidity?,
        })
    }
}
