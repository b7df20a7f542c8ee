//! The statistics page flow: swap-network data → aggregates + chart.
//!
//! Everything here is best-effort. A failed fetch or an unusable series
//! degrades to placeholder values so the rest of the page still renders.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use log::warn;

use crate::config::BuildConfig;
use crate::render::{
    LiquidityPoint, chart_placeholder, format_amount, render_liquidity_chart,
};
use crate::swap::{LiquidityDay, NetworkData, SATOSHIS_PER_BTC, SwapSource};
use crate::template;

/// Aggregated values the statistics template interpolates.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsData {
    /// Most recent daily network liquidity, in BTC.
    pub total_liquidity: f64,
    /// Largest/smallest swap bounds across mainnet makers, in BTC.
    pub max_swap: f64,
    pub min_swap: f64,
    pub liquidity_chart: String,
    pub last_updated: String,
}

impl StatsData {
    /// Placeholder values used when no data could be obtained.
    pub fn fallback() -> Self {
        StatsData {
            total_liquidity: 0.0,
            max_swap: 0.0,
            min_swap: 0.0,
            liquidity_chart: chart_placeholder("No data available"),
            last_updated: today(),
        }
    }
}

fn today() -> String {
    Utc::now().date_naive().to_string()
}

/// Fetch and aggregate the network statistics. Never fails: any error
/// is logged and the page gets placeholder values.
pub async fn generate(source: &dyn SwapSource, config: &BuildConfig) -> StatsData {
    match fetch_network_data(source, config).await {
        Ok(data) => aggregate(&data),
        Err(err) => {
            warn!("Statistics unavailable, rendering placeholders: {err:#}");
            StatsData::fallback()
        }
    }
}

async fn fetch_network_data(
    source: &dyn SwapSource,
    config: &BuildConfig,
) -> Result<NetworkData> {
    if !config.dev_mode {
        return source.network_data().await;
    }

    let cache = config.stats_cache();
    if let Some(data) = cache.load::<NetworkData>() {
        return Ok(data);
    }

    let data = source.network_data().await?;
    cache.store(&data);
    Ok(data)
}

fn aggregate(data: &NetworkData) -> StatsData {
    let mainnet: Vec<_> = data.peers.iter().filter(|peer| !peer.testnet).collect();

    // The API delivers the series newest-first
    let total_liquidity = data
        .liquidity
        .first()
        .map(|day| day.total_liquidity_btc)
        .unwrap_or(0.0);

    let max_swap = mainnet
        .iter()
        .map(|peer| peer.max_swap_amount)
        .max()
        .unwrap_or(0) as f64
        / SATOSHIS_PER_BTC;
    let min_swap = mainnet
        .iter()
        .map(|peer| peer.min_swap_amount)
        .min()
        .unwrap_or(0) as f64
        / SATOSHIS_PER_BTC;

    let liquidity_chart = match liquidity_points(&data.liquidity) {
        Ok(points) => render_liquidity_chart(&points),
        Err(err) => {
            warn!("Liquidity chart generation failed: {err:#}");
            chart_placeholder("Chart generation failed")
        }
    };

    StatsData {
        total_liquidity,
        max_swap,
        min_swap,
        liquidity_chart,
        last_updated: today(),
    }
}

/// Convert the API's `[year, day_of_year]` dates into chronological
/// chart points.
fn liquidity_points(days: &[LiquidityDay]) -> Result<Vec<LiquidityPoint>> {
    days.iter()
        .rev()
        .map(|day| {
            let year = *day.date.first().context("Liquidity entry without a year")?;
            let day_of_year = *day
                .date
                .get(1)
                .context("Liquidity entry without a day of year")?;
            let date = NaiveDate::from_yo_opt(year, day_of_year as u32)
                .with_context(|| format!("Invalid day of year: {year}-{day_of_year}"))?;
            Ok(LiquidityPoint {
                date,
                value: day.total_liquidity_btc,
            })
        })
        .collect()
}

/// Substitute the statistics placeholders in a page template.
pub fn process_template(template_text: &str, stats: &StatsData) -> String {
    template::substitute(
        template_text,
        &[
            (template::TOTAL_LIQUIDITY, format_amount(stats.total_liquidity).as_str()),
            (template::MAX_SWAP, format_amount(stats.max_swap).as_str()),
            (template::MIN_SWAP, format_amount(stats.min_swap).as_str()),
            (template::LIQUIDITY_CHART, stats.liquidity_chart.as_str()),
            (template::LAST_UPDATED, stats.last_updated.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CACHE_TTL_MINUTES;
    use crate::swap::{MockSwapSource, Peer};
    use chrono::TimeDelta;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn peer(testnet: bool, min: u64, max: u64) -> Peer {
        Peer {
            peer_id: "12D3KooW".to_string(),
            multi_addr: "/dns4/example/tcp/9939".to_string(),
            testnet,
            version: "1.0.0".to_string(),
            price: 73_000_000,
            min_swap_amount: min,
            max_swap_amount: max,
            age: 0,
            recommended: true,
            relevancy: 1.0,
        }
    }

    fn network_data() -> NetworkData {
        NetworkData {
            peers: vec![
                peer(false, 100_000, 500_000_000),
                peer(false, 50_000, 200_000_000),
                // Testnet peers never count towards the bounds
                peer(true, 1, 1_000_000_000_000),
            ],
            liquidity: vec![
                LiquidityDay {
                    date: vec![2026, 186],
                    total_liquidity_btc: 12.5,
                },
                LiquidityDay {
                    date: vec![2026, 185],
                    total_liquidity_btc: 11.0,
                },
            ],
        }
    }

    fn config_at(cache_dir: PathBuf, dev_mode: bool) -> BuildConfig {
        BuildConfig {
            dev_mode,
            root_dir: PathBuf::from("."),
            content_dir: PathBuf::from("content"),
            out_dir: PathBuf::from("dist"),
            cache_dir,
            cache_ttl: TimeDelta::minutes(CACHE_TTL_MINUTES),
            github_api_url: None,
            swap_api_url: None,
        }
    }

    #[test]
    fn test_aggregate_computes_bounds_from_mainnet_peers() {
        let stats = aggregate(&network_data());

        assert_eq!(stats.total_liquidity, 12.5);
        assert_eq!(stats.max_swap, 5.0);
        assert_eq!(stats.min_swap, 0.0005);
        assert!(stats.liquidity_chart.contains("<svg"));
    }

    #[test]
    fn test_aggregate_without_peers_or_liquidity() {
        let stats = aggregate(&NetworkData {
            peers: vec![],
            liquidity: vec![],
        });

        assert_eq!(stats.total_liquidity, 0.0);
        assert_eq!(stats.max_swap, 0.0);
        assert!(stats.liquidity_chart.contains("No data available"));
    }

    #[test]
    fn test_liquidity_points_are_chronological() {
        let points = liquidity_points(&network_data().liquidity).unwrap();

        assert_eq!(points.len(), 2);
        assert!(points[0].date < points[1].date);
        assert_eq!(points[1].value, 12.5);
    }

    #[test]
    fn test_invalid_date_degrades_to_failed_chart() {
        let mut data = network_data();
        data.liquidity[0].date = vec![2026, 999];

        let stats = aggregate(&data);
        assert!(stats.liquidity_chart.contains("Chart generation failed"));
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back() {
        let dir = tempdir().unwrap();
        let mut source = MockSwapSource::new();
        source
            .expect_network_data()
            .returning(|| Err(anyhow::anyhow!("api down")));

        let stats = generate(&source, &config_at(dir.path().to_path_buf(), false)).await;
        assert_eq!(stats.total_liquidity, 0.0);
        assert!(stats.liquidity_chart.contains("No data available"));
    }

    #[tokio::test]
    async fn test_dev_mode_caches_network_data() {
        let dir = tempdir().unwrap();
        let config = config_at(dir.path().to_path_buf(), true);

        let mut source = MockSwapSource::new();
        source
            .expect_network_data()
            .times(1)
            .returning(|| Ok(network_data()));

        let first = generate(&source, &config).await;
        let second = generate(&source, &config).await;
        assert_eq!(first.total_liquidity, second.total_liquidity);
    }

    #[test]
    fn test_process_template_formats_amounts() {
        let stats = StatsData {
            total_liquidity: 12.5,
            max_swap: 5.0,
            min_swap: 0.0005,
            liquidity_chart: "<svg></svg>".to_string(),
            last_updated: "2026-08-06".to_string(),
        };

        let page = process_template(
            "{{TOTAL_LIQUIDITY}} / {{MAX_SWAP}} / {{MIN_SWAP}} updated {{LAST_UPDATED}}\n{{LIQUIDITY_CHART}}",
            &stats,
        );

        assert!(page.contains("12.50 / 5.00 / 0.0005 updated 2026-08-06"));
        assert!(page.contains("<svg></svg>"));
    }
}
