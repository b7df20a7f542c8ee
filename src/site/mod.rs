//! Page builders and build orchestration.
//!
//! Each submodule owns one flow: fetch (with dev-mode caching),
//! transform, render, write. `build_site` wires them to the real APIs
//! and runs them over the content directory.

mod assets;
mod bounties;
mod content;
mod downloads;
mod statistics;

pub use bounties::build_bounties_page;
pub use content::build_content_pages;
pub use downloads::DownloadData;
pub use statistics::StatsData;

use anyhow::{Context, Result};
use log::info;

use crate::config::{BuildConfig, WALLET_REPO};
use crate::github::GitHub;
use crate::swap::SwapApi;

/// Build the whole site into the configured output directory.
///
/// Release data is fatal when unavailable: the download page cannot be
/// meaningful without it. Statistics degrade to placeholders, and the
/// page builders receive whatever data was obtained.
pub async fn build_site(config: &BuildConfig) -> Result<()> {
    std::fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.out_dir.display()
        )
    })?;

    let client = BuildConfig::http_client()?;
    let github = GitHub::new(client.clone(), config.github_api_url.clone(), WALLET_REPO);
    let swap = SwapApi::new(client, config.swap_api_url.clone());

    let download_data = downloads::generate(&github, config).await?;
    let stats_data = statistics::generate(&swap, config).await;

    assets::copy_static_assets(config)?;
    content::build_content_pages(config, &download_data, &stats_data)?;
    bounties::build_bounties_page(&github, config).await?;

    info!("Site built into {}", config.out_dir.display());
    Ok(())
}
