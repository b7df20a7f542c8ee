//! The download page flow: latest release → classified assets →
//! placeholder fragments.

use anyhow::Result;
use chrono::{DateTime, TimeDelta, Utc};
use log::info;

use crate::asset::ReleaseInfo;
use crate::config::BuildConfig;
use crate::github::{ProjectSource, Release};
use crate::render::{render_cli_table, render_gui_table};
use crate::template;

/// Classified release data plus how old the release is, when the
/// publication timestamp parses.
pub struct DownloadData {
    pub info: ReleaseInfo,
    pub release_age: Option<TimeDelta>,
}

/// Fetch the latest release (through the cache in dev mode) and
/// classify its assets. Failure here aborts the build step: the page
/// is meaningless without release data.
pub async fn generate(source: &dyn ProjectSource, config: &BuildConfig) -> Result<DownloadData> {
    let release = fetch_release(source, config).await?;

    let release_age = DateTime::parse_from_rfc3339(&release.published_at)
        .ok()
        .map(|published| Utc::now() - published.with_timezone(&Utc));

    Ok(DownloadData {
        info: ReleaseInfo::from_release(&release),
        release_age,
    })
}

async fn fetch_release(source: &dyn ProjectSource, config: &BuildConfig) -> Result<Release> {
    if !config.dev_mode {
        // Production builds always publish fresh data
        return source.latest_release().await;
    }

    let cache = config.release_cache();
    if let Some(release) = cache.load::<Release>() {
        return Ok(release);
    }

    info!("Fetching fresh release data...");
    let release = source.latest_release().await?;
    cache.store(&release);
    Ok(release)
}

/// Substitute the download placeholders in a page template.
pub fn process_template(template_text: &str, data: &DownloadData) -> String {
    let gui_table = render_gui_table(&data.info, data.release_age);
    let cli_table = render_cli_table(&data.info);

    template::substitute(
        template_text,
        &[
            (template::VERSION, data.info.version.as_str()),
            (template::RELEASE_DATE, data.info.release_date.as_str()),
            (template::GUI_TABLE, gui_table.as_str()),
            (template::CLI_TABLE, cli_table.as_str()),
            (template::HASHES_LINK, data.info.hashes_url.as_str()),
            (template::SIGNING_KEY_LINK, data.info.signing_key_url.as_str()),
        ],
    )
}
