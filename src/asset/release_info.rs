//! Aggregation of one release API response into classified download records.

use crate::github::Release;
use crate::render::format_file_size;

use super::classifier::{self, AssetKind, Platform};

/// Asset name prefixes that identify the wallet's own artifacts.
pub const GUI_PREFIX: &str = "eigenwallet_";
pub const CLI_ASB_PREFIX: &str = "asb_";
pub const CLI_SWAP_PREFIX: &str = "swap_";

const RELEASES_BASE: &str = "https://github.com/eigenwallet/core/releases/download";
const ARCHIVE_BASE: &str = "https://github.com/eigenwallet/core/archive";
const SIGNING_KEY_URL: &str = "https://github.com/eigenwallet/core/blob/main/pgp-key.asc";

/// One downloadable release file, classified and ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedAsset {
    pub display_name: String,
    pub download_url: String,
    /// Empty when no detached signature is published for this asset.
    pub signature_url: String,
    pub size_label: String,
    pub architecture: String,
    pub platform: Platform,
    pub kind: AssetKind,
}

/// Everything the download page needs about the latest release.
/// Constructed once per build and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseInfo {
    pub version: String,
    pub release_date: String,
    pub hashes_url: String,
    pub signing_key_url: String,
    pub assets: Vec<ClassifiedAsset>,
}

impl ReleaseInfo {
    /// Classify the release's assets, keeping only the wallet's own
    /// artifacts and dropping detached signatures. A release without any
    /// such artifact gets a single synthetic source-archive entry so the
    /// page always offers something to download.
    pub fn from_release(release: &Release) -> Self {
        let mut assets: Vec<ClassifiedAsset> = release
            .assets
            .iter()
            .filter(|asset| {
                (asset.name.starts_with(GUI_PREFIX)
                    || asset.name.starts_with(CLI_ASB_PREFIX)
                    || asset.name.starts_with(CLI_SWAP_PREFIX))
                    && !classifier::is_signature(&asset.name)
            })
            .map(|asset| {
                let classification = classifier::classify(&asset.name);
                ClassifiedAsset {
                    display_name: classifier::display_name(&asset.name, classification.kind),
                    download_url: asset.browser_download_url.clone(),
                    // Release automation uploads a .sig next to every artifact
                    signature_url: format!("{}.sig", asset.browser_download_url),
                    size_label: format_file_size(asset.size),
                    architecture: classification.architecture,
                    platform: classification.platform,
                    kind: classification.kind,
                }
            })
            .collect();

        if assets.is_empty() {
            assets.push(ClassifiedAsset {
                display_name: "Source Code (.tar.gz)".to_string(),
                download_url: format!("{}/{}.tar.gz", ARCHIVE_BASE, release.tag_name),
                signature_url: String::new(),
                size_label: "~2 MB".to_string(),
                architecture: String::new(),
                platform: Platform::SourceArchive,
                kind: AssetKind::Archive,
            });
        }

        let version = release
            .tag_name
            .strip_prefix('v')
            .unwrap_or(&release.tag_name)
            .to_string();

        let release_date = release
            .published_at
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string();

        ReleaseInfo {
            version,
            release_date,
            hashes_url: format!("{}/{}/hashes.txt", RELEASES_BASE, release.tag_name),
            signing_key_url: SIGNING_KEY_URL.to_string(),
            assets,
        }
    }

    /// Assets belonging to the GUI application.
    pub fn gui_assets(&self) -> Vec<&ClassifiedAsset> {
        self.assets
            .iter()
            .filter(|asset| asset.download_url.contains(GUI_PREFIX))
            .collect()
    }

    /// Assets belonging to the CLI tooling.
    pub fn cli_assets(&self) -> Vec<&ClassifiedAsset> {
        self.assets
            .iter()
            .filter(|asset| {
                asset.download_url.contains(CLI_ASB_PREFIX)
                    || asset.download_url.contains(CLI_SWAP_PREFIX)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::ReleaseAsset;

    fn release_with(names: &[&str]) -> Release {
        Release {
            tag_name: "v1.2.3".to_string(),
            published_at: "2026-07-01T12:30:00Z".to_string(),
            assets: names
                .iter()
                .map(|name| ReleaseAsset {
                    name: name.to_string(),
                    size: 2048,
                    browser_download_url: format!("https://example.com/download/{name}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_from_release_classifies_and_filters() {
        let info = ReleaseInfo::from_release(&release_with(&[
            "eigenwallet_1.2.3_linux_x86_64.AppImage",
            "eigenwallet_1.2.3_linux_x86_64.AppImage.sig",
            "swap_1.2.3_windows_x64.zip",
            "hashes.txt",
        ]));

        // Signature and non-wallet files are dropped
        assert_eq!(info.assets.len(), 2);
        assert_eq!(info.version, "1.2.3");
        assert_eq!(info.release_date, "2026-07-01");
        assert!(info.hashes_url.ends_with("/v1.2.3/hashes.txt"));

        let appimage = &info.assets[0];
        assert_eq!(appimage.platform, Platform::Linux);
        assert_eq!(appimage.kind, AssetKind::AppImage);
        assert_eq!(appimage.size_label, "2 KB");
        assert!(appimage.signature_url.ends_with(".AppImage.sig"));
    }

    #[test]
    fn test_from_release_without_artifacts_offers_source() {
        let info = ReleaseInfo::from_release(&release_with(&["checksums.txt"]));

        assert_eq!(info.assets.len(), 1);
        let source = &info.assets[0];
        assert_eq!(source.platform, Platform::SourceArchive);
        assert_eq!(source.display_name, "Source Code (.tar.gz)");
        assert!(source.download_url.ends_with("/v1.2.3.tar.gz"));
        assert!(source.signature_url.is_empty());
    }

    #[test]
    fn test_gui_and_cli_partitions() {
        let info = ReleaseInfo::from_release(&release_with(&[
            "eigenwallet_1.2.3_linux_x86_64.AppImage",
            "swap_1.2.3_linux_x86_64.tar.gz",
            "asb_1.2.3_linux_x86_64.tar.gz",
        ]));

        assert_eq!(info.gui_assets().len(), 1);
        assert_eq!(info.cli_assets().len(), 2);
    }

    #[test]
    fn test_tag_without_v_prefix() {
        let mut release = release_with(&[]);
        release.tag_name = "2.0.0".to_string();
        let info = ReleaseInfo::from_release(&release);
        assert_eq!(info.version, "2.0.0");
    }
}
