//! Download tables grouped by platform.

use chrono::TimeDelta;

use crate::asset::{AssetKind, ClassifiedAsset, PLATFORM_ORDER, Platform, ReleaseInfo};

/// Releases younger than this may still be missing platform builds from
/// the release pipeline.
pub const FRESHNESS_WINDOW_HOURS: i64 = 72;

/// Platforms the release pipeline always produces GUI builds for.
const MAJOR_PLATFORMS: [Platform; 3] = [Platform::Linux, Platform::Windows, Platform::MacOs];

/// Render the GUI downloads table. `release_age` is the time elapsed
/// since the release was published, when known; a fresh release with
/// major-platform builds still missing gets a notice row.
pub fn render_gui_table(info: &ReleaseInfo, release_age: Option<TimeDelta>) -> String {
    let assets = info.gui_assets();
    let notice = still_building_notice(&assets, release_age);
    render_table(&assets, "GUI Downloads", notice.as_deref())
}

/// Render the CLI tools table.
pub fn render_cli_table(info: &ReleaseInfo) -> String {
    render_table(&info.cli_assets(), "CLI Tools", None)
}

/// Evaluated once per render call: a notice appears only while the
/// release is inside the freshness window and at least one major
/// platform has no asset yet.
fn still_building_notice(assets: &[&ClassifiedAsset], release_age: Option<TimeDelta>) -> Option<String> {
    let age = release_age?;
    if age >= TimeDelta::hours(FRESHNESS_WINDOW_HOURS) {
        return None;
    }

    let missing: Vec<&str> = MAJOR_PLATFORMS
        .iter()
        .filter(|platform| !assets.iter().any(|asset| asset.platform == **platform))
        .map(|platform| platform.label())
        .collect();

    if missing.is_empty() {
        return None;
    }

    Some(format!(
        r#"
    <tr>
      <td colspan="4" style="font-style: italic; padding: 0.75rem;">
        {hourglass} This release is still building. Downloads for {missing} will appear here once published.
      </td>
    </tr>"#,
        hourglass = '\u{23F3}',
        missing = missing.join(", ")
    ))
}

fn render_table(assets: &[&ClassifiedAsset], title: &str, notice: Option<&str>) -> String {
    if assets.is_empty() {
        return format!(
            "<p><em>No {} available for this release.</em></p>",
            title.to_lowercase()
        );
    }

    let mut html = String::from(
        r#"
<table>
  <thead>
    <tr>
      <th scope="col">Architecture</th>
      <th scope="col">File</th>
      <th scope="col">Signature</th>
      <th scope="col">Size</th>
    </tr>
  </thead>
  <tbody>"#,
    );

    for platform in PLATFORM_ORDER {
        let group: Vec<&&ClassifiedAsset> = assets
            .iter()
            .filter(|asset| asset.platform == platform)
            .collect();
        if group.is_empty() {
            continue;
        }

        let icon = platform.icon();

        if group.len() > 1 {
            html.push_str(&format!(
                r#"
    <tr>
      <td colspan="4" style="background-color: var(--pre-bg-color); font-weight: bold; padding: 0.75rem;">
        {icon} {label}
      </td>
    </tr>"#,
                label = platform.label()
            ));
        }

        for asset in &group {
            // A lone asset folds the platform name into its own row
            let architecture = if group.len() == 1 {
                if asset.architecture.is_empty() {
                    format!("{icon} {}", platform.label())
                } else {
                    format!("{icon} {} ({})", platform.label(), asset.architecture)
                }
            } else {
                asset.architecture.clone()
            };

            let file_name = asset
                .download_url
                .rsplit('/')
                .next()
                .unwrap_or("Unknown");
            let file_link = if asset.kind == AssetKind::Instructions {
                format!(r#"<a href="{}">Instructions</a>"#, asset.download_url)
            } else {
                format!(
                    r#"<a href="{}" style="text-decoration: none;"><code style="font-size: 0.85em; word-break: break-all;">{}</code></a>"#,
                    asset.download_url, file_name
                )
            };
            let signature_link = if asset.signature_url.is_empty() {
                String::new()
            } else {
                format!(r#"<a href="{}">signature</a>"#, asset.signature_url)
            };

            html.push_str(&format!(
                r#"
    <tr>
      <td>{architecture}</td>
      <td>{file_link}</td>
      <td>{signature_link}</td>
      <td>{size}</td>
    </tr>"#,
                size = asset.size_label
            ));
        }
    }

    if let Some(notice) = notice {
        html.push_str(notice);
    }

    html.push_str("\n  </tbody>\n</table>");
    html
}
