//! Markdown content pages: convert, interpolate data fragments, wrap in
//! the document shell, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::BuildConfig;
use crate::markdown;
use crate::template;

use super::downloads::{self, DownloadData};
use super::statistics::{self, StatsData};

/// Build every markdown file in the content directory into the output
/// directory.
pub fn build_content_pages(
    config: &BuildConfig,
    download_data: &DownloadData,
    stats: &StatsData,
) -> Result<()> {
    let files = discover_markdown_files(&config.content_dir)?;
    if files.is_empty() {
        warn!(
            "No markdown files found in {}",
            config.content_dir.display()
        );
        return Ok(());
    }

    for input in files {
        let output = config.out_dir.join(output_name(&input));
        build_file(&input, &output, download_data, stats)?;
    }

    Ok(())
}

fn discover_markdown_files(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(content_dir)
        .with_context(|| format!("Failed to read content directory {}", content_dir.display()))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();

    // Deterministic build order
    files.sort();
    Ok(files)
}

fn output_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("page");
    format!("{stem}.html")
}

fn build_file(
    input: &Path,
    output: &Path,
    download_data: &DownloadData,
    stats: &StatsData,
) -> Result<()> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read markdown file {}", input.display()))?;

    let converted = markdown::convert(&source);
    let converted = markdown::process_footnotes(&converted);

    // Data fragments are substituted after conversion so the generated
    // HTML never passes through the markdown parser
    let converted = downloads::process_template(&converted, download_data);
    let converted = statistics::process_template(&converted, stats);

    let page = markdown::extract_abstract(&converted);

    let file_name = output
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("page.html");
    let document = template::html_document(&page.abstract_html, &page.main_html, file_name);

    std::fs::write(output, document)
        .with_context(|| format!("Failed to write HTML file {}", output.display()))?;

    info!(
        "Generated {} from {}",
        output.display(),
        input.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ReleaseInfo;
    use chrono::TimeDelta;
    use tempfile::tempdir;

    fn download_data() -> DownloadData {
        DownloadData {
            info: ReleaseInfo {
                version: "1.2.3".to_string(),
                release_date: "2026-07-01".to_string(),
                hashes_url: "https://example.com/hashes.txt".to_string(),
                signing_key_url: "https://example.com/key.asc".to_string(),
                assets: vec![],
            },
            release_age: Some(TimeDelta::days(10)),
        }
    }

    fn stats_data() -> StatsData {
        StatsData {
            total_liquidity: 10.0,
            max_swap: 1.0,
            min_swap: 0.001,
            liquidity_chart: "<svg>chart</svg>".to_string(),
            last_updated: "2026-08-06".to_string(),
        }
    }

    fn config(content_dir: PathBuf, out_dir: PathBuf) -> BuildConfig {
        BuildConfig {
            dev_mode: false,
            root_dir: PathBuf::from("."),
            content_dir,
            out_dir,
            cache_dir: PathBuf::from("."),
            cache_ttl: TimeDelta::minutes(10),
            github_api_url: None,
            swap_api_url: None,
        }
    }

    #[test]
    fn test_builds_each_markdown_file() {
        let dir = tempdir().unwrap();
        let content = dir.path().join("content");
        let out = dir.path().join("dist");
        std::fs::create_dir_all(&content).unwrap();
        std::fs::create_dir_all(&out).unwrap();

        std::fs::write(content.join("index.md"), "# Welcome\n\nHello.").unwrap();
        std::fs::write(
            content.join("download.md"),
            "Latest version: {{LATEST_VERSION}}",
        )
        .unwrap();

        build_content_pages(&config(content, out.clone()), &download_data(), &stats_data())
            .unwrap();

        let index = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("<h1>Welcome</h1>"));
        assert!(index.starts_with("<!DOCTYPE html>"));

        let download = std::fs::read_to_string(out.join("download.html")).unwrap();
        assert!(download.contains("Latest version: 1.2.3"));
    }

    #[test]
    fn test_statistics_placeholders_interpolated() {
        let dir = tempdir().unwrap();
        let content = dir.path().join("content");
        let out = dir.path().join("dist");
        std::fs::create_dir_all(&content).unwrap();
        std::fs::create_dir_all(&out).unwrap();

        std::fs::write(
            content.join("statistics.md"),
            "Liquidity: {{TOTAL_LIQUIDITY}} BTC\n\n{{LIQUIDITY_CHART}}",
        )
        .unwrap();

        build_content_pages(&config(content, out.clone()), &download_data(), &stats_data())
            .unwrap();

        let page = std::fs::read_to_string(out.join("statistics.html")).unwrap();
        assert!(page.contains("Liquidity: 10.00 BTC"));
        assert!(page.contains("<svg>chart</svg>"));
    }

    #[test]
    fn test_empty_content_dir_is_not_an_error() {
        let dir = tempdir().unwrap();
        let content = dir.path().join("content");
        std::fs::create_dir_all(&content).unwrap();

        let result = build_content_pages(
            &config(content, dir.path().join("dist")),
            &download_data(),
            &stats_data(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_content_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let result = build_content_pages(
            &config(dir.path().join("absent"), dir.path().join("dist")),
            &download_data(),
            &stats_data(),
        );
        assert!(result.is_err());
    }
}
