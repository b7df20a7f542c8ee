//! Static asset copying: stylesheets, images, fonts and the vendored
//! syntax highlighter are copied verbatim into the output directory.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::BuildConfig;

const STATIC_DIRS: [&str; 4] = ["imgs", "fonts", "lang", "prism"];
const STATIC_FILES: [&str; 1] = ["latex.css"];

/// Copy the static directories and files that exist under the project
/// root. Missing sources are skipped.
pub fn copy_static_assets(config: &BuildConfig) -> Result<()> {
    for dir in STATIC_DIRS {
        let source = config.root_dir.join(dir);
        if !source.is_dir() {
            debug!("Skipping absent static directory {}", source.display());
            continue;
        }

        let target = config.out_dir.join(dir);
        if target.exists() {
            std::fs::remove_dir_all(&target)
                .with_context(|| format!("Failed to clear {}", target.display()))?;
        }

        copy_dir_recursive(&source, &target)?;
        info!("Copied {dir}/ to {}", target.display());
    }

    for file in STATIC_FILES {
        let source = config.root_dir.join(file);
        if !source.is_file() {
            debug!("Skipping absent static file {}", source.display());
            continue;
        }

        let target = config.out_dir.join(file);
        std::fs::copy(&source, &target)
            .with_context(|| format!("Failed to copy {file} to {}", target.display()))?;
        info!("Copied {file} to {}", target.display());
    }

    Ok(())
}

fn copy_dir_recursive(source: &Path, target: &Path) -> Result<()> {
    std::fs::create_dir_all(target)
        .with_context(|| format!("Failed to create {}", target.display()))?;

    for entry in std::fs::read_dir(source)
        .with_context(|| format!("Failed to read {}", source.display()))?
    {
        let entry = entry?;
        let entry_target = target.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &entry_target)?;
        } else {
            std::fs::copy(entry.path(), &entry_target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    entry_target.display()
                )
            })?;
        }
    }

    Ok(())
}
