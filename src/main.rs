use anyhow::Result;
use chrono::TimeDelta;
use clap::Parser;
use eigenweb::config::{BuildConfig, CACHE_TTL_MINUTES};
use log::info;
use std::path::PathBuf;

/// eigenweb - static site builder for the eigenwallet website
///
/// Converts the markdown content into HTML pages and interpolates live
/// release, statistics and bounty data fetched from public APIs.
///
/// Examples:
///   eigenweb build            # Build the site into dist/
///   eigenweb build --dev      # Reuse cached API data between rebuilds
#[derive(Parser, Debug)]
#[command(author, version = env!("EIGENWEB_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root holding content/ and the static assets (also via EIGENWEB_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "EIGENWEB_ROOT",
        value_name = "PATH",
        default_value = ".",
        global = true
    )]
    pub root_dir: PathBuf,

    /// Development mode: reuse cached API responses between rebuilds
    #[arg(long = "dev", env = "EIGENWEB_DEV", global = true)]
    pub dev: bool,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Swap API URL (defaults to https://api.unstoppableswap.net)
    #[arg(long = "swap-api-url", value_name = "URL", global = true)]
    pub swap_api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Build the site
    Build(BuildArgs),

    /// Remove the output directory
    Clean(CleanArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Output directory, relative to the project root
    #[arg(long = "out-dir", short = 'o', value_name = "PATH", default_value = "dist")]
    pub out_dir: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct CleanArgs {
    /// Output directory, relative to the project root
    #[arg(long = "out-dir", short = 'o', value_name = "PATH", default_value = "dist")]
    pub out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => {
            let config = BuildConfig {
                dev_mode: cli.dev,
                content_dir: cli.root_dir.join("content"),
                out_dir: cli.root_dir.join(&args.out_dir),
                cache_dir: cli.root_dir.clone(),
                root_dir: cli.root_dir,
                cache_ttl: TimeDelta::minutes(CACHE_TTL_MINUTES),
                github_api_url: cli.api_url,
                swap_api_url: cli.swap_api_url,
            };
            eigenweb::site::build_site(&config).await?;
        }
        Commands::Clean(args) => {
            let out_dir = cli.root_dir.join(&args.out_dir);
            if out_dir.exists() {
                std::fs::remove_dir_all(&out_dir)?;
                info!("Removed {}", out_dir.display());
            } else {
                info!("Nothing to clean at {}", out_dir.display());
            }
        }
    }
    Ok(())
}
