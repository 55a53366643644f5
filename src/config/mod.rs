pub mod toml_config;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};

pub use toml_config::TomlConfig;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_OUTPUT: &str = "data/grossing_list.csv";
const DEFAULT_CHART_URL: &str = "https://www.boxofficemojo.com/chart/ww_top_lifetime_gross/";
const DEFAULT_BASE_URL: &str = "https://www.boxofficemojo.com";
const DEFAULT_GUIDE_URL: &str = "https://www.imdb.com";
const DEFAULT_PACE_SECS: u64 = 2;

#[derive(Debug, Parser)]
#[command(name = "boxoffice-etl")]
#[command(about = "Build a rated catalog of the top-grossing films from cached chart pages")]
pub struct Cli {
    #[command(flatten)]
    pub options: Options,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the ranked chart windows into the listing cache
    FetchList,
    /// Download one detail page per listed film into the film cache
    FetchFilms,
    /// Assemble the rated catalog CSV from the caches
    Build,
}

#[derive(Debug, Args)]
pub struct Options {
    /// Root of the page caches (holds the list/ and films/ directories)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Catalog CSV path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Ranked chart URL
    #[arg(long)]
    pub chart_url: Option<String>,

    /// Site root that detail-page links are relative to
    #[arg(long)]
    pub base_url: Option<String>,

    /// Root of the fallback rating site
    #[arg(long)]
    pub guide_url: Option<String>,

    /// Fixed wait between outbound requests, in seconds
    #[arg(long)]
    pub pace_secs: Option<u64>,

    /// TOML file providing any of the options above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

/// Effective settings: CLI flags win over the config file, the config file
/// wins over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub chart_url: String,
    pub base_url: String,
    pub guide_url: String,
    pub pace: Duration,
}

impl Settings {
    pub fn resolve(options: &Options) -> Result<Self> {
        let file = options
            .config
            .as_ref()
            .map(TomlConfig::from_file)
            .transpose()?
            .unwrap_or_default();

        let settings = Self {
            data_dir: options
                .data_dir
                .clone()
                .or_else(|| file.data_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            output: options
                .output
                .clone()
                .or_else(|| file.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            chart_url: options
                .chart_url
                .clone()
                .or_else(|| file.chart_url().cloned())
                .unwrap_or_else(|| DEFAULT_CHART_URL.to_string()),
            base_url: options
                .base_url
                .clone()
                .or_else(|| file.base_url().cloned())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            guide_url: options
                .guide_url
                .clone()
                .or_else(|| file.guide_url().cloned())
                .unwrap_or_else(|| DEFAULT_GUIDE_URL.to_string()),
            pace: Duration::from_secs(
                options
                    .pace_secs
                    .or(file.pace_secs)
                    .unwrap_or(DEFAULT_PACE_SECS),
            ),
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_dir", &self.data_dir)?;
        validate_path("output", &self.output)?;
        validate_url("chart_url", &self.chart_url)?;
        validate_url("base_url", &self.base_url)?;
        validate_url("guide_url", &self.guide_url)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn chart_url(&self) -> &str {
        &self.chart_url
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn guide_url(&self) -> &str {
        &self.guide_url
    }

    fn pace(&self) -> Duration {
        self.pace
    }
}
