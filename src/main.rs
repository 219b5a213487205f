use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use replay_meta::calculate::compute_usage_stats;
use replay_meta::config::AppConfig;
use replay_meta::fetch::{Dataset, DatasetLoader, LoaderConfig};
use replay_meta::filter::{tournament_labels, MatchFilter};
use replay_meta::render;

#[derive(Parser)]
#[command(name = "replay-meta")]
#[command(about = "Usage and winrate explorer for scraped tournament replay data")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides config
    #[arg(long)]
    log_level: Option<String>,

    /// Dataset URL (falls back to dataset_url from config)
    #[arg(long)]
    url: Option<String>,

    /// Local dataset file; takes precedence over --url
    #[arg(long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Default)]
struct FilterArgs {
    /// Only matches from this tournament (exact label)
    #[arg(long)]
    tournament: Option<String>,

    /// Only matches where a player name contains this text
    #[arg(long)]
    player: Option<String>,

    /// Only matches where a roster member name contains this text
    #[arg(long)]
    mon: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> MatchFilter {
        MatchFilter {
            tournament: self.tournament,
            player: self.player,
            roster_member: self.mon,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show filtered matches as cards
    Matches {
        #[command(flatten)]
        filter: FilterArgs,

        /// Include sprite URLs for each roster member
        #[arg(long)]
        sprites: bool,
    },

    /// Show the usage/winrate table for the filtered set
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        /// Max rows to show (default from config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List tournament labels present in the dataset
    Tournaments,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting replay-meta v{}", env!("CARGO_PKG_VERSION"));

    let dataset = load_dataset(&cli, &config).await?;
    tracing::info!(
        "Loaded {} match records from {}",
        dataset.records.len(),
        dataset.source
    );

    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Matches { filter, sprites } => {
            let filter = filter.into_filter();
            let subset = filter.apply(&dataset.records);
            render::render_cards(
                &mut stdout,
                &subset,
                filter.player.as_deref(),
                sprites,
            )?;
        }

        Commands::Stats { filter, limit } => {
            let subset = filter.into_filter().apply(&dataset.records);
            let stats = compute_usage_stats(&subset);
            let limit = limit.unwrap_or(config.stats_limit);
            render::render_stats_table(&mut stdout, &stats, limit)?;
        }

        Commands::Tournaments => {
            let labels = tournament_labels(&dataset.records);
            render::render_tournaments(&mut stdout, &labels)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Load the config file if present, falling back to defaults.
fn load_config(path: &str) -> Result<AppConfig> {
    let path_buf = PathBuf::from(path);
    if path_buf.exists() {
        AppConfig::from_file(&path_buf)
            .with_context(|| format!("Failed to load config from {}", path))
    } else {
        Ok(AppConfig::default())
    }
}

/// Resolve the dataset source (--file wins over --url, which falls back to
/// the config) and load it.
async fn load_dataset(cli: &Cli, config: &AppConfig) -> Result<Dataset> {
    let loader = DatasetLoader::new(LoaderConfig {
        timeout: Duration::from_secs(config.timeout_seconds),
        user_agent: config.user_agent.clone(),
    })?;

    if let Some(ref path) = cli.file {
        return loader
            .load_file(path)
            .await
            .with_context(|| format!("Failed to load dataset from {}", path.display()));
    }

    let url_str = match cli.url.as_deref() {
        Some(u) => u.to_string(),
        None if !config.dataset_url.is_empty() => config.dataset_url.clone(),
        None => bail!("No dataset source: pass --url or --file, or set dataset_url in config"),
    };

    let url = Url::parse(&url_str).with_context(|| format!("Invalid dataset URL: {}", url_str))?;
    loader
        .load_url(&url)
        .await
        .with_context(|| format!("Failed to load dataset from {}", url))
}
