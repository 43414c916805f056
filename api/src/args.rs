use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use foodlens_core::domain::common::{ClassifierConfig, FoodLensConfig, ScraperConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "foodlens", version, about = "Food photo recognition service")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub classifier: ClassifierArgs,
    #[command(flatten)]
    pub scraper: ScraperArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
    /// Comma separated; `*` allows any origin.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClassifierArgs {
    #[arg(long, env = "HUGGINGFACE_TOKEN", hide_env_values = true)]
    pub huggingface_token: String,
    #[arg(
        long,
        env = "CLASSIFIER_BASE_URL",
        default_value = "https://api-inference.huggingface.co/models"
    )]
    pub classifier_base_url: String,
    #[arg(long, env = "CLASSIFIER_TIMEOUT_SECS", default_value_t = 15)]
    pub classifier_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ScraperArgs {
    #[arg(long, env = "DATASET_ROOT", default_value = "./world_food_dataset")]
    pub dataset_root: PathBuf,
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub unsplash_access_key: Option<String>,
    #[arg(long, env = "SCRAPE_WORKERS", default_value_t = 5)]
    pub scrape_workers: usize,
    #[arg(long, env = "SCRAPE_ON_STARTUP", default_value_t = true, action = ArgAction::Set)]
    pub scrape_on_startup: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for FoodLensConfig {
    fn from(args: Args) -> Self {
        FoodLensConfig {
            classifier: ClassifierConfig {
                api_token: args.classifier.huggingface_token,
                base_url: args.classifier.classifier_base_url,
                timeout: Duration::from_secs(args.classifier.classifier_timeout_secs),
            },
            scraper: ScraperConfig {
                dataset_root: args.scraper.dataset_root,
                webdriver_url: args.scraper.webdriver_url,
                unsplash_access_key: args.scraper.unsplash_access_key,
                workers: args.scraper.scrape_workers,
            },
        }
    }
}
