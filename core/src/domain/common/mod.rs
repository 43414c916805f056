use std::{path::PathBuf, time::Duration};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct FoodLensConfig {
    pub classifier: ClassifierConfig,
    pub scraper: ScraperConfig,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub api_token: String,
    /// Prefix joined with each model path, e.g. `https://api-inference.huggingface.co/models`.
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ScraperConfig {
    pub dataset_root: PathBuf,
    pub webdriver_url: String,
    pub unsplash_access_key: Option<String>,
    pub workers: usize,
}

#[cfg(test)]
pub(crate) mod test_support;
