use std::{future::Future, path::PathBuf};

use bytes::Bytes;

use crate::domain::{common::entities::app_errors::CoreError, scraper::entities::DatasetStatus};

/// A source of candidate image URLs for a search phrase
#[cfg_attr(test, mockall::automock)]
pub trait ImageSearchSource: Send + Sync + 'static {
    /// Short name used in logs.
    fn source_name(&self) -> &'static str;

    fn search_images(
        &self,
        query: String,
        max_images: usize,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}

/// Fetches raw image bytes
#[cfg_attr(test, mockall::automock)]
pub trait ImageDownloader: Send + Sync + 'static {
    /// `Ok(None)` when the server answered with a non-success status.
    fn download(&self, url: String) -> impl Future<Output = Result<Option<Bytes>, CoreError>> + Send;
}

/// Local storage for scraped images
#[cfg_attr(test, mockall::automock)]
pub trait DatasetStore: Send + Sync + 'static {
    /// Creates `<root>/<directory_name>` if needed and returns its path.
    fn ensure_category_dir(
        &self,
        directory_name: String,
    ) -> impl Future<Output = Result<PathBuf, CoreError>> + Send;

    fn write_image(
        &self,
        directory: PathBuf,
        file_name: String,
        bytes: Bytes,
    ) -> impl Future<Output = Result<PathBuf, CoreError>> + Send;
}

/// Service trait for the background image scraper
#[cfg_attr(test, mockall::automock)]
pub trait ScraperService: Send + Sync {
    /// Searches both sources for one food and downloads what it can.
    /// Returns the number of images saved; failures are logged, never raised.
    fn scrape_food_category(&self, food_name: String) -> impl Future<Output = usize> + Send;

    /// Scrapes every catalog entry on a bounded pool of workers. Runs at most
    /// once per process.
    fn start_mass_scraping(&self) -> impl Future<Output = ()> + Send;

    fn dataset_status(&self) -> DatasetStatus;
}
