use std::time::Duration;

use crate::{
    domain::{
        catalog::FoodCatalog,
        common::{FoodLensConfig, entities::app_errors::CoreError, services::Service},
        food_analysis::entities::ClassifierModel,
    },
    infrastructure::{
        classifier::HuggingFaceClassifier,
        download::HttpImageDownloader,
        image::PhotoEnhancer,
        image_search::{BrowserImageSearch, UnsplashImageSearch},
        storage::FsDatasetStore,
    },
};

const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

pub type FoodLensService = Service<
    HuggingFaceClassifier,
    PhotoEnhancer,
    BrowserImageSearch,
    UnsplashImageSearch,
    HttpImageDownloader,
    FsDatasetStore,
>;

pub fn create_service(config: FoodLensConfig) -> Result<FoodLensService, CoreError> {
    let classifier =
        HuggingFaceClassifier::new(config.classifier.api_token, config.classifier.timeout)?;
    let browser_search = BrowserImageSearch::new(config.scraper.webdriver_url, SEARCH_TIMEOUT)?;
    let api_search = UnsplashImageSearch::new(config.scraper.unsplash_access_key, SEARCH_TIMEOUT)?;
    let downloader = HttpImageDownloader::new()?;

    Ok(Service::new(
        FoodCatalog::world(),
        ClassifierModel::defaults(&config.classifier.base_url),
        classifier,
        PhotoEnhancer,
        browser_search,
        api_search,
        downloader,
        FsDatasetStore::new(config.scraper.dataset_root),
        config.scraper.workers,
    ))
}
