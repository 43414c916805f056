use std::sync::Arc;

use crate::domain::{
    catalog::FoodCatalog,
    food_analysis::{
        entities::ClassifierModel,
        ports::{ImageClassifier, ImageEnhancer},
    },
    scraper::{
        entities::ScrapeProgress,
        ports::{DatasetStore, ImageDownloader, ImageSearchSource},
    },
};

/// Application service shared by the HTTP layer and the background scraper.
///
/// `BS` is the browser-driven search (source A), `AS` the search API (source B).
pub struct Service<IC, IE, BS, AS, DL, DS>
where
    IC: ImageClassifier,
    IE: ImageEnhancer,
    BS: ImageSearchSource,
    AS: ImageSearchSource,
    DL: ImageDownloader,
    DS: DatasetStore,
{
    pub(crate) catalog: FoodCatalog,
    pub(crate) models: Arc<Vec<ClassifierModel>>,
    pub(crate) image_classifier: Arc<IC>,
    pub(crate) image_enhancer: Arc<IE>,
    pub(crate) browser_search: Arc<BS>,
    pub(crate) api_search: Arc<AS>,
    pub(crate) image_downloader: Arc<DL>,
    pub(crate) dataset_store: Arc<DS>,
    pub(crate) progress: ScrapeProgress,
    pub(crate) scrape_workers: usize,
}

impl<IC, IE, BS, AS, DL, DS> Service<IC, IE, BS, AS, DL, DS>
where
    IC: ImageClassifier,
    IE: ImageEnhancer,
    BS: ImageSearchSource,
    AS: ImageSearchSource,
    DL: ImageDownloader,
    DS: DatasetStore,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        catalog: FoodCatalog,
        models: Vec<ClassifierModel>,
        image_classifier: IC,
        image_enhancer: IE,
        browser_search: BS,
        api_search: AS,
        image_downloader: DL,
        dataset_store: DS,
        scrape_workers: usize,
    ) -> Self {
        Self {
            catalog,
            models: Arc::new(models),
            image_classifier: Arc::new(image_classifier),
            image_enhancer: Arc::new(image_enhancer),
            browser_search: Arc::new(browser_search),
            api_search: Arc::new(api_search),
            image_downloader: Arc::new(image_downloader),
            dataset_store: Arc::new(dataset_store),
            progress: ScrapeProgress::default(),
            scrape_workers: scrape_workers.max(1),
        }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn models(&self) -> &[ClassifierModel] {
        &self.models
    }

    pub fn progress(&self) -> &ScrapeProgress {
        &self.progress
    }
}

impl<IC, IE, BS, AS, DL, DS> Clone for Service<IC, IE, BS, AS, DL, DS>
where
    IC: ImageClassifier,
    IE: ImageEnhancer,
    BS: ImageSearchSource,
    AS: ImageSearchSource,
    DL: ImageDownloader,
    DS: DatasetStore,
{
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            models: Arc::clone(&self.models),
            image_classifier: Arc::clone(&self.image_classifier),
            image_enhancer: Arc::clone(&self.image_enhancer),
            browser_search: Arc::clone(&self.browser_search),
            api_search: Arc::clone(&self.api_search),
            image_downloader: Arc::clone(&self.image_downloader),
            dataset_store: Arc::clone(&self.dataset_store),
            progress: self.progress.clone(),
            scrape_workers: self.scrape_workers,
        }
    }
}
