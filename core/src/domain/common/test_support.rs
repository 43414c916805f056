use crate::domain::{
    catalog::FoodCatalog,
    common::services::Service,
    food_analysis::{
        entities::ClassifierModel,
        ports::{MockImageClassifier, MockImageEnhancer},
    },
    scraper::ports::{MockDatasetStore, MockImageDownloader, MockImageSearchSource},
};

pub(crate) type MockService = Service<
    MockImageClassifier,
    MockImageEnhancer,
    MockImageSearchSource,
    MockImageSearchSource,
    MockImageDownloader,
    MockDatasetStore,
>;

/// One mock per port; unexpected calls panic.
pub(crate) struct MockPorts {
    pub classifier: MockImageClassifier,
    pub enhancer: MockImageEnhancer,
    pub browser_search: MockImageSearchSource,
    pub api_search: MockImageSearchSource,
    pub image_downloader: MockImageDownloader,
    pub dataset_store: MockDatasetStore,
}

impl Default for MockPorts {
    fn default() -> Self {
        Self {
            classifier: MockImageClassifier::new(),
            enhancer: MockImageEnhancer::new(),
            browser_search: MockImageSearchSource::new(),
            api_search: MockImageSearchSource::new(),
            image_downloader: MockImageDownloader::new(),
            dataset_store: MockDatasetStore::new(),
        }
    }
}

impl MockPorts {
    pub fn into_service(self, catalog: FoodCatalog) -> MockService {
        Service::new(
            catalog,
            ClassifierModel::defaults("http://models.test"),
            self.classifier,
            self.enhancer,
            self.browser_search,
            self.api_search,
            self.image_downloader,
            self.dataset_store,
            5,
        )
    }
}
