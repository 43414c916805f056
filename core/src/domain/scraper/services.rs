use std::sync::Arc;

use tokio::{sync::Semaphore, task::JoinSet};
use tracing::{debug, error, info, warn};

use crate::domain::{
    common::services::Service,
    food_analysis::ports::{ImageClassifier, ImageEnhancer},
    scraper::{
        entities::{DatasetStatus, TARGET_IMAGES},
        ports::{DatasetStore, ImageDownloader, ImageSearchSource, ScraperService},
        value_objects::{
            API_SEARCH_LIMIT, BROWSER_SEARCH_LIMIT, MAX_DOWNLOADS_PER_CATEGORY,
            PROGRESS_LOG_INTERVAL, category_directory_name, image_file_name, search_query,
        },
    },
};

/// Runs one search, turning a failure into an empty result.
async fn search_source<S: ImageSearchSource>(source: &S, query: &str, max_images: usize) -> Vec<String> {
    match source.search_images(query.to_string(), max_images).await {
        Ok(urls) => {
            info!(source = source.source_name(), query, count = urls.len(), "Image search completed");
            urls
        }
        Err(e) => {
            error!(source = source.source_name(), query, "Image search failed: {}", e);
            Vec::new()
        }
    }
}

impl<IC, IE, BS, AS, DL, DS> ScraperService for Service<IC, IE, BS, AS, DL, DS>
where
    IC: ImageClassifier,
    IE: ImageEnhancer,
    BS: ImageSearchSource,
    AS: ImageSearchSource,
    DL: ImageDownloader,
    DS: DatasetStore,
{
    async fn scrape_food_category(&self, food_name: String) -> usize {
        info!(food = %food_name, "Scraping category");

        let directory = match self
            .dataset_store
            .ensure_category_dir(category_directory_name(&food_name))
            .await
        {
            Ok(directory) => directory,
            Err(e) => {
                error!(food = %food_name, "Failed to create category directory: {}", e);
                return 0;
            }
        };

        let query = search_query(&food_name);
        let mut urls = search_source(self.browser_search.as_ref(), &query, BROWSER_SEARCH_LIMIT).await;
        urls.extend(search_source(self.api_search.as_ref(), &query, API_SEARCH_LIMIT).await);

        let mut downloaded = 0;
        for (index, url) in urls.iter().enumerate() {
            if downloaded >= MAX_DOWNLOADS_PER_CATEGORY {
                break;
            }

            let bytes = match self.image_downloader.download(url.clone()).await {
                Ok(Some(bytes)) => bytes,
                Ok(None) => {
                    debug!(url = %url, "Image download rejected");
                    continue;
                }
                Err(e) => {
                    error!(url = %url, "Image download failed: {}", e);
                    continue;
                }
            };

            let file_name = image_file_name(&food_name, index, url);
            if let Err(e) = self
                .dataset_store
                .write_image(directory.clone(), file_name, bytes)
                .await
            {
                error!(url = %url, "Failed to save image: {}", e);
                continue;
            }

            downloaded += 1;
            let total = self.progress.record_download();
            if total % PROGRESS_LOG_INTERVAL == 0 {
                info!(scraped_images = total, target_images = TARGET_IMAGES, "Scraping progress");
            }
        }

        info!(food = %food_name, downloaded, "Category completed");
        downloaded
    }

    async fn start_mass_scraping(&self) {
        if !self.progress.try_start() {
            warn!(state = ?self.progress.state(), "Mass scraping already started, ignoring");
            return;
        }

        info!(
            categories = self.catalog.len(),
            target_images = TARGET_IMAGES,
            workers = self.scrape_workers,
            "Starting mass scraping"
        );

        let permits = Arc::new(Semaphore::new(self.scrape_workers));
        let mut jobs = JoinSet::new();

        for food_name in self.catalog.iter() {
            let service = self.clone();
            let permits = Arc::clone(&permits);
            let food_name = food_name.to_string();

            jobs.spawn(async move {
                let Ok(_permit) = permits.acquire_owned().await else {
                    return 0;
                };
                service.scrape_food_category(food_name).await
            });
        }

        while let Some(joined) = jobs.join_next().await {
            if let Err(e) = joined {
                error!("Scraping job failed: {}", e);
            }
        }

        self.progress.finish();
        info!(scraped_images = self.progress.scraped_images(), "Mass scraping completed");
    }

    fn dataset_status(&self) -> DatasetStatus {
        DatasetStatus::new(
            self.catalog.len(),
            self.progress.scraped_images(),
            self.progress.state(),
        )
    }
}
