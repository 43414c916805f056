use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{common::entities::app_errors::CoreError, scraper::ports::ImageSearchSource};

const UNSPLASH_SEARCH_URL: &str = "https://api.unsplash.com/search/photos";

/// Photo search through the Unsplash public API. Without an access key
/// every search comes back empty.
#[derive(Debug, Clone)]
pub struct UnsplashImageSearch {
    access_key: Option<String>,
    client: Client,
    search_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

impl SearchResponse {
    fn into_urls(self) -> Vec<String> {
        self.results
            .into_iter()
            .map(|photo| photo.urls.regular)
            .collect()
    }
}

impl UnsplashImageSearch {
    pub fn new(access_key: Option<String>, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build Unsplash HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            access_key: access_key.filter(|key| !key.trim().is_empty()),
            client,
            search_url: UNSPLASH_SEARCH_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_search_url(mut self, search_url: String) -> Self {
        self.search_url = search_url;
        self
    }
}

impl ImageSearchSource for UnsplashImageSearch {
    fn source_name(&self) -> &'static str {
        "unsplash"
    }

    #[instrument(skip(self))]
    async fn search_images(&self, query: String, max_images: usize) -> Result<Vec<String>, CoreError> {
        let Some(access_key) = self.access_key.as_deref() else {
            tracing::debug!("No Unsplash access key configured, skipping");
            return Ok(Vec::new());
        };

        let per_page = max_images.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("query", query.as_str()),
                ("per_page", per_page.as_str()),
                ("client_id", access_key),
            ])
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Unsplash request failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!("Unsplash answered {}", response.status());
            return Ok(Vec::new());
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            CoreError::UnexpectedResponse(format!("Failed to parse Unsplash response: {}", e))
        })?;

        Ok(body.into_urls())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::{Arc, Mutex},
    };

    use axum::{
        Json, Router,
        extract::{Query, State},
        http::StatusCode,
        routing::get,
    };
    use serde_json::{Value, json};

    use super::*;
    use crate::infrastructure::test_server;

    type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

    async fn unsplash_answering(status: StatusCode, body: Value) -> (UnsplashImageSearch, SeenQueries) {
        let seen = SeenQueries::default();
        let router = Router::new()
            .route(
                "/search/photos",
                get(
                    move |State(seen): State<SeenQueries>, Query(query): Query<HashMap<String, String>>| async move {
                        seen.lock().unwrap().push(query);
                        (status, Json(body))
                    },
                ),
            )
            .with_state(seen.clone());
        let base_url = test_server::spawn(router).await;

        let search = UnsplashImageSearch::new(Some("unsplash-key".to_string()), Duration::from_secs(5))
            .unwrap()
            .with_search_url(format!("{}/search/photos", base_url));
        (search, seen)
    }

    #[test]
    fn regular_size_urls_are_extracted_in_order() {
        let body: SearchResponse = serde_json::from_value(json!({
            "total": 2,
            "results": [
                { "id": "a", "urls": { "regular": "https://images.unsplash.com/a", "small": "x" } },
                { "id": "b", "urls": { "regular": "https://images.unsplash.com/b" } }
            ]
        }))
        .unwrap();

        assert_eq!(
            body.into_urls(),
            vec!["https://images.unsplash.com/a", "https://images.unsplash.com/b"]
        );
    }

    #[test]
    fn missing_results_mean_no_urls() {
        let body: SearchResponse = serde_json::from_value(json!({ "total": 0 })).unwrap();
        assert!(body.into_urls().is_empty());
    }

    #[tokio::test]
    async fn searching_without_a_key_returns_nothing() {
        let search = UnsplashImageSearch::new(Some("  ".to_string()), Duration::from_secs(1)).unwrap();

        let urls = search
            .search_images("pizza food".to_string(), 50)
            .await
            .unwrap();

        assert!(urls.is_empty());
    }

    #[tokio::test]
    async fn search_sends_query_page_size_and_key() {
        let body = json!({ "results": [{ "urls": { "regular": "https://images.unsplash.com/pho" } }] });
        let (search, seen) = unsplash_answering(StatusCode::OK, body).await;

        let urls = search
            .search_images("pho food".to_string(), 50)
            .await
            .unwrap();

        assert_eq!(urls, vec!["https://images.unsplash.com/pho"]);
        let queries = seen.lock().unwrap();
        assert_eq!(queries[0]["query"], "pho food");
        assert_eq!(queries[0]["per_page"], "50");
        assert_eq!(queries[0]["client_id"], "unsplash-key");
    }

    #[tokio::test]
    async fn rejected_search_returns_nothing() {
        let body = json!({ "errors": ["Rate Limit Exceeded"] });
        let (search, _) = unsplash_answering(StatusCode::FORBIDDEN, body).await;

        let urls = search
            .search_images("pho food".to_string(), 50)
            .await
            .unwrap();

        assert!(urls.is_empty());
    }
}
