use std::time::Duration;

use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use tracing::instrument;

use crate::domain::{common::entities::app_errors::CoreError, scraper::ports::ImageSearchSource};

const SEARCH_URL: &str = "https://www.google.com/search";
const IMAGE_SELECTOR: &str = "img[data-src], img[src]";
/// W3C identifier under which element references are returned.
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecc";

const CHROME_ARGS: &[&str] = &[
    "--headless",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--window-size=1920,1080",
    "--disable-blink-features=AutomationControlled",
];
const HIDE_WEBDRIVER_SCRIPT: &str =
    "Object.defineProperty(navigator, 'webdriver', {get: () => undefined})";
const SCROLL_SCRIPT: &str = "window.scrollTo(0, document.body.scrollHeight);";

const PAGE_LOAD_WAIT: Duration = Duration::from_secs(2);
const SCROLL_WAIT: Duration = Duration::from_secs(1);
const SCROLL_CYCLES: usize = 5;

/// Image search driven through a headless Chrome behind a WebDriver
/// endpoint (chromedriver or a Selenium grid).
#[derive(Debug, Clone)]
pub struct BrowserImageSearch {
    webdriver_url: String,
    client: Client,
    page_load_wait: Duration,
    scroll_wait: Duration,
}

#[derive(Debug, Deserialize)]
struct WebDriverReply<T> {
    value: T,
}

#[derive(Debug, Deserialize)]
struct NewSession {
    #[serde(rename = "sessionId")]
    session_id: String,
}

/// An open browser session. Deleted by `close`, or in the background if the
/// session is dropped without being closed.
struct BrowserSession {
    client: Client,
    session_url: String,
    closed: bool,
}

impl BrowserImageSearch {
    pub fn new(webdriver_url: impl Into<String>, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build WebDriver HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            webdriver_url: webdriver_url.into().trim_end_matches('/').to_string(),
            client,
            page_load_wait: PAGE_LOAD_WAIT,
            scroll_wait: SCROLL_WAIT,
        })
    }

    #[cfg(test)]
    fn without_waits(mut self) -> Self {
        self.page_load_wait = Duration::ZERO;
        self.scroll_wait = Duration::ZERO;
        self
    }

    pub fn search_url(query: &str) -> String {
        format!("{}?q={}&tbm=isch", SEARCH_URL, urlencoding::encode(query))
    }

    fn capabilities() -> Value {
        json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": "chrome",
                    "goog:chromeOptions": {
                        "args": CHROME_ARGS,
                        "excludeSwitches": ["enable-automation"],
                        "useAutomationExtension": false
                    }
                }
            }
        })
    }

    async fn open_session(&self) -> Result<BrowserSession, CoreError> {
        let response = self
            .client
            .post(format!("{}/session", self.webdriver_url))
            .json(&Self::capabilities())
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("WebDriver unreachable: {}", e)))?;

        let session: NewSession = read_value(response).await?;
        let browser = BrowserSession {
            client: self.client.clone(),
            session_url: format!("{}/session/{}", self.webdriver_url, session.session_id),
            closed: false,
        };

        browser.execute(HIDE_WEBDRIVER_SCRIPT).await?;
        Ok(browser)
    }

    async fn collect_image_urls(
        &self,
        browser: &BrowserSession,
        query: &str,
        max_images: usize,
    ) -> Result<Vec<String>, CoreError> {
        browser.navigate(&Self::search_url(query)).await?;
        tokio::time::sleep(self.page_load_wait).await;

        for _ in 0..SCROLL_CYCLES {
            browser.execute(SCROLL_SCRIPT).await?;
            tokio::time::sleep(self.scroll_wait).await;
        }

        let elements = browser.find_elements(IMAGE_SELECTOR).await?;
        let mut urls = Vec::new();
        for element in elements.iter().take(max_images) {
            // A stale element only costs that one image.
            let data_src = browser.attribute(element, "data-src").await.ok().flatten();
            let src = match data_src.as_deref() {
                Some(value) if !value.is_empty() => None,
                _ => browser.attribute(element, "src").await.ok().flatten(),
            };

            if let Some(url) = pick_image_url(data_src, src) {
                urls.push(url);
            }
        }

        Ok(urls)
    }
}

/// Lazy-load attribute first, then `src`; only absolute http(s) URLs count.
fn pick_image_url(data_src: Option<String>, src: Option<String>) -> Option<String> {
    data_src
        .filter(|value| !value.is_empty())
        .or(src)
        .filter(|value| value.starts_with("http"))
}

async fn read_value<T: DeserializeOwned>(response: Response) -> Result<T, CoreError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("WebDriver error body: {} - {}", status, body);
        return Err(CoreError::UnexpectedStatus(status.as_u16()));
    }

    response
        .json::<WebDriverReply<T>>()
        .await
        .map(|reply| reply.value)
        .map_err(|e| CoreError::UnexpectedResponse(format!("Invalid WebDriver reply: {}", e)))
}

fn transport_error(e: reqwest::Error) -> CoreError {
    CoreError::ExternalServiceError(format!("WebDriver request failed: {}", e))
}

impl BrowserSession {
    async fn navigate(&self, url: &str) -> Result<(), CoreError> {
        let response = self
            .client
            .post(format!("{}/url", self.session_url))
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(transport_error)?;
        read_value::<Value>(response).await.map(|_| ())
    }

    async fn execute(&self, script: &str) -> Result<Value, CoreError> {
        let response = self
            .client
            .post(format!("{}/execute/sync", self.session_url))
            .json(&json!({ "script": script, "args": [] }))
            .send()
            .await
            .map_err(transport_error)?;
        read_value(response).await
    }

    async fn find_elements(&self, css_selector: &str) -> Result<Vec<String>, CoreError> {
        let response = self
            .client
            .post(format!("{}/elements", self.session_url))
            .json(&json!({ "using": "css selector", "value": css_selector }))
            .send()
            .await
            .map_err(transport_error)?;

        let elements: Vec<Value> = read_value(response).await?;
        Ok(elements
            .iter()
            .filter_map(|element| element.get(ELEMENT_KEY)?.as_str().map(str::to_string))
            .collect())
    }

    async fn attribute(&self, element: &str, name: &str) -> Result<Option<String>, CoreError> {
        let response = self
            .client
            .get(format!("{}/element/{}/attribute/{}", self.session_url, element, name))
            .send()
            .await
            .map_err(transport_error)?;
        read_value(response).await
    }

    async fn close(mut self) {
        self.closed = true;
        if let Err(e) = self.client.delete(&self.session_url).send().await {
            tracing::warn!("Failed to close browser session: {}", e);
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let request = self.client.delete(&self.session_url);
            handle.spawn(async move {
                let _ = request.send().await;
            });
        }
    }
}

impl ImageSearchSource for BrowserImageSearch {
    fn source_name(&self) -> &'static str {
        "browser"
    }

    #[instrument(skip(self))]
    async fn search_images(&self, query: String, max_images: usize) -> Result<Vec<String>, CoreError> {
        let browser = self.open_session().await?;
        let result = self.collect_image_urls(&browser, &query, max_images).await;
        browser.close().await;
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
        routing::{delete, get, post},
    };

    use super::*;
    use crate::infrastructure::test_server;

    /// In-memory WebDriver endpoint that records every call it receives.
    #[derive(Clone, Default)]
    struct FakeDriver {
        calls: Arc<Mutex<Vec<String>>>,
        fail_navigation: bool,
    }

    impl FakeDriver {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn router(&self) -> Router {
            Router::new()
                .route("/session", post(new_session))
                .route("/session/{id}", delete(delete_session))
                .route("/session/{id}/execute/sync", post(execute))
                .route("/session/{id}/url", post(navigate))
                .route("/session/{id}/elements", post(find_elements))
                .route(
                    "/session/{id}/element/{element}/attribute/{name}",
                    get(attribute),
                )
                .with_state(self.clone())
        }
    }

    fn element(id: &str) -> Value {
        let mut reference = serde_json::Map::new();
        reference.insert(ELEMENT_KEY.to_string(), Value::from(id));
        Value::Object(reference)
    }

    async fn new_session(State(driver): State<FakeDriver>) -> Json<Value> {
        driver.record("new session".to_string());
        Json(json!({ "value": { "sessionId": "s1", "capabilities": {} } }))
    }

    async fn delete_session(
        State(driver): State<FakeDriver>,
        Path(id): Path<String>,
    ) -> Json<Value> {
        driver.record(format!("delete {}", id));
        Json(json!({ "value": null }))
    }

    async fn execute(Path(_id): Path<String>) -> Json<Value> {
        Json(json!({ "value": null }))
    }

    async fn navigate(
        State(driver): State<FakeDriver>,
        Path(_id): Path<String>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        driver.record(format!("navigate {}", body["url"].as_str().unwrap_or_default()));
        if driver.fail_navigation {
            let error = json!({ "value": { "error": "unknown error", "message": "renderer crashed" } });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(error));
        }
        (StatusCode::OK, Json(json!({ "value": null })))
    }

    async fn find_elements(Path(_id): Path<String>) -> Json<Value> {
        Json(json!({ "value": [element("e1"), element("e2"), element("e3")] }))
    }

    async fn attribute(
        State(driver): State<FakeDriver>,
        Path((_id, element, name)): Path<(String, String, String)>,
    ) -> Json<Value> {
        driver.record(format!("attribute {} {}", element, name));
        let value = match (element.as_str(), name.as_str()) {
            ("e1", "data-src") => json!("https://cdn.test/lazy.jpg"),
            ("e1", "src") => json!("https://cdn.test/eager.jpg"),
            ("e2", "src") => json!("http://cdn.test/plain.png"),
            ("e3", "data-src") => json!(""),
            ("e3", "src") => json!("data:image/gif;base64,R0lGOD"),
            _ => Value::Null,
        };
        Json(json!({ "value": value }))
    }

    async fn search_against(driver: &FakeDriver) -> BrowserImageSearch {
        let url = test_server::spawn(driver.router()).await;
        BrowserImageSearch::new(url, Duration::from_secs(5))
            .unwrap()
            .without_waits()
    }

    #[test]
    fn search_url_targets_image_results() {
        assert_eq!(
            BrowserImageSearch::search_url("sea bass food"),
            "https://www.google.com/search?q=sea%20bass%20food&tbm=isch"
        );
    }

    #[test]
    fn capabilities_request_headless_chrome_without_automation_flags() {
        let capabilities = BrowserImageSearch::capabilities();
        let options = &capabilities["capabilities"]["alwaysMatch"]["goog:chromeOptions"];

        assert_eq!(options["args"][0], "--headless");
        assert_eq!(options["excludeSwitches"], json!(["enable-automation"]));
        assert_eq!(options["useAutomationExtension"], json!(false));
    }

    #[test]
    fn lazy_load_attribute_wins_over_src() {
        let url = pick_image_url(
            Some("https://cdn.test/lazy.jpg".to_string()),
            Some("https://cdn.test/eager.jpg".to_string()),
        );
        assert_eq!(url.as_deref(), Some("https://cdn.test/lazy.jpg"));
    }

    #[test]
    fn empty_lazy_load_attribute_falls_back_to_src() {
        let url = pick_image_url(Some(String::new()), Some("http://cdn.test/a.png".to_string()));
        assert_eq!(url.as_deref(), Some("http://cdn.test/a.png"));
    }

    #[test]
    fn inline_images_are_skipped() {
        assert_eq!(pick_image_url(None, Some("data:image/gif;base64,R0lG".to_string())), None);
        assert_eq!(pick_image_url(None, None), None);
    }

    #[tokio::test]
    async fn unreachable_driver_is_an_error() {
        let search = BrowserImageSearch::new("http://127.0.0.1:9/", Duration::from_secs(2)).unwrap();

        let err = search
            .search_images("tofu food".to_string(), 100)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn search_collects_http_urls_and_closes_the_session() {
        let driver = FakeDriver::default();
        let search = search_against(&driver).await;

        let urls = search
            .search_images("tofu food".to_string(), 100)
            .await
            .unwrap();

        assert_eq!(urls, vec!["https://cdn.test/lazy.jpg", "http://cdn.test/plain.png"]);

        let calls = driver.calls();
        assert!(calls.contains(&"navigate https://www.google.com/search?q=tofu%20food&tbm=isch".to_string()));
        assert!(!calls.contains(&"attribute e1 src".to_string()));
        assert_eq!(calls.last().map(String::as_str), Some("delete s1"));
    }

    #[tokio::test]
    async fn only_the_first_elements_up_to_the_limit_are_read() {
        let driver = FakeDriver::default();
        let search = search_against(&driver).await;

        let urls = search
            .search_images("tofu food".to_string(), 1)
            .await
            .unwrap();

        assert_eq!(urls, vec!["https://cdn.test/lazy.jpg"]);
        assert!(!driver.calls().iter().any(|call| call.starts_with("attribute e2")));
    }

    #[tokio::test]
    async fn failed_navigation_still_closes_the_session() {
        let driver = FakeDriver {
            fail_navigation: true,
            ..FakeDriver::default()
        };
        let search = search_against(&driver).await;

        let err = search
            .search_images("tofu food".to_string(), 100)
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::UnexpectedStatus(500));
        assert!(driver.calls().contains(&"delete s1".to_string()));
    }

    #[tokio::test]
    async fn dropped_session_is_deleted_in_the_background() {
        let driver = FakeDriver::default();
        let search = search_against(&driver).await;

        let browser = search.open_session().await.unwrap();
        drop(browser);

        for _ in 0..100 {
            if driver.calls().contains(&"delete s1".to_string()) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(driver.calls().contains(&"delete s1".to_string()));
    }
}
