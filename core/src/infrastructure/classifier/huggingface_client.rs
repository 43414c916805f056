use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::ClassifierModel, ports::ImageClassifier},
};

/// Client for image-classification models served by the Hugging Face
/// inference API.
#[derive(Debug, Clone)]
pub struct HuggingFaceClassifier {
    api_token: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct InferenceRequest {
    inputs: String,
}

impl InferenceRequest {
    fn jpeg(image_b64: &str) -> Self {
        Self {
            inputs: format!("data:image/jpeg;base64,{}", image_b64),
        }
    }
}

impl HuggingFaceClassifier {
    pub fn new(api_token: String, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build classifier HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self { api_token, client })
    }
}

impl ImageClassifier for HuggingFaceClassifier {
    #[instrument(skip(self, model, image_b64), fields(model = %model.name))]
    async fn classify(&self, model: ClassifierModel, image_b64: String) -> Result<Value, CoreError> {
        let response = self
            .client
            .post(&model.endpoint)
            .bearer_auth(&self.api_token)
            .json(&InferenceRequest::jpeg(&image_b64))
            .send()
            .await
            .map_err(|e| CoreError::ExternalServiceError(format!("Classifier request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!("Classifier error body: {} - {}", status, error_text);
            return Err(CoreError::UnexpectedStatus(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| {
            CoreError::UnexpectedResponse(format!("Failed to parse classifier response: {}", e))
        })
    }
}
