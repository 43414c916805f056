use std::future::Future;

use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::entities::{AnalysisOutcome, ClassificationResult, ClassifierModel},
};

/// Client for hosted image classifiers
#[cfg_attr(test, mockall::automock)]
pub trait ImageClassifier: Send + Sync + 'static {
    /// Submits a base64 image to `model` and returns the decoded body of a
    /// successful response. Non-success statuses are reported as
    /// [`CoreError::UnexpectedStatus`].
    fn classify(
        &self,
        model: ClassifierModel,
        image_b64: String,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;
}

/// Fixed photo enhancement pipeline
#[cfg_attr(test, mockall::automock)]
pub trait ImageEnhancer: Send + Sync + 'static {
    /// Takes and returns a bare base64 payload.
    fn enhance(&self, image_b64: &str) -> Result<String, CoreError>;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// Enhances a data URI or raw base64 image. Falls back to the unmodified
    /// payload (prefix stripped) when the image cannot be processed.
    fn enhance_image(&self, image_data: String) -> impl Future<Output = String> + Send;

    /// Top prediction of a single model, or `None` when it gave no usable answer.
    fn analyze_with_model(
        &self,
        model: ClassifierModel,
        image_b64: String,
    ) -> impl Future<Output = Option<ClassificationResult>> + Send;

    /// Enhances the image, consults every classifier in turn and reconciles
    /// their labels against the catalog.
    fn supreme_analysis(
        &self,
        image_data: String,
    ) -> impl Future<Output = Result<AnalysisOutcome, CoreError>> + Send;
}
