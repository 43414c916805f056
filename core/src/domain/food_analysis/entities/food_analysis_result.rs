use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error reported when no classifier produced a usable answer.
pub const NO_MODEL_AVAILABLE: &str = "Nessun modello disponibile";

/// One `{label, score}` entry as returned by a hosted classifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassifierPrediction {
    pub label: String,
    pub score: f64,
}

/// The top prediction of one classifier, tagged with the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub label: String,
    pub score: f64,
    pub model: String,
    pub weight: f64,
}

/// A catalog entry chosen for a classifier result.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodMatch {
    pub label: String,
    pub confidence: f64,
    pub score: f64,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodIdentification {
    pub label: String,
    pub confidence: f64,
    /// Only present when the label was matched against the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub dataset_size: usize,
    pub scraped_images: u64,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Identified(FoodIdentification),
    Unavailable { error: String },
}

impl FoodIdentification {
    pub fn matched(food_match: FoodMatch, dataset_size: usize, scraped_images: u64) -> Self {
        Self {
            label: food_match.label,
            confidence: food_match.confidence,
            score: Some(food_match.score),
            dataset_size,
            scraped_images,
            success: true,
        }
    }

    pub fn unmatched(result: &ClassificationResult, dataset_size: usize, scraped_images: u64) -> Self {
        Self {
            label: result.label.clone(),
            confidence: result.score,
            score: None,
            dataset_size,
            scraped_images,
            success: true,
        }
    }
}

impl AnalysisOutcome {
    pub fn no_model_available() -> Self {
        Self::Unavailable {
            error: NO_MODEL_AVAILABLE.to_string(),
        }
    }
}
