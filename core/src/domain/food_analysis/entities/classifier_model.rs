use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An externally hosted image classifier and the weight its votes carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassifierModel {
    pub name: String,
    pub endpoint: String,
    pub weight: f64,
}

/// Model paths and weights, in the order classifiers are consulted.
const DEFAULT_MODELS: [(&str, &str, f64); 4] = [
    ("Food Expert", "nateraw/food101", 0.4),
    ("Vision Master", "google/vit-base-patch16-224", 0.3),
    ("ResNet Ultra", "microsoft/resnet-50", 0.2),
    ("MobileNet Pro", "google/mobilenet_v2_1.0_224", 0.1),
];

impl ClassifierModel {
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            weight,
        }
    }

    /// The four hosted classifiers, with endpoints rooted at `base_url`.
    pub fn defaults(base_url: &str) -> Vec<Self> {
        let base_url = base_url.trim_end_matches('/');

        DEFAULT_MODELS
            .iter()
            .map(|(name, path, weight)| Self::new(*name, format!("{}/{}", base_url, path), *weight))
            .collect()
    }
}
