use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeImageRequest {
    /// Base64 image, optionally as a `data:` URI.
    #[serde(default)]
    pub image: Option<String>,
}
