use crate::application::http::{
    dataset::router::DatasetApiDoc, food_analysis::router::FoodAnalysisApiDoc,
    health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodLens API"
    ),
    tags(
        (name = "food-analysis", description = "Food recognition from photos"),
        (name = "dataset", description = "World food image dataset"),
        (name = "health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The root document with every feature router's paths merged in.
    pub fn merged() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi()
            .merge_from(FoodAnalysisApiDoc::openapi())
            .merge_from(DatasetApiDoc::openapi())
            .merge_from(HealthApiDoc::openapi())
    }
}
