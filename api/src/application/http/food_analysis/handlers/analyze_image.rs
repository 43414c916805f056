use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use foodlens_core::domain::food_analysis::{entities::AnalysisOutcome, ports::FoodAnalysisService};

use crate::application::http::{
    food_analysis::validators::AnalyzeImageRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

pub const MISSING_IMAGE: &str = "Immagine mancante";

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "food-analysis",
    summary = "Identify the food in a photo",
    description = "Enhances the image, runs it through every classifier model in turn and \
        matches the labels against the world food catalog. When no model answers the \
        body is `{\"error\": \"Nessun modello disponibile\"}` with status 200.",
    request_body = AnalyzeImageRequest,
    responses(
        (status = 200, body = AnalysisOutcome),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<AnalyzeImageRequest>, ApiError>,
) -> Result<Response<AnalysisOutcome>, ApiError> {
    let image = payload
        .image
        .filter(|image| !image.is_empty())
        .ok_or_else(|| ApiError::BadRequest(MISSING_IMAGE.to_string()))?;

    let outcome = state.service.supreme_analysis(image).await.map_err(|e| {
        tracing::error!("Analysis failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Response::OK(outcome))
}
