use axum::extract::State;
use foodlens_core::domain::scraper::{entities::DatasetStatus, ports::ScraperService};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[utoipa::path(
    get,
    path = "/dataset-status",
    tag = "dataset",
    summary = "Background scraper progress",
    responses(
        (status = 200, body = DatasetStatus)
    ),
)]
pub async fn get_dataset_status(State(state): State<AppState>) -> Response<DatasetStatus> {
    Response::OK(state.service.dataset_status())
}
