use super::handlers::get_dataset_status::{__path_get_dataset_status, get_dataset_status};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_dataset_status))]
pub struct DatasetApiDoc;

pub fn dataset_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/dataset-status", state.args.server.root_path),
        get(get_dataset_status),
    )
}
