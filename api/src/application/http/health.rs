use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(live))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveResponse {
    pub status: String,
    pub restaurants: usize,
    pub recommendations_in_flight: usize,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LiveResponse)
    )
)]
pub async fn live(State(state): State<AppState>) -> Response<LiveResponse> {
    Response::OK(LiveResponse {
        status: "ok".to_string(),
        restaurants: state.service.dataset_size(),
        recommendations_in_flight: state.service.recommendations_in_flight(),
    })
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/health/live", root_path), get(live))
}
