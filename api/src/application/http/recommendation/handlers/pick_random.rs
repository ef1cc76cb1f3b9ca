use axum::extract::State;
use lunchpick_core::domain::{
    recommendation::{entities::PickOutcome, ports::RecommendationService, value_objects::RandomPickInput},
    restaurant::value_objects::FilterState,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recommendation::validators::PickFilterRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PickRandomResponse {
    pub data: PickOutcome,
}

#[utoipa::path(
    post,
    path = "/random",
    tag = "recommendation",
    summary = "Pick a restaurant at random",
    description = "Picks uniformly from the filtered restaurants. Returns a no_results outcome when nothing matches.",
    request_body = PickFilterRequest,
    responses(
        (status = 200, body = PickRandomResponse)
    )
)]
pub async fn pick_random(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PickFilterRequest>,
) -> Result<Response<PickRandomResponse>, ApiError> {
    let filter = FilterState::try_from(&payload)?;

    let outcome = state
        .service
        .pick_random(RandomPickInput { filter })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PickRandomResponse { data: outcome }))
}
