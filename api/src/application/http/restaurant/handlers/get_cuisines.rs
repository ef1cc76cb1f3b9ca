use axum::extract::State;
use lunchpick_core::domain::restaurant::ports::RestaurantService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCuisinesResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/cuisines",
    tag = "restaurant",
    summary = "List cuisine tags",
    responses(
        (status = 200, body = GetCuisinesResponse)
    )
)]
pub async fn get_cuisines(
    State(state): State<AppState>,
) -> Result<Response<GetCuisinesResponse>, ApiError> {
    let cuisines = state.service.list_cuisines().await?;

    Ok(Response::OK(GetCuisinesResponse { data: cuisines }))
}
