use axum::extract::{Query, State};
use lunchpick_core::domain::restaurant::{
    entities::RestaurantRecord, ports::RestaurantService, value_objects::FilterState,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    restaurant::validators::RestaurantFilterParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetRestaurantsResponse {
    pub data: Vec<RestaurantRecord>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "",
    tag = "restaurant",
    summary = "List restaurants",
    description = "Lists the dataset filtered by cuisine and maximum walking time. Records without a walking time are excluded by any numeric limit.",
    params(RestaurantFilterParams),
    responses(
        (status = 200, body = GetRestaurantsResponse)
    )
)]
pub async fn get_restaurants(
    State(state): State<AppState>,
    Query(params): Query<RestaurantFilterParams>,
) -> Result<Response<GetRestaurantsResponse>, ApiError> {
    let filter = FilterState::try_from(params)?;

    let restaurants = state
        .service
        .list_restaurants(filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRestaurantsResponse {
        count: restaurants.len(),
        data: restaurants,
    }))
}
