use axum::extract::State;
use lunchpick_core::domain::restaurant::{ports::RestaurantService, value_objects::DatasetMetadata};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetDatasetMetadataResponse {
    pub data: DatasetMetadata,
}

#[utoipa::path(
    get,
    path = "/metadata",
    tag = "restaurant",
    summary = "Dataset metadata",
    description = "Genre, distance and data quality distribution of the loaded dataset",
    responses(
        (status = 200, body = GetDatasetMetadataResponse)
    )
)]
pub async fn get_dataset_metadata(
    State(state): State<AppState>,
) -> Result<Response<GetDatasetMetadataResponse>, ApiError> {
    let metadata = state.service.get_dataset_metadata().await?;

    Ok(Response::OK(GetDatasetMetadataResponse { data: metadata }))
}
