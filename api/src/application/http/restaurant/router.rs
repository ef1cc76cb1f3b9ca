use super::handlers::{
    get_cuisines::{__path_get_cuisines, get_cuisines},
    get_dataset_metadata::{__path_get_dataset_metadata, get_dataset_metadata},
    get_restaurants::{__path_get_restaurants, get_restaurants},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_restaurants, get_cuisines, get_dataset_metadata))]
pub struct RestaurantApiDoc;

pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/restaurants", state.args.server.root_path),
            get(get_restaurants),
        )
        .route(
            &format!("{}/restaurants/cuisines", state.args.server.root_path),
            get(get_cuisines),
        )
        .route(
            &format!("{}/restaurants/metadata", state.args.server.root_path),
            get(get_dataset_metadata),
        )
}
