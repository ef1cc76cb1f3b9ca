use super::handlers::{
    pick_random::{__path_pick_random, pick_random},
    recommend::{__path_recommend, recommend},
};
use crate::application::{
    credential_middleware::credential_middleware, http::server::app_state::AppState,
};
use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(pick_random, recommend))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recommendations/random", state.args.server.root_path),
            post(pick_random),
        )
        .route(
            &format!("{}/recommendations/ai", state.args.server.root_path),
            post(recommend),
        )
        .layer(middleware::from_fn(credential_middleware))
}
