use crate::application::http::{
    health::HealthApiDoc, recommendation::router::RecommendationApiDoc,
    restaurant::router::RestaurantApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lunchpick API"
    ),
    nest(
        (path = "/restaurants", api = RestaurantApiDoc),
        (path = "/recommendations", api = RecommendationApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
