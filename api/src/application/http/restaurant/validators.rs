use lunchpick_core::domain::{
    common::entities::app_errors::CoreError, restaurant::value_objects::FilterState,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RestaurantFilterParams {
    /// Cuisine tag, or "all"
    #[schema(example = "한식")]
    pub cuisine: Option<String>,
    /// Maximum walking minutes, or "all"
    #[schema(example = "10")]
    pub max_walking_minutes: Option<String>,
}

impl TryFrom<RestaurantFilterParams> for FilterState {
    type Error = CoreError;

    fn try_from(params: RestaurantFilterParams) -> Result<Self, Self::Error> {
        FilterState::parse(
            params.cuisine.as_deref(),
            params.max_walking_minutes.as_deref(),
        )
    }
}
