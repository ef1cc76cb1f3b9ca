use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the restaurant dataset.
///
/// Field names follow the public camelCase shape; the aliases accept the
/// snake_case names written by the scraping pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRecord {
    #[serde(alias = "restaurant_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "food_genre")]
    pub cuisine: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "review_count")]
    pub review_count: Option<u64>,
    #[serde(default, alias = "distance_from_office_m")]
    pub distance_meters: Option<f64>,
    #[serde(default, alias = "walking_time_min")]
    pub walking_minutes: Option<f64>,
    #[serde(default, alias = "signature_menu")]
    pub signature_dish: Option<String>,
    #[serde(default, alias = "naver_map_link")]
    pub map_link: Option<String>,
    #[serde(default, alias = "image_url")]
    pub image_url: Option<String>,
    #[serde(default, alias = "location_description")]
    pub location_description: Option<String>,
    #[serde(default, alias = "distance_category")]
    pub distance_category: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Raw category text from the source site, used to derive `cuisine`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RestaurantRecord {
    /// Walking time used by the distance filter. Records without one sort
    /// behind every real threshold.
    pub fn effective_walking_minutes(&self) -> f64 {
        self.walking_minutes.unwrap_or(UNREACHABLE_WALKING_MINUTES)
    }
}

pub const UNREACHABLE_WALKING_MINUTES: f64 = 999.0;
