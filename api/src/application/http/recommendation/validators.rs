use lunchpick_core::domain::{
    common::entities::app_errors::CoreError,
    restaurant::value_objects::{FilterState, WalkingFilter},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct PickFilterRequest {
    /// Cuisine tag; absent or "all" means every cuisine
    #[schema(example = "한식")]
    pub cuisine: Option<String>,
    /// Maximum walking minutes as a number, or "all"; absent means no limit
    #[schema(example = 10)]
    pub max_walking_minutes: Option<WalkingLimit>,
}

/// Walking limit as sent by clients: either a number or the same text the
/// restaurant listing query accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum WalkingLimit {
    Minutes(u32),
    Text(String),
}

impl TryFrom<&PickFilterRequest> for FilterState {
    type Error = CoreError;

    fn try_from(request: &PickFilterRequest) -> Result<Self, Self::Error> {
        let mut filter = FilterState::parse(request.cuisine.as_deref(), None)?;
        filter.max_walking_minutes = match &request.max_walking_minutes {
            Some(WalkingLimit::Minutes(max)) => WalkingFilter::AtMost(*max),
            Some(WalkingLimit::Text(text)) => text.parse::<WalkingFilter>()?,
            None => WalkingFilter::All,
        };
        Ok(filter)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecommendRequest {
    #[validate(length(
        min = 1,
        max = 1000,
        message = "user_text must be between 1 and 1000 characters"
    ))]
    #[schema(example = "비 오는 날 따뜻한 국물")]
    pub user_text: String,
    #[serde(flatten)]
    pub filter: PickFilterRequest,
}

#[cfg(test)]
mod tests {
    use lunchpick_core::domain::restaurant::value_objects::CuisineFilter;

    use super::*;

    #[test]
    fn test_pick_filter_request_to_filter_state() {
        let request = PickFilterRequest {
            cuisine: Some("all".to_string()),
            max_walking_minutes: Some(WalkingLimit::Minutes(5)),
        };
        let filter = FilterState::try_from(&request).unwrap();
        assert_eq!(filter.cuisine, CuisineFilter::All);
        assert_eq!(filter.max_walking_minutes, WalkingFilter::AtMost(5));

        let filter = FilterState::try_from(&PickFilterRequest::default()).unwrap();
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_walking_limit_accepts_numbers_and_text() {
        let request: PickFilterRequest =
            serde_json::from_str(r#"{"max_walking_minutes":"all"}"#).unwrap();
        assert_eq!(
            FilterState::try_from(&request).unwrap().max_walking_minutes,
            WalkingFilter::All
        );

        let request: PickFilterRequest =
            serde_json::from_str(r#"{"max_walking_minutes":"15"}"#).unwrap();
        assert_eq!(
            FilterState::try_from(&request).unwrap().max_walking_minutes,
            WalkingFilter::AtMost(15)
        );

        let request: PickFilterRequest =
            serde_json::from_str(r#"{"max_walking_minutes":10}"#).unwrap();
        assert_eq!(
            FilterState::try_from(&request).unwrap().max_walking_minutes,
            WalkingFilter::AtMost(10)
        );

        let request: PickFilterRequest =
            serde_json::from_str(r#"{"max_walking_minutes":"soon"}"#).unwrap();
        assert!(matches!(
            FilterState::try_from(&request),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_flattened_filter_in_recommend_request() {
        let request: RecommendRequest = serde_json::from_str(
            r#"{"user_text":"국밥","cuisine":"한식","max_walking_minutes":"all"}"#,
        )
        .unwrap();
        let filter = FilterState::try_from(&request.filter).unwrap();
        assert_eq!(filter.cuisine, CuisineFilter::Only("한식".to_string()));
        assert_eq!(filter.max_walking_minutes, WalkingFilter::All);
    }

    #[test]
    fn test_recommend_request_rejects_empty_text() {
        let request = RecommendRequest {
            user_text: String::new(),
            filter: PickFilterRequest::default(),
        };
        assert!(request.validate().is_err());
    }
}
