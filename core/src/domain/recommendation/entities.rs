use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, restaurant::entities::RestaurantRecord,
};

/// Ordered, non-empty set of restaurants offered to a pick path.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateList(Vec<RestaurantRecord>);

#[allow(clippy::len_without_is_empty)]
impl CandidateList {
    pub fn first(&self) -> &RestaurantRecord {
        &self.0[0]
    }

    pub fn get(&self, index: usize) -> Option<&RestaurantRecord> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RestaurantRecord> {
        self.0.iter()
    }
}

impl TryFrom<Vec<RestaurantRecord>> for CandidateList {
    type Error = CoreError;

    fn try_from(records: Vec<RestaurantRecord>) -> Result<Self, Self::Error> {
        if records.is_empty() {
            return Err(CoreError::NoCandidates);
        }
        Ok(Self(records))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    pub restaurant: RestaurantRecord,
    pub reason: String,
    pub tip: String,
    pub is_model_generated: bool,
}

/// Result of the random pick path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PickOutcome {
    Picked {
        recommendation: RecommendationResult,
        candidate_count: usize,
    },
    NoResults,
}
