use std::{collections::BTreeMap, fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CuisineFilter {
    #[default]
    All,
    Only(String),
}

impl CuisineFilter {
    pub fn matches(&self, cuisine: &str) -> bool {
        match self {
            CuisineFilter::All => true,
            CuisineFilter::Only(selected) => selected == cuisine,
        }
    }
}

impl FromStr for CuisineFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_SENTINEL) {
            Ok(CuisineFilter::All)
        } else {
            Ok(CuisineFilter::Only(s.to_string()))
        }
    }
}

impl fmt::Display for CuisineFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuisineFilter::All => f.write_str(ALL_SENTINEL),
            CuisineFilter::Only(cuisine) => f.write_str(cuisine),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkingFilter {
    #[default]
    All,
    AtMost(u32),
}

impl WalkingFilter {
    pub fn matches(&self, walking_minutes: f64) -> bool {
        match self {
            WalkingFilter::All => true,
            WalkingFilter::AtMost(max) => walking_minutes <= f64::from(*max),
        }
    }
}

impl FromStr for WalkingFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(WalkingFilter::All);
        }

        s.parse::<u32>().map(WalkingFilter::AtMost).map_err(|_| {
            CoreError::InvalidInput(format!(
                "max walking minutes must be \"{ALL_SENTINEL}\" or a non-negative integer, got {s:?}"
            ))
        })
    }
}

impl fmt::Display for WalkingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkingFilter::All => f.write_str(ALL_SENTINEL),
            WalkingFilter::AtMost(max) => write!(f, "{max}"),
        }
    }
}

/// Current selection of the two filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub cuisine: CuisineFilter,
    pub max_walking_minutes: WalkingFilter,
}

impl FilterState {
    pub fn new(cuisine: CuisineFilter, max_walking_minutes: WalkingFilter) -> Self {
        Self {
            cuisine,
            max_walking_minutes,
        }
    }

    /// Parses the raw selector values; `None` means the selector was left on "all".
    pub fn parse(cuisine: Option<&str>, max_walking_minutes: Option<&str>) -> Result<Self, CoreError> {
        Ok(Self {
            cuisine: cuisine
                .map(str::parse::<CuisineFilter>)
                .transpose()?
                .unwrap_or_default(),
            max_walking_minutes: max_walking_minutes
                .map(str::parse::<WalkingFilter>)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct QualityDistribution {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

/// Summary of the loaded dataset, in the shape the scraping pipeline publishes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DatasetMetadata {
    pub total_restaurants: usize,
    pub data_quality_distribution: QualityDistribution,
    pub food_genre_distribution: BTreeMap<String, usize>,
    pub distance_distribution: BTreeMap<String, usize>,
    pub created_at: DateTime<Utc>,
    pub schema_version: String,
}
