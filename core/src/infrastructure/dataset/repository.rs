use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant::{entities::RestaurantRecord, ports::RestaurantRepository},
};

/// Holds the dataset loaded at startup. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct InMemoryRestaurantRepository {
    records: Arc<[RestaurantRecord]>,
}

impl InMemoryRestaurantRepository {
    pub fn new(records: Vec<RestaurantRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RestaurantRepository for InMemoryRestaurantRepository {
    async fn fetch_all(&self) -> Result<Vec<RestaurantRecord>, CoreError> {
        Ok(self.records.to_vec())
    }
}
