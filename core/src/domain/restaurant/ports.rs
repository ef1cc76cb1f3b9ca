use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::RestaurantRecord,
        value_objects::{DatasetMetadata, FilterState},
    },
};

/// Read access to the immutable restaurant dataset
#[cfg_attr(test, mockall::automock)]
pub trait RestaurantRepository: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<RestaurantRecord>, CoreError>> + Send;
}

/// Service trait for browsing the dataset
pub trait RestaurantService: Send + Sync {
    fn list_restaurants(
        &self,
        filter: FilterState,
    ) -> impl Future<Output = Result<Vec<RestaurantRecord>, CoreError>> + Send;

    fn list_cuisines(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn get_dataset_metadata(
        &self,
    ) -> impl Future<Output = Result<DatasetMetadata, CoreError>> + Send;
}
