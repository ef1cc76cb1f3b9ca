use std::collections::BTreeSet;

use rand::{Rng, seq::SliceRandom};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recommendation::ports::LLMClient,
    restaurant::{
        entities::RestaurantRecord,
        helpers::build_dataset_metadata,
        ports::{RestaurantRepository, RestaurantService},
        value_objects::{DatasetMetadata, FilterState},
    },
};

/// Every record matching both selectors, in dataset order.
pub fn filter_restaurants(records: &[RestaurantRecord], filter: &FilterState) -> Vec<RestaurantRecord> {
    records
        .iter()
        .filter(|r| filter.cuisine.matches(&r.cuisine))
        .filter(|r| {
            filter
                .max_walking_minutes
                .matches(r.effective_walking_minutes())
        })
        .cloned()
        .collect()
}

/// Uniform pick. Returns `None` for an empty slice so callers can report "no results".
pub fn select_random<'a, R: Rng + ?Sized>(
    records: &'a [RestaurantRecord],
    rng: &mut R,
) -> Option<&'a RestaurantRecord> {
    records.choose(rng)
}

impl<RR, LLM> RestaurantService for Service<RR, LLM>
where
    RR: RestaurantRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(cuisine = %filter.cuisine, max_walking_minutes = %filter.max_walking_minutes))]
    async fn list_restaurants(&self, filter: FilterState) -> Result<Vec<RestaurantRecord>, CoreError> {
        let records = self.restaurant_repository.fetch_all().await?;
        let filtered = filter_restaurants(&records, &filter);

        tracing::debug!(total = records.len(), matched = filtered.len(), "filtered restaurants");
        Ok(filtered)
    }

    async fn list_cuisines(&self) -> Result<Vec<String>, CoreError> {
        let records = self.restaurant_repository.fetch_all().await?;

        Ok(records
            .into_iter()
            .map(|r| r.cuisine)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    async fn get_dataset_metadata(&self) -> Result<DatasetMetadata, CoreError> {
        let records = self.restaurant_repository.fetch_all().await?;
        Ok(build_dataset_metadata(&records))
    }
}
