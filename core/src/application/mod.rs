use crate::{
    domain::common::{LunchpickConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        dataset::{InMemoryRestaurantRepository, load_dataset},
        llm::GeminiLLMClient,
    },
};

pub type LunchpickService = Service<InMemoryRestaurantRepository, GeminiLLMClient>;

/// Load the dataset and wire the concrete service. A load failure is fatal.
pub async fn create_service(config: LunchpickConfig) -> Result<LunchpickService, CoreError> {
    let records = load_dataset(&config.dataset.source).await?;
    let repository = InMemoryRestaurantRepository::new(records);
    if repository.is_empty() {
        tracing::warn!(source = %config.dataset.source.name(), "dataset has no restaurants");
    }

    let llm_client = GeminiLLMClient::new(config.llm.gemini_endpoint, config.llm.gemini_model);

    Ok(Service::new(
        repository,
        llm_client,
        config.llm.gemini_api_key,
    ))
}

impl LunchpickService {
    pub fn dataset_size(&self) -> usize {
        self.restaurant_repository.len()
    }

    pub fn recommendations_in_flight(&self) -> usize {
        self.gate.in_flight()
    }
}
