use crate::domain::{
    recommendation::{gate::RecommendationGate, ports::LLMClient},
    restaurant::ports::RestaurantRepository,
};

/// Application state shared by every use case. Built once at startup and passed
/// explicitly to callers instead of living in module-level globals.
#[derive(Clone)]
pub struct Service<RR, LLM>
where
    RR: RestaurantRepository,
    LLM: LLMClient,
{
    pub(crate) restaurant_repository: RR,
    pub(crate) llm_client: LLM,
    pub(crate) default_credential: Option<String>,
    pub(crate) gate: RecommendationGate,
}

impl<RR, LLM> Service<RR, LLM>
where
    RR: RestaurantRepository,
    LLM: LLMClient,
{
    pub fn new(
        restaurant_repository: RR,
        llm_client: LLM,
        default_credential: Option<String>,
    ) -> Self {
        Self {
            restaurant_repository,
            llm_client,
            default_credential,
            gate: RecommendationGate::default(),
        }
    }
}
