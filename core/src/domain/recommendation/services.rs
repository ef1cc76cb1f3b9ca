use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    recommendation::{
        entities::{CandidateList, PickOutcome, RecommendationResult},
        gate::caller_key,
        parser::{FALLBACK_TIP, parse_recommendation},
        policies::resolve_credential,
        ports::{LLMClient, RecommendationService},
        prompt::build_recommendation_prompt,
        value_objects::{RandomPickInput, RecommendInput},
    },
    restaurant::{
        entities::RestaurantRecord,
        ports::RestaurantRepository,
        services::{filter_restaurants, select_random},
    },
};

fn random_pick_result(restaurant: RestaurantRecord, candidate_count: usize) -> RecommendationResult {
    let tip = restaurant
        .signature_dish
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|dish| format!("try the {dish}"))
        .unwrap_or_else(|| FALLBACK_TIP.to_string());

    RecommendationResult {
        restaurant,
        reason: format!("picked at random from {candidate_count} matching restaurants"),
        tip,
        is_model_generated: false,
    }
}

impl<RR, LLM> RecommendationService for Service<RR, LLM>
where
    RR: RestaurantRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(cuisine = %input.filter.cuisine, max_walking_minutes = %input.filter.max_walking_minutes))]
    async fn pick_random(&self, input: RandomPickInput) -> Result<PickOutcome, CoreError> {
        let records = self.restaurant_repository.fetch_all().await?;
        let candidates = filter_restaurants(&records, &input.filter);

        let picked = {
            let mut rng = rand::thread_rng();
            select_random(&candidates, &mut rng).cloned()
        };

        let Some(restaurant) = picked else {
            tracing::info!("no restaurants match the filters");
            return Ok(PickOutcome::NoResults);
        };

        Ok(PickOutcome::Picked {
            recommendation: random_pick_result(restaurant, candidates.len()),
            candidate_count: candidates.len(),
        })
    }

    #[instrument(
        skip(self, input),
        fields(
            request_id = %generate_uuid_v7(),
            cuisine = %input.filter.cuisine,
            max_walking_minutes = %input.filter.max_walking_minutes,
        )
    )]
    async fn recommend(&self, input: RecommendInput) -> Result<RecommendationResult, CoreError> {
        let user_text = input.user_text.trim();
        if user_text.is_empty() {
            return Err(CoreError::InvalidInput(
                "request text must not be empty".to_string(),
            ));
        }

        let records = self.restaurant_repository.fetch_all().await?;
        let candidates = CandidateList::try_from(filter_restaurants(&records, &input.filter))?;

        let api_key = resolve_credential(
            input.credential.as_deref(),
            self.default_credential.as_deref(),
        )?;

        let _permit = self.gate.try_acquire(caller_key(&api_key)).inspect_err(|_| {
            tracing::warn!("rejected recommendation, this caller already has one in flight");
        })?;

        let prompt = build_recommendation_prompt(user_text, &candidates);
        tracing::debug!(candidates = candidates.len(), prompt_len = prompt.len(), "calling LLM");

        let reply = self.llm_client.generate_text(prompt, api_key).await?;
        let result = parse_recommendation(&reply, &candidates);

        tracing::info!(
            restaurant_id = %result.restaurant.id,
            is_model_generated = result.is_model_generated,
            "recommendation ready"
        );

        Ok(result)
    }
}
