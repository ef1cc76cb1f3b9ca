use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{
        entities::{PickOutcome, RecommendationResult},
        value_objects::{RandomPickInput, RecommendInput},
    },
};

/// LLM Client trait for calling generative text models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one prompt and returns the first candidate's raw text.
    fn generate_text(
        &self,
        prompt: String,
        api_key: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the two pick paths
pub trait RecommendationService: Send + Sync {
    fn pick_random(
        &self,
        input: RandomPickInput,
    ) -> impl Future<Output = Result<PickOutcome, CoreError>> + Send;

    fn recommend(
        &self,
        input: RecommendInput,
    ) -> impl Future<Output = Result<RecommendationResult, CoreError>> + Send;
}
