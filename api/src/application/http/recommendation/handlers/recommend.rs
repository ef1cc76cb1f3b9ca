use axum::{Extension, extract::State};
use lunchpick_core::domain::{
    recommendation::{
        entities::RecommendationResult, ports::RecommendationService, value_objects::RecommendInput,
    },
    restaurant::value_objects::FilterState,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    credential_middleware::CredentialContext,
    http::{
        recommendation::validators::RecommendRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendResponse {
    pub data: RecommendationResult,
}

#[utoipa::path(
    post,
    path = "/ai",
    tag = "recommendation",
    summary = "Ask the LLM to pick a restaurant",
    description = "Sends the request text and the filtered restaurants to Gemini and returns its pick. A malformed model reply falls back to the first candidate with is_model_generated = false.",
    request_body = RecommendRequest,
    params(
        ("x-llm-api-key" = Option<String>, Header, description = "Gemini API key; the server key is used when absent"),
    ),
    responses(
        (status = 200, body = RecommendResponse),
        (status = 400, body = ApiErrorResponse, description = "Empty request, no matching restaurants, or missing key"),
        (status = 409, body = ApiErrorResponse, description = "Another recommendation is in flight"),
        (status = 502, body = ApiErrorResponse, description = "The LLM service failed")
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    Extension(credential): Extension<CredentialContext>,
    ValidateJson(payload): ValidateJson<RecommendRequest>,
) -> Result<Response<RecommendResponse>, ApiError> {
    let filter = FilterState::try_from(&payload.filter)?;

    let result = state
        .service
        .recommend(RecommendInput {
            user_text: payload.user_text,
            filter,
            credential: credential.api_key,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendResponse { data: result }))
}
