use axum::{extract::Request, middleware::Next, response::Response};

pub const CREDENTIAL_HEADER: &str = "x-llm-api-key";

/// Caller-supplied LLM key, stored in request extensions
#[derive(Clone, Default)]
pub struct CredentialContext {
    pub api_key: Option<String>,
}

impl std::fmt::Debug for CredentialContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialContext")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Middleware to pick up the caller's key from the X-LLM-Api-Key header.
/// A missing header is fine; the service falls back to the configured key.
pub async fn credential_middleware(mut req: Request, next: Next) -> Response {
    let api_key = req
        .headers()
        .get(CREDENTIAL_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    req.extensions_mut().insert(CredentialContext { api_key });

    next.run(req).await
}
