use crate::domain::common::entities::app_errors::CoreError;

pub const API_KEY_PREFIX: &str = "AIza";
pub const API_KEY_LENGTH: usize = 39;

/// Shape check for a Gemini API key. Catches pasting mistakes; it proves nothing
/// about whether the key is valid.
pub fn looks_like_api_key(key: &str) -> bool {
    key.starts_with(API_KEY_PREFIX) && key.len() == API_KEY_LENGTH
}

/// Choose the credential for one request: the caller's key when given, else the
/// configured one.
pub fn resolve_credential(
    provided: Option<&str>,
    configured: Option<&str>,
) -> Result<String, CoreError> {
    let key = provided
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .or_else(|| configured.map(str::trim).filter(|k| !k.is_empty()))
        .ok_or_else(|| CoreError::MissingCredential("no API key was provided".to_string()))?;

    if !looks_like_api_key(key) {
        return Err(CoreError::MissingCredential(format!(
            "API key must start with \"{API_KEY_PREFIX}\" and be {API_KEY_LENGTH} characters long"
        )));
    }

    Ok(key.to_string())
}
