use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Failed to load dataset from {source_name} (line {line}): {message}")]
    DatasetLoad {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No restaurants match the current filters")]
    NoCandidates,

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("LLM service error{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    ServiceResponse {
        status: Option<u16>,
        message: String,
    },

    #[error("A recommendation request for this caller is already in flight")]
    RecommendationInFlight,
}

impl CoreError {
    pub fn dataset_load(source_name: impl Into<String>, line: usize, message: impl ToString) -> Self {
        Self::DatasetLoad {
            source_name: source_name.into(),
            line,
            message: message.to_string(),
        }
    }

    pub fn service_response(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::ServiceResponse {
            status,
            message: message.into(),
        }
    }
}
