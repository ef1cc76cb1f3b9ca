use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct LunchpickConfig {
    pub dataset: DatasetConfig,
    pub llm: LLMConfig,
}

/// Where the newline-delimited restaurant dataset lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    Path(String),
    Url(String),
}

impl DatasetSource {
    pub fn name(&self) -> &str {
        match self {
            DatasetSource::Path(path) => path,
            DatasetSource::Url(url) => url,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatasetConfig {
    pub source: DatasetSource,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Server-side fallback key, used when a request carries none.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_endpoint: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
