use clap::Parser;
use lunchpick_core::domain::common::{
    DEFAULT_GEMINI_ENDPOINT, DEFAULT_GEMINI_MODEL, DatasetConfig, DatasetSource, LLMConfig,
    LunchpickConfig,
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "lunchpick", version, about = "Restaurant picker API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "http://localhost:5173")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatasetArgs {
    /// Path or http(s) URL of the newline-delimited restaurant dataset
    #[arg(long, env = "DATASET_SOURCE", default_value = "data/restaurants.jsonl")]
    pub dataset_source: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_ENDPOINT", default_value = DEFAULT_GEMINI_ENDPOINT)]
    pub gemini_endpoint: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl DatasetArgs {
    pub fn source(&self) -> DatasetSource {
        match Url::parse(&self.dataset_source) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                DatasetSource::Url(self.dataset_source.clone())
            }
            _ => DatasetSource::Path(self.dataset_source.clone()),
        }
    }
}

impl From<Args> for LunchpickConfig {
    fn from(args: Args) -> Self {
        Self {
            dataset: DatasetConfig {
                source: args.dataset.source(),
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key.filter(|k| !k.trim().is_empty()),
                gemini_model: args.llm.gemini_model,
                gemini_endpoint: args.llm.gemini_endpoint,
            },
        }
    }
}
