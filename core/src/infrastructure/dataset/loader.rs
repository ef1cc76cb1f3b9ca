use reqwest::Client;
use tracing::instrument;

use crate::domain::{
    common::{DatasetSource, entities::app_errors::CoreError},
    restaurant::{entities::RestaurantRecord, helpers::normalize_record},
};

/// Parse newline-delimited JSON. Blank lines are skipped; any malformed line
/// fails the whole load.
pub fn parse_jsonl(source_name: &str, content: &str) -> Result<Vec<RestaurantRecord>, CoreError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<RestaurantRecord>(line)
                .map(normalize_record)
                .map_err(|e| CoreError::dataset_load(source_name, index + 1, e))
        })
        .collect()
}

async fn fetch_remote(url: &str) -> Result<String, CoreError> {
    let response = Client::new().get(url).send().await.map_err(|e| {
        tracing::error!("Dataset request failed: {}", e);
        CoreError::dataset_load(url, 0, e)
    })?;

    if !response.status().is_success() {
        let status = response.status();
        tracing::error!("Dataset request returned {}", status);
        return Err(CoreError::dataset_load(
            url,
            0,
            format!("unexpected status {status}"),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| CoreError::dataset_load(url, 0, e))
}

#[instrument(skip(source), fields(source = %source.name()))]
pub async fn load_dataset(source: &DatasetSource) -> Result<Vec<RestaurantRecord>, CoreError> {
    let content = match source {
        DatasetSource::Path(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CoreError::dataset_load(path.as_str(), 0, e))?,
        DatasetSource::Url(url) => fetch_remote(url).await?,
    };

    let records = parse_jsonl(source.name(), &content)?;
    tracing::info!(count = records.len(), "dataset loaded");

    Ok(records)
}
