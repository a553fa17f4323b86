// crashlens-core/src/infrastructure/http/socrata.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::CrashlensError;
use crate::infrastructure::error::HttpError;
use crate::ports::dataset::{DatasetSource, FetchOptions, Record};

/// Client for a Socrata-style open-data endpoint
/// (`{base_url}/{dataset_id}.json`, `$limit` / `$where` query parameters).
pub struct SocrataClient {
    client: Client,
    endpoint: String,
    timeout_secs: u64,
}

impl SocrataClient {
    pub fn new(
        base_url: &str,
        dataset_id: &str,
        timeout_secs: u64,
    ) -> Result<Self, CrashlensError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HttpError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/{}.json", base_url.trim_end_matches('/'), dataset_id),
            timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DatasetSource for SocrataClient {
    async fn fetch(&self, options: &FetchOptions) -> Result<Vec<Record>, CrashlensError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(limit) = options.limit {
            params.push(("$limit", limit.to_string()));
        }
        if let Some(where_clause) = &options.where_clause {
            params.push(("$where", where_clause.clone()));
        }

        info!(endpoint = %self.endpoint, "Fetching data from the open-data API");
        if !params.is_empty() {
            debug!(?params, "Request parameters");
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status(status.as_u16()).into());
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| classify(e, self.timeout_secs))?;

        let items = match payload {
            Value::Array(items) => items,
            other => {
                return Err(HttpError::Payload(format!(
                    "expected a JSON array, got: {}",
                    type_name(&other)
                ))
                .into());
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(map) => records.push(map),
                other => {
                    return Err(HttpError::Payload(format!(
                        "expected a JSON object per record, got: {}",
                        type_name(&other)
                    ))
                    .into());
                }
            }
        }

        info!(records = records.len(), "Fetch finished");
        Ok(records)
    }
}

fn classify(err: reqwest::Error, timeout_secs: u64) -> CrashlensError {
    if err.is_timeout() {
        HttpError::Timeout(timeout_secs).into()
    } else if err.is_decode() {
        HttpError::Payload(err.to_string()).into()
    } else {
        HttpError::Transport(err.to_string()).into()
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() -> anyhow::Result<()> {
        let client = SocrataClient::new("https://data.cityofnewyork.us/resource", "h9gi-nx95", 60)?;
        assert_eq!(
            client.endpoint(),
            "https://data.cityofnewyork.us/resource/h9gi-nx95.json"
        );
        Ok(())
    }

    #[test]
    fn test_endpoint_trailing_slash_is_normalized() -> anyhow::Result<()> {
        let client =
            SocrataClient::new("https://data.cityofnewyork.us/resource/", "h9gi-nx95", 60)?;
        assert_eq!(
            client.endpoint(),
            "https://data.cityofnewyork.us/resource/h9gi-nx95.json"
        );
        Ok(())
    }
}
