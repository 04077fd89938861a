use reqwest::header::{HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::features::people::models::PersonRecord;

/// Failure to obtain the people payload.
///
/// A reachable endpoint returning JSON of the wrong shape is not an error;
/// see [`records_from_payload`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Status {0}")]
    Status(u16),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Resposta inválida: {0}")]
    Decode(String),
}

/// HTTP client for the people endpoint the dashboard reads from
pub struct PeopleApiClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl PeopleApiClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One GET, canonicalized records out
    pub async fn load(&self) -> Result<Vec<PersonRecord>, FetchError> {
        tracing::debug!("Fetching people from {}", self.endpoint);

        let response = self
            .http_client
            .get(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("People request failed: {:?}", e);
                FetchError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("People endpoint returned status: {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Failed to parse people response: {:?}", e);
            FetchError::Decode(e.to_string())
        })?;

        Ok(records_from_payload(payload))
    }
}

/// Pull `data` out of a decoded payload.
///
/// Missing or non-array `data` yields no records, and array elements that are
/// not objects are skipped.
pub fn records_from_payload(payload: Value) -> Vec<PersonRecord> {
    let items = match payload {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => {
                tracing::warn!("People payload has no data array, treating as empty");
                return Vec::new();
            }
        },
        _ => {
            tracing::warn!("People payload is not an object, treating as empty");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(raw) => Some(PersonRecord::from_raw(raw)),
            _ => None,
        })
        .collect()
}
