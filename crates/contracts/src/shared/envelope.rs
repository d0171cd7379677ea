//! Response envelope used by every Order Service endpoint:
//! `{ "status": 200, "data": ..., "messenger": "..." }`.
//!
//! The service is inconsistent about the message field name. `messenger` is
//! canonical, `message` is accepted as an alias; if both are present
//! `messenger` wins.

use super::error::ApiError;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;

/// Envelope `status` that marks success
pub const STATUS_OK: i32 = 200;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: i32,
    pub data: Option<T>,
    #[serde(default)]
    pub messenger: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn server_message(&self) -> Option<&str> {
        self.messenger
            .as_deref()
            .or(self.message.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    fn domain_error(&self) -> ApiError {
        ApiError::Domain {
            status: self.status,
            message: self
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Request failed with status {}", self.status)),
        }
    }

    /// Success envelope must carry `data`.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.is_success() {
            return Err(self.domain_error());
        }
        self.data
            .ok_or_else(|| ApiError::Transport("Response has no data".to_string()))
    }

    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.domain_error())
        }
    }
}

fn parse_envelope<T: DeserializeOwned>(
    http_status: u16,
    body: &str,
) -> Result<ApiEnvelope<T>, ApiError> {
    if !(200..300).contains(&http_status) {
        return Err(ApiError::Transport(format!(
            "HTTP error! status: {}",
            http_status
        )));
    }
    serde_json::from_str(body)
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
}

/// Decode a response that must wrap `data` of type `T`.
pub fn decode_data<T: DeserializeOwned>(http_status: u16, body: &str) -> Result<T, ApiError> {
    parse_envelope::<T>(http_status, body)?.into_data()
}

/// List payload decoded one record at a time
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    /// Records that did not match `T` and were left out
    pub skipped: usize,
}

/// Decode a response whose `data` is an array, dropping records that do not
/// decode instead of failing the whole list.
pub fn decode_list<T: DeserializeOwned>(
    http_status: u16,
    body: &str,
) -> Result<ListPayload<T>, ApiError> {
    let raw: Vec<serde_json::Value> = decode_data(http_status, body)?;
    let total = raw.len();
    let items: Vec<T> = raw
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect();
    Ok(ListPayload {
        skipped: total - items.len(),
        items,
    })
}

/// Decode a response where only `status`/`messenger` matter.
pub fn decode_ack(http_status: u16, body: &str) -> Result<(), ApiError> {
    parse_envelope::<IgnoredAny>(http_status, body)?.into_ack()
}
