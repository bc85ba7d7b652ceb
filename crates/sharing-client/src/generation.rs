//! Decoding of the sharing API reply body.

use serde_json::Value;

use crate::error::SharingError;

/// Decoded sharing API reply: either a ready sharing URL or any other payload (kept raw for logging).
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationReply {
    Ready { sharing_url: String },
    Other(Value),
}

impl GenerationReply {
    /// Decodes a 2xx reply body. `status == "success"` must come with a string `sharing_url`;
    /// any other status (or none) is `Other`. A body that is not JSON is `Malformed`.
    pub fn decode(body: &str) -> Result<Self, SharingError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| SharingError::Malformed(format!("invalid JSON: {}", e)))?;

        if value.get("status").and_then(Value::as_str) != Some("success") {
            return Ok(GenerationReply::Other(value));
        }

        match value.get("sharing_url").and_then(Value::as_str) {
            Some(url) => Ok(GenerationReply::Ready {
                sharing_url: url.to_string(),
            }),
            None => Err(SharingError::Malformed(format!(
                "success reply without sharing_url: {}",
                value
            ))),
        }
    }
}
