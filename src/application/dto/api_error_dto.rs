//! Failed HTTP response DTO.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// Failed response handed over by the request layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorReport {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl ApiErrorReport {
    /// Creates new report.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Extracts the server-provided error detail.
    ///
    /// Validation error lists are flattened into their messages. Bodies without
    /// a usable detail produce a generic message naming the status.
    #[must_use]
    pub fn detail(&self) -> String {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| describe(&body.detail))
            .unwrap_or_else(|| format!("Request failed with status {}", self.status))
    }
}

fn describe(detail: &Value) -> Option<String> {
    match detail {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                Some(detail.to_string())
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
