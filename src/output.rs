//! JSON output and error payloads.
//!
//! Callers that hand results to another process want failures as data
//! rather than as Rust errors. [`Response`] carries either the value or an
//! [`ErrorPayload`] (`{"error": ..., "nodeId": ...}`) and serializes to
//! whichever one it holds.

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a value to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Structured form of a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    /// Human-readable message
    pub error: String,
    /// Node the failure concerns, for export failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

impl From<&Error> for ErrorPayload {
    fn from(err: &Error) -> Self {
        Self {
            error: err.to_string(),
            node_id: err.node_id().map(str::to_string),
        }
    }
}

impl From<Error> for ErrorPayload {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

/// Outcome of a top-level operation, serialized as the value or the error payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response<T> {
    /// Successful result
    Ok(T),
    /// Failure payload
    Error(ErrorPayload),
}

impl<T> Response<T> {
    /// Whether the operation succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }

    /// The successful value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Response::Ok(value) => Some(value),
            Response::Error(_) => None,
        }
    }

    /// The error payload, if any.
    pub fn error(&self) -> Option<&ErrorPayload> {
        match self {
            Response::Ok(_) => None,
            Response::Error(payload) => Some(payload),
        }
    }
}

impl<T> From<Result<T>> for Response<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Response::Ok(value),
            Err(e) => Response::Error(e.into()),
        }
    }
}

impl<T: Serialize> Response<T> {
    /// Serialize the response to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(self, format)
    }
}
