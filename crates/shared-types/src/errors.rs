//! Common error types used across all CTC Charts crates

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error taxonomy for the per-chart load pipeline.
///
/// Every variant is caught at the chart boundary and converted into an
/// inline message; none of them propagate to sibling charts.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ChartsError {
    #[error("Network request failed: {message}")]
    Network { message: String },

    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("Response is not valid JSON: {message}")]
    Parse { message: String },

    #[error("Unexpected payload shape: {message}")]
    Shape { message: String },
}

impl ChartsError {
    pub fn network(message: impl Into<String>) -> Self {
        ChartsError::Network {
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        ChartsError::Shape {
            message: message.into(),
        }
    }
}

/// Result type alias for CTC Charts operations
pub type ChartsResult<T> = Result<T, ChartsError>;

impl From<serde_json::Error> for ChartsError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            // Parsed JSON that does not match the expected fields
            serde_json::error::Category::Data => ChartsError::Shape {
                message: err.to_string(),
            },
            // Malformed or truncated body, or an I/O failure mid-read
            _ => ChartsError::Parse {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for ChartsError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        ChartsError::Network {
            message: format!("{err:?}"),
        }
    }
}
