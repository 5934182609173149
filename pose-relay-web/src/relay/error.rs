use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the relay slot boundary
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("relay storage is unavailable in this context")]
    Unavailable,
    #[error("relay storage access failed: {0}")]
    Storage(String),
    #[error("relay message could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<RelayError> for JsValue {
    fn from(err: RelayError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
