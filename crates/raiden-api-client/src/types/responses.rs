/*
[INPUT]:  Buffered response bytes from the transport
[OUTPUT]: Tagged response body (structured JSON or raw text)
[POS]:    Data layer - response-shape polymorphism for the executor
[UPDATE]: When the node introduces a new response encoding
*/

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded response body.
///
/// Most endpoints answer with a JSON document, a few (e.g. the token network
/// lookup) answer with a bare string.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Parse as JSON first, fall back to UTF-8 text.
    ///
    /// Returns `None` when the bytes are neither.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
            return Some(ResponseBody::Json(value));
        }
        std::str::from_utf8(bytes)
            .ok()
            .map(|text| ResponseBody::Text(text.to_string()))
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ResponseBody::Json(_))
    }

    /// Convert into a typed value. Text is offered to serde as a JSON string.
    pub fn into_json<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        match self {
            ResponseBody::Json(value) => serde_json::from_value(value),
            ResponseBody::Text(text) => serde_json::from_value(Value::String(text)),
        }
    }

    /// Decode bytes straight into `T`.
    ///
    /// Numbers are read without an intermediate [`Value`], so amounts beyond
    /// `u64::MAX` survive. A body that is not JSON at all is offered to serde
    /// as a string, which lets bare-text answers satisfy `String` results.
    pub fn decode_as<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, String> {
        match serde_json::from_slice::<T>(bytes) {
            Ok(value) => Ok(value),
            Err(err) if err.is_data() => Err(err.to_string()),
            Err(_) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|_| "body is neither JSON nor UTF-8 text".to_string())?;
                serde_json::from_value(Value::String(text.to_string())).map_err(|e| e.to_string())
            }
        }
    }

    /// Text content; a JSON string is unwrapped, other JSON is re-serialized.
    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Text(text) => text,
            ResponseBody::Json(Value::String(text)) => text,
            ResponseBody::Json(value) => value.to_string(),
        }
    }
}
