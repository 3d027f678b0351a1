use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An arbitrary JSON-encoded value.
///
/// The engine sends `JSON` scalars as strings holding a JSON document. The
/// carrier keeps that text as-is and does not validate it; call
/// [`Json::parse`] when the contents are needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json(String);

impl Json {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The JSON document `null`.
    pub fn null() -> Self {
        Self("null".to_string())
    }

    /// Build a carrier from a decoded response value.
    ///
    /// String values are kept verbatim; anything else is re-serialized.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self(s.clone()),
            Value::Null => Self::null(),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.trim() == "null"
    }

    /// Parse the carried document.
    pub fn parse(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
