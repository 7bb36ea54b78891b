use crate::error::{A11yError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Engine configuration passed through to `a11yCheck` untouched.
///
/// The default is `null`, which the engine reads as "use engine defaults".
/// No structure is checked here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanOptions(Value);

impl ScanOptions {
    /// Options that leave every engine setting at its default
    pub fn engine_defaults() -> Self {
        Self(Value::Null)
    }

    /// Read options from their raw serialized form
    pub fn from_raw(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::engine_defaults());
        }

        serde_json::from_str(trimmed)
            .map(Self)
            .map_err(|e| A11yError::InvalidOptions(format!("{}: {}", trimmed, e)))
    }

    /// Check if these options defer to the engine defaults
    pub fn is_engine_defaults(&self) -> bool {
        self.0.is_null()
    }

    /// The raw options value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// JSON argument for the scan function
    pub fn to_argument(&self) -> Value {
        self.0.clone()
    }
}

impl From<Value> for ScanOptions {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl FromStr for ScanOptions {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_raw(s)
    }
}
