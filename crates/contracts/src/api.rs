//! Wire envelope shared by every backend endpoint.
//!
//! List/get responses arrive as `{ "data": ... }`; failed mutations signal
//! through the HTTP status alone.

use serde::{Deserialize, Serialize};

/// Standard `{ "data": ... }` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

/// Reply shape of the login endpoint: an opaque success marker plus the
/// logged-in account record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Id-bearing reply of create endpoints (`{ "id": 42 }` or enveloped).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedId {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Serde adapters for SQLite's nullable columns: the backend emits `null`
/// where the console treats the field as an empty value.
pub mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn string<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
    }

    pub fn f64<'de, D>(d: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or_default())
    }

    pub fn i64<'de, D>(d: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<i64>::deserialize(d)?.unwrap_or_default())
    }
}
