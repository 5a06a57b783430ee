//! Field decoders that turn malformed values into absent ones.
//!
//! A capture is never rejected for its shape once it parses as JSON: a value
//! of the wrong type simply decodes as `None` (or an empty list), and the
//! typed accessors on [`super::Entry`] supply the defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a scalar field, treating a value of the wrong type as absent.
pub(crate) fn scalar<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Decode a nested record. Only JSON objects qualify; arrays would otherwise
/// be matched positionally against the record's fields.
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(T::deserialize(value).ok()),
        _ => Ok(None),
    }
}

/// Decode a list of records. Elements that are not objects are kept as
/// default records so they still count.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => T::deserialize(item).unwrap_or_default(),
            _ => T::default(),
        })
        .collect())
}
