use super::types::Har;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub struct HarReader;

impl HarReader {
    /// Read and parse a HAR file from the given path
    pub fn from_file(path: &Path) -> Result<Har> {
        tracing::debug!("Reading HAR file from: {}", path.display());

        let content = fs::read_to_string(path)?;
        let har = Self::from_str(&content)?;

        tracing::info!(
            "Successfully parsed HAR file with {} entries",
            har.entries().len()
        );

        Ok(har)
    }

    /// Parse a HAR document from a JSON string
    ///
    /// Any JSON object is accepted; missing or malformed fields are left for
    /// the entry accessors to default. Only invalid JSON or a non-object root
    /// is an error.
    pub fn from_str(content: &str) -> Result<Har> {
        tracing::debug!("Parsing HAR from string");

        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(Error::InvalidStructure(format!(
                "expected a JSON object at the top level, found {}",
                kind_of(&value)
            )));
        }

        let har = Har::deserialize(value)?;

        if har.entries().is_empty() {
            tracing::warn!("HAR file contains no entries");
        }

        Ok(har)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
