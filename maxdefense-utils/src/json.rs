use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fs;

pub fn dejsonify<T>(json_str: &str) -> serde_json::Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes `obj` with object keys sorted, so equal values always produce
/// identical text.
pub fn jsonify<T>(obj: &T) -> Result<String>
where
    T: Serialize,
{
    let value = serde_json::to_value(obj)?;
    Ok(serde_json::to_string_pretty(&sort_keys(value))?)
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut entries: Vec<(String, Value)> = obj.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(values) => Value::Array(values.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Reads `source` as a path when it ends in `.json`, otherwise as inline json.
pub fn load_json<T>(source: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json_str = if source.ends_with(".json") {
        fs::read_to_string(source).map_err(|e| anyhow!("Failed to read {}: {}", source, e))?
    } else {
        source.to_string()
    };
    dejsonify::<T>(&json_str).map_err(|e| anyhow!("Failed to parse json: {}", e))
}

pub fn parse_seed(hex_str: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(hex_str.trim_start_matches("0x"))?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow!("Seed must be 32 bytes, got {}", bytes.len()))
}
