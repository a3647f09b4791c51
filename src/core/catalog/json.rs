//! Flat JSON catalogs: `{ "key": "value", ... }`.
//!
//! Key order is preserved on read and write (serde_json `preserve_order`).

use serde_json::{Map, Value};

use super::Catalog;

pub fn parse(content: &str) -> Result<Catalog, String> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {}", e))?;

    let Value::Object(map) = value else {
        return Err("root of a JSON catalog must be an object".to_string());
    };

    let mut catalog = Catalog::new();
    for (key, value) in map {
        match value {
            Value::String(text) => {
                catalog.insert(key, text);
            }
            other => {
                return Err(format!(
                    "value of \"{}\" must be a string, found {}",
                    key,
                    type_name(&other)
                ));
            }
        }
    }
    Ok(catalog)
}

/// Pretty-printed with 2-space indentation and a trailing newline.
pub fn render(catalog: &Catalog) -> serde_json::Result<String> {
    let map: Map<String, Value> = catalog
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect();
    let content = serde_json::to_string_pretty(&Value::Object(map))?;
    Ok(format!("{}\n", content))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
