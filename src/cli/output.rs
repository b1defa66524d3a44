//! Serialization helpers for command output

use serde::Serialize;

use crate::config::OutputFormat;
use crate::utils::error::Result;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

pub fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}

/// Render `value` as JSON or YAML, or with `table` for the table format
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Table => Ok(table(value)),
        OutputFormat::Json => render_json(value),
        OutputFormat::Yaml => render_yaml(value),
    }
}
