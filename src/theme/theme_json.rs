//! Global-styles flattening for export.
//!
//! Raw global-styles data layers properties as
//! `{ "user": ..., "custom": ..., "theme": ... }` variant objects. The
//! exported `theme.json` needs the effective value only: user data
//! when present, otherwise custom, otherwise theme. A selected variant
//! payload is taken verbatim; everything else is walked recursively.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

/// Collapse layered variant objects to their effective value.
pub fn flatten(value: Value) -> Value {
    match value {
        Value::Object(mut object) => {
            for key in ["user", "custom", "theme"] {
                if let Some(variant) = object.remove(key) {
                    return variant;
                }
            }
            Value::Object(
                object
                    .into_iter()
                    .map(|(key, value)| (key, flatten(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(flatten).collect()),
        other => other,
    }
}

/// Content for the exported `theme.json`: the flattened customization
/// data when `global-styles.json` exists, otherwise the active theme's
/// own `theme.json`. `None` when neither file exists.
pub fn export_theme_json(customizations_dir: &Path, theme_dir: &Path) -> Result<Option<String>> {
    let user_styles = customizations_dir.join("global-styles.json");
    let source = if user_styles.is_file() {
        user_styles
    } else {
        let theme_json = theme_dir.join("theme.json");
        if !theme_json.is_file() {
            return Ok(None);
        }
        theme_json
    };

    let text = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read file: {}", source.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse JSON file: {:?}", source))?;
    let rendered =
        serde_json::to_string_pretty(&flatten(value)).context("Failed to serialize JSON")?;
    Ok(Some(rendered))
}
