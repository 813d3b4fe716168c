pub mod builtin;
pub mod schema;

use crate::error::AnketaError;
use crate::model::RESERVED_KEYS;
use schema::Template;
use std::collections::HashSet;
use std::path::Path;

/// Load a template from a JSON file.
pub fn load_template(path: &Path) -> Result<Template, AnketaError> {
    let content = std::fs::read_to_string(path).map_err(|e| AnketaError::TemplateLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_template(&content, path)
}

/// Parse a template from a JSON string.
pub fn parse_template(json: &str, source: &Path) -> Result<Template, AnketaError> {
    let template: Template = serde_json::from_str(json).map_err(|e| AnketaError::TemplateLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_template(&template)?;
    Ok(template)
}

/// Parse a template from a JSON string (no file path context).
pub fn parse_template_str(json: &str) -> Result<Template, AnketaError> {
    let template: Template = serde_json::from_str(json).map_err(AnketaError::Json)?;
    validate_template(&template)?;
    Ok(template)
}

/// Validate that a template is well-formed.
///
/// Phrases must not contain one another: a line holding the longer phrase
/// would also match the shorter one, and list order would silently decide.
pub fn validate_template(template: &Template) -> Result<(), AnketaError> {
    if template.entries.is_empty() {
        return Err(AnketaError::TemplateInvalid(
            "entries must not be empty".into(),
        ));
    }

    let mut keys = HashSet::new();
    for entry in &template.entries {
        if entry.phrase.trim().is_empty() {
            return Err(AnketaError::TemplateInvalid(format!(
                "entry '{}' has an empty phrase",
                entry.key
            )));
        }

        if entry.key.is_empty() {
            return Err(AnketaError::TemplateInvalid(format!(
                "phrase '{}' has an empty key",
                entry.phrase
            )));
        }

        if RESERVED_KEYS.contains(&entry.key.as_str()) {
            return Err(AnketaError::TemplateInvalid(format!(
                "key '{}' is reserved (reserved: {})",
                entry.key,
                RESERVED_KEYS.join(", ")
            )));
        }

        if !keys.insert(entry.key.as_str()) {
            return Err(AnketaError::TemplateInvalid(format!(
                "duplicate key '{}'",
                entry.key
            )));
        }
    }

    for (i, earlier) in template.entries.iter().enumerate() {
        for later in &template.entries[i + 1..] {
            if earlier.phrase.contains(&later.phrase) || later.phrase.contains(&earlier.phrase) {
                return Err(AnketaError::TemplateInvalid(format!(
                    "phrases of '{}' and '{}' overlap",
                    earlier.key, later.key
                )));
            }
        }
    }

    Ok(())
}
