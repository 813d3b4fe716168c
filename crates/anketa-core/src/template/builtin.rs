use crate::error::AnketaError;
use crate::template::schema::Template;

const MUZLOTO_V1_JSON: &str = include_str!("../../../../templates/muzloto-v1.json");

/// Available predefined templates.
pub const PRESETS: &[&str] = &["muzloto-v1"];

/// Preset used when no template is given.
pub const DEFAULT_PRESET: &str = "muzloto-v1";

/// Load a predefined template by name.
pub fn load_preset(name: &str) -> Result<Template, AnketaError> {
    match name {
        "muzloto-v1" => super::parse_template_str(MUZLOTO_V1_JSON),
        _ => Err(AnketaError::TemplateInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
