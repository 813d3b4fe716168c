use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::template::schema::Template;

/// Confidence reported for every discovered field. No scoring is derived
/// from the OCR output yet.
pub const PLACEHOLDER_CONFIDENCE: f32 = 0.9;

/// Top-level keys of the serialized scan result. Template keys must not
/// collide with these.
pub const RESERVED_KEYS: &[&str] = &[
    "success",
    "error_message",
    "processing_time_ms",
    "raw_text",
    "fields",
];

/// A non-empty, trimmed line of OCR text with its position in the
/// segmented sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// One discovered question with its raw (pre-normalization) answer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, Deserialize)]
pub struct FieldResult {
    /// The template phrase that matched.
    pub name: String,
    pub value: String,
    pub confidence: f32,
}

/// A normalized answer slot, one per template key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub value: String,
}

/// Complete output of one scan.
///
/// Holds exactly one answer slot per template key, in template order.
/// Slots for questions that were never found are empty strings. `fields`
/// keeps raw values in the order questions were discovered in the text.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub success: bool,
    pub error_message: String,
    pub processing_time_ms: f64,
    pub raw_text: String,
    pub fields: Vec<FieldResult>,
    answers: Vec<Answer>,
}

impl ScanResult {
    /// A successful result with every slot empty.
    pub fn empty(template: &Template, raw_text: &str, processing_time_ms: f64) -> ScanResult {
        ScanResult {
            success: true,
            error_message: String::new(),
            processing_time_ms,
            raw_text: raw_text.to_string(),
            fields: Vec::new(),
            answers: template
                .entries
                .iter()
                .map(|e| Answer {
                    key: e.key.clone(),
                    value: String::new(),
                })
                .collect(),
        }
    }

    /// A failed scan: all slots empty, `success = false`.
    pub fn failure(
        template: &Template,
        message: impl Into<String>,
        processing_time_ms: f64,
    ) -> ScanResult {
        ScanResult {
            success: false,
            error_message: message.into(),
            ..ScanResult::empty(template, "", processing_time_ms)
        }
    }

    /// Normalized answer for a template key, or None for unknown keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub(crate) fn set(&mut self, key: &str, value: String) {
        if let Some(slot) = self.answers.iter_mut().find(|a| a.key == key) {
            slot.value = value;
        }
    }

    /// Keys of required template entries whose slot ended up empty.
    pub fn missing_required<'t>(&self, template: &'t Template) -> Vec<&'t str> {
        template
            .entries
            .iter()
            .filter(|e| e.required)
            .filter(|e| self.get(&e.key).map_or(true, str::is_empty))
            .map(|e| e.key.as_str())
            .collect()
    }

    /// Cut `raw_text` to at most `limit` characters for transport.
    pub fn with_raw_text_limit(mut self, limit: usize) -> ScanResult {
        if let Some((byte_idx, _)) = self.raw_text.char_indices().nth(limit) {
            self.raw_text.truncate(byte_idx);
        }
        self
    }
}

impl Serialize for ScanResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RESERVED_KEYS.len() + self.answers.len()))?;
        map.serialize_entry("success", &self.success)?;
        map.serialize_entry("error_message", &self.error_message)?;
        map.serialize_entry("processing_time_ms", &self.processing_time_ms)?;
        for answer in &self.answers {
            map.serialize_entry(&answer.key, &answer.value)?;
        }
        map.serialize_entry("raw_text", &self.raw_text)?;
        map.serialize_entry("fields", &self.fields)?;
        map.end()
    }
}

/// Per-handle counters, updated after every scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct ScanStats {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub last_source: Option<String>,
}

impl ScanStats {
    pub fn record(&mut self, source: &str, result: &ScanResult) {
        self.total += 1;
        if result.success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.last_source = Some(source.to_string());
    }
}
