use crate::model::{FieldResult, ScanResult, PLACEHOLDER_CONFIDENCE};
use crate::parsing::normalize::normalize_value;
use crate::parsing::Capture;
use crate::template::schema::Template;

/// Build the scan result from captured answers.
///
/// Every template key gets a slot holding the normalized answer; keys that
/// were never matched stay empty. When a question was captured more than
/// once, the last capture fills the slot. `fields` lists every capture with
/// its raw value, in discovery order.
pub fn assemble(
    captures: &[Capture<'_>],
    template: &Template,
    raw_text: &str,
    processing_time_ms: f64,
) -> ScanResult {
    let mut result = ScanResult::empty(template, raw_text, processing_time_ms);

    for capture in captures {
        result.fields.push(FieldResult {
            name: capture.entry.phrase.clone(),
            value: capture.raw_value.clone(),
            confidence: PLACEHOLDER_CONFIDENCE,
        });
        let normalized = normalize_value(capture.entry.kind, &capture.raw_value);
        result.set(&capture.entry.key, normalized);
    }

    result
}
