pub mod assemble;
pub mod error;
pub mod model;
pub mod parsing;
pub mod recognition;
pub mod scanner;
pub mod template;

use error::AnketaError;
use model::ScanResult;
use parsing::MatchOptions;
use recognition::OcrEngine;
use std::time::Instant;
use template::schema::Template;

/// Main API entry point: extract questionnaire answers from raw OCR text.
///
/// `processing_time_ms` is the elapsed time of the surrounding scan as
/// measured by the caller. Empty or unrecognizable text is not an error; it
/// yields a successful result with every slot empty.
pub fn scan_text(
    raw_text: &str,
    processing_time_ms: f64,
    template: &Template,
    options: &MatchOptions,
) -> ScanResult {
    let lines = parsing::segment_lines(raw_text);
    let captures = parsing::capture_answers(&lines, template, options);

    tracing::debug!(
        lines = lines.len(),
        captured = captures.len(),
        template = %template.name,
        "scanned text"
    );

    assemble::assemble(&captures, template, raw_text, processing_time_ms)
}

/// Run the OCR engine on an image and extract answers from its text.
///
/// The engine must already be initialized. OCR failures are returned as
/// errors; see [`scanner::Scanner`] for the variant that reports them as
/// unsuccessful results instead.
pub fn scan_image(
    image_bytes: &[u8],
    engine: &mut dyn OcrEngine,
    template: &Template,
    options: &MatchOptions,
) -> Result<ScanResult, AnketaError> {
    let start = Instant::now();
    let raw_text = engine.recognize(image_bytes)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok(scan_text(&raw_text, elapsed_ms, template, options))
}
