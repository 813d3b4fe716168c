//! Long-lived scanning handle owning one OCR engine.

use crate::error::AnketaError;
use crate::model::{ScanResult, ScanStats};
use crate::parsing::MatchOptions;
use crate::recognition::OcrEngine;
use crate::template::schema::Template;
use std::path::Path;
use std::time::Instant;

/// An initialized OCR engine paired with the template it scans against.
///
/// Created with [`Scanner::initialize`] and released with
/// [`Scanner::shutdown`]. Scanning borrows the handle mutably, so a handle
/// never runs two scans at once; create one handle per concurrent scan.
pub struct Scanner<E: OcrEngine> {
    engine: E,
    template: Template,
    options: MatchOptions,
    stats: ScanStats,
}

impl<E: OcrEngine> Scanner<E> {
    /// Initialize the engine and take ownership of it.
    pub fn initialize(
        mut engine: E,
        template: Template,
        options: MatchOptions,
    ) -> Result<Self, AnketaError> {
        engine.initialize()?;
        tracing::info!(
            backend = engine.backend_name(),
            template = %template.name,
            version = %template.version,
            "scanner ready"
        );
        Ok(Scanner {
            engine,
            template,
            options,
            stats: ScanStats::default(),
        })
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Scan an encoded image. OCR failures are reported in the result
    /// (`success = false`) rather than returned as errors.
    pub fn scan_image(&mut self, image_bytes: &[u8], source: &str) -> ScanResult {
        let start = Instant::now();
        let result = match self.engine.recognize(image_bytes) {
            Ok(raw_text) => {
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                crate::scan_text(&raw_text, elapsed_ms, &self.template, &self.options)
            }
            Err(e) => {
                tracing::warn!(source, error = %e, "OCR failed");
                let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
                ScanResult::failure(&self.template, e.to_string(), elapsed_ms)
            }
        };
        self.stats.record(source, &result);
        result
    }

    /// Read an image file and scan it. Unreadable files produce an
    /// unsuccessful result.
    pub fn scan_file(&mut self, path: &Path) -> ScanResult {
        let source = path.display().to_string();
        match std::fs::read(path) {
            Ok(bytes) => self.scan_image(&bytes, &source),
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "could not read image");
                let result = ScanResult::failure(
                    &self.template,
                    format!("could not read {}: {}", source, e),
                    0.0,
                );
                self.stats.record(&source, &result);
                result
            }
        }
    }

    /// Shut the engine down and return the session statistics.
    pub fn shutdown(mut self) -> ScanStats {
        self.engine.shutdown();
        tracing::info!(
            total = self.stats.total,
            succeeded = self.stats.succeeded,
            failed = self.stats.failed,
            "scanner shut down"
        );
        self.stats
    }
}
