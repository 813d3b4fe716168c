pub mod tesseract;

use crate::error::AnketaError;
use std::path::PathBuf;

/// Settings for the OCR backend.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Name or path of the tesseract executable.
    pub tesseract_bin: PathBuf,
    /// Directory holding `*.traineddata`. Uses tesseract's default if unset.
    pub tessdata_dir: Option<PathBuf>,
    /// Recognition languages, tesseract syntax ("rus+eng").
    pub languages: String,
    /// Page segmentation mode. 3 is fully automatic.
    pub psm: u8,
    /// Engine mode. 1 is LSTM only.
    pub oem: u8,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            tesseract_bin: PathBuf::from("tesseract"),
            tessdata_dir: None,
            languages: "rus+eng".to_string(),
            psm: 3,
            oem: 1,
        }
    }
}

/// Trait for OCR backends.
///
/// An engine goes through `initialize` once, then any number of
/// `recognize` calls, then `shutdown`. Calls take `&mut self`: one engine
/// serves one scan at a time, and parallel scanning needs one engine per
/// scan.
pub trait OcrEngine: Send {
    /// Acquire whatever the backend needs before the first scan.
    fn initialize(&mut self) -> Result<(), AnketaError>;

    /// Recognize the text on an encoded image (PNG, JPEG, TIFF...).
    fn recognize(&mut self, image_bytes: &[u8]) -> Result<String, AnketaError>;

    /// Release backend resources. Further `recognize` calls fail.
    fn shutdown(&mut self) {}

    /// Name of this OCR backend (for diagnostics).
    fn backend_name(&self) -> &str;
}
