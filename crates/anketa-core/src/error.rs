use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnketaError {
    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("tesseract not found. Install it: brew install tesseract tesseract-lang (macOS) or apt install tesseract-ocr tesseract-ocr-rus (Linux)")]
    TesseractNotFound,

    #[error("tesseract failed with exit code {code}: {stderr}")]
    TesseractFailed { code: i32, stderr: String },

    #[error("OCR engine '{0}' is not initialized")]
    EngineNotInitialized(String),

    #[error("failed to load template from {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    #[error("invalid template: {0}")]
    TemplateInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
