use crate::error::AnketaError;
use crate::recognition::{OcrConfig, OcrEngine};
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// OCR backend running the `tesseract` command-line tool.
///
/// Each image is written to a temp file and recognized with
/// `tesseract <file> stdout`, keeping interword spaces so answers written
/// next to a question stay on its line.
pub struct TesseractCli {
    config: OcrConfig,
    initialized: bool,
}

impl TesseractCli {
    pub fn new(config: OcrConfig) -> Self {
        TesseractCli {
            config,
            initialized: false,
        }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    /// Check if the configured tesseract binary is available.
    pub fn is_available(&self) -> bool {
        Command::new(&self.config.tesseract_bin)
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn command_args(&self, image_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            image_path.into(),
            "stdout".into(),
            "-l".into(),
            self.config.languages.as_str().into(),
            "--psm".into(),
            self.config.psm.to_string().into(),
            "--oem".into(),
            self.config.oem.to_string().into(),
        ];
        if let Some(dir) = &self.config.tessdata_dir {
            args.push("--tessdata-dir".into());
            args.push(dir.into());
        }
        args.push("-c".into());
        args.push("preserve_interword_spaces=1".into());
        args
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new(OcrConfig::default())
    }
}

impl OcrEngine for TesseractCli {
    fn initialize(&mut self) -> Result<(), AnketaError> {
        if let Some(dir) = &self.config.tessdata_dir {
            if !dir.is_dir() {
                return Err(AnketaError::Ocr(format!(
                    "tessdata directory not found: {}",
                    dir.display()
                )));
            }
        }

        let output = Command::new(&self.config.tesseract_bin)
            .arg("--version")
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AnketaError::TesseractNotFound
                } else {
                    AnketaError::Ocr(format!("tesseract --version failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(AnketaError::TesseractFailed { code, stderr });
        }

        tracing::info!(
            bin = %self.config.tesseract_bin.display(),
            languages = %self.config.languages,
            "tesseract engine initialized"
        );
        self.initialized = true;
        Ok(())
    }

    fn recognize(&mut self, image_bytes: &[u8]) -> Result<String, AnketaError> {
        if !self.initialized {
            return Err(AnketaError::EngineNotInitialized(
                self.backend_name().to_string(),
            ));
        }

        // Write image bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| AnketaError::Ocr(e.to_string()))?;
        tmpfile
            .write_all(image_bytes)
            .map_err(|e| AnketaError::Ocr(e.to_string()))?;

        let output = Command::new(&self.config.tesseract_bin)
            .args(self.command_args(tmpfile.path()))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    AnketaError::TesseractNotFound
                } else {
                    AnketaError::Ocr(format!("tesseract failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(AnketaError::TesseractFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn shutdown(&mut self) {
        if self.initialized {
            tracing::info!("tesseract engine shut down");
        }
        self.initialized = false;
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}
