use anketa_core::error::AnketaError;
use anketa_core::recognition::tesseract::TesseractCli;
use anketa_core::scanner::Scanner;
use std::path::{Path, PathBuf};

use crate::{OcrArgs, ScanArgs};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff", "bmp"];

pub fn run(folder: PathBuf, args: &ScanArgs, ocr: &OcrArgs) -> Result<(), AnketaError> {
    let files = image_files(&folder)?;
    tracing::debug!(folder = %folder.display(), count = files.len(), "collected images");
    if files.is_empty() {
        return Err(AnketaError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no images found in {}", folder.display()),
        )));
    }

    let template = super::resolve_template(args)?;
    let engine = TesseractCli::new(super::ocr_config(ocr));
    let mut scanner = Scanner::initialize(engine, template, super::match_options(args))?;

    eprintln!("Scanning {} image(s) in {}", files.len(), folder.display());

    let mut results = Vec::with_capacity(files.len());
    for (i, path) in files.iter().enumerate() {
        let result = scanner.scan_file(path);
        if result.success {
            eprintln!("[{}/{}] {}: ok", i + 1, files.len(), path.display());
        } else {
            eprintln!(
                "[{}/{}] {}: failed ({})",
                i + 1,
                files.len(),
                path.display(),
                result.error_message
            );
        }
        results.push((path.display().to_string(), result));
    }

    let template = scanner.template().clone();
    let stats = scanner.shutdown();
    eprintln!(
        "Done: {} succeeded, {} failed, {} total",
        stats.succeeded, stats.failed, stats.total
    );

    super::emit(results, &template, args)
}

/// Image files directly inside `folder`, sorted by name.
fn image_files(folder: &Path) -> Result<Vec<PathBuf>, AnketaError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_image(path))
        .collect();
    files.sort();
    Ok(files)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
