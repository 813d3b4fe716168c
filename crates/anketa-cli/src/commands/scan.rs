use anketa_core::error::AnketaError;
use anketa_core::recognition::tesseract::TesseractCli;
use anketa_core::scanner::Scanner;
use std::path::PathBuf;

use crate::{OcrArgs, ScanArgs};

pub fn run(image_file: PathBuf, args: &ScanArgs, ocr: &OcrArgs) -> Result<(), AnketaError> {
    let template = super::resolve_template(args)?;
    let engine = TesseractCli::new(super::ocr_config(ocr));
    let mut scanner = Scanner::initialize(engine, template, super::match_options(args))?;

    let result = scanner.scan_file(&image_file);
    let source = image_file.display().to_string();

    let template = scanner.template().clone();
    scanner.shutdown();

    if !result.success {
        return Err(AnketaError::Ocr(result.error_message));
    }

    super::emit(vec![(source, result)], &template, args)
}
