use anketa_core::error::AnketaError;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use crate::ScanArgs;

pub fn run(input_file: PathBuf, args: &ScanArgs) -> Result<(), AnketaError> {
    let template = super::resolve_template(args)?;
    let options = super::match_options(args);

    let start = Instant::now();
    let (source, text) = if input_file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        ("<stdin>".to_string(), text)
    } else {
        let text = std::fs::read_to_string(&input_file)?;
        (input_file.display().to_string(), text)
    };

    tracing::debug!(source = %source, bytes = text.len(), "read OCR text");

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    let result = anketa_core::scan_text(&text, elapsed_ms, &template, &options);

    super::emit(vec![(source, result)], &template, args)
}
