pub mod batch;
pub mod parse;
pub mod scan;
pub mod template;

use anketa_core::error::AnketaError;
use anketa_core::model::ScanResult;
use anketa_core::parsing::MatchOptions;
use anketa_core::recognition::OcrConfig;
use anketa_core::template::builtin;
use anketa_core::template::schema::Template;

use crate::output;
use crate::{OcrArgs, ScanArgs};

/// Load the template selected on the command line.
fn resolve_template(args: &ScanArgs) -> Result<Template, AnketaError> {
    match (&args.template, &args.preset) {
        (Some(path), _) => anketa_core::template::load_template(path),
        (None, Some(name)) => builtin::load_preset(name),
        (None, None) => builtin::load_preset(builtin::DEFAULT_PRESET),
    }
}

fn match_options(args: &ScanArgs) -> MatchOptions {
    MatchOptions {
        revisit_skipped_questions: args.revisit_skipped,
    }
}

fn ocr_config(args: &OcrArgs) -> OcrConfig {
    OcrConfig {
        tesseract_bin: args.tesseract.clone(),
        tessdata_dir: args.tessdata.clone(),
        languages: args.lang.clone(),
        psm: args.psm,
        oem: args.oem,
    }
}

/// Print results in the requested format, or write them as JSON to the
/// `--out` file. Missing required answers are reported on stderr.
fn emit(
    results: Vec<(String, ScanResult)>,
    template: &Template,
    args: &ScanArgs,
) -> Result<(), AnketaError> {
    let results: Vec<(String, ScanResult)> = results
        .into_iter()
        .map(|(source, r)| (source, r.with_raw_text_limit(args.raw_limit)))
        .collect();

    for (source, result) in &results {
        let missing = result.missing_required(template);
        if result.success && !missing.is_empty() {
            eprintln!("  warning: {}: no answer for {}", source, missing.join(", "));
        }
    }

    match &args.out {
        Some(path) => {
            let json = output::json::render(&results)?;
            std::fs::write(path, json)?;
            eprintln!("{} form(s) written to {}", results.len(), path.display());
        }
        None => match args.output.as_str() {
            "json" => println!("{}", output::json::render(&results)?),
            _ => output::table::print(&results, template),
        },
    }

    Ok(())
}
