mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anketa",
    version,
    about = "Extract questionnaire answers from scanned paper forms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract answers from OCR text (a text file, or "-" for stdin)
    Parse {
        /// Path to a UTF-8 text file produced by an OCR engine
        input_file: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,
    },
    /// OCR an image with tesseract and extract answers
    Scan {
        /// Path to a photographed or scanned form
        image_file: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        #[command(flatten)]
        ocr: OcrArgs,
    },
    /// Scan every image in a folder
    Batch {
        /// Folder with form images (jpg, jpeg, png, tif, tiff, bmp)
        folder: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,

        #[command(flatten)]
        ocr: OcrArgs,
    },
    /// Manage and inspect questionnaire templates
    Template {
        #[command(subcommand)]
        action: TemplateAction,
    },
}

/// Options shared by every command that produces scan results.
#[derive(Args)]
pub struct ScanArgs {
    /// Custom JSON template file
    #[arg(short, long = "template", value_name = "FILE", conflicts_with = "preset")]
    template: Option<PathBuf>,

    /// Predefined template (default: muzloto-v1)
    #[arg(short, long = "preset", value_name = "NAME")]
    preset: Option<String>,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    output: String,

    /// Write results as JSON to a file
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Maximum characters of raw OCR text kept in JSON output
    #[arg(long, default_value_t = 500)]
    raw_limit: usize,

    /// Let questions skipped while looking for an answer be matched too
    #[arg(long)]
    revisit_skipped: bool,
}

/// Tesseract settings.
#[derive(Args)]
pub struct OcrArgs {
    /// tesseract executable
    #[arg(long, value_name = "PATH", default_value = "tesseract")]
    tesseract: PathBuf,

    /// Directory with *.traineddata files
    #[arg(long, value_name = "DIR")]
    tessdata: Option<PathBuf>,

    /// Recognition languages
    #[arg(long, default_value = "rus+eng")]
    lang: String,

    /// Page segmentation mode
    #[arg(long, default_value_t = 3)]
    psm: u8,

    /// OCR engine mode
    #[arg(long, default_value_t = 1)]
    oem: u8,
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List predefined templates
    List,
    /// Show the questions of a predefined template
    Show {
        /// Preset name (e.g., "muzloto-v1")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom template file
    Validate {
        /// Path to JSON template file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input_file, scan } => commands::parse::run(input_file, &scan),
        Commands::Scan {
            image_file,
            scan,
            ocr,
        } => commands::scan::run(image_file, &scan, &ocr),
        Commands::Batch { folder, scan, ocr } => commands::batch::run(folder, &scan, &ocr),
        Commands::Template { action } => match action {
            TemplateAction::List => commands::template::list(),
            TemplateAction::Show { preset } => commands::template::show(&preset),
            TemplateAction::Schema => commands::template::schema(),
            TemplateAction::Validate { file } => commands::template::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
