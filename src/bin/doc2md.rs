//! CLI binary for doc2md.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig`, prints one `OK`/`FAIL` line per file, and closes
//! with a summary.

use anyhow::{Context, Result};
use clap::Parser;
use doc2md::{
    convert_batch, BatchProgressCallback, ConversionConfig, Doc2MdError, FileError, FileKind,
    KindFilter,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── Per-file reporting ───────────────────────────────────────────────────────

/// Prints the per-file contract lines as the batch progresses:
/// `OK   <path>` to stdout, `FAIL <path> -> <message>` to stderr.
struct StdioReporter {
    color: bool,
}

impl StdioReporter {
    fn tag(&self, ok: bool) -> String {
        match (ok, self.color) {
            (true, true) => green("OK  "),
            (true, false) => "OK  ".to_string(),
            (false, true) => red("FAIL"),
            (false, false) => "FAIL".to_string(),
        }
    }
}

impl BatchProgressCallback for StdioReporter {
    fn on_file_complete(&self, input: &Path, _written: &[PathBuf]) {
        println!("{} {}", self.tag(true), input.display());
    }

    fn on_file_error(&self, input: &Path, error: &FileError) {
        eprintln!("{} {} -> {}", self.tag(false), input.display(), error);
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert ./input into ./output (the defaults)
  doc2md

  # Explicit directories
  doc2md ~/Documents/reports ./reports-md

  # Only spreadsheets and CSV files
  doc2md --only spreadsheet,csv data md

  # Machine-readable batch report
  doc2md --json input output > report.json

SUPPORTED INPUT KINDS:
  Kind          Extensions     Backend
  ───────────   ────────────   ───────────────────────────
  spreadsheet   .xlsx, .xls    calamine (one table per sheet)
  csv           .csv           csv (string cells, no inference)
  text          .txt           verbatim, lossy UTF-8 decode
  word          .docx          docx-rs (paragraph text)
  pdf           .pdf           pdf-extract (text layer, no OCR)

OUTPUT LAYOUT:
  single-section inputs   <output>/<slug(stem)>.md
  multi-sheet workbooks   <output>/<slug(stem)>/<slug(sheet)>.md

EXIT CODES:
  0   batch completed (individual file failures are reported, not fatal)
  1   unexpected internal error
  2   input directory does not exist
"#;

/// Convert spreadsheets, CSV, text, Word and PDF documents to Markdown.
#[derive(Parser, Debug)]
#[command(
    name = "doc2md",
    version,
    about = "Convert .xlsx/.xls/.csv/.txt/.docx/.pdf files in a folder tree to Markdown",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input folder (scanned recursively).
    #[arg(default_value = "input")]
    input_dir: PathBuf,

    /// Output folder (created if missing; existing .md files are overwritten).
    #[arg(default_value = "output")]
    output_dir: PathBuf,

    /// Restrict conversion to these kinds (comma-separated):
    /// spreadsheet, csv, text, word, pdf.
    #[arg(long, env = "DOC2MD_ONLY", value_delimiter = ',')]
    only: Option<Vec<KindArg>>,

    /// Maximum length of sanitized output file name components.
    #[arg(long, env = "DOC2MD_MAX_SLUG_LEN", default_value_t = 120)]
    max_slug_len: usize,

    /// Print the batch report as JSON instead of per-file lines.
    #[arg(long, env = "DOC2MD_JSON")]
    json: bool,

    /// Disable ANSI colour in per-file lines.
    #[arg(long, env = "DOC2MD_NO_COLOR")]
    no_color: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOC2MD_VERBOSE")]
    verbose: bool,

    /// Suppress everything except FAIL lines and errors.
    #[arg(short, long, env = "DOC2MD_QUIET")]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Spreadsheet,
    Csv,
    Text,
    Word,
    Pdf,
}

impl From<KindArg> for FileKind {
    fn from(v: KindArg) -> Self {
        match v {
            KindArg::Spreadsheet => FileKind::Spreadsheet,
            KindArg::Csv => FileKind::Csv,
            KindArg::Text => FileKind::Text,
            KindArg::Word => FileKind::WordDocument,
            KindArg::Pdf => FileKind::Pdf,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    // ── Build config ─────────────────────────────────────────────────────
    let mut builder = ConversionConfig::builder().slug_max_len(cli.max_slug_len);
    if let Some(ref kinds) = cli.only {
        builder = builder.kinds(KindFilter::Only(
            kinds.iter().copied().map(FileKind::from).collect(),
        ));
    }
    if !cli.json && !cli.quiet {
        builder = builder.progress_callback(Arc::new(StdioReporter {
            color: !cli.no_color,
        }));
    } else if !cli.json {
        // Quiet mode still reports failures on stderr.
        builder = builder.progress_callback(Arc::new(QuietReporter {
            color: !cli.no_color,
        }));
    }
    let config = builder.build().context("invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let summary = match convert_batch(&cli.input_dir, &cli.output_dir, &config) {
        Ok(summary) => summary,
        Err(e @ Doc2MdError::InputDirNotFound { .. })
        | Err(e @ Doc2MdError::InputNotADirectory { .. }) => {
            eprintln!("ERROR: {e}");
            return Ok(ExitCode::from(2));
        }
        Err(e) => return Err(e).context("batch conversion failed"),
    };

    // ── Report ───────────────────────────────────────────────────────────
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to serialise batch report")?
        );
    } else if !cli.quiet {
        let count = if cli.no_color {
            summary.converted.to_string()
        } else {
            bold(&summary.converted.to_string())
        };
        println!(
            "\nDone. Converted {} file(s). Output: {}",
            count,
            summary.output_root.display()
        );
        if summary.failed > 0 {
            eprintln!("{} file(s) failed; see FAIL lines above.", summary.failed);
        }
    }

    // Per-file failures are reported, not fatal.
    Ok(ExitCode::SUCCESS)
}

/// Failure-only reporter used with `--quiet`.
struct QuietReporter {
    color: bool,
}

impl BatchProgressCallback for QuietReporter {
    fn on_file_error(&self, input: &Path, error: &FileError) {
        let tag = if self.color {
            red("FAIL")
        } else {
            "FAIL".to_string()
        };
        eprintln!("{tag} {} -> {}", input.display(), error);
    }
}
