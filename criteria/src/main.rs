//! parse-criteria CLI - turn a localization spreadsheet into loctool criteria
//!
//! ```bash
//! parse-criteria strings.xlsx                  # criteria on stdout
//! parse-criteria strings.xlsx --sheet Menu     # read another worksheet
//! parse-criteria export.csv -d ';' -o crit.txt # CSV input, file output
//! ```
//!
//! stdout only ever carries criteria; diagnostics go to stderr.
//!
//! Exit codes: 0 success, 1 usage error, 2 unreadable input.

use clap::error::ErrorKind;
use clap::Parser;
use loc_criteria::logs::{init_logging, log_debug, log_error, log_usage, LogConfig};
use loc_criteria::{
    parse_criteria_file, write_output, CriteriaError, CriteriaResult, OutputFormat, ReadOptions,
};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "parse-criteria <excel-file>";

#[derive(Parser)]
#[command(name = "parse-criteria", version)]
#[command(about = "Convert a localization spreadsheet into loctool criteria lines", long_about = None)]
struct Cli {
    /// Spreadsheet to read (xlsx, xlsm, xlsb, xls, ods, csv, tsv)
    #[arg(value_name = "excel-file")]
    input: OsString,

    /// Extra positional arguments, ignored
    #[arg(hide = true)]
    ignored: Vec<OsString>,

    /// Worksheet to read (default: first worksheet)
    #[arg(short, long, env = "PARSE_CRITERIA_SHEET")]
    sheet: Option<String>,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let result = match Cli::try_parse() {
        Ok(cli) => {
            init_logging(&LogConfig { quiet: cli.quiet });
            run(&cli)
        }
        Err(e) => {
            let err = usage_error(e);
            init_logging(&LogConfig::default());
            Err(err)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> CriteriaResult<()> {
    if !cli.ignored.is_empty() {
        log_debug(format!("ignoring {} extra argument(s)", cli.ignored.len()));
    }

    let options = ReadOptions {
        sheet: cli.sheet.clone(),
        delimiter: cli.delimiter,
    };

    let result = parse_criteria_file(Path::new(&cli.input), &options)?;
    write_output(&result.criteria, cli.format, cli.output.as_deref())?;
    Ok(())
}

/// Turn a clap failure into [`CriteriaError::Usage`].
///
/// `--help` and `--version` are not failures: clap prints them and exits 0.
fn usage_error(err: clap::Error) -> CriteriaError {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::MissingRequiredArgument => CriteriaError::Usage(None),
        _ => {
            let rendered = err.to_string();
            let reason = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            CriteriaError::Usage(Some(reason.to_string()))
        }
    }
}

/// Write the diagnostic lines for a failed run.
fn report(err: &CriteriaError) {
    match err {
        CriteriaError::Usage(reason) => {
            if let Some(reason) = reason {
                log_error(reason.as_str());
            }
            log_usage(USAGE);
        }
        other => log_error(other.to_string()),
    }
}

/// Accept a single ASCII character, or `\t` / `tab` for a tab.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
            }
        }
    }
}
