//! odscsv CLI - OpenDocument spreadsheet conversion tool
//!
//! A command-line tool for converting ODS files to gap-preserving delimited
//! text or sparse JSON.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use odscsv::render::{DelimitedOptions, JsonFormat};
use odscsv::{DuplicateSheetPolicy, ParseOptions, RepeatPolicy, Workbook};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default threshold for the clamp and reject repeat policies.
const DEFAULT_REPEAT_LIMIT: usize = 1000;

/// OpenDocument spreadsheet to delimited text
#[derive(Parser)]
#[command(
    name = "odscsv",
    author = "iyulab",
    version,
    about = "Convert OpenDocument spreadsheets to delimited text",
    long_about = "odscsv - Sparse, gap-preserving OpenDocument spreadsheet conversion.\n\n\
                  Expands repeated rows and cells and writes every sheet as delimited text\n\
                  framed by $NEW_SHEET,<name> and $END_SHEET lines."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a spreadsheet to delimited text
    #[command(visible_alias = "csv")]
    Convert {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column separator
        #[arg(long, default_value = ",")]
        column_separator: String,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Convert a spreadsheet to sparse JSON
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Show format and sheet information
    Info {
        /// Input file path
        input: PathBuf,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Show version information
    Version,
}

/// Decoding flags shared by all subcommands that read a spreadsheet
#[derive(clap::Args)]
struct DecodeArgs {
    /// Treatment of repeat counts
    #[arg(long, default_value = "pass-through")]
    repeat_policy: RepeatMode,

    /// Threshold for the clamp and reject repeat policies
    #[arg(long, default_value_t = DEFAULT_REPEAT_LIMIT)]
    repeat_limit: usize,

    /// Treatment of sheets sharing a name
    #[arg(long, default_value = "fail")]
    duplicate_sheets: DuplicateMode,
}

impl DecodeArgs {
    fn to_options(&self) -> ParseOptions {
        let repeat_policy = match self.repeat_policy {
            RepeatMode::PassThrough => RepeatPolicy::PassThrough,
            RepeatMode::Clamp => RepeatPolicy::Clamp {
                limit: self.repeat_limit,
            },
            RepeatMode::Reject => RepeatPolicy::Reject {
                limit: self.repeat_limit,
            },
        };

        ParseOptions::new()
            .with_repeat_policy(repeat_policy)
            .with_duplicate_sheets(self.duplicate_sheets.into())
    }
}

/// Repeat count policy
#[derive(Clone, Copy, ValueEnum)]
enum RepeatMode {
    /// Expand counts as written
    PassThrough,
    /// Treat counts at or above the limit as 1
    Clamp,
    /// Fail on counts above the limit
    Reject,
}

/// Duplicate sheet name policy
#[derive(Clone, Copy, ValueEnum)]
enum DuplicateMode {
    /// Abort the conversion
    Fail,
    /// Keep the first sheet
    KeepFirst,
    /// Keep the last sheet
    Replace,
}

impl From<DuplicateMode> for DuplicateSheetPolicy {
    fn from(mode: DuplicateMode) -> Self {
        match mode {
            DuplicateMode::Fail => DuplicateSheetPolicy::Fail,
            DuplicateMode::KeepFirst => DuplicateSheetPolicy::KeepFirst,
            DuplicateMode::Replace => DuplicateSheetPolicy::Replace,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            column_separator,
            decode,
        } => {
            let workbook = decode_with_spinner(&input, &decode.to_options())?;
            let options = DelimitedOptions::new().with_column_separator(column_separator);

            let mut sink = open_output(output.as_deref())?;
            odscsv::render::write_delimited(&workbook, &options, &mut sink)?;
            sink.flush()?;

            if let Some(path) = output {
                println!(
                    "{} Converted {} sheets: {}",
                    "✓".green().bold(),
                    workbook.len(),
                    path.display()
                );
            }
        }

        Commands::Json {
            input,
            output,
            compact,
            decode,
        } => {
            let workbook = decode_with_spinner(&input, &decode.to_options())?;

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = odscsv::render::to_json(&workbook, format)?;

            let mut sink = open_output(output.as_deref())?;
            writeln!(sink, "{}", json)?;
            sink.flush()?;

            if let Some(path) = output {
                println!(
                    "{} Converted to JSON: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Info { input, decode } => {
            let pb = create_spinner("Analyzing spreadsheet...");

            let format = odscsv::detect_format_from_path(&input)?;
            let workbook = odscsv::parse_file_with_options(&input, &decode.to_options())?;

            pb.finish_and_clear();

            println!("{}", "Spreadsheet Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Format".bold(), format);
            println!("{}: {}", "Sheets".bold(), workbook.len());

            println!("\n{}", "Sheet Contents".cyan().bold());
            println!("{}", "─".repeat(40));
            for (name, sheet) in workbook.sheets() {
                let (rows, columns) = sheet.extent();
                println!(
                    "{}: {} cells in {} rows (extent {}x{})",
                    name.bold(),
                    sheet.cell_count(),
                    sheet.row_count(),
                    rows,
                    columns
                );
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "odscsv".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Sparse, gap-preserving OpenDocument spreadsheet conversion");
    println!();
    println!("Supported formats: ODS, OTS");
}

fn decode_with_spinner(input: &Path, options: &ParseOptions) -> Result<Workbook, odscsv::Error> {
    let pb = create_spinner("Decoding spreadsheet...");
    let result = odscsv::parse_file_with_options(input, options);
    pb.finish_and_clear();
    result
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
