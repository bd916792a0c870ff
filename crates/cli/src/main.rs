mod convert;
mod format;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::format::Format;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Adventure document converter.
#[derive(Parser)]
#[command(name = "advconv", version, about = "Adventure document converter")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one format of adventure json to another format
    Convert {
        /// Path to the input file
        #[arg(short, long)]
        source: PathBuf,
        /// Format of the input file
        #[arg(short, long, default_value = "5etools", value_enum)]
        format: Format,
        /// Path to the destination file
        #[arg(short, long)]
        destination: PathBuf,
        /// Format of the destination file
        #[arg(short, long, default_value = "5etools", value_enum)]
        target: Format,
        /// Reject entries that are neither strings nor typed objects
        #[arg(long)]
        strict: bool,
        /// Reject documents whose entries nest deeper than this
        #[arg(long)]
        max_depth: Option<usize>,
        /// Pretty-print the destination file
        #[arg(long)]
        pretty: bool,
    },

    /// Print the section outline of an adventure file
    Inspect {
        /// Path to the adventure file
        file: PathBuf,
        /// Format of the file
        #[arg(short, long, default_value = "5etools", value_enum)]
        format: Format,
        /// Reject entries that are neither strings nor typed objects
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            source,
            format,
            destination,
            target,
            strict,
            max_depth,
            pretty,
        } => {
            convert::cmd_convert(convert::ConvertOptions {
                source: &source,
                format,
                destination: &destination,
                target,
                strict,
                max_depth,
                pretty,
                output: cli.output,
                quiet: cli.quiet,
            });
        }
        Commands::Inspect {
            file,
            format,
            strict,
        } => {
            inspect::cmd_inspect(&file, format, strict, cli.output, cli.quiet);
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
