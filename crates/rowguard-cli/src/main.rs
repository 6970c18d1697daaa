mod constructor;
mod errors;
mod parser;
mod runner;

use clap::{Parser, ValueEnum};

/// Output format for the validation run
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable report on standard output
    Stdout,
    /// Machine-readable JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "rowguard",
    version,
    about = "rowguard - declarative row validation for tabular files",
    long_about = "rowguard validates the rows of a worksheet (CSV) against a \
                  declarative rule set loaded from a JSON configuration \
                  document. Failing rows are annotated in the configured \
                  error column and an annotated copy is written, named after \
                  the input file plus the error count.\n\n\
                  Example usage:\n  \
                  rowguard input.csv --config .validate.json"
)]
struct Args {
    /// Worksheet file (CSV) to validate
    #[arg(value_name = "FILE")]
    file: String,

    /// Path to the JSON validation rule set
    #[arg(short, long, value_name = "FILE", default_value = ".validate.json")]
    config: String,

    /// Output format for the run result
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// Enable debug mode with detailed error backtraces
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let debug = args.debug;

    if let Err(err) = runner::run(args) {
        if debug || std::env::var("RUST_BACKTRACE").is_ok() {
            eprintln!("Error: {:?}", err);
        } else {
            eprintln!("Error: {:#}", err);
            eprintln!("\nHint: Run with --debug flag for detailed stack traces");
        }
        std::process::exit(1);
    }
}
