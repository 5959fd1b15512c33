use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordcount_bench::{BenchError, Harness, ReadMode, default_strategies, write_report};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    " ",
    env!("BUILD_TARGET"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    version = VERSION,
    about = "Time linear search, ordered map and hash map word counting over FILE.",
    long_about = r#"Time linear search, ordered map and hash map word counting over FILE.
A word is a run of lowercase ASCII letters, truncated to its first 8 characters.
Each strategy re-reads FILE from scratch; a FILE that cannot be read counts as empty."#
)]
struct BenchArgs {
    /// Stream FILE byte by byte instead of loading it into memory first
    #[arg(short = 's', long = "stream", action = ArgAction::SetTrue)]
    stream: bool,

    /// Print every distinct word and its count before each timing line
    #[arg(short = 'p', long = "print-results", action = ArgAction::SetTrue)]
    print_results: bool,

    /// Input text file
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: PathBuf,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("wordcount-bench: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let mode = if args.stream {
        ReadMode::Stream
    } else {
        ReadMode::Whole
    };

    let reports = Harness::new(&args.file, mode)
        .collect_entries(args.print_results)
        .run(&default_strategies());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &reports, args.print_results).context("failed to print results")?;
    Ok(())
}

fn parse_args() -> Result<BenchArgs> {
    match BenchArgs::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => Err(BenchError::MissingArgument.into()),
        // --help, --version and malformed flags keep clap's own output and exit code
        Err(e) => e.exit(),
    }
}
