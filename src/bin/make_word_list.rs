use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordcount_bench::word_list::{self, DEFAULT_COUNT, DEFAULT_SAMPLE};

/// Generate benchmark input for wordcount-bench
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Write a long stream of words drawn from a random sample of WORDLIST.",
    long_about = None
)]
struct Args {
    /// Word list, one word per line
    #[arg(value_name = "WORDLIST", value_hint = clap::ValueHint::FilePath)]
    word_list: PathBuf,

    /// How many distinct words to sample from the list
    #[arg(long, default_value_t = DEFAULT_SAMPLE)]
    sample: usize,

    /// How many words to write
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Seed for reproducible output (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("make-word-list: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.word_list)
        .with_context(|| format!("failed to read word list '{}'", args.word_list.display()))?;
    let words = word_list::parse_word_list(&text);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create '{}'", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    word_list::generate(&words, args.sample, args.count, &mut rng, &mut out)?;
    Ok(())
}
