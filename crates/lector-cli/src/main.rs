//! lector - interactive article recommender
//!
//! Loads a corpus of articles, vectorizes it with TF-IDF, and runs a
//! console loop: pick an article from a ranked menu, read it, get a fresh
//! menu ranked by similarity to what you just read.
//!
//! Usage:
//!   lector articles.json                 # menu of 10, re-ranked each round
//!   lector articles.csv --count 5        # smaller menus
//!   lector articles.json --sample 500    # down-sample a large corpus
//!   lector articles.json --seed 42       # reproducible picks

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod output;
mod session;

use error::{CliError, Result};
use lector::corpus::{Corpus, Format};
use lector::recommend::ContentRecommender;
use session::Session;

/// lector - content-based article recommender
#[derive(Parser)]
#[command(name = "lector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Articles file: CSV with title,text columns, or a JSON array
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Input format (inferred from the file extension by default)
    #[arg(long, value_name = "csv|json")]
    format: Option<String>,

    /// Number of recommendations per round
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// How many deliberately dissimilar picks each round includes
    #[arg(long, default_value_t = 2)]
    different: usize,

    /// Down-sample the corpus to N articles before vectorizing
    #[arg(long, value_name = "N")]
    sample: Option<usize>,

    /// Seed for reproducible sampling and initial picks
    #[arg(long)]
    seed: Option<u64>,
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.file.exists() {
        return Err(CliError::FileNotFound(cli.file.clone()));
    }
    if !cli.file.is_file() {
        return Err(CliError::NotAFile(cli.file.clone()));
    }

    let format = match &cli.format {
        Some(name) => Some(
            name.parse::<Format>()
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?,
        ),
        None => None,
    };

    let mut corpus = Corpus::load(&cli.file, format)?;
    if let Some(n) = cli.sample {
        corpus.sample(n, cli.seed);
    }
    println!("{} articles loaded", corpus.len());

    // A corpus smaller than the requested menu shrinks the menu.
    let count = cli.count.min(corpus.len());
    if count <= cli.different {
        return Err(CliError::InvalidArguments(format!(
            "--count ({count}) must exceed --different ({})",
            cli.different
        )));
    }

    let mut recommender = ContentRecommender::new().with_less_similar(cli.different);
    if let Some(seed) = cli.seed {
        recommender = recommender.with_seed(seed);
    }
    recommender.fit(&corpus.texts())?;

    let session = Session::new(corpus, recommender, count);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
