use clap::Parser;
use motif_search_rs::config::{Algorithm, SearchConfig};
use motif_search_rs::error::MotifError;
use motif_search_rs::fasta::{read_fasta, sequences};
use motif_search_rs::logging::init_tracing;
use motif_search_rs::restart::{run_search, SearchOutcome};
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Motif search error: {0}")]
    Motif(#[from] MotifError),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Missing label column in input file")]
    MissingLabelColumn,
}

#[derive(Parser)]
#[command(
    name = "motif-finder",
    about = "Finds a shared motif of length k across a set of DNA sequences",
    long_about = "A tool for finding one k-mer per sequence such that the chosen k-mers are as similar \
                  to each other as possible. Supports greedy search, randomized search and Gibbs \
                  sampling; the randomized algorithms are restarted many times and the lowest-scoring \
                  motif set is kept.",
    version,
    after_help = "Example usage:\n    \
                  motif-finder upstream.fasta -k 15 --algorithm gibbs --iterations 2000 --restarts 20\n    \
                  motif-finder dosr.fasta -k 12 --algorithm randomized --restarts 1000 --output motifs.csv",
    color = clap::ColorChoice::Always
)]
#[derive(Debug)]
struct Args {
    /// Path to input FASTA file
    /// All sequences must only contain A, C, G and T
    #[arg(value_name = "FASTA_FILE")]
    fasta_file: String,

    /// Motif length
    #[arg(short, long)]
    k: usize,

    /// Number of leading sequences to search (defaults to all)
    #[arg(short, long)]
    t: Option<usize>,

    /// Search heuristic: greedy, randomized or gibbs
    #[arg(long, default_value = "gibbs")]
    algorithm: Algorithm,

    /// Gibbs sampler iterations per restart
    #[arg(long, default_value = "100")]
    iterations: usize,

    /// Independent restarts of the randomized algorithms
    #[arg(long, default_value = "20")]
    restarts: usize,

    /// Seed of the random source; equal seeds give equal motifs
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Number of worker threads for restarts (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Run restarts on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Optional path for a CSV table of the chosen motifs
    #[arg(long, value_name = "OUTPUT_FILE")]
    output: Option<String>,
}

impl Args {
    fn search_config(&self) -> SearchConfig {
        SearchConfig {
            k: self.k,
            t: self.t,
            algorithm: self.algorithm,
            iterations: self.iterations,
            restarts: self.restarts,
            seed: self.seed,
            parallel: !self.sequential,
        }
    }
}

fn motif_table(df: &DataFrame, outcome: &SearchOutcome) -> Result<DataFrame, FinderError> {
    let labels: Vec<String> = df
        .column("label")
        .map_err(|_| FinderError::MissingLabelColumn)?
        .str()?
        .into_iter()
        .take(outcome.motifs.len())
        .map(|label| label.unwrap_or_default().to_string())
        .collect();

    let table = DataFrame::new(vec![
        Column::new("label".into(), labels),
        Column::new("motif".into(), outcome.motifs.clone()),
    ])?;

    Ok(table)
}

fn main() -> Result<(), FinderError> {
    let start_time = std::time::Instant::now();

    let args = Args::parse();
    init_tracing();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let df = read_fasta(&args.fasta_file)?;
    let dna = sequences(&df)?;
    info!(sequences = dna.len(), file = %args.fasta_file, "loaded sequences");

    let outcome = run_search(&dna, &args.search_config())?;

    println!("score: {}", outcome.score);
    println!("consensus: {}", outcome.consensus);
    for motif in &outcome.motifs {
        println!("{}", motif);
    }

    if let Some(output) = &args.output {
        // Create output directory if it doesn't exist
        if let Some(parent) = Path::new(output).parent() {
            fs::create_dir_all(parent)?;
        }
        let mut table = motif_table(&df, &outcome)?;
        let mut file = File::create(output)?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut table)?;
    }

    let elapsed = start_time.elapsed();
    info!("Total execution time: {:.4} seconds", elapsed.as_secs_f64());

    Ok(())
}
