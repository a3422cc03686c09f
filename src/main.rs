mod chunker;
mod compose;
mod config;
mod error;
mod filter;
mod ingest;
mod overlap;
mod pairing;
mod pipeline;
mod store;
mod year;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing_subscriber::EnvFilter;

use config::{DEFAULT_SEED, GenerationConfig};
use error::{Error, Result};

#[derive(Parser)]
#[command(
    name = "figure_threads",
    about = "Pair historical figures whose lifetimes overlapped and compose threads about them"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pair every eligible figure and write all threads → output/threads.json
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,
        /// Where to write the thread list
        #[arg(long, default_value = store::DEFAULT_THREADS_PATH)]
        output: PathBuf,
    },
    /// Print one thread for the first qualifying pair
    Sample {
        #[command(flatten)]
        generation: GenerationArgs,
    },
    /// Print a thread from a generated thread list
    Show {
        threads: PathBuf,
        /// Thread id; picked with the seed when omitted
        #[arg(long)]
        id: Option<usize>,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// List ids of threads that were accepted or rejected
    Scan { threads: PathBuf },
}

/// Generation settings: the command's defaults or the TOML file, then flags.
#[derive(Args, Debug)]
struct GenerationArgs {
    /// Record file, or a directory of *.json record files
    records: PathBuf,
    /// TOML file with generation settings
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    min_overlap: Option<u32>,
    #[arg(long)]
    max_overlap: Option<u32>,
    /// Only pair figures born before this year (negative for BCE)
    #[arg(long, allow_hyphen_values = true)]
    birth_cutoff: Option<i32>,
    /// Share of the most popular figures to pair, in (0, 1]
    #[arg(long = "popularity")]
    popularity_fraction: Option<f64>,
    #[arg(long)]
    max_bio_segments: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
}

impl GenerationArgs {
    fn resolve(&self, defaults: GenerationConfig) -> Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_toml_file(path)?,
            None => defaults,
        };
        if let Some(v) = self.min_overlap {
            config.min_overlap = v;
        }
        if let Some(v) = self.max_overlap {
            config.max_overlap = v;
        }
        if let Some(v) = self.birth_cutoff {
            config.birth_cutoff = v;
        }
        if let Some(v) = self.popularity_fraction {
            config.popularity_fraction = v;
        }
        if let Some(v) = self.max_bio_segments {
            config.max_bio_segments = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("figure_threads=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate { generation, output } => run_generate(&generation, &output),
        Command::Sample { generation } => run_sample(&generation),
        Command::Show { threads, id, seed } => run_show(&threads, id, seed),
        Command::Scan { threads } => run_scan(&threads),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
//  GENERATE MODE: records → threads JSON
// ═══════════════════════════════════════════════════════════════════════

fn run_generate(generation: &GenerationArgs, output: &Path) -> Result<()> {
    let config = generation.resolve(GenerationConfig::default())?;
    tracing::info!(?config, records = %generation.records.display(), "starting generation");

    let records = store::load_records(&generation.records)?;
    let threads = pipeline::generate_threads(&records, &config)?;
    store::write_threads(output, &threads)
}

// ═══════════════════════════════════════════════════════════════════════
//  SAMPLE MODE: one quick thread to stdout
// ═══════════════════════════════════════════════════════════════════════

fn run_sample(generation: &GenerationArgs) -> Result<()> {
    let config = generation.resolve(GenerationConfig::sampling())?;
    let records = store::load_records(&generation.records)?;

    match pipeline::sample_thread(&records, &config)? {
        Some(thread) => println!("{}", thread.render()),
        None => tracing::warn!(
            min_overlap = config.min_overlap,
            max_overlap = config.max_overlap,
            "no pair of figures overlaps within the window"
        ),
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
//  SHOW / SCAN MODES: inspect a generated thread list
// ═══════════════════════════════════════════════════════════════════════

fn run_show(path: &Path, id: Option<usize>, seed: u64) -> Result<()> {
    let threads = store::read_threads(path)?;

    let thread = match id {
        Some(id) => threads.iter().find(|t| t.id == id),
        None => threads.choose(&mut StdRng::seed_from_u64(seed)),
    };
    let thread = thread.ok_or_else(|| match id {
        Some(id) => Error::NotFound(format!("thread {id} in {}", path.display())),
        None => Error::NotFound(format!("any thread in {}", path.display())),
    })?;

    println!("{}", thread.render());
    Ok(())
}

fn run_scan(path: &Path) -> Result<()> {
    let threads = store::read_threads(path)?;
    let reviewed: Vec<_> = threads.iter().filter(|t| t.is_reviewed()).collect();

    tracing::info!(
        threads = threads.len(),
        reviewed = reviewed.len(),
        "scanned thread list"
    );
    for thread in reviewed {
        println!("{}\t{:?}", thread.id, thread.status);
    }
    Ok(())
}
