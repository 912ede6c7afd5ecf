use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bloomf::{BloomFilter, Filter, HashFamily, Params, DEFAULT_FALSE_POSITIVE_RATE, DEFAULT_SEED};
use bloomf_cli::ingest::read_identifiers_from_path;
use bloomf_cli::report::write_report;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(version, about = "Checks identifiers against a Bloom filter built from a CSV database", long_about = None)]
struct Args {
    /// CSV file with the identifiers to index, one per record
    db: PathBuf,

    /// CSV file with the identifiers to check, one per record
    queries: PathBuf,

    /// Target false positive rate, strictly between 0 and 1
    #[arg(short = 'p', long, default_value_t = DEFAULT_FALSE_POSITIVE_RATE)]
    false_positive_rate: f64,

    /// Hash seed; filters are only comparable when built with the same seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// The files have no header record
    #[arg(long)]
    no_header: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let arg = Args::parse();
    let has_header = !arg.no_header;

    let db = read_identifiers_from_path(&arg.db, has_header)?;
    let params = Params::optimal(db.len(), arg.false_positive_rate)
        .with_context(|| format!("cannot size a filter for {}", arg.db.display()))?;
    info!(
        "indexing {} identifiers: m={} bits, k={} rounds",
        db.len(),
        params.bits(),
        params.hashes()
    );

    let mut filter: BloomFilter = BloomFilter::with_hasher(params, HashFamily::new(arg.seed));
    for id in &db {
        filter.insert(id);
    }
    info!(
        "filter load factor {:.3}, estimated false positive rate {:e}",
        filter.load_factor(),
        filter.estimated_false_positive_rate()
    );

    let queries = read_identifiers_from_path(&arg.queries, has_header)?;
    info!("checking {} identifiers", queries.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &queries, &filter).context("failed to write report")?;
    Ok(())
}
