// Measures the empirical false positive rate of filters sized for a target rate.

use anyhow::Result;
use bloomf::{build_filter, Filter, Params};
use clap::Parser;
use log::info;
use rand::distributions::Alphanumeric;
use rand::Rng;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of keys inserted into each filter
    #[arg(short, long, default_value_t = 100_000)]
    items: usize,

    /// Number of never-inserted keys queried
    #[arg(short, long, default_value_t = 1_000_000)]
    queries: usize,

    /// Target false positive rates to measure
    #[arg(short, long, default_values_t = vec![0.1, 0.01, 0.001, 0.0001])]
    rates: Vec<f64>,
}

fn random_keys(count: usize, len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(len).map(char::from).collect())
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let arg = Args::parse();
    // Different lengths keep the query set disjoint from the inserted keys.
    let keys = random_keys(arg.items, 15);
    let queries = random_keys(arg.queries, 16);

    println!("target,bits,hashes,theoretical,measured");
    for rate in arg.rates {
        let params = Params::optimal(keys.len(), rate)?;
        let filter = build_filter(&keys, rate)?;
        info!("built filter for p={}, load factor {:.3}", rate, filter.load_factor());

        let false_positives = queries.iter().filter(|key| filter.contains(*key)).count();
        println!(
            "{},{},{},{:.6},{:.6}",
            rate,
            params.bits(),
            params.hashes(),
            params.false_positive_rate(keys.len()),
            false_positives as f64 / queries.len() as f64
        );
    }
    Ok(())
}
