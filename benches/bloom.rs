#[macro_use]
extern crate criterion;
extern crate bloomf;
extern crate rand;

use bloomf::{build_filter, BloomFilter, Filter, Params};
use criterion::{BenchmarkId, Criterion};
use rand::distributions::Alphanumeric;
use rand::Rng;

const SAMPLE_SIZE: usize = 500_000;
const FALSE_POSITIVE_RATE: f64 = 0.01;

fn keys() -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..SAMPLE_SIZE)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(20).map(char::from).collect())
        .collect()
}

fn from(c: &mut Criterion) {
    let mut group = c.benchmark_group("BloomFilter");
    let group = group.sample_size(10);

    let keys = keys();

    group.bench_with_input(BenchmarkId::new("from", SAMPLE_SIZE), &keys, |b, keys| {
        b.iter(|| build_filter(keys, FALSE_POSITIVE_RATE).unwrap());
    });
}

fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("BloomFilter");

    let mut filter: BloomFilter =
        BloomFilter::new(Params::optimal(SAMPLE_SIZE, FALSE_POSITIVE_RATE).unwrap());

    group.bench_function(BenchmarkId::new("insert", SAMPLE_SIZE), |b| {
        b.iter(|| filter.insert("someone@example.com"));
    });
}

fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("BloomFilter");

    let keys = keys();
    let filter = build_filter(&keys, FALSE_POSITIVE_RATE).unwrap();

    group.bench_function(BenchmarkId::new("contains/present", SAMPLE_SIZE), |b| {
        let key = &keys[keys.len() / 2];
        b.iter(|| filter.contains(key));
    });

    group.bench_function(BenchmarkId::new("contains/absent", SAMPLE_SIZE), |b| {
        b.iter(|| filter.contains("nobody@example.org"));
    });
}

criterion_group!(bloom, from, insert, contains);
criterion_main!(bloom);
