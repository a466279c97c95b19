//! Times taking the top `take` of `size` random integers with a full sort
//! versus the lazy heap.
//!
//! Usage: `priority_bench <size> <take> [--seed N]`
//!
//! `PRIORITY_SORT_INSERTION_THRESHOLD` tunes the heap; `RUST_LOG` controls
//! log output.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use priority_sort::{HeapConfig, HeapKind, NaturalOrder, PriorityHeap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const VALUE_RANGE: u32 = 10_000;

#[derive(Debug, Error)]
enum BenchError {
    #[error("usage: priority_bench <size> <take> [--seed N]")]
    Usage,
    #[error("invalid {name} '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("take ({take}) must be between 1 and size ({size})")]
    TakeOutOfRange { take: usize, size: usize },
    #[error("sorted prefixes disagree at position {0}")]
    Mismatch(usize),
    #[error(transparent)]
    Config(#[from] priority_sort::Error),
}

#[derive(Debug)]
struct Args {
    size: usize,
    take: usize,
    seed: u64,
}

fn parse_number<N: std::str::FromStr>(name: &'static str, raw: &str) -> Result<N, BenchError> {
    let digits: String = raw.chars().filter(|c| *c != ',' && *c != '_').collect();
    digits.parse().map_err(|_| BenchError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, BenchError> {
    let size = parse_number("size", &args.next().ok_or(BenchError::Usage)?)?;
    let take = parse_number("take", &args.next().ok_or(BenchError::Usage)?)?;
    let mut seed = rand::random();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--seed" => seed = parse_number("seed", &args.next().ok_or(BenchError::Usage)?)?,
            _ => return Err(BenchError::Usage),
        }
    }
    if take == 0 || take > size {
        return Err(BenchError::TakeOutOfRange { take, size });
    }
    Ok(Args { size, take, seed })
}

fn run(args: Args) -> Result<(), BenchError> {
    let config = HeapConfig::from_env()?.with_kind(HeapKind::Max);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let values: Vec<u32> = (0..args.size).map(|_| rng.gen_range(0..VALUE_RANGE)).collect();
    tracing::info!(size = args.size, take = args.take, seed = args.seed, "generated input");

    println!("Testing full sort...");
    let mut full = values.clone();
    let start = Instant::now();
    full.sort_unstable_by(|a, b| b.cmp(a));
    full.truncate(args.take);
    let full_elapsed = start.elapsed();

    println!("Testing heap sort...");
    let start = Instant::now();
    let mut heap = PriorityHeap::with_config(values, |_| NaturalOrder, config);
    let lazy: Vec<u32> = heap.sort().take(args.take).copied().collect();
    let heap_elapsed = start.elapsed();
    tracing::debug!(total_sorted = heap.total_sorted(), "heap sequence stopped");

    if let Some(position) = full.iter().zip(&lazy).position(|(a, b)| a != b) {
        return Err(BenchError::Mismatch(position));
    }

    println!("Full sort: {full_elapsed:?}");
    println!("Heap sort: {heap_elapsed:?}");
    println!("Heap sort is {:.2}% faster", faster_percent(full_elapsed, heap_elapsed));
    println!("Or, full sort is {:.2}% slower", slower_percent(full_elapsed, heap_elapsed));
    Ok(())
}

fn faster_percent(baseline: Duration, candidate: Duration) -> f64 {
    let baseline = baseline.as_secs_f64();
    (baseline - candidate.as_secs_f64()) / baseline * 100.0
}

fn slower_percent(baseline: Duration, candidate: Duration) -> f64 {
    let candidate_secs = candidate.as_secs_f64();
    (baseline.as_secs_f64() - candidate_secs) / candidate_secs * 100.0
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ (BenchError::Usage
        | BenchError::InvalidNumber { .. }
        | BenchError::TakeOutOfRange { .. })) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_size_take_and_seed() {
        let parsed = parse_args(args(&["10,000", "100", "--seed", "7"])).unwrap();
        assert_eq!(parsed.size, 10_000);
        assert_eq!(parsed.take, 100);
        assert_eq!(parsed.seed, 7);
    }

    #[test]
    fn missing_take_is_usage_error() {
        assert!(matches!(parse_args(args(&["10"])), Err(BenchError::Usage)));
    }

    #[test]
    fn unparseable_size_is_rejected() {
        assert!(matches!(
            parse_args(args(&["ten", "1"])),
            Err(BenchError::InvalidNumber { name: "size", .. })
        ));
    }

    #[test]
    fn take_beyond_size_is_rejected() {
        assert!(matches!(
            parse_args(args(&["5", "6"])),
            Err(BenchError::TakeOutOfRange { take: 6, size: 5 })
        ));
    }

    #[test]
    fn run_agrees_with_full_sort() {
        let parsed = Args {
            size: 2_000,
            take: 50,
            seed: 11,
        };
        assert!(run(parsed).is_ok());
    }
}
