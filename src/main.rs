//! xornet benchmark runner.
//!
//! Trains the fixed 2-2-1 XOR network once per seed, times every run, and
//! writes the line-oriented runtimes file picked up by the plotting step.
//!
//! Run with:
//!   cargo run --release
//! or with a JSON config overriding the defaults:
//!   cargo run --release -- bench.json

use xornet::{run_benchmark, BenchConfig};

fn main() -> std::io::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::load_json(&path)?,
        None => BenchConfig::default(),
    };

    let stats = run_benchmark(&config)?;

    println!();
    for run in &stats {
        println!(
            "seed {:>5}: {:>6} ms  (final loss {:.6})",
            run.seed, run.elapsed_ms, run.final_loss
        );
    }

    let runtimes: Vec<u64> = stats.iter().map(|s| s.elapsed_ms).collect();
    if let (Some(&max), Some(&min)) = (runtimes.iter().max(), runtimes.iter().min()) {
        let avg = runtimes.iter().sum::<u64>() / runtimes.len() as u64;
        println!();
        println!("avg {} ms, max {} ms, min {} ms over {} runs", avg, max, min, runtimes.len());
    }

    println!("Saved runtimes to `{}`", config.output);
    Ok(())
}
