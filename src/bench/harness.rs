use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::bench::config::BenchConfig;
use crate::bench::run_stats::RunStats;
use crate::data::xor::XorDataset;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

/// Runs one timed training run per configured seed and writes the runtimes
/// file consumed by downstream reporting.
///
/// Each run owns its own network and its own seeded random source, so runs
/// are fully independent of each other. The timing window encloses
/// parameter initialization plus the entire training loop.
pub fn run_benchmark(config: &BenchConfig) -> std::io::Result<Vec<RunStats>> {
    let dataset = XorDataset::new();
    let optimizer = Sgd::new(config.learning_rate);
    let train_config = TrainConfig::new(config.epochs);

    let mut stats = Vec::with_capacity(config.seeds.len());

    for &seed in &config.seeds {
        println!("Running with seed: {}", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Instant::now();

        let mut network = Network::random_using(&mut rng);
        let report = train_network(&mut network, &dataset, &optimizer, &train_config);

        stats.push(RunStats {
            seed,
            final_loss: report.final_loss,
            elapsed_ms: start.elapsed().as_millis() as u64,
        });
    }

    write_runtimes(&config.output, &stats)?;
    Ok(stats)
}

/// Writes one integer millisecond count per line, in seed order. This
/// line-oriented file is the only artifact the harness persists.
fn write_runtimes(path: &str, stats: &[RunStats]) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = BufWriter::new(File::create(path)?);
    for run in stats {
        writeln!(file, "{}", run.elapsed_ms)?;
    }
    file.flush()
}
