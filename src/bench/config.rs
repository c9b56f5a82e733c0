use serde::{Serialize, Deserialize};

/// Benchmark harness configuration.
///
/// The defaults reproduce the reference benchmark: ten fixed seeds, 100 000
/// epochs per run, learning rate 0.5, runtimes written to `data/rust.txt`.
/// Every field carries a serde default so a partial JSON config file only
/// needs to name the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Seeds to run, in order. Each seed gets one independently-initialized
    /// and independently-trained network.
    pub seeds: Vec<u64>,
    /// Epochs per training run.
    pub epochs: usize,
    /// Gradient-descent learning rate α.
    pub learning_rate: f64,
    /// Path of the line-oriented runtimes file: one integer millisecond
    /// count per line, in seed order.
    pub output: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            seeds: vec![2, 10, 24, 45, 98, 120, 350, 600, 899, 1000],
            epochs: 100_000,
            learning_rate: 0.5,
            output: "data/rust.txt".to_string(),
        }
    }
}

impl BenchConfig {
    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `BenchConfig` from a JSON file previously written by
    /// `save_json` (or by hand).
    pub fn load_json(path: &str) -> std::io::Result<BenchConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
