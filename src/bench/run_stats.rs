use serde::{Serialize, Deserialize};

/// Per-seed statistics emitted by the benchmark harness, one per completed
/// training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Seed the run's parameters were initialized from.
    pub seed: u64,
    /// Half-MSE of the trained network on the training set.
    pub final_loss: f64,
    /// Wall-clock duration of initialization plus the full training loop,
    /// in milliseconds.
    pub elapsed_ms: u64,
}
