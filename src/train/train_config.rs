/// Configuration for a `train_network` run.
///
/// # Fields
/// - `epochs`      — number of full forward/backward/update passes over the
///                   training data; the loop always runs to completion, with
///                   no early stopping and no convergence check
/// - `record_loss` — when `true`, the loss is computed every epoch and the
///                   full trajectory is returned in the `TrainReport`; when
///                   `false` the epoch loop does no loss arithmetic at all,
///                   which keeps benchmark runs free of monitoring overhead
pub struct TrainConfig {
    pub epochs: usize,
    pub record_loss: bool,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with loss recording disabled.
    pub fn new(epochs: usize) -> Self {
        TrainConfig {
            epochs,
            record_loss: false,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(100_000)
    }
}
