/// Result of one full training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// Half-MSE of the trained network on the training set, computed once
    /// after the final epoch.
    pub final_loss: f64,
    /// Per-epoch loss trajectory; `Some` only when
    /// `TrainConfig::record_loss` was set.
    pub loss_history: Option<Vec<f64>>,
}
