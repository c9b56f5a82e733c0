use crate::network::network::{Gradients, Network};

/// Plain gradient descent: no momentum, no adaptive scaling.
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update P ← P − α·(dP / N) to all four parameter tensors.
    ///
    /// Gradients are averaged over the `batch_size` examples they were
    /// accumulated from; averaging admits a larger learning rate. All four
    /// tensors come from the same forward/backward pass, so no update reads
    /// a partially-updated parameter set.
    pub fn step(&self, network: &mut Network, grads: Gradients, batch_size: usize) {
        let step = self.learning_rate / batch_size as f64;
        network
            .hidden
            .apply_gradients(grads.hidden_weights, grads.hidden_biases, step);
        network
            .output
            .apply_gradients(grads.output_weights, grads.output_biases, step);
    }
}
