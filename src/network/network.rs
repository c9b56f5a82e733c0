use rand::Rng;

use crate::activation::sigmoid::sigmoid_derivative;
use crate::layers::dense::Layer;
use crate::loss::mse::MseLoss;
use crate::math::matrix::Matrix;

/// The fixed 2-2-1 feed-forward network: two input features, one hidden
/// layer of two sigmoid units, one sigmoid output unit.
#[derive(Debug, Clone)]
pub struct Network {
    pub hidden: Layer,
    pub output: Layer,
}

/// Activations of one forward pass. Transient: recomputed every epoch and
/// consumed by the matching backward pass.
#[derive(Debug, Clone)]
pub struct Activations {
    /// Hidden layer output A1, shape (2, N).
    pub hidden: Matrix,
    /// Predicted output Ŷ, shape (1, N).
    pub output: Matrix,
}

/// Parameter gradients of one backward pass. Each field has the shape of
/// the parameter it differentiates.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub hidden_weights: Matrix,
    pub hidden_biases: Matrix,
    pub output_weights: Matrix,
    pub output_biases: Matrix,
}

impl Network {
    /// Initializes all four parameter tensors from uniform [0, 1) draws in
    /// a fixed order (hidden weights, hidden biases, output weights, output
    /// biases), so a seeded random source reproduces the same network.
    pub fn random_using<R: Rng + ?Sized>(rng: &mut R) -> Network {
        Network {
            hidden: Layer::random_using(2, 2, rng),
            output: Layer::random_using(2, 1, rng),
        }
    }

    /// Builds a network from explicit layers.
    pub fn from_layers(hidden: Layer, output: Layer) -> Network {
        assert_eq!(
            hidden.weights.cols, output.weights.rows,
            "Matrices are of incorrect sizes"
        );

        Network { hidden, output }
    }

    /// Forward propagation: A1 = σ(W0ᵀ·X + B0), Ŷ = σ(W1ᵀ·A1 + B1).
    ///
    /// A pure function of the current parameters and `x`; it does not store
    /// anything on the network.
    pub fn forward(&self, x: &Matrix) -> Activations {
        let hidden = self.hidden.activate(x);
        let output = self.output.activate(&hidden);
        Activations { hidden, output }
    }

    /// Backpropagation: the gradient of the half-MSE loss with respect to
    /// every parameter, by the chain rule from output layer to input layer.
    ///
    /// Uses σ'(z) = a(1 − a) on the stored activations, so no pre-activation
    /// values need to be kept around.
    pub fn backward(&self, x: &Matrix, y: &Matrix, acts: &Activations) -> Gradients {
        // ∂L/∂Ŷ = (Ŷ − Y) / N
        let dy_hat = MseLoss::derivative(&acts.output, y);

        // δ2 = Ŷ(1 − Ŷ) ⊙ ∂L/∂Ŷ
        let dz2 = acts.output.map(sigmoid_derivative).hadamard(&dy_hat);
        let output_weights = acts.hidden.clone() * dz2.transpose();
        let output_biases = dz2.row_sum();

        // δ1 = A1(1 − A1) ⊙ (W1·δ2)
        let dz1 = acts
            .hidden
            .map(sigmoid_derivative)
            .hadamard(&(self.output.weights.clone() * dz2));
        let hidden_weights = x.clone() * dz1.transpose();
        let hidden_biases = dz1.row_sum();

        Gradients {
            hidden_weights,
            hidden_biases,
            output_weights,
            output_biases,
        }
    }
}
