use rand::Rng;

use crate::activation::sigmoid::sigmoid;
use crate::math::matrix::Matrix;

/// One fully-connected sigmoid layer.
///
/// `weights` has shape (fan_in, fan_out) and `biases` (fan_out, 1), so the
/// forward pass computes σ(Wᵀ·input + b) with the bias broadcast across the
/// example columns.
#[derive(Debug, Clone)]
pub struct Layer {
    pub weights: Matrix,
    pub biases: Matrix,
}

impl Layer {
    /// Initializes weights and biases from uniform [0, 1) draws.
    ///
    /// The draws must be random rather than constant so the units of a layer
    /// start out different: units with identical parameters receive identical
    /// gradients and can never specialize.
    pub fn random_using<R: Rng + ?Sized>(input_size: usize, size: usize, rng: &mut R) -> Layer {
        Layer {
            weights: Matrix::random_using(input_size, size, rng),
            biases: Matrix::random_using(size, 1, rng),
        }
    }

    /// Builds a layer from explicit parameter matrices.
    pub fn from_parts(weights: Matrix, biases: Matrix) -> Layer {
        assert_eq!(biases.cols, 1, "biases must be a column vector");
        assert_eq!(weights.cols, biases.rows, "Matrices are of incorrect sizes");

        Layer { weights, biases }
    }

    /// Forward pass for a batch: σ(Wᵀ·input + b).
    ///
    /// `input` has one example per column; the output keeps that layout with
    /// one row per unit of this layer.
    pub fn activate(&self, input: &Matrix) -> Matrix {
        (self.weights.transpose() * input.clone())
            .add_col(&self.biases)
            .map(sigmoid)
    }

    /// Applies pre-computed gradients scaled by `step`.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, step: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|g| g * step);
        self.biases = self.biases.clone() - biases_grad.map(|g| g * step);
    }
}
