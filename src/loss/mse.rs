use crate::math::matrix::Matrix;

pub struct MseLoss;

impl MseLoss {
    /// Scalar half-MSE over all N examples: (1 / 2N) · Σ(predicted − expected)².
    /// The ½ factor cancels against the square's exponent when differentiating.
    pub fn loss(predicted: &Matrix, expected: &Matrix) -> f64 {
        assert_eq!(predicted.rows, expected.rows);
        assert_eq!(predicted.cols, expected.cols);

        let n = expected.cols as f64;
        let sum: f64 = predicted.data.iter().zip(expected.data.iter())
            .flat_map(|(row_p, row_e)| {
                row_p.iter().zip(row_e.iter()).map(|(p, e)| (p - e).powi(2))
            })
            .sum();
        sum / (2.0 * n)
    }

    /// Gradient of the loss w.r.t. the predictions: (predicted − expected) / N.
    pub fn derivative(predicted: &Matrix, expected: &Matrix) -> Matrix {
        assert_eq!(predicted.rows, expected.rows);
        assert_eq!(predicted.cols, expected.cols);

        let n = expected.cols as f64;
        (predicted.clone() - expected.clone()).map(|d| d / n)
    }
}
