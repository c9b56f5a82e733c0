use rand::Rng;
use serde::{Serialize, Deserialize};
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a (rows, cols) matrix with independent draws from the uniform
    /// distribution over [0, 1) using the given random source.
    ///
    /// Entries are drawn in row-major order, so for a fixed RNG state the
    /// result is fully reproducible.
    pub fn random_using<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>();
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data,
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            (self.data)
                .clone()
                .into_iter()
                .map(|row| row.into_iter().map(|x| functor(x)).collect())
                .collect(),
        )
    }

    /// Adds a (rows, 1) column vector to every column of `self`.
    pub fn add_col(&self, col: &Matrix) -> Matrix {
        assert_eq!(col.cols, 1, "add_col expects a column vector");
        assert_eq!(self.rows, col.rows, "Matrices are of incorrect sizes");

        let mut res = self.clone();

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] += col.data[i][0];
            }
        }

        res
    }

    /// Sums each row across its columns, keeping the column dimension.
    /// The result has shape (rows, 1).
    pub fn row_sum(&self) -> Matrix {
        let mut res = Matrix::zeros(self.rows, 1);

        for i in 0..self.rows {
            res.data[i][0] = self.data[i].iter().sum();
        }

        res
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.rows, rhs.rows);
        assert_eq!(self.cols, rhs.cols);

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
            })
            .collect();
        Matrix::from_data(data)
    }

    /// True when every entry is a finite real number (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|row| row.iter().all(|x| x.is_finite()))
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }

        res
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zeros_shape() {
        let m = Matrix::zeros(3, 2);
        assert_eq!(m.rows, 3);
        assert_eq!(m.cols, 2);
        assert!(m.data.iter().all(|row| row.iter().all(|&x| x == 0.0)));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = m.transpose();
        assert_eq!(t.rows, 3);
        assert_eq!(t.cols, 2);
        assert_eq!(t.data, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn test_matrix_product() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let c = a * b;
        assert_eq!(c.data, vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
    }

    #[test]
    fn test_product_shape() {
        let a = Matrix::zeros(2, 4);
        let b = Matrix::zeros(4, 3);
        let c = a * b;
        assert_eq!((c.rows, c.cols), (2, 3));
    }

    #[test]
    #[should_panic(expected = "incorrect sizes")]
    fn test_product_shape_mismatch_panics() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        let _ = a * b;
    }

    #[test]
    fn test_add_col_broadcast() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let col = Matrix::from_data(vec![vec![10.0], vec![20.0]]);
        let r = m.add_col(&col);
        assert_eq!(r.data, vec![vec![11.0, 12.0, 13.0], vec![24.0, 25.0, 26.0]]);
    }

    #[test]
    fn test_row_sum_keeps_column_dimension() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let s = m.row_sum();
        assert_eq!((s.rows, s.cols), (2, 1));
        assert_eq!(s.data, vec![vec![6.0], vec![15.0]]);
    }

    #[test]
    fn test_hadamard() {
        let a = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_data(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        let h = a.hadamard(&b);
        assert_eq!(h.data, vec![vec![5.0, 12.0], vec![21.0, 32.0]]);
    }

    #[test]
    fn test_random_using_is_reproducible() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = Matrix::random_using(2, 2, &mut rng_a);
        let b = Matrix::random_using(2, 2, &mut rng_b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_using_distinct_seeds_differ() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(8);
        let a = Matrix::random_using(2, 2, &mut rng_a);
        let b = Matrix::random_using(2, 2, &mut rng_b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_using_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let m = Matrix::random_using(4, 4, &mut rng);
        assert!(m.data.iter().flatten().all(|&x| (0.0..1.0).contains(&x)));
    }
}
