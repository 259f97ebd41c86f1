// Random covariance matrices and their principal axes.
//
// The `eigenvector` concept embeds an eigenvector of a freshly sampled 3×3
// covariance matrix. A random matrix M with entries in [-1, 1] is turned
// into its Gram matrix M·Mᵗ, which is symmetric positive semi-definite for
// any finite M. That keeps every eigenvalue real and the eigenvectors
// orthogonal, so nalgebra's symmetric solver applies directly.
//
// Used only by `concept.rs`.

use crate::error::{Result, VisionError};
use nalgebra::{Matrix3, SymmetricEigen, Vector3};
use xanadu_prng::DreamRng;

/// Iteration cap handed to the symmetric eigensolver.
const MAX_ITERATIONS: usize = 1_000;

/// An eigenpair of a covariance matrix.
#[derive(Clone, Debug)]
pub struct PrincipalAxis {
    pub eigenvalue: f64,
    pub eigenvector: Vector3<f64>,
}

/// Sample a 3×3 matrix with entries uniform in [-1, 1).
pub fn random_matrix(rng: &mut DreamRng) -> Matrix3<f64> {
    Matrix3::from_fn(|_, _| rng.range_f64(-1.0, 1.0))
}

/// Form the Gram matrix M·Mᵗ.
///
/// The product is averaged with its transpose so the result is exactly
/// symmetric, not merely symmetric up to summation order.
pub fn gram_matrix(m: &Matrix3<f64>) -> Matrix3<f64> {
    let g = m * m.transpose();
    (g + g.transpose()) * 0.5
}

/// Sample a covariance matrix from `rng`.
pub fn random_covariance(rng: &mut DreamRng) -> Matrix3<f64> {
    gram_matrix(&random_matrix(rng))
}

/// Eigendecompose a symmetric matrix, surfacing non-convergence as an error.
pub fn decompose(cov: &Matrix3<f64>) -> Result<SymmetricEigen<f64, nalgebra::U3>> {
    SymmetricEigen::try_new(*cov, f64::EPSILON, MAX_ITERATIONS).ok_or(VisionError::EigenSolver {
        max_iterations: MAX_ITERATIONS,
    })
}

/// The eigenpair with the largest eigenvalue.
pub fn dominant_axis(cov: &Matrix3<f64>) -> Result<PrincipalAxis> {
    let eigen = decompose(cov)?;
    let idx = eigen.eigenvalues.imax();
    Ok(PrincipalAxis {
        eigenvalue: eigen.eigenvalues[idx],
        eigenvector: eigen.eigenvectors.column(idx).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covariance_is_symmetric_psd() {
        for seed in 0..200 {
            let mut rng = DreamRng::new(seed);
            let cov = random_covariance(&mut rng);
            assert_eq!(cov, cov.transpose(), "seed {seed}: not symmetric");

            let eigen = decompose(&cov).unwrap();
            for value in eigen.eigenvalues.iter() {
                assert!(*value >= -1e-12, "seed {seed}: negative eigenvalue {value}");
            }
        }
    }

    #[test]
    fn test_gram_of_identity_is_identity() {
        let id = Matrix3::<f64>::identity();
        assert_eq!(gram_matrix(&id), id);
    }

    #[test]
    fn test_dominant_axis_is_an_eigenvector() {
        let mut rng = DreamRng::new(99);
        for _ in 0..50 {
            let cov = random_covariance(&mut rng);
            let axis = dominant_axis(&cov).unwrap();
            let residual = cov * axis.eigenvector - axis.eigenvector * axis.eigenvalue;
            assert!(residual.norm() < 1e-9, "residual too large: {}", residual.norm());
            assert!((axis.eigenvector.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dominant_axis_picks_largest_eigenvalue() {
        let cov = Matrix3::from_diagonal(&Vector3::new(1.0, 9.0, 4.0));
        let axis = dominant_axis(&cov).unwrap();
        assert!((axis.eigenvalue - 9.0).abs() < 1e-12);
        assert!((axis.eigenvector.y.abs() - 1.0).abs() < 1e-12);
    }
}
