//! Principal Component Analysis for dimensionality reduction
//!
//! Projects data onto the directions of maximum variance via an
//! eigendecomposition of the covariance matrix. Used by the semantic map
//! stage to place documents on a 2-D canvas; the projection is
//! visualization-only and preserves nothing beyond the top variance
//! directions.

use crate::error::{NumericError, Result};
use crate::matrix::Matrix;
use nalgebra::{DMatrix, SymmetricEigen};

/// Principal Component Analysis.
///
/// # Example
///
/// ```
/// use threadsift_numeric::{Matrix, Pca};
///
/// let data = Matrix::from_vec(4, 3, vec![
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
///     10.0, 11.0, 12.0,
/// ]).unwrap();
///
/// let mut pca = Pca::new(2);
/// let projected = pca.fit_transform(&data).unwrap();
/// assert_eq!(projected.shape(), (4, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Pca {
    /// Number of components to keep.
    n_components: usize,
    /// Mean of each feature, computed during fit.
    mean: Option<Vec<f64>>,
    /// Principal components, one per row.
    components: Option<Matrix>,
    /// Variance explained by each kept component.
    explained_variance: Option<Vec<f64>>,
}

impl Pca {
    /// Create a PCA transformer keeping `n_components` directions.
    pub fn new(n_components: usize) -> Self {
        Self {
            n_components,
            mean: None,
            components: None,
            explained_variance: None,
        }
    }

    /// Variance explained by each kept component, descending.
    pub fn explained_variance(&self) -> Option<&[f64]> {
        self.explained_variance.as_deref()
    }

    /// Fit the components from the rows of `x`.
    ///
    /// # Errors
    ///
    /// Fails when `n_components` exceeds the feature count or fewer than
    /// two samples are supplied.
    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if self.n_components > n_features {
            return Err(NumericError::InvalidHyperparameter {
                param: "n_components".to_string(),
                constraint: format!(
                    "must not exceed feature count ({} > {})",
                    self.n_components, n_features
                ),
            });
        }
        if n_samples < 2 {
            return Err(NumericError::InsufficientInput(format!(
                "PCA needs at least 2 samples, got {}",
                n_samples
            )));
        }

        // Feature means
        let mut mean = vec![0.0; n_features];
        for i in 0..n_samples {
            for (j, m) in mean.iter_mut().enumerate() {
                *m += x.get(i, j);
            }
        }
        for m in &mut mean {
            *m /= n_samples as f64;
        }

        // Covariance of the centered data: (X^T X) / (n - 1)
        let mut cov = vec![0.0; n_features * n_features];
        for i in 0..n_features {
            for j in i..n_features {
                let mut sum = 0.0;
                for k in 0..n_samples {
                    sum += (x.get(k, i) - mean[i]) * (x.get(k, j) - mean[j]);
                }
                let value = sum / (n_samples - 1) as f64;
                cov[i * n_features + j] = value;
                cov[j * n_features + i] = value;
            }
        }

        let cov_matrix = DMatrix::from_row_slice(n_features, n_features, &cov);
        let eigen = SymmetricEigen::new(cov_matrix);
        let eigenvalues = eigen.eigenvalues;
        let eigenvectors = eigen.eigenvectors;

        // Order eigenpairs by eigenvalue descending
        let mut indices: Vec<usize> = (0..n_features).collect();
        indices.sort_by(|&a, &b| {
            eigenvalues[b]
                .partial_cmp(&eigenvalues[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut components_data = vec![0.0; self.n_components * n_features];
        let mut explained_variance = vec![0.0; self.n_components];
        for (i, &idx) in indices.iter().take(self.n_components).enumerate() {
            explained_variance[i] = eigenvalues[idx];
            for j in 0..n_features {
                components_data[i * n_features + j] = eigenvectors[(j, idx)];
            }
        }

        self.mean = Some(mean);
        self.components = Some(Matrix::from_vec(
            self.n_components,
            n_features,
            components_data,
        )?);
        self.explained_variance = Some(explained_variance);

        Ok(())
    }

    /// Project rows of `x` onto the fitted components.
    ///
    /// # Errors
    ///
    /// Fails when called before `fit` or with a mismatched feature count.
    pub fn transform(&self, x: &Matrix) -> Result<Matrix> {
        let components = self.components.as_ref().ok_or(NumericError::NotFitted)?;
        let mean = self.mean.as_ref().ok_or(NumericError::NotFitted)?;

        let (n_samples, n_features) = x.shape();
        if n_features != mean.len() {
            return Err(NumericError::DimensionMismatch {
                expected: format!("{} features", mean.len()),
                actual: format!("{} features", n_features),
            });
        }

        // X_pca = (X - mean) @ components^T
        let mut result = vec![0.0; n_samples * self.n_components];
        for i in 0..n_samples {
            for j in 0..self.n_components {
                let mut value = 0.0;
                for k in 0..n_features {
                    value += (x.get(i, k) - mean[k]) * components.get(j, k);
                }
                result[i * self.n_components + j] = value;
            }
        }

        Matrix::from_vec(n_samples, self.n_components, result)
    }

    /// Fit and project in one call.
    pub fn fit_transform(&mut self, x: &Matrix) -> Result<Matrix> {
        self.fit(x)?;
        self.transform(x)
    }
}
