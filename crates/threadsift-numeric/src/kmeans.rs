//! K-Means clustering
//!
//! Lloyd's algorithm with k-means++ initialization, restarted from
//! several seeded initializations and keeping the assignment with the
//! lowest inertia.

use crate::error::{NumericError, Result};
use crate::matrix::{squared_distance, Matrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// K-Means clustering.
///
/// # Example
///
/// ```
/// use threadsift_numeric::{KMeans, Matrix};
///
/// let data = Matrix::from_vec(6, 2, vec![
///     1.0, 2.0,
///     1.5, 1.8,
///     5.0, 8.0,
///     8.0, 8.0,
///     1.0, 0.6,
///     9.0, 11.0,
/// ]).unwrap();
///
/// let mut kmeans = KMeans::new(2).with_random_state(42);
/// kmeans.fit(&data).unwrap();
/// assert_eq!(kmeans.labels().unwrap().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct KMeans {
    /// Number of clusters.
    n_clusters: usize,
    /// Maximum Lloyd iterations per initialization.
    max_iter: usize,
    /// Convergence tolerance on total centroid movement.
    tol: f64,
    /// Number of seeded initializations to try.
    n_init: usize,
    /// Base random seed.
    random_state: u64,
    /// Cluster centroids after fitting.
    centroids: Option<Matrix>,
    /// Labels for the training data.
    labels: Option<Vec<usize>>,
    /// Sum of squared distances to the nearest centroid.
    inertia: f64,
}

impl KMeans {
    /// Create a k-means model with `n_clusters` clusters.
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            max_iter: 300,
            tol: 1e-4,
            n_init: 10,
            random_state: 0,
            centroids: None,
            labels: None,
            inertia: f64::INFINITY,
        }
    }

    /// Set the maximum Lloyd iterations per initialization.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the number of seeded initializations.
    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init.max(1);
        self
    }

    /// Set the base random seed.
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = seed;
        self
    }

    /// Labels assigned to the training rows, if fitted.
    pub fn labels(&self) -> Option<&[usize]> {
        self.labels.as_deref()
    }

    /// Best inertia across initializations, if fitted.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Fit the model on the rows of `x`.
    ///
    /// # Errors
    ///
    /// Fails when `n_clusters` is zero or exceeds the sample count.
    pub fn fit(&mut self, x: &Matrix) -> Result<()> {
        let (n_samples, _) = x.shape();
        if self.n_clusters == 0 {
            return Err(NumericError::InvalidHyperparameter {
                param: "n_clusters".to_string(),
                constraint: "must be at least 1".to_string(),
            });
        }
        if n_samples < self.n_clusters {
            return Err(NumericError::InsufficientInput(format!(
                "k-means needs at least {} samples, got {}",
                self.n_clusters, n_samples
            )));
        }

        let mut best: Option<(f64, Matrix, Vec<usize>)> = None;
        for attempt in 0..self.n_init {
            let seed = self.random_state.wrapping_add(attempt as u64);
            let (inertia, centroids, labels) = self.run_single(x, seed);
            let improved = best
                .as_ref()
                .map(|(best_inertia, _, _)| inertia < *best_inertia)
                .unwrap_or(true);
            if improved {
                best = Some((inertia, centroids, labels));
            }
        }

        // n_init >= 1, so best is always populated here
        let (inertia, centroids, labels) = best.ok_or(NumericError::NotFitted)?;
        self.inertia = inertia;
        self.centroids = Some(centroids);
        self.labels = Some(labels);
        Ok(())
    }

    /// Assign each row of `x` to its nearest fitted centroid.
    ///
    /// # Errors
    ///
    /// Fails when called before a successful `fit`.
    pub fn predict(&self, x: &Matrix) -> Result<Vec<usize>> {
        let centroids = self.centroids.as_ref().ok_or(NumericError::NotFitted)?;
        let (n_samples, _) = x.shape();
        let mut labels = Vec::with_capacity(n_samples);
        for i in 0..n_samples {
            labels.push(nearest_centroid(x.row(i), centroids).0);
        }
        Ok(labels)
    }

    /// One Lloyd run from a k-means++ initialization.
    fn run_single(&self, x: &Matrix, seed: u64) -> (f64, Matrix, Vec<usize>) {
        let (n_samples, n_features) = x.shape();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut centroids = self.init_plus_plus(x, &mut rng);
        let mut labels = vec![0usize; n_samples];

        for _ in 0..self.max_iter {
            // Assignment step
            for (i, label) in labels.iter_mut().enumerate() {
                *label = nearest_centroid(x.row(i), &centroids).0;
            }

            // Update step; empty clusters keep their previous centroid
            let mut sums = vec![0.0; self.n_clusters * n_features];
            let mut counts = vec![0usize; self.n_clusters];
            for (i, &label) in labels.iter().enumerate() {
                counts[label] += 1;
                for (j, value) in x.row(i).iter().enumerate() {
                    sums[label * n_features + j] += value;
                }
            }

            let mut shift = 0.0;
            for k in 0..self.n_clusters {
                if counts[k] == 0 {
                    continue;
                }
                for j in 0..n_features {
                    let updated = sums[k * n_features + j] / counts[k] as f64;
                    let previous = centroids.get(k, j);
                    shift += (updated - previous) * (updated - previous);
                    centroids.set(k, j, updated);
                }
            }

            if shift < self.tol {
                break;
            }
        }

        // Final assignment and inertia against the converged centroids
        let mut inertia = 0.0;
        for (i, label) in labels.iter_mut().enumerate() {
            let (nearest, distance) = nearest_centroid(x.row(i), &centroids);
            *label = nearest;
            inertia += distance;
        }

        (inertia, centroids, labels)
    }

    /// k-means++ seeding: spread the initial centroids by sampling each
    /// next center proportionally to squared distance from the chosen set.
    fn init_plus_plus(&self, x: &Matrix, rng: &mut StdRng) -> Matrix {
        let (n_samples, n_features) = x.shape();
        let mut centroids = Matrix::zeros(self.n_clusters, n_features);

        let first = rng.gen_range(0..n_samples);
        for (j, value) in x.row(first).iter().enumerate() {
            centroids.set(0, j, *value);
        }

        let mut distances = vec![0.0; n_samples];
        for k in 1..self.n_clusters {
            let mut total = 0.0;
            for i in 0..n_samples {
                let mut nearest = f64::INFINITY;
                for c in 0..k {
                    let d = squared_distance(x.row(i), centroids.row(c));
                    if d < nearest {
                        nearest = d;
                    }
                }
                distances[i] = nearest;
                total += nearest;
            }

            let chosen = if total > 0.0 {
                let mut target = rng.gen::<f64>() * total;
                let mut index = n_samples - 1;
                for (i, &d) in distances.iter().enumerate() {
                    if target <= d {
                        index = i;
                        break;
                    }
                    target -= d;
                }
                index
            } else {
                // All points coincide with a chosen centroid
                rng.gen_range(0..n_samples)
            };

            for (j, value) in x.row(chosen).iter().enumerate() {
                centroids.set(k, j, *value);
            }
        }

        centroids
    }
}

/// Index of and squared distance to the nearest centroid row.
fn nearest_centroid(point: &[f64], centroids: &Matrix) -> (usize, f64) {
    let mut nearest = 0;
    let mut best = f64::INFINITY;
    for k in 0..centroids.rows() {
        let d = squared_distance(point, centroids.row(k));
        if d < best {
            best = d;
            nearest = k;
        }
    }
    (nearest, best)
}
