//! Random matrices and synthetic images for tests and benchmarks.

use crate::raster::{Image, RGB_CHANNELS};
use crate::types::{Lapack, Scalar};
use ndarray::{Array, Array2, Array3};
use ndarray_linalg::{JobSvd, SVDDCInto};
use num::traits::cast::cast;
use num::Float;
use rand::Rng;
use rand_distr::{Distribution, Normal};

pub trait RandomMatrix
where
    Self: Scalar + Lapack + Float,
{
    /// Generate a random Gaussian matrix.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self> {
        let mut mat = Array2::<Self>::zeros(dimension);
        let normal = Normal::new(0.0, 1.0).unwrap();
        mat.map_inplace(|item| *item = cast::<f64, Self>(normal.sample(rng)).unwrap());
        mat
    }

    /// Generate a random matrix with orthogonal rows or columns.
    ///
    /// If m > n then the returned matrix has orthogonal columns. If n > m
    /// the returned matrix has orthogonal rows.
    fn random_orthogonal_matrix<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self> {
        let mut m = dimension.0;
        let mut n = dimension.1;

        // Always orthogonalize a long and skinny matrix
        if dimension.1 > dimension.0 {
            std::mem::swap(&mut m, &mut n);
        }

        let mat = Self::random_gaussian((m, n), rng);

        let (u, _, _) = mat
            .svddc_into(JobSvd::Some)
            .expect("`random_orthogonal_matrix`: SVD computation failed.");
        let u = u.unwrap();

        if dimension.1 > dimension.0 {
            u.t().to_owned()
        } else {
            u
        }
    }

    /// Generate a random approximate low-rank matrix.
    ///
    /// The singular values are logarithmically distributed between
    /// `sigma_min` and `sigma_max`.
    fn random_approximate_low_rank_matrix<R: Rng>(
        dimension: (usize, usize),
        sigma_max: f64,
        sigma_min: f64,
        rng: &mut R,
    ) -> Array2<Self> {
        assert!(
            sigma_min < sigma_max,
            "`sigma_min` must be smaller than `sigma_max`"
        );
        assert!(sigma_min > 0.0, "`sigma_min` must be positive.");

        let min_dim = std::cmp::min(dimension.0, dimension.1);

        let u = Self::random_orthogonal_matrix((dimension.0, min_dim), rng);
        let vt = Self::random_orthogonal_matrix((min_dim, dimension.1), rng);
        let singvals = Array::geomspace(sigma_min, sigma_max, min_dim)
            .unwrap()
            .map(|&item| cast::<f64, Self>(item).unwrap());
        let sigma = Array2::from_diag(&singvals);
        u.dot(&sigma.dot(&vt))
    }
}

impl RandomMatrix for f32 {}
impl RandomMatrix for f64 {}

/// A smooth grayscale test image with pixel noise, samples in [0, 255].
pub fn random_gray_image<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Image {
    Image::Gray(random_plane(dimension, rng))
}

/// An RGB test image whose channels are generated independently.
pub fn random_rgb_image<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Image {
    let mut data = Array3::<f64>::zeros((dimension.0, dimension.1, RGB_CHANNELS));
    for mut channel in data.axis_iter_mut(ndarray::Axis(2)) {
        channel.assign(&random_plane(dimension, rng));
    }
    Image::Rgb(data)
}

fn random_plane<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<f64> {
    let (m, n) = dimension;
    let fx = rng.gen_range(0.5..4.0);
    let fy = rng.gen_range(0.5..4.0);
    let noise = Normal::new(0.0, 12.0).unwrap();

    Array2::from_shape_fn(dimension, |(i, j)| {
        let x = j as f64 / n.max(1) as f64;
        let y = i as f64 / m.max(1) as f64;
        let smooth = 127.5 + 90.0 * (fx * std::f64::consts::PI * x).sin() * (fy * y).cos();
        (smooth + noise.sample(rng)).max(0.0).min(255.0)
    })
}
