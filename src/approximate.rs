//! Low rank approximation of images.
//!
//! Every channel plane $M$ of an image is decomposed as $M = U\Sigma V^T$. Given a
//! retention percentage $p$ only the first $k = \lfloor r p / 100 \rfloor$ singular
//! triplets are kept, with $r = \min\{m, n\}$, and the plane is rebuilt as
//! $U_k\Sigma_k V_k^T$. Channels of an RGB image are treated independently.

use crate::compute_svd::ComputeSVD;
use crate::config::ApproximationConfig;
use crate::raster::Image;
use crate::retention::RetentionFactor;
use crate::types::{Result, Scalar};
use log::debug;
use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Low rank approximation of a single plane.
pub trait LowRankApproximation {
    type A: Scalar;

    /// Rebuild `self` from the leading singular triplets selected by `retention`.
    fn low_rank_approximation(&self, retention: RetentionFactor) -> Result<Array2<Self::A>>;
}

impl<A, S> LowRankApproximation for ArrayBase<S, Ix2>
where
    A: ComputeSVD<A = A> + Scalar,
    S: Data<Elem = A>,
{
    type A = A;

    fn low_rank_approximation(&self, retention: RetentionFactor) -> Result<Array2<Self::A>> {
        let svd = A::compute_svd(self.view())?;
        let rank = svd.rank();
        let k = retention.kept_rank(rank);

        debug!(
            "plane {}x{}: keeping {} of {} singular values",
            self.nrows(),
            self.ncols(),
            k,
            rank
        );

        if k == 0 {
            return Ok(Array2::zeros(self.dim()));
        }

        Ok(svd.truncate(k).to_mat())
    }
}

/// Compresses images by truncating the SVD of each channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowRankApproximator {
    config: ApproximationConfig,
}

impl LowRankApproximator {
    pub fn new(config: ApproximationConfig) -> Self {
        LowRankApproximator { config }
    }

    pub fn config(&self) -> &ApproximationConfig {
        &self.config
    }

    /// Approximate `image` keeping `retention_percent` percent of the singular values.
    ///
    /// The result has the shape of the input. Samples are not clamped, use
    /// [`Image::clamped`] before treating the result as displayable.
    pub fn approximate(&self, image: &Image, retention_percent: f64) -> Result<Image> {
        let retention = RetentionFactor::new(retention_percent)?;
        self.approximate_with(image, retention)
    }

    /// Same as [`LowRankApproximator::approximate`] with an already validated factor.
    pub fn approximate_with(&self, image: &Image, retention: RetentionFactor) -> Result<Image> {
        image.validate()?;

        match image {
            Image::Gray(data) => {
                let plane = self.approximate_plane(data, retention, "grayscale plane")?;
                Image::gray(plane)
            }
            Image::Rgb(_) => {
                let planes = image.planes();
                let red = self.approximate_plane(&planes[0], retention, "red plane")?;
                let green = self.approximate_plane(&planes[1], retention, "green plane")?;
                let blue = self.approximate_plane(&planes[2], retention, "blue plane")?;
                Image::from_planes(red, green, blue)
            }
        }
    }

    fn approximate_plane<S>(
        &self,
        plane: &ArrayBase<S, Ix2>,
        retention: RetentionFactor,
        what: &'static str,
    ) -> Result<Array2<f64>>
    where
        S: Data<Elem = f64>,
    {
        self.config.check_finite(plane, what)?;
        let approx = plane.low_rank_approximation(retention)?;
        self.config.check_finite(&approx, what)?;
        Ok(approx)
    }
}

/// Approximate `image` with the default configuration.
pub fn approximate(image: &Image, retention_percent: f64) -> Result<Image> {
    LowRankApproximator::default().approximate(image, retention_percent)
}
