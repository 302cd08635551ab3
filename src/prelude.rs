//! Collect all traits and other exports here.

pub use crate::approximate::{LowRankApproximation, LowRankApproximator};
pub use crate::compute_svd::ComputeSVD;
pub use crate::config::{ApproximationConfig, NonFinitePolicy};
pub use crate::random_matrix::RandomMatrix;
pub use crate::raster::Image;
pub use crate::retention::RetentionFactor;
pub use crate::svd::SVDData;
pub use crate::types::{ImageCompressionError, RelDiff, Result};
