//! # rusty-image-compression
//!
//! Lossy compression of raster images by low rank approximation. Every channel of an
//! image is decomposed with a singular value decomposition and rebuilt from a given
//! percentage of its leading singular values. The crate also offers block average
//! downsampling and grayscale conversion.
//!
//! The command line tool `svd-compress` reads the retention percentage from its first
//! argument, compresses `test.jpg` and writes `test_output_SVD.jpg`:
//!
//! ```text
//! svd-compress 25
//! ```

pub mod approximate;
pub mod compute_svd;
pub mod config;
pub mod grayscale;
pub mod io;
pub mod prelude;
pub mod random_matrix;
pub mod raster;
pub mod retention;
pub mod shrink;
pub mod svd;
pub mod types;

pub use approximate::{approximate, LowRankApproximation, LowRankApproximator};
pub use compute_svd::ComputeSVD;
pub use config::{ApproximationConfig, NonFinitePolicy};
pub use grayscale::grayscale;
pub use io::{load_image, save_image};
pub use raster::Image;
pub use retention::RetentionFactor;
pub use shrink::shrink_by_ratio;
pub use svd::SVDData;
pub use types::{ImageCompressionError, RelDiff, Result};
