//! Error type, result alias and numeric helper traits

use ndarray::{ArrayView1, ArrayView2};
use ndarray_linalg::error::LinalgError;
use ndarray_linalg::Norm;
use ndarray_linalg::OperationNorm;
use thiserror::Error;

pub use ndarray_linalg::{Lapack, Scalar};

#[derive(Error, Debug)]
pub enum ImageCompressionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Lapack Error")]
    LinalgError(#[from] LinalgError),
    #[error("SVD did not return singular vectors")]
    MissingSingularVectors,
    #[error("Image I/O failed")]
    Io(#[from] image::ImageError),
    #[error("Non-finite samples in {0}")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, ImageCompressionError>;

/// Shorthand for building an [`ImageCompressionError::InvalidArgument`].
pub(crate) fn invalid_argument<T>(message: impl Into<String>) -> Result<T> {
    Err(ImageCompressionError::InvalidArgument(message.into()))
}

pub trait RelDiff {
    type A: Scalar;

    /// Return the relative Frobenius norm difference of `first` and `second`.
    fn rel_diff_fro(
        first: ArrayView2<Self::A>,
        second: ArrayView2<Self::A>,
    ) -> <<Self as RelDiff>::A as Scalar>::Real;

    /// Return the relative l2 vector norm difference of `first` and `second`.
    fn rel_diff_l2(
        first: ArrayView1<Self::A>,
        second: ArrayView1<Self::A>,
    ) -> <<Self as RelDiff>::A as Scalar>::Real;

    /// Mean squared error between `first` and `second`.
    fn mean_squared_error(
        first: ArrayView2<Self::A>,
        second: ArrayView2<Self::A>,
    ) -> <<Self as RelDiff>::A as Scalar>::Real;
}

macro_rules! rel_diff_impl {
    ($scalar:ty) => {
        impl RelDiff for $scalar {
            type A = $scalar;
            fn rel_diff_fro(
                first: ArrayView2<Self::A>,
                second: ArrayView2<Self::A>,
            ) -> <<Self as RelDiff>::A as Scalar>::Real {
                let diff = first.to_owned() - &second;
                diff.opnorm_fro().unwrap() / second.opnorm_fro().unwrap()
            }

            fn rel_diff_l2(
                first: ArrayView1<Self::A>,
                second: ArrayView1<Self::A>,
            ) -> <<Self as RelDiff>::A as Scalar>::Real {
                let diff = first.to_owned() - &second;
                diff.norm_l2() / second.norm_l2()
            }

            fn mean_squared_error(
                first: ArrayView2<Self::A>,
                second: ArrayView2<Self::A>,
            ) -> <<Self as RelDiff>::A as Scalar>::Real {
                if first.is_empty() {
                    return 0.0;
                }
                let diff = first.to_owned() - &second;
                diff.mapv(|item| item * item).sum() / (diff.len() as $scalar)
            }
        }
    };
}

rel_diff_impl!(f32);
rel_diff_impl!(f64);
