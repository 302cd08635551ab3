//! A simple trait to wrap SVD Computation.

use crate::svd::SVDData;
use crate::types::{ImageCompressionError, Result, Scalar};
use ndarray::ArrayView2;
use ndarray_linalg::{JobSvd, SVDDCInto};

pub trait ComputeSVD {
    type A: Scalar;

    /// Compute the thin SVD of `arr` with the divide and conquer driver.
    fn compute_svd(arr: ArrayView2<Self::A>) -> Result<SVDData<Self::A>>;
}

macro_rules! compute_svd_impl {
    ($scalar:ty) => {
        impl ComputeSVD for $scalar {
            type A = $scalar;
            fn compute_svd(arr: ArrayView2<Self::A>) -> Result<SVDData<Self::A>> {
                let (u, s, vt) = arr.to_owned().svddc_into(JobSvd::Some)?;

                match (u, vt) {
                    (Some(u), Some(vt)) => Ok(SVDData { u, s, vt }),
                    _ => Err(ImageCompressionError::MissingSingularVectors),
                }
            }
        }
    };
}

compute_svd_impl!(f32);
compute_svd_impl!(f64);
