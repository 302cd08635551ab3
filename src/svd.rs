//! Define an SVD container, truncation and reconstruction.
//!
//! For a matrix $M\in\mathbb{R}^{m\times n}$ the (thin) singular value decomposition
//! is $M = U\Sigma V^T$ with $U\in\mathbb{R}^{m\times k}$, $V^T\in\mathbb{R}^{k\times n}$
//! and $k=\min\{m, n\}$. The singular values are stored in descending order.
//! Truncating the decomposition to its first $\ell$ singular triplets yields the best
//! rank $\ell$ approximation of $M$ in the Frobenius norm.

use ndarray::{s, Array1, Array2, Axis, Zip};
use crate::types::Scalar;

pub struct SVDData<A: Scalar> {
    /// The U matrix
    pub u: Array2<A>,
    /// The array of singular values
    pub s: Array1<A::Real>,
    /// The vt matrix
    pub vt: Array2<A>,
}

impl<A: Scalar> SVDData<A> {
    /// Number of singular values held by the decomposition.
    pub fn rank(&self) -> usize {
        self.s.len()
    }

    /// Number of rows of the decomposed matrix.
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    /// Number of columns of the decomposed matrix.
    pub fn ncols(&self) -> usize {
        self.vt.ncols()
    }

    /// Keep only the first `max_rank` singular triplets.
    ///
    /// A `max_rank` larger than the current rank leaves the decomposition unchanged.
    pub fn truncate(self, mut max_rank: usize) -> SVDData<A> {
        let (u, s, vt) = (self.u, self.s, self.vt);

        if max_rank > s.len() {
            max_rank = s.len()
        }

        let u = u.slice_move(s![.., 0..max_rank]);
        let s = s.slice_move(s![0..max_rank]);
        let vt = vt.slice_move(s![0..max_rank, ..]);

        SVDData { u, s, vt }
    }

    /// Multiply the factors back together.
    ///
    /// An empty decomposition (rank zero) reconstructs to the zero matrix.
    pub fn to_mat(&self) -> Array2<A> {
        if self.rank() == 0 {
            return Array2::<A>::zeros((self.nrows(), self.ncols()));
        }

        let mut scaled_vt = self.vt.to_owned();

        Zip::from(scaled_vt.axis_iter_mut(Axis(0)))
            .and(self.s.view())
            .for_each(|mut row, &s_elem| row.map_inplace(|item| *item *= A::from_real(s_elem)));

        self.u.dot(&scaled_vt)
    }
}
