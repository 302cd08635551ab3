//! Numeric configuration handed to the approximator.

use crate::types::{ImageCompressionError, Result};
use log::warn;
use ndarray::{ArrayBase, Data, Dimension};

/// What to do when NaN or infinite samples show up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonFinitePolicy {
    /// Carry on silently.
    Ignore,
    /// Emit a warning through the `log` facade and carry on.
    Warn,
    /// Abort with [`ImageCompressionError::NonFinite`].
    Raise,
}

impl Default for NonFinitePolicy {
    fn default() -> Self {
        NonFinitePolicy::Warn
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApproximationConfig {
    pub non_finite: NonFinitePolicy,
}

impl ApproximationConfig {
    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Apply the non-finite policy to `arr`. `what` names the array in messages.
    pub fn check_finite<S, D>(&self, arr: &ArrayBase<S, D>, what: &'static str) -> Result<()>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        if self.non_finite == NonFinitePolicy::Ignore {
            return Ok(());
        }

        let count = arr.iter().filter(|item| !item.is_finite()).count();
        if count == 0 {
            return Ok(());
        }

        match self.non_finite {
            NonFinitePolicy::Raise => Err(ImageCompressionError::NonFinite(what)),
            _ => {
                warn!("{} non-finite samples in {}", count, what);
                Ok(())
            }
        }
    }
}
