//! Normalization modes and the single scaling rule applied after a transform.
//!
//! | mode       | forward factor | inverse factor |
//! |------------|----------------|----------------|
//! | `backward` | 1              | 1/n            |
//! | `ortho`    | 1/√n           | 1/√n           |
//! | `forward`  | 1/n            | 1              |

use crate::fft::{Direction, FftError};
use crate::num::{Complex, Float};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Norm {
    #[default]
    Backward,
    Ortho,
    Forward,
}

impl Norm {
    /// Label with the forward/inverse roles exchanged.
    ///
    /// `hfft` is an inverse-role transform of a real spectrum and `ihfft` a
    /// forward-role one, so both run their kernels under this mapping.
    pub fn hermitian(self) -> Norm {
        match self {
            Norm::Backward => Norm::Forward,
            Norm::Ortho => Norm::Ortho,
            Norm::Forward => Norm::Backward,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Norm::Backward => "backward",
            Norm::Ortho => "ortho",
            Norm::Forward => "forward",
        }
    }

    /// Exact scale factor for logical size `n`.
    ///
    /// Fails with [`FftError::NumericalPrecisionLoss`] when `n` has no exact
    /// representation in `T`.
    pub fn try_scale<T: Float>(self, n: usize, direction: Direction) -> Result<T, FftError> {
        let n_t = T::from_usize(n).ok_or(FftError::NumericalPrecisionLoss { n })?;
        Ok(factor(self, n_t, direction))
    }

    /// Scale factor for logical size `n`, rounding `n` when it is not exact.
    pub fn scale<T: Float>(self, n: usize, direction: Direction) -> T {
        match self.try_scale(n, direction) {
            Ok(s) => s,
            Err(_e) => {
                fft_log!(warn, "{}; using nearest representable size", _e);
                factor(self, T::from_usize_lossy(n), direction)
            }
        }
    }

    /// Multiply `data` in place by the factor for `n` and `direction`.
    pub fn apply<T: Float>(self, data: &mut [Complex<T>], n: usize, direction: Direction) {
        let s: T = self.scale(n, direction);
        if s == T::one() {
            return;
        }
        for c in data.iter_mut() {
            *c = c.scale(s);
        }
    }
}

fn factor<T: Float>(norm: Norm, n: T, direction: Direction) -> T {
    match (norm, direction) {
        (Norm::Backward, Direction::Forward) | (Norm::Forward, Direction::Inverse) => T::one(),
        (Norm::Ortho, _) => T::one() / n.sqrt(),
        (Norm::Backward, Direction::Inverse) | (Norm::Forward, Direction::Forward) => T::one() / n,
    }
}

impl core::str::FromStr for Norm {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backward" => Ok(Norm::Backward),
            "ortho" => Ok(Norm::Ortho),
            "forward" => Ok(Norm::Forward),
            _ => Err(FftError::InvalidArgument(
                "norm must be one of \"backward\", \"ortho\" or \"forward\"",
            )),
        }
    }
}

impl core::fmt::Display for Norm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
