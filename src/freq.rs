//! Sample frequencies for the bins produced by [`fft`](crate::ndfft::fft) and
//! [`rfft`](crate::rfft::rfft).

use alloc::vec::Vec;

use crate::array::Array;
use crate::fft::FftError;
use crate::num::Float;

fn validate<T: Float>(n: usize, d: T) -> Result<T, FftError> {
    if n == 0 {
        return Err(FftError::InvalidArgument("n must be greater than zero"));
    }
    if !(d.is_finite() && d > T::zero()) {
        return Err(FftError::InvalidArgument(
            "sample spacing must be finite and positive",
        ));
    }
    // 1 / (d * n), with n rounded when it is not exact in T.
    Ok(T::one() / (d * T::from_usize_lossy(n)))
}

/// Frequencies of the `n` bins of a length-`n` DFT with sample spacing `d`.
///
/// Layout is `[0, 1, .., ceil(n/2) - 1, -floor(n/2), .., -1] / (d * n)`.
pub fn fftfreq<T: Float>(n: usize, d: T) -> Result<Array<T>, FftError> {
    let scale = validate(n, d)?;
    let split = n.div_ceil(2);
    let freqs: Vec<T> = (0..n)
        .map(|k| {
            if k < split {
                T::from_usize_lossy(k) * scale
            } else {
                -T::from_usize_lossy(n - k) * scale
            }
        })
        .collect();
    Ok(Array::from_vec(freqs))
}

/// Non-negative frequencies of the `n/2 + 1` bins kept by a real DFT.
///
/// For even `n` the last entry is the (positive) Nyquist frequency.
pub fn rfftfreq<T: Float>(n: usize, d: T) -> Result<Array<T>, FftError> {
    let scale = validate(n, d)?;
    let freqs: Vec<T> = (0..=n / 2)
        .map(|k| T::from_usize_lossy(k) * scale)
        .collect();
    Ok(Array::from_vec(freqs))
}
