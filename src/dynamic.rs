//! Entry points over [`AnyArray`], for callers that only know the dtype at
//! runtime.
//!
//! Precision is always preserved: `float32` pairs with `complex64` and
//! `float64` with `complex128`. Complex transforms promote real input to the
//! matching complex dtype. Real-input transforms (`rfft`, `rfftn`, `ihfft`)
//! reject complex input, and half-spectrum inputs (`irfft`, `irfftn`, `hfft`)
//! must be complex.

use alloc::borrow::Cow;

use crate::array::{AnyArray, Array, DType};
use crate::fft::FftError;
use crate::norm::Norm;
use crate::num::Complex;
use crate::{freq, ndfft, shift};

enum ComplexInput<'a> {
    Single(Cow<'a, Array<Complex<f32>>>),
    Double(Cow<'a, Array<Complex<f64>>>),
}

enum RealInput<'a> {
    Single(&'a Array<f32>),
    Double(&'a Array<f64>),
}

fn promote(x: &AnyArray) -> ComplexInput<'_> {
    match x {
        AnyArray::Float32(a) => ComplexInput::Single(Cow::Owned(a.to_complex())),
        AnyArray::Float64(a) => ComplexInput::Double(Cow::Owned(a.to_complex())),
        AnyArray::Complex64(a) => ComplexInput::Single(Cow::Borrowed(a)),
        AnyArray::Complex128(a) => ComplexInput::Double(Cow::Borrowed(a)),
    }
}

fn require_complex(x: &AnyArray) -> Result<ComplexInput<'_>, FftError> {
    if !x.dtype().is_complex() {
        return Err(FftError::InvalidArgument(
            "expected a complex floating-point input",
        ));
    }
    Ok(promote(x))
}

fn require_real(x: &AnyArray) -> Result<RealInput<'_>, FftError> {
    match x {
        AnyArray::Float32(a) => Ok(RealInput::Single(a)),
        AnyArray::Float64(a) => Ok(RealInput::Double(a)),
        _ => Err(FftError::InvalidArgument(
            "expected a real floating-point input",
        )),
    }
}

macro_rules! complex_to_complex {
    ($(#[$doc:meta])* $name:ident, $imp:path, $len:ty, $ax:ty) => {
        $(#[$doc])*
        pub fn $name(x: &AnyArray, len: $len, axes: $ax, norm: Norm) -> Result<AnyArray, FftError> {
            Ok(match promote(x) {
                ComplexInput::Single(a) => $imp(&*a, len, axes, norm)?.into(),
                ComplexInput::Double(a) => $imp(&*a, len, axes, norm)?.into(),
            })
        }
    };
}

complex_to_complex!(
    /// See [`ndfft::fft`].
    fft, ndfft::fft, Option<usize>, isize
);
complex_to_complex!(
    /// See [`ndfft::ifft`].
    ifft, ndfft::ifft, Option<usize>, isize
);
complex_to_complex!(
    /// See [`ndfft::fftn`].
    fftn, ndfft::fftn, Option<&[isize]>, Option<&[isize]>
);
complex_to_complex!(
    /// See [`ndfft::ifftn`].
    ifftn, ndfft::ifftn, Option<&[isize]>, Option<&[isize]>
);

macro_rules! real_to_complex {
    ($(#[$doc:meta])* $name:ident, $imp:path, $len:ty, $ax:ty) => {
        $(#[$doc])*
        pub fn $name(x: &AnyArray, len: $len, axes: $ax, norm: Norm) -> Result<AnyArray, FftError> {
            Ok(match require_real(x)? {
                RealInput::Single(a) => $imp(a, len, axes, norm)?.into(),
                RealInput::Double(a) => $imp(a, len, axes, norm)?.into(),
            })
        }
    };
}

real_to_complex!(
    /// See [`crate::rfft::rfft`].
    rfft, crate::rfft::rfft, Option<usize>, isize
);
real_to_complex!(
    /// See [`crate::rfft::rfftn`].
    rfftn, crate::rfft::rfftn, Option<&[isize]>, Option<&[isize]>
);
real_to_complex!(
    /// See [`crate::rfft::ihfft`].
    ihfft, crate::rfft::ihfft, Option<usize>, isize
);

macro_rules! complex_to_real {
    ($(#[$doc:meta])* $name:ident, $imp:path, $len:ty, $ax:ty) => {
        $(#[$doc])*
        pub fn $name(x: &AnyArray, len: $len, axes: $ax, norm: Norm) -> Result<AnyArray, FftError> {
            Ok(match require_complex(x)? {
                ComplexInput::Single(a) => $imp(&*a, len, axes, norm)?.into(),
                ComplexInput::Double(a) => $imp(&*a, len, axes, norm)?.into(),
            })
        }
    };
}

complex_to_real!(
    /// See [`crate::rfft::irfft`].
    irfft, crate::rfft::irfft, Option<usize>, isize
);
complex_to_real!(
    /// See [`crate::rfft::irfftn`].
    irfftn, crate::rfft::irfftn, Option<&[isize]>, Option<&[isize]>
);
complex_to_real!(
    /// See [`crate::rfft::hfft`].
    hfft, crate::rfft::hfft, Option<usize>, isize
);

fn real_dtype(dtype: Option<DType>) -> Result<DType, FftError> {
    match dtype.unwrap_or(DType::Float64) {
        DType::Float32 => Ok(DType::Float32),
        DType::Float64 => Ok(DType::Float64),
        _ => Err(FftError::InvalidArgument(
            "frequency bins require a real floating-point dtype",
        )),
    }
}

/// [`freq::fftfreq`] in the requested real dtype (`float64` by default).
pub fn fftfreq(n: usize, d: f64, dtype: Option<DType>) -> Result<AnyArray, FftError> {
    Ok(match real_dtype(dtype)? {
        DType::Float32 => freq::fftfreq(n, d as f32)?.into(),
        _ => freq::fftfreq(n, d)?.into(),
    })
}

/// [`freq::rfftfreq`] in the requested real dtype (`float64` by default).
pub fn rfftfreq(n: usize, d: f64, dtype: Option<DType>) -> Result<AnyArray, FftError> {
    Ok(match real_dtype(dtype)? {
        DType::Float32 => freq::rfftfreq(n, d as f32)?.into(),
        _ => freq::rfftfreq(n, d)?.into(),
    })
}

macro_rules! any_shift {
    ($name:ident, $imp:path) => {
        /// Dtype-preserving wrapper.
        pub fn $name(x: &AnyArray, axes: Option<&[isize]>) -> Result<AnyArray, FftError> {
            Ok(match x {
                AnyArray::Float32(a) => $imp(a, axes)?.into(),
                AnyArray::Float64(a) => $imp(a, axes)?.into(),
                AnyArray::Complex64(a) => $imp(a, axes)?.into(),
                AnyArray::Complex128(a) => $imp(a, axes)?.into(),
            })
        }
    };
}

any_shift!(fftshift, shift::fftshift);
any_shift!(ifftshift, shift::ifftshift);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn real_input_promotes_with_matching_precision() {
        let x: AnyArray = Array::from_vec(vec![1.0f32, 2.0, 3.0, 4.0]).into();
        let y = fft(&x, None, -1, Norm::Backward).unwrap();
        assert_eq!(y.dtype(), DType::Complex64);
        let x: AnyArray = Array::from_vec(vec![1.0f64, 2.0]).into();
        assert_eq!(
            fftn(&x, None, None, Norm::Ortho).unwrap().dtype(),
            DType::Complex128
        );
    }

    #[test]
    fn input_kind_is_enforced() {
        let c: AnyArray = Array::from_vec(vec![Complex::new(1.0f64, 0.0); 4]).into();
        let r: AnyArray = Array::from_vec(vec![1.0f64; 4]).into();
        assert!(matches!(
            rfft(&c, None, -1, Norm::Backward),
            Err(FftError::InvalidArgument(_))
        ));
        assert!(matches!(
            ihfft(&c, None, -1, Norm::Backward),
            Err(FftError::InvalidArgument(_))
        ));
        assert!(matches!(
            irfft(&r, None, -1, Norm::Backward),
            Err(FftError::InvalidArgument(_))
        ));
        assert!(matches!(
            hfft(&r, None, -1, Norm::Backward),
            Err(FftError::InvalidArgument(_))
        ));
        assert_eq!(
            irfftn(&c, None, None, Norm::Backward).unwrap().dtype(),
            DType::Float64
        );
    }

    #[test]
    fn frequency_dtype() {
        assert_eq!(fftfreq(4, 1.0, None).unwrap().dtype(), DType::Float64);
        assert_eq!(
            rfftfreq(4, 1.0, Some(DType::Float32)).unwrap().dtype(),
            DType::Float32
        );
        assert!(fftfreq(4, 1.0, Some(DType::Complex64)).is_err());
    }
}
