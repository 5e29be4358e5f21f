//! # arrayfft - n-dimensional discrete Fourier transforms
//!
//! Array-API style DFTs over owned n-dimensional arrays, with a pure-Rust
//! kernel for every transform length.
//!
//! ## Features
//!
//! - **Complex transforms**: [`fft`], [`ifft`], [`fftn`], [`ifftn`]
//! - **Real-input transforms**: [`rfft`], [`irfft`], [`rfftn`], [`irfftn`]
//! - **Hermitian transforms**: [`hfft`], [`ihfft`]
//! - **Helpers**: [`fftfreq`], [`rfftfreq`], [`fftshift`], [`ifftshift`]
//! - **Arbitrary lengths**: Stockham for powers of two, mixed radix for
//!   smooth lengths, Bluestein for everything else
//! - **Normalization**: `backward`, `ortho` and `forward` via [`Norm`]
//! - **Runtime dtypes**: the [`dynamic`] module works on [`AnyArray`]
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FftError`]
//! - `parallel`: transform independent lanes of large axes with Rayon
//! - `verbose-logging`: emit plan and dispatch events through `log`
//! - `internal-tests`: expose planner cache inspection helpers
//!
//! ## Example
//!
//! ```
//! use arrayfft::{rfft, Array, Norm, LAST_AXIS};
//!
//! let x = Array::from_vec(vec![1.0f64, 2.0, 3.0, 4.0]);
//! let spectrum = rfft(&x, None, LAST_AXIS, Norm::Backward).unwrap();
//! assert_eq!(spectrum.shape(), &[3]);
//! assert!((spectrum.as_slice()[1].re + 2.0).abs() < 1e-12);
//! ```

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Forward a log event when `verbose-logging` is enabled; expands to nothing
/// otherwise.
macro_rules! fft_log {
    ($lvl:ident, $($arg:tt)+) => {
        #[cfg(feature = "verbose-logging")]
        {
            log::$lvl!($($arg)+);
        }
    };
}

/// Float trait and complex number type.
pub mod num;

/// Owned row-major arrays and dtype tags.
pub mod array;

/// Axis and transform-length resolution.
pub mod axes;

/// Zero-padding and truncation along an axis.
pub mod resize;

/// Fixed-size butterflies used by the 1-D kernel.
pub mod fft_kernels;

/// One-dimensional complex FFT kernel and the crate error type.
pub mod fft;

/// Normalization modes.
pub mod norm;

/// N-dimensional complex transforms.
pub mod ndfft;

/// Real-input and Hermitian transforms.
pub mod rfft;

/// Frequency bin helpers.
pub mod freq;

/// Spectrum shifts.
pub mod shift;

/// Transforms over runtime-typed arrays.
pub mod dynamic;

pub use array::{AnyArray, Array, DType, Element};
pub use axes::{KEEP_LENGTH, LAST_AXIS};
pub use fft::{Direction, FftError, FftPlanner};
pub use freq::{fftfreq, rfftfreq};
pub use ndfft::{fft, fftn, ifft, ifftn};
pub use norm::Norm;
pub use num::{Complex, Complex32, Complex64, Float};
pub use rfft::{hfft, ihfft, irfft, irfftn, rfft, rfftn};
pub use shift::{fftshift, ifftshift};

#[cfg(feature = "parallel")]
pub use ndfft::{parallel_lane_threshold, set_parallel_lane_threshold};
