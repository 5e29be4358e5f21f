//! Circular shifts that move the zero-frequency bin to the center of each
//! axis and back.
//!
//! `fftshift` rotates an axis of length `L` so that element `0` lands at
//! index `L/2`; `ifftshift` undoes it. The two rotations differ only for odd
//! `L`.

use alloc::vec::Vec;

use crate::array::{Array, Element};
use crate::axes::resolve_axes;
use crate::fft::FftError;
use crate::ndfft::Lanes;

/// Rotate every lane along `axis` left by `shift` positions.
fn rotate_axis<E: Element>(x: &Array<E>, axis: usize, shift: usize) -> Array<E> {
    let lanes = Lanes::new(x.shape(), axis);
    if lanes.len == 0 || shift % lanes.len == 0 {
        return x.clone();
    }
    let shift = shift % lanes.len;
    let src = x.as_slice();
    let mut data: Vec<E> = Vec::with_capacity(src.len());
    let block = lanes.len * lanes.inner;
    for o in 0..lanes.outer {
        let base = o * block;
        let split = base + shift * lanes.inner;
        data.extend_from_slice(&src[split..base + block]);
        data.extend_from_slice(&src[base..split]);
    }
    Array::from_parts(x.shape().to_vec(), data)
}

fn shift_axes<E: Element>(
    x: &Array<E>,
    axes: Option<&[isize]>,
    amount: impl Fn(usize) -> usize,
) -> Result<Array<E>, FftError> {
    let axes = resolve_axes(axes, x.ndim())?;
    let mut out = x.clone();
    for axis in axes {
        let len = out.shape()[axis];
        out = rotate_axis(&out, axis, amount(len));
    }
    Ok(out)
}

/// Move the zero-frequency bin to the center of each axis in `axes`
/// (all axes when `None`).
///
/// `fftshift([0, 1, 2, 3, 4, 5, 6, 7]) == [4, 5, 6, 7, 0, 1, 2, 3]`
pub fn fftshift<E: Element>(x: &Array<E>, axes: Option<&[isize]>) -> Result<Array<E>, FftError> {
    shift_axes(x, axes, |len| len.div_ceil(2))
}

/// Inverse of [`fftshift`].
pub fn ifftshift<E: Element>(
    x: &Array<E>,
    axes: Option<&[isize]>,
) -> Result<Array<E>, FftError> {
    shift_axes(x, axes, |len| len / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn odd_length_puts_zero_bin_in_the_middle() {
        let x = Array::from_vec(vec![0.0f64, 1.0, 2.0, -2.0, -1.0]);
        let y = fftshift(&x, None).unwrap();
        assert_eq!(y.as_slice(), &[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(ifftshift(&y, None).unwrap(), x);
    }

    #[test]
    fn only_selected_axis_moves() {
        let x = Array::from_shape_vec(&[2, 3], vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let y = fftshift(&x, Some(&[0])).unwrap();
        assert_eq!(y.as_slice(), &[3.0, 4.0, 5.0, 0.0, 1.0, 2.0]);
        let z = fftshift(&x, Some(&[-1])).unwrap();
        assert_eq!(z.as_slice(), &[2.0, 0.0, 1.0, 5.0, 3.0, 4.0]);
    }

    #[test]
    fn bad_axes() {
        let x = Array::from_vec(vec![1.0f64, 2.0]);
        assert!(matches!(
            fftshift(&x, Some(&[1])),
            Err(FftError::InvalidAxis { axis: 1, rank: 1 })
        ));
        assert!(matches!(
            ifftshift(&x, Some(&[0, -1])),
            Err(FftError::InvalidAxis { .. })
        ));
    }
}
