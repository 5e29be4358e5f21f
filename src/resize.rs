//! Zero-padding and truncation along individual axes.

use alloc::vec::Vec;

use crate::array::{Array, Element};

/// Pad with zeros or truncate `x` along `axis` to exactly `len` elements.
///
/// Padding is appended at the end of the axis; truncation keeps the first
/// `len` elements. Other axes are untouched.
pub fn resize_axis<E: Element>(x: &Array<E>, axis: usize, len: usize) -> Array<E> {
    let shape = x.shape();
    let m = shape[axis];
    if m == len {
        return x.clone();
    }
    let outer: usize = shape[..axis].iter().product();
    let inner: usize = shape[axis + 1..].iter().product();
    let keep = m.min(len);

    let mut new_shape = shape.to_vec();
    new_shape[axis] = len;
    let mut data = Vec::with_capacity(outer * len * inner);
    let src = x.as_slice();
    for o in 0..outer {
        let start = o * m * inner;
        data.extend_from_slice(&src[start..start + keep * inner]);
        data.resize(data.len() + (len - keep) * inner, E::zeroed());
    }
    Array::from_parts(new_shape, data)
}

/// Apply [`resize_axis`] for every `(axis, len)` pair.
pub fn resize_axes<E: Element>(x: &Array<E>, axes: &[usize], lengths: &[usize]) -> Array<E> {
    let mut out = x.clone();
    for (&axis, &len) in axes.iter().zip(lengths) {
        if out.shape()[axis] != len {
            out = resize_axis(&out, axis, len);
        }
    }
    out
}
