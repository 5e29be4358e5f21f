//! Axis and length resolution.
//!
//! Every public transform builds one [`TransformPlan`] from its raw `n`/`s`
//! and `axis`/`axes` arguments. All validation happens here, before any data
//! is touched, and later stages consume the plan without re-checking.

use alloc::vec::Vec;

use crate::fft::{Direction, FftError};
use crate::norm::Norm;

/// Default axis for single-axis transforms.
pub const LAST_AXIS: isize = -1;

/// Marker in an `s` sequence meaning "keep this axis' length".
pub const KEEP_LENGTH: isize = -1;

/// Map `axis` from `[-rank, rank)` onto `[0, rank)`.
pub fn resolve_axis(axis: isize, rank: usize) -> Result<usize, FftError> {
    let r = rank as isize;
    let resolved = if axis < 0 { axis + r } else { axis };
    if resolved < 0 || resolved >= r {
        return Err(FftError::InvalidAxis { axis, rank });
    }
    Ok(resolved as usize)
}

/// Resolve an optional axis list; `None` selects every axis in increasing
/// order. Repeated axes are rejected.
pub fn resolve_axes(axes: Option<&[isize]>, rank: usize) -> Result<Vec<usize>, FftError> {
    let Some(axes) = axes else {
        return Ok((0..rank).collect());
    };
    let mut out = Vec::with_capacity(axes.len());
    for &axis in axes {
        let a = resolve_axis(axis, rank)?;
        if out.contains(&a) {
            return Err(FftError::InvalidAxis { axis, rank });
        }
        out.push(a);
    }
    Ok(out)
}

/// How the default length of the last planned axis is derived from its
/// input length `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Default length is `M`.
    Input,
    /// Input is a half spectrum; default output length is `2 * (M - 1)`.
    HalfSpectrum,
}

/// Fully validated transform parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformPlan {
    /// Canonical axes in application order.
    pub axes: Vec<usize>,
    /// Logical transform length per entry of `axes`.
    pub lengths: Vec<usize>,
    pub direction: Direction,
    pub norm: Norm,
}

fn default_length(m: usize, rule: LengthRule) -> Result<usize, FftError> {
    let len = match rule {
        LengthRule::Input => m,
        LengthRule::HalfSpectrum => 2 * m.saturating_sub(1),
    };
    if len == 0 {
        return Err(FftError::InvalidArgument(
            "transform length must be positive",
        ));
    }
    Ok(len)
}

/// Reject plans whose output array or logical size does not fit in `usize`.
fn check_sizes(shape: &[usize], axes: &[usize], lengths: &[usize]) -> Result<(), FftError> {
    let overflow = FftError::InvalidArgument("transform size overflows usize");
    let mut out_shape = shape.to_vec();
    for (&a, &len) in axes.iter().zip(lengths) {
        out_shape[a] = len;
    }
    let product = |dims: &[usize]| dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d));
    product(&out_shape[..]).ok_or(overflow)?;
    product(lengths).ok_or(overflow)?;
    Ok(())
}

impl TransformPlan {
    /// Plan for a single-axis transform with optional length `n`.
    pub fn single(
        shape: &[usize],
        n: Option<usize>,
        axis: isize,
        rule: LengthRule,
        direction: Direction,
        norm: Norm,
    ) -> Result<Self, FftError> {
        let a = resolve_axis(axis, shape.len())?;
        let len = match n {
            Some(0) => {
                return Err(FftError::InvalidArgument(
                    "transform length must be positive",
                ))
            }
            Some(n) => n,
            None => default_length(shape[a], rule)?,
        };
        check_sizes(shape, &[a], &[len])?;
        let plan = Self {
            axes: alloc::vec![a],
            lengths: alloc::vec![len],
            direction,
            norm,
        };
        fft_log!(debug, "resolved plan {:?} for shape {:?}", plan, shape);
        Ok(plan)
    }

    /// Plan for a multi-axis transform.
    ///
    /// `s` requires `axes`, and both must have the same length. Entries of
    /// `s` equal to [`KEEP_LENGTH`] use the default length of their axis.
    pub fn multi(
        shape: &[usize],
        s: Option<&[isize]>,
        axes: Option<&[isize]>,
        rule: LengthRule,
        direction: Direction,
        norm: Norm,
    ) -> Result<Self, FftError> {
        if s.is_some() && axes.is_none() {
            return Err(FftError::InvalidArgument("`s` requires `axes`"));
        }
        let resolved = resolve_axes(axes, shape.len())?;
        if let Some(s) = s {
            if s.len() != resolved.len() {
                return Err(FftError::InvalidArgument(
                    "`s` and `axes` must have the same length",
                ));
            }
        }
        let last = resolved.len().checked_sub(1);
        let mut lengths = Vec::with_capacity(resolved.len());
        for (i, &a) in resolved.iter().enumerate() {
            let axis_rule = if Some(i) == last { rule } else { LengthRule::Input };
            let requested = s.map(|s| s[i]).unwrap_or(KEEP_LENGTH);
            let len = match requested {
                KEEP_LENGTH => default_length(shape[a], axis_rule)?,
                l if l <= 0 => {
                    return Err(FftError::InvalidArgument(
                        "transform length must be positive",
                    ))
                }
                l => l as usize,
            };
            lengths.push(len);
        }
        check_sizes(shape, &resolved, &lengths)?;
        let plan = Self {
            axes: resolved,
            lengths,
            direction,
            norm,
        };
        fft_log!(debug, "resolved plan {:?} for shape {:?}", plan, shape);
        Ok(plan)
    }

    /// Product of the planned lengths; the `n` used for normalization.
    pub fn logical_size(&self) -> usize {
        self.lengths.iter().product()
    }

    /// Last planned axis and its logical length.
    pub fn last(&self) -> Option<(usize, usize)> {
        self.axes.last().copied().zip(self.lengths.last().copied())
    }

    /// Same plan restricted to every axis except the last.
    pub fn leading(&self) -> TransformPlan {
        let k = self.axes.len().saturating_sub(1);
        TransformPlan {
            axes: self.axes[..k].to_vec(),
            lengths: self.lengths[..k].to_vec(),
            direction: self.direction,
            norm: self.norm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn negative_axes_count_from_the_end() {
        assert_eq!(resolve_axis(-1, 3), Ok(2));
        assert_eq!(resolve_axis(-3, 3), Ok(0));
        assert_eq!(
            resolve_axis(3, 3),
            Err(FftError::InvalidAxis { axis: 3, rank: 3 })
        );
        assert_eq!(
            resolve_axis(-4, 3),
            Err(FftError::InvalidAxis { axis: -4, rank: 3 })
        );
        assert!(resolve_axis(0, 0).is_err());
    }

    #[test]
    fn duplicate_axes_rejected() {
        assert_eq!(
            resolve_axes(Some(&[0, -2]), 2),
            Err(FftError::InvalidAxis { axis: -2, rank: 2 })
        );
        assert_eq!(resolve_axes(None, 3), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn s_requires_axes() {
        let err = TransformPlan::multi(
            &[4, 4],
            Some(&[4, 4]),
            None,
            LengthRule::Input,
            Direction::Forward,
            Norm::Backward,
        );
        assert!(matches!(err, Err(FftError::InvalidArgument(_))));
    }

    #[test]
    fn s_and_axes_lengths_must_agree() {
        let err = TransformPlan::multi(
            &[4, 4],
            Some(&[4]),
            Some(&[0, 1]),
            LengthRule::Input,
            Direction::Forward,
            Norm::Backward,
        );
        assert!(matches!(err, Err(FftError::InvalidArgument(_))));
    }

    #[test]
    fn keep_length_and_half_spectrum_default() {
        let plan = TransformPlan::multi(
            &[3, 5, 4],
            Some(&[-1, 6]),
            Some(&[1, 2]),
            LengthRule::HalfSpectrum,
            Direction::Inverse,
            Norm::Ortho,
        )
        .unwrap();
        assert_eq!(plan.axes, vec![1, 2]);
        assert_eq!(plan.lengths, vec![5, 6]);
        assert_eq!(plan.logical_size(), 30);

        let plan = TransformPlan::multi(
            &[3, 5],
            None,
            None,
            LengthRule::HalfSpectrum,
            Direction::Inverse,
            Norm::Backward,
        )
        .unwrap();
        assert_eq!(plan.lengths, vec![3, 8]);
        assert_eq!(plan.last(), Some((1, 8)));
        assert_eq!(plan.leading().axes, vec![0]);
    }

    #[test]
    fn non_positive_lengths_rejected() {
        for s in [[0isize], [-2]] {
            let err = TransformPlan::multi(
                &[4],
                Some(&s),
                Some(&[0]),
                LengthRule::Input,
                Direction::Forward,
                Norm::Backward,
            );
            assert!(matches!(err, Err(FftError::InvalidArgument(_))));
        }
        let err = TransformPlan::single(
            &[4],
            Some(0),
            LAST_AXIS,
            LengthRule::Input,
            Direction::Forward,
            Norm::Backward,
        );
        assert!(matches!(err, Err(FftError::InvalidArgument(_))));
        // A one-bin half spectrum has no default output length.
        let err = TransformPlan::single(
            &[1],
            None,
            LAST_AXIS,
            LengthRule::HalfSpectrum,
            Direction::Inverse,
            Norm::Backward,
        );
        assert!(matches!(err, Err(FftError::InvalidArgument(_))));
    }
}
