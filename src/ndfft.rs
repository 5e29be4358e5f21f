//! N-dimensional complex transforms.
//!
//! Every transform is a sequence of 1-D kernel passes over the lanes of one
//! axis at a time, followed by a single normalization with `n` equal to the
//! product of the planned lengths. The n-D DFT is separable, so the order of
//! the passes does not change the result beyond rounding.
//!
//! With the `parallel` feature, lanes of a large axis are gathered into a
//! contiguous buffer and transformed on the rayon pool, one
//! [`ScalarFftImpl`] per worker.

use alloc::vec;

use crate::array::Array;
use crate::axes::{LengthRule, TransformPlan};
use crate::fft::{Direction, FftError, FftImpl, ScalarFftImpl};
use crate::norm::Norm;
use crate::num::{Complex, Float};
use crate::resize::resize_axes;

#[cfg(feature = "parallel")]
use core::sync::atomic::{AtomicUsize, Ordering};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::OnceLock;

/// Override for the parallel lane threshold.
///
/// `0` means no override and the environment or heuristic is used.
#[cfg(feature = "parallel")]
static PARALLEL_LANE_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
#[cfg(feature = "parallel")]
static PARALLEL_ENV: OnceLock<ParallelEnv> = OnceLock::new();

#[cfg(feature = "parallel")]
struct ParallelEnv {
    threshold: usize,
    per_core_work: usize,
    threads: usize,
}

#[cfg(feature = "parallel")]
fn env_usize(key: &str) -> Option<usize> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            fft_log!(warn, "ignoring {}={:?}: expected an unsigned integer", key, raw);
            None
        }
    }
}

#[cfg(feature = "parallel")]
fn parallel_env() -> &'static ParallelEnv {
    PARALLEL_ENV.get_or_init(|| ParallelEnv {
        threshold: env_usize("ARRAYFFT_PAR_THRESHOLD").unwrap_or(0),
        per_core_work: env_usize("ARRAYFFT_PAR_PER_CORE_WORK").unwrap_or(4096),
        threads: num_cpus::get().max(1),
    })
}

/// Set the minimum number of complex points on an axis before its lanes are
/// transformed in parallel.
///
/// Passing `0` reverts to `ARRAYFFT_PAR_THRESHOLD` or the built-in heuristic.
#[cfg(feature = "parallel")]
pub fn set_parallel_lane_threshold(threshold: usize) {
    PARALLEL_LANE_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

/// Threshold currently in effect.
#[cfg(feature = "parallel")]
pub fn parallel_lane_threshold() -> usize {
    let override_thr = PARALLEL_LANE_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return override_thr;
    }
    let env = parallel_env();
    if env.threshold != 0 {
        env.threshold
    } else {
        env.per_core_work * env.threads
    }
}

#[cfg(feature = "parallel")]
fn should_parallelize(points: usize, lanes: usize) -> bool {
    lanes > 1 && points >= parallel_lane_threshold()
}

/// Lane geometry of `shape` along `axis`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Lanes {
    pub(crate) outer: usize,
    pub(crate) len: usize,
    pub(crate) inner: usize,
}

impl Lanes {
    pub(crate) fn new(shape: &[usize], axis: usize) -> Self {
        Self {
            outer: shape[..axis].iter().product(),
            len: shape[axis],
            inner: shape[axis + 1..].iter().product(),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.outer * self.inner
    }

    /// Offset of the first element of lane `l`.
    pub(crate) fn start(&self, l: usize) -> usize {
        (l / self.inner) * self.len * self.inner + l % self.inner
    }
}

/// Unnormalized 1-D transform of every lane along `axis`, in place.
pub(crate) fn transform_axis<T: Float>(
    data: &mut Array<Complex<T>>,
    axis: usize,
    direction: Direction,
) -> Result<(), FftError> {
    let lanes = Lanes::new(data.shape(), axis);
    if lanes.count() == 0 || lanes.len <= 1 {
        return Ok(());
    }
    #[cfg(feature = "parallel")]
    {
        if should_parallelize(lanes.count() * lanes.len, lanes.count()) {
            fft_log!(
                debug,
                "axis {} len {}: {} lanes in parallel",
                axis,
                lanes.len,
                lanes.count()
            );
            return transform_axis_parallel(data.as_mut_slice(), lanes, direction);
        }
    }
    fft_log!(
        debug,
        "axis {} len {}: {} lanes",
        axis,
        lanes.len,
        lanes.count()
    );
    let fft = ScalarFftImpl::<T>::default();
    let mut scratch = vec![Complex::zero(); lanes.len];
    let buf = data.as_mut_slice();
    for l in 0..lanes.count() {
        let lane = &mut buf[lanes.start(l)..];
        match direction {
            Direction::Forward => fft.fft_strided(lane, lanes.inner, &mut scratch)?,
            Direction::Inverse => fft.ifft_strided(lane, lanes.inner, &mut scratch)?,
        }
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn transform_axis_parallel<T: Float>(
    buf: &mut [Complex<T>],
    lanes: Lanes,
    direction: Direction,
) -> Result<(), FftError> {
    let mut packed = vec![Complex::zero(); lanes.count() * lanes.len];
    for (l, lane) in packed.chunks_exact_mut(lanes.len).enumerate() {
        let start = lanes.start(l);
        for (j, v) in lane.iter_mut().enumerate() {
            *v = buf[start + j * lanes.inner];
        }
    }
    packed
        .par_chunks_mut(lanes.len)
        .try_for_each_init(ScalarFftImpl::<T>::default, |fft, lane| {
            fft.transform(lane, direction)
        })?;
    for (l, lane) in packed.chunks_exact(lanes.len).enumerate() {
        let start = lanes.start(l);
        for (j, v) in lane.iter().enumerate() {
            buf[start + j * lanes.inner] = *v;
        }
    }
    Ok(())
}

/// Resize, transform every planned axis and normalize.
pub(crate) fn execute<T: Float>(
    x: &Array<Complex<T>>,
    plan: &TransformPlan,
) -> Result<Array<Complex<T>>, FftError> {
    let mut out = resize_axes(x, &plan.axes, &plan.lengths);
    for &axis in &plan.axes {
        transform_axis(&mut out, axis, plan.direction)?;
    }
    plan.norm
        .apply(out.as_mut_slice(), plan.logical_size(), plan.direction);
    Ok(out)
}

/// One-dimensional forward DFT along `axis`.
///
/// `n` pads with zeros or truncates the axis before transforming; `None`
/// keeps its length.
pub fn fft<T: Float>(
    x: &Array<Complex<T>>,
    n: Option<usize>,
    axis: isize,
    norm: Norm,
) -> Result<Array<Complex<T>>, FftError> {
    let plan = TransformPlan::single(
        x.shape(),
        n,
        axis,
        LengthRule::Input,
        Direction::Forward,
        norm,
    )?;
    execute(x, &plan)
}

/// One-dimensional inverse DFT along `axis`.
pub fn ifft<T: Float>(
    x: &Array<Complex<T>>,
    n: Option<usize>,
    axis: isize,
    norm: Norm,
) -> Result<Array<Complex<T>>, FftError> {
    let plan = TransformPlan::single(
        x.shape(),
        n,
        axis,
        LengthRule::Input,
        Direction::Inverse,
        norm,
    )?;
    execute(x, &plan)
}

/// N-dimensional forward DFT over `axes` (all axes when `None`).
///
/// `s` gives the logical length per entry of `axes`; `-1` keeps an axis'
/// length. `s` cannot be given without `axes`.
pub fn fftn<T: Float>(
    x: &Array<Complex<T>>,
    s: Option<&[isize]>,
    axes: Option<&[isize]>,
    norm: Norm,
) -> Result<Array<Complex<T>>, FftError> {
    let plan = TransformPlan::multi(
        x.shape(),
        s,
        axes,
        LengthRule::Input,
        Direction::Forward,
        norm,
    )?;
    execute(x, &plan)
}

/// N-dimensional inverse DFT over `axes` (all axes when `None`).
pub fn ifftn<T: Float>(
    x: &Array<Complex<T>>,
    s: Option<&[isize]>,
    axes: Option<&[isize]>,
    norm: Norm,
) -> Result<Array<Complex<T>>, FftError> {
    let plan = TransformPlan::multi(
        x.shape(),
        s,
        axes,
        LengthRule::Input,
        Direction::Inverse,
        norm,
    )?;
    execute(x, &plan)
}
