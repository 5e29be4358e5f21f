//! Real-input and Hermitian transforms built on the complex kernel.
//!
//! A real lane of even length `n` is packed into `n/2` complex samples,
//! transformed with a half-length complex FFT and unpacked with the twiddles
//! `exp(-iπk/(n/2))`. Odd lengths go through the full complex kernel. Only the
//! first `n/2 + 1` bins are stored; the rest follow from Hermitian symmetry.
//!
//! `hfft` and `ihfft` reuse the same machinery with conjugated data and the
//! forward/inverse normalization roles exchanged (see [`Norm::hermitian`]).

use alloc::{collections::VecDeque, sync::Arc, vec, vec::Vec};

use hashbrown::HashMap;

use crate::array::Array;
use crate::axes::{LengthRule, TransformPlan};
use crate::fft::{unit_root, Direction, FftError, FftImpl, ScalarFftImpl};
use crate::ndfft::{transform_axis, Lanes};
use crate::norm::Norm;
use crate::num::{Complex, Float};
use crate::resize::{resize_axes, resize_axis};

/// Number of real samples that make up a complex pair.
pub const STRIDE: usize = 2;

/// Maximum number of cached twiddle tables to retain in the planner.
pub const MAX_CACHE_ENTRIES: usize = 64;

/// `exp(-iπk/m)` for `k = 0..m`.
fn build_twiddle_table<T: Float>(m: usize) -> Arc<[Complex<T>]> {
    (0..m).map(|k| unit_root(k, STRIDE * m)).collect()
}

/// Planner that caches pack/unpack twiddle tables by half length.
///
/// Tables are evicted in least-recently-used order once more than
/// [`MAX_CACHE_ENTRIES`] are retained.
pub struct RfftPlanner<T: Float> {
    cache: HashMap<usize, Arc<[Complex<T>]>>,
    cache_order: VecDeque<usize>,
}

impl<T: Float> Default for RfftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RfftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            cache_order: VecDeque::new(),
        }
    }

    /// Retrieve or build the twiddle table for half length `m`.
    pub fn get_twiddles(&mut self, m: usize) -> Arc<[Complex<T>]> {
        if let Some(table) = self.cache.get(&m) {
            let table = Arc::clone(table);
            self.cache_order.retain(|&x| x != m);
            self.cache_order.push_back(m);
            return table;
        }
        if self.cache.len() == MAX_CACHE_ENTRIES {
            if let Some(old) = self.cache_order.pop_front() {
                self.cache.remove(&old);
            }
        }
        let table = build_twiddle_table::<T>(m);
        self.cache.insert(m, Arc::clone(&table));
        self.cache_order.push_back(m);
        table
    }

    /// Number of entries currently stored in the twiddle cache.
    #[cfg(any(test, feature = "internal-tests"))]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

/// Slice-level real FFT engine.
///
/// Both directions are unnormalized: `irfft(rfft(x))` yields `n * x`.
pub struct RealFft<T: Float> {
    fft: ScalarFftImpl<T>,
    planner: RfftPlanner<T>,
    scratch: Vec<Complex<T>>,
}

impl<T: Float> Default for RealFft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RealFft<T> {
    pub fn new() -> Self {
        Self {
            fft: ScalarFftImpl::default(),
            planner: RfftPlanner::new(),
            scratch: Vec::new(),
        }
    }

    fn scratch(&mut self, len: usize) -> Vec<Complex<T>> {
        let mut scratch = core::mem::take(&mut self.scratch);
        if scratch.len() < len {
            scratch.resize(len, Complex::zero());
        }
        scratch
    }

    /// Forward transform of `input` (length `n`) into `output`
    /// (length `n/2 + 1`).
    pub fn rfft(&mut self, input: &[T], output: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::InvalidArgument("transform length must be positive"));
        }
        if output.len() != n / STRIDE + 1 {
            return Err(FftError::MismatchedLengths);
        }
        if n % STRIDE == 1 {
            let mut buf = self.scratch(n);
            for (b, &x) in buf.iter_mut().zip(input) {
                *b = Complex::from_re(x);
            }
            let res = self.fft.fft(&mut buf[..n]);
            output.copy_from_slice(&buf[..output.len()]);
            self.scratch = buf;
            return res;
        }

        let m = n / STRIDE;
        let mut buf = self.scratch(m);
        for (i, b) in buf[..m].iter_mut().enumerate() {
            *b = Complex::new(input[STRIDE * i], input[STRIDE * i + 1]);
        }
        let res = self.fft.fft(&mut buf[..m]);
        if res.is_ok() {
            let twiddles = self.planner.get_twiddles(m);
            let z0 = buf[0];
            output[0] = Complex::from_re(z0.re + z0.im);
            output[m] = Complex::from_re(z0.re - z0.im);
            let half = T::from_f64(0.5);
            for k in 1..m {
                let a = buf[k];
                let b = buf[m - k].conj();
                let t = (twiddles[k] * (a - b)).mul_neg_i();
                output[k] = (a + b + t).scale(half);
            }
        }
        self.scratch = buf;
        res
    }

    /// Inverse transform of a half spectrum `input` (length `n/2 + 1`) into a
    /// real `output` of length `n`.
    ///
    /// The imaginary parts of the DC bin and, for even `n`, the Nyquist bin
    /// are ignored.
    pub fn irfft(&mut self, input: &[Complex<T>], output: &mut [T]) -> Result<(), FftError> {
        let n = output.len();
        if n == 0 {
            return Err(FftError::InvalidArgument("transform length must be positive"));
        }
        if input.len() != n / STRIDE + 1 {
            return Err(FftError::MismatchedLengths);
        }
        if n % STRIDE == 1 {
            let mut buf = self.scratch(n);
            buf[0] = Complex::from_re(input[0].re);
            for k in 1..input.len() {
                buf[k] = input[k];
                buf[n - k] = input[k].conj();
            }
            let res = self.fft.ifft(&mut buf[..n]);
            for (o, b) in output.iter_mut().zip(&buf[..n]) {
                *o = b.re;
            }
            self.scratch = buf;
            return res;
        }

        let m = n / STRIDE;
        let twiddles = self.planner.get_twiddles(m);
        let mut buf = self.scratch(m);
        let (x0, xm) = (input[0].re, input[m].re);
        buf[0] = Complex::new(x0 + xm, x0 - xm);
        for k in 1..m {
            let a = input[k];
            let b = input[m - k].conj();
            let t = (twiddles[k].conj() * (a - b)).mul_i();
            buf[k] = a + b + t;
        }
        let res = self.fft.ifft(&mut buf[..m]);
        for (i, z) in buf[..m].iter().enumerate() {
            output[STRIDE * i] = z.re;
            output[STRIDE * i + 1] = z.im;
        }
        self.scratch = buf;
        res
    }
}

/// Unnormalized real-to-half-spectrum transform of every lane along `axis`.
fn rfft_axis<T: Float>(x: &Array<T>, axis: usize) -> Result<Array<Complex<T>>, FftError> {
    let lanes = Lanes::new(x.shape(), axis);
    let half = lanes.len / STRIDE + 1;
    let mut shape = x.shape().to_vec();
    shape[axis] = half;
    let mut out = Array::zeros(&shape);
    if lanes.count() == 0 {
        return Ok(out);
    }
    let out_lanes = Lanes::new(&shape, axis);
    let mut engine = RealFft::<T>::new();
    let mut lane_in = vec![T::zero(); lanes.len];
    let mut lane_out = vec![Complex::zero(); half];
    let src = x.as_slice();
    let dst = out.as_mut_slice();
    for l in 0..lanes.count() {
        let start = lanes.start(l);
        for (j, v) in lane_in.iter_mut().enumerate() {
            *v = src[start + j * lanes.inner];
        }
        engine.rfft(&lane_in, &mut lane_out)?;
        let start = out_lanes.start(l);
        for (j, v) in lane_out.iter().enumerate() {
            dst[start + j * out_lanes.inner] = *v;
        }
    }
    Ok(out)
}

/// Unnormalized half-spectrum-to-real transform of every lane along `axis`.
///
/// `x` must already hold `n/2 + 1` bins along `axis`.
fn irfft_axis<T: Float>(x: &Array<Complex<T>>, axis: usize, n: usize) -> Result<Array<T>, FftError> {
    let lanes = Lanes::new(x.shape(), axis);
    let mut shape = x.shape().to_vec();
    shape[axis] = n;
    let mut out = Array::zeros(&shape);
    if lanes.count() == 0 {
        return Ok(out);
    }
    let out_lanes = Lanes::new(&shape, axis);
    let mut engine = RealFft::<T>::new();
    let mut lane_in = vec![Complex::zero(); lanes.len];
    let mut lane_out = vec![T::zero(); n];
    let src = x.as_slice();
    let dst = out.as_mut_slice();
    for l in 0..lanes.count() {
        let start = lanes.start(l);
        for (j, v) in lane_in.iter_mut().enumerate() {
            *v = src[start + j * lanes.inner];
        }
        engine.irfft(&lane_in, &mut lane_out)?;
        let start = out_lanes.start(l);
        for (j, v) in lane_out.iter().enumerate() {
            dst[start + j * out_lanes.inner] = *v;
        }
    }
    Ok(out)
}

fn scale_real<T: Float>(data: &mut [T], s: T) {
    if s == T::one() {
        return;
    }
    for v in data.iter_mut() {
        *v = *v * s;
    }
}

/// Real transforms over no axes have no last axis to compact.
fn require_axes(plan: &TransformPlan) -> Result<(usize, usize), FftError> {
    plan.last()
        .ok_or(FftError::InvalidArgument("at least one axis is required"))
}

/// One-dimensional DFT of a real array, keeping the `n/2 + 1`
/// non-negative frequency bins along `axis`.
pub fn rfft<T: Float>(
    x: &Array<T>,
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
    let (axis, n) = require_axes(&plan)?;
    let resized = resize_axis(x, axis, n);
    let mut out = rfft_axis(&resized, axis)?;
    norm.apply(out.as_mut_slice(), n, Direction::Forward);
    Ok(out)
}

/// Inverse of [`rfft`]: real output of length `n` along `axis`.
///
/// `n` defaults to `2 * (m - 1)` for an input of `m` bins. The input is
/// padded or truncated to `n/2 + 1` bins first.
pub fn irfft<T: Float>(
    x: &Array<Complex<T>>,
    n: Option<usize>,
    axis: isize,
    norm: Norm,
) -> Result<Array<T>, FftError> {
    let plan = TransformPlan::single(
        x.shape(),
        n,
        axis,
        LengthRule::HalfSpectrum,
        Direction::Inverse,
        norm,
    )?;
    let (axis, n) = require_axes(&plan)?;
    let resized = resize_axis(x, axis, n / STRIDE + 1);
    let mut out = irfft_axis(&resized, axis, n)?;
    scale_real(out.as_mut_slice(), norm.scale(n, Direction::Inverse));
    Ok(out)
}

/// N-dimensional DFT of a real array. The last entry of `axes` is compacted
/// to `n/2 + 1` bins; the remaining axes get full complex transforms.
pub fn rfftn<T: Float>(
    x: &Array<T>,
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
    let (last, _) = require_axes(&plan)?;
    let resized = resize_axes(x, &plan.axes, &plan.lengths);
    let mut out = rfft_axis(&resized, last)?;
    for &axis in &plan.leading().axes {
        transform_axis(&mut out, axis, Direction::Forward)?;
    }
    norm.apply(out.as_mut_slice(), plan.logical_size(), Direction::Forward);
    Ok(out)
}

/// Inverse of [`rfftn`]. The last planned axis defaults to `2 * (m - 1)`
/// output samples.
pub fn irfftn<T: Float>(
    x: &Array<Complex<T>>,
    s: Option<&[isize]>,
    axes: Option<&[isize]>,
    norm: Norm,
) -> Result<Array<T>, FftError> {
    let plan = TransformPlan::multi(
        x.shape(),
        s,
        axes,
        LengthRule::HalfSpectrum,
        Direction::Inverse,
        norm,
    )?;
    let (last, n_last) = require_axes(&plan)?;
    let leading = plan.leading();
    let mut spectrum = resize_axes(x, &leading.axes, &leading.lengths);
    spectrum = resize_axis(&spectrum, last, n_last / STRIDE + 1);
    for &axis in &leading.axes {
        transform_axis(&mut spectrum, axis, Direction::Inverse)?;
    }
    let mut out = irfft_axis(&spectrum, last, n_last)?;
    scale_real(
        out.as_mut_slice(),
        norm.scale(plan.logical_size(), Direction::Inverse),
    );
    Ok(out)
}

/// DFT of a signal with Hermitian symmetry, given as its half spectrum.
///
/// Output is real with `n` samples along `axis`, `n` defaulting to
/// `2 * (m - 1)`. Normalization roles are those of an inverse transform:
/// `Norm::Backward` leaves the result unscaled.
pub fn hfft<T: Float>(
    x: &Array<Complex<T>>,
    n: Option<usize>,
    axis: isize,
    norm: Norm,
) -> Result<Array<T>, FftError> {
    let conj = x.map(|c| c.conj());
    irfft(&conj, n, axis, norm.hermitian())
}

/// Inverse of [`hfft`]: the conjugated half spectrum of a real signal.
///
/// With `Norm::Backward` the result is scaled by `1/n`.
pub fn ihfft<T: Float>(
    x: &Array<T>,
    n: Option<usize>,
    axis: isize,
    norm: Norm,
) -> Result<Array<Complex<T>>, FftError> {
    let spectrum = rfft(x, n, axis, norm.hermitian())?;
    Ok(spectrum.map(|c| c.conj()))
}
