//! One-dimensional complex DFT kernel.
//!
//! [`ScalarFftImpl`] computes unnormalized forward and inverse transforms of
//! any non-zero length:
//!
//! * powers of two use a Stockham auto-sort FFT (fixed butterflies up to 16),
//! * lengths whose prime factors are all at most [`MAX_MIXED_RADIX`] use a
//!   recursive mixed-radix decimation-in-time FFT,
//! * everything else goes through [Bluestein's chirp-z
//!   algorithm](https://en.wikipedia.org/wiki/Chirp_Z-transform#Bluestein's_algorithm)
//!   on a padded power-of-two grid.
//!
//! Normalization is never applied here; see [`crate::norm`].

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;
use hashbrown::HashMap;

use crate::fft_kernels::{fft16, fft2, fft4, fft8};
pub use crate::num::{Complex, Complex32, Complex64, Float};

/// Largest prime factor handled by the mixed-radix path.
pub const MAX_MIXED_RADIX: usize = 31;

/// Error type shared by every operation in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Axis out of range for an array of the given rank, or repeated.
    InvalidAxis { axis: isize, rank: usize },
    /// Inconsistent or out-of-domain argument.
    InvalidArgument(&'static str),
    /// Logical size `n` has no exact representation in the output precision.
    NumericalPrecisionLoss { n: usize },
    MismatchedLengths,
    InvalidStride,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::InvalidAxis { axis, rank } => {
                write!(f, "axis {axis} is invalid for an array of rank {rank}")
            }
            FftError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            FftError::NumericalPrecisionLoss { n } => {
                write!(f, "transform size {n} is not exactly representable")
            }
            FftError::MismatchedLengths => f.write_str("buffer lengths do not match"),
            FftError::InvalidStride => f.write_str("stride must be non-zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Sign of the exponent in the transform kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// `exp(-2πi jk/L)`
    #[default]
    Forward,
    /// `exp(+2πi jk/L)`
    Inverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftStrategy {
    Stockham,
    MixedRadix,
    Bluestein,
    #[default]
    Auto,
}

/// `exp(-2πi num/den)` evaluated in `f64` and rounded to `T`.
#[inline]
pub(crate) fn unit_root<T: Float>(num: usize, den: usize) -> Complex<T> {
    let theta = -2.0 * core::f64::consts::PI * (num as f64) / (den as f64);
    let (s, c) = libm::sincos(theta);
    Complex::new(T::from_f64(c), T::from_f64(s))
}

type BluesteinPair<T> = (Arc<[Complex<T>]>, Arc<[Complex<T>]>);

/// Per-instance cache of twiddle and chirp tables.
///
/// A planner is owned by a single [`ScalarFftImpl`] and never shared between
/// threads, so the caches need no synchronization.
pub struct FftPlanner<T: Float> {
    /// `exp(-2πi k/n)` for `k = 0..n`, keyed by `n`.
    cache: HashMap<usize, Arc<[Complex<T>]>>,
    bluestein_cache: HashMap<usize, BluesteinPair<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: Float> Default for FftPlanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FftPlanner<T> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            bluestein_cache: HashMap::new(),
            scratch: Vec::new(),
        }
    }

    /// Full table of `n`-th roots of unity, `exp(-2πi k/n)` for `k = 0..n`.
    pub fn get_twiddles(&mut self, n: usize) -> Arc<[Complex<T>]> {
        let table = self
            .cache
            .entry(n)
            .or_insert_with(|| (0..n).map(|k| unit_root(k, n)).collect());
        Arc::clone(table)
    }

    /// Chirp `exp(-iπ k²/n)` and its padded length, if already built.
    fn cached_bluestein(&self, n: usize) -> Option<BluesteinPair<T>> {
        self.bluestein_cache
            .get(&n)
            .map(|(c, b)| (Arc::clone(c), Arc::clone(b)))
    }

    /// Determine an FFT strategy based on the input length.
    pub fn plan_strategy(&self, n: usize) -> FftStrategy {
        if n.is_power_of_two() {
            FftStrategy::Stockham
        } else if largest_prime_factor(n) <= MAX_MIXED_RADIX {
            FftStrategy::MixedRadix
        } else {
            FftStrategy::Bluestein
        }
    }

    #[cfg(any(test, feature = "internal-tests"))]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    #[cfg(any(test, feature = "internal-tests"))]
    pub fn bluestein_cache_len(&self) -> usize {
        self.bluestein_cache.len()
    }
}

/// Prime factors of `n` in non-decreasing order.
pub(crate) fn factorize(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    for &p in &[2, 3, 5] {
        while n % p == 0 && n > 1 {
            factors.push(p);
            n /= p;
        }
    }
    let mut f = 7;
    while f * f <= n {
        while n % f == 0 {
            factors.push(f);
            n /= f;
        }
        f += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

fn largest_prime_factor(n: usize) -> usize {
    factorize(n).last().copied().unwrap_or(1)
}

/// Radices for the mixed-radix recursion: pairs of twos merge into radix 4.
fn radix_plan(n: usize) -> Vec<usize> {
    let factors = factorize(n);
    let twos = factors.iter().filter(|&&p| p == 2).count();
    let mut plan = vec![4; twos / 2];
    if twos % 2 == 1 {
        plan.push(2);
    }
    plan.extend(factors.into_iter().filter(|&p| p != 2));
    plan
}

#[inline(always)]
fn butterfly4<T: Float>(
    a: Complex<T>,
    b: Complex<T>,
    c: Complex<T>,
    d: Complex<T>,
) -> (Complex<T>, Complex<T>, Complex<T>, Complex<T>) {
    let t0 = a + c;
    let t1 = a - c;
    let t2 = b + d;
    let t3 = (b - d).mul_neg_i();
    (t0 + t2, t1 + t3, t0 - t2, t1 - t3)
}

/// One Stockham pass: `n1` groups of span `2 * n2` in `src` combine into `dst`.
fn stockham_pass<T: Float>(
    src: &[Complex<T>],
    dst: &mut [Complex<T>],
    n1: usize,
    n2: usize,
    twiddles: &[Complex<T>],
) {
    for k in 0..n1 {
        // exp(-2πi k / (2 n1))
        let w = twiddles[k * n2];
        let base0 = 2 * k * n2;
        let base1 = base0 + n2;
        let (lo, hi) = (k * n2, (k + n1) * n2);
        for j in 0..n2 {
            let u = src[base0 + j];
            let v = src[base1 + j] * w;
            dst[lo + j] = u + v;
            dst[hi + j] = u - v;
        }
    }
}

/// Recursive decimation-in-time step.
///
/// Transforms `input[offset + j * stride]` for `j in 0..out.len()` into `out`.
/// `root_step` maps this level's roots onto the full `roots` table.
fn mixed_radix_rec<T: Float>(
    input: &[Complex<T>],
    offset: usize,
    stride: usize,
    out: &mut [Complex<T>],
    radices: &[usize],
    roots: &[Complex<T>],
    root_step: usize,
) {
    let n = out.len();
    if n == 1 {
        out[0] = input[offset];
        return;
    }
    let p = radices[0];
    let m = n / p;
    for (r, chunk) in out.chunks_exact_mut(m).enumerate() {
        mixed_radix_rec(
            input,
            offset + r * stride,
            stride * p,
            chunk,
            &radices[1..],
            roots,
            root_step * p,
        );
    }
    let total = roots.len();
    match p {
        2 => {
            for k in 0..m {
                let a = out[k];
                let b = out[m + k] * roots[k * root_step];
                out[k] = a + b;
                out[m + k] = a - b;
            }
        }
        4 => {
            for k in 0..m {
                let a = out[k];
                let b = out[m + k] * roots[k * root_step];
                let c = out[2 * m + k] * roots[2 * k * root_step];
                let d = out[3 * m + k] * roots[3 * k * root_step];
                let (y0, y1, y2, y3) = butterfly4(a, b, c, d);
                out[k] = y0;
                out[m + k] = y1;
                out[2 * m + k] = y2;
                out[3 * m + k] = y3;
            }
        }
        _ => {
            let mut tmp = vec![Complex::zero(); p];
            let base_step = m * root_step;
            for k in 0..m {
                for (r, t) in tmp.iter_mut().enumerate() {
                    *t = out[r * m + k] * roots[(r * k * root_step) % total];
                }
                for q in 0..p {
                    let mut acc = tmp[0];
                    for (r, &t) in tmp.iter().enumerate().skip(1) {
                        acc += t * roots[(r * q * base_step) % total];
                    }
                    out[q * m + k] = acc;
                }
            }
        }
    }
}

pub trait FftImpl<T: Float> {
    /// Unnormalized forward transform in place.
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;
    /// Unnormalized inverse transform in place.
    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError>;

    fn transform(&self, input: &mut [Complex<T>], direction: Direction) -> Result<(), FftError> {
        match direction {
            Direction::Forward => self.fft(input),
            Direction::Inverse => self.ifft(input),
        }
    }

    /// Transform the lane `input[0], input[stride], ..` of `scratch.len()`
    /// elements, using `scratch` as the contiguous work buffer.
    fn fft_strided(
        &self,
        input: &mut [Complex<T>],
        stride: usize,
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        strided_with(input, stride, scratch, |buf| self.fft(buf))
    }

    fn ifft_strided(
        &self,
        input: &mut [Complex<T>],
        stride: usize,
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        strided_with(input, stride, scratch, |buf| self.ifft(buf))
    }

    fn fft_with_strategy(
        &self,
        input: &mut [Complex<T>],
        strategy: FftStrategy,
    ) -> Result<(), FftError>;
}

fn strided_with<T: Float>(
    input: &mut [Complex<T>],
    stride: usize,
    scratch: &mut [Complex<T>],
    f: impl FnOnce(&mut [Complex<T>]) -> Result<(), FftError>,
) -> Result<(), FftError> {
    if stride == 0 {
        return Err(FftError::InvalidStride);
    }
    let n = scratch.len();
    if n == 0 {
        return Err(FftError::InvalidArgument("transform length must be positive"));
    }
    if input.len() < (n - 1) * stride + 1 {
        return Err(FftError::MismatchedLengths);
    }
    for (i, s) in scratch.iter_mut().enumerate() {
        *s = input[i * stride];
    }
    f(scratch)?;
    for (i, s) in scratch.iter().enumerate() {
        input[i * stride] = *s;
    }
    Ok(())
}

/// Portable FFT engine with its own planner.
///
/// Not `Sync`: give each thread its own instance.
pub struct ScalarFftImpl<T: Float> {
    planner: RefCell<FftPlanner<T>>,
}

impl<T: Float> Default for ScalarFftImpl<T> {
    fn default() -> Self {
        Self {
            planner: RefCell::new(FftPlanner::new()),
        }
    }
}

impl<T: Float> ScalarFftImpl<T> {
    pub fn with_planner(planner: FftPlanner<T>) -> Self {
        Self {
            planner: RefCell::new(planner),
        }
    }

    #[cfg(any(test, feature = "internal-tests"))]
    pub fn planner(&self) -> core::cell::Ref<'_, FftPlanner<T>> {
        self.planner.borrow()
    }

    /// Stockham auto-sort FFT; `input.len()` must be a power of two.
    pub fn stockham_fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::InvalidArgument("transform length must be positive"));
        }
        if !n.is_power_of_two() {
            return Err(FftError::InvalidArgument(
                "Stockham FFT requires a power-of-two length",
            ));
        }
        match n {
            1 => return Ok(()),
            2 => {
                fft2(input);
                return Ok(());
            }
            4 => {
                fft4(input);
                return Ok(());
            }
            8 => {
                fft8(input);
                return Ok(());
            }
            16 => {
                fft16(input);
                return Ok(());
            }
            _ => {}
        }

        let (twiddles, mut scratch) = {
            let mut planner = self.planner.borrow_mut();
            let twiddles = planner.get_twiddles(n);
            let scratch = core::mem::take(&mut planner.scratch);
            (twiddles, scratch)
        };
        if scratch.len() < n {
            scratch.resize(n, Complex::zero());
        }
        let work = &mut scratch[..n];

        // n1 = number of groups, n2 = half-span of each group in this pass.
        let mut in_scratch = false;
        let mut n1 = 1usize;
        let mut n2 = n;
        while n1 < n {
            n2 >>= 1;
            if in_scratch {
                stockham_pass(work, input, n1, n2, &twiddles);
            } else {
                stockham_pass(input, work, n1, n2, &twiddles);
            }
            in_scratch = !in_scratch;
            n1 <<= 1;
        }
        if in_scratch {
            input.copy_from_slice(work);
        }

        self.planner.borrow_mut().scratch = scratch;
        Ok(())
    }

    /// Mixed-radix FFT for lengths with small prime factors.
    pub fn mixed_radix_fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::InvalidArgument("transform length must be positive"));
        }
        if n == 1 {
            return Ok(());
        }
        let roots = self.planner.borrow_mut().get_twiddles(n);
        let radices = radix_plan(n);
        let mut out = vec![Complex::zero(); n];
        mixed_radix_rec(input, 0, 1, &mut out, &radices, &roots, 1);
        input.copy_from_slice(&out);
        Ok(())
    }

    fn bluestein_tables(&self, n: usize) -> Result<BluesteinPair<T>, FftError> {
        if let Some(pair) = self.planner.borrow().cached_bluestein(n) {
            return Ok(pair);
        }
        let m = (2 * n - 1).next_power_of_two();
        let two_n = 2 * n;
        let mut chirp: Vec<Complex<T>> = Vec::with_capacity(n);
        // k² mod 2n keeps the angle small for large k.
        let mut q = 0usize;
        for k in 0..n {
            let theta = -core::f64::consts::PI * (q as f64) / (n as f64);
            let (s, c) = libm::sincos(theta);
            chirp.push(Complex::new(T::from_f64(c), T::from_f64(s)));
            q = (q + 2 * k + 1) % two_n;
        }
        let mut b = vec![Complex::zero(); m];
        for k in 0..n {
            b[k] = chirp[k].conj();
        }
        for k in 1..n {
            b[m - k] = b[k];
        }
        self.stockham_fft(&mut b)?;
        let pair: BluesteinPair<T> = (Arc::from(chirp), Arc::from(b));
        self.planner
            .borrow_mut()
            .bluestein_cache
            .insert(n, (Arc::clone(&pair.0), Arc::clone(&pair.1)));
        Ok(pair)
    }

    /// Bluestein chirp-z FFT for arbitrary lengths.
    pub fn bluestein_fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::InvalidArgument("transform length must be positive"));
        }
        if n == 1 {
            return Ok(());
        }
        let (chirp, b_fft) = self.bluestein_tables(n)?;
        let m = b_fft.len();
        let mut a = vec![Complex::zero(); m];
        for ((dst, &x), &w) in a.iter_mut().zip(input.iter()).zip(chirp.iter()) {
            *dst = x * w;
        }
        self.stockham_fft(&mut a)?;
        for (ai, &bi) in a.iter_mut().zip(b_fft.iter()) {
            *ai = (*ai * bi).conj();
        }
        self.stockham_fft(&mut a)?;
        let scale = T::one() / T::from_usize_lossy(m);
        for ((out, &ak), &w) in input.iter_mut().zip(a.iter()).zip(chirp.iter()) {
            *out = (ak.conj() * w).scale(scale);
        }
        Ok(())
    }
}

impl<T: Float> FftImpl<T> for ScalarFftImpl<T> {
    fn fft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::InvalidArgument("transform length must be positive"));
        }
        if n == 1 {
            return Ok(());
        }
        let strategy = self.planner.borrow().plan_strategy(n);
        fft_log!(trace, "fft n={} strategy={:?}", n, strategy);
        self.fft_with_strategy(input, strategy)
    }

    fn ifft(&self, input: &mut [Complex<T>]) -> Result<(), FftError> {
        for c in input.iter_mut() {
            *c = c.conj();
        }
        self.fft(input)?;
        for c in input.iter_mut() {
            *c = c.conj();
        }
        Ok(())
    }

    fn fft_with_strategy(
        &self,
        input: &mut [Complex<T>],
        strategy: FftStrategy,
    ) -> Result<(), FftError> {
        match strategy {
            FftStrategy::Stockham => self.stockham_fft(input),
            FftStrategy::MixedRadix => self.mixed_radix_fft(input),
            FftStrategy::Bluestein => self.bluestein_fft(input),
            FftStrategy::Auto => self.fft(input),
        }
    }
}

/// Convenience: forward transform of a slice into a new vector.
pub fn fft_vec<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let mut out = input.to_vec();
    ScalarFftImpl::default().fft(&mut out)?;
    Ok(out)
}
