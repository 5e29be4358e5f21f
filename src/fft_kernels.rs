//! Fixed-size forward butterflies for the smallest power-of-two lengths.

use crate::num::{Complex, Float};

const FRAC_1_SQRT_2: f64 = core::f64::consts::FRAC_1_SQRT_2;
// cos(π/8), sin(π/8)
const COS_PI_8: f64 = 0.923_879_532_511_286_7;
const SIN_PI_8: f64 = 0.382_683_432_365_089_8;

#[inline(always)]
pub fn fft2<T: Float>(input: &mut [Complex<T>]) {
    debug_assert_eq!(input.len(), 2);
    let a = input[0];
    let b = input[1];
    input[0] = a + b;
    input[1] = a - b;
}

#[inline(always)]
pub fn fft4<T: Float>(input: &mut [Complex<T>]) {
    debug_assert_eq!(input.len(), 4);
    let even0 = input[0] + input[2];
    let even1 = input[0] - input[2];
    let odd0 = input[1] + input[3];
    let t1 = (input[1] - input[3]).mul_neg_i();
    input[0] = even0 + odd0;
    input[2] = even0 - odd0;
    input[1] = even1 + t1;
    input[3] = even1 - t1;
}

#[inline(always)]
pub fn fft8<T: Float>(input: &mut [Complex<T>]) {
    debug_assert_eq!(input.len(), 8);
    let mut even = [input[0], input[2], input[4], input[6]];
    let mut odd = [input[1], input[3], input[5], input[7]];
    fft4(&mut even);
    fft4(&mut odd);

    let h = T::from_f64(FRAC_1_SQRT_2);
    let t = [
        odd[0],
        odd[1] * Complex::new(h, -h),
        odd[2].mul_neg_i(),
        odd[3] * Complex::new(-h, -h),
    ];
    for k in 0..4 {
        input[k] = even[k] + t[k];
        input[k + 4] = even[k] - t[k];
    }
}

#[inline(always)]
pub fn fft16<T: Float>(input: &mut [Complex<T>]) {
    debug_assert_eq!(input.len(), 16);
    let mut even = [Complex::zero(); 8];
    let mut odd = [Complex::zero(); 8];
    for k in 0..8 {
        even[k] = input[2 * k];
        odd[k] = input[2 * k + 1];
    }
    fft8(&mut even);
    fft8(&mut odd);

    let h = T::from_f64(FRAC_1_SQRT_2);
    let c = T::from_f64(COS_PI_8);
    let s = T::from_f64(SIN_PI_8);
    // exp(-2πi k/16), k = 0..8
    let w = [
        Complex::new(T::one(), T::zero()),
        Complex::new(c, -s),
        Complex::new(h, -h),
        Complex::new(s, -c),
        Complex::new(T::zero(), -T::one()),
        Complex::new(-s, -c),
        Complex::new(-h, -h),
        Complex::new(-c, -s),
    ];
    for k in 0..8 {
        let t = odd[k] * w[k];
        input[k] = even[k] + t;
        input[k + 8] = even[k] - t;
    }
}
