//! Basic usage example for arrayfft
//!
//! Complex and real transforms, normalization modes, frequency bins and
//! spectrum shifts on small 1-D signals.

use arrayfft::fft::{FftImpl, ScalarFftImpl};
use arrayfft::{
    fft, fftfreq, fftshift, hfft, ifft, ihfft, irfft, rfft, rfftfreq, Array, Complex32, FftPlanner,
    Norm, LAST_AXIS,
};

fn fmt(data: &[Complex32]) -> Vec<String> {
    data.iter()
        .map(|c| format!("{:.2}{:+.2}i", c.re, c.im))
        .collect()
}

fn main() {
    println!("=== arrayfft Basic Usage Example ===\n");

    // 1. In-place kernel with a reusable planner
    println!("1. 1-D kernel");
    let planner = FftPlanner::<f32>::new();
    let kernel = ScalarFftImpl::with_planner(planner);
    let mut data: Vec<Complex32> = (1..=4).map(|i| Complex32::new(i as f32, 0.0)).collect();
    kernel.fft(&mut data).unwrap();
    println!("   FFT (unnormalized): {:?}", fmt(&data));
    println!();

    // 2. Array API with normalization
    println!("2. fft / ifft");
    let x = Array::from_vec(vec![
        Complex32::new(1.0, 0.0),
        Complex32::new(2.0, -1.0),
        Complex32::new(0.0, 0.5),
        Complex32::new(-1.0, 0.0),
        Complex32::new(3.0, 2.0),
    ]);
    for norm in [Norm::Backward, Norm::Ortho, Norm::Forward] {
        let y = fft(&x, None, LAST_AXIS, norm).unwrap();
        println!("   fft norm={norm}: {:?}", fmt(y.as_slice()));
    }
    let y = fft(&x, Some(8), LAST_AXIS, Norm::Backward).unwrap();
    let back = ifft(&y, None, LAST_AXIS, Norm::Backward).unwrap();
    println!("   zero-padded to 8, inverted: {:?}", fmt(back.as_slice()));
    println!();

    // 3. Real input
    println!("3. rfft / irfft");
    let signal = Array::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let spectrum = rfft(&signal, None, LAST_AXIS, Norm::Backward).unwrap();
    println!("   rfft: {:?}", fmt(spectrum.as_slice()));
    let restored = irfft(&spectrum, Some(8), LAST_AXIS, Norm::Backward).unwrap();
    println!("   irfft: {:?}", restored.as_slice());
    println!();

    // 4. Hermitian pair
    println!("4. ihfft / hfft");
    let half = ihfft(&signal, None, LAST_AXIS, Norm::Backward).unwrap();
    let full = hfft(&half, Some(8), LAST_AXIS, Norm::Backward).unwrap();
    println!("   hfft(ihfft(x)): {:?}", full.as_slice());
    println!();

    // 5. Frequency bins
    println!("5. fftfreq / rfftfreq / fftshift");
    let freqs = fftfreq(8, 0.1f32).unwrap();
    println!("   fftfreq(8, 0.1): {:?}", freqs.as_slice());
    println!("   rfftfreq(8, 0.1): {:?}", rfftfreq(8, 0.1f32).unwrap().as_slice());
    println!(
        "   fftshift(fftfreq): {:?}",
        fftshift(&freqs, None).unwrap().as_slice()
    );
}
