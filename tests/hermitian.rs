use arrayfft::{fft, hfft, ihfft, irfft, rfft, Array, Complex64, Norm, LAST_AXIS};

fn signal(n: usize) -> Array<f64> {
    Array::from_vec((0..n).map(|i| (i as f64 * 1.3).cos() + 0.25 * i as f64).collect())
}

#[test]
fn hfft_inverts_ihfft() {
    for &n in &[1usize, 4, 5, 12, 19] {
        let x = signal(n);
        for norm in [Norm::Backward, Norm::Ortho, Norm::Forward] {
            let half = ihfft(&x, None, LAST_AXIS, norm).unwrap();
            assert_eq!(half.shape(), &[n / 2 + 1]);
            let back = hfft(&half, Some(n), LAST_AXIS, norm).unwrap();
            for (a, b) in back.as_slice().iter().zip(x.as_slice()) {
                assert!((a - b).abs() < 1e-10, "{norm}: {} vs {}", a, b);
            }
        }
    }
}

#[test]
fn ihfft_is_scaled_conjugate_of_rfft() {
    let x = signal(8);
    let half = ihfft(&x, None, LAST_AXIS, Norm::Backward).unwrap();
    let spectrum = rfft(&x, None, LAST_AXIS, Norm::Backward).unwrap();
    for (a, b) in half.as_slice().iter().zip(spectrum.as_slice()) {
        assert!((a.re - b.re / 8.0).abs() < 1e-12);
        assert!((a.im + b.im / 8.0).abs() < 1e-12);
    }
}

#[test]
fn hfft_matches_full_fft_of_hermitian_signal() {
    // half spectrum of a Hermitian-symmetric length-6 signal
    let half = vec![
        Complex64::new(1.0, 0.0),
        Complex64::new(2.0, 1.0),
        Complex64::new(-0.5, 0.75),
        Complex64::new(3.0, 0.0),
    ];
    let n = 6;
    let mut full = half.clone();
    for k in (1..n / 2).rev() {
        full.push(half[k].conj());
    }
    let expected = fft(&Array::from_vec(full), None, LAST_AXIS, Norm::Backward).unwrap();
    let out = hfft(&Array::from_vec(half), None, LAST_AXIS, Norm::Backward).unwrap();
    assert_eq!(out.shape(), &[n]);
    for (a, b) in out.as_slice().iter().zip(expected.as_slice()) {
        assert!((a - b.re).abs() < 1e-10, "{} vs {}", a, b.re);
        assert!(b.im.abs() < 1e-10);
    }
}

#[test]
fn hfft_swaps_normalization_roles() {
    let half = Array::from_vec(vec![
        Complex64::new(2.0, 0.0),
        Complex64::new(1.0, -1.0),
        Complex64::new(0.5, 0.0),
    ]);
    let unscaled = hfft(&half, None, LAST_AXIS, Norm::Backward).unwrap();
    let scaled = hfft(&half, None, LAST_AXIS, Norm::Forward).unwrap();
    let conj = half.map(|c| c.conj());
    let via_irfft = irfft(&conj, None, LAST_AXIS, Norm::Backward).unwrap();
    for ((u, s), v) in unscaled
        .as_slice()
        .iter()
        .zip(scaled.as_slice())
        .zip(via_irfft.as_slice())
    {
        assert!((u / 4.0 - s).abs() < 1e-12);
        assert!((s - v).abs() < 1e-12);
    }
}

#[test]
fn ihfft_inverts_hfft() {
    // DC and Nyquist bins are real, so the half spectrum survives the trip
    let half = Array::from_vec(vec![
        Complex64::new(1.5, 0.0),
        Complex64::new(-0.25, 2.0),
        Complex64::new(0.75, -1.0),
        Complex64::new(2.0, 0.0),
    ]);
    for norm in [Norm::Backward, Norm::Ortho, Norm::Forward] {
        let signal = hfft(&half, None, LAST_AXIS, norm).unwrap();
        assert_eq!(signal.shape(), &[6]);
        let back = ihfft(&signal, None, LAST_AXIS, norm).unwrap();
        for (a, b) in back.as_slice().iter().zip(half.as_slice()) {
            assert!((a.re - b.re).abs() < 1e-12 && (a.im - b.im).abs() < 1e-12);
        }
    }
}
