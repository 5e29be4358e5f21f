//! Multi-dimensional transforms with `s` and `axes`.

use arrayfft::{fftn, fftshift, ifftn, irfftn, rfftn, Array, Complex64, Norm};

fn main() {
    let rows = 4;
    let cols = 6;
    let image: Vec<f64> = (0..rows * cols)
        .map(|i| ((i / cols) as f64).sin() + ((i % cols) as f64 * 0.5).cos())
        .collect();
    let image = Array::from_shape_vec(&[rows, cols], image).unwrap();

    // Real 2-D transform: the last axis keeps cols/2 + 1 bins.
    let spectrum = rfftn(&image, None, None, Norm::Ortho).unwrap();
    println!("rfftn shape: {:?}", spectrum.shape());
    let s = [rows as isize, cols as isize];
    let restored = irfftn(&spectrum, Some(&s), Some(&[0, 1]), Norm::Ortho).unwrap();
    let err = restored
        .as_slice()
        .iter()
        .zip(image.as_slice())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0f64, f64::max);
    println!("irfftn max error: {err:.2e}");

    // Complex transform over the columns only, zero-padded to 8.
    let complex = image.to_complex();
    let padded = fftn(&complex, Some(&[8]), Some(&[-1]), Norm::Backward).unwrap();
    println!("fftn over last axis padded to 8: {:?}", padded.shape());
    let centered = fftshift(&padded, Some(&[-1])).unwrap();
    let dc_row: Vec<String> = (0..8)
        .map(|k| {
            let c: &Complex64 = centered.get(&[0, k]).unwrap();
            format!("{:.2}", c.abs())
        })
        .collect();
    println!("centered magnitudes of row 0: {dc_row:?}");

    let back = ifftn(&padded, Some(&[cols as isize]), Some(&[-1]), Norm::Backward).unwrap();
    println!("truncated inverse shape: {:?}", back.shape());
}
