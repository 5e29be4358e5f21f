//! Demonstrates enabling verbose logging for arrayfft.
use arrayfft::{fftn, rfft, Array, Complex32, Norm};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let x = Array::from_shape_vec(&[3, 37], vec![Complex32::new(1.0, 0.0); 111]).unwrap();
    fftn(&x, None, None, Norm::Backward).unwrap();

    let signal = Array::from_vec(vec![1.0f32, 2.0, 3.0, 4.0]);
    rfft(&signal, Some(6), -1, Norm::Forward).unwrap();
}
