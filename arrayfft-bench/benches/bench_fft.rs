use arrayfft::Complex32;
use arrayfft::fft::{FftImpl, FftPlanner, ScalarFftImpl};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rustfft::FftPlanner as RustFftPlanner;
use rustfft::num_complex::Complex as RustComplex;

fn bench_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft_parity");
    // power of two, smooth, prime
    for &size in &[1024usize, 4096, 1000, 3600, 1009] {
        let input: Vec<Complex32> = (0..size)
            .map(|i| Complex32::new(i as f32, -(i as f32)))
            .collect();
        let planner = FftPlanner::<f32>::new();
        let fft = ScalarFftImpl::with_planner(planner);
        let mut data = input.clone();
        group.bench_function(BenchmarkId::new("arrayfft", size), |b| {
            b.iter(|| {
                data.copy_from_slice(&input);
                fft.fft(&mut data).unwrap();
            })
        });

        let mut planner = RustFftPlanner::<f32>::new();
        let rust = planner.plan_fft_forward(size);
        let rust_input: Vec<RustComplex<f32>> =
            input.iter().map(|c| RustComplex::new(c.re, c.im)).collect();
        let mut rust_data = rust_input.clone();
        group.bench_function(BenchmarkId::new("rustfft", size), |b| {
            b.iter(|| {
                rust_data.copy_from_slice(&rust_input);
                rust.process(&mut rust_data);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_complex);
criterion_main!(benches);
