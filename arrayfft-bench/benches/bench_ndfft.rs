use arrayfft::{fftn, rfftn, Array, Complex32, Norm};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_fft2d(c: &mut Criterion) {
    let x = Array::<Complex32>::zeros(&[128, 128]);
    c.bench_function("fftn_128x128", |b| {
        b.iter(|| fftn(&x, None, None, Norm::Backward).unwrap());
    });
}

fn bench_fft3d(c: &mut Criterion) {
    let x = Array::<Complex32>::zeros(&[32, 32, 32]);
    c.bench_function("fftn_32x32x32", |b| {
        b.iter(|| fftn(&x, None, None, Norm::Backward).unwrap());
    });
}

fn bench_rfft2d(c: &mut Criterion) {
    let data = (0..256 * 256).map(|i| (i % 31) as f32).collect();
    let x = Array::from_shape_vec(&[256, 256], data).unwrap();
    c.bench_function("rfftn_256x256", |b| {
        b.iter(|| rfftn(&x, None, None, Norm::Ortho).unwrap());
    });
}

criterion_group!(benches, bench_fft2d, bench_fft3d, bench_rfft2d);
criterion_main!(benches);
