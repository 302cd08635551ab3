use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rusty_image_compression::random_matrix::{random_gray_image, random_rgb_image};
use rusty_image_compression::LowRankApproximator;

fn approximate_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let gray = random_gray_image((256, 256), &mut rng);
    let rgb = random_rgb_image((256, 256), &mut rng);
    let approximator = LowRankApproximator::default();

    c.bench_function("approximate gray 256x256 at 20%", |b| {
        b.iter(|| approximator.approximate(black_box(&gray), 20.0).unwrap())
    });
    c.bench_function("approximate rgb 256x256 at 20%", |b| {
        b.iter(|| approximator.approximate(black_box(&rgb), 20.0).unwrap())
    });
}

criterion_group!(benches, approximate_benchmark);
criterion_main!(benches);
