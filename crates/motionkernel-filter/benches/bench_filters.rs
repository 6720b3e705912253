use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

use motionkernel_core::{PixMut, PixView, Region};
use motionkernel_filter::{ThresholdOptions, adaptive_threshold, blur_median};

fn random_frame(width: u32, height: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * height)
        .map(|_| 0xFF00_0000 | rng.random_range(0..0x0100_0000))
        .collect()
}

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Motion Filters");

    for (width, height) in [(320u32, 240u32), (640, 480), (1280, 720)] {
        let region = match Region::interior(width, height, 1) {
            Ok(region) => region,
            Err(_) => continue,
        };
        group.throughput(Throughput::Elements(region.area()));

        let parameter_string = format!("{}x{}", width, height);
        let frame = random_frame(width, height, 42);
        let src = PixView::new(&frame, width, height, width).unwrap();
        let mut dst = PixMut::new(width, height).unwrap();
        let options = ThresholdOptions::default();

        group.bench_with_input(
            BenchmarkId::new("blur_median", &parameter_string),
            &src,
            |b, src| b.iter(|| black_box(blur_median(src, &mut dst.view_mut(), region))),
        );

        group.bench_with_input(
            BenchmarkId::new("adaptive_threshold", &parameter_string),
            &src,
            |b, src| {
                b.iter(|| {
                    black_box(adaptive_threshold(
                        src,
                        &mut dst.view_mut(),
                        region,
                        &options,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
