use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gabor_orientation_game::config::{DifficultyConfig, StimulusConfig};
use gabor_orientation_game::difficulty::DifficultyController;
use gabor_orientation_game::gabor;
use gabor_orientation_game::types::{Orientation, PatchGeometry, StimulusParameters};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gabor_generate");
    for size in [128usize, 256, 512] {
        let geometry = PatchGeometry {
            size_pixels: size,
            ..PatchGeometry::default()
        };
        let params = StimulusParameters {
            spatial_frequency_cpd: 12.0,
            orientation: Orientation::Diagonal,
            contrast: 0.5,
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), &geometry, |b, geom| {
            b.iter(|| gabor::generate(black_box(&params), black_box(geom)))
        });
    }
    group.finish();
}

fn bench_to_gray8(c: &mut Criterion) {
    let params = StimulusParameters {
        spatial_frequency_cpd: 6.0,
        orientation: Orientation::Horizontal,
        contrast: 0.425,
    };
    let patch = gabor::generate(&params, &PatchGeometry::default());
    c.bench_function("gabor_to_gray8_512", |b| b.iter(|| black_box(&patch).to_gray8()));
}

fn bench_contrast_for_score(c: &mut Criterion) {
    let controller =
        DifficultyController::new(DifficultyConfig::default(), &StimulusConfig::default());
    c.bench_function("contrast_for_score", |b| {
        b.iter(|| controller.contrast_for_score(black_box(37)))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_to_gray8,
    bench_contrast_for_score
);
criterion_main!(benches);
