//! Benchmarks for illusion generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use illusory::{build_faces, generate, PolygonSpec};

fn palette() -> Vec<String> {
    vec![
        "#e63946".to_string(),
        "#457b9d".to_string(),
        "#2a9d8f".to_string(),
    ]
}

fn bench_build_faces(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_faces");
    let palette = palette();

    for n in [3u32, 6, 10, 16] {
        let spec = PolygonSpec::new(n, false, 0.5, 0.5).unwrap();

        group.bench_with_input(BenchmarkId::new("edges", n), &spec, |b, spec| {
            b.iter(|| build_faces(black_box(spec), black_box(&palette)))
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let palette = palette();

    for n in [3u32, 16] {
        let spec = PolygonSpec::new(n, false, 0.5, 0.5).unwrap();

        group.bench_with_input(BenchmarkId::new("edges", n), &spec, |b, spec| {
            b.iter(|| generate(black_box(spec), black_box(&palette)))
        });
    }

    // A slider sweep regenerates at every step.
    group.bench_function("thickness_sweep", |b| {
        b.iter(|| {
            for i in 0..=10 {
                let spec = PolygonSpec::new(6, false, i as f64 / 10.0, 0.5).unwrap();
                let _ = generate(black_box(&spec), black_box(&palette));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_build_faces, bench_generate);
criterion_main!(benches);
