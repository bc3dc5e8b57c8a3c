use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roadquest_core::matching::{normalize, resolve, similarity};
use roadquest_domain::VEHICLE_IMAGE_CATALOG;

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_model_trim", |b| {
        b.iter(|| normalize(black_box("  Toyota RAV4 Hybrid - XLE Premium!  ")));
    });
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("similarity_partial_overlap", |b| {
        b.iter(|| similarity(black_box("RAV4 Hybrid XLE Premium"), black_box("RAV4 Hybrid XLE")));
    });
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_full_catalog");

    group.bench_function("exact_hit", |b| {
        b.iter(|| resolve(black_box("Toyota Camry"), black_box("SE"), VEHICLE_IMAGE_CATALOG));
    });

    group.bench_function("similarity_hit", |b| {
        b.iter(|| {
            resolve(black_box("Toyota RAV4 Hybrid"), black_box("XLE Premium Plus"), VEHICLE_IMAGE_CATALOG)
        });
    });

    group.bench_function("default_fallback", |b| {
        b.iter(|| resolve(black_box("Zorg"), black_box("Blorp"), VEHICLE_IMAGE_CATALOG));
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_similarity, bench_resolve);
criterion_main!(benches);
