use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use onehot_export::{
    EncoderState, FeatureEncoder, IndexedCategoryFeature, InputFeature, OneHotEncoder,
    RawNumericFeature, ValueSpaceRegistry,
};

fn bench_expand_explicit(c: &mut Criterion) {
    // Dense range over raw numeric values
    for size in [10, 100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("expand_explicit", size), size, |b, &n| {
            let encoder = OneHotEncoder::new(EncoderState::explicit(vec![n]));
            let ids = vec!["onehot".to_string()];
            let input = [InputFeature::from(RawNumericFeature::new("code"))];

            b.iter(|| {
                let mut registry = ValueSpaceRegistry::new();
                let features = encoder
                    .encode_features(black_box(&ids), black_box(&input), &mut registry)
                    .expect("expansion failed");
                black_box(features);
            });
        });
    }
}

fn bench_expand_auto_indexed(c: &mut Criterion) {
    // Every other label observed
    for size in [10, 100, 1000, 10000].iter() {
        c.bench_with_input(BenchmarkId::new("expand_auto_indexed", size), size, |b, &n| {
            let labels: Vec<String> = (0..n).map(|i| format!("category_{}", i)).collect();
            let observed: Vec<usize> = (0..n).step_by(2).collect();
            let encoder = OneHotEncoder::new(EncoderState::auto(vec![n], observed));
            let ids = vec!["onehot".to_string()];
            let input = [InputFeature::from(IndexedCategoryFeature::new("label", labels))];

            b.iter(|| {
                let mut registry = ValueSpaceRegistry::new();
                let features = encoder
                    .encode_features(black_box(&ids), black_box(&input), &mut registry)
                    .expect("expansion failed");
                black_box(features);
            });
        });
    }
}

criterion_group!(benches, bench_expand_explicit, bench_expand_auto_indexed);
criterion_main!(benches);
