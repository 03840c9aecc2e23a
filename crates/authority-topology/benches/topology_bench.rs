use criterion::{black_box, criterion_group, criterion_main, Criterion};

use authority_core::{AuthoritySignal, Binding, EntityKind, SignalMap, SignalWeightVector};
use authority_topology::{
    compute_signal_entropy_score, differentiate_topology, entropy_contributions,
    variance_distribution,
};

fn make_batch(n: usize) -> Vec<Binding> {
    (0..n)
        .map(|i| {
            let dominant = AuthoritySignal::ALL[i % 3];
            let primary: SignalMap = AuthoritySignal::ALL
                .iter()
                .map(|s| (*s, if *s == dominant { 0.4 } else { 0.15 }))
                .collect();
            Binding::new(EntityKind::Claim, format!("c{i}"), SignalWeightVector::from_primary(primary))
        })
        .collect()
}

fn bench_differentiation(c: &mut Criterion) {
    let batch = make_batch(500);
    c.bench_function("differentiate_500_clustered", |b| {
        b.iter(|| differentiate_topology(black_box(&batch)))
    });
}

fn bench_diagnostics(c: &mut Criterion) {
    let batch = differentiate_topology(&make_batch(500));
    c.bench_function("entropy_score_500", |b| {
        b.iter(|| compute_signal_entropy_score(black_box(&batch)))
    });
    c.bench_function("variance_distribution_500", |b| {
        b.iter(|| variance_distribution(black_box(&batch)))
    });
    c.bench_function("entropy_contributions_500", |b| {
        b.iter(|| entropy_contributions(black_box(&batch)))
    });
}

criterion_group!(benches, bench_differentiation, bench_diagnostics);
criterion_main!(benches);
