use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crop_water_engine::{CropKnowledgeBase, EngineConfig, FieldAdvisor, FieldConditions, Season};

fn advisor() -> FieldAdvisor {
    FieldAdvisor::new(Arc::new(CropKnowledgeBase::builtin()), EngineConfig::default())
}

fn bench_recommend(c: &mut Criterion) {
    let advisor = advisor();
    let conditions = FieldConditions::from_balance(Some("Black Soil (Regur/Kali) - Heavy"), "Kharif", 470.0);

    c.bench_function("recommend_single", |b| {
        b.iter(|| advisor.recommend(black_box(&conditions)))
    });

    let batch: Vec<FieldConditions> = (0..1_000)
        .map(|i| {
            let soil = ["Black", "Red", "Sandy", "Medium", "Alluvial"][i % 5];
            let season = ["Kharif", "Rabi", "Zaid"][i % 3];
            FieldConditions::from_balance(Some(soil), season, (i % 900) as f64)
        })
        .collect();

    c.bench_function("recommend_batch_1000", |b| {
        b.iter(|| advisor.recommend_batch(black_box(&batch)))
    });
}

fn bench_report_and_projection(c: &mut Criterion) {
    let advisor = advisor();

    c.bench_function("water_report", |b| {
        b.iter(|| advisor.water_report(black_box(120.0), Some("Medium Soil (Loam)"), Season::Rabi, &[]))
    });

    c.bench_function("simulate_wheat", |b| {
        b.iter(|| advisor.simulate(black_box("Wheat"), black_box(500.0), 6))
    });
}

criterion_group!(benches, bench_recommend, bench_report_and_projection);
criterion_main!(benches);
