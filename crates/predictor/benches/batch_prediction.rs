// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for single and batch prediction with the shipped model.

use body_metrics::{Gender, SubjectRecord};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use feature_table::SubjectTable;
use predictor::{CaloriePredictor, PredictorConfig, Ready};
use std::path::PathBuf;

fn predictor() -> CaloriePredictor<Ready> {
    let config = PredictorConfig {
        model_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../models/calorie_predictor.json"),
        ..Default::default()
    };
    CaloriePredictor::new(config).load_model().unwrap()
}

fn synthetic_table(rows: usize) -> SubjectTable {
    let subjects = (0..rows)
        .map(|i| SubjectRecord {
            gender: if i % 2 == 0 { Gender::Male } else { Gender::Female },
            age: 20 + (i % 60) as u32,
            height_cm: 150.0 + (i % 50) as f64,
            weight_kg: 50.0 + (i % 70) as f64,
            duration_min: 5 + (i % 40) as u32,
            heart_rate_bpm: 80 + (i % 50) as u32,
            body_temp_c: 37.0 + (i % 30) as f64 * 0.1,
        })
        .collect();
    SubjectTable::from_subjects(subjects)
}

fn bench_single_prediction(c: &mut Criterion) {
    let p = predictor();
    let subject = SubjectRecord::default();
    c.bench_function("predict_one", |b| {
        b.iter(|| p.predict_one(black_box(&subject)).unwrap())
    });
}

fn bench_batch_prediction(c: &mut Criterion) {
    let p = predictor();
    let mut group = c.benchmark_group("predict_table");
    for rows in [10, 1_000, 10_000] {
        let table = synthetic_table(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| p.predict_table(black_box(table)).unwrap())
        });
    }
    group.finish();
}

fn bench_csv_round_trip(c: &mut Criterion) {
    let p = predictor();
    let table = synthetic_table(1_000);
    let csv = p.predict_table(&table).unwrap().to_csv_bytes(b',').unwrap();
    c.bench_function("csv_round_trip_1000", |b| {
        b.iter(|| {
            let batch = p.predict_csv(black_box(csv.as_slice())).unwrap();
            batch.to_csv_bytes(b',').unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_single_prediction,
    bench_batch_prediction,
    bench_csv_round_trip
);
criterion_main!(benches);
