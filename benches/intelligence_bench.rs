// ABOUTME: Criterion benchmarks for goal analytics algorithms
// ABOUTME: Measures pace estimation, advisory rules and full report generation over growing histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for goal analytics.
//!
//! A report is recomputed on every screen refresh, so the full pipeline is
//! measured against histories up to the ETA horizon.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use chrono::Days;
use common::fixtures::{base_date, generate_snapshot, HistoryLength};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use goalpace::advisory::AdvisoryEngine;
use goalpace::config::IntelligenceConfig;
use goalpace::pace_estimator::PaceEstimator;
use goalpace::GoalAnalyticsEngine;

const LENGTHS: [HistoryLength; 3] = [
    HistoryLength::Month,
    HistoryLength::Year,
    HistoryLength::FiveYears,
];

/// Benchmark pace, trend, plateau and ETA over growing series
fn bench_weight_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_metrics");
    let estimator = PaceEstimator::with_config(IntelligenceConfig::default().goal_analytics);

    for length in LENGTHS {
        let snapshot = generate_snapshot(length);
        let series = snapshot.weight_series();
        let now = series.latest().map_or_else(base_date, |latest| latest.date);

        group.throughput(Throughput::Elements(series.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("metrics", length.days()),
            &series,
            |b, series| b.iter(|| estimator.metrics(black_box(series), Some(70.0), now)),
        );
    }

    group.finish();
}

/// Benchmark building the weight series from day records
fn bench_series_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_construction");

    for length in LENGTHS {
        let snapshot = generate_snapshot(length);
        group.throughput(Throughput::Elements(snapshot.days.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("weight_series", length.days()),
            &snapshot,
            |b, snapshot| b.iter(|| black_box(snapshot).weight_series()),
        );
    }

    group.finish();
}

/// Benchmark the advisory rules including trailing aggregation
fn bench_advisory(c: &mut Criterion) {
    let mut group = c.benchmark_group("advisory");
    let config = IntelligenceConfig::default();
    let estimator = PaceEstimator::with_config(config.goal_analytics.clone());
    let advisor = AdvisoryEngine::with_config(config.advisory);

    let snapshot = generate_snapshot(HistoryLength::Year);
    let series = snapshot.weight_series();
    let aggregates = snapshot.daily_aggregates();
    let now = series.latest().map_or_else(base_date, |latest| latest.date);
    let metrics = estimator.metrics(&series, Some(70.0), now);

    group.bench_function("advise_one_year", |b| {
        b.iter(|| advisor.advise_for(black_box(metrics.as_ref()), black_box(&aggregates)));
    });

    group.finish();
}

/// Benchmark the full goal report
fn bench_goal_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_report");
    let engine = GoalAnalyticsEngine::with_config(&IntelligenceConfig::default());

    for length in LENGTHS {
        let snapshot = generate_snapshot(length);
        let now = base_date()
            .checked_add_days(Days::new(length.days() as u64))
            .unwrap_or_else(base_date);

        group.throughput(Throughput::Elements(snapshot.days.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("report", length.days()),
            &snapshot,
            |b, snapshot| b.iter(|| engine.report(black_box(snapshot), now)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_weight_metrics,
    bench_series_construction,
    bench_advisory,
    bench_goal_report
);
criterion_main!(benches);
