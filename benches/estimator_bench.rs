// ABOUTME: Criterion benchmarks for meal estimation, advice routing, and state serialization
// ABOUTME: Measures the hot paths behind logging a meal and saving the daily log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Criterion benchmarks for the estimator and the persisted state blob.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use std::sync::Arc;

use caloriesnap::clock::SystemClock;
use caloriesnap::ids::SequentialIdGenerator;
use caloriesnap::intelligence::{respond, EstimationRequest, NutritionEstimator};
use caloriesnap::models::{ActivityLevel, AppState, DailyLog, Gender, Goal, UserProfile};
use chrono::{NaiveDate, TimeDelta};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("single", "2 eggs"),
    ("mixed", "grilled chicken with rice, broccoli and a glass of milk"),
    ("unknown", "something my grandmother made"),
    (
        "long",
        "two slices of toast with peanut butter, half banana, three eggs, coffee, \
         a bagel with cheese and a side salad with avocado and tuna",
    ),
];

fn estimator() -> NutritionEstimator {
    NutritionEstimator::new(
        Arc::new(SequentialIdGenerator::new("bench")),
        Arc::new(SystemClock),
    )
}

fn profile() -> UserProfile {
    UserProfile {
        name: "Bench".into(),
        age: 30,
        weight: 70.0,
        height: 175.0,
        gender: Gender::Female,
        activity_level: ActivityLevel::Light,
        goal: Goal::Lose,
        calorie_target: 1800.0,
        protein_target: 135.0,
        fat_target: 70.0,
        carbs_target: 158.0,
        onboarding_complete: true,
    }
}

fn populated_state(days: usize) -> AppState {
    let estimator = estimator();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let mut state = AppState {
        profile: Some(profile()),
        ..AppState::default()
    };
    for offset in 0..days {
        let date = start + TimeDelta::days(i64::try_from(offset).unwrap());
        let mut log = DailyLog::empty(date);
        for (_, description) in DESCRIPTIONS {
            log.meals
                .push(estimator.estimate(&EstimationRequest::text(*description)));
        }
        log.water_intake = 1500.0;
        state.daily_logs.insert(date, log);
    }
    state
}

fn bench_estimate(c: &mut Criterion) {
    let estimator = estimator();
    let mut group = c.benchmark_group("estimate");

    for (name, description) in DESCRIPTIONS {
        let request = EstimationRequest::text(*description);
        group.bench_with_input(BenchmarkId::from_parameter(name), &request, |b, request| {
            b.iter(|| estimator.estimate(black_box(request)));
        });
    }

    group.finish();
}

fn bench_advice(c: &mut Criterion) {
    let state = populated_state(1);
    let today = state.daily_logs.values().next().unwrap().clone();
    let profile = profile();
    let mut group = c.benchmark_group("advice");

    for message in ["how am i doing?", "water", "protein", "tell me something"] {
        group.bench_with_input(BenchmarkId::from_parameter(message), &message, |b, message| {
            b.iter(|| respond(black_box(message), &profile, &today));
        });
    }

    group.finish();
}

fn bench_state_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_blob");

    for days in [7_usize, 90, 365] {
        let state = populated_state(days);
        let bytes = serde_json::to_vec(&state).unwrap();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("serialize", days), &state, |b, state| {
            b.iter(|| serde_json::to_vec(black_box(state)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("deserialize", days), &bytes, |b, bytes| {
            b.iter(|| serde_json::from_slice::<AppState>(black_box(bytes)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_estimate,
    bench_advice,
    bench_state_serialization
);
criterion_main!(benches);
