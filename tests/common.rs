// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, deterministic clock and ids, sample profiles, and tracker builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `caloriesnap`

use std::sync::{Arc, Once};

use caloriesnap::clock::FixedClock;
use caloriesnap::config::TrackerConfig;
use caloriesnap::ids::SequentialIdGenerator;
use caloriesnap::intelligence::ProfileInputs;
use caloriesnap::models::{
    ActivityLevel, DailyLog, FoodItem, Gender, Goal, NutritionAnalysis, UserProfile,
};
use caloriesnap::persistence::{InMemoryKeyValueStore, StateRepository};
use caloriesnap::services::{NutritionTracker, TrackerBuilder};
use chrono::{DateTime, NaiveDate, Utc};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Instant every test day starts at
pub fn test_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-14T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Calendar day of [`test_now`]
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Onboarding answers: male, 30 years, 70 kg, 175 cm, moderate, maintain
pub fn sample_inputs() -> ProfileInputs {
    ProfileInputs {
        name: "Sam".into(),
        age: 30,
        weight_kg: 70.0,
        height_cm: 175.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
    }
}

/// Profile matching [`sample_inputs`] (2556 kcal, 192 g protein)
pub fn sample_profile() -> UserProfile {
    profile_with_targets(2556.0, 192.0)
}

/// Profile with custom calorie and protein targets
pub fn profile_with_targets(calorie_target: f64, protein_target: f64) -> UserProfile {
    UserProfile {
        name: "Sam".into(),
        age: 30,
        weight: 70.0,
        height: 175.0,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Maintain,
        calorie_target,
        protein_target,
        fat_target: 99.0,
        carbs_target: 224.0,
        onboarding_complete: true,
    }
}

/// Record with one item of the given macros
pub fn meal(id: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> NutritionAnalysis {
    NutritionAnalysis::new(
        id.into(),
        test_now(),
        vec![FoodItem {
            name: "Test Food".into(),
            portion_size: "1 serving".into(),
            calories,
            protein,
            fat,
            carbs,
        }],
        String::new(),
        vec!["Balanced".into()],
        None,
    )
}

/// Day log holding `meals` and `water_ml`
pub fn day_log(meals: Vec<NutritionAnalysis>, water_ml: f64) -> DailyLog {
    let mut log = DailyLog::empty(test_day());
    log.meals = meals;
    log.water_intake = water_ml;
    log
}

/// Everything a tracker test needs to poke at
pub struct TestTracker {
    pub tracker: NutritionTracker,
    pub clock: Arc<FixedClock>,
    pub blobs: InMemoryKeyValueStore,
}

/// Builder wired to a fixed clock, sequential ids, and `blobs`
pub fn tracker_builder(blobs: &InMemoryKeyValueStore, clock: Arc<FixedClock>) -> TrackerBuilder {
    NutritionTracker::builder(
        TrackerConfig::default(),
        StateRepository::new(Arc::new(blobs.clone())),
    )
    .ids(Arc::new(SequentialIdGenerator::new("id")))
    .clock(clock)
}

/// Tracker over fresh in-memory storage, without a profile
pub fn create_test_tracker() -> TestTracker {
    init_test_logging();
    let blobs = InMemoryKeyValueStore::new();
    let clock = Arc::new(FixedClock::new(test_now()));
    let tracker = tracker_builder(&blobs, clock.clone()).build().unwrap();
    TestTracker {
        tracker,
        clock,
        blobs,
    }
}

/// Tracker that has completed onboarding with [`sample_inputs`]
pub async fn create_onboarded_tracker() -> TestTracker {
    let test = create_test_tracker();
    test.tracker
        .complete_onboarding(&sample_inputs())
        .await
        .unwrap();
    test
}
