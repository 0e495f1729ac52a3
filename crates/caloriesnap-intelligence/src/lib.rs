// ABOUTME: Meal estimation and nutrition coaching engine for CalorieSnap
// ABOUTME: Keyword-based nutrition estimation, rule-based advice, targets, and day summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

#![deny(unsafe_code)]

//! # CalorieSnap Intelligence
//!
//! The decision logic of CalorieSnap, free of storage and I/O:
//!
//! - **`food_database`**: fixed keyword to macro-profile table
//! - **`quantity`**: serving multiplier inference from the word before a keyword
//! - **`estimator`**: free text (and optional image flag) to a `NutritionAnalysis`
//! - **`advice`**: deterministic keyword-routed coach replies
//! - **`targets`**: Mifflin-St Jeor based daily targets for onboarding
//! - **`summary`**: dashboard read model recomputed from a day's meals

/// Static food keyword knowledge base
pub mod food_database;

/// Serving multiplier extraction
pub mod quantity;

/// Heuristic nutrition estimator
pub mod estimator;

/// Rule-based advice responder
pub mod advice;

/// Daily calorie and macro targets
pub mod targets;

/// Per-day progress summary
pub mod summary;

pub use advice::{respond, AdviceTopic};
pub use estimator::{EstimationRequest, ImageAttachment, NutritionEstimator};
pub use food_database::{FoodEntry, FoodKnowledgeBase, MacroProfile};
pub use quantity::extract_multiplier;
pub use summary::DaySummary;
pub use targets::{build_profile, compute_targets, NutritionTargets, ProfileInputs};
