// ABOUTME: Domain service layer orchestrating stores, strategies, and persistence
// ABOUTME: Entry points shared by the CLI and any future front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Domain service layer
//!
//! Services own the mutable application state and apply the save-on-change
//! rule, so front ends stay thin.

/// Nutrition tracker: meal logging, undo, water, coach chat
pub mod tracker;

pub use tracker::{LoggedMeal, NutritionTracker, TrackerBuilder};
