// ABOUTME: Core data models for meals, daily logs, user profiles, and coach chat
// ABOUTME: Serde shapes match the persisted application state (camelCase, epoch-ms timestamps)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

/// Meal estimation records (`FoodItem`, `NutritionAnalysis`, `MealType`)
pub mod nutrition;

/// Per-day log bucket
pub mod daily_log;

/// User profile and onboarding enums
pub mod profile;

/// Coach chat messages
pub mod chat;

/// Whole persisted application state
pub mod state;

pub use chat::{ChatMessage, ChatRole};
pub use daily_log::DailyLog;
pub use nutrition::{FoodItem, MacroTotals, MealType, NutritionAnalysis};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
pub use state::AppState;
