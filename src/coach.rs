// ABOUTME: Substitutable meal analysis and coaching strategies used by the tracker
// ABOUTME: Local heuristic implementations plus the context block for remote coaches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! # Strategies
//!
//! The tracker talks to two seams:
//!
//! - [`MealAnalyzer`] turns an [`EstimationRequest`] into a record
//! - [`NutritionCoach`] answers a chat message
//!
//! Both are async so a network-backed model can stand in for the local
//! heuristics without changing the tracker.

use std::fmt::Write as _;

use caloriesnap_intelligence::{advice, EstimationRequest, NutritionEstimator};

use crate::errors::AppResult;
use crate::models::{ChatMessage, DailyLog, NutritionAnalysis, UserProfile};

/// Instruction given to model-backed coaches alongside [`render_coach_context`]
pub const COACH_SYSTEM_INSTRUCTION: &str = "You are a friendly, motivating, and knowledgeable nutrition coach. \
     Keep answers concise, encouraging, and practical. Use the user's data to give specific advice.";

/// Produces a nutrition record for a meal
#[async_trait::async_trait]
pub trait MealAnalyzer: Send + Sync {
    /// Analyze one meal
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce an estimate
    async fn analyze(&self, request: &EstimationRequest) -> AppResult<NutritionAnalysis>;
}

/// Answers coaching questions
#[async_trait::async_trait]
pub trait NutritionCoach: Send + Sync {
    /// Reply to `message`; `history` holds the earlier turns, oldest first
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot produce a reply
    async fn reply(
        &self,
        message: &str,
        history: &[ChatMessage],
        profile: &UserProfile,
        today: &DailyLog,
    ) -> AppResult<String>;
}

/// Keyword heuristic analyzer
#[derive(Clone)]
pub struct LocalMealAnalyzer {
    estimator: NutritionEstimator,
}

impl LocalMealAnalyzer {
    /// Wrap an estimator
    #[must_use]
    pub const fn new(estimator: NutritionEstimator) -> Self {
        Self { estimator }
    }
}

#[async_trait::async_trait]
impl MealAnalyzer for LocalMealAnalyzer {
    async fn analyze(&self, request: &EstimationRequest) -> AppResult<NutritionAnalysis> {
        Ok(self.estimator.estimate(request))
    }
}

/// Keyword-routed coach; ignores history
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedCoach;

#[async_trait::async_trait]
impl NutritionCoach for RuleBasedCoach {
    async fn reply(
        &self,
        message: &str,
        _history: &[ChatMessage],
        profile: &UserProfile,
        today: &DailyLog,
    ) -> AppResult<String> {
        Ok(advice::respond(message, profile, today))
    }
}

/// Context block sent to model-backed coaches
#[must_use]
pub fn render_coach_context(message: &str, profile: &UserProfile, today: &DailyLog) -> String {
    let mut context = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(context, "User Profile:");
    let _ = writeln!(context, "Name: {}", profile.name);
    let _ = writeln!(context, "Goal: {}", profile.goal);
    let _ = writeln!(
        context,
        "Daily Targets: {}kcal ({}g P, {}g F, {}g C)",
        profile.calorie_target, profile.protein_target, profile.fat_target, profile.carbs_target
    );
    let _ = writeln!(context);
    let _ = writeln!(context, "Today's Consumption So Far:");
    let _ = writeln!(context, "Calories: {}", today.consumed_calories());
    let _ = writeln!(context, "Water: {}ml", today.water_intake);
    let _ = writeln!(context);
    let _ = write!(context, "User Question: \"{message}\"");
    context
}
