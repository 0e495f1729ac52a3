// ABOUTME: Per-calendar-day log bucket holding logged meals and water intake
// ABOUTME: Aggregates are always recomputed from the current meals, never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::nutrition::{MacroTotals, NutritionAnalysis};

/// One calendar day of logged food and water
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    /// Calendar day (`YYYY-MM-DD` on the wire)
    pub date: NaiveDate,
    /// Logged meals, most recent first
    #[serde(default)]
    pub meals: Vec<NutritionAnalysis>,
    /// Water consumed (ml)
    #[serde(default)]
    pub water_intake: f64,
}

impl DailyLog {
    /// Empty bucket for `date`
    #[must_use]
    pub const fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            meals: Vec::new(),
            water_intake: 0.0,
        }
    }

    /// Sum of the current meals' totals
    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.meals.iter().map(NutritionAnalysis::totals).sum()
    }

    /// Calories consumed so far
    #[must_use]
    pub fn consumed_calories(&self) -> f64 {
        self.totals().calories
    }

    /// Look up a meal by id
    #[must_use]
    pub fn meal(&self, id: &str) -> Option<&NutritionAnalysis> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// Whether nothing has been logged for the day
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.water_intake <= 0.0
    }
}
