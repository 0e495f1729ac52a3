// ABOUTME: Dashboard read model comparing a day's consumption against profile targets
// ABOUTME: Always recomputed from the bucket's current meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use caloriesnap_core::models::{DailyLog, MacroTotals, UserProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const FULL_PROGRESS: f64 = 100.0;

/// Progress for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// Day being summarized
    pub date: NaiveDate,
    /// Sum of the current meals
    pub consumed: MacroTotals,
    /// Daily targets from the profile
    pub targets: MacroTotals,
    /// `max(0, calorie target - consumed calories)`
    pub remaining_calories: f64,
    /// Protein progress, percent of target, capped at 100
    pub protein_progress: f64,
    /// Fat progress, percent of target, capped at 100
    pub fat_progress: f64,
    /// Carbohydrate progress, percent of target, capped at 100
    pub carbs_progress: f64,
    /// Water consumed (ml)
    pub water_intake: f64,
    /// Number of meals logged
    pub meal_count: usize,
}

impl DaySummary {
    /// Summarize `log` against `profile`'s targets
    #[must_use]
    pub fn compute(profile: &UserProfile, log: &DailyLog) -> Self {
        let consumed = log.totals();
        let targets = MacroTotals {
            calories: profile.calorie_target,
            protein: profile.protein_target,
            fat: profile.fat_target,
            carbs: profile.carbs_target,
        };

        Self {
            date: log.date,
            consumed,
            targets,
            remaining_calories: (targets.calories - consumed.calories).max(0.0),
            protein_progress: progress(consumed.protein, targets.protein),
            fat_progress: progress(consumed.fat, targets.fat),
            carbs_progress: progress(consumed.carbs, targets.carbs),
            water_intake: log.water_intake,
            meal_count: log.meals.len(),
        }
    }
}

fn progress(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * FULL_PROGRESS).min(FULL_PROGRESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_caps_and_zero_target() {
        assert!((progress(50.0, 100.0) - 50.0).abs() < f64::EPSILON);
        assert!((progress(250.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!(progress(10.0, 0.0).abs() < f64::EPSILON);
    }
}
