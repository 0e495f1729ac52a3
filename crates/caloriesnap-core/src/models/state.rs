// ABOUTME: Whole-application persisted state blob
// ABOUTME: Profile, per-day logs keyed by YYYY-MM-DD, and chat history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ChatMessage, DailyLog, UserProfile};

/// Everything that is saved between runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Onboarded profile, if any
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Day buckets keyed by calendar date
    #[serde(default)]
    pub daily_logs: BTreeMap<NaiveDate, DailyLog>,
    /// Coach conversation, oldest first
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatMessage, FoodItem, NutritionAnalysis};
    use chrono::DateTime;

    #[test]
    fn test_state_round_trip_keeps_date_keys() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let timestamp = DateTime::from_timestamp_millis(1_741_950_000_000).unwrap();
        let mut log = DailyLog::empty(date);
        log.water_intake = 500.0;
        log.meals.push(NutritionAnalysis::new(
            "m1".into(),
            timestamp,
            vec![FoodItem {
                name: "Rice".into(),
                portion_size: "1 serving".into(),
                calories: 205.0,
                protein: 4.0,
                fat: 0.0,
                carbs: 45.0,
            }],
            "tip".into(),
            vec!["Light Meal".into()],
            None,
        ));
        let mut state = AppState::default();
        state.daily_logs.insert(date, log);
        state
            .chat_history
            .push(ChatMessage::user("c1".into(), "status", timestamp));

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"dailyLogs\":{\"2025-03-14\""));
        assert!(json.contains("\"chatHistory\""));
        assert!(json.contains("\"profile\":null"));

        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, AppState::default());
    }
}
