// ABOUTME: In-memory daily log store keyed by calendar date
// ABOUTME: Buckets are created lazily on first write; meals are kept most-recent-first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{DailyLog, NutritionAnalysis};

/// Mapping from calendar day to its log bucket
///
/// Each mutation is a single step on one bucket. Aggregates are never
/// stored here; callers derive them from [`DailyLog::totals`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLogStore {
    logs: BTreeMap<NaiveDate, DailyLog>,
}

impl DailyLogStore {
    /// Empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logs: BTreeMap::new(),
        }
    }

    /// Store seeded from persisted buckets
    #[must_use]
    pub const fn from_logs(logs: BTreeMap<NaiveDate, DailyLog>) -> Self {
        Self { logs }
    }

    /// The bucket for `date`, or a fresh empty one.
    ///
    /// Reading never inserts; an unseen day stays absent until written.
    #[must_use]
    pub fn get_or_create(&self, date: NaiveDate) -> DailyLog {
        self.logs
            .get(&date)
            .cloned()
            .unwrap_or_else(|| DailyLog::empty(date))
    }

    /// Borrow an existing bucket
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyLog> {
        self.logs.get(&date)
    }

    /// Prepend `analysis` to the day's meals
    pub fn add_meal(&mut self, date: NaiveDate, analysis: NutritionAnalysis) {
        debug!(log.date = %date, meal.id = %analysis.id, "Adding meal");
        self.bucket_mut(date).meals.insert(0, analysis);
    }

    /// Remove the meal with `id` from the day.
    ///
    /// Returns the removed meal; an unknown date or id is a no-op.
    pub fn remove_meal(&mut self, date: NaiveDate, id: &str) -> Option<NutritionAnalysis> {
        let bucket = self.logs.get_mut(&date)?;
        let position = bucket.meals.iter().position(|meal| meal.id == id)?;
        debug!(log.date = %date, meal.id = %id, "Removing meal");
        Some(bucket.meals.remove(position))
    }

    /// Increase the day's water intake by `amount_ml`
    pub fn add_water(&mut self, date: NaiveDate, amount_ml: f64) {
        let bucket = self.bucket_mut(date);
        bucket.water_intake += amount_ml;
        debug!(log.date = %date, water.ml = amount_ml, water.total_ml = bucket.water_intake, "Added water");
    }

    /// All buckets, oldest day first
    pub fn logs(&self) -> impl Iterator<Item = &DailyLog> {
        self.logs.values()
    }

    /// Copy of the buckets for persistence
    #[must_use]
    pub fn to_logs(&self) -> BTreeMap<NaiveDate, DailyLog> {
        self.logs.clone()
    }

    /// Number of materialized buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Whether no bucket has been written yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    fn bucket_mut(&mut self, date: NaiveDate) -> &mut DailyLog {
        self.logs
            .entry(date)
            .or_insert_with(|| DailyLog::empty(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn meal(id: &str) -> NutritionAnalysis {
        NutritionAnalysis::new(
            id.into(),
            Utc.timestamp_millis_opt(0).unwrap(),
            Vec::new(),
            String::new(),
            vec!["Balanced".into()],
            None,
        )
    }

    #[test]
    fn test_get_or_create_does_not_materialize() {
        let store = DailyLogStore::new();
        let first = store.get_or_create(day());
        let second = store.get_or_create(day());
        assert_eq!(first, second);
        assert!(first.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_meal_prepends() {
        let mut store = DailyLogStore::new();
        store.add_meal(day(), meal("a"));
        store.add_meal(day(), meal("b"));
        let ids: Vec<_> = store
            .get_or_create(day())
            .meals
            .iter()
            .map(|m| m.id.clone())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = DailyLogStore::new();
        assert!(store.remove_meal(day(), "ghost").is_none());
        store.add_meal(day(), meal("a"));
        assert!(store.remove_meal(day(), "ghost").is_none());
        assert_eq!(store.get_or_create(day()).meals.len(), 1);
    }
}
