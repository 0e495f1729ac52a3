// ABOUTME: Meal estimation models for food intake analysis
// ABOUTME: FoodItem, NutritionAnalysis, MacroTotals, and MealType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// Parse meal type from string, `None` for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            _ => None,
        }
    }

    /// Lower-case label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Individual food item detected in a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Display name
    pub name: String,
    /// Portion label ("1 serving", "2 units", "1 plate")
    pub portion_size: String,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

/// Calorie and macronutrient sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

impl MacroTotals {
    /// Totals of a single food item
    #[must_use]
    pub const fn of_item(item: &FoodItem) -> Self {
        Self {
            calories: item.calories,
            protein: item.protein,
            fat: item.fat,
            carbs: item.carbs,
        }
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            fat: self.fat + rhs.fat,
            carbs: self.carbs + rhs.carbs,
        }
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// One meal estimation record
///
/// Each `total_*` field is the exact sum of the matching field over
/// `food_items`. Build records through [`NutritionAnalysis::new`], which
/// derives the totals instead of accepting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAnalysis {
    /// Unique opaque identifier
    pub id: String,
    /// When the estimate was produced (epoch milliseconds on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Detected items, in detection order
    pub food_items: Vec<FoodItem>,
    /// Sum of item calories
    pub total_calories: f64,
    /// Sum of item protein (g)
    pub total_protein: f64,
    /// Sum of item fat (g)
    pub total_fat: f64,
    /// Sum of item carbohydrates (g)
    pub total_carbs: f64,
    /// Short advice about the meal
    pub health_tips: String,
    /// Descriptive labels derived from the totals
    pub dietary_tags: Vec<String>,
    /// Meal slot, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

impl NutritionAnalysis {
    /// Create a record whose totals are summed from `food_items`
    #[must_use]
    pub fn new(
        id: String,
        timestamp: DateTime<Utc>,
        food_items: Vec<FoodItem>,
        health_tips: String,
        dietary_tags: Vec<String>,
        meal_type: Option<MealType>,
    ) -> Self {
        let totals: MacroTotals = food_items.iter().map(MacroTotals::of_item).sum();
        Self {
            id,
            timestamp,
            food_items,
            total_calories: totals.calories,
            total_protein: totals.protein,
            total_fat: totals.fat,
            total_carbs: totals.carbs,
            health_tips,
            dietary_tags,
            meal_type,
        }
    }

    /// Record totals as a `MacroTotals`
    #[must_use]
    pub const fn totals(&self) -> MacroTotals {
        MacroTotals {
            calories: self.total_calories,
            protein: self.total_protein,
            fat: self.total_fat,
            carbs: self.total_carbs,
        }
    }

    /// Whether the stored totals still equal the item sums
    #[must_use]
    pub fn totals_match_items(&self) -> bool {
        let summed: MacroTotals = self.food_items.iter().map(MacroTotals::of_item).sum();
        summed == self.totals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> FoodItem {
        FoodItem {
            name: name.to_owned(),
            portion_size: "1 serving".to_owned(),
            calories,
            protein,
            fat,
            carbs,
        }
    }

    #[test]
    fn test_new_sums_item_fields() {
        let analysis = NutritionAnalysis::new(
            "meal-1".into(),
            Utc::now(),
            vec![item("Egg", 140.0, 12.0, 10.0, 0.0), item("Toast", 80.0, 3.0, 1.0, 15.0)],
            String::new(),
            vec![],
            None,
        );
        assert!((analysis.total_calories - 220.0).abs() < f64::EPSILON);
        assert!((analysis.total_carbs - 15.0).abs() < f64::EPSILON);
        assert!(analysis.totals_match_items());
    }

    #[test]
    fn test_serializes_camel_case_with_millis() {
        let timestamp = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let analysis = NutritionAnalysis::new(
            "meal-1".into(),
            timestamp,
            vec![item("Egg", 70.0, 6.0, 5.0, 0.0)],
            "tip".into(),
            vec!["Low Carb".into()],
            Some(MealType::Breakfast),
        );
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["timestamp"], 1_700_000_000_123_i64);
        assert_eq!(json["foodItems"][0]["portionSize"], "1 serving");
        assert_eq!(json["mealType"], "breakfast");
        assert!(json.get("totalCalories").is_some());
    }

    #[test]
    fn test_meal_type_from_str_lossy() {
        assert_eq!(MealType::from_str_lossy(" Dinner "), Some(MealType::Dinner));
        assert_eq!(MealType::from_str_lossy("brunch"), None);
    }
}
