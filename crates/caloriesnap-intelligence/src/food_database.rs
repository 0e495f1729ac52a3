// ABOUTME: Static food knowledge base mapping keywords to per-serving macro profiles
// ABOUTME: Ordered table scanned by the estimator; extend it by adding entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

/// Calories and macros for one reference serving
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroProfile {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
}

impl MacroProfile {
    const fn new(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            calories,
            protein,
            fat,
            carbs,
        }
    }

    /// Profile scaled by `multiplier`, each value rounded to a whole unit
    #[must_use]
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            calories: (self.calories * multiplier).round(),
            protein: (self.protein * multiplier).round(),
            fat: (self.fat * multiplier).round(),
            carbs: (self.carbs * multiplier).round(),
        }
    }
}

/// One knowledge base row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodEntry {
    /// Lower-case keyword (a word or short phrase)
    pub keyword: &'static str,
    /// Reference serving
    pub profile: MacroProfile,
}

const fn food(keyword: &'static str, calories: f64, protein: f64, fat: f64, carbs: f64) -> FoodEntry {
    FoodEntry {
        keyword,
        profile: MacroProfile::new(calories, protein, fat, carbs),
    }
}

/// Reference servings, in scan order.
///
/// Values are approximate averages for a typical household serving.
/// Order matters: detected items are reported in this order, not in the
/// order the words appear in a description.
const STANDARD_FOODS: &[FoodEntry] = &[
    // === Proteins ===
    food("egg", 70.0, 6.0, 5.0, 0.0),
    food("chicken", 165.0, 31.0, 4.0, 0.0),
    food("salmon", 208.0, 20.0, 13.0, 0.0),
    food("tuna", 130.0, 28.0, 1.0, 0.0),
    food("steak", 270.0, 26.0, 18.0, 0.0),
    food("tofu", 144.0, 15.0, 9.0, 3.0),
    food("beans", 227.0, 15.0, 1.0, 41.0),
    // === Grains ===
    food("toast", 80.0, 3.0, 1.0, 15.0),
    food("bread", 80.0, 3.0, 1.0, 15.0),
    food("rice", 205.0, 4.0, 0.0, 45.0),
    food("pasta", 220.0, 8.0, 1.0, 43.0),
    food("oatmeal", 150.0, 5.0, 3.0, 27.0),
    food("bagel", 245.0, 10.0, 1.0, 48.0),
    // === Dairy ===
    food("milk", 103.0, 8.0, 2.0, 12.0),
    food("yogurt", 100.0, 17.0, 1.0, 6.0),
    food("cheese", 113.0, 7.0, 9.0, 0.0),
    // === Fruit & vegetables ===
    food("banana", 105.0, 1.0, 0.0, 27.0),
    food("apple", 95.0, 0.0, 0.0, 25.0),
    food("avocado", 240.0, 3.0, 22.0, 13.0),
    food("broccoli", 55.0, 4.0, 1.0, 11.0),
    food("potato", 161.0, 4.0, 0.0, 37.0),
    food("salad", 150.0, 3.0, 10.0, 12.0),
    // === Snacks & mixed dishes ===
    food("almonds", 164.0, 6.0, 14.0, 6.0),
    food("peanut butter", 190.0, 7.0, 16.0, 7.0),
    food("pizza", 285.0, 12.0, 10.0, 36.0),
    food("burger", 354.0, 20.0, 17.0, 29.0),
    food("coffee", 2.0, 0.0, 0.0, 0.0),
];

/// Immutable keyword lookup table
#[derive(Debug, Clone, Copy)]
pub struct FoodKnowledgeBase {
    entries: &'static [FoodEntry],
}

impl Default for FoodKnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}

impl FoodKnowledgeBase {
    /// The built-in table
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            entries: STANDARD_FOODS,
        }
    }

    /// A custom table
    #[must_use]
    pub const fn from_entries(entries: &'static [FoodEntry]) -> Self {
        Self { entries }
    }

    /// Exact-key lookup
    #[must_use]
    pub fn lookup(&self, keyword: &str) -> Option<&'static MacroProfile> {
        self.entries
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| &entry.profile)
    }

    /// All keywords in scan order
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.keyword)
    }

    /// All rows in scan order
    #[must_use]
    pub const fn entries(&self) -> &'static [FoodEntry] {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_unique_and_lowercase() {
        let kb = FoodKnowledgeBase::standard();
        let mut seen = HashSet::new();
        for keyword in kb.keywords() {
            assert_eq!(keyword, keyword.to_lowercase());
            assert!(seen.insert(keyword), "duplicate keyword {keyword}");
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let kb = FoodKnowledgeBase::standard();
        assert_eq!(
            kb.lookup("egg"),
            Some(&MacroProfile::new(70.0, 6.0, 5.0, 0.0))
        );
        assert!(kb.lookup("eggs").is_none());
        assert!(kb.lookup("Egg").is_none());
    }

    #[test]
    fn test_scaled_rounds_each_value() {
        let profile = MacroProfile::new(105.0, 1.0, 0.0, 27.0);
        let half = profile.scaled(0.5);
        assert!((half.calories - 53.0).abs() < f64::EPSILON);
        assert!((half.protein - 1.0).abs() < f64::EPSILON);
        assert!((half.carbs - 14.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_table() {
        const TABLE: &[FoodEntry] = &[food("kimchi", 23.0, 2.0, 1.0, 4.0)];
        let kb = FoodKnowledgeBase::from_entries(TABLE);
        assert_eq!(kb.keywords().collect::<Vec<_>>(), vec!["kimchi"]);
    }
}
