// ABOUTME: Constants for the local heuristic meal estimator
// ABOUTME: Placeholder macros, dietary tag thresholds, tag labels, and health tip texts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

/// Name of the fixed result returned for image-only requests
pub const IMAGE_PLACEHOLDER_NAME: &str = "Detected Balanced Meal";
/// Portion label of the image placeholder
pub const IMAGE_PLACEHOLDER_PORTION: &str = "1 plate";
/// Image placeholder calories
pub const IMAGE_PLACEHOLDER_CALORIES: f64 = 450.0;
/// Image placeholder protein (g)
pub const IMAGE_PLACEHOLDER_PROTEIN_G: f64 = 25.0;
/// Image placeholder fat (g)
pub const IMAGE_PLACEHOLDER_FAT_G: f64 = 15.0;
/// Image placeholder carbohydrates (g)
pub const IMAGE_PLACEHOLDER_CARBS_G: f64 = 50.0;

/// Name used when no keyword matched and the description is blank
pub const UNKNOWN_MEAL_NAME: &str = "Unknown Meal";
/// Fallback item calories
pub const FALLBACK_CALORIES: f64 = 300.0;
/// Fallback item protein (g)
pub const FALLBACK_PROTEIN_G: f64 = 15.0;
/// Fallback item fat (g)
pub const FALLBACK_FAT_G: f64 = 10.0;
/// Fallback item carbohydrates (g)
pub const FALLBACK_CARBS_G: f64 = 35.0;

/// Portion label for a single reference serving
pub const SINGLE_SERVING_LABEL: &str = "1 serving";

/// Protein strictly above this earns "High Protein" (g)
pub const HIGH_PROTEIN_THRESHOLD_G: f64 = 20.0;
/// Carbs strictly below this earn "Low Carb" (g)
pub const LOW_CARB_THRESHOLD_G: f64 = 10.0;
/// Calories strictly below this earn "Light Meal"
pub const LIGHT_MEAL_THRESHOLD_KCAL: f64 = 300.0;

/// Dietary tag labels
pub mod tags {
    /// Protein above threshold
    pub const HIGH_PROTEIN: &str = "High Protein";
    /// Carbs below threshold
    pub const LOW_CARB: &str = "Low Carb";
    /// Calories below threshold
    pub const LIGHT_MEAL: &str = "Light Meal";
    /// Applied only when no other tag applies
    pub const BALANCED: &str = "Balanced";
}

/// Tip for meals above the protein threshold
pub const HIGH_PROTEIN_TIP: &str =
    "Great protein content! This meal supports muscle maintenance and keeps you full longer.";
/// Tip for every other meal
pub const ADD_VOLUME_TIP: &str =
    "Consider adding vegetables or a lean protein source to boost volume and micronutrients.";
