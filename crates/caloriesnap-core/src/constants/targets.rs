// ABOUTME: Constants for daily calorie and macro target computation
// ABOUTME: Mifflin-St Jeor coefficients, activity multipliers, goal offsets, and macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

/// BMR weight coefficient (kcal per kg)
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
/// BMR height coefficient (kcal per cm)
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
/// BMR age coefficient (kcal per year)
pub const MSJ_AGE_COEF: f64 = -5.0;
/// BMR constant for men
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
/// BMR constant for women
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// TDEE multiplier: little or no exercise
pub const ACTIVITY_SEDENTARY: f64 = 1.2;
/// TDEE multiplier: light exercise 1-3 days/week
pub const ACTIVITY_LIGHT: f64 = 1.375;
/// TDEE multiplier: moderate exercise 3-5 days/week
pub const ACTIVITY_MODERATE: f64 = 1.55;
/// TDEE multiplier: hard exercise 6-7 days/week
pub const ACTIVITY_ACTIVE: f64 = 1.725;

/// Daily calorie offset applied for weight loss or gain
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;

/// Share of calories from protein
pub const PROTEIN_SHARE: f64 = 0.30;
/// Share of calories from fat
pub const FAT_SHARE: f64 = 0.35;
/// Share of calories from carbohydrates
pub const CARBS_SHARE: f64 = 0.35;

/// Energy density of protein (kcal/g)
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Energy density of fat (kcal/g)
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// Energy density of carbohydrates (kcal/g)
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Accepted weight range (kg, exclusive lower bound)
pub const MAX_WEIGHT_KG: f64 = 300.0;
/// Accepted height range (cm, exclusive lower bound)
pub const MAX_HEIGHT_CM: f64 = 300.0;
/// Youngest age the formula is validated for
pub const MIN_AGE_YEARS: u32 = 10;
/// Oldest accepted age
pub const MAX_AGE_YEARS: u32 = 120;
