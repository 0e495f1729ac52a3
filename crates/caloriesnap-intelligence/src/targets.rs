// ABOUTME: Daily calorie and macro targets from body metrics using Mifflin-St Jeor
// ABOUTME: BMR, activity-scaled TDEE, goal adjustment, and a 30/35/35 macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Target Calculator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use caloriesnap_core::constants::targets as consts;
use caloriesnap_core::errors::{AppError, AppResult};
use caloriesnap_core::models::{ActivityLevel, Gender, Goal, UserProfile};
use serde::{Deserialize, Serialize};

/// Onboarding answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInputs {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Gender for the BMR constant
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Weight goal
    pub goal: Goal,
}

/// Daily targets, each rounded to a whole kcal or gram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Calories (kcal)
    pub calorie_target: f64,
    /// Protein (g)
    pub protein_target: f64,
    /// Fat (g)
    pub fat_target: f64,
    /// Carbohydrates (g)
    pub carbs_target: f64,
}

/// Basal Metabolic Rate using Mifflin-St Jeor (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Errors
///
/// Returns an error if input values are out of valid ranges
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> AppResult<f64> {
    if !(weight_kg > 0.0 && weight_kg <= consts::MAX_WEIGHT_KG) {
        return Err(AppError::invalid_input(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if !(height_cm > 0.0 && height_cm <= consts::MAX_HEIGHT_CM) {
        return Err(AppError::invalid_input(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(consts::MIN_AGE_YEARS..=consts::MAX_AGE_YEARS).contains(&age) {
        return Err(AppError::invalid_input(
            "Age must be between 10 and 120 years (Mifflin-St Jeor formula validated for ages 10+)",
        ));
    }

    let gender_constant = match gender {
        Gender::Male => consts::MSJ_MALE_CONSTANT,
        Gender::Female => consts::MSJ_FEMALE_CONSTANT,
    };

    Ok(consts::MSJ_AGE_COEF.mul_add(
        f64::from(age),
        consts::MSJ_WEIGHT_COEF.mul_add(weight_kg, consts::MSJ_HEIGHT_COEF * height_cm),
    ) + gender_constant)
}

/// Total Daily Energy Expenditure: BMR x activity multiplier
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    let multiplier = match activity_level {
        ActivityLevel::Sedentary => consts::ACTIVITY_SEDENTARY,
        ActivityLevel::Light => consts::ACTIVITY_LIGHT,
        ActivityLevel::Moderate => consts::ACTIVITY_MODERATE,
        ActivityLevel::Active => consts::ACTIVITY_ACTIVE,
    };
    bmr * multiplier
}

/// Compute daily targets from onboarding answers.
///
/// The calorie target is rounded first; macro grams come from the rounded
/// calories split 30% protein, 35% fat, 35% carbs.
///
/// # Errors
///
/// Returns an error if any body metric is out of range
pub fn compute_targets(inputs: &ProfileInputs) -> AppResult<NutritionTargets> {
    let bmr = calculate_bmr(inputs.weight_kg, inputs.height_cm, inputs.age, inputs.gender)?;
    let tdee = calculate_tdee(bmr, inputs.activity_level);

    let adjusted = match inputs.goal {
        Goal::Lose => tdee - consts::GOAL_ADJUSTMENT_KCAL,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + consts::GOAL_ADJUSTMENT_KCAL,
    };

    let calories = adjusted.round();
    Ok(NutritionTargets {
        calorie_target: calories,
        protein_target: (calories * consts::PROTEIN_SHARE / consts::KCAL_PER_G_PROTEIN).round(),
        fat_target: (calories * consts::FAT_SHARE / consts::KCAL_PER_G_FAT).round(),
        carbs_target: (calories * consts::CARBS_SHARE / consts::KCAL_PER_G_CARBS).round(),
    })
}

/// Build the onboarded profile
///
/// # Errors
///
/// Returns an error if the name is blank or any body metric is out of range
pub fn build_profile(inputs: &ProfileInputs) -> AppResult<UserProfile> {
    if inputs.name.trim().is_empty() {
        return Err(AppError::invalid_input("Name is required"));
    }
    let targets = compute_targets(inputs)?;

    Ok(UserProfile {
        name: inputs.name.trim().to_owned(),
        age: inputs.age,
        weight: inputs.weight_kg,
        height: inputs.height_cm,
        gender: inputs.gender,
        activity_level: inputs.activity_level,
        goal: inputs.goal,
        calorie_target: targets.calorie_target,
        protein_target: targets.protein_target,
        fat_target: targets.fat_target,
        carbs_target: targets.carbs_target,
        onboarding_complete: true,
    })
}
