// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap
// ABOUTME: Output formatting helpers for caloriesnap-cli
// ABOUTME: Consistent rendering of meal analyses, day logs, progress, and coach replies

use caloriesnap::intelligence::DaySummary;
use caloriesnap::models::{ChatMessage, DailyLog, NutritionAnalysis, UserProfile};
use caloriesnap::services::LoggedMeal;

const RULE_WIDTH: usize = 60;

/// Display a single meal analysis
pub fn display_analysis(analysis: &NutritionAnalysis) {
    let meal_type = analysis
        .meal_type
        .map_or_else(String::new, |meal_type| format!(" [{meal_type}]"));
    println!(
        "{} kcal{meal_type}  P {}g  F {}g  C {}g",
        analysis.total_calories, analysis.total_protein, analysis.total_fat, analysis.total_carbs
    );
    for item in &analysis.food_items {
        println!(
            "   - {} ({}): {} kcal, P {}g, F {}g, C {}g",
            item.name, item.portion_size, item.calories, item.protein, item.fat, item.carbs
        );
    }
    println!("   Tags: {}", analysis.dietary_tags.join(", "));
    println!("   Tip: {}", analysis.health_tips);
}

/// Display a freshly logged meal with its undo hint
pub fn display_logged(logged: &LoggedMeal, undo_hint: bool) {
    println!("\nLogged meal {} on {}", logged.analysis.id, logged.date);
    println!("{}", "=".repeat(RULE_WIDTH));
    display_analysis(&logged.analysis);
    if undo_hint {
        println!("\nType `undo` within a few seconds to take it back.");
    }
}

/// Display today's log, with progress when a profile exists
pub fn display_day(log: &DailyLog, profile: Option<&UserProfile>, summary: Option<&DaySummary>) {
    println!("\nLog for {}", log.date);
    println!("{}", "=".repeat(RULE_WIDTH));

    if let (Some(profile), Some(summary)) = (profile, summary) {
        println!(
            "Calories: {} / {} kcal ({} remaining)",
            summary.consumed.calories, profile.calorie_target, summary.remaining_calories
        );
        println!(
            "Protein:  {}g / {}g ({:.0}%)",
            summary.consumed.protein, profile.protein_target, summary.protein_progress
        );
        println!(
            "Fat:      {}g / {}g ({:.0}%)",
            summary.consumed.fat, profile.fat_target, summary.fat_progress
        );
        println!(
            "Carbs:    {}g / {}g ({:.0}%)",
            summary.consumed.carbs, profile.carbs_target, summary.carbs_progress
        );
    } else {
        println!("Calories: {} kcal", log.consumed_calories());
    }
    println!("Water:    {} ml", log.water_intake);

    if log.meals.is_empty() {
        println!("\nNo meals logged yet.");
        return;
    }
    println!("\nMeals (most recent first):");
    for meal in &log.meals {
        println!("\n{}  {}", meal.id, meal.timestamp.format("%H:%M UTC"));
        display_analysis(meal);
    }
}

/// Display the profile created at setup
pub fn display_profile(profile: &UserProfile) {
    println!("\nProfile saved for {}", profile.name);
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Goal: {}", profile.goal.aim());
    println!("Daily calories: {} kcal", profile.calorie_target);
    println!(
        "Macros: P {}g  F {}g  C {}g",
        profile.protein_target, profile.fat_target, profile.carbs_target
    );
}

/// Display a coach reply
pub fn display_reply(reply: &ChatMessage) {
    println!("\nCoach: {}", reply.text);
}
