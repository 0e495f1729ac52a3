// ABOUTME: Meal and water commands for caloriesnap-cli
// ABOUTME: Handles log, water, remove, and today operations against the daily log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use anyhow::{bail, Result};
use chrono::NaiveDate;
use caloriesnap::intelligence::EstimationRequest;
use caloriesnap::models::MealType;
use caloriesnap::services::NutritionTracker;

use crate::helpers::display::{display_day, display_logged};

/// Build an estimation request from CLI input
pub fn build_request(
    text: String,
    image_mime: Option<String>,
    meal_type: Option<&str>,
) -> Result<EstimationRequest> {
    let meal_type = match meal_type {
        Some(raw) => match MealType::from_str_lossy(raw) {
            Some(meal_type) => Some(meal_type),
            None => bail!("Unknown meal type '{raw}' (expected breakfast, lunch, dinner, or snack)"),
        },
        None => None,
    };

    let mut request = EstimationRequest::text(text).with_meal_type(meal_type);
    if let Some(mime) = image_mime {
        request = request.with_image(mime);
    }
    if request.description.trim().is_empty() && !request.has_image() {
        bail!("Describe the meal or attach a photo");
    }
    Ok(request)
}

/// Estimate and log a meal
pub async fn log(
    tracker: &NutritionTracker,
    text: String,
    image_mime: Option<String>,
    meal_type: Option<&str>,
) -> Result<()> {
    let request = build_request(text, image_mime, meal_type)?;
    let logged = tracker.snap_meal(request).await?;
    display_logged(&logged, false);
    Ok(())
}

/// Add water, either a custom amount or the quick-add increment
pub async fn water(tracker: &NutritionTracker, ml: Option<f64>) -> Result<()> {
    let log = match ml {
        Some(ml) => tracker.add_water(ml).await?,
        None => tracker.add_water_increment().await?,
    };
    println!("Water today: {} ml", log.water_intake);
    Ok(())
}

/// Delete a meal by date and id
pub async fn remove(tracker: &NutritionTracker, date: NaiveDate, id: &str) -> Result<()> {
    match tracker.delete_meal(date, id).await? {
        Some(meal) => println!(
            "Removed meal {} ({} kcal) from {date}",
            meal.id, meal.total_calories
        ),
        None => println!("No meal {id} on {date}; nothing removed."),
    }
    Ok(())
}

/// Show today's log
pub async fn today(tracker: &NutritionTracker) -> Result<()> {
    let log = tracker.today().await;
    let profile = tracker.profile().await;
    let summary = tracker.summary().await.ok();
    display_day(&log, profile.as_ref(), summary.as_ref());
    Ok(())
}
