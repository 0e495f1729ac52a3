// ABOUTME: Coach command for caloriesnap-cli
// ABOUTME: Sends one question to the nutrition coach and prints the reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use anyhow::Result;
use caloriesnap::services::NutritionTracker;

use crate::helpers::display::display_reply;

/// Ask one question
pub async fn ask(tracker: &NutritionTracker, message: &str) -> Result<()> {
    let reply = tracker.ask(message).await?;
    display_reply(&reply);
    Ok(())
}
