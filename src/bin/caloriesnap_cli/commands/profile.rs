// ABOUTME: Profile setup command for caloriesnap-cli
// ABOUTME: Computes daily targets from body metrics and saves the profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use anyhow::Result;
use caloriesnap::intelligence::ProfileInputs;
use caloriesnap::services::NutritionTracker;
use tracing::info;

use crate::helpers::display::display_profile;

/// Create or replace the profile
pub async fn setup(tracker: &NutritionTracker, inputs: &ProfileInputs) -> Result<()> {
    if tracker.profile().await.is_some() {
        info!("Replacing existing profile");
    }
    let profile = tracker.complete_onboarding(inputs).await?;
    display_profile(&profile);
    Ok(())
}
