// ABOUTME: Configuration module for tracker runtime settings
// ABOUTME: Environment-driven data directory, undo window, and water quick-add amount
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Configuration module for CalorieSnap
//!
//! - **Environment**: `TrackerConfig` loaded from `CALORIESNAP_*` variables

/// Environment-driven tracker configuration
pub mod environment;

pub use environment::TrackerConfig;
