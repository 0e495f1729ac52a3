// ABOUTME: Command modules for caloriesnap-cli
// ABOUTME: Profile setup, meal and water logging, coach questions, and the interactive session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

pub mod coach;
pub mod meals;
pub mod profile;
pub mod session;
