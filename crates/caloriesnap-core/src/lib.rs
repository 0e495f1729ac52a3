// ABOUTME: Core types and constants for the CalorieSnap nutrition tracker
// ABOUTME: Foundation crate with error handling, data models, and injectable capabilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

#![deny(unsafe_code)]

//! # CalorieSnap Core
//!
//! Foundation crate providing shared types and constants for CalorieSnap.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Meal analyses, daily logs, user profiles, chat messages
//! - **ids** / **clock**: Injectable id and time sources

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`NutritionAnalysis`, `DailyLog`, `UserProfile`, ...)
pub mod models;

/// Unique identifier generation
pub mod ids;

/// Wall-clock abstraction
pub mod clock;
