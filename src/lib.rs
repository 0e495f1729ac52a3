// ABOUTME: Main library entry point for the CalorieSnap nutrition tracker
// ABOUTME: Daily log store, undo coordination, persistence, coach strategies, and the tracker service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

#![deny(unsafe_code)]

//! # CalorieSnap
//!
//! Estimates the calories and macronutrients of a meal from a short text
//! description, keeps a per-day log with a short undo window, and answers
//! coaching questions from the current log.
//!
//! ## Architecture
//!
//! - **`caloriesnap-core`**: errors, constants, models, id and clock capabilities
//! - **`caloriesnap-intelligence`**: estimator, advice responder, targets, summaries
//! - **this crate**: stateful pieces (store, undo, persistence, tracker) and the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use caloriesnap::config::TrackerConfig;
//! use caloriesnap::errors::AppResult;
//! use caloriesnap::intelligence::EstimationRequest;
//! use caloriesnap::persistence::{FileKeyValueStore, StateRepository};
//! use caloriesnap::services::NutritionTracker;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = TrackerConfig::from_env();
//!     let repository = StateRepository::new(Arc::new(FileKeyValueStore::new(&config.data_dir)));
//!     let tracker = NutritionTracker::builder(config, repository).build()?;
//!     tracker.load().await?;
//!
//!     let logged = tracker.snap_meal(EstimationRequest::text("2 eggs and toast")).await?;
//!     println!("Logged {} kcal", logged.analysis.total_calories);
//!     Ok(())
//! }
//! ```

// Foundation types live in caloriesnap-core; re-exported so callers need one path
pub use caloriesnap_core::{clock, constants, errors, ids, models};

/// Estimation, advice, targets, and summaries
pub use caloriesnap_intelligence as intelligence;

/// Substitutable meal analysis and coaching strategies
pub mod coach;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Persisted state blob and key-value backends
pub mod persistence;

/// Domain services
pub mod services;

/// Per-day meal and water log
pub mod store;

/// Undo of the most recently logged meal
pub mod undo;
