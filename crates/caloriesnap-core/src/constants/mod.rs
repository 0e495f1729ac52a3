// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for estimation, storage, undo, hydration, and coaching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Heuristic meal estimation constants (placeholders, tag thresholds, tips)
pub mod estimation;

/// Profile target computation (Mifflin-St Jeor, activity multipliers, macro split)
pub mod targets;

/// Persisted state location
pub mod storage {
    /// Key under which the whole application state blob is stored
    pub const STATE_KEY: &str = "caloriesnap_data_v2";
    /// Default data directory, relative to the working directory
    pub const DEFAULT_DATA_DIR: &str = ".caloriesnap";
    /// File extension used by the file-backed key-value store
    pub const BLOB_EXTENSION: &str = "json";
}

/// Undo window
pub mod undo {
    /// Seconds during which the most recent logged meal can be undone
    pub const DEFAULT_UNDO_WINDOW_SECS: u64 = 5;
}

/// Hydration tracking
pub mod hydration {
    /// Amount added by the quick-add water action (ml)
    pub const DEFAULT_WATER_INCREMENT_ML: f64 = 250.0;
    /// Lower bound of the daily water guidance (ml)
    pub const DAILY_WATER_MIN_ML: u32 = 2000;
    /// Upper bound of the daily water guidance (ml)
    pub const DAILY_WATER_MAX_ML: u32 = 3000;
}

/// Coach conversation
pub mod coach {
    /// Reply recorded when the coach backend fails
    pub const COACH_UNAVAILABLE_REPLY: &str =
        "I'm having trouble connecting right now. Please try again.";
    /// Remaining calories above which the status reply is encouraging
    pub const COMFORTABLE_REMAINING_KCAL: f64 = 500.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the tracker
    pub const CALORIESNAP: &str = "caloriesnap";
}
