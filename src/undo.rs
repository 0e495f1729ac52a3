// ABOUTME: Single-slot undo state machine for the most recently logged meal
// ABOUTME: Idle or Armed with a deadline; re-arming supersedes, stale expiries are ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Undo coordination
//!
//! The coordinator is a plain state machine driven by explicit instants so it
//! can be tested without timers. The tracker pairs each [`UndoCoordinator::arm`]
//! with a deferred task that calls [`UndoCoordinator::expire`] at the deadline;
//! the generation carried by the ticket makes a superseded task's call a no-op.

use std::time::Duration;

use chrono::NaiveDate;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::models::NutritionAnalysis;
use crate::store::DailyLogStore;

/// Reversal currently on offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmedUndo {
    /// Day the meal was logged under
    pub date: NaiveDate,
    /// Meal that would be removed
    pub entry_id: String,
    /// Instant after which the meal is kept for good
    pub deadline: Instant,
    /// Arm counter value for this reversal
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum UndoState {
    Idle,
    Armed(ArmedUndo),
}

/// What [`UndoCoordinator::undo`] did
#[derive(Debug, Clone, PartialEq)]
pub enum UndoOutcome {
    /// The tracked meal was removed
    Reverted(NutritionAnalysis),
    /// The tracked meal had already been deleted directly
    AlreadyRemoved,
    /// The window had elapsed; the meal stays
    Expired,
    /// Nothing was armed
    NothingToUndo,
}

impl UndoOutcome {
    /// Removed meal, if any
    #[must_use]
    pub fn into_reverted(self) -> Option<NutritionAnalysis> {
        match self {
            Self::Reverted(meal) => Some(meal),
            _ => None,
        }
    }
}

/// Tracks at most one undoable meal
#[derive(Debug, Clone)]
pub struct UndoCoordinator {
    window: Duration,
    state: UndoState,
    generation: u64,
}

impl UndoCoordinator {
    /// Idle coordinator with the given window
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            state: UndoState::Idle,
            generation: 0,
        }
    }

    /// Window length
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Offer a reversal of `entry_id`, discarding any earlier one
    pub fn arm(&mut self, date: NaiveDate, entry_id: impl Into<String>, now: Instant) -> ArmedUndo {
        self.generation += 1;
        let armed = ArmedUndo {
            date,
            entry_id: entry_id.into(),
            deadline: now + self.window,
            generation: self.generation,
        };
        if let UndoState::Armed(previous) = &self.state {
            debug!(meal.id = %previous.entry_id, "Superseding pending undo");
        }
        debug!(meal.id = %armed.entry_id, undo.generation = armed.generation, "Undo armed");
        self.state = UndoState::Armed(armed.clone());
        armed
    }

    /// Revert the armed meal if the window is still open.
    ///
    /// Always leaves the coordinator idle.
    pub fn undo(&mut self, store: &mut DailyLogStore, now: Instant) -> UndoOutcome {
        let UndoState::Armed(armed) = std::mem::replace(&mut self.state, UndoState::Idle) else {
            return UndoOutcome::NothingToUndo;
        };

        if now >= armed.deadline {
            debug!(meal.id = %armed.entry_id, "Undo requested after window closed");
            return UndoOutcome::Expired;
        }

        store
            .remove_meal(armed.date, &armed.entry_id)
            .map_or(UndoOutcome::AlreadyRemoved, |meal| {
                info!(meal.id = %meal.id, log.date = %armed.date, "Meal undone");
                UndoOutcome::Reverted(meal)
            })
    }

    /// Close the window for `generation`; stale generations are ignored.
    ///
    /// Returns whether the coordinator went idle.
    pub fn expire(&mut self, generation: u64) -> bool {
        match &self.state {
            UndoState::Armed(armed) if armed.generation == generation => {
                debug!(meal.id = %armed.entry_id, undo.generation = generation, "Undo window closed");
                self.state = UndoState::Idle;
                true
            }
            _ => false,
        }
    }

    /// The pending reversal, if any
    #[must_use]
    pub const fn pending(&self) -> Option<&ArmedUndo> {
        match &self.state {
            UndoState::Armed(armed) => Some(armed),
            UndoState::Idle => None,
        }
    }

    /// Whether a reversal is on offer
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        matches!(self.state, UndoState::Armed(_))
    }
}
