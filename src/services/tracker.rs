// ABOUTME: Nutrition tracker service guarding logs, undo slot, profile, and chat behind one mutex
// ABOUTME: Arms a cancellable deferred undo expiry per logged meal and saves after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Nutrition tracker service
//!
//! Business rules:
//! - Meals are logged under the clock's current day, most recent first
//! - Only the most recently logged meal can be undone, within the undo window
//! - State is saved after each mutation once a profile exists
//! - Chat history is append-only; a failing coach yields a fixed apology

use std::sync::{Arc, Weak};

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use caloriesnap_intelligence::estimator::analysis_context;
use caloriesnap_intelligence::{build_profile, DaySummary, EstimationRequest, NutritionEstimator, ProfileInputs};

use crate::clock::{Clock, SystemClock};
use crate::coach::{LocalMealAnalyzer, MealAnalyzer, NutritionCoach, RuleBasedCoach};
use crate::config::TrackerConfig;
use crate::constants::coach::COACH_UNAVAILABLE_REPLY;
use crate::errors::{AppError, AppResult};
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::models::{AppState, ChatMessage, DailyLog, NutritionAnalysis, UserProfile};
use crate::persistence::StateRepository;
use crate::store::DailyLogStore;
use crate::undo::{ArmedUndo, UndoCoordinator, UndoOutcome};

/// MIME prefix accepted for meal photos
const IMAGE_MIME_PREFIX: &str = "image/";

/// Mutable state behind the tracker's single lock
struct TrackerState {
    store: DailyLogStore,
    undo: UndoCoordinator,
    profile: Option<UserProfile>,
    chat_history: Vec<ChatMessage>,
    expiry_task: Option<JoinHandle<()>>,
}

impl TrackerState {
    fn new(config: &TrackerConfig) -> Self {
        Self {
            store: DailyLogStore::new(),
            undo: UndoCoordinator::new(config.undo_window()),
            profile: None,
            chat_history: Vec::new(),
            expiry_task: None,
        }
    }

    fn snapshot(&self) -> AppState {
        AppState {
            profile: self.profile.clone(),
            daily_logs: self.store.to_logs(),
            chat_history: self.chat_history.clone(),
        }
    }

    fn cancel_expiry(&mut self) {
        if let Some(task) = self.expiry_task.take() {
            task.abort();
        }
    }
}

/// A meal that was just logged, with its undo offer
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedMeal {
    /// Day the meal was logged under
    pub date: NaiveDate,
    /// The stored record
    pub analysis: NutritionAnalysis,
    /// Undo offer for this meal
    pub undo: ArmedUndo,
}

/// Builder for [`NutritionTracker`]
pub struct TrackerBuilder {
    config: TrackerConfig,
    repository: StateRepository,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    analyzer: Option<Arc<dyn MealAnalyzer>>,
    coach: Arc<dyn NutritionCoach>,
}

impl TrackerBuilder {
    /// Use another id generator
    #[must_use]
    pub fn ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Use another clock
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the local heuristic analyzer
    #[must_use]
    pub fn analyzer(mut self, analyzer: Arc<dyn MealAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Replace the rule-based coach
    #[must_use]
    pub fn coach(mut self, coach: Arc<dyn NutritionCoach>) -> Self {
        self.coach = coach;
        self
    }

    /// Build an empty tracker; call [`NutritionTracker::load`] to restore saved state
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration does not validate
    pub fn build(self) -> AppResult<NutritionTracker> {
        self.config.validate()?;

        let analyzer = self.analyzer.unwrap_or_else(|| {
            Arc::new(LocalMealAnalyzer::new(NutritionEstimator::new(
                self.ids.clone(),
                self.clock.clone(),
            )))
        });

        Ok(NutritionTracker {
            state: Arc::new(Mutex::new(TrackerState::new(&self.config))),
            exchange: Arc::new(Mutex::new(())),
            analyzer,
            coach: self.coach,
            repository: self.repository,
            ids: self.ids,
            clock: self.clock,
            config: self.config,
        })
    }
}

/// Meal logging, undo, hydration, and coach chat over persisted state
#[derive(Clone)]
pub struct NutritionTracker {
    state: Arc<Mutex<TrackerState>>,
    // Held for a whole ask so user/model turns stay paired
    exchange: Arc<Mutex<()>>,
    analyzer: Arc<dyn MealAnalyzer>,
    coach: Arc<dyn NutritionCoach>,
    repository: StateRepository,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    config: TrackerConfig,
}

impl NutritionTracker {
    /// Start building a tracker with UUID ids, the system clock, and local strategies
    #[must_use]
    pub fn builder(config: TrackerConfig, repository: StateRepository) -> TrackerBuilder {
        TrackerBuilder {
            config,
            repository,
            ids: Arc::new(UuidIdGenerator),
            clock: Arc::new(SystemClock),
            analyzer: None,
            coach: Arc::new(RuleBasedCoach),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Replace in-memory state with the saved state; any pending undo is dropped
    ///
    /// # Errors
    ///
    /// Returns an error if the saved state cannot be read or parsed
    pub async fn load(&self) -> AppResult<()> {
        let saved = self.repository.load().await?;
        let mut state = self.state.lock().await;
        state.cancel_expiry();
        state.undo = UndoCoordinator::new(self.config.undo_window());
        state.store = DailyLogStore::from_logs(saved.daily_logs);
        state.profile = saved.profile;
        state.chat_history = saved.chat_history;
        Ok(())
    }

    /// Compute targets from onboarding answers and store the profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or out-of-range body metrics,
    /// or a storage error if saving fails
    pub async fn complete_onboarding(&self, inputs: &ProfileInputs) -> AppResult<UserProfile> {
        let profile = build_profile(inputs)?;
        let mut state = self.state.lock().await;
        state.profile = Some(profile.clone());
        info!(
            profile.goal = %profile.goal,
            profile.calorie_target = profile.calorie_target,
            "Onboarding complete"
        );
        self.persist(&state).await?;
        Ok(profile)
    }

    /// Current profile, if onboarding finished
    pub async fn profile(&self) -> Option<UserProfile> {
        self.state.lock().await.profile.clone()
    }

    /// Estimate a meal without logging it.
    ///
    /// An empty `context` is filled from the profile goal and today's intake.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if an attached file is not an image, or the
    /// analyzer's error
    pub async fn analyze_meal(&self, mut request: EstimationRequest) -> AppResult<NutritionAnalysis> {
        if let Some(image) = &request.image {
            if !image.mime_type.starts_with(IMAGE_MIME_PREFIX) {
                return Err(AppError::invalid_input(format!(
                    "Unsupported attachment type {}; please provide an image",
                    image.mime_type
                )));
            }
        }

        if request.context.trim().is_empty() {
            let state = self.state.lock().await;
            let today = state.store.get_or_create(self.clock.today());
            request.context = analysis_context(state.profile.as_ref(), &today);
        }

        let analysis = self.analyzer.analyze(&request).await?;
        debug!(
            meal.id = %analysis.id,
            meal.calories = analysis.total_calories,
            meal.items = analysis.food_items.len(),
            "Meal analyzed"
        );
        Ok(analysis)
    }

    /// Add `analysis` to today's log and offer to undo it
    ///
    /// Supersedes any earlier undo offer.
    ///
    /// # Errors
    ///
    /// Returns a storage error if saving fails; the meal stays logged
    pub async fn log_meal(&self, analysis: NutritionAnalysis) -> AppResult<LoggedMeal> {
        let date = self.clock.today();
        let mut state = self.state.lock().await;

        state.store.add_meal(date, analysis.clone());
        let armed = state.undo.arm(date, analysis.id.clone(), Instant::now());
        self.schedule_expiry(&mut state, &armed);
        info!(
            meal.id = %analysis.id,
            log.date = %date,
            meal.calories = analysis.total_calories,
            "Meal logged"
        );

        self.persist(&state).await?;
        Ok(LoggedMeal {
            date,
            analysis,
            undo: armed,
        })
    }

    /// Analyze and log in one step
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::analyze_meal`] and [`Self::log_meal`]
    pub async fn snap_meal(&self, request: EstimationRequest) -> AppResult<LoggedMeal> {
        let analysis = self.analyze_meal(request).await?;
        self.log_meal(analysis).await
    }

    /// Revert the most recently logged meal if its window is still open
    ///
    /// # Errors
    ///
    /// Returns a storage error if saving the reverted state fails
    pub async fn undo_last(&self) -> AppResult<UndoOutcome> {
        let mut state = self.state.lock().await;
        let TrackerState { store, undo, .. } = &mut *state;
        let outcome = undo.undo(store, Instant::now());
        state.cancel_expiry();

        if matches!(outcome, UndoOutcome::Reverted(_)) {
            self.persist(&state).await?;
        }
        Ok(outcome)
    }

    /// Delete a meal directly; an unknown date or id is a no-op.
    ///
    /// A pending undo offer for another meal is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if saving fails
    pub async fn delete_meal(&self, date: NaiveDate, id: &str) -> AppResult<Option<NutritionAnalysis>> {
        let mut state = self.state.lock().await;
        let removed = state.store.remove_meal(date, id);
        if removed.is_some() {
            info!(meal.id = %id, log.date = %date, "Meal deleted");
            self.persist(&state).await?;
        }
        Ok(removed)
    }

    /// Add water to today's log and return the updated day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a non-positive amount, or a storage error
    pub async fn add_water(&self, amount_ml: f64) -> AppResult<DailyLog> {
        if !(amount_ml.is_finite() && amount_ml > 0.0) {
            return Err(AppError::invalid_input("Water amount must be a positive number of ml"));
        }

        let date = self.clock.today();
        let mut state = self.state.lock().await;
        state.store.add_water(date, amount_ml);
        self.persist(&state).await?;
        Ok(state.store.get_or_create(date))
    }

    /// Add the configured quick-add amount of water
    ///
    /// # Errors
    ///
    /// Returns a storage error if saving fails
    pub async fn add_water_increment(&self) -> AppResult<DailyLog> {
        self.add_water(self.config.water_increment_ml).await
    }

    /// Today's bucket, empty if nothing was logged
    pub async fn today(&self) -> DailyLog {
        self.log_for(self.clock.today()).await
    }

    /// The bucket for `date`, empty if nothing was logged
    pub async fn log_for(&self, date: NaiveDate) -> DailyLog {
        self.state.lock().await.store.get_or_create(date)
    }

    /// Today's progress against the profile targets
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` before onboarding
    pub async fn summary(&self) -> AppResult<DaySummary> {
        let state = self.state.lock().await;
        let profile = state
            .profile
            .as_ref()
            .ok_or_else(|| AppError::not_found("User profile"))?;
        let today = state.store.get_or_create(self.clock.today());
        Ok(DaySummary::compute(profile, &today))
    }

    /// Send `message` to the coach and record both turns.
    ///
    /// Returns the coach's reply message. Concurrent calls are answered one
    /// at a time, so the history always alternates user and model turns;
    /// other operations may run while the coach is replying.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank message, `ResourceNotFound` before
    /// onboarding, or a storage error if saving fails
    pub async fn ask(&self, message: &str) -> AppResult<ChatMessage> {
        let text = message.trim();
        if text.is_empty() {
            return Err(AppError::invalid_input("Message cannot be empty"));
        }

        let _exchange = self.exchange.lock().await;

        let (history, profile, today) = {
            let mut state = self.state.lock().await;
            let profile = state
                .profile
                .clone()
                .ok_or_else(|| AppError::not_found("User profile"))?;
            let history = state.chat_history.clone();
            let today = state.store.get_or_create(self.clock.today());
            state
                .chat_history
                .push(ChatMessage::user(self.ids.next_id(), text, self.clock.now()));
            (history, profile, today)
        };

        let reply_text = match self.coach.reply(text, &history, &profile, &today).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Coach failed to reply");
                COACH_UNAVAILABLE_REPLY.to_owned()
            }
        };

        let reply = ChatMessage::model(self.ids.next_id(), reply_text, self.clock.now());
        let mut state = self.state.lock().await;
        state.chat_history.push(reply.clone());
        self.persist(&state).await?;
        Ok(reply)
    }

    /// Coach conversation, oldest first
    pub async fn chat_history(&self) -> Vec<ChatMessage> {
        self.state.lock().await.chat_history.clone()
    }

    /// Undo offer currently open, if any
    pub async fn pending_undo(&self) -> Option<ArmedUndo> {
        self.state.lock().await.undo.pending().cloned()
    }

    /// Copy of the persistable state
    pub async fn snapshot(&self) -> AppState {
        self.state.lock().await.snapshot()
    }

    /// Save unless no profile exists yet
    async fn persist(&self, state: &TrackerState) -> AppResult<()> {
        if state.profile.is_none() {
            debug!("No profile yet, skipping save");
            return Ok(());
        }
        self.repository.save(&state.snapshot()).await
    }

    /// Replace the pending expiry task with one for `armed`
    fn schedule_expiry(&self, state: &mut TrackerState, armed: &ArmedUndo) {
        state.cancel_expiry();

        let shared: Weak<Mutex<TrackerState>> = Arc::downgrade(&self.state);
        let deadline = armed.deadline;
        let generation = armed.generation;

        state.expiry_task = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let Some(shared) = shared.upgrade() else {
                return;
            };
            let mut state = shared.lock().await;
            if state.undo.expire(generation) {
                state.expiry_task = None;
            }
        }));
    }
}
