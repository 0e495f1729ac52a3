// ABOUTME: Integration tests for the tracker's time-bounded undo of the last logged meal
// ABOUTME: Uses tokio's paused clock so the window elapses deterministically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use caloriesnap::intelligence::EstimationRequest;
use caloriesnap::undo::UndoOutcome;
use tokio::time::advance;

mod common;

use common::{create_onboarded_tracker, test_day};

async fn settle() {
    // Let the deferred expiry task observe the advanced clock
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
}

fn meal_ids(log: &caloriesnap::models::DailyLog) -> Vec<String> {
    log.meals.iter().map(|m| m.id.clone()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_undo_within_window_restores_previous_log() {
    let test = create_onboarded_tracker().await;
    let tracker = &test.tracker;

    tracker
        .snap_meal(EstimationRequest::text("oatmeal"))
        .await
        .unwrap();
    advance(Duration::from_secs(10)).await;
    settle().await;
    let before = tracker.today().await;

    let logged = tracker
        .snap_meal(EstimationRequest::text("2 eggs"))
        .await
        .unwrap();
    assert_eq!(tracker.today().await.meals[0].id, logged.analysis.id);

    advance(Duration::from_secs(4)).await;
    let outcome = tracker.undo_last().await.unwrap();

    assert_eq!(
        outcome.into_reverted().map(|m| m.id),
        Some(logged.analysis.id.clone())
    );
    assert_eq!(tracker.today().await, before);
    assert!(tracker.pending_undo().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_window_elapses_and_meal_is_kept() {
    let test = create_onboarded_tracker().await;
    let tracker = &test.tracker;

    let logged = tracker
        .snap_meal(EstimationRequest::text("pizza"))
        .await
        .unwrap();
    assert!(tracker.pending_undo().await.is_some());

    advance(Duration::from_secs(5)).await;
    settle().await;

    assert!(tracker.pending_undo().await.is_none());
    assert_eq!(tracker.undo_last().await.unwrap(), UndoOutcome::NothingToUndo);
    assert_eq!(meal_ids(&tracker.today().await), vec![logged.analysis.id]);
}

#[tokio::test(start_paused = true)]
async fn test_undo_is_noop_when_idle() {
    let test = create_onboarded_tracker().await;
    assert_eq!(
        test.tracker.undo_last().await.unwrap(),
        UndoOutcome::NothingToUndo
    );
}

#[tokio::test(start_paused = true)]
async fn test_rearming_supersedes_previous_meal() {
    let test = create_onboarded_tracker().await;
    let tracker = &test.tracker;

    let first = tracker
        .snap_meal(EstimationRequest::text("bagel"))
        .await
        .unwrap();
    advance(Duration::from_secs(3)).await;
    let second = tracker
        .snap_meal(EstimationRequest::text("yogurt"))
        .await
        .unwrap();

    // First meal's deadline has passed; the second is still open
    advance(Duration::from_secs(3)).await;
    settle().await;
    let pending = tracker.pending_undo().await.unwrap();
    assert_eq!(pending.entry_id, second.analysis.id);

    let outcome = tracker.undo_last().await.unwrap();
    assert_eq!(
        outcome.into_reverted().map(|m| m.id),
        Some(second.analysis.id.clone())
    );
    assert_eq!(meal_ids(&tracker.today().await), vec![first.analysis.id]);
}

#[tokio::test(start_paused = true)]
async fn test_undo_only_once() {
    let test = create_onboarded_tracker().await;
    let tracker = &test.tracker;

    tracker
        .snap_meal(EstimationRequest::text("apple"))
        .await
        .unwrap();
    assert!(matches!(
        tracker.undo_last().await.unwrap(),
        UndoOutcome::Reverted(_)
    ));
    assert_eq!(tracker.undo_last().await.unwrap(), UndoOutcome::NothingToUndo);
}

#[tokio::test(start_paused = true)]
async fn test_deleting_other_meal_keeps_undo_armed() {
    let test = create_onboarded_tracker().await;
    let tracker = &test.tracker;

    let older = tracker
        .snap_meal(EstimationRequest::text("salad"))
        .await
        .unwrap();
    let newer = tracker
        .snap_meal(EstimationRequest::text("tuna"))
        .await
        .unwrap();

    let removed = tracker
        .delete_meal(test_day(), &older.analysis.id)
        .await
        .unwrap();
    assert!(removed.is_some());
    assert_eq!(
        tracker.pending_undo().await.map(|p| p.entry_id),
        Some(newer.analysis.id.clone())
    );

    let outcome = tracker.undo_last().await.unwrap();
    assert!(matches!(outcome, UndoOutcome::Reverted(_)));
    assert!(tracker.today().await.meals.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_undo_after_direct_delete_of_tracked_meal() {
    let test = create_onboarded_tracker().await;
    let tracker = &test.tracker;

    let logged = tracker
        .snap_meal(EstimationRequest::text("steak"))
        .await
        .unwrap();
    tracker
        .delete_meal(test_day(), &logged.analysis.id)
        .await
        .unwrap();

    assert_eq!(
        tracker.undo_last().await.unwrap(),
        UndoOutcome::AlreadyRemoved
    );
}

#[tokio::test(start_paused = true)]
async fn test_undo_is_persisted() {
    let test = create_onboarded_tracker().await;
    let tracker = &test.tracker;

    tracker
        .snap_meal(EstimationRequest::text("burger"))
        .await
        .unwrap();
    tracker.undo_last().await.unwrap();

    let reloaded = common::tracker_builder(&test.blobs, test.clock.clone())
        .build()
        .unwrap();
    reloaded.load().await.unwrap();
    assert!(reloaded.today().await.meals.is_empty());
}
