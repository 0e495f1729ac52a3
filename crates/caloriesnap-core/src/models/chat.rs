// ABOUTME: Coach conversation message type
// ABOUTME: Append-only chat turns between the user and the nutrition coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Message typed by the user
    User,
    /// Reply from the coach
    Model,
}

/// A single chat turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id
    pub id: String,
    /// Sender role
    pub role: ChatRole,
    /// Message body
    pub text: String,
    /// When the message was created (epoch milliseconds on the wire)
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message
    #[must_use]
    pub fn user(id: String, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            role: ChatRole::User,
            text: text.into(),
            timestamp,
        }
    }

    /// Create a coach reply
    #[must_use]
    pub fn model(id: String, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            role: ChatRole::Model,
            text: text.into(),
            timestamp,
        }
    }
}
