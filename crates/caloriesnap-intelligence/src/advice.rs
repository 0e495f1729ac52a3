// ABOUTME: Rule-based nutrition coach replies computed from the profile and today's log
// ABOUTME: Case-insensitive keyword routing with a fixed priority order and a generic fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

use caloriesnap_core::constants::coach::COMFORTABLE_REMAINING_KCAL;
use caloriesnap_core::constants::hydration::{DAILY_WATER_MAX_ML, DAILY_WATER_MIN_ML};
use caloriesnap_core::models::{DailyLog, UserProfile};

/// Which rule answers a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceTopic {
    /// "how am i doing", "status", "summary"
    Status,
    /// "water"
    Water,
    /// "protein"
    Protein,
    /// "hungry", "snack"
    Snack,
    /// Anything else
    General,
}

/// Routing table, checked top to bottom; first hit wins
const ROUTES: &[(&[&str], AdviceTopic)] = &[
    (&["how am i doing", "status", "summary"], AdviceTopic::Status),
    (&["water"], AdviceTopic::Water),
    (&["protein"], AdviceTopic::Protein),
    (&["hungry", "snack"], AdviceTopic::Snack),
];

impl AdviceTopic {
    /// Route a raw user message
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        ROUTES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
            .map_or(Self::General, |(_, topic)| *topic)
    }
}

/// Answer `message` from the profile and today's log.
///
/// Deterministic: identical inputs always produce identical text.
#[must_use]
pub fn respond(message: &str, profile: &UserProfile, today: &DailyLog) -> String {
    match AdviceTopic::classify(message) {
        AdviceTopic::Status => status_reply(profile, today),
        AdviceTopic::Water => water_reply(today),
        AdviceTopic::Protein => protein_reply(profile, today),
        AdviceTopic::Snack => snack_reply(),
        AdviceTopic::General => general_reply(profile),
    }
}

fn status_reply(profile: &UserProfile, today: &DailyLog) -> String {
    // Branch on the exact figure; round only for display
    let remaining = profile.calorie_target - today.consumed_calories();
    let shown = remaining.round();

    if remaining > COMFORTABLE_REMAINING_KCAL {
        format!(
            "You're doing great! You still have {shown} kcal left for today. \
             Make sure your next meal includes a good source of protein."
        )
    } else if remaining > 0.0 {
        format!(
            "You're close to your goal! Only {shown} kcal remaining. \
             A light, veggie-packed snack would fit well."
        )
    } else {
        "You've reached your calorie goal for today. Focus on hydration and keep any extra snacks light."
            .to_owned()
    }
}

fn water_reply(today: &DailyLog) -> String {
    format!(
        "You've had {}ml of water today. Aim for {DAILY_WATER_MIN_ML}-{DAILY_WATER_MAX_ML}ml daily, \
         more on training days.",
        today.water_intake.round()
    )
}

fn protein_reply(profile: &UserProfile, today: &DailyLog) -> String {
    let consumed = today.totals().protein;
    let target = profile.protein_target;

    if consumed < target {
        format!(
            "You've had {}g of protein so far. You need about {}g more to reach your {}g target. \
             Greek yogurt, eggs, or chicken are easy ways to close the gap.",
            consumed.round(),
            (target - consumed).round(),
            target.round()
        )
    } else {
        format!(
            "Excellent! You've had {}g of protein, meeting your {}g target.",
            consumed.round(),
            target.round()
        )
    }
}

fn snack_reply() -> String {
    "Try a high-fiber snack like an apple with a spoon of peanut butter, carrots with hummus, \
     or a handful of almonds. Fiber keeps you full longer."
        .to_owned()
}

fn general_reply(profile: &UserProfile) -> String {
    format!(
        "I'm here to help you {}! Keep logging your meals consistently so I can give you better advice. \
         Ask me how you're doing, or about water, protein, or snack ideas.",
        profile.goal.aim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_priority() {
        assert_eq!(AdviceTopic::classify("How am I doing on water?"), AdviceTopic::Status);
        assert_eq!(AdviceTopic::classify("water and protein?"), AdviceTopic::Water);
        assert_eq!(AdviceTopic::classify("PROTEIN snack"), AdviceTopic::Protein);
        assert_eq!(AdviceTopic::classify("I'm hungry"), AdviceTopic::Snack);
        assert_eq!(AdviceTopic::classify("hello"), AdviceTopic::General);
        assert_eq!(AdviceTopic::classify(""), AdviceTopic::General);
    }

    #[test]
    fn test_substring_routing() {
        // "statuses" still contains "status"
        assert_eq!(AdviceTopic::classify("statuses"), AdviceTopic::Status);
    }
}
