// ABOUTME: Serving multiplier inference from the token preceding a food keyword
// ABOUTME: Numeric tokens are used directly, a few number words are recognized, anything else is 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Quantity extraction
//!
//! A local, single-keyword lookup: only the token immediately before the
//! keyword is considered. Quantities shared between several foods
//! ("2 eggs and toast") are not distributed.

/// Number words understood in front of a keyword
const QUANTITY_WORDS: &[(&str, f64)] = &[
    ("a", 1.0),
    ("an", 1.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("half", 0.5),
    ("double", 2.0),
];

const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Infer how many servings of `keyword` the text describes.
///
/// The text is split on whitespace; the first token containing the keyword
/// (or, for a phrase keyword, its first word) is located, so plurals such
/// as "eggs" match "egg". The token before it is read as a quantity.
/// Always returns a positive multiplier; unparseable input yields 1.
#[must_use]
pub fn extract_multiplier(text: &str, keyword: &str) -> f64 {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let keyword = keyword.to_lowercase();
    let Some(anchor) = keyword.split_whitespace().next() else {
        return DEFAULT_MULTIPLIER;
    };

    let Some(position) = tokens.iter().position(|token| token.contains(anchor)) else {
        return DEFAULT_MULTIPLIER;
    };

    position
        .checked_sub(1)
        .and_then(|previous| tokens.get(previous))
        .and_then(|token| parse_quantity(token))
        .unwrap_or(DEFAULT_MULTIPLIER)
}

fn parse_quantity(token: &str) -> Option<f64> {
    if let Ok(number) = token.parse::<f64>() {
        return (number.is_finite() && number > 0.0).then_some(number);
    }

    QUANTITY_WORDS
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_token_before_keyword() {
        assert!((extract_multiplier("2 eggs", "egg") - 2.0).abs() < f64::EPSILON);
        assert!((extract_multiplier("had 1.5 bagel", "bagel") - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_number_words() {
        assert!((extract_multiplier("three eggs", "egg") - 3.0).abs() < f64::EPSILON);
        assert!((extract_multiplier("Half banana", "banana") - 0.5).abs() < f64::EPSILON);
        assert!((extract_multiplier("a double burger", "burger") - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_keyword_first_token_defaults_to_one() {
        assert!((extract_multiplier("eggs and toast", "egg") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unrecognized_word_defaults_to_one() {
        assert!((extract_multiplier("scrambled eggs", "egg") - 1.0).abs() < f64::EPSILON);
        assert!((extract_multiplier("several eggs", "egg") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_or_non_finite_numbers_default_to_one() {
        assert!((extract_multiplier("0 eggs", "egg") - 1.0).abs() < f64::EPSILON);
        assert!((extract_multiplier("-2 eggs", "egg") - 1.0).abs() < f64::EPSILON);
        assert!((extract_multiplier("inf eggs", "egg") - 1.0).abs() < f64::EPSILON);
        assert!((extract_multiplier("nan eggs", "egg") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_phrase_keyword_anchors_on_first_word() {
        assert!(
            (extract_multiplier("2 peanut butter sandwiches", "peanut butter") - 2.0).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_keyword_absent_from_tokens_defaults_to_one() {
        assert!((extract_multiplier("", "egg") - 1.0).abs() < f64::EPSILON);
        assert!((extract_multiplier("2 apples", "egg") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shared_quantity_is_not_distributed() {
        // Only the word directly before each keyword counts
        assert!((extract_multiplier("2 eggs and toast", "toast") - 1.0).abs() < f64::EPSILON);
    }
}
