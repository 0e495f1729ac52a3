// ABOUTME: Local heuristic nutrition estimator for free-text meal descriptions
// ABOUTME: Keyword scan, quantity scaling, fallback items, totals, dietary tags, and tips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CalorieSnap

//! Nutrition Estimator
//!
//! Turns a meal description into a [`NutritionAnalysis`]:
//!
//! 1. An image with no description yields one fixed placeholder item; the
//!    image itself is never inspected.
//! 2. Otherwise every knowledge base keyword contained anywhere in the
//!    lower-cased description becomes an item, scaled by the quantity found
//!    in front of it. Matching is plain substring containment, so
//!    "breadcrumbs" counts as bread.
//! 3. No match at all yields one fallback item named after the description.
//!
//! Totals are summed from the items; tags and the tip are derived from the
//! totals.

use std::sync::Arc;

use caloriesnap_core::clock::Clock;
use caloriesnap_core::constants::estimation::{
    self, tags, ADD_VOLUME_TIP, HIGH_PROTEIN_THRESHOLD_G, HIGH_PROTEIN_TIP,
    LIGHT_MEAL_THRESHOLD_KCAL, LOW_CARB_THRESHOLD_G,
};
use caloriesnap_core::ids::IdGenerator;
use caloriesnap_core::models::{DailyLog, FoodItem, MacroTotals, MealType, NutritionAnalysis, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::food_database::{FoodKnowledgeBase, MacroProfile};
use crate::quantity::extract_multiplier;

/// Image accompanying an estimation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    /// MIME type reported by the capture layer (e.g. `image/png`)
    pub mime_type: String,
}

/// Input to an estimation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimationRequest {
    /// Free-text meal description, possibly empty
    pub description: String,
    /// Attached image, if any
    pub image: Option<ImageAttachment>,
    /// Goal and intake context for remote estimators; unused by the local heuristic
    pub context: String,
    /// Meal slot chosen by the caller
    pub meal_type: Option<MealType>,
}

impl EstimationRequest {
    /// Text-only request
    #[must_use]
    pub fn text(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Image-only request
    #[must_use]
    pub fn image(mime_type: impl Into<String>) -> Self {
        Self {
            image: Some(ImageAttachment {
                mime_type: mime_type.into(),
            }),
            ..Self::default()
        }
    }

    /// Attach an image
    #[must_use]
    pub fn with_image(mut self, mime_type: impl Into<String>) -> Self {
        self.image = Some(ImageAttachment {
            mime_type: mime_type.into(),
        });
        self
    }

    /// Attach caller context
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the meal slot
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: Option<MealType>) -> Self {
        self.meal_type = meal_type;
        self
    }

    /// Whether an image was supplied
    #[must_use]
    pub const fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Context line handed to estimators alongside the description
#[must_use]
pub fn analysis_context(profile: Option<&UserProfile>, today: &DailyLog) -> String {
    let consumed = today.consumed_calories();
    profile.map_or_else(
        || format!("Consumed today: {consumed} kcal."),
        |profile| {
            format!(
                "User wants to {} weight. Consumed today: {consumed} kcal.",
                profile.goal
            )
        },
    )
}

/// Keyword-driven estimator over a food knowledge base
#[derive(Clone)]
pub struct NutritionEstimator {
    knowledge_base: FoodKnowledgeBase,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl NutritionEstimator {
    /// Estimator over the built-in knowledge base
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self::with_knowledge_base(FoodKnowledgeBase::standard(), ids, clock)
    }

    /// Estimator over a custom knowledge base
    #[must_use]
    pub fn with_knowledge_base(
        knowledge_base: FoodKnowledgeBase,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            knowledge_base,
            ids,
            clock,
        }
    }

    /// Produce a fresh analysis record for `request`.
    ///
    /// Never fails: blank input degrades to the fallback item.
    #[must_use]
    pub fn estimate(&self, request: &EstimationRequest) -> NutritionAnalysis {
        let food_items = estimate_food_items(&self.knowledge_base, request);
        let totals: MacroTotals = food_items.iter().map(MacroTotals::of_item).sum();
        let dietary_tags = derive_dietary_tags(&totals);
        let health_tips = derive_health_tip(&totals).to_owned();

        let analysis = NutritionAnalysis::new(
            self.ids.next_id(),
            self.clock.now(),
            food_items,
            health_tips,
            dietary_tags,
            request.meal_type,
        );

        debug!(
            meal.id = %analysis.id,
            meal.items = analysis.food_items.len(),
            meal.calories = analysis.total_calories,
            meal.image = request.has_image(),
            "Estimated meal nutrition"
        );

        analysis
    }
}

/// Items for a request, before ids and timestamps are attached
#[must_use]
pub fn estimate_food_items(
    knowledge_base: &FoodKnowledgeBase,
    request: &EstimationRequest,
) -> Vec<FoodItem> {
    let description = request.description.as_str();
    let blank = description.trim().is_empty();

    if request.has_image() && blank {
        return vec![image_placeholder()];
    }

    let detected = detect_food_items(knowledge_base, description);
    if detected.is_empty() {
        return vec![fallback_item(description, blank)];
    }
    detected
}

/// Scan the knowledge base in its own order and build one item per contained keyword
#[must_use]
pub fn detect_food_items(knowledge_base: &FoodKnowledgeBase, description: &str) -> Vec<FoodItem> {
    let lowered = description.to_lowercase();

    knowledge_base
        .entries()
        .iter()
        .filter(|entry| lowered.contains(entry.keyword))
        .map(|entry| {
            let multiplier = extract_multiplier(&lowered, entry.keyword);
            food_item(
                display_name(entry.keyword),
                portion_label(multiplier),
                &entry.profile.scaled(multiplier),
            )
        })
        .collect()
}

/// Dietary tags for a set of totals.
///
/// Conditions are independent; "Balanced" appears only when none holds.
#[must_use]
pub fn derive_dietary_tags(totals: &MacroTotals) -> Vec<String> {
    let mut labels = Vec::new();
    if totals.protein > HIGH_PROTEIN_THRESHOLD_G {
        labels.push(tags::HIGH_PROTEIN.to_owned());
    }
    if totals.carbs < LOW_CARB_THRESHOLD_G {
        labels.push(tags::LOW_CARB.to_owned());
    }
    if totals.calories < LIGHT_MEAL_THRESHOLD_KCAL {
        labels.push(tags::LIGHT_MEAL.to_owned());
    }
    if labels.is_empty() {
        labels.push(tags::BALANCED.to_owned());
    }
    labels
}

/// Single health tip for a set of totals
#[must_use]
pub fn derive_health_tip(totals: &MacroTotals) -> &'static str {
    if totals.protein > HIGH_PROTEIN_THRESHOLD_G {
        HIGH_PROTEIN_TIP
    } else {
        ADD_VOLUME_TIP
    }
}

/// "N units" above one serving, "1 serving" otherwise
#[must_use]
pub fn portion_label(multiplier: f64) -> String {
    if multiplier > 1.0 {
        format!("{multiplier} units")
    } else {
        estimation::SINGLE_SERVING_LABEL.to_owned()
    }
}

fn display_name(keyword: &str) -> String {
    let mut chars = keyword.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn food_item(name: String, portion_size: String, macros: &MacroProfile) -> FoodItem {
    FoodItem {
        name,
        portion_size,
        calories: macros.calories,
        protein: macros.protein,
        fat: macros.fat,
        carbs: macros.carbs,
    }
}

fn image_placeholder() -> FoodItem {
    FoodItem {
        name: estimation::IMAGE_PLACEHOLDER_NAME.to_owned(),
        portion_size: estimation::IMAGE_PLACEHOLDER_PORTION.to_owned(),
        calories: estimation::IMAGE_PLACEHOLDER_CALORIES,
        protein: estimation::IMAGE_PLACEHOLDER_PROTEIN_G,
        fat: estimation::IMAGE_PLACEHOLDER_FAT_G,
        carbs: estimation::IMAGE_PLACEHOLDER_CARBS_G,
    }
}

/// Unmatched meal; named by the description as typed
fn fallback_item(description: &str, blank: bool) -> FoodItem {
    let name = if blank {
        estimation::UNKNOWN_MEAL_NAME.to_owned()
    } else {
        description.to_owned()
    };
    FoodItem {
        name,
        portion_size: estimation::SINGLE_SERVING_LABEL.to_owned(),
        calories: estimation::FALLBACK_CALORIES,
        protein: estimation::FALLBACK_PROTEIN_G,
        fat: estimation::FALLBACK_FAT_G,
        carbs: estimation::FALLBACK_CARBS_G,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caloriesnap_core::clock::FixedClock;
    use caloriesnap_core::ids::SequentialIdGenerator;
    use chrono::DateTime;

    fn estimator() -> NutritionEstimator {
        let clock = FixedClock::new(DateTime::from_timestamp(1_750_000_000, 0).unwrap());
        NutritionEstimator::new(
            Arc::new(SequentialIdGenerator::new("meal")),
            Arc::new(clock),
        )
    }

    #[test]
    fn test_two_eggs() {
        let analysis = estimator().estimate(&EstimationRequest::text("2 eggs"));

        assert_eq!(analysis.food_items.len(), 1);
        let egg = &analysis.food_items[0];
        assert_eq!(egg.name, "Egg");
        assert_eq!(egg.portion_size, "2 units");
        assert!((egg.calories - 140.0).abs() < f64::EPSILON);
        assert!((egg.protein - 12.0).abs() < f64::EPSILON);
        assert!((egg.fat - 10.0).abs() < f64::EPSILON);
        assert!(egg.carbs.abs() < f64::EPSILON);
        assert!((analysis.total_calories - 140.0).abs() < f64::EPSILON);
        assert!(analysis.dietary_tags.contains(&"Low Carb".to_owned()));
        assert!(analysis.dietary_tags.contains(&"Light Meal".to_owned()));
        assert_eq!(analysis.health_tips, ADD_VOLUME_TIP);
        assert_eq!(analysis.id, "meal-1");
    }

    #[test]
    fn test_image_only_placeholder() {
        let analysis = estimator().estimate(&EstimationRequest::image("image/png"));

        assert_eq!(analysis.food_items.len(), 1);
        assert_eq!(analysis.food_items[0].name, "Detected Balanced Meal");
        assert_eq!(analysis.food_items[0].portion_size, "1 plate");
        assert!((analysis.total_calories - 450.0).abs() < f64::EPSILON);
        assert_eq!(analysis.dietary_tags, vec!["High Protein".to_owned()]);
        assert_eq!(analysis.health_tips, HIGH_PROTEIN_TIP);
    }

    #[test]
    fn test_image_with_description_uses_text() {
        let request = EstimationRequest::text("1 banana").with_image("image/jpeg");
        let analysis = estimator().estimate(&request);
        assert_eq!(analysis.food_items[0].name, "Banana");
    }

    #[test]
    fn test_unknown_text_falls_back() {
        let analysis = estimator().estimate(&EstimationRequest::text("xyz123nonfood"));

        assert_eq!(analysis.food_items.len(), 1);
        assert_eq!(analysis.food_items[0].name, "xyz123nonfood");
        assert!((analysis.total_calories - 300.0).abs() < f64::EPSILON);
        assert_eq!(analysis.dietary_tags, vec!["Balanced".to_owned()]);
    }

    #[test]
    fn test_empty_text_is_unknown_meal() {
        let analysis = estimator().estimate(&EstimationRequest::text(""));
        assert_eq!(analysis.food_items[0].name, "Unknown Meal");
        assert!(analysis.totals_match_items());
    }

    #[test]
    fn test_items_follow_knowledge_base_order() {
        let items = detect_food_items(&FoodKnowledgeBase::standard(), "toast with 2 eggs");
        let names: Vec<_> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Egg", "Toast"]);
    }

    #[test]
    fn test_substring_matching_is_preserved() {
        // Known heuristic limitation: "breadcrumbs" contains "bread"
        let items = detect_food_items(&FoodKnowledgeBase::standard(), "breadcrumbs");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bread");
    }

    #[test]
    fn test_tags_can_stack() {
        let totals = MacroTotals {
            calories: 250.0,
            protein: 31.0,
            fat: 4.0,
            carbs: 0.0,
        };
        assert_eq!(
            derive_dietary_tags(&totals),
            vec!["High Protein", "Low Carb", "Light Meal"]
        );
    }

    #[test]
    fn test_portion_label() {
        assert_eq!(portion_label(2.0), "2 units");
        assert_eq!(portion_label(1.5), "1.5 units");
        assert_eq!(portion_label(1.0), "1 serving");
        assert_eq!(portion_label(0.5), "1 serving");
    }

    #[test]
    fn test_phrase_keyword_display_name() {
        let items = detect_food_items(&FoodKnowledgeBase::standard(), "Peanut Butter on celery");
        assert_eq!(items[0].name, "Peanut butter");
    }

    #[test]
    fn test_context_line() {
        let today = DailyLog::empty(chrono::NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(analysis_context(None, &today), "Consumed today: 0 kcal.");
    }
}
