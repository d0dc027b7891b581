//! The structured recipe record and its JSON presentation boundary.
//!
//! A [`Recipe`] is produced once by [`RecipeParser`](crate::recipe::RecipeParser)
//! and never mutated afterwards.  Every field has a deterministic default so
//! that a missing section in the source text shows up as a sentinel value
//! rather than as an unset field.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sentinels
// ---------------------------------------------------------------------------

/// Placeholder for free-text fields that could not be extracted.
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// Placeholder for the tips field when the source has no usable tips.
pub const NO_TIPS_SENTINEL: &str = "no special tips";

/// Phrases a generated recipe uses to say "there are no tips".
///
/// A tips block consisting only of one of these is folded into
/// [`NO_TIPS_SENTINEL`].
pub const NO_TIPS_PHRASES: &[&str] = &[
    "no special tips",
    "no tips",
    "none",
    "특별한 팁 없음",
    "팁 없음",
    "없음",
];

/// Phrases a generated recipe uses for a value it does not know.
///
/// A total-time line consisting only of one of these is folded into
/// [`UNKNOWN_SENTINEL`].
pub const UNKNOWN_PHRASES: &[&str] = &[
    "unknown",
    "not available",
    "n/a",
    "정보 없음",
    "알 수 없음",
    "모름",
];

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// A recipe extracted from generated free text.
///
/// Field names double as the JSON keys of the presentation boundary:
/// `dish_name, total_time, ingredients, tools, steps, tips`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Dish name from the text, or the caller-supplied fallback.
    pub dish_name: String,
    /// Free-text preparation time, [`UNKNOWN_SENTINEL`] when absent.
    pub total_time: String,
    /// Ingredients in textual order.  May be empty.
    pub ingredients: Vec<String>,
    /// Tools in textual order.  May be empty.
    pub tools: Vec<String>,
    /// Ordered steps; 0-indexed here, 1-indexed in narration.
    pub steps: Vec<String>,
    /// Tips block, [`NO_TIPS_SENTINEL`] when absent or blank.
    pub tips: String,
}

impl Recipe {
    /// A recipe with every field at its sentinel and no steps.
    pub fn empty(dish_name: &str) -> Self {
        let dish_name = dish_name.trim();
        Self {
            dish_name: if dish_name.is_empty() {
                UNKNOWN_SENTINEL.to_string()
            } else {
                dish_name.to_string()
            },
            total_time: UNKNOWN_SENTINEL.to_string(),
            ingredients: Vec::new(),
            tools: Vec::new(),
            steps: Vec::new(),
            tips: NO_TIPS_SENTINEL.to_string(),
        }
    }

    /// `true` when the recipe can drive a step session.
    pub fn has_steps(&self) -> bool {
        !self.steps.is_empty()
    }

    /// `true` when `tips` carries something other than the sentinel.
    pub fn has_tips(&self) -> bool {
        !is_no_tips(&self.tips)
    }

    /// Serialise to the JSON presentation record.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read a recipe back from its JSON presentation record.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::empty("")
    }
}

/// `true` when `tips` is blank or only says that there are no tips.
pub fn is_no_tips(tips: &str) -> bool {
    is_placeholder(tips, NO_TIPS_PHRASES)
}

/// `true` when `value` is blank or only says that it is unknown.
pub fn is_unknown(value: &str) -> bool {
    is_placeholder(value, UNKNOWN_PHRASES)
}

fn is_placeholder(value: &str, phrases: &[&str]) -> bool {
    let normalized = value
        .trim()
        .trim_start_matches(['-', '*'])
        .trim()
        .trim_end_matches(['.', '!'])
        .trim()
        .trim_matches('"')
        .to_lowercase();
    normalized.is_empty() || phrases.contains(&normalized.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            dish_name: "Kimchi Stew".into(),
            total_time: "40 minutes".into(),
            ingredients: vec!["Kimchi (300g)".into(), "Pork (200g)".into()],
            tools: vec!["Pot".into()],
            steps: vec!["Fry the pork.".into(), "Add kimchi and water.".into()],
            tips: "Use well-fermented kimchi.".into(),
        }
    }

    #[test]
    fn empty_recipe_uses_sentinels() {
        let r = Recipe::empty("");
        assert_eq!(r.dish_name, UNKNOWN_SENTINEL);
        assert_eq!(r.total_time, UNKNOWN_SENTINEL);
        assert_eq!(r.tips, NO_TIPS_SENTINEL);
        assert!(r.ingredients.is_empty());
        assert!(r.tools.is_empty());
        assert!(!r.has_steps());
        assert!(!r.has_tips());
    }

    #[test]
    fn empty_recipe_keeps_fallback_name() {
        assert_eq!(Recipe::empty("  bibimbap ").dish_name, "bibimbap");
    }

    #[test]
    fn json_uses_boundary_keys() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["dish_name", "ingredients", "steps", "tips", "tools", "total_time"]
        );
        assert!(obj["steps"].is_array());
        assert!(obj["tips"].is_string());
    }

    #[test]
    fn json_round_trip_reproduces_all_fields() {
        let original = sample();
        let back = Recipe::from_json(&original.to_json().unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn unknown_phrases_are_recognised() {
        assert!(is_unknown("Unknown"));
        assert!(is_unknown("unknown."));
        assert!(is_unknown("N/A"));
        assert!(is_unknown("정보 없음"));
        assert!(is_unknown(""));
        assert!(!is_unknown("30 minutes"));
        assert!(!is_unknown("약 30분"));
    }

    #[test]
    fn no_tips_phrases_are_recognised() {
        assert!(is_no_tips(""));
        assert!(is_no_tips("   "));
        assert!(is_no_tips("No special tips."));
        assert!(is_no_tips("- No special tips"));
        assert!(is_no_tips("\"No special tips\""));
        assert!(is_no_tips("특별한 팁 없음"));
        assert!(!is_no_tips("Serve hot."));
    }
}
