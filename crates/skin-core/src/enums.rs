//! Closed enumerations used across SkinSense.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SkinType
// ---------------------------------------------------------------------------

/// Skin-type classification produced by the quiz and used to tag options and products.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Sensitive,
    Normal,
}

impl SkinType {
    /// Every skin type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Dry,
        Self::Oily,
        Self::Combination,
        Self::Sensitive,
        Self::Normal,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Oily => "oily",
            Self::Combination => "combination",
            Self::Sensitive => "sensitive",
            Self::Normal => "normal",
        }
    }

    /// Human label, e.g. `"Combination"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Oily => "Oily",
            Self::Combination => "Combination",
            Self::Sensitive => "Sensitive",
            Self::Normal => "Normal",
        }
    }

    /// Resolve a stored tag. Matching is exact, as tags are stored lowercase.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|skin_type| skin_type.as_str() == tag)
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Product role inside a routine.
///
/// Each category owns a closed list of product-type keywords, tried in order.
/// A product qualifies when its free-text type contains the keyword,
/// ignoring case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Cleanser,
    Toner,
    Serum,
    Moisturizer,
    Sunscreen,
    Mask,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Cleanser,
        Self::Toner,
        Self::Serum,
        Self::Moisturizer,
        Self::Sunscreen,
        Self::Mask,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cleanser => "cleanser",
            Self::Toner => "toner",
            Self::Serum => "serum",
            Self::Moisturizer => "moisturizer",
            Self::Sunscreen => "sunscreen",
            Self::Mask => "mask",
        }
    }

    /// Accepted product-type keywords, lowercase, primary keyword first.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Cleanser => &["cleanser"],
            Self::Toner => &["toner"],
            Self::Serum => &["serum"],
            Self::Moisturizer => &["moisturizer", "cream"],
            Self::Sunscreen => &["sunscreen", "spf"],
            Self::Mask => &["mask"],
        }
    }

    /// Whether `product_type` contains `keyword`, ignoring case.
    #[must_use]
    pub fn type_matches_keyword(product_type: &str, keyword: &str) -> bool {
        product_type
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// Whether `product_type` matches any of this category's keywords.
    #[must_use]
    pub fn accepts(self, product_type: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| Self::type_matches_keyword(product_type, keyword))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RoutineKind
// ---------------------------------------------------------------------------

/// Which half of the day a routine plan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoutineKind {
    Morning,
    Night,
}

impl RoutineKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Night => "night",
        }
    }
}

impl fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RoutineSchedule
// ---------------------------------------------------------------------------

/// When a community-shared routine is meant to be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RoutineSchedule {
    Morning,
    Night,
    Both,
}

impl RoutineSchedule {
    pub const ALL: [Self; 3] = [Self::Morning, Self::Night, Self::Both];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Night => "night",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|schedule| schedule.as_str() == tag)
    }

    /// Whether a routine on this schedule belongs in the given half of the day.
    #[must_use]
    pub const fn covers(self, kind: RoutineKind) -> bool {
        matches!(
            (self, kind),
            (Self::Both, _)
                | (Self::Morning, RoutineKind::Morning)
                | (Self::Night, RoutineKind::Night)
        )
    }
}

impl fmt::Display for RoutineSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ProgressTrend
// ---------------------------------------------------------------------------

/// Direction of satisfaction ratings, recent half versus older half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTrend {
    Improving,
    Stable,
    Declining,
}

impl ProgressTrend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
        }
    }
}

impl fmt::Display for ProgressTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CartAction
// ---------------------------------------------------------------------------

/// Quantity change applied to a cart line.
///
/// ```text
/// increase: q → q + 1
/// decrease: q → q - 1   (q = 1 removes the line)
/// remove:   q → removed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CartAction {
    Increase,
    Decrease,
    Remove,
}

impl CartAction {
    /// Apply the action to a quantity. `None` means the line should be deleted.
    #[must_use]
    pub const fn apply(self, quantity: u32) -> Option<u32> {
        match self {
            Self::Increase => Some(quantity.saturating_add(1)),
            Self::Decrease if quantity > 1 => Some(quantity - 1),
            Self::Decrease | Self::Remove => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(skin_combination, SkinType, SkinType::Combination, "combination");
    test_serde_roundtrip!(skin_sensitive, SkinType, SkinType::Sensitive, "sensitive");
    test_serde_roundtrip!(category_sunscreen, Category, Category::Sunscreen, "sunscreen");
    test_serde_roundtrip!(routine_night, RoutineKind, RoutineKind::Night, "night");
    test_serde_roundtrip!(schedule_both, RoutineSchedule, RoutineSchedule::Both, "both");
    test_serde_roundtrip!(trend_declining, ProgressTrend, ProgressTrend::Declining, "declining");
    test_serde_roundtrip!(cart_decrease, CartAction, CartAction::Decrease, "decrease");

    // --- as_str / serde agreement ---

    #[test]
    fn skin_type_as_str_matches_serde() {
        for skin_type in SkinType::ALL {
            let json = serde_json::to_string(&skin_type).unwrap();
            assert_eq!(json, format!("\"{}\"", skin_type.as_str()));
        }
    }

    #[test]
    fn category_as_str_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn from_tag_resolves_every_variant() {
        for skin_type in SkinType::ALL {
            assert_eq!(SkinType::from_tag(skin_type.as_str()), Some(skin_type));
        }
        assert_eq!(SkinType::from_tag("leathery"), None);
        assert_eq!(SkinType::from_tag(""), None);
    }

    #[test]
    fn index_follows_declaration_order() {
        for (position, skin_type) in SkinType::ALL.into_iter().enumerate() {
            assert_eq!(skin_type.index(), position);
        }
    }

    #[test]
    fn schedule_covers_its_half_of_the_day() {
        assert!(RoutineSchedule::Both.covers(RoutineKind::Morning));
        assert!(RoutineSchedule::Both.covers(RoutineKind::Night));
        assert!(RoutineSchedule::Night.covers(RoutineKind::Night));
        assert!(!RoutineSchedule::Morning.covers(RoutineKind::Night));
        assert_eq!(RoutineSchedule::from_tag("night"), Some(RoutineSchedule::Night));
        assert_eq!(RoutineSchedule::from_tag("noon"), None);
    }

    // --- Category keywords ---

    #[test]
    fn keyword_match_ignores_case() {
        assert!(Category::Cleanser.accepts("CLEANSER"));
        assert!(Category::Cleanser.accepts("Foaming Cleanser Gel"));
        assert!(!Category::Cleanser.accepts("Toner"));
    }

    #[test]
    fn synonyms_are_accepted() {
        assert!(Category::Moisturizer.accepts("Night Cream"));
        assert!(Category::Sunscreen.accepts("SPF 50 Fluid"));
        assert!(!Category::Serum.accepts("Cream"));
    }

    #[test]
    fn primary_keyword_is_listed_first() {
        for category in Category::ALL {
            assert_eq!(category.keywords()[0], category.as_str());
        }
    }

    // --- Cart actions ---

    #[test]
    fn cart_action_transitions() {
        assert_eq!(CartAction::Increase.apply(1), Some(2));
        assert_eq!(CartAction::Decrease.apply(3), Some(2));
        assert_eq!(CartAction::Decrease.apply(1), None);
        assert_eq!(CartAction::Remove.apply(7), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(SkinType::Oily.to_string(), "oily");
        assert_eq!(Category::Mask.to_string(), "mask");
        assert_eq!(ProgressTrend::Stable.to_string(), "stable");
    }
}
