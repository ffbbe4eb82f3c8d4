//! Per-skin-type guidance shown alongside both routines.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SkinType;

/// Guidance for one skin type. The default value (all fields empty) is what
/// unrecognized tags get.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkinTips {
    pub focus: String,
    pub avoid: String,
    pub key_ingredients: String,
}

impl SkinTips {
    /// Whether this is the empty fallback.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.focus.is_empty() && self.avoid.is_empty() && self.key_ingredients.is_empty()
    }

    #[must_use]
    pub fn for_skin_type(skin_type: SkinType) -> Self {
        let (focus, avoid, key_ingredients) = match skin_type {
            SkinType::Dry => (
                "Hydration and moisture retention",
                "Harsh cleansers and alcohol-based products",
                "Hyaluronic acid, Ceramides, Glycerin",
            ),
            SkinType::Oily => (
                "Oil control and pore refinement",
                "Heavy creams and comedogenic oils",
                "Salicylic acid, Niacinamide, Tea tree oil",
            ),
            SkinType::Combination => (
                "Balance hydration and oil control",
                "Products that are too harsh or too heavy",
                "Hyaluronic acid, Niacinamide, Vitamin C",
            ),
            SkinType::Sensitive => (
                "Gentle care and barrier protection",
                "Fragrances, harsh acids, and irritants",
                "Centella, Ceramides, Aloe vera",
            ),
            SkinType::Normal => (
                "Maintaining balance and prevention",
                "Over-exfoliation and harsh treatments",
                "Vitamin C, Hyaluronic acid, Antioxidants",
            ),
        };
        Self {
            focus: focus.to_string(),
            avoid: avoid.to_string(),
            key_ingredients: key_ingredients.to_string(),
        }
    }

    /// Look up guidance by raw tag; unknown tags get empty guidance.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        SkinType::from_tag(tag).map_or_else(Self::default, Self::for_skin_type)
    }
}
