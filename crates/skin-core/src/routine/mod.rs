//! Routine generation.
//!
//! Given a skin type and the product catalog, pick one product per
//! [`Category`] and fill the fixed morning and night templates. Output is a
//! pure function of the inputs; nothing is cached or persisted.
//!
//! Selection rule per category: try each keyword in [`Category::keywords`]
//! order; for a keyword, the first catalog product (slice order) tagged with
//! the skin type whose `product_type` contains the keyword wins. Callers pass
//! the catalog in ascending id order.

mod templates;
mod tips;

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Product;
use crate::enums::{Category, RoutineKind, SkinType};
use templates::{DEFAULT_INGREDIENTS, MORNING, NIGHT, RoutineTemplate, TipText};

pub use tips::SkinTips;

/// One step of a routine plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoutineStep {
    /// 1-based position within the routine.
    pub step: u8,
    pub category: Category,
    pub name: String,
    pub time: String,
    pub icon: String,
    pub instructions: String,
    pub tip: String,
    pub product: Option<Product>,
}

/// An ordered morning or night routine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoutinePlan {
    pub kind: RoutineKind,
    pub title: String,
    pub subtitle: String,
    pub total_time: String,
    pub steps: Vec<RoutineStep>,
    pub tips: SkinTips,
}

impl RoutinePlan {
    /// Steps that have a catalog product attached.
    pub fn stocked_steps(&self) -> impl Iterator<Item = &RoutineStep> {
        self.steps.iter().filter(|step| step.product.is_some())
    }
}

/// The pair of plans produced per request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Routines {
    pub morning: RoutinePlan,
    pub night: RoutinePlan,
}

/// Find the product that represents `category` for the skin type `tag`.
#[must_use]
pub fn select_product<'a>(
    catalog: &'a [Product],
    tag: &str,
    category: Category,
) -> Option<&'a Product> {
    category.keywords().iter().find_map(|keyword| {
        catalog.iter().find(|product| {
            product.skin_type.as_str() == tag
                && Category::type_matches_keyword(&product.product_type, keyword)
        })
    })
}

/// Select a product for every category that has one.
#[must_use]
pub fn select_products<'a>(
    catalog: &'a [Product],
    tag: &str,
) -> BTreeMap<Category, &'a Product> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let picked = select_product(catalog, tag, category);
            if picked.is_none() {
                tracing::debug!(tag, %category, "no catalog product for category");
            }
            picked.map(|product| (category, product))
        })
        .collect()
}

/// Build the morning and night routines for a skin type.
#[must_use]
pub fn generate_routines(skin_type: SkinType, catalog: &[Product]) -> Routines {
    generate_routines_for_tag(skin_type.as_str(), catalog)
}

/// Build routines from a raw skin-type tag.
///
/// Unrecognized tags never fail: they get empty guidance and, since no
/// product carries such a tag, five steps each with no product attached.
#[must_use]
pub fn generate_routines_for_tag(tag: &str, catalog: &[Product]) -> Routines {
    let tips = SkinTips::for_tag(tag);
    let picks = select_products(catalog, tag);
    Routines {
        morning: build_plan(&MORNING, &picks, &tips),
        night: build_plan(&NIGHT, &picks, &tips),
    }
}

fn build_plan(
    template: &RoutineTemplate,
    picks: &BTreeMap<Category, &Product>,
    tips: &SkinTips,
) -> RoutinePlan {
    let steps = template
        .steps
        .iter()
        .zip(1_u8..)
        .map(|(step, position)| RoutineStep {
            step: position,
            category: step.category,
            name: step.name.to_string(),
            time: step.time.to_string(),
            icon: step.icon.to_string(),
            instructions: step.instructions.to_string(),
            tip: render_tip(step.tip, tips),
            product: picks.get(&step.category).map(|product| (*product).clone()),
        })
        .collect();

    RoutinePlan {
        kind: template.kind,
        title: template.title.to_string(),
        subtitle: template.subtitle.to_string(),
        total_time: template.total_time.to_string(),
        steps,
        tips: tips.clone(),
    }
}

fn render_tip(tip: TipText, tips: &SkinTips) -> String {
    match tip {
        TipText::Fixed(text) => text.to_string(),
        TipText::KeyIngredients => {
            let ingredients = if tips.key_ingredients.is_empty() {
                DEFAULT_INGREDIENTS
            } else {
                tips.key_ingredients.as_str()
            };
            format!("Focus on {ingredients}.")
        }
    }
}
