//! Fixed step templates for the morning and night routines.

use crate::enums::{Category, RoutineKind};

/// Tip text for a step. Most are literal; the morning serum step names the
/// skin type's key ingredients.
#[derive(Debug, Clone, Copy)]
pub(crate) enum TipText {
    Fixed(&'static str),
    KeyIngredients,
}

/// Fallback for [`TipText::KeyIngredients`] when the skin type has no guidance.
pub(crate) const DEFAULT_INGREDIENTS: &str = "beneficial ingredients";

#[derive(Debug, Clone, Copy)]
pub(crate) struct StepTemplate {
    pub category: Category,
    pub name: &'static str,
    pub time: &'static str,
    pub icon: &'static str,
    pub instructions: &'static str,
    pub tip: TipText,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RoutineTemplate {
    pub kind: RoutineKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub total_time: &'static str,
    pub steps: [StepTemplate; 5],
}

pub(crate) const MORNING: RoutineTemplate = RoutineTemplate {
    kind: RoutineKind::Morning,
    title: "Morning Skincare Routine",
    subtitle: "Start your day with fresh, protected skin",
    total_time: "8-10 minutes",
    steps: [
        StepTemplate {
            category: Category::Cleanser,
            name: "Gentle Cleanser",
            time: "1-2 min",
            icon: "💧",
            instructions: "Wash your face with lukewarm water and a gentle cleanser. Massage in circular motions for 60 seconds.",
            tip: TipText::Fixed("Use lukewarm water, not hot, to avoid stripping natural oils."),
        },
        StepTemplate {
            category: Category::Toner,
            name: "Toner (Optional)",
            time: "30 sec",
            icon: "✨",
            instructions: "Apply toner with a cotton pad or pat gently with hands to balance pH and prep skin.",
            tip: TipText::Fixed("Pat, don't rub! This helps with better absorption."),
        },
        StepTemplate {
            category: Category::Serum,
            name: "Serum/Treatment",
            time: "1 min",
            icon: "💎",
            instructions: "Apply 2-3 drops of serum to face and neck. Press gently into skin.",
            tip: TipText::KeyIngredients,
        },
        StepTemplate {
            category: Category::Moisturizer,
            name: "Moisturizer",
            time: "1-2 min",
            icon: "🌸",
            instructions: "Apply moisturizer evenly to lock in hydration. Use upward motions.",
            tip: TipText::Fixed("Wait 1 minute before applying sunscreen for better absorption."),
        },
        StepTemplate {
            category: Category::Sunscreen,
            name: "Sunscreen (SPF 30+)",
            time: "1-2 min",
            icon: "☀️",
            instructions: "Apply generous amount of sunscreen (2 finger lengths) to face and neck. Wait 15 min before sun exposure.",
            tip: TipText::Fixed("Reapply every 2 hours if outdoors! This is the most important step."),
        },
    ],
};

pub(crate) const NIGHT: RoutineTemplate = RoutineTemplate {
    kind: RoutineKind::Night,
    title: "Night Skincare Routine",
    subtitle: "Repair and rejuvenate while you sleep",
    total_time: "10-15 minutes",
    steps: [
        StepTemplate {
            category: Category::Cleanser,
            name: "Double Cleanse",
            time: "2-3 min",
            icon: "🧼",
            instructions: "First, remove makeup/sunscreen with cleansing oil/balm. Then, use your regular cleanser to deep clean.",
            tip: TipText::Fixed("Double cleansing ensures all impurities are removed for better overnight repair."),
        },
        StepTemplate {
            category: Category::Toner,
            name: "Toner",
            time: "30 sec",
            icon: "✨",
            instructions: "Apply toner to rebalance and prepare skin for treatments.",
            tip: TipText::Fixed("Use a hydrating toner at night for extra nourishment and repair."),
        },
        StepTemplate {
            category: Category::Serum,
            name: "Night Serum/Treatment",
            time: "1-2 min",
            icon: "🌟",
            instructions: "Apply treatment serums targeting your specific concerns (anti-aging, brightening, etc.).",
            tip: TipText::Fixed("Night is best for active ingredients like retinol and AHAs that work while you sleep."),
        },
        StepTemplate {
            category: Category::Moisturizer,
            name: "Night Cream",
            time: "1-2 min",
            icon: "🌙",
            instructions: "Apply a richer night cream to support skin repair and regeneration overnight.",
            tip: TipText::Fixed("Night creams are typically thicker and more nourishing to lock in moisture."),
        },
        StepTemplate {
            category: Category::Mask,
            name: "Weekly Mask (2-3x)",
            time: "15-20 min",
            icon: "🎭",
            instructions: "Use a treatment mask 2-3 times per week after cleansing. Follow with serum and moisturizer.",
            tip: TipText::Fixed("Do this step 2-3 times per week, not daily. Perfect for relaxing before bed."),
        },
    ],
};
