use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Product;
use crate::enums::{RoutineSchedule, SkinType};
use crate::errors::CoreError;

/// Star scale shared by the overall rating, effectiveness and value for money.
pub const REVIEW_RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Neutral score used when a reviewer skips effectiveness or value for money.
pub const DEFAULT_SUB_RATING: u8 = 3;

/// A user's review of a catalog product. A user reviews a product at most once.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub user_id: String,
    pub rating: u8,
    pub title: String,
    pub body: String,
    /// The reviewer's own skin type, which may differ from the product's tag.
    pub skin_type: SkinType,
    pub effectiveness: u8,
    pub value_for_money: u8,
    /// Free text, e.g. "3 months".
    pub usage_duration: String,
    pub would_recommend: bool,
    pub helpful_count: u32,
    pub created_at: NaiveDateTime,
}

/// Fields submitted with a new review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewReview {
    pub rating: u8,
    pub title: String,
    pub body: String,
    pub skin_type: SkinType,
    pub effectiveness: u8,
    pub value_for_money: u8,
    pub usage_duration: String,
    pub would_recommend: bool,
}

impl NewReview {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a star score outside
    /// [`REVIEW_RATING_RANGE`] or a blank title.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("rating", self.rating),
            ("effectiveness", self.effectiveness),
            ("value_for_money", self.value_for_money),
        ] {
            if !REVIEW_RATING_RANGE.contains(&value) {
                return Err(CoreError::Validation(format!(
                    "{field} must be between {} and {}, got {value}",
                    REVIEW_RATING_RANGE.start(),
                    REVIEW_RATING_RANGE.end()
                )));
            }
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        Ok(())
    }
}

/// One step of a shared routine. `product` is cleared when the product is
/// deleted from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SharedStep {
    pub step_number: u32,
    pub name: String,
    pub instructions: String,
    pub product: Option<Product>,
}

/// A routine a user has published for others to browse and like.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SharedRoutine {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub skin_type: SkinType,
    pub schedule: RoutineSchedule,
    pub is_public: bool,
    pub likes_count: u32,
    pub views_count: u32,
    pub created_at: NaiveDateTime,
    /// Ordered by `step_number`.
    pub steps: Vec<SharedStep>,
}

/// A step as submitted. Steps missing a name or instructions are dropped.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewSharedStep {
    pub name: String,
    pub instructions: String,
    pub product_id: Option<i64>,
}

impl NewSharedStep {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() || self.instructions.trim().is_empty()
    }
}

/// Fields submitted when sharing a routine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewSharedRoutine {
    pub title: String,
    pub description: String,
    pub skin_type: SkinType,
    pub schedule: RoutineSchedule,
    pub is_public: bool,
    pub steps: Vec<NewSharedStep>,
}

impl NewSharedRoutine {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank title.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        Ok(())
    }

    /// Steps worth storing, paired with their 1-based position in the
    /// submission. Dropped steps leave a gap in the numbering.
    pub fn numbered_steps(&self) -> impl Iterator<Item = (u32, &NewSharedStep)> {
        (1u32..)
            .zip(self.steps.iter())
            .filter(|(_, step)| !step.is_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_review() -> NewReview {
        NewReview {
            rating: 4,
            title: "Calmed my redness".into(),
            body: "Two weeks in and far less irritation.".into(),
            skin_type: SkinType::Sensitive,
            effectiveness: DEFAULT_SUB_RATING,
            value_for_money: DEFAULT_SUB_RATING,
            usage_duration: "2 weeks".into(),
            would_recommend: true,
        }
    }

    fn step(name: &str, instructions: &str) -> NewSharedStep {
        NewSharedStep {
            name: name.into(),
            instructions: instructions.into(),
            product_id: None,
        }
    }

    #[test]
    fn valid_review_passes() {
        assert!(new_review().validate().is_ok());
    }

    #[test]
    fn review_scores_are_five_star() {
        let review = NewReview {
            rating: 6,
            ..new_review()
        };
        let err = review.validate().unwrap_err();
        assert!(err.to_string().contains("rating must be between 1 and 5"));

        let review = NewReview {
            value_for_money: 0,
            ..new_review()
        };
        assert!(review.validate().unwrap_err().to_string().contains("value_for_money"));
    }

    #[test]
    fn blank_review_title_is_rejected() {
        let review = NewReview {
            title: " ".into(),
            ..new_review()
        };
        assert!(matches!(review.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn blank_steps_are_skipped_and_leave_gaps() {
        let routine = NewSharedRoutine {
            title: "Glass skin AM".into(),
            description: String::new(),
            skin_type: SkinType::Dry,
            schedule: RoutineSchedule::Morning,
            is_public: true,
            steps: vec![
                step("Cleanse", "Lukewarm water, gentle gel"),
                step("Tone", ""),
                step("", "Pat in"),
                step("Moisturize", "Two pumps"),
            ],
        };
        let numbered: Vec<(u32, &str)> = routine
            .numbered_steps()
            .map(|(number, step)| (number, step.name.as_str()))
            .collect();
        assert_eq!(numbered, vec![(1, "Cleanse"), (4, "Moisturize")]);
    }
}
