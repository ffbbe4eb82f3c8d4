use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Lowest and highest accepted value for every progress rating.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// A dated skin-condition log entry. All ratings are on a 1-10 scale where
/// higher is better (10 = no breakouts, 10 = no redness).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgressEntry {
    pub id: i64,
    pub user_id: String,
    pub date: NaiveDate,
    pub satisfaction_rating: u8,
    pub hydration_level: u8,
    pub clarity: u8,
    pub breakouts: u8,
    pub redness: u8,
    pub notes: Option<String>,
    pub routine_followed: bool,
}

impl ProgressEntry {
    /// Mean of the four condition metrics, rounded to one decimal.
    #[must_use]
    pub fn overall_condition(&self) -> f64 {
        let sum = u32::from(self.hydration_level)
            + u32::from(self.clarity)
            + u32::from(self.breakouts)
            + u32::from(self.redness);
        crate::progress::round1(f64::from(sum) / 4.0)
    }
}

/// Ratings submitted for a new progress entry, before storage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProgressEntry {
    pub satisfaction_rating: u8,
    pub hydration_level: u8,
    pub clarity: u8,
    pub breakouts: u8,
    pub redness: u8,
    pub notes: Option<String>,
    pub routine_followed: bool,
}

impl NewProgressEntry {
    /// Check every rating lies in [`RATING_RANGE`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first out-of-range field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let fields = [
            ("satisfaction_rating", self.satisfaction_rating),
            ("hydration_level", self.hydration_level),
            ("clarity", self.clarity),
            ("breakouts", self.breakouts),
            ("redness", self.redness),
        ];
        for (field, value) in fields {
            if !RATING_RANGE.contains(&value) {
                return Err(CoreError::Validation(format!(
                    "{field} must be between {} and {}, got {value}",
                    RATING_RANGE.start(),
                    RATING_RANGE.end()
                )));
            }
        }
        Ok(())
    }
}
