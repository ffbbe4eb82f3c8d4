use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SkinType;

/// A quiz prompt. Questions are asked in ascending `id` order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Look up one of this question's options.
    #[must_use]
    pub fn option(&self, option_id: i64) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// One selectable answer to a question, tagged with the skin type it votes for.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizOption {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub skin_type: SkinType,
}
