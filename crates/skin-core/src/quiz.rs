//! Quiz scoring.
//!
//! A user's answers are a plurality vote over skin types. `QuizSession` holds
//! the in-progress answers for one user as an explicit value: `start` begins
//! empty, `answer` upserts per question, `complete` freezes the answers into an
//! [`AnswerSet`] carrying the winning skin type.
//!
//! Ordering is explicit: answers are kept by ascending question id, and that
//! order decides ties.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Question, QuizOption};
use crate::enums::SkinType;
use crate::errors::QuizError;

/// One recorded answer, resolved to the chosen option's skin-type tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerChoice {
    pub question_id: i64,
    pub option_id: i64,
    pub skin_type: SkinType,
}

impl AnswerChoice {
    #[must_use]
    pub const fn from_option(option: &QuizOption) -> Self {
        Self {
            question_id: option.question_id,
            option_id: option.id,
            skin_type: option.skin_type,
        }
    }
}

/// Pick the skin type with the most votes.
///
/// Ties go to the tied skin type that appears first in `answers`.
///
/// # Errors
///
/// Returns `QuizError::NoAnswers` when `answers` is empty.
pub fn aggregate_skin_type(answers: &[AnswerChoice]) -> Result<SkinType, QuizError> {
    let mut counts = [0_usize; SkinType::ALL.len()];
    for answer in answers {
        counts[answer.skin_type.index()] += 1;
    }

    let max = counts.iter().copied().max().unwrap_or(0);
    answers
        .iter()
        .map(|answer| answer.skin_type)
        .find(|skin_type| counts[skin_type.index()] == max)
        .ok_or(QuizError::NoAnswers)
}

/// Per-skin-type vote counts, in [`SkinType::ALL`] order.
#[must_use]
pub fn tally(answers: &[AnswerChoice]) -> Vec<(SkinType, usize)> {
    SkinType::ALL
        .into_iter()
        .map(|skin_type| {
            let count = answers
                .iter()
                .filter(|answer| answer.skin_type == skin_type)
                .count();
            (skin_type, count)
        })
        .collect()
}

/// In-progress quiz answers for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizSession {
    user_id: String,
    answers: BTreeMap<i64, AnswerChoice>,
}

impl QuizSession {
    /// Begin a quiz with no answers. Replacing a user's session with a fresh one
    /// is how a restart clears earlier answers.
    #[must_use]
    pub fn start(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            answers: BTreeMap::new(),
        }
    }

    /// Rebuild a session from stored answers. Later duplicates for the same
    /// question replace earlier ones.
    #[must_use]
    pub fn restore(
        user_id: impl Into<String>,
        answers: impl IntoIterator<Item = AnswerChoice>,
    ) -> Self {
        let mut session = Self::start(user_id);
        for answer in answers {
            session.answers.insert(answer.question_id, answer);
        }
        session
    }

    /// Record the option chosen for `question`, replacing any earlier answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OptionMismatch` if `option_id` is not one of the
    /// question's options.
    pub fn answer(
        &mut self,
        question: &Question,
        option_id: i64,
    ) -> Result<AnswerChoice, QuizError> {
        let option = question.option(option_id).ok_or(QuizError::OptionMismatch {
            question_id: question.id,
            option_id,
        })?;
        let choice = AnswerChoice::from_option(option);
        if self.answers.insert(question.id, choice).is_some() {
            tracing::debug!(user = %self.user_id, question = question.id, "answer replaced");
        }
        Ok(choice)
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Answers in ascending question id order.
    pub fn answers(&self) -> impl Iterator<Item = &AnswerChoice> {
        self.answers.values()
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// How far through a quiz of `total` questions this session is.
    #[must_use]
    pub fn progress(&self, total: usize) -> QuizProgress {
        QuizProgress::new(self.answered(), total)
    }

    /// Freeze the answers and score them.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoAnswers` when nothing has been answered.
    pub fn complete(&self) -> Result<AnswerSet, QuizError> {
        let answers: Vec<AnswerChoice> = self.answers.values().copied().collect();
        let skin_type = aggregate_skin_type(&answers)?;
        tracing::info!(user = %self.user_id, %skin_type, answers = answers.len(), "quiz completed");
        Ok(AnswerSet {
            user_id: self.user_id.clone(),
            answers,
            skin_type,
        })
    }
}

/// A completed, non-empty set of answers and the skin type they add up to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerSet {
    pub user_id: String,
    pub answers: Vec<AnswerChoice>,
    pub skin_type: SkinType,
}

/// Position within the quiz, for "question 2 of 5" displays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizProgress {
    pub current: usize,
    pub total: usize,
    pub percent: u8,
}

impl QuizProgress {
    /// `current` is 1-based. Percent is truncated, and 0 when there are no questions.
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            u8::try_from((current.min(total) * 100) / total).unwrap_or(100)
        };
        Self {
            current,
            total,
            percent,
        }
    }
}
