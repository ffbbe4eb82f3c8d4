//! Quiz repository: per-user answers and scoring.
//!
//! Answers are stored one row per (user, question). The stored rows are the
//! persisted form of a `QuizSession`; every operation here rebuilds or
//! updates that session rather than keeping state between calls.

use skin_core::entities::Question;
use skin_core::enums::SkinType;
use skin_core::quiz::{AnswerChoice, QuizProgress, QuizSession};
use skin_core::responses::{
    AnswerRecordedResponse, QuestionView, QuizResultResponse, RoutineResponse,
};
use skin_core::routine::{SkinTips, generate_routines, generate_routines_for_tag};

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::service::SkinService;

fn row_to_choice(row: &libsql::Row) -> Result<AnswerChoice, DatabaseError> {
    Ok(AnswerChoice {
        question_id: row.get::<i64>(0)?,
        option_id: row.get::<i64>(1)?,
        skin_type: parse_enum(&row.get::<String>(2)?)?,
    })
}

impl SkinService {
    /// Clear the user's answers and return the first question.
    ///
    /// Returns `None` when no questions have been seeded.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn start_quiz(&self, user_id: &str) -> Result<Option<QuestionView>, DatabaseError> {
        let cleared = self
            .db()
            .conn()
            .execute("DELETE FROM answers WHERE user_id = ?1", [user_id])
            .await?;
        tracing::info!(user = user_id, cleared, "quiz started");

        match self.first_question().await? {
            Some(question) => Ok(Some(self.view_of(question).await?)),
            None => Ok(None),
        }
    }

    /// A question together with its position in the quiz.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if no question has this id.
    pub async fn question_view(&self, question_id: i64) -> Result<QuestionView, DatabaseError> {
        let question = self.get_question(question_id).await?;
        self.view_of(question).await
    }

    async fn view_of(&self, question: Question) -> Result<QuestionView, DatabaseError> {
        let current = self.question_position(question.id).await?;
        let total = self.count_questions().await?;
        Ok(QuestionView {
            question,
            progress: QuizProgress::new(current, total),
        })
    }

    /// Rebuild the user's quiz session from stored answers.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn load_quiz_session(&self, user_id: &str) -> Result<QuizSession, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT a.question_id, a.option_id, o.skin_type
                 FROM answers a JOIN options o ON o.id = a.option_id
                 WHERE a.user_id = ?1 ORDER BY a.question_id",
                [user_id],
            )
            .await?;
        let mut answers = Vec::new();
        while let Some(row) = rows.next().await? {
            answers.push(row_to_choice(&row)?);
        }
        Ok(QuizSession::restore(user_id, answers))
    }

    /// Record (or replace) the user's answer to a question and point at the
    /// next one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) for an unknown question, or
    /// `QuizError::OptionMismatch` (wrapped) when the option belongs to a
    /// different question.
    pub async fn record_answer(
        &self,
        user_id: &str,
        question_id: i64,
        option_id: i64,
    ) -> Result<AnswerRecordedResponse, DatabaseError> {
        let question = self.get_question(question_id).await?;
        let mut session = self.load_quiz_session(user_id).await?;
        let recorded = session.answer(&question, option_id)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO answers (user_id, question_id, option_id) VALUES (?1, ?2, ?3)
                 ON CONFLICT(user_id, question_id)
                 DO UPDATE SET option_id = excluded.option_id, answered_at = datetime('now')",
                libsql::params![user_id, question_id, option_id],
            )
            .await?;

        let next = match self.next_question_after(question_id).await? {
            Some(question) => Some(self.view_of(question).await?),
            None => None,
        };
        Ok(AnswerRecordedResponse {
            recorded,
            complete: next.is_none(),
            next,
        })
    }

    /// Score the user's answers and build their routines from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoAnswers` (wrapped) when the user has not answered
    /// anything since the last `start_quiz`.
    pub async fn quiz_result(&self, user_id: &str) -> Result<QuizResultResponse, DatabaseError> {
        let session = self.load_quiz_session(user_id).await?;
        let answers = session.complete()?;
        let skin_type = answers.skin_type;

        let products = self.products_for_skin_type(skin_type).await?;
        let routines = generate_routines(skin_type, &products);
        Ok(QuizResultResponse {
            skin_type,
            answers: answers.answers.len(),
            tips: SkinTips::for_skin_type(skin_type),
            morning_routine: routines.morning,
            night_routine: routines.night,
            products,
        })
    }

    /// Routines for a skin-type tag without taking the quiz.
    ///
    /// Unknown tags are not an error: they produce empty tips and steps with
    /// no products.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the catalog query fails.
    pub async fn routine_for_tag(&self, tag: &str) -> Result<RoutineResponse, DatabaseError> {
        if SkinType::from_tag(tag).is_none() {
            tracing::warn!(tag, "unrecognized skin type; routine will have no products");
        }
        let products = self.products_for_tag(tag).await?;
        let routines = generate_routines_for_tag(tag, &products);
        Ok(RoutineResponse {
            skin_type: tag.to_string(),
            tips: SkinTips::for_tag(tag),
            morning_routine: routines.morning,
            night_routine: routines.night,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skin_core::errors::QuizError;

    use super::*;
    use crate::test_support::helpers::{seeded_service, test_service};

    fn option_for(view: &QuestionView, skin_type: SkinType) -> i64 {
        view.question
            .options
            .iter()
            .find(|o| o.skin_type == skin_type)
            .map(|o| o.id)
            .unwrap()
    }

    #[tokio::test]
    async fn start_returns_first_question_with_progress() {
        let svc = seeded_service().await;
        let view = svc.start_quiz("local").await.unwrap().unwrap();
        assert_eq!(view.question.text, "How does your skin feel after cleansing?");
        assert_eq!(view.progress.current, 1);
        assert_eq!(view.progress.total, 5);
        assert_eq!(view.progress.percent, 20);
    }

    #[tokio::test]
    async fn start_without_questions_is_none() {
        let svc = test_service().await;
        assert!(svc.start_quiz("local").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn answering_walks_to_completion() {
        let svc = seeded_service().await;
        let mut view = svc.start_quiz("local").await.unwrap().unwrap();
        let mut steps = 0;
        loop {
            let option = option_for(&view, SkinType::Oily);
            let recorded = svc
                .record_answer("local", view.question.id, option)
                .await
                .unwrap();
            steps += 1;
            assert_eq!(recorded.recorded.skin_type, SkinType::Oily);
            match recorded.next {
                Some(next) => {
                    assert!(!recorded.complete);
                    view = next;
                }
                None => {
                    assert!(recorded.complete);
                    break;
                }
            }
        }
        assert_eq!(steps, 5);

        let result = svc.quiz_result("local").await.unwrap();
        assert_eq!(result.skin_type, SkinType::Oily);
        assert_eq!(result.answers, 5);
        assert_eq!(result.morning_routine.steps.len(), 5);
        assert!(result.products.iter().all(|p| p.skin_type == SkinType::Oily));
    }

    #[tokio::test]
    async fn reanswer_replaces_previous_choice() {
        let svc = seeded_service().await;
        let view = svc.start_quiz("local").await.unwrap().unwrap();
        let qid = view.question.id;
        svc.record_answer("local", qid, option_for(&view, SkinType::Dry))
            .await
            .unwrap();
        svc.record_answer("local", qid, option_for(&view, SkinType::Normal))
            .await
            .unwrap();

        let session = svc.load_quiz_session("local").await.unwrap();
        assert_eq!(session.answered(), 1);
        assert_eq!(
            svc.quiz_result("local").await.unwrap().skin_type,
            SkinType::Normal
        );
    }

    #[tokio::test]
    async fn foreign_option_is_rejected() {
        let svc = seeded_service().await;
        let first = svc.start_quiz("local").await.unwrap().unwrap();
        let second = svc.question_view(first.question.id + 1).await.unwrap();
        let foreign = second.question.options[0].id;

        let err = svc
            .record_answer("local", first.question.id, foreign)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Quiz(QuizError::OptionMismatch { .. })
        ));
        assert!(svc.load_quiz_session("local").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn restart_clears_answers() {
        let svc = seeded_service().await;
        let view = svc.start_quiz("local").await.unwrap().unwrap();
        svc.record_answer("local", view.question.id, option_for(&view, SkinType::Dry))
            .await
            .unwrap();

        svc.start_quiz("local").await.unwrap();
        let err = svc.quiz_result("local").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Quiz(QuizError::NoAnswers)));
    }

    #[tokio::test]
    async fn answers_are_per_user() {
        let svc = seeded_service().await;
        let view = svc.start_quiz("alice").await.unwrap().unwrap();
        svc.record_answer("alice", view.question.id, option_for(&view, SkinType::Dry))
            .await
            .unwrap();

        svc.start_quiz("bob").await.unwrap();
        assert_eq!(svc.quiz_result("alice").await.unwrap().skin_type, SkinType::Dry);
        assert!(svc.quiz_result("bob").await.is_err());
    }

    #[tokio::test]
    async fn routine_for_unknown_tag_is_empty_not_error() {
        let svc = seeded_service().await;
        let routine = svc.routine_for_tag("oilyish").await.unwrap();
        assert!(routine.tips.is_empty());
        assert_eq!(routine.morning_routine.steps.len(), 5);
        assert!(routine.morning_routine.steps.iter().all(|s| s.product.is_none()));
        assert!(routine.night_routine.steps.iter().all(|s| s.product.is_none()));
    }

    #[tokio::test]
    async fn routine_for_seeded_dry_catalog() {
        let svc = seeded_service().await;
        let routine = svc.routine_for_tag("dry").await.unwrap();
        let morning: Vec<Option<&str>> = routine
            .morning_routine
            .steps
            .iter()
            .map(|s| s.product.as_ref().map(|p| p.name.as_str()))
            .collect();
        assert_eq!(
            morning,
            vec![
                Some("Hydrating Facial Cleanser"),
                None,
                Some("Midnight Recovery Concentrate"),
                Some("Ultra Facial Cream"),
                None,
            ]
        );
    }
}
