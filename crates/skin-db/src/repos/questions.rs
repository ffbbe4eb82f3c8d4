//! Question repository: quiz questions and their options.

use skin_core::entities::{Question, QuizOption};
use skin_core::enums::SkinType;

use crate::error::DatabaseError;
use crate::helpers::parse_enum;
use crate::service::SkinService;

fn row_to_option(row: &libsql::Row) -> Result<QuizOption, DatabaseError> {
    Ok(QuizOption {
        id: row.get::<i64>(0)?,
        question_id: row.get::<i64>(1)?,
        text: row.get::<String>(2)?,
        skin_type: parse_enum(&row.get::<String>(3)?)?,
    })
}

impl SkinService {
    /// Insert a question with its options, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if an insert fails.
    pub async fn insert_question(
        &self,
        text: &str,
        options: &[(&str, SkinType)],
    ) -> Result<Question, DatabaseError> {
        let conn = self.db().conn();
        conn.execute("INSERT INTO questions (text) VALUES (?1)", [text])
            .await?;
        let question_id = conn.last_insert_rowid();

        let mut inserted = Vec::with_capacity(options.len());
        for (option_text, skin_type) in options {
            conn.execute(
                "INSERT INTO options (question_id, text, skin_type) VALUES (?1, ?2, ?3)",
                libsql::params![question_id, *option_text, skin_type.as_str()],
            )
            .await?;
            inserted.push(QuizOption {
                id: conn.last_insert_rowid(),
                question_id,
                text: (*option_text).to_string(),
                skin_type: *skin_type,
            });
        }

        Ok(Question {
            id: question_id,
            text: text.to_string(),
            options: inserted,
        })
    }

    /// Load one question with its options (option id ascending).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if no question has this id.
    pub async fn get_question(&self, id: i64) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, text FROM questions WHERE id = ?1", [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("question", id))?;
        let text = row.get::<String>(1)?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, question_id, text, skin_type FROM options
                 WHERE question_id = ?1 ORDER BY id",
                [id],
            )
            .await?;
        let mut options = Vec::new();
        while let Some(row) = rows.next().await? {
            options.push(row_to_option(&row)?);
        }

        Ok(Question { id, text, options })
    }

    /// Every question in ascending id order, each with its options.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, text FROM questions ORDER BY id", ())
            .await?;
        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(Question {
                id: row.get::<i64>(0)?,
                text: row.get::<String>(1)?,
                options: Vec::new(),
            });
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, question_id, text, skin_type FROM options ORDER BY question_id, id",
                (),
            )
            .await?;
        while let Some(row) = rows.next().await? {
            let option = row_to_option(&row)?;
            if let Some(question) = questions.iter_mut().find(|q| q.id == option.question_id) {
                question.options.push(option);
            }
        }

        Ok(questions)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_questions(&self) -> Result<usize, DatabaseError> {
        self.db().count("SELECT COUNT(*) FROM questions", ()).await
    }

    /// The question with the lowest id, if any exist.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn first_question(&self) -> Result<Option<Question>, DatabaseError> {
        self.question_after(0).await
    }

    /// The question following `question_id` in id order, or `None` after the last.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn next_question_after(
        &self,
        question_id: i64,
    ) -> Result<Option<Question>, DatabaseError> {
        self.question_after(question_id).await
    }

    /// 1-based position of `question_id` within the quiz.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn question_position(&self, question_id: i64) -> Result<usize, DatabaseError> {
        self.db()
            .count("SELECT COUNT(*) FROM questions WHERE id <= ?1", [question_id])
            .await
    }

    async fn question_after(&self, question_id: i64) -> Result<Option<Question>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id FROM questions WHERE id > ?1 ORDER BY id LIMIT 1",
                [question_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(self.get_question(row.get::<i64>(0)?).await?)),
            None => Ok(None),
        }
    }
}
