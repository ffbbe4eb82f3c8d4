use clap::Subcommand;

/// Quiz commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// Clear earlier answers and show the first question
    Start,
    /// Show one question with its options
    Question {
        /// Question ID
        id: i64,
    },
    /// Record the chosen option for a question
    Answer {
        /// Question ID
        question_id: i64,
        /// Option ID
        option_id: i64,
    },
    /// Show how many questions have been answered
    Status,
    /// Score the answers and show the matching routines
    Result,
}
