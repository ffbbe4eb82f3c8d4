use skin_core::errors::QuizError;
use skin_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = match ctx.service.quiz_result(&ctx.user).await {
        Ok(result) => result,
        Err(DatabaseError::Quiz(QuizError::NoAnswers)) => anyhow::bail!(
            "no answers recorded for '{}'. Run 'skinsense quiz start' first.",
            ctx.user
        ),
        Err(error) => return Err(error.into()),
    };
    output(&result, flags.format)
}
