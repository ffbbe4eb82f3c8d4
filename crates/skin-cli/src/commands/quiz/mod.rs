mod answer;
mod question;
mod result;
mod start;
mod status;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuizCommands;
use crate::context::AppContext;

/// Handle `skinsense quiz`.
pub async fn handle(
    action: &QuizCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuizCommands::Start => start::run(ctx, flags).await,
        QuizCommands::Question { id } => question::run(*id, ctx, flags).await,
        QuizCommands::Answer {
            question_id,
            option_id,
        } => answer::run(*question_id, *option_id, ctx, flags).await,
        QuizCommands::Status => status::run(ctx, flags).await,
        QuizCommands::Result => result::run(ctx, flags).await,
    }
}
