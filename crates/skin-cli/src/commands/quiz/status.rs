use serde::Serialize;
use skin_core::quiz::QuizProgress;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct QuizStatusResponse {
    user: String,
    answered: usize,
    total: usize,
    percent: u8,
    complete: bool,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = ctx.service.load_quiz_session(&ctx.user).await?;
    let total = ctx.service.count_questions().await?;
    let progress = session.progress(total);

    output(&status_response(&ctx.user, progress), flags.format)
}

fn status_response(user: &str, progress: QuizProgress) -> QuizStatusResponse {
    QuizStatusResponse {
        user: user.to_string(),
        answered: progress.current,
        total: progress.total,
        percent: progress.percent,
        complete: progress.total > 0 && progress.current >= progress.total,
    }
}
