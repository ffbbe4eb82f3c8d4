mod log;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProgressCommands;
use crate::context::AppContext;

/// Handle `skinsense progress`.
pub async fn handle(
    action: &ProgressCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgressCommands::Log {
            satisfaction,
            hydration,
            clarity,
            breakouts,
            redness,
            notes,
            skipped_routine,
            date,
        } => {
            let ratings = log::Ratings {
                satisfaction: *satisfaction,
                hydration: *hydration,
                clarity: *clarity,
                breakouts: *breakouts,
                redness: *redness,
            };
            log::run(
                ratings,
                notes.as_deref(),
                !*skipped_routine,
                date.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        ProgressCommands::Show { limit } => show::run(*limit, ctx, flags).await,
    }
}

/// Today in the user's local timezone.
fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
