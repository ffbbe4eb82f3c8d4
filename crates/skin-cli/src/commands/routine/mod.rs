mod generate;
mod like;
mod share;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RoutineArgs;
use crate::cli::subcommands::RoutineCommands;
use crate::context::AppContext;

/// Handle `skinsense routine`.
pub async fn handle(
    args: &RoutineArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Some(action) = &args.action else {
        let Some(skin_type) = args.skin_type.as_deref() else {
            anyhow::bail!(
                "Pass a skin type (e.g. 'skinsense routine oily') or one of share, show, like."
            );
        };
        return generate::run(skin_type, ctx, flags).await;
    };

    match action {
        RoutineCommands::Share {
            title,
            description,
            skin_type,
            schedule,
            private,
            steps,
        } => {
            let args = share::ShareArgs {
                title,
                description,
                skin_type,
                schedule,
                private: *private,
                steps,
            };
            share::run(args, ctx, flags).await
        }
        RoutineCommands::Show { id } => show::run(*id, ctx, flags).await,
        RoutineCommands::Like { id } => like::run(*id, ctx, flags).await,
    }
}
