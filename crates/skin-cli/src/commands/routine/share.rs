use skin_core::entities::{NewSharedRoutine, NewSharedStep};
use skin_core::enums::{RoutineSchedule, SkinType};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct ShareArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub skin_type: &'a str,
    pub schedule: &'a str,
    pub private: bool,
    pub steps: &'a [String],
}

pub async fn run(args: ShareArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let routine = build_routine(&args)?;
    let shared = ctx.service.share_routine(&ctx.user, &routine).await?;
    if shared.steps.len() < args.steps.len() {
        tracing::warn!(
            given = args.steps.len(),
            kept = shared.steps.len(),
            "steps without a name or instructions were skipped"
        );
    }
    output(&shared, flags.format)
}

fn build_routine(args: &ShareArgs<'_>) -> anyhow::Result<NewSharedRoutine> {
    Ok(NewSharedRoutine {
        title: args.title.trim().to_string(),
        description: args.description.trim().to_string(),
        skin_type: parse_enum::<SkinType>(args.skin_type, "skin type")?,
        schedule: parse_enum::<RoutineSchedule>(args.schedule, "schedule")?,
        is_public: !args.private,
        steps: args.steps.iter().map(|raw| parse_step(raw)).collect(),
    })
}

/// Split `"Name: instructions @12"` into its parts. A trailing ` @<id>` names
/// a catalog product; anything else after `@` stays in the instructions.
fn parse_step(raw: &str) -> NewSharedStep {
    let (name, rest) = raw.split_once(':').unwrap_or((raw, ""));
    let (instructions, product_id) = match rest.rsplit_once(" @") {
        Some((text, id)) => match id.trim().parse::<i64>() {
            Ok(id) => (text, Some(id)),
            Err(_) => (rest, None),
        },
        None => (rest, None),
    };
    NewSharedStep {
        name: name.trim().to_string(),
        instructions: instructions.trim().to_string(),
        product_id,
    }
}
