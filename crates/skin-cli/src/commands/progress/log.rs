use skin_core::entities::NewProgressEntry;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

#[derive(Clone, Copy, Debug)]
pub struct Ratings {
    pub satisfaction: u8,
    pub hydration: u8,
    pub clarity: u8,
    pub breakouts: u8,
    pub redness: u8,
}

pub async fn run(
    ratings: Ratings,
    notes: Option<&str>,
    routine_followed: bool,
    date: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let date = match date {
        Some(raw) => parse_date(raw, "date")?,
        None => super::today(),
    };
    let entry = new_entry(ratings, notes, routine_followed);

    if ctx.service.has_progress_on(&ctx.user, date).await? {
        tracing::warn!(user = %ctx.user, %date, "progress already logged for this date; adding another entry");
    }
    let stored = ctx.service.log_progress(&ctx.user, &entry, date).await?;
    output(&stored, flags.format)
}

fn new_entry(ratings: Ratings, notes: Option<&str>, routine_followed: bool) -> NewProgressEntry {
    NewProgressEntry {
        satisfaction_rating: ratings.satisfaction,
        hydration_level: ratings.hydration,
        clarity: ratings.clarity,
        breakouts: ratings.breakouts,
        redness: ratings.redness,
        notes: notes.map(str::to_string),
        routine_followed,
    }
}
