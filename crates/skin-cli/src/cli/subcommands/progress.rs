use clap::Subcommand;

/// Progress tracking commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProgressCommands {
    /// Log today's skin condition (ratings 1-10)
    Log {
        /// Overall satisfaction
        #[arg(long)]
        satisfaction: u8,

        /// Hydration level
        #[arg(long)]
        hydration: u8,

        /// Skin clarity
        #[arg(long)]
        clarity: u8,

        /// Breakouts (10 = none)
        #[arg(long)]
        breakouts: u8,

        /// Redness (10 = none)
        #[arg(long)]
        redness: u8,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,

        /// The routine was not followed today
        #[arg(long)]
        skipped_routine: bool,

        /// Entry date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show recent entries with averages and trend
    Show {
        /// Max entries
        #[arg(long)]
        limit: Option<u32>,
    },
}
