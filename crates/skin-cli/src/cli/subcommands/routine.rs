use clap::Subcommand;

/// Community routine commands. Without one, `routine <skin_type>` prints the
/// generated routines.
#[derive(Clone, Debug, Subcommand)]
pub enum RoutineCommands {
    /// Publish your own routine
    Share {
        /// Routine title
        #[arg(long)]
        title: String,

        /// What the routine is for
        #[arg(long, default_value = "")]
        description: String,

        /// Skin type the routine suits
        #[arg(long)]
        skin_type: String,

        /// morning, night or both
        #[arg(long, default_value = "both")]
        schedule: String,

        /// Only you can see it
        #[arg(long)]
        private: bool,

        /// A step as "Name: instructions", optionally ending in " @<product id>".
        /// Repeat for each step, in order.
        #[arg(long = "step")]
        steps: Vec<String>,
    },
    /// Open a shared routine (counts a view)
    Show {
        /// Routine ID
        id: i64,
    },
    /// Like a shared routine, or unlike it if you already do
    Like {
        /// Routine ID
        id: i64,
    },
}
