use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CartCommands, ProductCommands, ProgressCommands, QuizCommands, ReviewCommands, RoutineCommands,
};

/// Root subcommands for the `skinsense` CLI.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a `.skinsense` project here and load the bundled catalog.
    Init(InitArgs),
    /// Re-insert the bundled questions and products (existing rows are kept).
    Seed,
    /// Take the skin-type quiz.
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
    /// Show morning and night routines for a skin type, or share and browse
    /// community routines.
    Routine(RoutineArgs),
    /// Browse and extend the product catalog.
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Log and review skin condition over time.
    Progress {
        #[command(subcommand)]
        action: ProgressCommands,
    },
    /// Manage the shopping cart.
    Cart {
        #[command(subcommand)]
        action: CartCommands,
    },
    /// Review products and rate other reviews.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Recent reviews, popular routines and top-rated products.
    Community,
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory)
    #[arg(long)]
    pub path: Option<String>,

    /// Skip loading the bundled questions and products
    #[arg(long)]
    pub no_seed: bool,
}

#[derive(Clone, Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct RoutineArgs {
    #[command(subcommand)]
    pub action: Option<RoutineCommands>,

    /// Skin type tag: dry, oily, combination, sensitive, normal
    pub skin_type: Option<String>,
}
