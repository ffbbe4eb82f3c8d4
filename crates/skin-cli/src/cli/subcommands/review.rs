use clap::Subcommand;

/// Product review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// Review a product (once per user)
    Add {
        /// Product ID
        product_id: i64,

        /// Overall stars, 1-5
        #[arg(long)]
        rating: u8,

        /// Headline
        #[arg(long)]
        title: String,

        /// Review text
        #[arg(long, default_value = "")]
        body: String,

        /// Your skin type
        #[arg(long)]
        skin_type: String,

        /// How well it worked, 1-5
        #[arg(long, default_value_t = 3)]
        effectiveness: u8,

        /// Value for money, 1-5
        #[arg(long = "value", default_value_t = 3)]
        value_for_money: u8,

        /// How long you have used it, e.g. "3 months"
        #[arg(long, default_value = "")]
        usage_duration: String,

        /// You would not recommend it
        #[arg(long)]
        not_recommended: bool,
    },
    /// Mark a review as helpful
    Helpful {
        /// Review ID
        review_id: i64,
    },
    /// List a product's reviews, newest first
    List {
        /// Product ID
        product_id: i64,

        /// Max results
        #[arg(long)]
        limit: Option<u32>,
    },
}
