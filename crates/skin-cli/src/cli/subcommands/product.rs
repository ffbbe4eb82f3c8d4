use clap::Subcommand;

/// Product catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// List products
    List {
        /// Filter by skin type
        #[arg(long)]
        skin_type: Option<String>,

        /// Max results
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a product by ID
    Get {
        /// Product ID
        id: i64,
    },
    /// Add a product to the catalog
    Add {
        /// Product name
        #[arg(long)]
        name: String,

        /// Brand
        #[arg(long)]
        brand: String,

        /// Product type, e.g. "Cleanser" or "Night Cream"
        #[arg(long = "type")]
        product_type: String,

        /// Skin type the product is for
        #[arg(long)]
        skin_type: String,

        /// Short description
        #[arg(long, default_value = "")]
        description: String,

        /// Price in rupees, e.g. 1299.50
        #[arg(long)]
        price: Option<String>,

        /// Product page URL
        #[arg(long)]
        link: Option<String>,
    },
}
