//! CLI response types returned as JSON by `skinsense` commands.
//!
//! These structs define the shape of output for commands like
//! `skinsense quiz question`, `skinsense quiz result`, `skinsense routine`,
//! `skinsense cart show`, `skinsense progress show` and the community
//! commands (`skinsense review ...`, `skinsense routine share|show|like`,
//! `skinsense community`).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cart::CartTotals;
use crate::entities::{CartLine, Product, ProgressEntry, Question, Review, SharedRoutine};
use crate::enums::SkinType;
use crate::progress::{ProgressChart, ProgressStats};
use crate::quiz::{AnswerChoice, QuizProgress};
use crate::routine::{RoutinePlan, SkinTips};

/// Response from `skinsense quiz start` and `skinsense quiz question`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuestionView {
    pub question: Question,
    pub progress: QuizProgress,
}

/// Response from `skinsense quiz answer`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerRecordedResponse {
    pub recorded: AnswerChoice,
    /// `None` once the last question has been answered.
    pub next: Option<QuestionView>,
    pub complete: bool,
}

/// Response from `skinsense quiz result`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct QuizResultResponse {
    pub skin_type: SkinType,
    pub answers: usize,
    pub tips: SkinTips,
    pub morning_routine: RoutinePlan,
    pub night_routine: RoutinePlan,
    /// Every catalog product tagged with the skin type, id ascending.
    pub products: Vec<Product>,
}

/// Response from `skinsense routine <skin_type>`.
///
/// Keeps the requested tag as given; an unrecognized tag yields empty tips
/// and steps without products.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoutineResponse {
    pub skin_type: String,
    pub tips: SkinTips,
    pub morning_routine: RoutinePlan,
    pub night_routine: RoutinePlan,
}

/// Response from `skinsense cart show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub currency: String,
}

/// Response from `skinsense progress show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProgressResponse {
    pub entries: Vec<ProgressEntry>,
    pub stats: Option<ProgressStats>,
    pub chart: ProgressChart,
    pub logged_today: bool,
}

/// Response from `skinsense review helpful`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HelpfulResponse {
    pub review_id: i64,
    /// `false` when this user had already marked the review.
    pub marked: bool,
    pub helpful_count: u32,
}

/// Response from `skinsense routine like`, which toggles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LikeResponse {
    pub routine_id: i64,
    pub liked: bool,
    pub likes_count: u32,
}

/// Response from `skinsense routine show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoutineDetailResponse {
    pub routine: SharedRoutine,
    pub liked_by_user: bool,
}

/// A reviewed product with its mean star rating.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TopProduct {
    pub product: Product,
    /// Rounded to one decimal.
    pub avg_rating: f64,
    pub review_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommunityStats {
    pub total_reviews: usize,
    /// Public routines only.
    pub total_routines: usize,
    /// Distinct users who have written a review.
    pub total_members: usize,
}

/// Response from `skinsense community`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CommunityHubResponse {
    /// Newest first.
    pub recent_reviews: Vec<Review>,
    /// Public routines, most liked first, then most viewed.
    pub popular_routines: Vec<SharedRoutine>,
    /// Highest mean rating first.
    pub top_products: Vec<TopProduct>,
    pub stats: CommunityStats,
}

/// Response from `skinsense review list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProductReviewsResponse {
    pub product: Product,
    pub reviews: Vec<Review>,
    /// `None` while the product has no reviews.
    pub avg_rating: Option<f64>,
}
