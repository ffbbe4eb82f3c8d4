//! Entity structs for all SkinSense domain objects, including community
//! reviews and shared routines.
//!
//! Each persisted entity maps to a table in the libSQL database (see
//! `skin-db/migrations`). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod cart;
mod community;
mod product;
mod progress;
mod question;

pub use cart::CartLine;
pub use community::{
    DEFAULT_SUB_RATING, NewReview, NewSharedRoutine, NewSharedStep, REVIEW_RATING_RANGE, Review,
    SharedRoutine, SharedStep,
};
pub use product::{NewProduct, Product};
pub use progress::{NewProgressEntry, ProgressEntry};
pub use question::{Question, QuizOption};
