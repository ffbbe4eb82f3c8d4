//! Community repository: product reviews, helpful marks, shared routines and
//! routine likes.
//!
//! A user reviews a product once and marks a review helpful once; both are
//! backed by UNIQUE constraints. Likes toggle, and the stored count never
//! drops below zero.

use skin_core::entities::{
    NewReview, NewSharedRoutine, Product, Review, SharedRoutine, SharedStep,
};
use skin_core::errors::CoreError;
use skin_core::progress::round1;
use skin_core::responses::{
    CommunityHubResponse, CommunityStats, HelpfulResponse, LikeResponse, ProductReviewsResponse,
    RoutineDetailResponse, TopProduct,
};

use crate::error::DatabaseError;
use crate::helpers::{get_u8, get_u32, parse_datetime, parse_enum};
use crate::repos::products::row_to_product_at;
use crate::service::SkinService;

pub const RECENT_REVIEWS_LIMIT: u32 = 10;
pub const POPULAR_ROUTINES_LIMIT: u32 = 8;
pub const TOP_PRODUCTS_LIMIT: u32 = 6;

const REVIEW_COLUMNS: &str = "id, product_id, user_id, rating, title, body, skin_type, \
     effectiveness, value_for_money, usage_duration, would_recommend, helpful_count, created_at";

const ROUTINE_COLUMNS: &str = "id, user_id, title, description, skin_type, schedule, \
     is_public, likes_count, views_count, created_at";

const STEP_SELECT: &str = "SELECT s.step_number, s.name, s.instructions,
        p.id, p.name, p.brand, p.product_type, p.skin_type, p.description, p.price_paise, p.link
     FROM shared_routine_steps s
     LEFT JOIN products p ON p.id = s.product_id
     WHERE s.routine_id = ?1
     ORDER BY s.step_number";

fn row_to_review(row: &libsql::Row) -> Result<Review, DatabaseError> {
    Ok(Review {
        id: row.get::<i64>(0)?,
        product_id: row.get::<i64>(1)?,
        user_id: row.get::<String>(2)?,
        rating: get_u8(row, 3)?,
        title: row.get::<String>(4)?,
        body: row.get::<String>(5)?,
        skin_type: parse_enum(&row.get::<String>(6)?)?,
        effectiveness: get_u8(row, 7)?,
        value_for_money: get_u8(row, 8)?,
        usage_duration: row.get::<String>(9)?,
        would_recommend: row.get::<i64>(10)? != 0,
        helpful_count: get_u32(row, 11)?,
        created_at: parse_datetime(&row.get::<String>(12)?)?,
    })
}

/// Routine header only; the caller loads `steps`.
fn row_to_routine(row: &libsql::Row) -> Result<SharedRoutine, DatabaseError> {
    Ok(SharedRoutine {
        id: row.get::<i64>(0)?,
        user_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        description: row.get::<String>(3)?,
        skin_type: parse_enum(&row.get::<String>(4)?)?,
        schedule: parse_enum(&row.get::<String>(5)?)?,
        is_public: row.get::<i64>(6)? != 0,
        likes_count: get_u32(row, 7)?,
        views_count: get_u32(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        steps: Vec::new(),
    })
}

fn row_to_step(row: &libsql::Row) -> Result<SharedStep, DatabaseError> {
    let product = match row.get::<Option<i64>>(3)? {
        Some(_) => Some(row_to_product_at(row, 3)?),
        None => None,
    };
    Ok(SharedStep {
        step_number: get_u32(row, 0)?,
        name: row.get::<String>(1)?,
        instructions: row.get::<String>(2)?,
        product,
    })
}

impl SkinService {
    // -----------------------------------------------------------------------
    // Reviews
    // -----------------------------------------------------------------------

    /// Post `user_id`'s review of a product.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) for an unknown product,
    /// `CoreError::Validation` for bad scores, and
    /// `DatabaseError::AlreadyExists` when the user already reviewed it.
    pub async fn add_review(
        &self,
        user_id: &str,
        product_id: i64,
        review: &NewReview,
    ) -> Result<Review, DatabaseError> {
        review.validate()?;
        self.get_product(product_id).await?;

        let existing = self
            .db()
            .count(
                "SELECT COUNT(*) FROM reviews WHERE product_id = ?1 AND user_id = ?2",
                libsql::params![product_id, user_id],
            )
            .await?;
        if existing > 0 {
            return Err(DatabaseError::AlreadyExists(format!(
                "{user_id} has already reviewed product {product_id}"
            )));
        }

        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO reviews
             (product_id, user_id, rating, title, body, skin_type,
              effectiveness, value_for_money, usage_duration, would_recommend)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            libsql::params![
                product_id,
                user_id,
                i64::from(review.rating),
                review.title.trim(),
                review.body.as_str(),
                review.skin_type.as_str(),
                i64::from(review.effectiveness),
                i64::from(review.value_for_money),
                review.usage_duration.as_str(),
                i64::from(review.would_recommend)
            ],
        )
        .await?;

        let review = self.get_review(conn.last_insert_rowid()).await?;
        tracing::debug!(user = user_id, product = product_id, rating = review.rating, "review posted");
        Ok(review)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if no review has this id.
    pub async fn get_review(&self, id: i64) -> Result<Review, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("review", id))?;
        row_to_review(&row)
    }

    /// Reviews of one product, newest first, with the mean star rating.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) for an unknown product.
    pub async fn reviews_for_product(
        &self,
        product_id: i64,
        limit: Option<u32>,
    ) -> Result<ProductReviewsResponse, DatabaseError> {
        let product = self.get_product(product_id).await?;

        let mut sql = format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE product_id = ?1
             ORDER BY created_at DESC, id DESC"
        );
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        let mut rows = self.db().conn().query(&sql, [product_id]).await?;
        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            reviews.push(row_to_review(&row)?);
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT AVG(rating) FROM reviews WHERE product_id = ?1",
                [product_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let avg_rating = row.get::<Option<f64>>(0)?.map(round1);

        Ok(ProductReviewsResponse {
            product,
            reviews,
            avg_rating,
        })
    }

    /// Record that `user_id` found a review helpful. Repeat marks are no-ops.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the review does not exist.
    pub async fn mark_review_helpful(
        &self,
        user_id: &str,
        review_id: i64,
    ) -> Result<HelpfulResponse, DatabaseError> {
        self.get_review(review_id).await?;

        let tx = self.db().conn().transaction().await?;
        let inserted = tx
            .execute(
                "INSERT INTO review_helpful (review_id, user_id) VALUES (?1, ?2)
                 ON CONFLICT(review_id, user_id) DO NOTHING",
                libsql::params![review_id, user_id],
            )
            .await?;
        let marked = inserted > 0;
        if marked {
            tx.execute(
                "UPDATE reviews SET helpful_count = helpful_count + 1 WHERE id = ?1",
                [review_id],
            )
            .await?;
        }
        tx.commit().await?;

        let helpful_count = self.get_review(review_id).await?.helpful_count;
        tracing::debug!(user = user_id, review = review_id, marked, helpful_count, "helpful mark");
        Ok(HelpfulResponse {
            review_id,
            marked,
            helpful_count,
        })
    }

    // -----------------------------------------------------------------------
    // Shared routines
    // -----------------------------------------------------------------------

    /// Publish a routine. Blank steps are dropped and keep their position
    /// number; a step naming an unknown product is stored without one.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` (wrapped) for a blank title, or
    /// `DatabaseError` if an insert fails.
    pub async fn share_routine(
        &self,
        user_id: &str,
        routine: &NewSharedRoutine,
    ) -> Result<SharedRoutine, DatabaseError> {
        routine.validate()?;

        let mut steps = Vec::new();
        for (step_number, step) in routine.numbered_steps() {
            let product_id = match step.product_id {
                Some(id) => match self.get_product(id).await {
                    Ok(product) => Some(product.id),
                    Err(DatabaseError::Core(CoreError::NotFound { .. })) => {
                        tracing::warn!(step = step_number, product = id, "unknown product dropped from shared step");
                        None
                    }
                    Err(e) => return Err(e),
                },
                None => None,
            };
            steps.push((step_number, step, product_id));
        }

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO shared_routines (user_id, title, description, skin_type, schedule, is_public)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            libsql::params![
                user_id,
                routine.title.trim(),
                routine.description.as_str(),
                routine.skin_type.as_str(),
                routine.schedule.as_str(),
                i64::from(routine.is_public)
            ],
        )
        .await?;
        let routine_id = tx.last_insert_rowid();

        for (step_number, step, product_id) in steps {
            tx.execute(
                "INSERT INTO shared_routine_steps (routine_id, step_number, name, instructions, product_id)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    routine_id,
                    i64::from(step_number),
                    step.name.trim(),
                    step.instructions.trim(),
                    product_id
                ],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::info!(user = user_id, routine = routine_id, "routine shared");
        self.load_routine(routine_id).await
    }

    /// Fetch a routine with its steps, no visibility check.
    async fn load_routine(&self, id: i64) -> Result<SharedRoutine, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ROUTINE_COLUMNS} FROM shared_routines WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("shared routine", id))?;
        let mut routine = row_to_routine(&row)?;
        routine.steps = self.load_steps(id).await?;
        Ok(routine)
    }

    async fn load_steps(&self, routine_id: i64) -> Result<Vec<SharedStep>, DatabaseError> {
        let mut rows = self.db().conn().query(STEP_SELECT, [routine_id]).await?;
        let mut steps = Vec::new();
        while let Some(row) = rows.next().await? {
            steps.push(row_to_step(&row)?);
        }
        Ok(steps)
    }

    /// A routine `viewer` may see: public ones, plus their own private ones.
    /// Private routines of other users are reported as not found.
    async fn visible_routine(
        &self,
        viewer: &str,
        id: i64,
    ) -> Result<SharedRoutine, DatabaseError> {
        let routine = self.load_routine(id).await?;
        if !routine.is_public && routine.user_id != viewer {
            return Err(DatabaseError::not_found("shared routine", id));
        }
        Ok(routine)
    }

    /// Open a routine: counts a view and reports whether `viewer` likes it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the routine does not exist
    /// or is another user's private routine.
    pub async fn view_routine(
        &self,
        viewer: &str,
        id: i64,
    ) -> Result<RoutineDetailResponse, DatabaseError> {
        let mut routine = self.visible_routine(viewer, id).await?;
        self.db()
            .conn()
            .execute(
                "UPDATE shared_routines SET views_count = views_count + 1 WHERE id = ?1",
                [id],
            )
            .await?;
        routine.views_count = routine.views_count.saturating_add(1);

        let liked_by_user = self
            .db()
            .count(
                "SELECT COUNT(*) FROM routine_likes WHERE routine_id = ?1 AND user_id = ?2",
                libsql::params![id, viewer],
            )
            .await?
            > 0;
        Ok(RoutineDetailResponse {
            routine,
            liked_by_user,
        })
    }

    /// Like the routine, or take the like back if `user_id` already liked it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the routine is not visible
    /// to `user_id`.
    pub async fn toggle_routine_like(
        &self,
        user_id: &str,
        id: i64,
    ) -> Result<LikeResponse, DatabaseError> {
        self.visible_routine(user_id, id).await?;

        let tx = self.db().conn().transaction().await?;
        let inserted = tx
            .execute(
                "INSERT INTO routine_likes (routine_id, user_id) VALUES (?1, ?2)
                 ON CONFLICT(routine_id, user_id) DO NOTHING",
                libsql::params![id, user_id],
            )
            .await?;
        let liked = inserted > 0;
        if liked {
            tx.execute(
                "UPDATE shared_routines SET likes_count = likes_count + 1 WHERE id = ?1",
                [id],
            )
            .await?;
        } else {
            tx.execute(
                "DELETE FROM routine_likes WHERE routine_id = ?1 AND user_id = ?2",
                libsql::params![id, user_id],
            )
            .await?;
            tx.execute(
                "UPDATE shared_routines SET likes_count = MAX(0, likes_count - 1) WHERE id = ?1",
                [id],
            )
            .await?;
        }
        tx.commit().await?;

        let likes_count = self.load_routine(id).await?.likes_count;
        tracing::debug!(user = user_id, routine = id, liked, likes_count, "like toggled");
        Ok(LikeResponse {
            routine_id: id,
            liked,
            likes_count,
        })
    }

    // -----------------------------------------------------------------------
    // Hub
    // -----------------------------------------------------------------------

    /// Recent reviews, popular public routines, best-rated products and
    /// community totals.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn community_hub(&self) -> Result<CommunityHubResponse, DatabaseError> {
        let conn = self.db().conn();

        let mut rows = conn
            .query(
                &format!(
                    "SELECT {REVIEW_COLUMNS} FROM reviews
                     ORDER BY created_at DESC, id DESC LIMIT {RECENT_REVIEWS_LIMIT}"
                ),
                (),
            )
            .await?;
        let mut recent_reviews = Vec::new();
        while let Some(row) = rows.next().await? {
            recent_reviews.push(row_to_review(&row)?);
        }

        let mut rows = conn
            .query(
                &format!(
                    "SELECT {ROUTINE_COLUMNS} FROM shared_routines WHERE is_public = 1
                     ORDER BY likes_count DESC, views_count DESC, id
                     LIMIT {POPULAR_ROUTINES_LIMIT}"
                ),
                (),
            )
            .await?;
        let mut popular_routines = Vec::new();
        while let Some(row) = rows.next().await? {
            popular_routines.push(row_to_routine(&row)?);
        }
        for routine in &mut popular_routines {
            routine.steps = self.load_steps(routine.id).await?;
        }

        let mut rows = conn
            .query(
                &format!(
                    "SELECT p.id, p.name, p.brand, p.product_type, p.skin_type, p.description,
                            p.price_paise, p.link, AVG(r.rating), COUNT(r.id)
                     FROM products p
                     JOIN reviews r ON r.product_id = p.id
                     GROUP BY p.id
                     ORDER BY AVG(r.rating) DESC, COUNT(r.id) DESC, p.id
                     LIMIT {TOP_PRODUCTS_LIMIT}"
                ),
                (),
            )
            .await?;
        let mut top_products = Vec::new();
        while let Some(row) = rows.next().await? {
            let product: Product = row_to_product_at(&row, 0)?;
            top_products.push(TopProduct {
                product,
                avg_rating: round1(row.get::<f64>(8)?),
                review_count: get_u32(&row, 9)?,
            });
        }

        let stats = CommunityStats {
            total_reviews: self.db().count("SELECT COUNT(*) FROM reviews", ()).await?,
            total_routines: self
                .db()
                .count("SELECT COUNT(*) FROM shared_routines WHERE is_public = 1", ())
                .await?,
            total_members: self
                .db()
                .count("SELECT COUNT(DISTINCT user_id) FROM reviews", ())
                .await?,
        };

        Ok(CommunityHubResponse {
            recent_reviews,
            popular_routines,
            top_products,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skin_core::entities::{DEFAULT_SUB_RATING, NewSharedStep};
    use skin_core::enums::{RoutineSchedule, SkinType};

    use super::*;
    use crate::test_support::helpers::{add_product, test_service};

    fn review(rating: u8) -> NewReview {
        NewReview {
            rating,
            title: "Worth it".into(),
            body: "Skin feels calmer.".into(),
            skin_type: SkinType::Combination,
            effectiveness: DEFAULT_SUB_RATING,
            value_for_money: DEFAULT_SUB_RATING,
            usage_duration: "1 month".into(),
            would_recommend: true,
        }
    }

    fn routine(title: &str, is_public: bool, steps: Vec<NewSharedStep>) -> NewSharedRoutine {
        NewSharedRoutine {
            title: title.into(),
            description: "What works for me.".into(),
            skin_type: SkinType::Oily,
            schedule: RoutineSchedule::Both,
            is_public,
            steps,
        }
    }

    fn step(name: &str, instructions: &str, product_id: Option<i64>) -> NewSharedStep {
        NewSharedStep {
            name: name.into(),
            instructions: instructions.into(),
            product_id,
        }
    }

    #[tokio::test]
    async fn user_reviews_a_product_once() {
        let svc = test_service().await;
        let product = add_product(&svc, "Gel Cleanser", "Cleanser", SkinType::Oily, None).await;

        let posted = svc.add_review("asha", product.id, &review(4)).await.unwrap();
        assert_eq!(posted.rating, 4);
        assert_eq!(posted.helpful_count, 0);
        assert_eq!(posted.user_id, "asha");

        let err = svc.add_review("asha", product.id, &review(2)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::AlreadyExists(_)));

        // A different user may still review it.
        svc.add_review("ravi", product.id, &review(2)).await.unwrap();
        let listed = svc.reviews_for_product(product.id, None).await.unwrap();
        assert_eq!(listed.reviews.len(), 2);
        assert_eq!(listed.avg_rating, Some(3.0));
    }

    #[tokio::test]
    async fn review_of_unknown_product_is_not_found() {
        let svc = test_service().await;
        let err = svc.add_review("asha", 404, &review(5)).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Core(CoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn out_of_scale_review_is_rejected() {
        let svc = test_service().await;
        let product = add_product(&svc, "Gel Cleanser", "Cleanser", SkinType::Oily, None).await;
        let err = svc.add_review("asha", product.id, &review(0)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::Core(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn helpful_mark_counts_once_per_user() {
        let svc = test_service().await;
        let product = add_product(&svc, "Barrier Cream", "Cream", SkinType::Dry, None).await;
        let posted = svc.add_review("asha", product.id, &review(5)).await.unwrap();

        let first = svc.mark_review_helpful("ravi", posted.id).await.unwrap();
        assert!(first.marked);
        assert_eq!(first.helpful_count, 1);

        let again = svc.mark_review_helpful("ravi", posted.id).await.unwrap();
        assert!(!again.marked);
        assert_eq!(again.helpful_count, 1);

        let other = svc.mark_review_helpful("meera", posted.id).await.unwrap();
        assert_eq!(other.helpful_count, 2);
    }

    #[tokio::test]
    async fn shared_steps_skip_blanks_and_unknown_products() {
        let svc = test_service().await;
        let serum = add_product(&svc, "Niacinamide", "Serum", SkinType::Oily, None).await;

        let shared = svc
            .share_routine(
                "ravi",
                &routine(
                    "Oil control",
                    true,
                    vec![
                        step("Cleanse", "Gel cleanser, 60 seconds", Some(404)),
                        step("Tone", "  ", None),
                        step("Treat", "Three drops", Some(serum.id)),
                    ],
                ),
            )
            .await
            .unwrap();

        assert_eq!(shared.steps.len(), 2);
        assert_eq!(shared.steps[0].step_number, 1);
        assert_eq!(shared.steps[0].product, None);
        assert_eq!(shared.steps[1].step_number, 3);
        assert_eq!(shared.steps[1].product.as_ref().map(|p| p.id), Some(serum.id));
        assert_eq!(shared.likes_count, 0);
        assert_eq!(shared.views_count, 0);
    }

    #[tokio::test]
    async fn deleting_a_product_clears_step_reference() {
        let svc = test_service().await;
        let mask = add_product(&svc, "Clay Mask", "Mask", SkinType::Oily, None).await;
        let shared = svc
            .share_routine(
                "ravi",
                &routine("Weekly", true, vec![step("Mask", "Ten minutes", Some(mask.id))]),
            )
            .await
            .unwrap();

        svc.db()
            .conn()
            .execute("DELETE FROM products WHERE id = ?1", [mask.id])
            .await
            .unwrap();

        let detail = svc.view_routine("ravi", shared.id).await.unwrap();
        assert_eq!(detail.routine.steps.len(), 1);
        assert_eq!(detail.routine.steps[0].product, None);
    }

    #[tokio::test]
    async fn viewing_counts_every_open() {
        let svc = test_service().await;
        let shared = svc
            .share_routine("ravi", &routine("AM", true, vec![]))
            .await
            .unwrap();

        svc.view_routine("asha", shared.id).await.unwrap();
        let detail = svc.view_routine("meera", shared.id).await.unwrap();
        assert_eq!(detail.routine.views_count, 2);
        assert!(!detail.liked_by_user);
    }

    #[tokio::test]
    async fn private_routine_is_hidden_from_others() {
        let svc = test_service().await;
        let shared = svc
            .share_routine("ravi", &routine("Secret", false, vec![]))
            .await
            .unwrap();

        assert!(svc.view_routine("ravi", shared.id).await.is_ok());
        let err = svc.view_routine("asha", shared.id).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::Core(CoreError::NotFound { .. })
        ));
        assert!(svc.toggle_routine_like("asha", shared.id).await.is_err());
    }

    #[tokio::test]
    async fn like_toggles_and_never_goes_negative() {
        let svc = test_service().await;
        let shared = svc
            .share_routine("ravi", &routine("PM", true, vec![]))
            .await
            .unwrap();

        let liked = svc.toggle_routine_like("asha", shared.id).await.unwrap();
        assert!(liked.liked);
        assert_eq!(liked.likes_count, 1);
        assert!(svc.view_routine("asha", shared.id).await.unwrap().liked_by_user);

        let unliked = svc.toggle_routine_like("asha", shared.id).await.unwrap();
        assert!(!unliked.liked);
        assert_eq!(unliked.likes_count, 0);

        // A stale counter at zero with a like row still in place stays at zero.
        svc.toggle_routine_like("asha", shared.id).await.unwrap();
        svc.db()
            .conn()
            .execute(
                "UPDATE shared_routines SET likes_count = 0 WHERE id = ?1",
                [shared.id],
            )
            .await
            .unwrap();
        let floored = svc.toggle_routine_like("asha", shared.id).await.unwrap();
        assert!(!floored.liked);
        assert_eq!(floored.likes_count, 0);
    }

    #[tokio::test]
    async fn hub_orders_and_counts() {
        let svc = test_service().await;
        let cleanser = add_product(&svc, "Gel Cleanser", "Cleanser", SkinType::Oily, None).await;
        let cream = add_product(&svc, "Barrier Cream", "Cream", SkinType::Dry, None).await;
        add_product(&svc, "Unreviewed Toner", "Toner", SkinType::Normal, None).await;

        svc.add_review("asha", cleanser.id, &review(3)).await.unwrap();
        svc.add_review("ravi", cleanser.id, &review(4)).await.unwrap();
        let latest = svc.add_review("asha", cream.id, &review(5)).await.unwrap();

        let quiet = svc
            .share_routine("ravi", &routine("Quiet", true, vec![]))
            .await
            .unwrap();
        let loved = svc
            .share_routine("meera", &routine("Loved", true, vec![]))
            .await
            .unwrap();
        svc.share_routine("meera", &routine("Hidden", false, vec![]))
            .await
            .unwrap();
        svc.view_routine("asha", quiet.id).await.unwrap();
        svc.toggle_routine_like("asha", loved.id).await.unwrap();

        let hub = svc.community_hub().await.unwrap();

        assert_eq!(hub.recent_reviews.len(), 3);
        assert_eq!(hub.recent_reviews[0].id, latest.id);

        let titles: Vec<&str> = hub
            .popular_routines
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Loved", "Quiet"]);

        assert_eq!(hub.top_products.len(), 2);
        assert_eq!(hub.top_products[0].product.id, cream.id);
        assert_eq!(hub.top_products[0].avg_rating, 5.0);
        assert_eq!(hub.top_products[1].avg_rating, 3.5);
        assert_eq!(hub.top_products[1].review_count, 2);

        assert_eq!(
            hub.stats,
            CommunityStats {
                total_reviews: 3,
                total_routines: 2,
                total_members: 2,
            }
        );
    }
}
