use skin_core::entities::NewReview;
use skin_core::enums::SkinType;
use skin_db::error::DatabaseError;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct AddReviewArgs<'a> {
    pub rating: u8,
    pub title: &'a str,
    pub body: &'a str,
    pub skin_type: &'a str,
    pub effectiveness: u8,
    pub value_for_money: u8,
    pub usage_duration: &'a str,
    pub would_recommend: bool,
}

pub async fn run(
    product_id: i64,
    args: AddReviewArgs<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let review = build_review(&args)?;
    match ctx.service.add_review(&ctx.user, product_id, &review).await {
        Ok(posted) => output(&posted, flags.format),
        Err(DatabaseError::AlreadyExists(_)) => anyhow::bail!(
            "You have already reviewed product {product_id}. Run 'skinsense review list {product_id}' to see it."
        ),
        Err(error) => Err(error.into()),
    }
}

fn build_review(args: &AddReviewArgs<'_>) -> anyhow::Result<NewReview> {
    Ok(NewReview {
        rating: args.rating,
        title: args.title.trim().to_string(),
        body: args.body.trim().to_string(),
        skin_type: parse_enum::<SkinType>(args.skin_type, "skin type")?,
        effectiveness: args.effectiveness,
        value_for_money: args.value_for_money,
        usage_duration: args.usage_duration.trim().to_string(),
        would_recommend: args.would_recommend,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skin_core::enums::SkinType;

    use super::{AddReviewArgs, build_review};

    fn args(skin_type: &str) -> AddReviewArgs<'_> {
        AddReviewArgs {
            rating: 4,
            title: " Gentle and effective ",
            body: "",
            skin_type,
            effectiveness: 3,
            value_for_money: 5,
            usage_duration: "2 months",
            would_recommend: true,
        }
    }

    #[test]
    fn fields_are_trimmed_and_typed() {
        let review = build_review(&args(" Sensitive")).expect("review builds");
        assert_eq!(review.title, "Gentle and effective");
        assert_eq!(review.skin_type, SkinType::Sensitive);
        assert_eq!(review.value_for_money, 5);
    }

    #[test]
    fn unknown_skin_type_is_rejected() {
        let err = build_review(&args("scaly")).unwrap_err();
        assert!(err.to_string().contains("invalid skin type 'scaly'"));
    }
}
