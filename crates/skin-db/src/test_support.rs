//! Shared test utilities for skin-db unit tests.

pub(crate) mod helpers {
    use skin_core::entities::{NewProduct, Product};
    use skin_core::enums::SkinType;

    use crate::SkinDb;
    use crate::service::SkinService;

    /// Create an in-memory service with an empty schema.
    pub async fn test_service() -> SkinService {
        let db = SkinDb::open_local(":memory:").await.unwrap();
        SkinService::from_db(db)
    }

    /// Create an in-memory service with the starter questions and catalog.
    pub async fn seeded_service() -> SkinService {
        let svc = test_service().await;
        svc.seed().await.unwrap();
        svc
    }

    /// Insert a priced product and return it.
    pub async fn add_product(
        svc: &SkinService,
        name: &str,
        product_type: &str,
        skin_type: SkinType,
        price_paise: Option<i64>,
    ) -> Product {
        svc.insert_product(&NewProduct {
            name: name.to_string(),
            brand: "Test Brand".to_string(),
            product_type: product_type.to_string(),
            skin_type,
            description: String::new(),
            price_paise,
            link: None,
        })
        .await
        .unwrap()
    }
}
