//! Starter data: the five-question skin quiz and a small catalog.
//!
//! Seeding is idempotent. Questions are only inserted into an empty quiz;
//! products are inserted one by one and skipped when a product with the same
//! name and brand already exists.

use serde::Serialize;
use skin_core::enums::SkinType;

use crate::error::DatabaseError;
use crate::service::SkinService;

struct SeedQuestion {
    text: &'static str,
    /// Option texts in `SkinType::ALL` order.
    options: [&'static str; 5],
}

const QUESTIONS: [SeedQuestion; 5] = [
    SeedQuestion {
        text: "How does your skin feel after cleansing?",
        options: [
            "Tight and dry",
            "Shiny and oily",
            "Oily in T-zone, dry on cheeks",
            "Uncomfortable and irritated",
            "Comfortable and balanced",
        ],
    },
    SeedQuestion {
        text: "How often do you experience breakouts?",
        options: [
            "Rarely or never",
            "Frequently, especially in T-zone",
            "Sometimes in oily areas",
            "Rarely, but skin reacts to products",
            "Occasionally",
        ],
    },
    SeedQuestion {
        text: "How does your skin look by midday?",
        options: [
            "Flaky or rough patches",
            "Shiny and greasy",
            "Shiny T-zone, dry cheeks",
            "Red or blotchy",
            "Fresh and even",
        ],
    },
    SeedQuestion {
        text: "How does your skin react to new products?",
        options: [
            "Absorbs quickly, needs more",
            "Feels heavy, causes breakouts",
            "Depends on the area",
            "Often causes redness or irritation",
            "Usually fine",
        ],
    },
    SeedQuestion {
        text: "What is your main skin concern?",
        options: [
            "Dryness and flaking",
            "Excess oil and large pores",
            "Uneven texture",
            "Redness and sensitivity",
            "Maintaining balance",
        ],
    },
];

struct SeedProduct {
    name: &'static str,
    brand: &'static str,
    product_type: &'static str,
    skin_type: SkinType,
    description: &'static str,
    link: &'static str,
}

const PRODUCTS: [SeedProduct; 22] = [
    SeedProduct {
        name: "Hydrating Facial Cleanser",
        brand: "CeraVe",
        product_type: "Cleanser",
        skin_type: SkinType::Dry,
        description: "Gentle, non-foaming cleanser with hyaluronic acid and ceramides to hydrate and restore the skin barrier.",
        link: "https://www.cerave.com/skincare/cleansers/hydrating-facial-cleanser",
    },
    SeedProduct {
        name: "Ultra Facial Cream",
        brand: "Kiehl's",
        product_type: "Moisturizer",
        skin_type: SkinType::Dry,
        description: "24-hour hydration with glacial glycoprotein and desert plant extracts. Lightweight yet deeply moisturizing.",
        link: "https://www.kiehls.com/skincare/face-moisturizers/ultra-facial-cream/622.html",
    },
    SeedProduct {
        name: "Toleriane Double Repair Face Moisturizer",
        brand: "La Roche-Posay",
        product_type: "Moisturizer",
        skin_type: SkinType::Dry,
        description: "Prebiotic thermal water moisturizer with ceramides and niacinamide for intense hydration.",
        link: "https://www.laroche-posay.us/our-products/face/face-moisturizer/toleriane-double-repair-face-moisturizer-3337875545846.html",
    },
    SeedProduct {
        name: "Midnight Recovery Concentrate",
        brand: "Kiehl's",
        product_type: "Serum",
        skin_type: SkinType::Dry,
        description: "Essential oils blend that helps skin recover overnight. Replenishes and restores radiance.",
        link: "https://www.kiehls.com/skincare/face-serums/midnight-recovery-concentrate/799.html",
    },
    SeedProduct {
        name: "Foaming Facial Cleanser",
        brand: "CeraVe",
        product_type: "Cleanser",
        skin_type: SkinType::Oily,
        description: "Refreshing foam formula with ceramides and niacinamide. Removes excess oil without stripping skin.",
        link: "https://www.cerave.com/skincare/cleansers/foaming-facial-cleanser",
    },
    SeedProduct {
        name: "Effaclar Duo Dual Action Acne Treatment",
        brand: "La Roche-Posay",
        product_type: "Treatment",
        skin_type: SkinType::Oily,
        description: "Targets acne, unclogs pores, and reduces excess oil. Contains benzoyl peroxide and micro-exfoliating LHA.",
        link: "https://www.laroche-posay.us/our-products/face/face-moisturizer/effaclar-duo-dual-acne-treatment-3337875545839.html",
    },
    SeedProduct {
        name: "Oil-Free Acne Moisturizer",
        brand: "Neutrogena",
        product_type: "Moisturizer",
        skin_type: SkinType::Oily,
        description: "Lightweight, pink grapefruit moisturizer with salicylic acid to treat and prevent breakouts.",
        link: "https://www.neutrogena.com/products/skincare/oil-free-acne-moisturizer-pink-grapefruit/6811047.html",
    },
    SeedProduct {
        name: "Niacinamide 10% + Zinc 1%",
        brand: "The Ordinary",
        product_type: "Serum",
        skin_type: SkinType::Oily,
        description: "High-strength vitamin and mineral formula to reduce blemishes and balance oil production.",
        link: "https://theordinary.com/en-us/niacinamide-10-zinc-1-serum-100411.html",
    },
    SeedProduct {
        name: "Supermud Clearing Treatment",
        brand: "GlamGlow",
        product_type: "Mask",
        skin_type: SkinType::Oily,
        description: "Activated charcoal mask that draws out impurities and clears pores for clearer skin.",
        link: "https://www.glamglow.com/product/19116/59944/masks/supermud/clearing-treatment",
    },
    SeedProduct {
        name: "Dramatically Different Moisturizing Gel",
        brand: "Clinique",
        product_type: "Moisturizer",
        skin_type: SkinType::Combination,
        description: "Oil-free gel that hydrates and balances combination skin without adding shine.",
        link: "https://www.clinique.com/product/1687/5047/skin-care/moisturizers/dramatically-different-moisturizing-gel",
    },
    SeedProduct {
        name: "Daily Microfoliant",
        brand: "Dermalogica",
        product_type: "Exfoliator",
        skin_type: SkinType::Combination,
        description: "Rice-based powder exfoliant that activates with water. Gently buffs away dead skin cells.",
        link: "https://www.dermalogica.com/products/daily-microfoliant",
    },
    SeedProduct {
        name: "Hydro Boost Water Gel",
        brand: "Neutrogena",
        product_type: "Moisturizer",
        skin_type: SkinType::Combination,
        description: "Oil-free gel-cream with hyaluronic acid. Absorbs quickly for long-lasting hydration.",
        link: "https://www.neutrogena.com/products/skincare/hydro-boost-water-gel-with-hyaluronic-acid/6811048.html",
    },
    SeedProduct {
        name: "Multi-Active Day Cream",
        brand: "Clarins",
        product_type: "Day Cream",
        skin_type: SkinType::Combination,
        description: "Lightweight day cream that targets first signs of aging while balancing skin.",
        link: "https://www.clarins.com/multi-active-day-cream-all-skin-types/80056966.html",
    },
    SeedProduct {
        name: "Ultra Gentle Hydrating Cleanser",
        brand: "First Aid Beauty",
        product_type: "Cleanser",
        skin_type: SkinType::Sensitive,
        description: "Soap-free, pH-balanced cleanser that gently removes makeup and impurities without irritation.",
        link: "https://www.firstaidbeauty.com/skin-care-products/cleansers-exfoliators/face-cleanser",
    },
    SeedProduct {
        name: "Cicaplast Baume B5",
        brand: "La Roche-Posay",
        product_type: "Balm",
        skin_type: SkinType::Sensitive,
        description: "Multi-purpose soothing balm with panthenol and madecassoside to repair and protect irritated skin.",
        link: "https://www.laroche-posay.us/our-products/face/face-moisturizer/cicaplast-baume-b5-for-dry-skin-irritations-3337875545815.html",
    },
    SeedProduct {
        name: "Skin Recovery Cream",
        brand: "Paula's Choice",
        product_type: "Moisturizer",
        skin_type: SkinType::Sensitive,
        description: "Rich, calming cream with plant extracts and antioxidants for very dry, sensitive skin.",
        link: "https://www.paulaschoice.com/skin-recovery-enriched-calming-toner/126.html",
    },
    SeedProduct {
        name: "Redness Relief SPF 30",
        brand: "Aveeno",
        product_type: "Sunscreen",
        skin_type: SkinType::Sensitive,
        description: "Mineral sunscreen with feverfew to calm and protect sensitive, redness-prone skin.",
        link: "https://www.aveeno.com/products/ultra-calming-daily-moisturizer-broad-spectrum-spf-30",
    },
    SeedProduct {
        name: "Take The Day Off Cleansing Balm",
        brand: "Clinique",
        product_type: "Cleanser",
        skin_type: SkinType::Normal,
        description: "Luxurious balm melts away makeup and impurities. Leaves skin soft and radiant.",
        link: "https://www.clinique.com/product/1683/6424/skin-care/cleansers-makeup-removers/take-the-day-off-cleansing-balm",
    },
    SeedProduct {
        name: "Moisture Surge 100H Auto-Replenishing Hydrator",
        brand: "Clinique",
        product_type: "Moisturizer",
        skin_type: SkinType::Normal,
        description: "Oil-free gel-cream provides 100 hours of hydration with aloe bioferment and hyaluronic acid.",
        link: "https://www.clinique.com/product/1687/38893/skin-care/moisturizers/moisture-surge-100h-auto-replenishing-hydrator",
    },
    SeedProduct {
        name: "Vitamin C Serum",
        brand: "TruSkin",
        product_type: "Serum",
        skin_type: SkinType::Normal,
        description: "Brightening serum with vitamin C, hyaluronic acid, and vitamin E for radiant, youthful skin.",
        link: "https://www.truskin.com/products/vitamin-c-serum",
    },
    SeedProduct {
        name: "Advanced Night Repair",
        brand: "Estée Lauder",
        product_type: "Night Serum",
        skin_type: SkinType::Normal,
        description: "Iconic night serum that repairs and renews skin while you sleep. Reduces visible signs of aging.",
        link: "https://www.esteelauder.com/product/681/22788/product-catalog/skincare/advanced-night-repair",
    },
    SeedProduct {
        name: "Glow Recipe Watermelon Sleeping Mask",
        brand: "Glow Recipe",
        product_type: "Mask",
        skin_type: SkinType::Normal,
        description: "Bouncy overnight mask with watermelon and hyaluronic acid for a refreshed, glowing complexion.",
        link: "https://www.glowrecipe.com/products/watermelon-glow-sleeping-mask",
    },
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct SeedReport {
    pub questions: usize,
    pub products: usize,
}

impl SkinService {
    /// Seed the quiz and catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if an insert fails.
    pub async fn seed(&self) -> Result<SeedReport, DatabaseError> {
        Ok(SeedReport {
            questions: self.seed_questions().await?,
            products: self.seed_products().await?,
        })
    }

    /// Insert the starter questions unless any question exists.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if an insert fails.
    pub async fn seed_questions(&self) -> Result<usize, DatabaseError> {
        if self.count_questions().await? > 0 {
            tracing::warn!("questions already exist; skipping quiz seed");
            return Ok(0);
        }
        for seed in &QUESTIONS {
            let options: Vec<(&str, SkinType)> = seed
                .options
                .iter()
                .copied()
                .zip(SkinType::ALL)
                .collect();
            self.insert_question(seed.text, &options).await?;
        }
        tracing::info!(count = QUESTIONS.len(), "seeded quiz questions");
        Ok(QUESTIONS.len())
    }

    /// Insert starter products that are not already in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if an insert fails.
    pub async fn seed_products(&self) -> Result<usize, DatabaseError> {
        let mut created = 0;
        for seed in &PRODUCTS {
            let inserted = self
                .db()
                .conn()
                .execute(
                    "INSERT INTO products (name, brand, product_type, skin_type, description, link)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     ON CONFLICT(name, brand) DO NOTHING",
                    libsql::params![
                        seed.name,
                        seed.brand,
                        seed.product_type,
                        seed.skin_type.as_str(),
                        seed.description,
                        seed.link
                    ],
                )
                .await?;
            if inserted == 0 {
                tracing::debug!(brand = seed.brand, name = seed.name, "product exists; skipped");
            }
            created += usize::try_from(inserted).unwrap_or(0);
        }
        if created == 0 {
            tracing::warn!("catalog already seeded; no products added");
        } else {
            tracing::info!(created, "seeded catalog products");
        }
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{add_product, test_service};

    #[tokio::test]
    async fn seed_populates_quiz_and_catalog() {
        let svc = test_service().await;
        let report = svc.seed().await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                questions: 5,
                products: PRODUCTS.len(),
            }
        );

        let questions = svc.list_questions().await.unwrap();
        assert_eq!(questions.len(), 5);
        for question in &questions {
            let tags: Vec<SkinType> = question.options.iter().map(|o| o.skin_type).collect();
            assert_eq!(tags, SkinType::ALL.to_vec(), "{}", question.text);
        }
    }

    #[tokio::test]
    async fn seeding_twice_adds_nothing() {
        let svc = test_service().await;
        svc.seed().await.unwrap();
        let again = svc.seed().await.unwrap();
        assert_eq!(again, SeedReport::default());
        assert_eq!(svc.count_questions().await.unwrap(), 5);
        assert_eq!(svc.count_products().await.unwrap(), PRODUCTS.len());
    }

    #[tokio::test]
    async fn existing_products_are_kept() {
        let svc = test_service().await;
        add_product(&svc, "House Serum", "Serum", SkinType::Dry, Some(10_000)).await;
        let created = svc.seed_products().await.unwrap();
        assert_eq!(created, PRODUCTS.len());
        assert_eq!(svc.count_products().await.unwrap(), PRODUCTS.len() + 1);
    }

    #[test]
    fn every_skin_type_has_seed_products() {
        for skin_type in SkinType::ALL {
            assert!(
                PRODUCTS.iter().any(|p| p.skin_type == skin_type),
                "no seed product for {skin_type}"
            );
        }
    }
}
