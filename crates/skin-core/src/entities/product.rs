use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SkinType;
use crate::errors::CoreError;

/// A catalog product. Linked to skin types only through its tag.
///
/// `product_type` is free text ("Cleanser", "Night Cream", "SPF 50"); routine
/// generation matches it against category keywords.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub product_type: String,
    pub skin_type: SkinType,
    pub description: String,
    /// Price in paise (INR minor units).
    pub price_paise: Option<i64>,
    pub link: Option<String>,
}

impl Product {
    /// `"Brand - Name"`, the catalog display label.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.brand, self.name)
    }
}

/// Fields for a product about to be added to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub brand: String,
    pub product_type: String,
    pub skin_type: SkinType,
    pub description: String,
    pub price_paise: Option<i64>,
    pub link: Option<String>,
}

impl NewProduct {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank name, brand or type, or a
    /// negative price.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("brand", &self.brand),
            ("product_type", &self.product_type),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} must not be empty")));
            }
        }
        if let Some(price) = self.price_paise {
            if price < 0 {
                return Err(CoreError::Validation(format!(
                    "price must not be negative, got {price}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product() -> NewProduct {
        NewProduct {
            name: "Vitamin C Serum".into(),
            brand: "TruSkin".into(),
            product_type: "Serum".into(),
            skin_type: SkinType::Normal,
            description: String::new(),
            price_paise: Some(149_900),
            link: None,
        }
    }

    #[test]
    fn valid_product_passes() {
        assert!(new_product().validate().is_ok());
    }

    #[test]
    fn blank_brand_is_rejected() {
        let product = NewProduct {
            brand: "  ".into(),
            ..new_product()
        };
        let err = product.validate().unwrap_err();
        assert!(err.to_string().contains("brand"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let product = NewProduct {
            price_paise: Some(-1),
            ..new_product()
        };
        assert!(matches!(product.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn display_name_joins_brand_and_name() {
        let product = Product {
            id: 1,
            name: "Vitamin C Serum".into(),
            brand: "TruSkin".into(),
            product_type: "Serum".into(),
            skin_type: SkinType::Normal,
            description: String::new(),
            price_paise: None,
            link: None,
        };
        assert_eq!(product.display_name(), "TruSkin - Vitamin C Serum");
    }
}
