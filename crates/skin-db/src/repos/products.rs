//! Product repository: the catalog routines draw from.
//!
//! Lists are always ordered by ascending id, which is the order routine
//! generation relies on for its "first match" rule.

use skin_core::entities::{NewProduct, Product};
use skin_core::enums::SkinType;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_enum};
use crate::service::SkinService;

const PRODUCT_COLUMNS: &str =
    "id, name, brand, product_type, skin_type, description, price_paise, link";

pub(crate) fn row_to_product(row: &libsql::Row) -> Result<Product, DatabaseError> {
    row_to_product_at(row, 0)
}

/// Parse a product whose columns start at `offset` (for joins).
pub(crate) fn row_to_product_at(row: &libsql::Row, offset: i32) -> Result<Product, DatabaseError> {
    Ok(Product {
        id: row.get::<i64>(offset)?,
        name: row.get::<String>(offset + 1)?,
        brand: row.get::<String>(offset + 2)?,
        product_type: row.get::<String>(offset + 3)?,
        skin_type: parse_enum(&row.get::<String>(offset + 4)?)?,
        description: row.get::<String>(offset + 5)?,
        price_paise: row.get::<Option<i64>>(offset + 6)?,
        link: get_opt_string(row, offset + 7)?,
    })
}

impl SkinService {
    /// Add a product to the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` (wrapped) for invalid fields, or a
    /// libSQL error if the same name and brand already exist.
    pub async fn insert_product(&self, product: &NewProduct) -> Result<Product, DatabaseError> {
        product.validate()?;
        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO products (name, brand, product_type, skin_type, description, price_paise, link)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            libsql::params![
                product.name.as_str(),
                product.brand.as_str(),
                product.product_type.as_str(),
                product.skin_type.as_str(),
                product.description.as_str(),
                product.price_paise,
                product.link.as_deref()
            ],
        )
        .await?;

        Ok(Product {
            id: conn.last_insert_rowid(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            product_type: product.product_type.clone(),
            skin_type: product.skin_type,
            description: product.description.clone(),
            price_paise: product.price_paise,
            link: product.link.clone(),
        })
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if no product has this id.
    pub async fn get_product(&self, id: i64) -> Result<Product, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("product", id))?;
        row_to_product(&row)
    }

    /// List catalog products, optionally for one skin type, id ascending.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_products(
        &self,
        skin_type: Option<SkinType>,
        limit: Option<u32>,
    ) -> Result<Vec<Product>, DatabaseError> {
        let mut sql = format!("SELECT {PRODUCT_COLUMNS} FROM products");
        let mut params: Vec<libsql::Value> = Vec::new();
        if let Some(skin_type) = skin_type {
            sql.push_str(" WHERE skin_type = ?1");
            params.push(skin_type.as_str().into());
        }
        sql.push_str(" ORDER BY id");
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut products = Vec::new();
        while let Some(row) = rows.next().await? {
            products.push(row_to_product(&row)?);
        }
        Ok(products)
    }

    /// Every product tagged with `tag`, id ascending. Unknown tags match nothing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn products_for_tag(&self, tag: &str) -> Result<Vec<Product>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE skin_type = ?1 ORDER BY id"),
                [tag],
            )
            .await?;
        let mut products = Vec::new();
        while let Some(row) = rows.next().await? {
            products.push(row_to_product(&row)?);
        }
        Ok(products)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn products_for_skin_type(
        &self,
        skin_type: SkinType,
    ) -> Result<Vec<Product>, DatabaseError> {
        self.products_for_tag(skin_type.as_str()).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_products(&self) -> Result<usize, DatabaseError> {
        self.db().count("SELECT COUNT(*) FROM products", ()).await
    }
}
