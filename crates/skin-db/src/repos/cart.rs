//! Cart repository: one cart per user, one line per product.

use skin_core::cart::cart_totals;
use skin_core::entities::CartLine;
use skin_core::enums::CartAction;
use skin_core::responses::CartResponse;

use crate::error::DatabaseError;
use crate::helpers::get_u32;
use crate::repos::products::row_to_product_at;
use crate::service::SkinService;

const LINE_SELECT: &str = "SELECT ci.id, ci.quantity,
        p.id, p.name, p.brand, p.product_type, p.skin_type, p.description, p.price_paise, p.link
     FROM cart_items ci
     JOIN carts c ON c.id = ci.cart_id
     JOIN products p ON p.id = ci.product_id";

fn row_to_line(row: &libsql::Row) -> Result<CartLine, DatabaseError> {
    Ok(CartLine {
        item_id: row.get::<i64>(0)?,
        quantity: get_u32(row, 1)?,
        product: row_to_product_at(row, 2)?,
    })
}

impl SkinService {
    /// Id of the user's cart, creating it on first use.
    async fn cart_id(&self, user_id: &str) -> Result<i64, DatabaseError> {
        let conn = self.db().conn();
        conn.execute(
            "INSERT INTO carts (user_id) VALUES (?1) ON CONFLICT(user_id) DO NOTHING",
            [user_id],
        )
        .await?;
        let mut rows = conn
            .query("SELECT id FROM carts WHERE user_id = ?1", [user_id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }

    async fn touch_cart(&self, cart_id: i64) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "UPDATE carts SET updated_at = datetime('now') WHERE id = ?1",
                [cart_id],
            )
            .await?;
        Ok(())
    }

    async fn get_cart_line(
        &self,
        user_id: &str,
        item_id: i64,
    ) -> Result<Option<CartLine>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("{LINE_SELECT} WHERE c.user_id = ?1 AND ci.id = ?2"),
                libsql::params![user_id, item_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_line(&row)?)),
            None => Ok(None),
        }
    }

    /// Put one unit of a product in the user's cart. Adding a product that is
    /// already there increments its quantity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the product does not exist.
    pub async fn add_to_cart(
        &self,
        user_id: &str,
        product_id: i64,
    ) -> Result<CartLine, DatabaseError> {
        let product = self.get_product(product_id).await?;
        let cart_id = self.cart_id(user_id).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO cart_items (cart_id, product_id, quantity) VALUES (?1, ?2, 1)
                 ON CONFLICT(cart_id, product_id) DO UPDATE SET quantity = quantity + 1",
                libsql::params![cart_id, product_id],
            )
            .await?;
        self.touch_cart(cart_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, quantity FROM cart_items WHERE cart_id = ?1 AND product_id = ?2",
                libsql::params![cart_id, product_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let line = CartLine {
            item_id: row.get::<i64>(0)?,
            quantity: get_u32(&row, 1)?,
            product,
        };
        tracing::debug!(user = user_id, product = product_id, quantity = line.quantity, "added to cart");
        Ok(line)
    }

    /// The user's cart lines in the order they were first added.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn cart_lines(&self, user_id: &str) -> Result<Vec<CartLine>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("{LINE_SELECT} WHERE c.user_id = ?1 ORDER BY ci.id"),
                [user_id],
            )
            .await?;
        let mut lines = Vec::new();
        while let Some(row) = rows.next().await? {
            lines.push(row_to_line(&row)?);
        }
        Ok(lines)
    }

    /// Apply `action` to one of the user's cart lines.
    ///
    /// Returns the updated line, or `None` when the line was removed
    /// (`remove`, or `decrease` at quantity 1).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if the line is not in the user's cart.
    pub async fn update_cart_item(
        &self,
        user_id: &str,
        item_id: i64,
        action: CartAction,
    ) -> Result<Option<CartLine>, DatabaseError> {
        let line = self
            .get_cart_line(user_id, item_id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("cart item", item_id))?;

        let conn = self.db().conn();
        let updated = match action.apply(line.quantity) {
            Some(quantity) => {
                conn.execute(
                    "UPDATE cart_items SET quantity = ?1 WHERE id = ?2",
                    libsql::params![i64::from(quantity), item_id],
                )
                .await?;
                Some(CartLine { quantity, ..line })
            }
            None => {
                conn.execute("DELETE FROM cart_items WHERE id = ?1", [item_id])
                    .await?;
                None
            }
        };

        let cart_id = self.cart_id(user_id).await?;
        self.touch_cart(cart_id).await?;
        tracing::debug!(user = user_id, item = item_id, action = action.as_str(), "cart updated");
        Ok(updated)
    }

    /// Remove every line from the user's cart. Returns how many lines were removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn clear_cart(&self, user_id: &str) -> Result<u64, DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM cart_items WHERE cart_id IN (SELECT id FROM carts WHERE user_id = ?1)",
                [user_id],
            )
            .await?;
        Ok(removed)
    }

    /// Cart lines with totals at `tax_rate_bps`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn cart_view(
        &self,
        user_id: &str,
        tax_rate_bps: u32,
        currency: &str,
    ) -> Result<CartResponse, DatabaseError> {
        let lines = self.cart_lines(user_id).await?;
        let totals = cart_totals(&lines, tax_rate_bps);
        Ok(CartResponse {
            lines,
            totals,
            currency: currency.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use skin_core::cart::DEFAULT_TAX_RATE_BPS;
    use skin_core::enums::SkinType;

    use super::*;
    use crate::test_support::helpers::{add_product, test_service};

    #[tokio::test]
    async fn adding_twice_increments_quantity() {
        let svc = test_service().await;
        let product = add_product(&svc, "Serum", "Serum", SkinType::Dry, Some(100_000)).await;

        let first = svc.add_to_cart("local", product.id).await.unwrap();
        let second = svc.add_to_cart("local", product.id).await.unwrap();
        assert_eq!(first.item_id, second.item_id);
        assert_eq!(second.quantity, 2);
        assert_eq!(svc.cart_lines("local").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn adding_missing_product_fails() {
        let svc = test_service().await;
        assert!(svc.add_to_cart("local", 404).await.is_err());
    }

    #[tokio::test]
    async fn decrease_at_one_removes_line() {
        let svc = test_service().await;
        let product = add_product(&svc, "Mask", "Mask", SkinType::Oily, Some(20_000)).await;
        let line = svc.add_to_cart("local", product.id).await.unwrap();

        let updated = svc
            .update_cart_item("local", line.item_id, CartAction::Increase)
            .await
            .unwrap();
        assert_eq!(updated.map(|l| l.quantity), Some(2));

        let updated = svc
            .update_cart_item("local", line.item_id, CartAction::Decrease)
            .await
            .unwrap();
        assert_eq!(updated.map(|l| l.quantity), Some(1));

        let updated = svc
            .update_cart_item("local", line.item_id, CartAction::Decrease)
            .await
            .unwrap();
        assert!(updated.is_none());
        assert!(svc.cart_lines("local").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_users_lines_are_not_found() {
        let svc = test_service().await;
        let product = add_product(&svc, "Toner", "Toner", SkinType::Normal, None).await;
        let line = svc.add_to_cart("alice", product.id).await.unwrap();

        let err = svc
            .update_cart_item("bob", line.item_id, CartAction::Remove)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cart item"));
        assert_eq!(svc.cart_lines("alice").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn view_applies_gst() {
        let svc = test_service().await;
        let serum = add_product(&svc, "Serum", "Serum", SkinType::Dry, Some(50_000)).await;
        let cream = add_product(&svc, "Cream", "Moisturizer", SkinType::Dry, Some(25_000)).await;
        svc.add_to_cart("local", serum.id).await.unwrap();
        svc.add_to_cart("local", serum.id).await.unwrap();
        svc.add_to_cart("local", cream.id).await.unwrap();

        let view = svc
            .cart_view("local", DEFAULT_TAX_RATE_BPS, "INR")
            .await
            .unwrap();
        assert_eq!(view.totals.item_count, 3);
        assert_eq!(view.totals.subtotal_paise, 125_000);
        assert_eq!(view.totals.tax_paise, 22_500);
        assert_eq!(view.totals.total_paise, 147_500);
        let names: Vec<&str> = view.lines.iter().map(|l| l.product.name.as_str()).collect();
        assert_eq!(names, vec!["Serum", "Cream"]);
    }

    #[tokio::test]
    async fn clear_empties_only_this_cart() {
        let svc = test_service().await;
        let product = add_product(&svc, "Cleanser", "Cleanser", SkinType::Dry, None).await;
        svc.add_to_cart("alice", product.id).await.unwrap();
        svc.add_to_cart("bob", product.id).await.unwrap();

        assert_eq!(svc.clear_cart("alice").await.unwrap(), 1);
        assert!(svc.cart_lines("alice").await.unwrap().is_empty());
        assert_eq!(svc.cart_lines("bob").await.unwrap().len(), 1);
        assert_eq!(svc.clear_cart("nobody").await.unwrap(), 0);
    }
}
