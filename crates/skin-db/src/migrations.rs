//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::SkinDb;
use crate::error::DatabaseError;

/// Initial schema: 7 tables, 3 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

/// Community: reviews, helpful marks, shared routines, steps and likes.
const MIGRATION_002: &str = include_str!("../migrations/002_community.sql");

impl SkinDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        self.conn
            .execute_batch(MIGRATION_002)
            .await
            .map_err(|e| DatabaseError::Migration(format!("002_community: {e}")))?;
        Ok(())
    }
}
