//! Service layer over `SkinDb`.
//!
//! `SkinService` owns the database handle. All repository methods are
//! implemented as `impl SkinService` blocks under `repos/` and `seed`.

use crate::SkinDb;
use crate::error::DatabaseError;

pub struct SkinService {
    db: SkinDb,
}

impl SkinService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SkinDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `SkinDb`.
    #[must_use]
    pub const fn from_db(db: SkinDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SkinDb {
        &self.db
    }
}
