use crate::db::{DbConnection, DbPool};
use crate::domain::achievement::SearchResult;
use crate::domain::search::SearchStrategy;

pub mod achievement;
pub mod errors;

use errors::RepositoryResult;

pub trait AchievementReader {
    /// Runs `strategy` against the catalog, returning at most
    /// [`crate::RESULT_LIMIT`] rows in the strategy's order.
    fn search_achievements(
        &self,
        strategy: &SearchStrategy,
    ) -> RepositoryResult<Vec<SearchResult>>;
}

/// Diesel-backed repository over the shared connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
