use crate::domain::achievement::SearchResult;
use crate::domain::search::{EmptyQuery, SearchQuery, SearchStrategy};
use crate::repository::AchievementReader;
use crate::repository::errors::RepositoryError;

/// Ways a search request can fail.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SearchError {
    /// The caller sent no usable query.
    #[error("{0}")]
    Validation(String),
    /// The store rejected the query or returned an undecodable row.
    #[error("{0}")]
    Store(String),
}

impl From<EmptyQuery> for SearchError {
    fn from(err: EmptyQuery) -> Self {
        SearchError::Validation(err.to_string())
    }
}

impl From<RepositoryError> for SearchError {
    fn from(err: RepositoryError) -> Self {
        SearchError::Store(err.to_string())
    }
}

/// Validates `query`, picks the matching strategy by its length and runs it
/// against the repository. Any store failure discards the whole result set.
pub fn search_achievements<R>(query: &str, repo: &R) -> Result<Vec<SearchResult>, SearchError>
where
    R: AchievementReader + ?Sized,
{
    let query = SearchQuery::try_from(query)?;
    let strategy = SearchStrategy::select(query);

    log::debug!("Searching achievements: {strategy:?}");

    let results = repo.search_achievements(&strategy)?;
    Ok(results)
}
