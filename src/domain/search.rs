//! Query validation and the length-based choice of matching strategy.

use std::fmt;

use crate::SHORT_QUERY_THRESHOLD;

/// A non-empty search string, taken verbatim from the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

/// Returned when the `query` parameter is absent or empty.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("query parameter is required")]
pub struct EmptyQuery;

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes, which is what the threshold is measured against.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for SearchQuery {
    type Error = EmptyQuery;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(EmptyQuery);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for SearchQuery {
    type Error = EmptyQuery;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(value.to_string())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the catalog is matched against a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Case-insensitive substring match, alphabetical, every score zero.
    ShortQuery(SearchQuery),
    /// Trigram similarity above the threshold or substring match, best first.
    Similarity(SearchQuery),
}

impl SearchStrategy {
    /// Picks the strategy for `query`. Short strings produce noisy trigram
    /// scores, so they fall back to plain substring listing.
    pub fn select(query: SearchQuery) -> Self {
        if query.len() < SHORT_QUERY_THRESHOLD {
            Self::ShortQuery(query)
        } else {
            Self::Similarity(query)
        }
    }

    pub fn query(&self) -> &SearchQuery {
        match self {
            Self::ShortQuery(query) | Self::Similarity(query) => query,
        }
    }

    /// `ILIKE` pattern matching `query` anywhere in a name. Wildcards inside
    /// the query are left as they are.
    pub fn substring_pattern(&self) -> String {
        format!("%{}%", self.query().as_str())
    }
}
