use serde::{Deserialize, Serialize};

/// A catalog entry as stored in the `achievement` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: i32,
    pub name: String,
}

impl Achievement {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Projects the achievement into a search hit with the given score.
    pub fn scored(self, similarity: f64) -> SearchResult {
        SearchResult {
            id: self.id,
            name: self.name,
            similarity,
        }
    }
}

/// One row of a search response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: i32,
    pub name: String,
    pub similarity: f64,
}
