//! Helpers for integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use achievement_search::domain::achievement::{Achievement, SearchResult};
use achievement_search::domain::search::SearchStrategy;
use achievement_search::repository::AchievementReader;
use achievement_search::repository::errors::{RepositoryError, RepositoryResult};
use achievement_search::routes::router;
use achievement_search::{RESULT_LIMIT, SIMILARITY_THRESHOLD};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// In-memory stand-in for the `achievement` table that scores names the way
/// `pg_trgm` does.
#[derive(Default)]
pub struct MemoryCatalog {
    rows: Vec<Achievement>,
    calls: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new(rows: &[(i32, &str)]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|(id, name)| Achievement::new(*id, *name))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AchievementReader for MemoryCatalog {
    fn search_achievements(
        &self,
        strategy: &SearchStrategy,
    ) -> RepositoryResult<Vec<SearchResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let query = strategy.query().as_str();
        let needle = query.to_lowercase();
        let contains = |name: &str| name.to_lowercase().contains(&needle);

        let mut results: Vec<SearchResult> = match strategy {
            SearchStrategy::ShortQuery(_) => {
                let mut hits: Vec<SearchResult> = self
                    .rows
                    .iter()
                    .filter(|row| contains(&row.name))
                    .map(|row| row.clone().scored(0.0))
                    .collect();
                hits.sort_by(|a, b| a.name.cmp(&b.name));
                hits
            }
            SearchStrategy::Similarity(_) => {
                let mut hits: Vec<SearchResult> = self
                    .rows
                    .iter()
                    .filter_map(|row| {
                        let score = trigram_similarity(&row.name, query);
                        (f64::from(score) > SIMILARITY_THRESHOLD || contains(&row.name))
                            .then(|| row.clone().scored(f64::from(score)))
                    })
                    .collect();
                hits.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
                hits
            }
        };

        results.truncate(RESULT_LIMIT as usize);
        Ok(results)
    }
}

/// Repository whose every query fails like a dropped database connection.
#[derive(Default)]
pub struct BrokenStore {
    calls: AtomicUsize,
}

impl BrokenStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AchievementReader for BrokenStore {
    fn search_achievements(&self, _: &SearchStrategy) -> RepositoryResult<Vec<SearchResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RepositoryError::Query(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection unexpectedly".to_string()),
        )))
    }
}

/// Trigram set of `text` following `pg_trgm`: lower-cased alphanumeric
/// words, each padded with two leading blanks and one trailing blank.
fn trigrams(text: &str) -> BTreeSet<[char; 3]> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .flat_map(|word| {
            let padded: Vec<char> = format!("  {word} ").chars().collect();
            padded
                .windows(3)
                .map(|w| [w[0], w[1], w[2]])
                .collect::<Vec<_>>()
        })
        .collect()
}

pub fn trigram_similarity(a: &str, b: &str) -> f32 {
    let left = trigrams(a);
    let right = trigrams(b);
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let shared = left.intersection(&right).count();
    shared as f32 / (left.len() + right.len() - shared) as f32
}

/// Serves the application router on an ephemeral local port and returns its
/// base URL.
pub async fn serve<R>(repo: Arc<R>) -> String
where
    R: AchievementReader + Send + Sync + 'static,
{
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener.");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address.");

    tokio::spawn(async move {
        axum::serve(listener, router(repo))
            .await
            .expect("Test server crashed.");
    });

    format!("http://{addr}")
}
