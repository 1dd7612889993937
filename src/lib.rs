pub mod db;
pub mod domain;
pub mod models;
pub mod processing;
pub mod repository;
pub mod routes;
pub mod schema;

/// Queries shorter than this many bytes skip similarity ranking.
pub const SHORT_QUERY_THRESHOLD: usize = 3;

/// Trigram similarity a name must exceed to match a long query. Compared in
/// double precision against the store's `real` score.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Maximum number of rows returned by a single search.
pub const RESULT_LIMIT: i64 = 20;
