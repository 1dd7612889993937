//! HTTP surface: a liveness probe and the achievement search endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::achievement::SearchResult;
use crate::processing::search::{SearchError, search_achievements};
use crate::repository::AchievementReader;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Builds the application router around an explicitly supplied repository.
pub fn router<R>(repo: Arc<R>) -> Router
where
    R: AchievementReader + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/achievements", get(handle_search::<R>))
        .with_state(repo)
}

async fn health() -> &'static str {
    "ok"
}

async fn handle_search<R>(
    State(repo): State<Arc<R>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<SearchResult>>, SearchError>
where
    R: AchievementReader + Send + Sync + 'static,
{
    let query = first_query(params);

    // Diesel blocks, so keep it off the async workers.
    let results = tokio::task::spawn_blocking(move || search_achievements(&query, repo.as_ref()))
        .await
        .map_err(|e| SearchError::Store(e.to_string()))??;

    Ok(Json(results))
}

/// First `query` value in the request; repeats are ignored.
fn first_query(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find(|(key, _)| key == "query")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = match &self {
            SearchError::Validation(msg) => {
                log::warn!("Rejected search request: {msg}");
                StatusCode::BAD_REQUEST
            }
            SearchError::Store(msg) => {
                log::error!("Achievement search failed: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
