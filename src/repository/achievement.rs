use diesel::dsl::sql;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Float, Integer, Text};

use crate::domain::achievement::{Achievement, SearchResult};
use crate::domain::search::SearchStrategy;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AchievementReader, DieselRepository};
use crate::schema::{achievement, similarity};
use crate::{RESULT_LIMIT, SIMILARITY_THRESHOLD};

type SubstringListing<'a> = achievement::BoxedQuery<'a, Pg, (Integer, Text)>;
type SimilarityRanking<'a> = achievement::BoxedQuery<'a, Pg, (Integer, Text, Float)>;

/// Names containing `pattern`, alphabetical.
fn substring_listing<'a>(pattern: String) -> SubstringListing<'a> {
    achievement::table
        .select((achievement::id, achievement::name))
        .filter(achievement::name.ilike(pattern))
        .order(achievement::name.asc())
        .limit(RESULT_LIMIT)
        .into_boxed()
}

/// Names scoring above the threshold or containing `pattern`, best first.
fn similarity_ranking<'a>(query: &'a str, pattern: String) -> SimilarityRanking<'a> {
    // An untyped literal makes Postgres widen the `real` score to double
    // precision before comparing.
    let threshold = sql::<Float>(&SIMILARITY_THRESHOLD.to_string());

    // Substring matches qualify even when their score is low.
    achievement::table
        .select((
            achievement::id,
            achievement::name,
            similarity(achievement::name, query),
        ))
        .filter(
            similarity(achievement::name, query)
                .gt(threshold)
                .or(achievement::name.ilike(pattern)),
        )
        .order(similarity(achievement::name, query).desc())
        .limit(RESULT_LIMIT)
        .into_boxed()
}

impl AchievementReader for DieselRepository {
    fn search_achievements(
        &self,
        strategy: &SearchStrategy,
    ) -> RepositoryResult<Vec<SearchResult>> {
        let mut conn = self.conn()?;
        let pattern = strategy.substring_pattern();

        match strategy {
            SearchStrategy::ShortQuery(_) => {
                let rows = substring_listing(pattern).load::<(i32, String)>(&mut conn)?;

                Ok(rows
                    .into_iter()
                    .map(|(id, name)| Achievement::new(id, name).scored(0.0))
                    .collect())
            }
            SearchStrategy::Similarity(query) => {
                let rows = similarity_ranking(query.as_str(), pattern)
                    .load::<(i32, String, f32)>(&mut conn)?;

                Ok(rows
                    .into_iter()
                    .map(|(id, name, score)| Achievement::new(id, name).scored(f64::from(score)))
                    .collect())
            }
        }
    }
}
