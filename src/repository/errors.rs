use diesel::r2d2::PoolError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Connection(#[from] PoolError),
    #[error("{0}")]
    Query(#[from] diesel::result::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
