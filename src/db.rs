use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds an r2d2 pool for `database_url`. Fails when no connection can be
/// opened within the pool's connection timeout.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().build(manager)
}

/// Round-trips a trivial statement to prove the store is reachable.
pub fn ping(pool: &DbPool) -> Result<(), StartupError> {
    let mut conn = pool.get()?;
    diesel::sql_query("SELECT 1").execute(&mut conn)?;
    Ok(())
}

/// Failures that stop the process before it serves traffic.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("error opening database: {0}")]
    Pool(#[from] PoolError),
    #[error("error connecting to database: {0}")]
    Ping(#[from] diesel::result::Error),
    #[error("failed to start server: {0}")]
    Bind(#[from] std::io::Error),
}
