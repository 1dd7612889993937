//! Configuration model loaded from external sources.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, Map};
use serde::Deserialize;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 15432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "postgres";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Connection parameters for the catalog database and the HTTP listen port.
///
/// Every field maps to an upper-cased environment variable (`DB_HOST`,
/// `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `PORT`). Unset or empty
/// variables fall back to the `DEFAULT_*` constants.
pub struct ServerConfig {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub port: u16,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("db_host", DEFAULT_DB_HOST)?
        .set_default("db_port", i64::from(DEFAULT_DB_PORT))?
        .set_default("db_user", DEFAULT_DB_USER)?
        .set_default("db_password", DEFAULT_DB_PASSWORD)?
        .set_default("db_name", DEFAULT_DB_NAME)?
        .set_default("port", i64::from(DEFAULT_PORT))
}

impl ServerConfig {
    /// Builds the configuration from defaults, an optional `config.yaml` in
    /// the working directory, and finally the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::default().ignore_empty(true))
            .build()?
            .try_deserialize()
    }

    /// Same as [`ServerConfig::from_env`] but reads variables from `vars`
    /// instead of the process environment and skips the config file.
    pub fn from_source(vars: Map<String, String>) -> Result<Self, ConfigError> {
        defaults()?
            .add_source(Environment::default().ignore_empty(true).source(Some(vars)))
            .build()?
            .try_deserialize()
    }

    /// libpq key/value connection string.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode=disable",
            quote_conninfo(&self.db_host),
            self.db_port,
            quote_conninfo(&self.db_user),
            quote_conninfo(&self.db_password),
            quote_conninfo(&self.db_name),
        )
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Quotes a conninfo value when libpq would otherwise misread it.
fn quote_conninfo(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
