// src/store/mod.rs
//! Durable color → frequency store.
//!
//! The runner only talks to [`FrequencySink`]. [`SqliteStore`] keeps an embedded
//! file for local runs and tests; [`PgStore`] writes to a PostgreSQL server when
//! the configuration points at a remote host. Each call opens its own connection
//! and drops it before returning, so nothing stays open between runs or after an
//! error.
use std::{ io, path::PathBuf };

use crate::config::{ Backend, DbConfig };
use crate::config::consts::FREQUENCY_TABLE;
use crate::stats::FrequencyTable;

pub mod sqlite;
#[cfg(feature = "postgres")]
pub mod pg;

pub use sqlite::SqliteStore;
#[cfg(feature = "postgres")]
pub use pg::PgStore;

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("host {host:?} is not reachable by the embedded store")]
    RemoteHost { host: String },
    #[error("DB_PASSWORD is required to connect to {host}")]
    MissingPassword { host: String },
    #[error("failed to prepare database directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("failed to open database {path}: {source}")]
    Open { path: PathBuf, source: rusqlite::Error },
    #[error("{context} failed: {source}")]
    Query { context: &'static str, source: rusqlite::Error },
    #[cfg(feature = "postgres")]
    #[error("failed to connect to {host}: {source}")]
    Connect { host: String, source: postgres::Error },
    #[cfg(feature = "postgres")]
    #[error("{context} failed: {source}")]
    Server { context: &'static str, source: postgres::Error },
    #[error("count {count} for {color} does not fit the frequency column")]
    CountRange { color: String, count: usize },
}

impl DatabaseError {
    fn query(context: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Query { context, source }
    }

    #[cfg(feature = "postgres")]
    fn server(context: &'static str) -> impl FnOnce(postgres::Error) -> Self {
        move |source| Self::Server { context, source }
    }
}

/// Anything that can take a frequency table and keep it.
pub trait FrequencySink {
    /// Insert-or-update one row per unique label. Returns rows written.
    fn upsert(&mut self, table: &FrequencyTable) -> Result<usize, DatabaseError>;
}

/// Same DDL for both dialects.
fn create_table_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {FREQUENCY_TABLE} (
            color VARCHAR(50) PRIMARY KEY,
            frequency INTEGER
        )"
    )
}

/// The backend [`DbConfig::resolved_backend`] picks.
pub enum Store {
    Sqlite(SqliteStore),
    #[cfg(feature = "postgres")]
    Postgres(PgStore),
}

impl Store {
    pub fn from_config(cfg: DbConfig) -> Self {
        match cfg.resolved_backend() {
            Backend::Sqlite => Self::Sqlite(SqliteStore::new(cfg)),
            #[cfg(feature = "postgres")]
            Backend::Postgres => Self::Postgres(PgStore::new(cfg)),
            #[cfg(not(feature = "postgres"))]
            Backend::Postgres => {
                logd!("Built without the postgres feature; using the embedded store");
                Self::Sqlite(SqliteStore::new(cfg))
            }
        }
    }

    pub fn config(&self) -> &DbConfig {
        match self {
            Self::Sqlite(s) => s.config(),
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.config(),
        }
    }

    /// Where the rows live, for messages.
    pub fn location(&self) -> String {
        match self {
            Self::Sqlite(s) => s.config().database_path().display().to_string(),
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => {
                let cfg = s.config();
                format!("postgres://{}@{}/{}", cfg.user, cfg.host, cfg.name)
            }
        }
    }

    /// Stored `(color, frequency)` rows ordered by color.
    pub fn load(&self) -> Result<Vec<(String, i64)>, DatabaseError> {
        match self {
            Self::Sqlite(s) => s.load(),
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.load(),
        }
    }
}

impl FrequencySink for Store {
    fn upsert(&mut self, table: &FrequencyTable) -> Result<usize, DatabaseError> {
        match self {
            Self::Sqlite(s) => s.upsert(table),
            #[cfg(feature = "postgres")]
            Self::Postgres(s) => s.upsert(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_host_gets_the_embedded_store() {
        let store = Store::from_config(DbConfig::default());
        assert!(matches!(store, Store::Sqlite(_)));
        assert!(store.location().ends_with("color_analysis.sqlite3"));
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn remote_host_gets_the_server_store() {
        let store = Store::from_config(DbConfig::default().with_host("db.internal"));
        assert!(matches!(store, Store::Postgres(_)));
        assert_eq!(store.location(), "postgres://postgres@db.internal/color_analysis");
    }

    #[test]
    fn explicit_backend_overrides_the_host() {
        let cfg = DbConfig::default()
            .with_host("db.internal")
            .with_backend(Backend::Sqlite);
        assert!(matches!(Store::from_config(cfg), Store::Sqlite(_)));
    }
}
