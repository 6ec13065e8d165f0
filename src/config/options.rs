// src/config/options.rs
use std::env;
use std::path::{ Path, PathBuf };
use super::consts::*;

/// Which store a [`DbConfig`] talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Embedded file under `dir`.
    Sqlite,
    /// Server at `host`.
    Postgres,
}

impl Backend {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Some(Self::Sqlite),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Connection settings for the frequency store.
///
/// Built once (usually from the environment) and handed to the store's
/// constructor; nothing downstream reads the environment itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    pub name: String,
    pub user: String,
    pub password: Option<String>,
    pub host: String,
    pub dir: PathBuf,
    /// Explicit choice from `DB_BACKEND`; `None` means decide by host.
    pub backend: Option<Backend>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            name: s!(DEFAULT_DB_NAME),
            user: s!(DEFAULT_DB_USER),
            password: None,
            host: s!(DEFAULT_DB_HOST),
            dir: PathBuf::from(STORE_DIR),
            backend: None,
        }
    }
}

impl DbConfig {
    /// Read `DB_NAME`, `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_DIR` and
    /// `DB_BACKEND`, falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`] but with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_DB_NAME) { cfg.name = v; }
        if let Some(v) = lookup(ENV_DB_USER) { cfg.user = v; }
        if let Some(v) = lookup(ENV_DB_HOST) { cfg.host = v; }
        if let Some(v) = lookup(ENV_DB_DIR) { cfg.dir = PathBuf::from(v); }
        cfg.password = lookup(ENV_DB_PASSWORD).filter(|v| !v.is_empty());
        cfg.backend = lookup(ENV_DB_BACKEND).and_then(|v| {
            let parsed = Backend::parse(&v);
            if parsed.is_none() {
                logd!("Ignoring unknown {ENV_DB_BACKEND}={v:?}");
            }
            parsed
        });
        cfg
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// `<dir>/<name>.sqlite3`
    pub fn database_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, DB_FILE_EXT))
    }

    pub fn is_local_host(&self) -> bool {
        LOCAL_HOSTS.contains(&self.host.trim())
    }

    /// `DB_BACKEND` if given; otherwise SQLite for a local host and
    /// PostgreSQL for anything else.
    pub fn resolved_backend(&self) -> Backend {
        self.backend.unwrap_or(if self.is_local_host() {
            Backend::Sqlite
        } else {
            Backend::Postgres
        })
    }
}
