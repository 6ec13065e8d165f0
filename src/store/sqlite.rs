// src/store/sqlite.rs
use std::fs;

use rusqlite::{ Connection, TransactionBehavior, params };

use super::{ DatabaseError, FrequencySink, create_table_sql };
use crate::config::DbConfig;
use crate::config::consts::FREQUENCY_TABLE;
use crate::stats::FrequencyTable;

/// Embedded store at `<dir>/<name>.sqlite3`.
pub struct SqliteStore {
    cfg: DbConfig,
}

impl SqliteStore {
    pub fn new(cfg: DbConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &DbConfig {
        &self.cfg
    }

    /// Stored `(color, frequency)` rows ordered by color.
    pub fn load(&self) -> Result<Vec<(String, i64)>, DatabaseError> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT color, frequency FROM {FREQUENCY_TABLE} ORDER BY color"
            ))
            .map_err(DatabaseError::query("prepare select"))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
            .map_err(DatabaseError::query("select frequencies"))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(DatabaseError::query("read frequency row"))?;
        Ok(rows)
    }

    fn connect(&self) -> Result<Connection, DatabaseError> {
        if !self.cfg.is_local_host() {
            return Err(DatabaseError::RemoteHost { host: self.cfg.host.clone() });
        }
        if self.cfg.password.is_none() {
            logd!("No DB_PASSWORD set; the embedded store does not use credentials");
        }

        fs::create_dir_all(&self.cfg.dir).map_err(|source| DatabaseError::CreateDir {
            path: self.cfg.dir.clone(),
            source,
        })?;
        let path = self.cfg.database_path();
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::Open { path: path.clone(), source })?;
        conn.execute_batch(&create_table_sql())
            .map_err(DatabaseError::query("create table"))?;

        logd!("Opened {} as {}", path.display(), self.cfg.user);
        Ok(conn)
    }
}

impl FrequencySink for SqliteStore {
    fn upsert(&mut self, table: &FrequencyTable) -> Result<usize, DatabaseError> {
        let mut conn = self.connect()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(DatabaseError::query("begin transaction"))?;
        {
            let mut stmt = tx
                .prepare(&format!(
                    "INSERT INTO {FREQUENCY_TABLE} (color, frequency) VALUES (?1, ?2)
                     ON CONFLICT(color) DO UPDATE SET frequency = excluded.frequency"
                ))
                .map_err(DatabaseError::query("prepare upsert"))?;
            for (label, count) in table.iter() {
                let frequency = i64::try_from(count).map_err(|_| DatabaseError::CountRange {
                    color: label.to_string(),
                    count,
                })?;
                stmt.execute(params![label.as_str(), frequency])
                    .map_err(DatabaseError::query("upsert frequency"))?;
            }
        }
        tx.commit().map_err(DatabaseError::query("commit"))?;

        logf!("Stored {} color frequencies in {}", table.len(), self.cfg.database_path().display());
        Ok(table.len())
    }
}
