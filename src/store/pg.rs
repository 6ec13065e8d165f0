// src/store/pg.rs
//! PostgreSQL backend, used when `DB_HOST` names a server.
use postgres::{ Client, Config, NoTls };

use super::{ DatabaseError, FrequencySink, create_table_sql };
use crate::config::DbConfig;
use crate::config::consts::FREQUENCY_TABLE;
use crate::stats::FrequencyTable;

pub struct PgStore {
    cfg: DbConfig,
}

impl PgStore {
    pub fn new(cfg: DbConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &DbConfig {
        &self.cfg
    }

    /// Connection settings: database name, user, password and host.
    pub fn client_config(&self) -> Config {
        let mut pg = Config::new();
        pg.dbname(&self.cfg.name)
            .user(&self.cfg.user)
            .host(self.cfg.host.trim());
        if let Some(password) = &self.cfg.password {
            pg.password(password);
        }
        pg
    }

    /// Stored `(color, frequency)` rows ordered by color.
    pub fn load(&self) -> Result<Vec<(String, i64)>, DatabaseError> {
        let mut client = self.connect()?;
        let rows = client
            .query(
                &format!("SELECT color, frequency FROM {FREQUENCY_TABLE} ORDER BY color"),
                &[],
            )
            .map_err(DatabaseError::server("select frequencies"))?;
        rows.iter()
            .map(|row| -> Result<(String, i64), postgres::Error> {
                let color: String = row.try_get(0)?;
                let frequency: i32 = row.try_get(1)?;
                Ok((color, i64::from(frequency)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(DatabaseError::server("read frequency row"))
    }

    fn connect(&self) -> Result<Client, DatabaseError> {
        if self.cfg.password.is_none() {
            return Err(DatabaseError::MissingPassword { host: self.cfg.host.clone() });
        }
        let mut client = self
            .client_config()
            .connect(NoTls)
            .map_err(|source| DatabaseError::Connect { host: self.cfg.host.clone(), source })?;
        client
            .batch_execute(&create_table_sql())
            .map_err(DatabaseError::server("create table"))?;

        logd!("Connected to {}/{} as {}", self.cfg.host, self.cfg.name, self.cfg.user);
        Ok(client)
    }
}

impl FrequencySink for PgStore {
    fn upsert(&mut self, table: &FrequencyTable) -> Result<usize, DatabaseError> {
        let mut client = self.connect()?;
        let mut tx = client
            .transaction()
            .map_err(DatabaseError::server("begin transaction"))?;
        let stmt = tx
            .prepare(&format!(
                "INSERT INTO {FREQUENCY_TABLE} (color, frequency) VALUES ($1, $2)
                 ON CONFLICT (color) DO UPDATE SET frequency = EXCLUDED.frequency"
            ))
            .map_err(DatabaseError::server("prepare upsert"))?;
        for (label, count) in table.iter() {
            // INTEGER is 32-bit on the server
            let frequency = i32::try_from(count).map_err(|_| DatabaseError::CountRange {
                color: label.to_string(),
                count,
            })?;
            tx.execute(&stmt, &[&label.as_str(), &frequency])
                .map_err(DatabaseError::server("upsert frequency"))?;
        }
        tx.commit().map_err(DatabaseError::server("commit"))?;

        logf!("Stored {} color frequencies on {}", table.len(), self.cfg.host);
        Ok(table.len())
    }
}
