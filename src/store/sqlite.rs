use rusqlite::{OptionalExtension, Row, TransactionBehavior, params};

use super::Store;
use super::pool::{Pool, PooledConnection, build_pool};
use super::schema::SCHEMA;
use crate::config::DatabaseConfig;
use crate::error::{Error, Result};
use crate::types::*;

const CLIENT_COLUMNS: &str = "id, client_name, domain_url, client_id, password, original_password, \
     latest_pull_date, latest_pull_by, gsos_version";

pub struct SqliteStore {
    pool: Pool,
}

impl SqliteStore {
    pub fn new(config: DatabaseConfig) -> Result<Self> {
        Ok(Self {
            pool: build_pool(&config)?,
        })
    }

    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }

    /// Returns a pooled connection to the underlying database.
    /// This allows consuming applications to execute custom SQL.
    pub fn connection(&self) -> Result<PooledConnection> {
        self.conn()
    }
}

fn client_from_row(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        client_name: row.get(1)?,
        domain_url: row.get(2)?,
        client_id: row.get(3)?,
        password: row.get(4)?,
        original_password: row.get(5)?,
        latest_pull_date: row.get(6)?,
        latest_pull_by: row.get(7)?,
        gsos_version: row.get(8)?,
    })
}

fn history_from_row(row: &Row<'_>) -> rusqlite::Result<PullHistoryEntry> {
    Ok(PullHistoryEntry {
        id: row.get(0)?,
        client_id: row.get(1)?,
        pull_date: row.get(2)?,
        pull_by: row.get(3)?,
        version: row.get(4)?,
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    // Client operations

    fn list_clients(&self) -> Result<Vec<Client>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {CLIENT_COLUMNS} FROM clients ORDER BY client_name COLLATE NOCASE, id"
        ))?;

        let rows = stmt.query_map([], client_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn get_client(&self, id: i64) -> Result<Option<Client>> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE id = ?1"),
            params![id],
            client_from_row,
        )
        .optional()
        .map_err(Error::from)
    }

    fn create_client(
        &self,
        fields: &ClientFields,
        credential: Option<&Credential>,
    ) -> Result<i64> {
        let mut conn = self.conn()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO clients (client_name, domain_url, client_id, password, original_password,
                                  latest_pull_date, latest_pull_by, gsos_version)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                fields.client_name,
                fields.domain_url,
                fields.client_id,
                credential.map(|c| &c.hash),
                credential.map(|c| &c.plaintext),
                fields.latest_pull_date,
                fields.latest_pull_by,
                fields.gsos_version,
            ],
        )?;
        let id = tx.last_insert_rowid();

        if let (Some(pull_date), Some(pull_by)) = (&fields.latest_pull_date, &fields.latest_pull_by)
        {
            tx.execute(
                "INSERT INTO pull_history (client_id, pull_date, pull_by, version)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, pull_date, pull_by, fields.gsos_version],
            )?;
        }

        tx.commit()?;
        Ok(id)
    }

    fn update_client(
        &self,
        id: i64,
        fields: &ClientFields,
        credential: Option<&Credential>,
    ) -> Result<()> {
        let conn = self.conn()?;

        let rows = match credential {
            Some(credential) => conn.execute(
                "UPDATE clients SET client_name = ?1, domain_url = ?2, client_id = ?3,
                        latest_pull_date = ?4, latest_pull_by = ?5, gsos_version = ?6,
                        password = ?7, original_password = ?8
                 WHERE id = ?9",
                params![
                    fields.client_name,
                    fields.domain_url,
                    fields.client_id,
                    fields.latest_pull_date,
                    fields.latest_pull_by,
                    fields.gsos_version,
                    credential.hash,
                    credential.plaintext,
                    id,
                ],
            )?,
            None => conn.execute(
                "UPDATE clients SET client_name = ?1, domain_url = ?2, client_id = ?3,
                        latest_pull_date = ?4, latest_pull_by = ?5, gsos_version = ?6
                 WHERE id = ?7",
                params![
                    fields.client_name,
                    fields.domain_url,
                    fields.client_id,
                    fields.latest_pull_date,
                    fields.latest_pull_by,
                    fields.gsos_version,
                    id,
                ],
            )?,
        };

        if rows == 0 {
            tracing::debug!("update matched no client with id {id}");
        }
        Ok(())
    }

    fn delete_client(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()?
            .execute("DELETE FROM clients WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Pull history operations

    fn list_pull_history(&self, client_id: i64) -> Result<Vec<PullHistoryEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, client_id, pull_date, pull_by, version
             FROM pull_history WHERE client_id = ?1 ORDER BY pull_date DESC, id DESC",
        )?;

        let rows = stmt.query_map(params![client_id], history_from_row)?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn append_pull_history(&self, client_id: i64, entry: &NewPullHistory) -> Result<i64> {
        let mut conn = self.conn()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO pull_history (client_id, pull_date, pull_by, version)
             VALUES (?1, ?2, ?3, ?4)",
            params![client_id, entry.pull_date, entry.pull_by, entry.version],
        )?;
        let id = tx.last_insert_rowid();

        tx.execute(
            "UPDATE clients SET latest_pull_date = ?1, latest_pull_by = ?2, gsos_version = ?3
             WHERE id = ?4",
            params![entry.pull_date, entry.pull_by, entry.version, client_id],
        )?;

        tx.commit()?;
        Ok(id)
    }
}
