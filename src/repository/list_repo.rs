//! List Repository
//!
//! SQLite-backed implementation of `ListStore`. One connection is shared by every
//! request; each operation is a single statement run on the blocking pool so that
//! rusqlite never stalls a runtime worker.

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::traits::ListStore;
use crate::domain::{DomainError, DomainResult, Item, ListTable};

/// SQLite implementation of the list store
#[derive(Clone)]
pub struct SqliteListStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteListStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the shared connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> DomainResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| DomainError::Storage("connection lock poisoned".to_string()))?;
            f(&conn).map_err(DomainError::from)
        })
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?
    }
}

fn select_all(conn: &Connection, table: ListTable) -> rusqlite::Result<Vec<Item>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT id, title FROM {} ORDER BY id ASC",
        table.as_str()
    ))?;
    let items = stmt
        .query_map([], row_to_item)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(items)
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        title: row.get(1)?,
    })
}

#[async_trait]
impl ListStore for SqliteListStore {
    async fn query_all(&self, table: ListTable) -> DomainResult<Vec<Item>> {
        let items = self.with_conn(move |conn| select_all(conn, table)).await?;
        debug!(%table, rows = items.len(), "Fetched list");
        Ok(items)
    }

    async fn insert(&self, table: ListTable, title: &str) -> DomainResult<i64> {
        let title = title.to_string();
        self.with_conn(move |conn| {
            conn.execute(
                &format!("INSERT INTO {} (title) VALUES (?1)", table.as_str()),
                params![title],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    async fn update(&self, table: ListTable, id: i64, title: &str) -> DomainResult<u64> {
        let title = title.to_string();
        self.with_conn(move |conn| {
            let changed = conn.execute(
                &format!("UPDATE {} SET title = ?1 WHERE id = ?2", table.as_str()),
                params![title, id],
            )?;
            Ok(changed as u64)
        })
        .await
    }

    async fn delete_row(&self, table: ListTable, id: i64) -> DomainResult<u64> {
        self.with_conn(move |conn| {
            let changed = conn.execute(
                &format!("DELETE FROM {} WHERE id = ?1", table.as_str()),
                params![id],
            )?;
            Ok(changed as u64)
        })
        .await
    }
}
