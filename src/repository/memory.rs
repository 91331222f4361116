//! In-memory List Store
//!
//! Same observable semantics as the SQLite store: ascending ids, ids never reused
//! within a table, zero-row update/delete is not an error.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::traits::ListStore;
use crate::domain::{DomainResult, Item, ListTable};

#[derive(Default)]
struct Table {
    rows: Vec<Item>,
    last_id: i64,
}

/// Store backed by process memory, for tests and throwaway runs
#[derive(Default)]
pub struct MemoryListStore {
    tables: Mutex<HashMap<ListTable, Table>>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryListStore {
    async fn query_all(&self, table: ListTable) -> DomainResult<Vec<Item>> {
        let tables = self.tables.lock().await;
        Ok(tables.get(&table).map(|t| t.rows.clone()).unwrap_or_default())
    }

    async fn insert(&self, table: ListTable, title: &str) -> DomainResult<i64> {
        let mut tables = self.tables.lock().await;
        let entry = tables.entry(table).or_default();
        entry.last_id += 1;
        let id = entry.last_id;
        entry.rows.push(Item::new(id, title));
        Ok(id)
    }

    async fn update(&self, table: ListTable, id: i64, title: &str) -> DomainResult<u64> {
        let mut tables = self.tables.lock().await;
        let Some(entry) = tables.get_mut(&table) else {
            return Ok(0);
        };
        match entry.rows.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.title = title.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_row(&self, table: ListTable, id: i64) -> DomainResult<u64> {
        let mut tables = self.tables.lock().await;
        let Some(entry) = tables.get_mut(&table) else {
            return Ok(0);
        };
        let before = entry.rows.len();
        entry.rows.retain(|item| item.id != id);
        Ok((before - entry.rows.len()) as u64)
    }
}
