//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for list persistence.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Item, ListTable};

/// Storage gateway over the three list tables
///
/// Table identifiers come from `ListTable` only; every value is bound as a
/// parameter. Errors are returned as `DomainError::Storage` and never retried here.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// All rows of `table`, ascending by id
    async fn query_all(&self, table: ListTable) -> DomainResult<Vec<Item>>;

    /// Insert a row and return its new id
    async fn insert(&self, table: ListTable, title: &str) -> DomainResult<i64>;

    /// Replace the title of row `id`; returns rows affected (0 when absent)
    async fn update(&self, table: ListTable, id: i64, title: &str) -> DomainResult<u64>;

    /// Remove row `id`; returns rows affected (0 when absent)
    async fn delete_row(&self, table: ListTable, id: i64) -> DomainResult<u64>;
}
