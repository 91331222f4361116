//! List Service
//!
//! Validates client-supplied targets, then issues exactly one store call per write.
//! No state is cached between calls; every read goes to the store.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{DeleteSelector, DomainError, DomainResult, Item, ListTable};
use crate::repository::ListStore;

/// The three lists as read by `list_all`
///
/// Each list is a separate read, so the lists may reflect slightly different instants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListsSnapshot {
    pub daily: Vec<Item>,
    pub weekly: Vec<Item>,
    pub monthly: Vec<Item>,
}

#[derive(Clone)]
pub struct ListService {
    store: Arc<dyn ListStore>,
}

impl ListService {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> DomainResult<ListsSnapshot> {
        let daily = self.store.query_all(ListTable::Daily).await?;
        let weekly = self.store.query_all(ListTable::Weekly).await?;
        let monthly = self.store.query_all(ListTable::Monthly).await?;

        debug!(
            daily = daily.len(),
            weekly = weekly.len(),
            monthly = monthly.len(),
            "Loaded lists"
        );

        Ok(ListsSnapshot {
            daily,
            weekly,
            monthly,
        })
    }

    /// Add `title` to the list named by `table`; the title is stored verbatim
    pub async fn add(&self, table: &str, title: &str) -> DomainResult<i64> {
        let table: ListTable = table.parse()?;
        let id = self.store.insert(table, title).await?;
        info!(%table, id, "Item added");
        Ok(id)
    }

    /// Replace the title of `id` in `table`; a missing row is a no-op
    pub async fn edit(&self, table: &str, id: &str, title: &str) -> DomainResult<()> {
        let table: ListTable = table.parse()?;
        let id = parse_id(id)?;
        let changed = self.store.update(table, id, title).await?;
        info!(%table, id, changed, "Item updated");
        Ok(())
    }

    /// Remove the row a delete selector resolved to; a missing row is a no-op
    pub async fn delete(&self, selector: DeleteSelector) -> DomainResult<()> {
        let changed = self.store.delete_row(selector.table, selector.id).await?;
        info!(table = %selector.table, id = selector.id, changed, "Item deleted");
        Ok(())
    }
}

fn parse_id(raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::MalformedRequest(format!("item id {:?} is not an integer", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryListStore;
    use async_trait::async_trait;

    fn service() -> ListService {
        ListService::new(Arc::new(MemoryListStore::new()))
    }

    struct BrokenStore;

    #[async_trait]
    impl ListStore for BrokenStore {
        async fn query_all(&self, _table: ListTable) -> DomainResult<Vec<Item>> {
            Err(DomainError::Storage("connection lost".into()))
        }
        async fn insert(&self, _table: ListTable, _title: &str) -> DomainResult<i64> {
            Err(DomainError::Storage("connection lost".into()))
        }
        async fn update(&self, _table: ListTable, _id: i64, _title: &str) -> DomainResult<u64> {
            Err(DomainError::Storage("connection lost".into()))
        }
        async fn delete_row(&self, _table: ListTable, _id: i64) -> DomainResult<u64> {
            Err(DomainError::Storage("connection lost".into()))
        }
    }

    #[tokio::test]
    async fn test_add_appends_to_matching_list() {
        let svc = service();
        svc.add("items", "Buy milk").await.unwrap();

        let lists = svc.list_all().await.unwrap();
        assert_eq!(lists.daily.last().map(|i| i.title.as_str()), Some("Buy milk"));
        assert!(lists.weekly.is_empty());
        assert!(lists.monthly.is_empty());
    }

    #[tokio::test]
    async fn test_add_assigns_increasing_ids() {
        let svc = service();
        let first = svc.add("items_week", "one").await.unwrap();
        let second = svc.add("items_week", "two").await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_add_rejects_unknown_table() {
        let svc = service();
        let err = svc.add("bogus", "x").await.unwrap_err();
        assert_eq!(err, DomainError::InvalidTarget("bogus".into()));

        assert_eq!(svc.list_all().await.unwrap(), ListsSnapshot::default());
    }

    #[tokio::test]
    async fn test_add_accepts_empty_title() {
        let svc = service();
        svc.add("items_month", "").await.unwrap();
        let lists = svc.list_all().await.unwrap();
        assert_eq!(lists.monthly, vec![Item::new(1, "")]);
    }

    #[tokio::test]
    async fn test_edit_replaces_title() {
        let svc = service();
        let id = svc.add("items_month", "Pay rent").await.unwrap();
        svc.edit("items_month", &id.to_string(), "Pay rent (done)").await.unwrap();

        let lists = svc.list_all().await.unwrap();
        assert_eq!(lists.monthly, vec![Item::new(id, "Pay rent (done)")]);
    }

    #[tokio::test]
    async fn test_edit_missing_id_is_noop() {
        let svc = service();
        svc.add("items", "keep").await.unwrap();
        let before = svc.list_all().await.unwrap();

        svc.edit("items", "42", "changed").await.unwrap();
        assert_eq!(svc.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_edit_validates_table_before_id() {
        let svc = service();
        let err = svc.edit("nope", "abc", "x").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidTarget(_)));

        let err = svc.edit("items", "abc", "x").await.unwrap_err();
        assert!(matches!(err, DomainError::MalformedRequest(_)));
    }

    #[tokio::test]
    async fn test_delete_only_touches_selected_table() {
        let svc = service();
        svc.add("items", "daily").await.unwrap();
        let week_id = svc.add("items_week", "weekly").await.unwrap();
        svc.add("items_month", "monthly").await.unwrap();

        svc.delete(DeleteSelector::new(ListTable::Weekly, week_id)).await.unwrap();

        let lists = svc.list_all().await.unwrap();
        assert_eq!(lists.daily.len(), 1);
        assert!(lists.weekly.is_empty());
        assert_eq!(lists.monthly.len(), 1);
    }

    #[tokio::test]
    async fn test_add_then_delete_restores_table() {
        let svc = service();
        svc.add("items", "existing").await.unwrap();
        let before = svc.list_all().await.unwrap();

        let id = svc.add("items", "temporary").await.unwrap();
        assert_eq!(svc.list_all().await.unwrap().daily.len(), 2);

        svc.delete(DeleteSelector::new(ListTable::Daily, id)).await.unwrap();
        assert_eq!(svc.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let svc = ListService::new(Arc::new(BrokenStore));

        assert!(matches!(svc.list_all().await, Err(DomainError::Storage(_))));
        assert!(matches!(svc.add("items", "x").await, Err(DomainError::Storage(_))));
        assert!(matches!(svc.edit("items", "1", "x").await, Err(DomainError::Storage(_))));
        assert!(matches!(
            svc.delete(DeleteSelector::new(ListTable::Monthly, 1)).await,
            Err(DomainError::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_validation_short_circuits_before_storage() {
        let svc = ListService::new(Arc::new(BrokenStore));
        assert!(matches!(svc.add("bogus", "x").await, Err(DomainError::InvalidTarget(_))));
        assert!(matches!(svc.edit("bogus", "1", "x").await, Err(DomainError::InvalidTarget(_))));
    }
}
