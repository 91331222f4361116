//! Delete Selector
//!
//! A delete request names its table by *which* field it sends, never by value:
//! `deleteItemId` -> `items`, `deleteItemIdWeek` -> `items_week`,
//! `deleteItemIdMonth` -> `items_month`.

use super::error::{DomainError, DomainResult};
use super::item::ListTable;

/// A resolved delete target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteSelector {
    pub table: ListTable,
    pub id: i64,
}

impl DeleteSelector {
    pub fn new(table: ListTable, id: i64) -> Self {
        Self { table, id }
    }

    /// Form field that selects `table` in a delete request
    pub fn field_name(table: ListTable) -> &'static str {
        match table {
            ListTable::Daily => "deleteItemId",
            ListTable::Weekly => "deleteItemIdWeek",
            ListTable::Monthly => "deleteItemIdMonth",
        }
    }

    /// Resolve the three optional selector fields into a single target.
    ///
    /// A field counts as present when it is non-empty. Exactly one must be present
    /// and it must hold an integer id.
    pub fn from_fields(
        daily: Option<&str>,
        weekly: Option<&str>,
        monthly: Option<&str>,
    ) -> DomainResult<Self> {
        let present: Vec<(ListTable, &str)> = [
            (ListTable::Daily, daily),
            (ListTable::Weekly, weekly),
            (ListTable::Monthly, monthly),
        ]
        .into_iter()
        .filter_map(|(table, value)| value.filter(|v| !v.is_empty()).map(|v| (table, v)))
        .collect();

        match present.as_slice() {
            [(table, raw)] => {
                let id = raw.trim().parse::<i64>().map_err(|_| {
                    DomainError::MalformedRequest(format!("delete id {:?} is not an integer", raw))
                })?;
                Ok(Self::new(*table, id))
            }
            [] => Err(DomainError::MalformedRequest(
                "no delete selector supplied".to_string(),
            )),
            _ => Err(DomainError::MalformedRequest(
                "more than one delete selector supplied".to_string(),
            )),
        }
    }
}
