//! Item Entity
//!
//! A list entry. Which list it belongs to is structural (the table it lives in),
//! so an item is identified by the pair (`ListTable`, `id`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// The three persistence targets a request may address
///
/// Client strings never travel past `ListTable::parse`; statements are built from
/// `as_str()` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListTable {
    /// `items`
    Daily,
    /// `items_week`
    Weekly,
    /// `items_month`
    Monthly,
}

impl ListTable {
    pub const ALL: [ListTable; 3] = [ListTable::Daily, ListTable::Weekly, ListTable::Monthly];

    /// Literal table identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ListTable::Daily => "items",
            ListTable::Weekly => "items_week",
            ListTable::Monthly => "items_month",
        }
    }

    /// Exact match against the allow-list; no trimming, no case folding
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "items" => Some(ListTable::Daily),
            "items_week" => Some(ListTable::Weekly),
            "items_month" => Some(ListTable::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for ListTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListTable {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListTable::parse(s).ok_or_else(|| DomainError::InvalidTarget(s.to_string()))
    }
}

/// True iff `name` is exactly one of the known table identifiers
pub fn is_valid_target(name: &str) -> bool {
    ListTable::parse(name).is_some()
}

/// One row of a list table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Assigned by storage, unique within its table
    pub id: i64,
    pub title: String,
}

impl Item {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
