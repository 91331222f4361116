//! Domain Layer
//!
//! Contains the list entities and the rules that guard which tables a request may touch.
//! This layer has NO I/O (the rusqlite conversion in `error` is the only storage coupling).

mod error;
mod item;
mod selector;

pub use error::{DomainError, DomainResult};
pub use item::{is_valid_target, Item, ListTable};
pub use selector::DeleteSelector;
