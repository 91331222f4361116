//! Service Layer
//!
//! Use cases over the list store: list everything, add, edit, delete.

mod list_service;

pub use list_service::{ListService, ListsSnapshot};
