//! Repository Layer
//!
//! Storage gateway for the three list tables.

mod traits;
mod db;
mod list_repo;
mod memory;


pub use traits::ListStore;
pub use db::{connect_with_retry, open_db, RetryPolicy};
pub use list_repo::SqliteListStore;
pub use memory::MemoryListStore;
