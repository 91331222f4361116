//! Database Connection and Setup
//!
//! Opens the SQLite database, creates the list tables, and retries the whole
//! sequence with exponential backoff before giving up.

use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::domain::{DomainError, DomainResult, ListTable};

/// Bounded retry for establishing the storage connection
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, at least one is always made
    pub attempts: u32,
    /// Delay before the second attempt; doubles after each failure
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            backoff: Duration::from_millis(200),
        }
    }
}

impl RetryPolicy {
    fn delay_after(&self, failed_attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(failed_attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        self.backoff.saturating_mul(factor)
    }
}

/// Open the database at `path` and run migrations
///
/// `:memory:` opens a private in-memory database.
pub fn open_db(path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(path)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Open the database, retrying with backoff; the last error is returned on exhaustion
pub async fn connect_with_retry(path: &Path, policy: RetryPolicy) -> DomainResult<Connection> {
    let attempts = policy.attempts.max(1);
    let mut last_error = DomainError::Storage("no connection attempt made".to_string());

    for attempt in 1..=attempts {
        match open_db(path) {
            Ok(conn) => {
                info!(path = %path.display(), attempt, "Database ready");
                return Ok(conn);
            }
            Err(e) => {
                warn!(path = %path.display(), attempt, attempts, error = %e, "Database connection failed");
                last_error = e;
                if attempt < attempts {
                    tokio::time::sleep(policy.delay_after(attempt)).await;
                }
            }
        }
    }

    Err(last_error)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    for table in ListTable::ALL {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL
                )",
                table.as_str()
            ),
            (),
        )?;
    }
    Ok(())
}
