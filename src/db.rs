//! SQLite pool for the advocate directory.
//!
//! Every connection handed out by the pool has the pragmas from
//! [`ConnectionOptions`] applied and the `unicode_lower` SQL function
//! registered, which the search filter relies on.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use diesel::QueryResult;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

define_sql_function! {
    /// Full Unicode lower-casing. SQLite's own `lower()` and `LIKE` fold
    /// ASCII letters only.
    fn unicode_lower(value: Text) -> Text;
}

/// Lower-casing used on both sides of every search comparison.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

fn register_functions(conn: &mut SqliteConnection) -> QueryResult<()> {
    unicode_lower_utils::register_impl(conn, |value: String| fold_case(&value))
}

/// Per-connection setup run by the pool on acquire.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    /// Readers keep working while the seeder writes.
    pub enable_wal: bool,
    /// How long to wait on a locked database before failing.
    pub busy_timeout: Option<Duration>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            enable_wal: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ConnectionOptions {
    fn pragmas(&self) -> String {
        let mut pragmas = String::new();
        if self.enable_wal {
            pragmas.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        if let Some(timeout) = self.busy_timeout {
            pragmas.push_str(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()));
        }
        pragmas
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let pragmas = self.pragmas();
        if !pragmas.is_empty() {
            conn.batch_execute(&pragmas)
                .map_err(diesel::r2d2::Error::QueryError)?;
        }
        register_functions(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds the pool for `database_url` with the default [`ConnectionOptions`].
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions::default()))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get()
        .inspect_err(|e| error!("Failed to get connection from pool: {e}"))
}
