use std::path::PathBuf;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use advocate_directory::db::{DbPool, establish_connection_pool};
use advocate_directory::domain::advocate::NewAdvocate;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
///
/// The directory, and every file SQLite created in it, is removed on drop.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("build pool");
        {
            let mut conn = pool.get().expect("get connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }

        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[allow(dead_code)]
pub fn advocate(first: &str, last: &str, city: &str, phone: i64) -> NewAdvocate {
    NewAdvocate::new(
        first,
        last,
        city,
        "MD",
        vec!["Trauma & PTSD".to_string()],
        5,
        phone,
    )
    .expect("valid advocate")
}
