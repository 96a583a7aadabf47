use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        advocate::{Advocate, NewAdvocate},
        search::AdvocateFilter,
        types::{AdvocateId, SearchTerm},
    },
    pagination::PageRequest,
    repository::errors::RepositoryResult,
};

pub mod advocate;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Query describing which advocates to list and which slice of them to load.
#[derive(Debug, Clone, Default)]
pub struct AdvocateListQuery {
    pub filter: AdvocateFilter,
    pub pagination: Option<PageRequest>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<SearchTerm>) -> Self {
        self.filter = AdvocateFilter::new(term.into());
        self
    }

    pub fn paginate(mut self, page: PageRequest) -> Self {
        self.pagination = Some(page);
        self
    }
}

/// Read access to advocate records.
pub trait AdvocateReader {
    fn get_advocate_by_id(&self, id: AdvocateId) -> RepositoryResult<Option<Advocate>>;
    /// Returns the number of records matching the filter before pagination,
    /// together with the requested page ordered by id.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
}

/// Write access used by the seeding tool only.
pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}

/// Diesel-backed repository shared by every handler.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
