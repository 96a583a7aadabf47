use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use diesel::sqlite::Sqlite;

use crate::db::{fold_case, unicode_lower};
use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::search::{AdvocateFilter, LIKE_ESCAPE, SearchField};
use crate::domain::types::AdvocateId;
use crate::models::advocate::{Advocate as DbAdvocate, NewAdvocate as DbNewAdvocate};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{AdvocateListQuery, AdvocateReader, AdvocateWriter, DieselRepository};
use crate::schema::advocates;

type AdvocateCondition = Box<dyn BoxableExpression<advocates::table, Sqlite, SqlType = Bool>>;

/// SQL form of a single search predicate.
///
/// Text columns are folded with `unicode_lower` and compared against an
/// already folded pattern, so matching ignores case beyond ASCII.
fn predicate_condition(field: SearchField, pattern: &str) -> AdvocateCondition {
    let pattern = fold_case(pattern);
    match field {
        SearchField::FirstName => Box::new(
            unicode_lower(advocates::first_name)
                .like(pattern)
                .escape(LIKE_ESCAPE),
        ),
        SearchField::LastName => Box::new(
            unicode_lower(advocates::last_name)
                .like(pattern)
                .escape(LIKE_ESCAPE),
        ),
        SearchField::City => Box::new(
            unicode_lower(advocates::city)
                .like(pattern)
                .escape(LIKE_ESCAPE),
        ),
        SearchField::Degree => Box::new(
            unicode_lower(advocates::degree)
                .like(pattern)
                .escape(LIKE_ESCAPE),
        ),
        SearchField::Specialties => Box::new(
            unicode_lower(advocates::specialties)
                .like(pattern)
                .escape(LIKE_ESCAPE),
        ),
        SearchField::PhoneNumber => Box::new(
            sql::<Text>("CAST(advocates.phone_number AS TEXT)")
                .like(pattern)
                .escape(LIKE_ESCAPE),
        ),
    }
}

/// ORs every predicate of the filter together; `None` when unfiltered.
fn filter_condition(filter: &AdvocateFilter) -> Option<AdvocateCondition> {
    let pattern = filter.like_pattern();
    filter
        .predicates()
        .iter()
        .map(|predicate| predicate_condition(predicate.field(), &pattern))
        .reduce(|acc, next| Box::new(acc.or(next)))
}

fn into_domain(rows: Vec<DbAdvocate>) -> RepositoryResult<Vec<Advocate>> {
    rows.into_iter()
        .map(|row| Advocate::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl AdvocateReader for DieselRepository {
    fn get_advocate_by_id(&self, id: AdvocateId) -> RepositoryResult<Option<Advocate>> {
        let mut conn = self.conn()?;

        let advocate = advocates::table
            .find(id.get())
            .first::<DbAdvocate>(&mut conn)
            .optional()?;

        advocate
            .map(|row| Advocate::try_from(row).map_err(RepositoryError::from))
            .transpose()
    }

    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)> {
        let mut conn = self.conn()?;

        let mut count_query = advocates::table.into_boxed();
        if let Some(condition) = filter_condition(&query.filter) {
            count_query = count_query.filter(condition);
        }
        let total: i64 = count_query.count().get_result(&mut conn)?;

        let mut items = advocates::table
            .order(advocates::id.asc())
            .into_boxed();
        if let Some(condition) = filter_condition(&query.filter) {
            items = items.filter(condition);
        }
        if let Some(page) = &query.pagination {
            let limit = i64::try_from(page.page_size()).unwrap_or(i64::MAX);
            let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
            items = items.limit(limit).offset(offset);
        }

        let rows = items.load::<DbAdvocate>(&mut conn)?;

        Ok((total as usize, into_domain(rows)?))
    }
}

impl AdvocateWriter for DieselRepository {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let insertables: Vec<DbNewAdvocate> = new_advocates.iter().map(Into::into).collect();
        let affected = diesel::insert_into(advocates::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
