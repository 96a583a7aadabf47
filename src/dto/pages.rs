//! DTOs shaped for the HTML templates.

use serde::Serialize;

use crate::dto::api::{AdvocateDto, AdvocatesMeta};
use crate::pagination::Paginated;

/// Query parameters of the index page; same names as the list API.
pub use crate::dto::api::AdvocatesQuery as IndexQuery;

/// Data required to render the main index template.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    /// Current page of advocates plus the page links.
    pub advocates: Paginated<AdvocateDto>,
    pub meta: AdvocatesMeta,
    /// 1-based position of the first row shown, 0 when nothing matched.
    pub showing_start: usize,
    /// 1-based position of the last row shown.
    pub showing_end: usize,
    pub page_sizes: Vec<usize>,
}
