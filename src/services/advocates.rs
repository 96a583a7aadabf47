use crate::domain::advocate::Advocate;
use crate::domain::types::{AdvocateId, SearchTerm};
use crate::dto::api::{AdvocateDto, AdvocatesMeta, AdvocatesQuery, AdvocatesResponse};
use crate::dto::pages::{IndexPageData, IndexQuery};
use crate::pagination::{PAGE_SIZES, PageRequest, Paginated, showing_range};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns one page of advocates matching the optional search term.
///
/// Page and page size are clamped rather than rejected; a page past the end
/// yields an empty `data` array.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let page = PageRequest::from_raw(params.page.as_deref(), params.page_size.as_deref());
    let term = SearchTerm::new(params.q.unwrap_or_default());

    let query = AdvocateListQuery::new()
        .search(term.clone())
        .paginate(page);

    let (total, advocates) = repo.list_advocates(query).map_err(|err| {
        log::error!("Failed to list advocates: {err}");
        ServiceError::from(err)
    })?;

    Ok(AdvocatesResponse {
        data: advocates.into_iter().map(AdvocateDto::from).collect(),
        meta: AdvocatesMeta {
            page: page.page(),
            page_size: page.page_size(),
            total,
            total_pages: page.total_pages(total),
            q: term.into_inner(),
        },
    })
}

/// Looks up a single advocate from the raw path segment.
///
/// Returns [`ServiceError::TypeConstraint`] for anything but a positive
/// 32-bit integer written in plain digits, [`ServiceError::NotFound`] when
/// no record has that id.
pub fn get_advocate<R>(repo: &R, raw_id: &str) -> ServiceResult<Advocate>
where
    R: AdvocateReader + ?Sized,
{
    let id: AdvocateId = raw_id.parse()?;

    repo.get_advocate_by_id(id)
        .map_err(|err| {
            log::error!("Failed to load advocate {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}

/// Loads the data for the server-rendered index page.
pub fn load_index_page<R>(repo: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: AdvocateReader + ?Sized,
{
    let AdvocatesResponse { data, meta } = list_advocates(repo, query)?;
    let (showing_start, showing_end) = showing_range(meta.page, meta.page_size, meta.total);

    Ok(IndexPageData {
        advocates: Paginated::new(data, meta.page, meta.total_pages),
        meta,
        showing_start,
        showing_end,
        page_sizes: PAGE_SIZES.to_vec(),
    })
}
