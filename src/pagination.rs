use serde::Serialize;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest page size the list endpoint will serve.
pub const MAX_PAGE_SIZE: usize = 100;
/// Page sizes offered by the rows-per-page selector.
pub const PAGE_SIZES: [usize; 5] = [5, 10, 20, 50, 100];

/// Parses a raw query value as an integer.
///
/// A present but blank value reads as 0 and is clamped by the caller.
/// Digit strings too long for `i64` saturate instead of failing, so a huge
/// page number still means "far past the end".
fn parse_number(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse::<i64>().ok().or_else(|| {
        let negative = raw.starts_with('-');
        let digits = raw.strip_prefix('-').unwrap_or(raw);
        (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .then_some(if negative { i64::MIN } else { i64::MAX })
    })
}

/// Validated page coordinates: `page >= 1`, `1 <= page_size <= MAX_PAGE_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Clamps the provided numbers into range. Nothing is rejected.
    pub fn new(page: i64, page_size: i64) -> Self {
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE as i64) as usize;
        Self { page, page_size }
    }

    /// Builds a request from raw query-string values. Missing or unparsable
    /// values fall back to page 1 and [`DEFAULT_PAGE_SIZE`]; blank ones are
    /// clamped up to 1.
    pub fn from_raw(page: Option<&str>, page_size: Option<&str>) -> Self {
        Self::new(
            parse_number(page).unwrap_or(1),
            parse_number(page_size).unwrap_or(DEFAULT_PAGE_SIZE as i64),
        )
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Total page count for `total` matching records, never less than one.
    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }
}

/// `max(1, ceil(total / page_size))`.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// 1-based `(first, last)` row positions of a page within `total` records.
///
/// Both are 0 when nothing matched; `last` never exceeds `total`.
pub fn showing_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .saturating_add(1);
    let end = page.saturating_mul(page_size).min(total);
    (start, end)
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current + 1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page links shown under the table: two pages at each edge, two before and
/// four after the current one. `None` marks an elided gap.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    get_pages(total_pages, current_page, 2, 2, 4, 2)
}

/// A page of items plus the page links shown under the table.
///
/// `pages` holds page numbers with `None` marking an elided gap.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_links(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
        }
    }
}
