//! Reference model of the advocates table as driven from the browser.
//!
//! Nothing on the server calls into this module; it exists so the rules
//! `assets/js/advocates.js` implements are written down and tested in one
//! place. The script must follow it: search input is debounced by
//! [`SEARCH_DEBOUNCE`], search and page-size changes go back to page 1,
//! every fetch carries a token from [`RequestTokens`] and only the response
//! holding the latest token is applied, aborted fetches are not errors, and
//! the pager shows [`BrowseState::page_links`].

use std::time::{Duration, Instant};

use crate::dto::api::{AdvocateDto, AdvocatesQuery, AdvocatesResponse};
use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZES, page_links, showing_range};

/// Quiet period before typed input becomes the active search term.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);

/// Holds raw input until it has been quiet for the configured interval.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Records new input, restarting the quiet period.
    pub fn input(&mut self, raw: impl Into<String>, now: Instant) {
        self.pending = Some((raw.into(), now));
    }

    /// Releases the trimmed input once the quiet period has elapsed.
    ///
    /// Each input is released at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let settled = matches!(
            &self.pending,
            Some((_, at)) if now.saturating_duration_since(*at) >= self.quiet
        );
        if !settled {
            return None;
        }
        self.pending.take().map(|(raw, _)| raw.trim().to_string())
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

/// Identifies one issued fetch. Tokens only grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues request tokens and remembers the newest one.
#[derive(Debug, Default)]
pub struct RequestTokens {
    latest: u64,
}

impl RequestTokens {
    /// Issues a token newer than every previous one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Why a fetch produced no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Cancelled because a newer request superseded it; never shown.
    Aborted,
    /// Non-2xx status from the API.
    Status(u16),
    /// Transport or decoding failure.
    Network(String),
}

impl FetchError {
    fn message(&self) -> Option<String> {
        match self {
            FetchError::Aborted => None,
            FetchError::Status(status) => Some(format!("Request failed ({status})")),
            FetchError::Network(msg) if msg.is_empty() => {
                Some("Failed to load advocates.".to_string())
            }
            FetchError::Network(msg) => Some(msg.clone()),
        }
    }
}

/// A fetch the caller should perform.
#[derive(Debug, Clone)]
pub struct PendingFetch {
    pub token: RequestToken,
    pub query: AdvocatesQuery,
}

/// View state of the advocates table.
#[derive(Debug)]
pub struct BrowseState {
    search: String,
    page: usize,
    page_size: usize,
    rows: Vec<AdvocateDto>,
    total: usize,
    total_pages: usize,
    loading: bool,
    error: Option<String>,
    tokens: RequestTokens,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            rows: Vec::new(),
            total: 0,
            total_pages: 1,
            loading: true,
            error: None,
            tokens: RequestTokens::default(),
        }
    }
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn rows(&self) -> &[AdvocateDto] {
        &self.rows
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Applies a settled search term; a changed term goes back to page 1.
    pub fn set_search(&mut self, term: &str) {
        let term = term.trim();
        if term != self.search {
            self.search = term.to_string();
            self.page = 1;
        }
    }

    /// Changes the page size; only the offered sizes are accepted.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZES.contains(&page_size) {
            return false;
        }
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
        }
        true
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1).min(self.total_pages.max(1));
    }

    pub fn last(&mut self) {
        self.page = self.total_pages.max(1);
    }

    /// `(first, last)` row positions for the "Showing x-y of total" line.
    pub fn showing(&self) -> (usize, usize) {
        showing_range(self.page, self.page_size, self.total)
    }

    /// Numbered pager links around the current page, `None` for a gap.
    pub fn page_links(&self) -> Vec<Option<usize>> {
        page_links(self.total_pages, self.page)
    }

    /// Starts a fetch for the current page, superseding any in flight.
    pub fn begin_fetch(&mut self) -> PendingFetch {
        self.loading = true;
        self.error = None;
        PendingFetch {
            token: self.tokens.issue(),
            query: AdvocatesQuery {
                page: Some(self.page.to_string()),
                page_size: Some(self.page_size.to_string()),
                q: Some(self.search.clone()),
            },
        }
    }

    /// Applies a fetch outcome. Returns `false` when the outcome belongs to
    /// a superseded request and was dropped.
    pub fn apply(
        &mut self,
        token: RequestToken,
        outcome: Result<AdvocatesResponse, FetchError>,
    ) -> bool {
        if !self.tokens.is_latest(token) {
            return false;
        }

        match outcome {
            Ok(response) => {
                self.rows = response.data;
                self.total = response.meta.total;
                self.total_pages = response.meta.total_pages;
            }
            Err(err) => {
                if let Some(message) = err.message() {
                    self.error = Some(message);
                }
            }
        }
        self.loading = false;
        true
    }
}
