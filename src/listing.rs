//! Client-side search and pagination for list views.

use thiserror::Error;

/// Page sizes a list view offers.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Page size used until the user picks another.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Records that can be matched by a free-text search box.
pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> impl Iterator<Item = &str>;

    /// Case-insensitive substring match of `term` against any search field.
    ///
    /// An empty term matches everything.
    fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();

        needle.is_empty()
            || self
                .search_fields()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Keep the records matching `term`, in their original order.
#[must_use]
pub fn filter<'a, T: Searchable>(records: &'a [T], term: &str) -> Vec<&'a T> {
    records.iter().filter(|record| record.matches(term)).collect()
}

/// Errors raised for an invalid page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    /// Page size is not one of [`ROWS_PER_PAGE_OPTIONS`].
    #[error("rows per page must be one of 5, 10 or 25 (got {0})")]
    UnsupportedPageSize(usize),
}

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    index: usize,
    rows_per_page: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            index: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl PageRequest {
    /// Build a page request.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::UnsupportedPageSize`] when `rows_per_page` is not offered.
    pub fn new(index: usize, rows_per_page: usize) -> Result<Self, PageError> {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows_per_page) {
            return Err(PageError::UnsupportedPageSize(rows_per_page));
        }

        Ok(Self {
            index,
            rows_per_page,
        })
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// Page size.
    #[must_use]
    pub const fn rows_per_page(self) -> usize {
        self.rows_per_page
    }

    /// Same page size, back to the first page. Used when the size changes.
    #[must_use]
    pub const fn first(self) -> Self {
        Self {
            index: 0,
            rows_per_page: self.rows_per_page,
        }
    }
}

/// One page of records plus the count the pager needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,

    /// Number of records across all pages.
    pub total: usize,

    /// The request this page answers.
    pub request: PageRequest,
}

impl<T> Page<T> {
    /// Number of pages, at least one.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.request.rows_per_page).max(1)
    }

    /// 1-based position of the first and last record shown, or `None` for an empty page.
    #[must_use]
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }

        let start = self.request.index * self.request.rows_per_page;

        Some((start + 1, start + self.items.len()))
    }
}

/// Slice `records` to the requested page. A page past the end is empty.
#[must_use]
pub fn paginate<T>(records: Vec<T>, request: PageRequest) -> Page<T> {
    let total = records.len();

    let items = records
        .into_iter()
        .skip(request.index.saturating_mul(request.rows_per_page))
        .take(request.rows_per_page)
        .collect();

    Page {
        items,
        total,
        request,
    }
}
