//! Core value types shared across the crate.

/// Caller-supplied page identifier.
///
/// Identifiers come straight from the input file and are never assumed to be
/// dense or zero-based; the graph layer interns them into contiguous node
/// indices internally.
pub type PageId = i64;

/// One parsed line of the link file.
///
/// `page` receives an in-link from every id in `in_links`. Duplicate entries
/// are permitted here; the graph builder deduplicates edges on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    /// The page the line describes.
    pub page: PageId,
    /// Pages that link *to* `page`.
    pub in_links: Vec<PageId>,
}

impl LinkRecord {
    /// Create a record from a page id and its in-linking ids.
    pub fn new(page: PageId, in_links: Vec<PageId>) -> Self {
        Self { page, in_links }
    }
}
