use crate::application::use_cases::CatalogListing;
use crate::domain::entities::CatalogEntry;
use crate::domain::services::CatalogQuery;

/// UI-side state of the application list: the query, the last listing and
/// any delete awaiting confirmation.
pub struct CatalogListState {
    query: CatalogQuery,
    listing: Option<CatalogListing>,
    needs_refresh: bool,
    pending_delete: Option<CatalogEntry>,
}

impl CatalogListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: CatalogQuery::new(page_size),
            listing: None,
            needs_refresh: true,
            pending_delete: None,
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Any change through the returned reference triggers a reload.
    pub fn query_mut(&mut self) -> &mut CatalogQuery {
        self.needs_refresh = true;
        &mut self.query
    }

    pub fn listing(&self) -> Option<&CatalogListing> {
        self.listing.as_ref()
    }

    pub fn mark_stale(&mut self) {
        self.needs_refresh = true;
    }

    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    /// Stores a fresh listing. A page left past the end (after a delete, say)
    /// is pulled back to the last page and reloaded.
    pub fn set_listing(&mut self, listing: CatalogListing) {
        let last_page = listing.page.total_pages;
        if last_page > 0 && self.query.page() > last_page {
            tracing::debug!("Page {} past the end, moving to {}", self.query.page(), last_page);
            self.query.set_page(last_page);
            self.needs_refresh = true;
        }
        self.listing = Some(listing);
    }

    pub fn request_delete(&mut self, entry: CatalogEntry) {
        self.pending_delete = Some(entry);
    }

    pub fn pending_delete(&self) -> Option<&CatalogEntry> {
        self.pending_delete.as_ref()
    }

    pub fn take_pending_delete(&mut self) -> Option<CatalogEntry> {
        self.pending_delete.take()
    }
}
