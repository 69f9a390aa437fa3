//! Pagination strategy implementations
//!
//! Each strategy derives the last-page bound differently; the navigation
//! commands and availability queries share one trait.

use super::types::{self, last_page_index, Mode, Paginator};
use crate::types::{CommitFn, PageChange, RowSet};
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// No Pagination
// ============================================================================

/// Pagination disabled: a stable, inert paginator.
///
/// Presents the full trait surface so the view layer needs no
/// mode-conditional logic at the call site. Commands never commit and the
/// reported page never changes.
#[derive(Debug)]
pub struct NoPagination {
    page_current: Cell<usize>,
}

impl NoPagination {
    /// Create an inert paginator reporting the given page
    pub fn new(page_current: usize) -> Self {
        Self {
            page_current: Cell::new(page_current),
        }
    }
}

impl Paginator for NoPagination {
    fn load_next(&self) {}

    fn load_previous(&self) {}

    fn load_first(&self) {}

    fn load_last(&self) {}

    fn go_to_page(&self, _page: usize) {}

    fn last_page(&self) -> Option<usize> {
        Some(0)
    }

    fn current_page(&self) -> usize {
        self.page_current.get()
    }

    fn has_previous(&self) -> bool {
        false
    }

    fn has_next(&self) -> bool {
        false
    }

    fn has_last(&self) -> bool {
        false
    }
}

// ============================================================================
// Client-Side Pagination
// ============================================================================

/// Client-side pagination: the full row set is available locally.
///
/// Boundaries come straight from `rows.len()` and the page size, so every
/// command can clamp against an authoritative last page.
pub struct ClientSide {
    page_current: Cell<usize>,
    page_size: usize,
    rows: RowSet,
    commit: CommitFn,
}

impl ClientSide {
    /// Create a client-side paginator over a locally held row set
    pub fn new(page_current: usize, page_size: usize, commit: CommitFn, rows: RowSet) -> Self {
        Self {
            page_current: Cell::new(page_current),
            page_size,
            rows,
            commit,
        }
    }

    fn last_index(&self) -> usize {
        last_page_index(self.rows.len(), self.page_size)
    }

    fn commit_page(&self, page: usize) {
        self.page_current.set(page);
        (self.commit)(PageChange::to_page(page));
    }
}

impl Paginator for ClientSide {
    fn load_next(&self) {
        if self.page_current.get() >= self.last_index() {
            return;
        }

        self.commit_page(self.page_current.get() + 1);
    }

    fn load_previous(&self) {
        types::load_previous(&self.page_current, &self.commit);
    }

    fn load_first(&self) {
        types::load_first(&self.page_current, &self.commit);
    }

    fn load_last(&self) {
        self.commit_page(self.last_index());
    }

    fn go_to_page(&self, page: usize) {
        // 1-indexed input; clamp to [0, last]
        let target = page.saturating_sub(1).min(self.last_index());
        self.commit_page(target);
    }

    fn last_page(&self) -> Option<usize> {
        Some(self.last_index())
    }

    fn current_page(&self) -> usize {
        self.page_current.get()
    }

    fn has_previous(&self) -> bool {
        types::has_previous(&self.page_current)
    }

    fn has_next(&self) -> bool {
        self.page_current.get() != self.last_index()
    }

    fn has_last(&self) -> bool {
        // once the full row set is known, "last" and "next" coincide
        self.page_current.get() != self.last_index()
    }
}

// ============================================================================
// Server-Side Pagination
// ============================================================================

/// Server-side pagination: rows for other pages are fetched externally.
///
/// The reported page count is authoritative but optional; without one the
/// bound is unknown and the paginator assumes more pages may exist.
/// `load_next` never clamps against a known bound, even though `load_last`
/// and `go_to_page` do: the server stays the source of truth for whether a
/// next page exists, and signals "no more data" out of band.
pub struct ServerSide {
    page_current: Cell<usize>,
    last_page: Option<usize>,
    commit: CommitFn,
}

impl ServerSide {
    /// Create a server-side paginator from an optionally reported page count.
    ///
    /// The count is 1-indexed as reported; a count of 0 means the same as an
    /// absent one, an unknown total.
    pub fn new(page_current: usize, page_count: Option<usize>, commit: CommitFn) -> Self {
        let last_page = page_count.filter(|&count| count > 0).map(|count| count - 1);

        Self {
            page_current: Cell::new(page_current),
            last_page,
            commit,
        }
    }

    fn commit_page(&self, page: usize) {
        self.page_current.set(page);
        (self.commit)(PageChange::to_page(page));
    }
}

impl Paginator for ServerSide {
    fn load_next(&self) {
        // no upper clamp: beyond-known pages may be requested
        self.commit_page(self.page_current.get() + 1);
    }

    fn load_previous(&self) {
        types::load_previous(&self.page_current, &self.commit);
    }

    fn load_first(&self) {
        types::load_first(&self.page_current, &self.commit);
    }

    fn load_last(&self) {
        if let Some(bound) = self.last_page {
            self.commit_page(bound);
        }
    }

    fn go_to_page(&self, page: usize) {
        let mut target = page.saturating_sub(1);
        if let Some(bound) = self.last_page {
            target = target.min(bound);
        }

        self.commit_page(target);
    }

    fn last_page(&self) -> Option<usize> {
        self.last_page
    }

    fn current_page(&self) -> usize {
        self.page_current.get()
    }

    fn has_previous(&self) -> bool {
        types::has_previous(&self.page_current)
    }

    fn has_next(&self) -> bool {
        self.last_page
            .is_none_or(|bound| self.page_current.get() != bound)
    }

    fn has_last(&self) -> bool {
        // a bound of 0 never advertises a last-page affordance
        self.last_page
            .is_some_and(|bound| bound != 0 && self.page_current.get() != bound)
    }
}

// ============================================================================
// Mode Dispatcher
// ============================================================================

/// Construct the paginator for the given mode.
///
/// Purely a selector: dispatches to one of the three strategy constructors
/// above. `page_size` and `rows` matter only to [`Mode::ClientSide`];
/// `page_count` only to [`Mode::ServerSide`].
pub fn create_paginator(
    mode: Mode,
    page_current: usize,
    page_size: usize,
    page_count: Option<usize>,
    commit: CommitFn,
    rows: RowSet,
) -> Rc<dyn Paginator> {
    tracing::debug!(?mode, page_current, "constructing paginator");

    match mode {
        Mode::None => Rc::new(NoPagination::new(page_current)),
        Mode::ClientSide => Rc::new(ClientSide::new(page_current, page_size, commit, rows)),
        Mode::ServerSide => Rc::new(ServerSide::new(page_current, page_count, commit)),
    }
}
