//! Pagination types and traits
//!
//! Defines the mode enum, the core paginator abstraction shared by all
//! strategies, and the boundary arithmetic helpers.

use crate::error::Error;
use crate::types::{CommitFn, PageChange};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::str::FromStr;

/// Which pagination strategy is active.
///
/// Fixed for the lifetime of one paginator instance; passing a different
/// mode to the factory produces a new, differently-shaped paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Pagination disabled; every command is a no-op
    #[default]
    None,
    /// Full row set available locally; bounds computed from it
    ClientSide,
    /// Rows live elsewhere; only an optional page count is known
    ServerSide,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "client_side" => Ok(Self::ClientSide),
            "server_side" => Ok(Self::ServerSide),
            other => Err(Error::unknown_mode(other)),
        }
    }
}

/// Core trait for pagination strategies.
///
/// Commands mutate the paginator's current page index and report the change
/// to the external commit sink; queries are read-only. `go_to_page` is the
/// one entry point taking a 1-indexed page number (matching on-screen page
/// displays); everything else is zero-indexed.
pub trait Paginator {
    /// Advance to the next page, if one exists
    fn load_next(&self);

    /// Go back one page; no-op at page 0
    fn load_previous(&self);

    /// Jump to the first page
    fn load_first(&self);

    /// Jump to the last page, if the last page is known
    fn load_last(&self);

    /// Jump to a 1-indexed page number, clamping to the valid range
    fn go_to_page(&self, page: usize);

    /// Zero-indexed index of the final page, or `None` when unknown
    fn last_page(&self) -> Option<usize>;

    /// The current zero-indexed page
    fn current_page(&self) -> usize;

    /// Whether a previous page exists
    fn has_previous(&self) -> bool;

    /// Whether a next page exists (or might exist, when the bound is unknown)
    fn has_next(&self) -> bool;

    /// Whether a known last page exists that is not the current page
    fn has_last(&self) -> bool;
}

/// Zero-indexed index of the final page for a locally known row set.
///
/// Total for every input: an empty row set yields 0 (a single, empty page),
/// and a zero page size is treated the same way rather than panicking.
pub fn last_page_index(row_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    row_count.div_ceil(page_size).saturating_sub(1)
}

/// Step back one page, shared by the client- and server-side strategies.
pub(super) fn load_previous(page_current: &Cell<usize>, commit: &CommitFn) {
    let current = page_current.get();
    if current == 0 {
        return;
    }

    page_current.set(current - 1);
    commit(PageChange::to_page(current - 1));
}

/// Jump to page 0 unconditionally, shared by the client- and server-side
/// strategies.
pub(super) fn load_first(page_current: &Cell<usize>, commit: &CommitFn) {
    page_current.set(0);
    commit(PageChange::to_page(0));
}

/// Whether a previous page exists; the predicate is the same in both active
/// strategies.
pub(super) fn has_previous(page_current: &Cell<usize>) -> bool {
    page_current.get() != 0
}
