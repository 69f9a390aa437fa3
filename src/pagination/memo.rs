//! Single-slot memoization for the paginator factory
//!
//! The factory is invoked on every view re-render; without memoization each
//! render would rebuild the paginator and its closures, and any component
//! holding a previous handle for identity comparison would see spurious
//! instance changes. One slot is enough: only the immediately preceding call
//! is cached, never an arbitrary-size cache.

use super::strategies::create_paginator;
use super::types::{Mode, Paginator};
use crate::types::{CommitFn, RowSet};
use std::rc::Rc;

/// The argument tuple of the previous factory call.
///
/// Equality is shallow and positional: primitives compare by value, the row
/// set and commit sink by `Rc` identity.
struct CallKey {
    mode: Mode,
    page_current: usize,
    page_size: usize,
    page_count: Option<usize>,
    commit: CommitFn,
    rows: RowSet,
}

impl CallKey {
    fn matches(
        &self,
        mode: Mode,
        page_current: usize,
        page_size: usize,
        page_count: Option<usize>,
        commit: &CommitFn,
        rows: &RowSet,
    ) -> bool {
        self.mode == mode
            && self.page_current == page_current
            && self.page_size == page_size
            && self.page_count == page_count
            && Rc::ptr_eq(&self.commit, commit)
            && Rc::ptr_eq(&self.rows, rows)
    }
}

/// Memoizing wrapper around [`create_paginator`].
///
/// Owned by the caller (typically the component driving the table view);
/// holds the last argument tuple and the paginator it produced.
#[derive(Default)]
pub struct PaginatorFactory {
    slot: Option<(CallKey, Rc<dyn Paginator>)>,
}

impl PaginatorFactory {
    /// Create an empty factory
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return a paginator for the given inputs.
    ///
    /// When every argument equals the previous call's (shallow, positional,
    /// `Rc` identity for `commit` and `rows`), the previously constructed
    /// instance is returned; otherwise a new one is built and replaces the
    /// slot.
    pub fn get(
        &mut self,
        mode: Mode,
        page_current: usize,
        page_size: usize,
        page_count: Option<usize>,
        commit: CommitFn,
        rows: RowSet,
    ) -> Rc<dyn Paginator> {
        if let Some((key, pager)) = &self.slot {
            if key.matches(mode, page_current, page_size, page_count, &commit, &rows) {
                tracing::trace!("reusing memoized paginator");
                return Rc::clone(pager);
            }
        }

        let pager = create_paginator(
            mode,
            page_current,
            page_size,
            page_count,
            Rc::clone(&commit),
            Rc::clone(&rows),
        );

        let key = CallKey {
            mode,
            page_current,
            page_size,
            page_count,
            commit,
            rows,
        };
        self.slot = Some((key, Rc::clone(&pager)));

        pager
    }
}
