//! # pagenav
//!
//! A pagination-state engine for tabular data views.
//!
//! Given the current page, page size, total row count (or a server-reported
//! page count) and the active pagination mode, the engine computes navigation
//! availability and the next page index for every navigation command. It
//! never touches row data itself: each command computes an index and hands it
//! to an external commit sink, together with a selection-clearing instruction.
//!
//! ## Features
//!
//! - **Three modes**: no pagination, client-side (full row set local),
//!   server-side (only a page count known, possibly not even that)
//! - **Clamped boundaries**: commands silently clamp at the edges instead of
//!   surfacing errors to the UI
//! - **Single-slot memoization**: [`PaginatorFactory`] returns the previous
//!   paginator instance when called again with equal inputs, so per-render
//!   factory calls do not churn instances
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use pagenav::{create_paginator, CommitFn, Mode, PageChange, Paginator};
//!
//! let rows = Rc::new(vec![serde_json::json!({"id": 1}); 25]);
//! let commit: CommitFn = Rc::new(|change: PageChange| {
//!     // merge `change` into the owning view state
//!     let _ = change.page_current;
//! });
//!
//! let pager = create_paginator(Mode::ClientSide, 0, 10, None, commit, rows);
//! assert_eq!(pager.last_page(), Some(2));
//! pager.load_next(); // commits page 1 and clears the selection
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 PaginatorFactory (memo)                │
//! │    get(mode, page, size, count, commit, rows)          │
//! └───────────────────────────┬────────────────────────────┘
//!                             │
//! ┌──────────────┬────────────┴───────────┬────────────────┐
//! │ NoPagination │       ClientSide       │   ServerSide   │
//! ├──────────────┼────────────────────────┼────────────────┤
//! │ inert        │ bounds from rows/size  │ optional count │
//! └──────────────┴────────────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the engine
pub mod error;

/// Common types and type aliases
pub mod types;

/// Pagination strategies and the memoizing factory
pub mod pagination;

pub use error::{Error, Result};
pub use pagination::{
    create_paginator, last_page_index, ClientSide, Mode, NoPagination, Paginator,
    PaginatorFactory, ServerSide,
};
pub use types::{CellCoord, CommitFn, JsonValue, PageChange, Row, RowSet, SelectionClear};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
