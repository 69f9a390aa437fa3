//! Common types used throughout pagenav
//!
//! Shared type aliases, the commit-callback signature, and the payload a
//! paginator hands to the external owner whenever the page index changes.

use serde::{Deserialize, Serialize};
use std::rc::Rc;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// A single table row record
pub type Row = JsonValue;

/// The full, ordered row set of a client-side paginated table.
///
/// Shared via `Rc` so the memoizing factory can compare row-set identity
/// with [`Rc::ptr_eq`] instead of comparing contents.
pub type RowSet = Rc<Vec<Row>>;

/// Commit sink invoked with every page change.
///
/// The external owner merges the [`PageChange`] into its own state and
/// re-derives the view. Shared via `Rc` for the same identity-comparison
/// reason as [`RowSet`].
pub type CommitFn = Rc<dyn Fn(PageChange)>;

// ============================================================================
// Commit Payload
// ============================================================================

/// Zero-based coordinates of a single table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCoord {
    /// Row index within the visible page
    pub row: usize,
    /// Column index
    pub column: usize,
}

/// The fixed selection-clearing instruction carried by every commit.
///
/// Changing the page invalidates any row/cell selection expressed against
/// the previously visible rows, so every field resets to its empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionClear {
    /// Cell with keyboard focus, cleared
    pub active_cell: Option<CellCoord>,
    /// Anchor of a range selection, cleared
    pub start_cell: Option<CellCoord>,
    /// Far corner of a range selection, cleared
    pub end_cell: Option<CellCoord>,
    /// Individually selected cells, cleared
    pub selected_cells: Vec<CellCoord>,
    /// Selected row indices, cleared
    pub selected_rows: Vec<usize>,
}

/// Payload delivered to the commit sink when a navigation command lands.
///
/// Serializes flat, so the owner can merge it directly into a JSON state
/// document: `{"page_current": 2, "active_cell": null, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageChange {
    /// The new zero-based page index
    pub page_current: usize,

    /// The selection reset, flattened alongside the page index
    #[serde(flatten)]
    pub selection: SelectionClear,
}

impl PageChange {
    /// Create a commit payload for the given page, selection cleared
    pub fn to_page(page_current: usize) -> Self {
        Self {
            page_current,
            selection: SelectionClear::default(),
        }
    }
}
