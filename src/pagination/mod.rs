//! Pagination module
//!
//! Supports: No pagination, Client-side, Server-side
//!
//! # Overview
//!
//! The pagination module provides a unified interface for navigating a
//! paged table view. Each strategy answers the same navigation queries
//! (`has_previous`, `has_next`, `has_last`, `last_page`) and executes the
//! same commands (`load_next`, `load_previous`, `load_first`, `load_last`,
//! `go_to_page`), differing only in how the last-page bound is derived.
//! [`PaginatorFactory`] wraps the [`create_paginator`] dispatcher with a
//! single-slot memo so repeated calls with equal inputs reuse the previous
//! instance.

mod memo;
mod strategies;
mod types;

pub use memo::PaginatorFactory;
pub use strategies::{create_paginator, ClientSide, NoPagination, ServerSide};
pub use types::{last_page_index, Mode, Paginator};
