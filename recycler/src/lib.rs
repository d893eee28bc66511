// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycler: sectioned list and grid adapters for host scrollable widgets.
//!
//! This crate is the entry point. [`Recycler::list`] and [`Recycler::grid`]
//! start a builder for a table-style or grid-style host widget; everything
//! else is re-exported from the family crates:
//!
//! - [`recycler_core`]: index paths, sections, reload signals, errors, and the
//!   [`SectionedDataSource`] contract both adapters implement.
//! - [`recycler_list`]: [`ListAdapter`] and friends.
//! - [`recycler_grid`]: [`GridAdapter`] and friends.
//!
//! ## Workflow
//!
//! 1) Implement [`ListHost`] or [`GridHost`] for the toolkit's widget handle.
//! 2) Start a builder, attach callbacks, and build the adapter. Sections that
//!    carry a payload for header and footer callbacks start from
//!    [`Recycler::list_with_payload`] or [`Recycler::grid_with_payload`].
//! 3) Route the toolkit's data-source and delegate queries to the adapter.
//! 4) Change data only through the adapter; it forwards a [`Reload`] for
//!    exactly what changed.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm`.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub use recycler_core::{
    AdapterError, IndexPath, Reload, Result, RowAnimation, Section, SectionKey, SectionRef,
    SectionedDataSource, Sections,
};
pub use recycler_grid::{
    DEFAULT_CELL_IDENTIFIER, FlowLayout, GridAdapter, GridBuilder, GridCallbacks, GridDecoration,
    GridHost, GridSection, GridViewModel, ScrollDirection, SupplementaryKind, item_size,
    reference_size,
};
pub use recycler_list::{
    Dimension, ListAdapter, ListBuilder, ListCallbacks, ListDecoration, ListHost, ListSection,
    ListViewModel,
};

pub use recycler_core;
pub use recycler_grid;
pub use recycler_list;

/// Entry points for building adapters.
#[derive(Debug, Clone, Copy)]
pub struct Recycler;

impl Recycler {
    /// Starts a [`ListBuilder`] for a table-style `host`.
    pub fn list<W: ListHost, T>(host: W) -> ListBuilder<W, T> {
        ListBuilder::new(host)
    }

    /// Starts a [`GridBuilder`] for a grid-style `host`.
    ///
    /// This registers [`DEFAULT_CELL_IDENTIFIER`] with the host.
    pub fn grid<W: GridHost, T>(host: W) -> GridBuilder<W, T> {
        GridBuilder::new(host)
    }

    /// Starts a [`ListBuilder`] whose sections carry payloads of type `S`.
    ///
    /// Header and footer callbacks see the payload as [`SectionRef::value`].
    pub fn list_with_payload<W: ListHost, T, S>(host: W) -> ListBuilder<W, T, S> {
        ListBuilder::with_payload(host)
    }

    /// Starts a [`GridBuilder`] whose sections carry payloads of type `S`.
    ///
    /// Supplementary view callbacks see the payload as [`SectionRef::value`].
    pub fn grid_with_payload<W: GridHost, T, S>(host: W) -> GridBuilder<W, T, S> {
        GridBuilder::with_payload(host)
    }
}
