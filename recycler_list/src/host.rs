// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host table widget, as seen from the adapter.

use recycler_core::{IndexPath, Reload};

/// Operations a list adapter needs from the table widget it drives.
///
/// Toolkit integrations implement this for their widget handle. The adapter
/// owns the handle for as long as it is wired to the widget.
pub trait ListHost {
    /// A materialized (possibly recycled) row cell.
    type Cell;
    /// A section header or footer view.
    type View;
    /// Configuration of the trailing swipe actions for a row.
    type SwipeActions;

    /// Dequeues a cell registered under `identifier`.
    ///
    /// Returns `None` if nothing was registered under that identifier.
    fn dequeue_cell(&mut self, identifier: &str, at: IndexPath) -> Option<Self::Cell>;

    /// Intrinsic height of a header or footer view.
    ///
    /// Zero or negative means the view has not been sized yet.
    fn view_height(&self, view: &Self::View) -> f64;

    /// Applies a full or scoped reload.
    fn reload(&mut self, request: Reload);
}
