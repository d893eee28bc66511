// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host grid widget, as seen from the adapter.

use kurbo::Size;
use recycler_core::{IndexPath, Reload};

use crate::{FlowLayout, SupplementaryKind};

/// Reuse identifier registered with every host when a grid adapter is built.
pub const DEFAULT_CELL_IDENTIFIER: &str = "cell";

/// Operations a grid adapter needs from the grid widget it drives.
pub trait GridHost {
    /// A materialized (possibly recycled) item cell.
    type Cell;
    /// A materialized header, footer, or other supplementary view.
    type View;
    /// The host's layout object. Must be constructible from a [`FlowLayout`].
    type Layout: From<FlowLayout>;

    /// Current bounds of the widget.
    fn bounds(&self) -> Size;

    /// Registers the plain cell type under `identifier`.
    fn register_cell(&mut self, identifier: &str);

    /// Dequeues a cell registered under `identifier`.
    ///
    /// Returns `None` if nothing was registered under that identifier.
    fn dequeue_cell(&mut self, identifier: &str, at: IndexPath) -> Option<Self::Cell>;

    /// Dequeues a supplementary view of `kind` registered under `identifier`.
    ///
    /// Returns `None` if nothing was registered under that identifier.
    fn dequeue_supplementary(
        &mut self,
        kind: &SupplementaryKind,
        identifier: &str,
        at: IndexPath,
    ) -> Option<Self::View>;

    /// An empty view returned for sections without a view of the requested kind.
    fn placeholder_view(&mut self) -> Self::View;

    /// Replaces the widget's layout.
    fn set_layout(&mut self, layout: Self::Layout);

    /// Applies a full or scoped reload.
    fn reload(&mut self, request: Reload);
}
