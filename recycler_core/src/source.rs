// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pull contract shared by every adapter family.

use crate::{IndexPath, Result};

/// The part of a host widget's data/delegate contract common to list and
/// grid adapters.
///
/// Toolkit integrations call these methods from layout passes, scroll
/// handling, and taps. Every call completes synchronously.
pub trait SectionedDataSource {
    /// The cell type materialized by the host.
    type Cell;

    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    ///
    /// Returns `0` for a section that does not exist.
    fn item_count(&self, section: usize) -> usize;

    /// Materializes and binds the cell for `at`.
    fn cell_for(&mut self, at: IndexPath) -> Result<Self::Cell>;

    /// Reports that the user selected the item at `at`.
    fn did_select(&mut self, at: IndexPath) -> Result<()>;
}
