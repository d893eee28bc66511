// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-level addressing of items inside a sectioned list or grid.

use core::fmt;

/// Position of a single item: which section, and which item inside it.
///
/// Table-style hosts usually call the second component a *row*; grid-style
/// hosts call it an *item*. Both names refer to the same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IndexPath {
    /// Index of the section in the adapter's section sequence.
    pub section: usize,
    /// Index of the item within its section.
    pub item: usize,
}

impl IndexPath {
    /// Creates an index path addressing `item` within `section`.
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Returns the item index under its table-style name.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.item
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::IndexPath;

    #[test]
    fn orders_by_section_then_item() {
        let a = IndexPath::new(0, 9);
        let b = IndexPath::new(1, 0);
        let c = IndexPath::new(1, 2);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(c.row(), 2);
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(format!("{}", IndexPath::from((3, 4))), "[3, 4]");
    }
}
