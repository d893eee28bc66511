// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reload signals sent from an adapter to its host widget.

use alloc::vec::Vec;
use core::ops::Range;

use smallvec::{SmallVec, smallvec};

use crate::IndexPath;

/// Animation a host should use when applying a scoped reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowAnimation {
    /// Apply the change without animating.
    #[default]
    None,
    /// Cross-fade the affected rows or sections.
    Fade,
}

/// A request for the host widget to re-query part or all of its content.
///
/// Replacing every section yields [`Reload::All`]. Every other mutation is
/// scoped to the sections or rows it touched so unrelated on-screen content
/// is not redrawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reload {
    /// Re-query everything.
    All,
    /// Re-query the listed sections.
    Sections {
        /// Indices of the affected sections.
        sections: SmallVec<[usize; 2]>,
        /// Requested animation.
        animation: RowAnimation,
    },
    /// Insert rows at the listed paths, as one batched update.
    InsertItems {
        /// Paths of the inserted items, in ascending order.
        paths: Vec<IndexPath>,
        /// Requested animation.
        animation: RowAnimation,
    },
}

impl Reload {
    /// Reload of a single section.
    #[must_use]
    pub fn section(section: usize, animation: RowAnimation) -> Self {
        Self::Sections {
            sections: smallvec![section],
            animation,
        }
    }

    /// Insertion of the items `items` into `section`.
    #[must_use]
    pub fn insert_items(section: usize, items: Range<usize>, animation: RowAnimation) -> Self {
        Self::InsertItems {
            paths: items.map(|item| IndexPath::new(section, item)).collect(),
            animation,
        }
    }

    /// Returns `true` for a full reload.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` if this request may redraw `section`.
    #[must_use]
    pub fn touches_section(&self, section: usize) -> bool {
        match self {
            Self::All => true,
            Self::Sections { sections, .. } => sections.contains(&section),
            Self::InsertItems { paths, .. } => paths.iter().any(|p| p.section == section),
        }
    }

    /// Returns the requested animation; full reloads never animate.
    #[must_use]
    pub const fn animation(&self) -> RowAnimation {
        match self {
            Self::All => RowAnimation::None,
            Self::Sections { animation, .. } | Self::InsertItems { animation, .. } => *animation,
        }
    }
}
