// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List view models and section decorations.

use alloc::string::String;

use recycler_core::Section;

/// One row of a list: which cell to materialize, and what to bind into it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel<T> {
    /// Reuse identifier of the cell type; must be registered with the host.
    pub identifier: String,
    /// Payload handed to the bind and click callbacks.
    pub value: T,
    /// Whether the row offers editing affordances such as swipe actions.
    pub editable: bool,
}

impl<T> ListViewModel<T> {
    /// Creates a non-editable row.
    pub fn new(identifier: impl Into<String>, value: T) -> Self {
        Self {
            identifier: identifier.into(),
            value,
            editable: false,
        }
    }

    /// Sets whether the row is editable.
    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

/// Pre-built header and footer views of a list section.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDecoration<V> {
    /// View shown above the section's rows.
    pub header: Option<V>,
    /// View shown below the section's rows.
    pub footer: Option<V>,
}

impl<V> Default for ListDecoration<V> {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
        }
    }
}

/// A section of a list adapter with header/footer views of type `V`.
pub type ListSection<T, V, S = ()> = Section<ListViewModel<T>, ListDecoration<V>, S>;

/// Height reported to the host for a header or footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// A fixed height in logical pixels.
    Points(f64),
    /// Let the host size the view itself.
    Automatic,
}

impl Dimension {
    /// `Points(height)` if `height` is positive, otherwise `Automatic`.
    #[must_use]
    pub fn from_height(height: f64) -> Self {
        if height > 0.0 {
            Self::Points(height)
        } else {
            Self::Automatic
        }
    }

    /// Returns the fixed height, if any.
    #[must_use]
    pub const fn points(self) -> Option<f64> {
        match self {
            Self::Points(h) => Some(h),
            Self::Automatic => None,
        }
    }
}
