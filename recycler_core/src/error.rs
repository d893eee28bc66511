// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the list and grid adapters.

use alloc::string::String;

use crate::IndexPath;

/// Result alias for adapter operations.
pub type Result<T, E = AdapterError> = core::result::Result<T, E>;

/// Errors reported when a query or mutation does not match the adapter's data.
///
/// None of these are recoverable in the sense of being retried: they indicate
/// that the host widget asked for an index that does not exist, or that the
/// caller never registered a cell type for a view model's identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// A section index past the end of the section sequence.
    #[error("section {section} out of range (section count is {len})")]
    SectionOutOfRange {
        /// The requested section.
        section: usize,
        /// Number of sections at the time of the request.
        len: usize,
    },

    /// An item index past the end of its section.
    #[error("item {path} out of range (section holds {len} items)")]
    ItemOutOfRange {
        /// The requested index path.
        path: IndexPath,
        /// Number of items in the addressed section.
        len: usize,
    },

    /// An insertion position past the end of the section sequence.
    #[error("cannot insert section at {index} (section count is {len})")]
    InsertOutOfRange {
        /// The requested insertion position.
        index: usize,
        /// Number of sections at the time of the request.
        len: usize,
    },

    /// The host widget has no cell or view registered under this identifier.
    #[error("no view registered for identifier `{identifier}` (requested at {at})")]
    UnregisteredIdentifier {
        /// The reuse identifier that failed to materialize.
        identifier: String,
        /// Where the host was asked to materialize it.
        at: IndexPath,
    },
}

impl AdapterError {
    /// Create an unregistered-identifier error.
    pub fn unregistered(identifier: impl Into<String>, at: IndexPath) -> Self {
        Self::UnregisteredIdentifier {
            identifier: identifier.into(),
            at,
        }
    }
}
