// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid view models and section decorations.

use alloc::string::String;

use recycler_core::Section;

/// One item of a grid: which cell to materialize, what to bind, and how
/// large it is relative to its line.
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewModel<T> {
    /// Reuse identifier of the cell type; must be registered with the host.
    pub identifier: String,
    /// Payload handed to the bind and click callbacks.
    pub value: T,
    /// Shares of the cross axis this item occupies. Defaults to `1.0`.
    pub span_count: f64,
    /// Width divided by height. Defaults to `1.0`.
    pub aspect_ratio: f64,
}

impl<T> GridViewModel<T> {
    /// Creates a square item occupying one share.
    pub fn new(identifier: impl Into<String>, value: T) -> Self {
        Self {
            identifier: identifier.into(),
            value,
            span_count: 1.0,
            aspect_ratio: 1.0,
        }
    }

    /// Sets the number of shares the item occupies.
    #[must_use]
    pub fn with_span_count(mut self, span_count: f64) -> Self {
        self.span_count = span_count;
        self
    }

    /// Sets the item's width-to-height ratio.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
}

/// Which supplementary view the host is asking for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SupplementaryKind {
    /// The section header.
    Header,
    /// The section footer.
    Footer,
    /// Any other kind a custom layout defines. Always served a placeholder.
    Other(String),
}

/// Reusable header/footer configuration of a grid section.
///
/// A missing or empty identifier means the section has no view of that kind.
/// A non-positive height hides it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridDecoration {
    /// Reuse identifier of the header view.
    pub header_identifier: Option<String>,
    /// Header height.
    pub header_height: f64,
    /// Reuse identifier of the footer view.
    pub footer_identifier: Option<String>,
    /// Footer height.
    pub footer_height: f64,
}

impl GridDecoration {
    /// A decoration with a header `identifier` of the given `height`.
    #[must_use]
    pub fn header(identifier: impl Into<String>, height: f64) -> Self {
        Self {
            header_identifier: Some(identifier.into()),
            header_height: height,
            ..Self::default()
        }
    }

    /// Adds a footer `identifier` of the given `height`.
    #[must_use]
    pub fn with_footer(mut self, identifier: impl Into<String>, height: f64) -> Self {
        self.footer_identifier = Some(identifier.into());
        self.footer_height = height;
        self
    }

    /// Reuse identifier for `kind`, if the section has a view of that kind.
    #[must_use]
    pub fn identifier_for(&self, kind: &SupplementaryKind) -> Option<&str> {
        let identifier = match kind {
            SupplementaryKind::Header => self.header_identifier.as_deref(),
            SupplementaryKind::Footer => self.footer_identifier.as_deref(),
            SupplementaryKind::Other(_) => None,
        };
        identifier.filter(|id| !id.is_empty())
    }
}

/// A section of a grid adapter.
pub type GridSection<T, S = ()> = Section<GridViewModel<T>, GridDecoration, S>;

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{GridDecoration, GridViewModel, SupplementaryKind};

    #[test]
    fn items_default_to_one_square_share() {
        let item = GridViewModel::new("tile", 0_u8);
        assert_eq!(item.span_count, 1.0);
        assert_eq!(item.aspect_ratio, 1.0);
    }

    #[test]
    fn empty_identifiers_mean_no_view() {
        let decoration = GridDecoration {
            header_identifier: Some(String::new()),
            ..GridDecoration::default()
        }
        .with_footer("footer", 10.0);
        assert_eq!(decoration.identifier_for(&SupplementaryKind::Header), None);
        assert_eq!(
            decoration.identifier_for(&SupplementaryKind::Footer),
            Some("footer")
        );
        assert_eq!(
            decoration.identifier_for(&SupplementaryKind::Other("badge".into())),
            None
        );
    }
}
