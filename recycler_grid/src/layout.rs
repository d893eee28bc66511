// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional item sizing for flow-style grids.
//!
//! A grid line (a row when scrolling vertically, a column when scrolling
//! horizontally) is divided into `span_count` equal shares of the widget's
//! cross-axis extent. Each item claims its own `span_count` of those shares
//! and derives its main-axis extent from its aspect ratio (`width / height`).
//!
//! Nothing here checks that the items on a line fit: when their spans add up
//! to more than the adapter's `span_count`, the host's layout engine wraps
//! them and the grid comes out ragged.

use kurbo::Size;

use crate::GridViewModel;

/// Axis along which a grid scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Lines are rows; items are sized from the widget's width.
    #[default]
    Vertical,
    /// Lines are columns; items are sized from the widget's height.
    Horizontal,
}

/// Parameters of a flow layout installed by
/// [`GridBuilder::with_flow_layout`](crate::GridBuilder::with_flow_layout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowLayout {
    /// Scroll direction of the layout.
    pub direction: ScrollDirection,
    /// Spacing between items on the same line.
    pub minimum_interitem_spacing: f64,
    /// Spacing between lines.
    pub minimum_line_spacing: f64,
}

impl FlowLayout {
    /// A flow layout in `direction` with no spacing, so that proportional
    /// item sizes tile the widget exactly.
    #[must_use]
    pub const fn new(direction: ScrollDirection) -> Self {
        Self {
            direction,
            minimum_interitem_spacing: 0.0,
            minimum_line_spacing: 0.0,
        }
    }
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self::new(ScrollDirection::Vertical)
    }
}

/// Size of one item in a grid of `bounds`, divided into `span_count` shares.
///
/// - vertical: `width = bounds.width / span_count * model.span_count`,
///   `height = width / model.aspect_ratio`.
/// - horizontal: `height = bounds.height / span_count * model.span_count`,
///   `width = height * model.aspect_ratio`.
#[must_use]
pub fn item_size<T>(
    bounds: Size,
    span_count: f64,
    direction: ScrollDirection,
    model: &GridViewModel<T>,
) -> Size {
    debug_assert!(
        span_count.is_finite() && span_count > 0.0,
        "grid span count must be positive and finite; got {span_count}"
    );
    debug_assert!(
        model.aspect_ratio.is_finite() && model.aspect_ratio > 0.0,
        "aspect ratio must be positive and finite; got {}",
        model.aspect_ratio
    );
    match direction {
        ScrollDirection::Vertical => {
            let width = bounds.width / span_count * model.span_count;
            Size::new(width, width / model.aspect_ratio)
        }
        ScrollDirection::Horizontal => {
            let height = bounds.height / span_count * model.span_count;
            Size::new(height * model.aspect_ratio, height)
        }
    }
}

/// Size of a section header or footer of `height` in a grid of `bounds`.
///
/// A non-positive height hides the view (`Size::ZERO`); otherwise it spans
/// the widget's full width.
#[must_use]
pub fn reference_size(bounds: Size, height: f64) -> Size {
    if height <= 0.0 {
        Size::ZERO
    } else {
        Size::new(bounds.width, height)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ScrollDirection, item_size, reference_size};
    use crate::GridViewModel;

    #[test]
    fn vertical_sizes_from_width() {
        let model = GridViewModel::new("tile", ()).with_aspect_ratio(2.0);
        let size = item_size(
            Size::new(300.0, 999.0),
            2.0,
            ScrollDirection::Vertical,
            &model,
        );
        assert_eq!(size, Size::new(150.0, 75.0));
    }

    #[test]
    fn horizontal_sizes_from_height() {
        let model = GridViewModel::new("tile", ()).with_aspect_ratio(2.0);
        let size = item_size(
            Size::new(999.0, 200.0),
            2.0,
            ScrollDirection::Horizontal,
            &model,
        );
        assert_eq!(size, Size::new(200.0, 100.0));
    }

    #[test]
    fn wide_items_claim_more_shares() {
        let model = GridViewModel::new("banner", ()).with_span_count(3.0);
        let size = item_size(
            Size::new(400.0, 0.0),
            4.0,
            ScrollDirection::Vertical,
            &model,
        );
        assert_eq!(size, Size::new(300.0, 300.0));
    }

    #[test]
    fn overflowing_spans_are_not_clamped() {
        // 3 of 2 shares: wider than the widget, left to the host to wrap.
        let model = GridViewModel::new("tile", ()).with_span_count(3.0);
        let size = item_size(
            Size::new(100.0, 0.0),
            2.0,
            ScrollDirection::Vertical,
            &model,
        );
        assert_eq!(size.width, 150.0);
    }

    #[test]
    fn reference_size_hides_non_positive_heights() {
        let bounds = Size::new(320.0, 480.0);
        assert_eq!(reference_size(bounds, 0.0), Size::ZERO);
        assert_eq!(reference_size(bounds, -4.0), Size::ZERO);
        assert_eq!(reference_size(bounds, 40.0), Size::new(320.0, 40.0));
    }
}
