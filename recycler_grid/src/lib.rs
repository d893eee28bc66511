// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycler Grid: a sectioned adapter for grid-style host widgets.
//!
//! A [`GridAdapter`] owns a host grid widget (anything implementing
//! [`GridHost`]) and a sequence of [`GridSection`]s. It answers the widget's
//! data-source queries through
//! [`SectionedDataSource`](recycler_core::SectionedDataSource), its sizing
//! queries through [`GridAdapter::item_size`], [`GridAdapter::header_size`],
//! and [`GridAdapter::footer_size`], and its supplementary-view queries
//! through [`GridAdapter::supplementary_view`].
//!
//! ## Sizing
//!
//! Grid lines are divided into `span_count` equal shares of the widget's
//! cross-axis extent. Each [`GridViewModel`] claims its own number of shares
//! and derives its other dimension from its aspect ratio:
//!
//! ```rust
//! use kurbo::Size;
//! use recycler_grid::{GridViewModel, ScrollDirection, item_size};
//!
//! let photo = GridViewModel::new("photo", ()).with_aspect_ratio(2.0);
//!
//! // Two shares per row in a 300-wide vertical grid.
//! let size = item_size(Size::new(300.0, 800.0), 2.0, ScrollDirection::Vertical, &photo);
//! assert_eq!(size, Size::new(150.0, 75.0));
//!
//! // Two shares per column in a 200-tall horizontal grid.
//! let size = item_size(Size::new(800.0, 200.0), 2.0, ScrollDirection::Horizontal, &photo);
//! assert_eq!(size, Size::new(200.0, 100.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod builder;
mod host;
mod layout;
mod model;

pub use adapter::{BindFn, ClickFn, GridAdapter, GridCallbacks, SupplementaryBindFn};
pub use builder::GridBuilder;
pub use host::{DEFAULT_CELL_IDENTIFIER, GridHost};
pub use layout::{FlowLayout, ScrollDirection, item_size, reference_size};
pub use model::{GridDecoration, GridSection, GridViewModel, SupplementaryKind};
