// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycler List: a sectioned adapter for table-style host widgets.
//!
//! A [`ListAdapter`] owns a host table widget (anything implementing
//! [`ListHost`]) and a sequence of [`ListSection`]s. The toolkit integration
//! forwards the widget's data-source and delegate queries to the adapter:
//!
//! - counts and cells through [`SectionedDataSource`](recycler_core::SectionedDataSource),
//! - header/footer views and heights through [`ListAdapter::header_view`],
//!   [`ListAdapter::header_height`] and their footer counterparts,
//! - editing through [`ListAdapter::can_edit`] and [`ListAdapter::swipe_actions`].
//!
//! Application code supplies the per-row behavior as callbacks, usually via
//! [`ListBuilder`], and mutates data only through the adapter so that every
//! change reaches the host as a [`Reload`](recycler_core::Reload) scoped to the
//! rows or sections it touched.
//!
//! ## Minimal example
//!
//! ```rust
//! use recycler_core::{IndexPath, Reload, SectionedDataSource};
//! use recycler_list::{ListBuilder, ListHost, ListSection, ListViewModel};
//!
//! #[derive(Default)]
//! struct Table {
//!     reloads: Vec<Reload>,
//! }
//!
//! impl ListHost for Table {
//!     type Cell = String;
//!     type View = ();
//!     type SwipeActions = ();
//!
//!     fn dequeue_cell(&mut self, identifier: &str, _at: IndexPath) -> Option<String> {
//!         (identifier == "text").then(String::new)
//!     }
//!     fn view_height(&self, _view: &()) -> f64 {
//!         0.0
//!     }
//!     fn reload(&mut self, request: Reload) {
//!         self.reloads.push(request);
//!     }
//! }
//!
//! let mut adapter = ListBuilder::new(Table::default())
//!     .on_bind(|_, model: &ListViewModel<u32>, cell| *cell = model.value.to_string())
//!     .build();
//!
//! adapter.append_section(ListSection::new("numbers"));
//! adapter
//!     .append_models(0, [ListViewModel::new("text", 7), ListViewModel::new("text", 8)])
//!     .unwrap();
//!
//! assert_eq!(adapter.item_count(0), 2);
//! assert_eq!(adapter.cell_for(IndexPath::new(0, 1)).unwrap(), "8");
//! assert_eq!(adapter.host().reloads.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod builder;
mod host;
mod model;

pub use adapter::{BindFn, ClickFn, DecorationBindFn, ListAdapter, ListCallbacks, SwipeActionsFn};
pub use builder::ListBuilder;
pub use host::ListHost;
pub use model::{Dimension, ListDecoration, ListSection, ListViewModel};
