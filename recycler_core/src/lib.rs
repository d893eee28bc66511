// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycler Core: sectioned view-model storage shared by list and grid adapters.
//!
//! A *recycler* adapter sits between a host scrollable widget (a table or a
//! grid) and application data. The host pulls counts and cells from the
//! adapter; the adapter resolves index paths into view models and forwards to
//! application callbacks. This crate holds the pieces both adapter families
//! share:
//!
//! - [`IndexPath`]: a `(section, item)` address.
//! - [`Section`] and [`SectionKey`]: a named, ordered group of view models
//!   whose identity is its name.
//! - [`Sections`]: the ordered section sequence an adapter owns, with checked
//!   lookups and mutations that report what changed.
//! - [`Reload`]: the full or scoped reload signal an adapter sends its host.
//! - [`SectionedDataSource`]: the count/cell/selection contract common to both
//!   adapter families.
//! - [`AdapterError`]: range and registration failures.
//!
//! ## Minimal example
//!
//! ```rust
//! use recycler_core::{IndexPath, Section, Sections};
//!
//! let mut sections: Sections<&str> = Sections::new();
//! sections.push(Section::new("fruit").with_models(["apple", "pear"]));
//! let added = sections.append_models(0, ["plum"]).unwrap();
//!
//! assert_eq!(added, 2..3);
//! assert_eq!(sections.item_count(0), 3);
//! assert_eq!(sections.view_model(IndexPath::new(0, 2)), Ok(&"plum"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod index_path;
mod reload;
mod section;
mod sections;
mod source;

pub use error::{AdapterError, Result};
pub use index_path::IndexPath;
pub use reload::{Reload, RowAnimation};
pub use section::{Section, SectionKey, SectionRef};
pub use sections::Sections;
pub use source::SectionedDataSource;
