// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent construction of a [`GridAdapter`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use recycler_core::{IndexPath, SectionRef};

use crate::{
    DEFAULT_CELL_IDENTIFIER, FlowLayout, GridAdapter, GridCallbacks, GridHost, GridSection,
    GridViewModel, ScrollDirection, SupplementaryKind,
};

/// Collects layout options, callbacks, and initial sections, then produces a
/// [`GridAdapter`].
///
/// Starting a builder registers [`DEFAULT_CELL_IDENTIFIER`] with the host.
/// Layout options are applied to the host as soon as they are set.
pub struct GridBuilder<W: GridHost, T, S = ()> {
    host: W,
    sections: Vec<GridSection<T, S>>,
    callbacks: GridCallbacks<W, T, S>,
    span_count: f64,
    direction: ScrollDirection,
}

impl<W: GridHost, T> GridBuilder<W, T> {
    /// Starts a builder for `host` whose sections carry no payload.
    pub fn new(host: W) -> Self {
        Self::with_payload(host)
    }
}

impl<W: GridHost, T, S> GridBuilder<W, T, S> {
    /// Starts a builder for `host` whose sections carry payloads of type `S`.
    pub fn with_payload(mut host: W) -> Self {
        host.register_cell(DEFAULT_CELL_IDENTIFIER);
        Self {
            host,
            sections: Vec::new(),
            callbacks: GridCallbacks::default(),
            span_count: 1.0,
            direction: ScrollDirection::Vertical,
        }
    }

    /// Installs a custom host layout.
    ///
    /// Item sizing still uses the builder's span count and direction.
    #[must_use]
    pub fn with_layout(mut self, layout: W::Layout) -> Self {
        self.host.set_layout(layout);
        self
    }

    /// Installs a spacing-free [`FlowLayout`] scrolling in `direction`, and
    /// sizes items against `span_count` shares per line.
    #[must_use]
    pub fn with_flow_layout(mut self, span_count: f64, direction: ScrollDirection) -> Self {
        debug_assert!(
            span_count.is_finite() && span_count > 0.0,
            "grid span count must be positive and finite; got {span_count}"
        );
        self.span_count = span_count;
        self.direction = direction;
        self.host.set_layout(FlowLayout::new(direction).into());
        self
    }

    /// Seeds the adapter with `sections`.
    ///
    /// No reload is issued for these; the host pulls them on its first layout.
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<GridSection<T, S>>) -> Self {
        self.sections = sections;
        self
    }

    /// Sets the cell bind callback.
    #[must_use]
    pub fn on_bind<F>(mut self, bind: F) -> Self
    where
        F: FnMut(IndexPath, &GridViewModel<T>, &mut W::Cell) + 'static,
    {
        self.callbacks.bind = Some(Box::new(bind));
        self
    }

    /// Sets the item selection callback.
    #[must_use]
    pub fn on_click<F>(mut self, click: F) -> Self
    where
        F: FnMut(IndexPath, &GridViewModel<T>) + 'static,
    {
        self.callbacks.click = Some(Box::new(click));
        self
    }

    /// Sets the supplementary view bind callback.
    #[must_use]
    pub fn on_supplementary_bind<F>(mut self, bind: F) -> Self
    where
        F: FnMut(IndexPath, SectionRef<'_, S>, &SupplementaryKind, &mut W::View) + 'static,
    {
        self.callbacks.supplementary_bind = Some(Box::new(bind));
        self
    }

    /// Produces the adapter.
    #[must_use]
    pub fn build(self) -> GridAdapter<W, T, S> {
        GridAdapter::from_parts(
            self.host,
            self.sections,
            self.callbacks,
            self.span_count,
            self.direction,
        )
    }
}

impl<W, T, S> fmt::Debug for GridBuilder<W, T, S>
where
    W: GridHost + fmt::Debug,
    T: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridBuilder")
            .field("host", &self.host)
            .field("sections", &self.sections)
            .field("callbacks", &self.callbacks)
            .field("span_count", &self.span_count)
            .field("direction", &self.direction)
            .finish()
    }
}
