// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent construction of a [`ListAdapter`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use recycler_core::{IndexPath, SectionRef};

use crate::{ListAdapter, ListCallbacks, ListHost, ListSection, ListViewModel};

/// Collects callbacks and initial sections, then produces a [`ListAdapter`].
pub struct ListBuilder<W: ListHost, T, S = ()> {
    host: W,
    sections: Vec<ListSection<T, W::View, S>>,
    callbacks: ListCallbacks<W, T, S>,
}

impl<W: ListHost, T> ListBuilder<W, T> {
    /// Starts a builder for `host` whose sections carry no payload.
    pub fn new(host: W) -> Self {
        Self::with_payload(host)
    }
}

impl<W: ListHost, T, S> ListBuilder<W, T, S> {
    /// Starts a builder for `host` whose sections carry payloads of type `S`.
    pub fn with_payload(host: W) -> Self {
        Self {
            host,
            sections: Vec::new(),
            callbacks: ListCallbacks::default(),
        }
    }

    /// Seeds the adapter with `sections`.
    ///
    /// No reload is issued for these; the host pulls them on its first layout.
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<ListSection<T, W::View, S>>) -> Self {
        self.sections = sections;
        self
    }

    /// Sets the cell bind callback.
    #[must_use]
    pub fn on_bind<F>(mut self, bind: F) -> Self
    where
        F: FnMut(IndexPath, &ListViewModel<T>, &mut W::Cell) + 'static,
    {
        self.callbacks.bind = Some(Box::new(bind));
        self
    }

    /// Sets the row selection callback.
    #[must_use]
    pub fn on_click<F>(mut self, click: F) -> Self
    where
        F: FnMut(IndexPath, &ListViewModel<T>) + 'static,
    {
        self.callbacks.click = Some(Box::new(click));
        self
    }

    /// Sets the header view bind callback.
    #[must_use]
    pub fn on_header_bind<F>(mut self, bind: F) -> Self
    where
        F: FnMut(SectionRef<'_, S>, Option<&mut W::View>) + 'static,
    {
        self.callbacks.header_bind = Some(Box::new(bind));
        self
    }

    /// Sets the footer view bind callback.
    #[must_use]
    pub fn on_footer_bind<F>(mut self, bind: F) -> Self
    where
        F: FnMut(SectionRef<'_, S>, Option<&mut W::View>) + 'static,
    {
        self.callbacks.footer_bind = Some(Box::new(bind));
        self
    }

    /// Sets the trailing swipe-actions callback.
    #[must_use]
    pub fn on_swipe_actions<F>(mut self, actions: F) -> Self
    where
        F: FnMut(IndexPath, &ListViewModel<T>) -> Option<W::SwipeActions> + 'static,
    {
        self.callbacks.swipe_actions = Some(Box::new(actions));
        self
    }

    /// Produces the adapter.
    #[must_use]
    pub fn build(self) -> ListAdapter<W, T, S> {
        ListAdapter::from_parts(self.host, self.sections, self.callbacks)
    }
}

impl<W, T, S> fmt::Debug for ListBuilder<W, T, S>
where
    W: ListHost + fmt::Debug,
    W::View: fmt::Debug,
    T: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListBuilder")
            .field("host", &self.host)
            .field("sections", &self.sections)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}
