// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid adapter and its callback record.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use recycler_core::{
    AdapterError, IndexPath, Reload, Result, RowAnimation, SectionRef, SectionedDataSource,
    Sections,
};

use crate::layout::{item_size, reference_size};
use crate::{
    GridDecoration, GridHost, GridSection, GridViewModel, ScrollDirection, SupplementaryKind,
};

/// Binds a view model into a freshly dequeued cell.
pub type BindFn<W, T> = Box<dyn FnMut(IndexPath, &GridViewModel<T>, &mut <W as GridHost>::Cell)>;

/// Reacts to an item being selected.
pub type ClickFn<T> = Box<dyn FnMut(IndexPath, &GridViewModel<T>)>;

/// Binds a freshly dequeued header, footer, or other supplementary view.
pub type SupplementaryBindFn<W, S> = Box<
    dyn FnMut(IndexPath, SectionRef<'_, S>, &SupplementaryKind, &mut <W as GridHost>::View),
>;

/// Logs a request the adapter turned down.
fn rejected(request: &'static str) -> impl Fn(&AdapterError) {
    move |err| tracing::warn!(target: "recycler_grid", %err, request, "rejected request")
}

/// The callbacks a [`GridAdapter`] dispatches to.
///
/// Every field is optional; a missing callback makes the corresponding
/// dispatch a no-op.
pub struct GridCallbacks<W: GridHost, T, S = ()> {
    /// Cell binding.
    pub bind: Option<BindFn<W, T>>,
    /// Item selection.
    pub click: Option<ClickFn<T>>,
    /// Supplementary view binding.
    pub supplementary_bind: Option<SupplementaryBindFn<W, S>>,
}

impl<W: GridHost, T, S> Default for GridCallbacks<W, T, S> {
    fn default() -> Self {
        Self {
            bind: None,
            click: None,
            supplementary_bind: None,
        }
    }
}

impl<W: GridHost, T, S> fmt::Debug for GridCallbacks<W, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridCallbacks")
            .field("bind", &self.bind.is_some())
            .field("click", &self.click.is_some())
            .field("supplementary_bind", &self.supplementary_bind.is_some())
            .finish()
    }
}

/// Adapter between a host grid widget and sectioned grid data.
///
/// Besides counts, cells, and selection, the adapter answers the host's
/// sizing queries: every item is sized proportionally from the widget bounds,
/// the adapter's `span_count` and `direction`, and the item's own span count
/// and aspect ratio (see [`item_size`](crate::item_size)).
pub struct GridAdapter<W: GridHost, T, S = ()> {
    host: W,
    sections: Sections<GridViewModel<T>, GridDecoration, S>,
    callbacks: GridCallbacks<W, T, S>,
    span_count: f64,
    direction: ScrollDirection,
}

impl<W: GridHost, T, S> GridAdapter<W, T, S> {
    pub(crate) fn from_parts(
        host: W,
        sections: Vec<GridSection<T, S>>,
        callbacks: GridCallbacks<W, T, S>,
        span_count: f64,
        direction: ScrollDirection,
    ) -> Self {
        Self {
            host,
            sections: Sections::from(sections),
            callbacks,
            span_count,
            direction,
        }
    }

    /// Returns the host widget.
    #[must_use]
    pub fn host(&self) -> &W {
        &self.host
    }

    /// Returns the host widget mutably.
    pub fn host_mut(&mut self) -> &mut W {
        &mut self.host
    }

    /// Unwires the adapter, returning the host widget.
    #[must_use]
    pub fn into_host(self) -> W {
        self.host
    }

    /// Number of equal shares each grid line is divided into.
    #[must_use]
    pub const fn span_count(&self) -> f64 {
        self.span_count
    }

    /// Scroll direction used for sizing.
    #[must_use]
    pub const fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Returns the sections in order.
    #[must_use]
    pub fn sections(&self) -> &[GridSection<T, S>] {
        self.sections.as_slice()
    }

    /// Returns the section at `index`, if any.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&GridSection<T, S>> {
        self.sections.get(index)
    }

    /// Returns the index of the first section named `name`.
    #[must_use]
    pub fn section_named(&self, name: &str) -> Option<usize> {
        self.sections.position(name)
    }

    /// Resolves `at` to its view model.
    pub fn view_model(&self, at: IndexPath) -> Result<&GridViewModel<T>> {
        self.sections.view_model(at)
    }

    /// Replaces every section and reloads the whole widget.
    ///
    /// Returns the previous sections.
    pub fn set_sections(&mut self, sections: Vec<GridSection<T, S>>) -> Vec<GridSection<T, S>> {
        let old = self.sections.replace_all(sections);
        tracing::debug!(
            target: "recycler_grid",
            sections = self.sections.len(),
            "replaced all sections"
        );
        self.host.reload(Reload::All);
        old
    }

    /// Appends a section and reloads it.
    pub fn append_section(&mut self, section: GridSection<T, S>) {
        let index = self.sections.push(section);
        tracing::debug!(target: "recycler_grid", section = index, "appended section");
        self.host.reload(Reload::section(index, RowAnimation::None));
    }

    /// Inserts a section at `at` and reloads it.
    pub fn insert_section(&mut self, section: GridSection<T, S>, at: usize) -> Result<()> {
        self.sections
            .insert(at, section)
            .inspect_err(rejected("section insert"))?;
        tracing::debug!(target: "recycler_grid", section = at, "inserted section");
        self.host.reload(Reload::section(at, RowAnimation::None));
        Ok(())
    }

    /// Appends items to `section` and reloads that section.
    ///
    /// An empty batch changes nothing and issues no reload.
    pub fn append_models(
        &mut self,
        section: usize,
        models: impl IntoIterator<Item = GridViewModel<T>>,
    ) -> Result<()> {
        let added = self
            .sections
            .append_models(section, models)
            .inspect_err(rejected("item append"))?;
        if added.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            target: "recycler_grid",
            section,
            count = added.len(),
            "appended items"
        );
        self.host
            .reload(Reload::section(section, RowAnimation::None));
        Ok(())
    }

    /// Replaces the items of `section` and reloads it.
    ///
    /// Returns the previous items.
    pub fn update_models(
        &mut self,
        section: usize,
        models: Vec<GridViewModel<T>>,
    ) -> Result<Vec<GridViewModel<T>>> {
        let old = self
            .sections
            .update_models(section, models)
            .inspect_err(rejected("item update"))?;
        tracing::debug!(
            target: "recycler_grid",
            section,
            count = self.sections.item_count(section),
            "replaced items"
        );
        self.host
            .reload(Reload::section(section, RowAnimation::None));
        Ok(old)
    }

    /// Size of the item at `at` for the host's current bounds.
    pub fn item_size(&self, at: IndexPath) -> Result<Size> {
        let model = self
            .sections
            .view_model(at)
            .inspect_err(rejected("item size"))?;
        Ok(item_size(
            self.host.bounds(),
            self.span_count,
            self.direction,
            model,
        ))
    }

    /// Size of the header of `section`; [`Size::ZERO`] hides it.
    pub fn header_size(&self, section: usize) -> Result<Size> {
        let height = self
            .sections
            .section(section)
            .inspect_err(rejected("header size"))?
            .decoration()
            .header_height;
        Ok(reference_size(self.host.bounds(), height))
    }

    /// Size of the footer of `section`; [`Size::ZERO`] hides it.
    pub fn footer_size(&self, section: usize) -> Result<Size> {
        let height = self
            .sections
            .section(section)
            .inspect_err(rejected("footer size"))?
            .decoration()
            .footer_height;
        Ok(reference_size(self.host.bounds(), height))
    }

    /// Materializes and binds the supplementary view of `kind` for the section
    /// of `at`.
    ///
    /// Sections without a view of that kind get the host's placeholder view,
    /// and the bind callback is not called.
    pub fn supplementary_view(&mut self, at: IndexPath, kind: &SupplementaryKind) -> Result<W::View> {
        let section = self
            .sections
            .section(at.section)
            .inspect_err(rejected("supplementary view"))?;
        let Some(identifier) = section.decoration().identifier_for(kind) else {
            return Ok(self.host.placeholder_view());
        };
        let mut view = self
            .host
            .dequeue_supplementary(kind, identifier, at)
            .ok_or_else(|| AdapterError::unregistered(identifier, at))
            .inspect_err(rejected("supplementary view"))?;
        tracing::trace!(target: "recycler_grid", %at, ?kind, identifier, "binding supplementary view");
        if let Some(bind) = self.callbacks.supplementary_bind.as_mut() {
            bind(at, section.summary(at.section), kind, &mut view);
        }
        Ok(view)
    }
}

impl<W: GridHost, T, S> SectionedDataSource for GridAdapter<W, T, S> {
    type Cell = W::Cell;

    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.item_count(section)
    }

    fn cell_for(&mut self, at: IndexPath) -> Result<W::Cell> {
        let model = self.sections.view_model(at).inspect_err(rejected("cell"))?;
        let mut cell = self
            .host
            .dequeue_cell(&model.identifier, at)
            .ok_or_else(|| AdapterError::unregistered(model.identifier.as_str(), at))
            .inspect_err(rejected("cell"))?;
        tracing::trace!(target: "recycler_grid", %at, identifier = %model.identifier, "binding cell");
        if let Some(bind) = self.callbacks.bind.as_mut() {
            bind(at, model, &mut cell);
        }
        Ok(cell)
    }

    fn did_select(&mut self, at: IndexPath) -> Result<()> {
        let model = self
            .sections
            .view_model(at)
            .inspect_err(rejected("selection"))?;
        if let Some(click) = self.callbacks.click.as_mut() {
            click(at, model);
        }
        Ok(())
    }
}

impl<W, T, S> fmt::Debug for GridAdapter<W, T, S>
where
    W: GridHost + fmt::Debug,
    T: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridAdapter")
            .field("host", &self.host)
            .field("sections", &self.sections)
            .field("callbacks", &self.callbacks)
            .field("span_count", &self.span_count)
            .field("direction", &self.direction)
            .finish()
    }
}
