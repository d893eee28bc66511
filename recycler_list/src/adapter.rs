// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list adapter and its callback record.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use recycler_core::{
    AdapterError, IndexPath, Reload, Result, RowAnimation, SectionRef, SectionedDataSource,
    Sections,
};

use crate::{Dimension, ListDecoration, ListHost, ListSection, ListViewModel};

/// Binds a view model into a freshly dequeued cell.
pub type BindFn<W, T> = Box<dyn FnMut(IndexPath, &ListViewModel<T>, &mut <W as ListHost>::Cell)>;

/// Reacts to a row being selected.
pub type ClickFn<T> = Box<dyn FnMut(IndexPath, &ListViewModel<T>)>;

/// Customizes a section's header or footer view in place.
///
/// Called even when the section has no view for that edge.
pub type DecorationBindFn<W, S> =
    Box<dyn FnMut(SectionRef<'_, S>, Option<&mut <W as ListHost>::View>)>;

/// Produces the trailing swipe actions for a row; `None` means no actions.
pub type SwipeActionsFn<W, T> =
    Box<dyn FnMut(IndexPath, &ListViewModel<T>) -> Option<<W as ListHost>::SwipeActions>>;

/// The callbacks a [`ListAdapter`] dispatches to.
///
/// Every field is optional; a missing callback makes the corresponding
/// dispatch a no-op.
pub struct ListCallbacks<W: ListHost, T, S = ()> {
    /// Cell binding.
    pub bind: Option<BindFn<W, T>>,
    /// Row selection.
    pub click: Option<ClickFn<T>>,
    /// Header view binding.
    pub header_bind: Option<DecorationBindFn<W, S>>,
    /// Footer view binding.
    pub footer_bind: Option<DecorationBindFn<W, S>>,
    /// Trailing swipe actions.
    pub swipe_actions: Option<SwipeActionsFn<W, T>>,
}

impl<W: ListHost, T, S> Default for ListCallbacks<W, T, S> {
    fn default() -> Self {
        Self {
            bind: None,
            click: None,
            header_bind: None,
            footer_bind: None,
            swipe_actions: None,
        }
    }
}

impl<W: ListHost, T, S> fmt::Debug for ListCallbacks<W, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCallbacks")
            .field("bind", &self.bind.is_some())
            .field("click", &self.click.is_some())
            .field("header_bind", &self.header_bind.is_some())
            .field("footer_bind", &self.footer_bind.is_some())
            .field("swipe_actions", &self.swipe_actions.is_some())
            .finish()
    }
}

/// Logs a request the adapter turned down.
fn rejected(request: &'static str) -> impl Fn(&AdapterError) {
    move |err| tracing::warn!(target: "recycler_list", %err, request, "rejected request")
}

#[derive(Clone, Copy, Debug)]
enum Edge {
    Header,
    Footer,
}

/// Adapter between a host table widget and sectioned list data.
///
/// The host pulls counts, cells, header/footer views and heights from the
/// adapter; the adapter resolves each index path to a [`ListViewModel`] and
/// forwards to the registered [`ListCallbacks`]. Mutations go through the
/// adapter so that the host is always told which sections or rows changed.
pub struct ListAdapter<W: ListHost, T, S = ()> {
    host: W,
    sections: Sections<ListViewModel<T>, ListDecoration<W::View>, S>,
    callbacks: ListCallbacks<W, T, S>,
}

impl<W: ListHost, T, S> ListAdapter<W, T, S> {
    pub(crate) fn from_parts(
        host: W,
        sections: Vec<ListSection<T, W::View, S>>,
        callbacks: ListCallbacks<W, T, S>,
    ) -> Self {
        Self {
            host,
            sections: Sections::from(sections),
            callbacks,
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

    /// Returns the sections in order.
    #[must_use]
    pub fn sections(&self) -> &[ListSection<T, W::View, S>] {
        self.sections.as_slice()
    }

    /// Returns the section at `index`, if any.
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&ListSection<T, W::View, S>> {
        self.sections.get(index)
    }

    /// Returns the index of the first section named `name`.
    #[must_use]
    pub fn section_named(&self, name: &str) -> Option<usize> {
        self.sections.position(name)
    }

    /// Resolves `at` to its view model.
    pub fn view_model(&self, at: IndexPath) -> Result<&ListViewModel<T>> {
        self.sections.view_model(at)
    }

    /// Replaces every section and reloads the whole widget.
    ///
    /// Returns the previous sections.
    pub fn set_sections(
        &mut self,
        sections: Vec<ListSection<T, W::View, S>>,
    ) -> Vec<ListSection<T, W::View, S>> {
        let old = self.sections.replace_all(sections);
        tracing::debug!(
            target: "recycler_list",
            sections = self.sections.len(),
            "replaced all sections"
        );
        self.host.reload(Reload::All);
        old
    }

    /// Appends a section and reloads it.
    ///
    /// Returns the section count after the append, which is one past the
    /// new section's index.
    pub fn append_section(&mut self, section: ListSection<T, W::View, S>) -> usize {
        let index = self.sections.push(section);
        tracing::debug!(target: "recycler_list", section = index, "appended section");
        self.host.reload(Reload::section(index, RowAnimation::Fade));
        self.sections.len()
    }

    /// Inserts a section at `at` and reloads it.
    pub fn insert_section(&mut self, section: ListSection<T, W::View, S>, at: usize) -> Result<()> {
        self.sections
            .insert(at, section)
            .inspect_err(rejected("section insert"))?;
        tracing::debug!(target: "recycler_list", section = at, "inserted section");
        self.host.reload(Reload::section(at, RowAnimation::Fade));
        Ok(())
    }

    /// Appends rows to `section` and inserts them into the host in one batch.
    ///
    /// The new rows occupy `old_len..old_len + n`; only those rows are
    /// announced, so existing rows are not redrawn. An empty batch changes
    /// nothing and issues no reload.
    pub fn append_models(
        &mut self,
        section: usize,
        models: impl IntoIterator<Item = ListViewModel<T>>,
    ) -> Result<()> {
        let added = self
            .sections
            .append_models(section, models)
            .inspect_err(rejected("row append"))?;
        if added.is_empty() {
            return Ok(());
        }
        tracing::debug!(
            target: "recycler_list",
            section,
            first = added.start,
            count = added.len(),
            "appended rows"
        );
        self.host
            .reload(Reload::insert_items(section, added, RowAnimation::Fade));
        Ok(())
    }

    /// Replaces the rows of `section` and reloads it.
    ///
    /// Returns the previous rows.
    pub fn update_models(
        &mut self,
        section: usize,
        models: Vec<ListViewModel<T>>,
    ) -> Result<Vec<ListViewModel<T>>> {
        let old = self
            .sections
            .update_models(section, models)
            .inspect_err(rejected("row update"))?;
        tracing::debug!(
            target: "recycler_list",
            section,
            count = self.sections.item_count(section),
            "replaced rows"
        );
        self.host
            .reload(Reload::section(section, RowAnimation::Fade));
        Ok(old)
    }

    /// Binds and returns the header view of `section`.
    pub fn header_view(&mut self, section: usize) -> Result<Option<&W::View>> {
        self.bind_decoration(section, Edge::Header)
            .inspect_err(rejected("header view"))
    }

    /// Binds and returns the footer view of `section`.
    pub fn footer_view(&mut self, section: usize) -> Result<Option<&W::View>> {
        self.bind_decoration(section, Edge::Footer)
            .inspect_err(rejected("footer view"))
    }

    fn bind_decoration(&mut self, index: usize, edge: Edge) -> Result<Option<&W::View>> {
        let section = self.sections.section_mut(index)?;
        let (summary, decoration) = section.split_mut(index);
        let (view, bind) = match edge {
            Edge::Header => (&mut decoration.header, self.callbacks.header_bind.as_mut()),
            Edge::Footer => (&mut decoration.footer, self.callbacks.footer_bind.as_mut()),
        };
        if let Some(bind) = bind {
            bind(summary, view.as_mut());
        }
        Ok(view.as_ref())
    }

    /// Height of the header of `section`.
    ///
    /// [`Dimension::Automatic`] when the section has no header or the header
    /// has not been sized.
    pub fn header_height(&self, section: usize) -> Result<Dimension> {
        let header = self
            .sections
            .section(section)
            .inspect_err(rejected("header height"))?
            .decoration()
            .header
            .as_ref();
        Ok(self.decoration_height(header))
    }

    /// Height of the footer of `section`.
    ///
    /// [`Dimension::Automatic`] when the section has no footer or the footer
    /// has not been sized.
    pub fn footer_height(&self, section: usize) -> Result<Dimension> {
        let footer = self
            .sections
            .section(section)
            .inspect_err(rejected("footer height"))?
            .decoration()
            .footer
            .as_ref();
        Ok(self.decoration_height(footer))
    }

    fn decoration_height(&self, view: Option<&W::View>) -> Dimension {
        view.map_or(Dimension::Automatic, |v| {
            Dimension::from_height(self.host.view_height(v))
        })
    }

    /// Whether the row at `at` is editable.
    pub fn can_edit(&self, at: IndexPath) -> Result<bool> {
        let model = self
            .sections
            .view_model(at)
            .inspect_err(rejected("can edit"))?;
        Ok(model.editable)
    }

    /// Trailing swipe actions for the row at `at`.
    pub fn swipe_actions(&mut self, at: IndexPath) -> Result<Option<W::SwipeActions>> {
        let model = self
            .sections
            .view_model(at)
            .inspect_err(rejected("swipe actions"))?;
        Ok(self
            .callbacks
            .swipe_actions
            .as_mut()
            .and_then(|actions| actions(at, model)))
    }
}

impl<W: ListHost, T, S> SectionedDataSource for ListAdapter<W, T, S> {
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
        tracing::trace!(target: "recycler_list", %at, identifier = %model.identifier, "binding cell");
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

impl<W, T, S> fmt::Debug for ListAdapter<W, T, S>
where
    W: ListHost + fmt::Debug,
    W::View: fmt::Debug,
    T: fmt::Debug,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListAdapter")
            .field("host", &self.host)
            .field("sections", &self.sections)
            .field("callbacks", &self.callbacks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use recycler_core::{AdapterError, IndexPath, Reload, RowAnimation, SectionedDataSource};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};

    use super::ListAdapter;
    use crate::{Dimension, ListBuilder, ListDecoration, ListHost, ListSection, ListViewModel};

    #[derive(Debug, Default)]
    struct Cell {
        identifier: String,
        text: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Label {
        height: f64,
        text: String,
    }

    #[derive(Debug, Default)]
    struct RecordingTable {
        registered: Vec<&'static str>,
        reloads: Vec<Reload>,
    }

    impl ListHost for RecordingTable {
        type Cell = Cell;
        type View = Label;
        type SwipeActions = Vec<&'static str>;

        fn dequeue_cell(&mut self, identifier: &str, _at: IndexPath) -> Option<Cell> {
            self.registered.contains(&identifier).then(|| Cell {
                identifier: identifier.to_string(),
                text: String::new(),
            })
        }

        fn view_height(&self, view: &Label) -> f64 {
            view.height
        }

        fn reload(&mut self, request: Reload) {
            self.reloads.push(request);
        }
    }

    type Builder = ListBuilder<RecordingTable, &'static str>;
    type Adapter = ListAdapter<RecordingTable, &'static str>;

    /// Counts `WARN` events.
    struct Warnings(Arc<AtomicUsize>);

    impl<C: tracing::Subscriber> Layer<C> for Warnings {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, C>) {
            if *event.metadata().level() == tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn table() -> RecordingTable {
        RecordingTable {
            registered: vec!["text", "detail"],
            reloads: Vec::new(),
        }
    }

    fn builder() -> Builder {
        ListBuilder::new(table())
    }

    fn row(value: &'static str) -> ListViewModel<&'static str> {
        ListViewModel::new("text", value)
    }

    fn section(name: &str, rows: &[&'static str]) -> ListSection<&'static str, Label> {
        ListSection::new(name).with_models(rows.iter().copied().map(row))
    }

    fn label(height: f64) -> Label {
        Label {
            height,
            text: String::new(),
        }
    }

    fn adapter_with(builder: Builder) -> Adapter {
        builder
            .with_sections(vec![
                section("a", &["a0", "a1"]),
                section("b", &["b0", "b1", "b2"]),
            ])
            .build()
    }

    fn values(adapter: &Adapter, section: usize) -> Vec<&'static str> {
        adapter.sections()[section]
            .models()
            .iter()
            .map(|m| m.value)
            .collect()
    }

    #[test]
    fn counts_follow_sections() {
        let adapter = adapter_with(builder());
        assert_eq!(adapter.section_count(), 2);
        assert_eq!(adapter.item_count(0), 2);
        assert_eq!(adapter.item_count(1), 3);
        assert_eq!(adapter.item_count(2), 0);
    }

    #[test]
    fn building_with_sections_does_not_reload() {
        let adapter = adapter_with(builder());
        assert!(adapter.host().reloads.is_empty());
    }

    #[test]
    fn cell_for_binds_the_addressed_model() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let mut adapter = adapter_with(builder().on_bind(move |at, model, cell| {
            cell.text = model.value.to_string();
            log.borrow_mut().push((at, model.value));
        }));

        let cell = adapter.cell_for(IndexPath::new(1, 2)).unwrap();
        assert_eq!(cell.identifier, "text");
        assert_eq!(cell.text, "b2");
        assert_eq!(*seen.borrow(), vec![(IndexPath::new(1, 2), "b2")]);
    }

    #[test]
    fn cell_for_reports_unregistered_identifiers() {
        let mut adapter = adapter_with(builder());
        adapter
            .append_models(0, [ListViewModel::new("missing", "m")])
            .unwrap();
        assert_eq!(
            adapter.cell_for(IndexPath::new(0, 2)).unwrap_err(),
            AdapterError::unregistered("missing", IndexPath::new(0, 2))
        );
    }

    #[test]
    fn did_select_matches_cell_resolution() {
        let clicks = Rc::new(RefCell::new(Vec::new()));
        let log = clicks.clone();
        let mut adapter = adapter_with(
            builder().on_click(move |at, model| log.borrow_mut().push((at, model.value))),
        );

        adapter.did_select(IndexPath::new(0, 1)).unwrap();
        assert_eq!(*clicks.borrow(), vec![(IndexPath::new(0, 1), "a1")]);
        assert!(adapter.did_select(IndexPath::new(0, 5)).is_err());
    }

    #[test]
    fn missing_callbacks_are_no_ops() {
        let mut adapter = adapter_with(builder());
        assert!(adapter.did_select(IndexPath::new(0, 0)).is_ok());
        assert_eq!(adapter.swipe_actions(IndexPath::new(0, 0)), Ok(None));
        assert_eq!(adapter.header_view(0), Ok(None));
    }

    #[test]
    fn append_models_inserts_only_new_rows() {
        let mut adapter = adapter_with(builder());
        adapter.append_models(1, [row("A"), row("B")]).unwrap();

        assert_eq!(values(&adapter, 1), ["b0", "b1", "b2", "A", "B"]);
        assert_eq!(
            adapter.host().reloads,
            vec![Reload::InsertItems {
                paths: vec![IndexPath::new(1, 3), IndexPath::new(1, 4)],
                animation: RowAnimation::Fade,
            }]
        );
    }

    #[test]
    fn empty_row_batches_do_not_reload() {
        let mut adapter = adapter_with(builder());
        adapter.append_models(0, []).unwrap();
        assert_eq!(values(&adapter, 0), ["a0", "a1"]);
        assert!(adapter.host().reloads.is_empty());
    }

    #[test]
    fn update_models_replaces_rows() {
        let mut adapter = adapter_with(builder());
        let old = adapter.update_models(0, vec![row("z"), row("y")]).unwrap();

        assert_eq!(old.len(), 2);
        assert_eq!(values(&adapter, 0), ["z", "y"]);
        assert_eq!(
            adapter.host().reloads,
            vec![Reload::section(0, RowAnimation::Fade)]
        );
    }

    #[test]
    fn each_mutation_issues_one_reload() {
        let mut adapter = adapter_with(builder());

        adapter.set_sections(vec![section("x", &["x0"])]);
        assert_eq!(adapter.host().reloads, vec![Reload::All]);

        // Returns the new total, not the appended index.
        assert_eq!(adapter.append_section(section("y", &[])), 2);
        adapter.insert_section(section("w", &[]), 0).unwrap();

        let reloads = &adapter.host().reloads;
        assert_eq!(reloads.len(), 3);
        assert_eq!(reloads[1], Reload::section(1, RowAnimation::Fade));
        assert_eq!(reloads[2], Reload::section(0, RowAnimation::Fade));
        assert_eq!(adapter.section_named("x"), Some(1));
    }

    #[test]
    fn rejected_mutations_issue_no_reload() {
        let mut adapter = adapter_with(builder());
        assert!(adapter.append_models(7, [row("q")]).is_err());
        assert!(adapter.update_models(7, Vec::new()).is_err());
        assert!(adapter.insert_section(section("q", &[]), 9).is_err());
        assert!(adapter.host().reloads.is_empty());
    }

    #[test]
    fn can_edit_reflects_the_model_flag() {
        let mut adapter = adapter_with(builder());
        adapter
            .append_models(0, [row("e").with_editable(true)])
            .unwrap();
        assert_eq!(adapter.can_edit(IndexPath::new(0, 0)), Ok(false));
        assert_eq!(adapter.can_edit(IndexPath::new(0, 2)), Ok(true));
        assert!(adapter.can_edit(IndexPath::new(4, 0)).is_err());
    }

    #[test]
    fn swipe_actions_forward_to_callback() {
        let mut adapter =
            adapter_with(builder().on_swipe_actions(|_, model| model.editable.then(|| vec!["delete"])));
        adapter
            .append_models(0, [row("e").with_editable(true)])
            .unwrap();
        assert_eq!(adapter.swipe_actions(IndexPath::new(0, 0)), Ok(None));
        assert_eq!(
            adapter.swipe_actions(IndexPath::new(0, 2)),
            Ok(Some(vec!["delete"]))
        );
    }

    #[test]
    fn header_bind_customizes_in_place() {
        let footers = Rc::new(RefCell::new(0));
        let count = footers.clone();
        let mut adapter = builder()
            .on_header_bind(|section, view| {
                if let Some(view) = view {
                    view.text = section.key.to_string();
                }
            })
            .on_footer_bind(move |_, view| {
                assert!(view.is_none());
                *count.borrow_mut() += 1;
            })
            .with_sections(vec![section("titled", &[]).with_decoration(ListDecoration {
                header: Some(label(0.0)),
                footer: None,
            })])
            .build();

        let header = adapter.header_view(0).unwrap().unwrap();
        assert_eq!(header.text, "titled");
        // The footer callback still runs for a section without a footer.
        assert_eq!(adapter.footer_view(0), Ok(None));
        assert_eq!(*footers.borrow(), 1);
        assert!(adapter.header_view(1).is_err());
    }

    #[test]
    fn section_payload_reaches_decoration_callbacks() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (headers, footers) = (seen.clone(), seen.clone());
        let mut adapter = ListBuilder::<_, &'static str, &'static str>::with_payload(table())
            .on_header_bind(move |section, _| {
                headers.borrow_mut().push(("header", section.index, section.value.copied()));
            })
            .on_footer_bind(move |section, _| {
                footers.borrow_mut().push(("footer", section.index, section.value.copied()));
            })
            .with_sections(vec![
                ListSection::new("bare"),
                ListSection::new("tagged").with_value("inbox"),
            ])
            .build();

        adapter.header_view(1).unwrap();
        adapter.footer_view(0).unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![("header", 1, Some("inbox")), ("footer", 0, None)]
        );
        assert_eq!(adapter.sections()[1].value(), Some(&"inbox"));
    }

    #[test]
    fn rejected_queries_are_logged() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(Warnings(warnings.clone()));
        let mut adapter = adapter_with(builder());
        adapter
            .append_models(0, [ListViewModel::new("missing", "m")])
            .unwrap();

        tracing::subscriber::with_default(subscriber, || {
            assert!(adapter.cell_for(IndexPath::new(0, 9)).is_err());
            assert!(adapter.cell_for(IndexPath::new(0, 2)).is_err());
            assert!(adapter.did_select(IndexPath::new(4, 0)).is_err());
            assert!(adapter.header_view(4).is_err());
            assert!(adapter.footer_height(4).is_err());
            assert!(adapter.can_edit(IndexPath::new(1, 7)).is_err());
            assert!(adapter.swipe_actions(IndexPath::new(1, 7)).is_err());
            assert!(adapter.cell_for(IndexPath::new(0, 0)).is_ok());
        });
        assert_eq!(warnings.load(Ordering::Relaxed), 7);
    }

    #[test]
    fn header_height_falls_back_to_automatic() {
        let adapter = builder()
            .with_sections(vec![
                section("none", &[]),
                section("unsized", &[]).with_decoration(ListDecoration {
                    header: Some(label(0.0)),
                    footer: Some(label(-1.0)),
                }),
                section("sized", &[]).with_decoration(ListDecoration {
                    header: Some(label(32.0)),
                    footer: Some(label(12.0)),
                }),
            ])
            .build();

        assert_eq!(adapter.header_height(0), Ok(Dimension::Automatic));
        assert_eq!(adapter.header_height(1), Ok(Dimension::Automatic));
        assert_eq!(adapter.footer_height(1), Ok(Dimension::Automatic));
        assert_eq!(adapter.header_height(2), Ok(Dimension::Points(32.0)));
        assert_eq!(adapter.footer_height(2), Ok(Dimension::Points(12.0)));
        assert!(adapter.footer_height(3).is_err());
    }
}
