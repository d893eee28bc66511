// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recycler demo: drives a list adapter and a grid adapter through in-memory
//! host widgets and prints what each host is asked to do.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p recycler_demos --example recycler_demo`

use kurbo::Size;
use recycler::{
    FlowLayout, GridDecoration, GridHost, GridSection, GridViewModel, IndexPath, ListDecoration,
    ListHost, ListSection, ListViewModel, Recycler, Reload, ScrollDirection, SectionedDataSource,
    SupplementaryKind,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Contact {
    name: &'static str,
    starred: bool,
}

/// A table with two registered cell identifiers that prints every reload.
#[derive(Debug, Default)]
struct ConsoleTable;

impl ListHost for ConsoleTable {
    type Cell = String;
    type View = (String, f64);
    type SwipeActions = Vec<&'static str>;

    fn dequeue_cell(&mut self, identifier: &str, _at: IndexPath) -> Option<String> {
        matches!(identifier, "contact" | "starred").then(String::new)
    }

    fn view_height(&self, view: &(String, f64)) -> f64 {
        view.1
    }

    fn reload(&mut self, request: Reload) {
        println!("table reload: {request:?}");
    }
}

#[derive(Debug)]
struct ConsoleGrid {
    bounds: Size,
}

impl GridHost for ConsoleGrid {
    type Cell = String;
    type View = Option<String>;
    type Layout = FlowLayout;

    fn bounds(&self) -> Size {
        self.bounds
    }

    fn register_cell(&mut self, identifier: &str) {
        println!("grid registered `{identifier}`");
    }

    fn dequeue_cell(&mut self, _identifier: &str, _at: IndexPath) -> Option<String> {
        Some(String::new())
    }

    fn dequeue_supplementary(
        &mut self,
        _kind: &SupplementaryKind,
        identifier: &str,
        _at: IndexPath,
    ) -> Option<Option<String>> {
        Some(Some(identifier.to_owned()))
    }

    fn placeholder_view(&mut self) -> Option<String> {
        None
    }

    fn set_layout(&mut self, layout: FlowLayout) {
        println!("grid layout: {layout:?}");
    }

    fn reload(&mut self, request: Reload) {
        println!("grid reload: {request:?}");
    }
}

fn list_demo() {
    let mut contacts = Recycler::list(ConsoleTable)
        .on_bind(|at, model: &ListViewModel<Contact>, cell| {
            *cell = format!("{at} {}", model.value.name);
        })
        .on_click(|at, model| println!("selected {} at {at}", model.value.name))
        .on_header_bind(|section, view| {
            if let Some((title, _)) = view {
                *title = format!("{} ({})", section.key, section.len);
            }
        })
        .on_swipe_actions(|_, model| model.editable.then(|| vec!["delete", "archive"]))
        .build();

    let header = ListDecoration {
        header: Some((String::new(), 28.0)),
        footer: None,
    };
    contacts.set_sections(vec![ListSection::new("friends").with_decoration(header)]);
    let contact = |name: &'static str, starred: bool| {
        let identifier = if starred { "starred" } else { "contact" };
        ListViewModel::new(identifier, Contact { name, starred }).with_editable(!starred)
    };
    contacts
        .append_models(0, [contact("Ada", true), contact("Grace", false)])
        .expect("section 0 exists");

    for item in 0..contacts.item_count(0) {
        let at = IndexPath::new(0, item);
        let cell = contacts.cell_for(at).expect("cell types are registered");
        let starred = contacts.view_model(at).map(|m| m.value.starred);
        println!(
            "cell {cell:?} starred={starred:?} swipe={:?}",
            contacts.swipe_actions(at)
        );
    }
    println!("header {:?}", contacts.header_view(0));
    println!("header height {:?}", contacts.header_height(0));
    contacts.did_select(IndexPath::new(0, 1)).expect("row exists");
    println!("new section count {}", contacts.append_section(ListSection::new("family")));
}

fn grid_demo() {
    let mut gallery = Recycler::grid(ConsoleGrid {
        bounds: Size::new(360.0, 640.0),
    })
    .with_flow_layout(3.0, ScrollDirection::Vertical)
    .on_bind(|_, model: &GridViewModel<&'static str>, cell| *cell = model.value.to_owned())
    .build();

    gallery.set_sections(vec![
        GridSection::new("photos")
            .with_decoration(GridDecoration::header("title", 40.0))
            .with_models([
                GridViewModel::new("photo", "wide").with_span_count(2.0).with_aspect_ratio(2.0),
                GridViewModel::new("photo", "square"),
            ]),
    ]);
    gallery
        .append_models(0, [GridViewModel::new("photo", "tall").with_aspect_ratio(0.5)])
        .expect("section 0 exists");

    for item in 0..gallery.item_count(0) {
        let at = IndexPath::new(0, item);
        println!(
            "{:?} -> {:?}",
            gallery.cell_for(at),
            gallery.item_size(at)
        );
    }
    println!(
        "header {:?} sized {:?}",
        gallery.supplementary_view(IndexPath::new(0, 0), &SupplementaryKind::Header),
        gallery.header_size(0)
    );
    println!(
        "footer {:?} sized {:?}",
        gallery.supplementary_view(IndexPath::new(0, 0), &SupplementaryKind::Footer),
        gallery.footer_size(0)
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    list_demo();
    grid_demo();
}
