//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use findpad::io::{FsContentProvider, FsPersistenceSink};
use findpad::messages::{Msg, SearchMsg, TabMsg};
use findpad::model::{AppModel, Document};
use findpad::runtime::App;
use findpad::search::{compile, MatchMode, Query};
use findpad::update::update;

/// Create a model with one in-memory document per entry, the last one active
pub fn test_model(texts: &[&str]) -> AppModel {
    let mut model = AppModel::default();
    for (i, text) in texts.iter().enumerate() {
        let mut doc = Document::with_text(text);
        doc.untitled_name = Some(format!("doc{}", i + 1));
        model.tabs.insert(doc);
    }
    model
}

/// Compile a query, panicking on invalid input
pub fn query(keyword: &str, case_sensitive: bool, exact: bool) -> Query {
    compile(keyword, case_sensitive, MatchMode::from_exact(exact)).unwrap()
}

/// Apply a sequence of messages directly through `update`
pub fn apply(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        update(model, msg);
    }
}

pub fn search(msg: SearchMsg) -> Msg {
    Msg::Search(msg)
}

pub fn set_query(keyword: &str) -> Msg {
    Msg::Search(SearchMsg::SetQuery(keyword.to_string()))
}

pub fn set_replacement(text: &str) -> Msg {
    Msg::Search(SearchMsg::SetReplacement(text.to_string()))
}

/// Current selection of the active document as a tuple
pub fn selection(model: &AppModel) -> Option<(usize, usize)> {
    model
        .active_document()
        .and_then(|doc| doc.selection)
        .map(|s| (s.start, s.end))
}

/// Text of the active document
pub fn active_text(model: &AppModel) -> String {
    model
        .active_document()
        .map(|doc| doc.text())
        .unwrap_or_default()
}

/// Runtime over the real filesystem
pub fn fs_app() -> App<FsContentProvider, FsPersistenceSink> {
    App::new(
        AppModel::default(),
        FsContentProvider::default(),
        FsPersistenceSink,
    )
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn open(path: &Path) -> Msg {
    Msg::Tab(TabMsg::Open(path.to_path_buf()))
}
