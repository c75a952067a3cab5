//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod search;
mod tabs;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use search::update_search;
pub use tabs::update_tabs;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Search(m) => search::update_search(model, m),
        Msg::Tab(m) => tabs::update_tabs(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs each message and any change to the active tab or search position.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = (model.tabs.active_id(), model.tabs.search.last_search_pos);
    let result = update_inner(model, msg);
    let after = (model.tabs.active_id(), model.tabs.search.last_search_pos);

    if before != after {
        debug!(
            target: "search",
            tab = ?after.0.map(|t| t.0),
            last_search_pos = after.1,
            "search state changed"
        );
    }
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Search::FindNext`
/// - `Tab::Activate(TabId(2))`
/// - `Document::GotoLine(10)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Search(m) => format!("Search::{:?}", m),
        Msg::Tab(m) => format!("Tab::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        // File content can be large; log the variant only
        Msg::App(crate::messages::AppMsg::FileLoaded { path, .. }) => {
            format!("App::FileLoaded({})", path.display())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}
