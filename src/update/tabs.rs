//! Tab lifecycle handlers (open, focus, close)

use crate::commands::Cmd;
use crate::messages::TabMsg;
use crate::model::{AppModel, Document};

use super::search::refresh_highlights;

/// Handle tab messages
pub fn update_tabs(model: &mut AppModel, msg: TabMsg) -> Option<Cmd> {
    match msg {
        TabMsg::Open(path) => {
            if let Some(existing) = model.tabs.find_open_file(&path) {
                model.tabs.set_active(existing);
                refresh_highlights(model);
                model
                    .ui
                    .set_status(format!("Switched to: {}", path.display()));
                return Some(Cmd::Redraw);
            }
            model.ui.is_loading = true;
            model.ui.set_status("Loading...");
            Some(Cmd::LoadFile { path })
        }

        TabMsg::OpenText { name, content } => {
            let mut doc =
                Document::with_text(&content).with_history_limit(model.config.history_limit);
            doc.untitled_name = Some(name);
            model.tabs.insert(doc);
            refresh_highlights(model);
            Some(Cmd::Redraw)
        }

        TabMsg::Activate(id) => {
            if model.tabs.set_active(id) {
                refresh_highlights(model);
            }
            Some(Cmd::Redraw)
        }

        TabMsg::Close(id) => {
            close_tab(model, id);
            Some(Cmd::Redraw)
        }

        TabMsg::CloseActive => {
            match model.tabs.active_id() {
                Some(id) => close_tab(model, id),
                None => model.ui.set_status("No file is open"),
            }
            Some(Cmd::Redraw)
        }

        TabMsg::Next => {
            if model.tabs.cycle_active(1).is_some() {
                refresh_highlights(model);
            }
            Some(Cmd::Redraw)
        }

        TabMsg::Prev => {
            if model.tabs.cycle_active(-1).is_some() {
                refresh_highlights(model);
            }
            Some(Cmd::Redraw)
        }
    }
}

fn close_tab(model: &mut AppModel, id: crate::model::TabId) {
    let Some(doc) = model.tabs.close(id) else {
        return;
    };
    if doc.is_modified {
        tracing::warn!(tab = id.0, name = %doc.display_name(), "closed with unsaved changes");
    }
    model.ui.set_status(format!("Closed: {}", doc.display_name()));
    refresh_highlights(model);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::SearchMsg;
    use crate::update::update_search;

    fn open_text(model: &mut AppModel, name: &str, content: &str) {
        update_tabs(
            model,
            TabMsg::OpenText {
                name: name.to_string(),
                content: content.to_string(),
            },
        );
    }

    #[test]
    fn test_open_text_activates_new_tab() {
        let mut model = AppModel::default();
        open_text(&mut model, "a", "alpha");
        open_text(&mut model, "b", "beta");
        assert_eq!(model.tabs.len(), 2);
        assert_eq!(model.active_document().unwrap().display_name(), "b");
    }

    #[test]
    fn test_activate_recomputes_highlights_for_new_tab() {
        let mut model = AppModel::default();
        open_text(&mut model, "a", "cat cat cat");
        let first = model.tabs.active_id().unwrap();
        open_text(&mut model, "b", "cat");
        update_search(&mut model, SearchMsg::SetQuery("cat".to_string()));
        assert_eq!(model.tabs.search.overlay.len(), 1);

        update_tabs(&mut model, TabMsg::Activate(first));
        assert_eq!(model.tabs.search.overlay.len(), 3);
        assert_eq!(model.tabs.search.last_search_pos, 0);
    }

    #[test]
    fn test_close_active_falls_back_to_neighbour() {
        let mut model = AppModel::default();
        open_text(&mut model, "a", "one");
        open_text(&mut model, "b", "two");
        update_tabs(&mut model, TabMsg::CloseActive);
        assert_eq!(model.active_document().unwrap().display_name(), "a");
        assert_eq!(model.ui.status_message, "Closed: b");

        update_tabs(&mut model, TabMsg::CloseActive);
        assert!(model.active_document().is_none());
        assert_eq!(model.status_line(), "Ready");

        update_tabs(&mut model, TabMsg::CloseActive);
        assert_eq!(model.ui.status_message, "No file is open");
    }

    #[test]
    fn test_next_and_prev_cycle() {
        let mut model = AppModel::default();
        open_text(&mut model, "a", "");
        open_text(&mut model, "b", "");
        open_text(&mut model, "c", "");

        update_tabs(&mut model, TabMsg::Next);
        assert_eq!(model.active_document().unwrap().display_name(), "a");
        update_tabs(&mut model, TabMsg::Prev);
        assert_eq!(model.active_document().unwrap().display_name(), "c");
    }

    #[test]
    fn test_open_unknown_path_requests_load() {
        let mut model = AppModel::default();
        let cmd = update_tabs(&mut model, TabMsg::Open("/tmp/findpad-missing.txt".into()));
        assert!(matches!(cmd, Some(Cmd::LoadFile { .. })));
        assert!(model.ui.is_loading);
    }
}
