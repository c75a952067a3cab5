//! Document message handlers (undo/redo, cursor movement, save)

use crate::commands::Cmd;
use crate::error::SearchError;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

use super::search::refresh_highlights;

/// Handle document messages
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    if model.tabs.active().is_none() {
        model.ui.report(&SearchError::NoActiveDocument);
        return Some(Cmd::Redraw);
    }

    match msg {
        DocumentMsg::Undo => apply_history_step(model, true),
        DocumentMsg::Redo => apply_history_step(model, false),

        DocumentMsg::GotoLine(line) => {
            let Ok((doc, search)) = model.tabs.require_active_mut() else {
                return None;
            };
            let line_idx = line.saturating_sub(1).min(doc.line_count().saturating_sub(1));
            let offset = doc.cursor_to_offset(line_idx, 0);
            doc.set_cursor(offset);
            search.last_search_pos = offset;
            Some(Cmd::Redraw)
        }

        DocumentMsg::SetCursor(offset) => {
            let Ok((doc, search)) = model.tabs.require_active_mut() else {
                return None;
            };
            doc.set_cursor(offset);
            search.last_search_pos = doc.cursor;
            Some(Cmd::Redraw)
        }

        DocumentMsg::Save => {
            let (tab, path, content) = {
                let Some(doc) = model.tabs.active() else {
                    return None;
                };
                (doc.id, doc.file_path.clone(), doc.text())
            };
            match (tab, path) {
                (Some(tab), Some(path)) => {
                    model.ui.is_saving = true;
                    model.ui.set_status("Saving...");
                    Some(Cmd::SaveFile { tab, path, content })
                }
                _ => {
                    model.ui.set_status("No file path - cannot save");
                    Some(Cmd::Redraw)
                }
            }
        }
    }
}

fn apply_history_step(model: &mut AppModel, undo: bool) -> Option<Cmd> {
    let doc = model.tabs.active_mut()?;
    let result = if undo { doc.undo() } else { doc.redo() };
    let label = if undo { "undo" } else { "redo" };

    match result {
        Ok(true) => {
            model.tabs.search.last_search_pos = 0;
            refresh_highlights(model);
            model.ui.set_status(if undo { "Undone" } else { "Redone" });
        }
        Ok(false) => {
            model.ui.set_status(format!("Nothing to {}", label));
        }
        Err(e) => {
            tracing::warn!(error = %e, "{} failed", label);
            model.ui.report(&SearchError::from(e));
        }
    }
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::SearchMsg;
    use crate::model::Document;
    use crate::update::update_search;
    use std::path::PathBuf;

    fn model_with(text: &str) -> AppModel {
        let mut model = AppModel::default();
        model.tabs.insert(Document::with_text(text));
        model
    }

    #[test]
    fn test_undo_replace_all_restores_text_and_highlights() {
        let mut model = model_with("cat cat");
        update_search(&mut model, SearchMsg::SetQuery("cat".to_string()));
        update_search(&mut model, SearchMsg::SetReplacement("dog".to_string()));
        update_search(&mut model, SearchMsg::ReplaceAll);
        assert!(model.tabs.search.overlay.is_empty());

        update_document(&mut model, DocumentMsg::Undo);
        assert_eq!(model.active_document().unwrap().text(), "cat cat");
        assert_eq!(model.tabs.search.overlay.len(), 2);

        update_document(&mut model, DocumentMsg::Redo);
        assert_eq!(model.active_document().unwrap().text(), "dog dog");
        assert!(model.tabs.search.overlay.is_empty());
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut model = model_with("abc");
        update_document(&mut model, DocumentMsg::Undo);
        assert_eq!(model.ui.status_message, "Nothing to undo");
    }

    #[test]
    fn test_goto_line_clamps() {
        let mut model = model_with("one\ntwo\nthree");
        update_document(&mut model, DocumentMsg::GotoLine(2));
        assert_eq!(model.active_document().unwrap().cursor, 4);
        assert_eq!(model.tabs.search.last_search_pos, 4);

        update_document(&mut model, DocumentMsg::GotoLine(99));
        assert_eq!(model.active_document().unwrap().cursor, 8);

        update_document(&mut model, DocumentMsg::GotoLine(0));
        assert_eq!(model.active_document().unwrap().cursor, 0);
    }

    #[test]
    fn test_set_cursor_moves_search_origin() {
        let mut model = model_with("cat dog cat");
        update_document(&mut model, DocumentMsg::SetCursor(5));
        update_search(&mut model, SearchMsg::SetQuery("cat".to_string()));
        update_search(&mut model, SearchMsg::FindNext);
        let selection = model.active_document().unwrap().selection.unwrap();
        assert_eq!((selection.start, selection.end), (8, 11));
    }

    #[test]
    fn test_save_without_path() {
        let mut model = model_with("abc");
        let cmd = update_document(&mut model, DocumentMsg::Save);
        assert_eq!(cmd, Some(Cmd::Redraw));
        assert_eq!(model.ui.status_message, "No file path - cannot save");
    }

    #[test]
    fn test_save_with_path_emits_command() {
        let mut model = AppModel::default();
        let id = model
            .tabs
            .insert(Document::from_content(PathBuf::from("/tmp/a.txt"), "abc"));
        let cmd = update_document(&mut model, DocumentMsg::Save);
        assert_eq!(
            cmd,
            Some(Cmd::SaveFile {
                tab: id,
                path: PathBuf::from("/tmp/a.txt"),
                content: "abc".to_string(),
            })
        );
        assert!(model.ui.is_saving);
    }

    #[test]
    fn test_document_messages_need_active_document() {
        let mut model = AppModel::default();
        update_document(&mut model, DocumentMsg::Undo);
        assert_eq!(model.ui.status_message, "No file is open");
    }
}
