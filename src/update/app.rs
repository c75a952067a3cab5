//! App message handlers (side-effect completions)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Document};
use crate::util::filename_for_display;

use super::search::refresh_highlights;

/// Handle results delivered back by the runtime
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            match result {
                Ok(content) => {
                    let doc = Document::from_content(path.clone(), &content)
                        .with_history_limit(model.config.history_limit);
                    model.tabs.insert(doc);
                    refresh_highlights(model);
                    model.ui.set_status(format!("Loaded: {}", path.display()));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to open file");
                    model
                        .ui
                        .set_status(e.user_message(&filename_for_display(&path)));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::SaveCompleted { tab, result } => {
            model.ui.is_saving = false;
            match result {
                Ok(()) => {
                    // The tab may have been closed while the write was in flight
                    if let Some(doc) = model.tabs.get_mut(tab) {
                        doc.mark_saved();
                        let name = doc
                            .file_path
                            .as_ref()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| doc.display_name());
                        tracing::info!(tab = tab.0, path = %name, "saved document");
                        model.ui.set_status(format!("Saved: {}", name));
                    }
                }
                Err(e) => {
                    tracing::error!(tab = tab.0, error = %e, "save failed");
                    model.ui.set_status(format!("Error: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }
    }
}
