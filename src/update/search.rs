//! Search panel message handlers (find, navigate, replace)

use crate::commands::Cmd;
use crate::error::SearchError;
use crate::messages::SearchMsg;
use crate::model::{AppModel, Selection};
use crate::search::{
    find_all, find_next, find_previous, first_match_on_line, line_hits, replace_all, replace_one,
    Query,
};

/// Handle search panel messages
pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    match msg {
        SearchMsg::SetQuery(query) => {
            model.ui.find_replace.query = query;
            refresh_highlights(model);
        }
        SearchMsg::SetReplacement(text) => {
            model.ui.find_replace.replacement = text;
        }
        SearchMsg::SetCaseSensitive(enabled) => {
            model.ui.find_replace.case_sensitive = enabled;
            refresh_highlights(model);
        }
        SearchMsg::SetMatchMode(mode) => {
            model.ui.find_replace.match_mode = mode;
            refresh_highlights(model);
        }
        SearchMsg::SetWrapSearch(enabled) => {
            model.ui.find_replace.wrap_search = enabled;
        }

        SearchMsg::FindNext => {
            if let Err(e) = find_in_direction(model, true) {
                model.ui.report(&e);
            }
        }
        SearchMsg::FindPrevious => {
            if let Err(e) = find_in_direction(model, false) {
                model.ui.report(&e);
            }
        }
        SearchMsg::FindAll => {
            if let Err(e) = list_results(model) {
                model.ui.report(&e);
            }
        }
        SearchMsg::JumpToResult(line) => jump_to_result(model, line),

        SearchMsg::ReplaceOne => {
            if let Err(e) = replace_next(model) {
                model.ui.report(&e);
            }
        }
        SearchMsg::ReplaceAll => {
            if let Err(e) = replace_every(model) {
                model.ui.report(&e);
            }
        }

        SearchMsg::RefreshHighlights => refresh_highlights(model),
        SearchMsg::ClearHighlights => model.tabs.search.overlay.clear(),
    }
    Some(Cmd::Redraw)
}

/// Active document check first, then query compilation; nothing is scanned
/// unless both succeed.
fn prepare(model: &AppModel) -> Result<Query, SearchError> {
    model.tabs.require_active()?;
    model.ui.find_replace.compile()
}

fn find_in_direction(model: &mut AppModel, forward: bool) -> Result<(), SearchError> {
    let query = prepare(model)?;
    let wrap = model.ui.find_replace.wrap_search;
    let (doc, search) = model.tabs.require_active_mut()?;
    let from = search.last_search_pos;

    let found = if forward {
        find_next(doc, &query, from, wrap)
    } else {
        find_previous(doc, &query, from, wrap)
    };

    match found {
        Some(m) => {
            doc.select(Selection::from(m));
            search.last_search_pos = if forward { m.end } else { m.start };
            search.overlay.refresh(doc, &query);
            let (line, column) = doc.offset_to_cursor(m.start);
            model.ui.set_status(format!(
                "Found '{}' at Line {}, Col {}",
                query.keyword(),
                line + 1,
                column + 1
            ));
            Ok(())
        }
        None if !wrap && !find_all(doc, &query).is_empty() => {
            tracing::debug!(keyword = query.keyword(), forward, "no more matches");
            model
                .ui
                .set_status(format!("No more '{}' found", query.keyword()));
            Ok(())
        }
        None => {
            tracing::debug!(keyword = query.keyword(), "keyword not found");
            Err(SearchError::NotFound {
                keyword: query.keyword().to_string(),
            })
        }
    }
}

fn list_results(model: &mut AppModel) -> Result<(), SearchError> {
    let query = prepare(model)?;
    let (doc, search) = model.tabs.require_active_mut()?;

    search.results = line_hits(doc, &query);
    search.overlay.refresh(doc, &query);
    if search.results.is_empty() {
        return Err(SearchError::NotFound {
            keyword: query.keyword().to_string(),
        });
    }

    let lines = search.results.len();
    let matches = search.overlay.len();
    model.ui.set_status(format!(
        "Found {} matches on {} lines",
        matches, lines
    ));
    Ok(())
}

fn jump_to_result(model: &mut AppModel, line: usize) {
    let query = model.ui.find_replace.compile().ok();
    let Ok((doc, search)) = model.tabs.require_active_mut() else {
        model.ui.report(&SearchError::NoActiveDocument);
        return;
    };

    let line_idx = line.saturating_sub(1).min(doc.line_count().saturating_sub(1));
    let line_start = doc.cursor_to_offset(line_idx, 0);
    match query.and_then(|q| first_match_on_line(doc, &q, line_idx + 1)) {
        Some(m) => {
            doc.select(Selection::from(m));
            search.last_search_pos = m.end;
        }
        None => {
            doc.set_cursor(line_start);
            search.last_search_pos = line_start;
        }
    }
    model.ui.set_status(format!("Line {}", line_idx + 1));
}

fn replace_next(model: &mut AppModel) -> Result<(), SearchError> {
    let query = prepare(model)?;
    let replacement = model.ui.find_replace.replacement.clone();
    let (doc, search) = model.tabs.require_active_mut()?;

    let outcome = replace_one(doc, &query, &replacement)?;
    search.last_search_pos = outcome.next_cursor;
    search.overlay.refresh(doc, &query);

    let status = match outcome.next_match {
        Some(_) => format!("Replaced 1 match of '{}'", query.keyword()),
        None => format!("Replaced 1 match, no more '{}' found", query.keyword()),
    };
    model.ui.set_status(status);
    Ok(())
}

fn replace_every(model: &mut AppModel) -> Result<(), SearchError> {
    let query = prepare(model)?;
    let replacement = model.ui.find_replace.replacement.clone();
    let (doc, search) = model.tabs.require_active_mut()?;

    let count = replace_all(doc, &query, &replacement)?;
    search.last_search_pos = 0;
    search.overlay.refresh(doc, &query);
    search.results = line_hits(doc, &query);

    if count == 0 {
        return Err(SearchError::NotFound {
            keyword: query.keyword().to_string(),
        });
    }
    model.ui.set_status(format!("Replaced {} matches", count));
    Ok(())
}

/// Recompute highlights for the active document from the panel inputs.
///
/// An empty keyword or a missing document clears the overlay.
pub(crate) fn refresh_highlights(model: &mut AppModel) {
    let query = model.ui.find_replace.compile();
    let Ok((doc, search)) = model.tabs.require_active_mut() else {
        model.tabs.search.overlay.clear();
        return;
    };
    match query {
        Ok(query) => {
            search.overlay.refresh(doc, &query);
        }
        Err(_) => search.overlay.clear(),
    }
}
