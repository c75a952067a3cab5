//! Tab registry - open documents, their order, and which one is active
//!
//! The registry is the single source of truth for the active document. Every
//! search/replace entry point resolves its target through [`TabRegistry::active`];
//! focus changes reset the per-focus [`SearchContext`].

use std::collections::HashMap;
use std::path::Path;

use super::document::Document;
use crate::error::SearchError;
use crate::search::SearchContext;

/// Unique identifier for an open tab (one document per tab)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub u64);

/// Maps tab ids to documents and tracks the active tab
#[derive(Debug, Clone)]
pub struct TabRegistry {
    documents: HashMap<TabId, Document>,
    /// Open order, used for display and for picking a neighbour on close
    order: Vec<TabId>,
    active: Option<TabId>,
    /// Search cursor, highlights and line results for the active document
    pub search: SearchContext,
    next_tab_id: u64,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
            order: Vec::new(),
            active: None,
            search: SearchContext::default(),
            next_tab_id: 1,
        }
    }

    /// Generate a new tab ID
    fn next_tab_id(&mut self) -> TabId {
        let id = TabId(self.next_tab_id);
        self.next_tab_id += 1;
        id
    }

    /// Open a tab from a document factory and make it active.
    ///
    /// The factory is the content-provider boundary: if it fails, the
    /// registry is unchanged and the failure is returned as-is.
    pub fn open<F, E>(&mut self, factory: F) -> Result<TabId, E>
    where
        F: FnOnce() -> Result<Document, E>,
    {
        let document = factory()?;
        Ok(self.insert(document))
    }

    /// Add an already-built document as a new active tab
    pub fn insert(&mut self, mut document: Document) -> TabId {
        let id = self.next_tab_id();
        document.id = Some(id);
        tracing::info!(tab = id.0, name = %document.display_name(), "opened document");
        self.documents.insert(id, document);
        self.order.push(id);
        self.set_active(id);
        id
    }

    /// Close a tab. Closing the active tab activates its right neighbour (or
    /// left, if it was last); closing the last tab leaves nothing active.
    ///
    /// Returns the closed document, or None if the id was unknown.
    pub fn close(&mut self, id: TabId) -> Option<Document> {
        let index = self.order.iter().position(|t| *t == id)?;
        self.order.remove(index);
        let document = self.documents.remove(&id);

        if self.active == Some(id) {
            self.active = None;
            self.search.reset();
            let neighbour = self
                .order
                .get(index)
                .or_else(|| index.checked_sub(1).and_then(|i| self.order.get(i)))
                .copied();
            if let Some(next) = neighbour {
                self.set_active(next);
            }
        }

        tracing::info!(tab = id.0, remaining = self.order.len(), "closed document");
        document
    }

    /// Focus a tab. Always resets the search context so highlights from a
    /// previously active document are never shown.
    ///
    /// Returns false if the id is unknown.
    pub fn set_active(&mut self, id: TabId) -> bool {
        if !self.documents.contains_key(&id) {
            return false;
        }
        if self.active != Some(id) {
            tracing::debug!(from = ?self.active.map(|t| t.0), to = id.0, "tab switched");
        }
        self.active = Some(id);
        self.search.reset();
        true
    }

    /// The active tab's id
    pub fn active_id(&self) -> Option<TabId> {
        self.active
    }

    /// The active document, if any
    pub fn active(&self) -> Option<&Document> {
        self.active.and_then(|id| self.documents.get(&id))
    }

    /// The active document mutably
    pub fn active_mut(&mut self) -> Option<&mut Document> {
        let id = self.active?;
        self.documents.get_mut(&id)
    }

    /// The active document, or `NoActiveDocument`
    pub fn require_active(&self) -> Result<&Document, SearchError> {
        self.active().ok_or(SearchError::NoActiveDocument)
    }

    /// The active document mutably together with the search context, or
    /// `NoActiveDocument`
    pub fn require_active_mut(
        &mut self,
    ) -> Result<(&mut Document, &mut SearchContext), SearchError> {
        let id = self.active.ok_or(SearchError::NoActiveDocument)?;
        let document = self
            .documents
            .get_mut(&id)
            .ok_or(SearchError::NoActiveDocument)?;
        Ok((document, &mut self.search))
    }

    pub fn get(&self, id: TabId) -> Option<&Document> {
        self.documents.get(&id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Document> {
        self.documents.get_mut(&id)
    }

    /// Tab ids in open order
    pub fn tab_ids(&self) -> &[TabId] {
        &self.order
    }

    /// Documents in open order
    pub fn iter(&self) -> impl Iterator<Item = (TabId, &Document)> {
        self.order
            .iter()
            .filter_map(|id| self.documents.get(id).map(|doc| (*id, doc)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Find the tab holding `path`, comparing canonical paths when possible
    pub fn find_open_file(&self, path: &Path) -> Option<TabId> {
        let canonical = path.canonicalize().ok();
        self.iter()
            .find(|(_, doc)| {
                doc.file_path.as_deref().is_some_and(|doc_path| {
                    match (&canonical, doc_path.canonicalize().ok()) {
                        (Some(a), Some(b)) => *a == b,
                        _ => doc_path == path,
                    }
                })
            })
            .map(|(id, _)| id)
    }

    /// Activate the tab `offset` positions away from the active one, wrapping
    pub fn cycle_active(&mut self, offset: isize) -> Option<TabId> {
        let len = self.order.len() as isize;
        if len == 0 {
            return None;
        }
        let current = self
            .active
            .and_then(|id| self.order.iter().position(|t| *t == id))
            .unwrap_or(0) as isize;
        let next = self.order[(current + offset).rem_euclid(len) as usize];
        self.set_active(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{compile, MatchMode};
    use std::path::PathBuf;

    fn registry_with(texts: &[&str]) -> (TabRegistry, Vec<TabId>) {
        let mut registry = TabRegistry::new();
        let ids = texts
            .iter()
            .map(|t| registry.insert(Document::with_text(t)))
            .collect();
        (registry, ids)
    }

    #[test]
    fn test_new_registry_has_no_active() {
        let registry = TabRegistry::new();
        assert!(registry.active().is_none());
        assert_eq!(
            registry.require_active().unwrap_err(),
            SearchError::NoActiveDocument
        );
    }

    #[test]
    fn test_open_activates_new_tab() {
        let (registry, ids) = registry_with(&["one", "two"]);
        assert_eq!(registry.active_id(), Some(ids[1]));
        assert_eq!(registry.active().unwrap().text(), "two");
        assert_eq!(registry.active().unwrap().id, Some(ids[1]));
    }

    #[test]
    fn test_open_factory_failure_leaves_registry_unchanged() {
        let mut registry = TabRegistry::new();
        let result: Result<TabId, String> = registry.open(|| Err("permission denied".to_string()));
        assert_eq!(result.unwrap_err(), "permission denied");
        assert!(registry.is_empty());
        assert!(registry.active().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let (_, ids) = registry_with(&["a", "b", "c"]);
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
    }

    #[test]
    fn test_set_active_resets_search_context() {
        let (mut registry, ids) = registry_with(&["cat cat", "dog"]);
        registry.set_active(ids[0]);
        let q = compile("cat", false, MatchMode::Fuzzy).unwrap();
        let (doc, search) = registry.require_active_mut().unwrap();
        search.overlay.refresh(doc, &q);
        search.last_search_pos = 7;
        assert_eq!(registry.search.overlay.len(), 2);

        assert!(registry.set_active(ids[1]));
        assert!(registry.search.overlay.is_empty());
        assert_eq!(registry.search.last_search_pos, 0);
    }

    #[test]
    fn test_set_active_unknown_id() {
        let (mut registry, ids) = registry_with(&["a"]);
        assert!(!registry.set_active(TabId(999)));
        assert_eq!(registry.active_id(), Some(ids[0]));
    }

    #[test]
    fn test_close_last_tab_disables_active() {
        let (mut registry, ids) = registry_with(&["only"]);
        let closed = registry.close(ids[0]).unwrap();
        assert_eq!(closed.text(), "only");
        assert!(registry.active().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_close_active_moves_to_neighbour() {
        let (mut registry, ids) = registry_with(&["a", "b", "c"]);
        registry.set_active(ids[1]);
        registry.close(ids[1]);
        assert_eq!(registry.active_id(), Some(ids[2]));

        registry.close(ids[2]);
        assert_eq!(registry.active_id(), Some(ids[0]));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let (mut registry, ids) = registry_with(&["a", "b"]);
        registry.search.last_search_pos = 1;
        registry.close(ids[0]);
        assert_eq!(registry.active_id(), Some(ids[1]));
        assert_eq!(registry.search.last_search_pos, 1);
    }

    #[test]
    fn test_close_unknown_is_none() {
        let (mut registry, _) = registry_with(&["a"]);
        assert!(registry.close(TabId(42)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_iter_in_open_order() {
        let (registry, _) = registry_with(&["first", "second", "third"]);
        let texts: Vec<String> = registry.iter().map(|(_, d)| d.text()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_cycle_active_wraps() {
        let (mut registry, ids) = registry_with(&["a", "b", "c"]);
        assert_eq!(registry.cycle_active(1), Some(ids[0]));
        assert_eq!(registry.cycle_active(-1), Some(ids[2]));
    }

    #[test]
    fn test_find_open_file_without_disk() {
        let mut registry = TabRegistry::new();
        let id = registry.insert(Document::from_content(
            PathBuf::from("/nonexistent/findpad/a.conf"),
            "",
        ));
        assert_eq!(
            registry.find_open_file(Path::new("/nonexistent/findpad/a.conf")),
            Some(id)
        );
        assert_eq!(
            registry.find_open_file(Path::new("/nonexistent/findpad/b.conf")),
            None
        );
    }

    #[test]
    fn test_documents_have_independent_history() {
        let (mut registry, ids) = registry_with(&["x", "y"]);
        registry
            .get_mut(ids[0])
            .unwrap()
            .replace_range(0, 1, "z")
            .unwrap();
        assert!(registry.get(ids[0]).unwrap().can_undo());
        assert!(!registry.get(ids[1]).unwrap().can_undo());
    }
}
