//! # Editor Store
//!
//! Single authoritative owner of a site's pages, the editing session
//! pointers, and the undo/redo history. Collaborators read trees through
//! the accessors and mutate them only through the operations here.
//!
//! The store is an explicitly constructed value with no global ambient
//! state: create one per open site and pass it by reference to whatever
//! needs it.

use crate::history::History;
use crate::mutations::{ComponentPatch, Mutation, MutationOutcome};
use pagecraft_dom::{model, registry, Component, IdGenerator, Page, PageDocument};
use serde::{Deserialize, Serialize};

/// Viewport the canvas renders at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

#[derive(Debug, Clone)]
pub struct EditorStore {
    pages: Vec<Page>,
    current_page_id: Option<String>,
    selected_component_id: Option<String>,
    view_mode: ViewMode,
    is_dragging: bool,
    history: History,
    ids: IdGenerator,
}

impl EditorStore {
    /// Create a store for a site, seeded with a default "Home" page.
    ///
    /// No page is active until the host selects one.
    pub fn new(site_id: &str) -> Self {
        let mut ids = IdGenerator::new(site_id);
        let pages = vec![Page {
            id: ids.new_id(),
            name: "Home".to_string(),
            slug: "home".to_string(),
            components: Vec::new(),
        }];
        let history = History::new(&pages);

        Self {
            pages,
            current_page_id: None,
            selected_component_id: None,
            view_mode: ViewMode::default(),
            is_dragging: false,
            history,
            ids,
        }
    }

    // ---- Session state ----

    /// Point the editor at a page. Plain assignment: the id is not checked
    /// against the page list, and reads against an unknown page yield
    /// empty results rather than errors.
    pub fn set_current_page(&mut self, page_id: impl Into<String>) {
        self.current_page_id = Some(page_id.into());
    }

    pub fn set_selected_component(&mut self, component_id: Option<String>) {
        self.selected_component_id = component_id;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    // ---- Structural operations ----

    /// Insert `component` into the active page: at the root when no parent
    /// is named, otherwise under the first component matching `parent_id`
    /// at any depth. `index` clamps to the target sequence length.
    pub fn add_component(
        &mut self,
        component: Component,
        parent_id: Option<&str>,
        index: Option<usize>,
    ) -> MutationOutcome {
        self.apply(Mutation::Insert {
            component,
            parent_id: parent_id.map(str::to_owned),
            index,
        })
    }

    /// Shallow-merge `patch` into the first component matching
    /// `component_id` on the active page.
    pub fn update_component(&mut self, component_id: &str, patch: ComponentPatch) -> MutationOutcome {
        self.apply(Mutation::Update {
            component_id: component_id.to_owned(),
            patch,
        })
    }

    /// Remove the first component matching `component_id`, subtree
    /// included. The selection is cleared after any delete; the selected
    /// node may have been inside the removed subtree.
    pub fn delete_component(&mut self, component_id: &str) -> MutationOutcome {
        let outcome = self.apply(Mutation::Delete {
            component_id: component_id.to_owned(),
        });
        self.selected_component_id = None;
        outcome
    }

    /// Mint a default-initialized component for a palette drop tag, using
    /// the store's generator so ids stay unique across the whole forest.
    pub fn create_component(&mut self, tag: &str) -> Component {
        registry::default_component(tag, &mut self.ids)
    }

    /// Append a new empty page. Pages are never removed by the editor.
    pub fn add_page(&mut self, name: impl Into<String>, slug: impl Into<String>) -> String {
        let page = Page {
            id: self.ids.new_id(),
            name: name.into(),
            slug: slug.into(),
            components: Vec::new(),
        };
        let page_id = page.id.clone();
        self.pages.push(page);

        // A new page is part of the document, so undoing a later edit must
        // not resurrect a pages list without it
        self.history.checkpoint(&self.pages);
        page_id
    }

    fn apply(&mut self, mutation: Mutation) -> MutationOutcome {
        let Some(page_id) = self.current_page_id.clone() else {
            tracing::debug!("mutation with no active page");
            return MutationOutcome::noop("no active page");
        };

        let Some(page) = self.pages.iter_mut().find(|p| p.id == page_id) else {
            tracing::warn!(%page_id, "active page not found; dropping mutation");
            return MutationOutcome::noop(format!("page {page_id} not found"));
        };

        let outcome = mutation.apply(page);
        if outcome.is_applied() {
            self.history.checkpoint(&self.pages);
        }
        outcome
    }

    // ---- History ----

    /// Replace the live document with the previous snapshot. No-op at the
    /// earliest recorded state.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.pages = snapshot;
        }
    }

    /// Replace the live document with the next snapshot. No-op at the
    /// latest recorded state.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.pages = snapshot;
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- Reads ----

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_page_id(&self) -> Option<&str> {
        self.current_page_id.as_deref()
    }

    pub fn current_page(&self) -> Option<&Page> {
        let id = self.current_page_id.as_deref()?;
        self.pages.iter().find(|p| p.id == id)
    }

    /// Root components of the active page; empty when no page is active or
    /// the pointer names an unknown page.
    pub fn current_components(&self) -> &[Component] {
        self.current_page()
            .map(|page| page.components.as_slice())
            .unwrap_or_default()
    }

    /// Find a component anywhere in the active page's tree.
    pub fn find_component(&self, component_id: &str) -> Option<&Component> {
        model::find(self.current_components(), component_id)
    }

    pub fn selected_component_id(&self) -> Option<&str> {
        self.selected_component_id.as_deref()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Snapshot the whole document in its serializable shape.
    pub fn document(&self) -> PageDocument {
        PageDocument::new(self.pages.clone())
    }
}
