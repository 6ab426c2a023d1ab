//! # Drag-Drop Insertion
//!
//! Translates a palette drag gesture into a concrete component and inserts
//! it at the root of the active page. The controller owns only the
//! transient hover flag; the store stays the source of truth for
//! everything else, including the global dragging flag.

use crate::store::EditorStore;
use serde::{Deserialize, Serialize};

/// Payload carried by a drag gesture: the host toolkit's data-transfer
/// slot. A gesture whose tag was never stamped reads back as empty and
/// resolves to the generic placeholder on drop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub component_type: Option<String>,
}

impl DragPayload {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            component_type: Some(tag.into()),
        }
    }

    pub fn tag(&self) -> &str {
        self.component_type.as_deref().unwrap_or("")
    }
}

/// Transient hover state for the canvas drop target.
#[derive(Debug, Clone, Default)]
pub struct DragDropController {
    is_dragging_over: bool,
}

impl DragDropController {
    pub fn new() -> Self {
        Self::default()
    }

    /// A palette item started dragging: stamp the payload and raise the
    /// store's global dragging flag.
    pub fn on_drag_start(&mut self, store: &mut EditorStore, tag: &str) -> DragPayload {
        store.set_dragging(true);
        DragPayload::new(tag)
    }

    /// The drag moved over the drop target. The host must also suppress
    /// its toolkit's default drag-rejection for the drop to land.
    pub fn on_drag_over(&mut self) {
        self.is_dragging_over = true;
    }

    pub fn on_drag_leave(&mut self) {
        self.is_dragging_over = false;
    }

    /// Resolve the payload into a component and insert it at the root of
    /// the active page. Unknown and missing tags produce the generic
    /// placeholder rather than rejecting the drop. Returns the minted
    /// component id so the host can select it.
    pub fn on_drop(&mut self, store: &mut EditorStore, payload: &DragPayload) -> String {
        let component = store.create_component(payload.tag());
        let component_id = component.id.clone();

        tracing::debug!(tag = payload.tag(), %component_id, "drop resolved");
        store.add_component(component, None, None);

        self.is_dragging_over = false;
        store.set_dragging(false);
        component_id
    }

    pub fn is_dragging_over(&self) -> bool {
        self.is_dragging_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store_with_home_active() -> EditorStore {
        let mut store = EditorStore::new("test-site");
        let home = store.pages()[0].id.clone();
        store.set_current_page(home);
        store
    }

    #[test]
    fn test_hover_flags() {
        let mut dnd = DragDropController::new();
        assert!(!dnd.is_dragging_over());

        dnd.on_drag_over();
        assert!(dnd.is_dragging_over());

        dnd.on_drag_leave();
        assert!(!dnd.is_dragging_over());
    }

    #[test]
    fn test_drag_start_raises_global_flag() {
        let mut store = store_with_home_active();
        let mut dnd = DragDropController::new();

        let payload = dnd.on_drag_start(&mut store, "Heading");

        assert!(store.is_dragging());
        assert_eq!(payload.tag(), "Heading");
    }

    #[test]
    fn test_drop_inserts_with_defaults_and_resets_flags() {
        let mut store = store_with_home_active();
        let mut dnd = DragDropController::new();

        let payload = dnd.on_drag_start(&mut store, "Heading");
        dnd.on_drag_over();
        let id = dnd.on_drop(&mut store, &payload);

        let heading = store.find_component(&id).unwrap();
        assert_eq!(heading.kind, "heading");
        assert_eq!(heading.props["text"], json!("New Heading"));

        assert!(!dnd.is_dragging_over());
        assert!(!store.is_dragging());
    }

    #[test]
    fn test_unknown_tag_drops_placeholder() {
        let mut store = store_with_home_active();
        let mut dnd = DragDropController::new();

        let id = dnd.on_drop(&mut store, &DragPayload::new("Banner"));

        let banner = store.find_component(&id).unwrap();
        assert_eq!(banner.kind, "banner");
        assert_eq!(banner.name, "Banner");
        assert!(banner.props.is_empty());
    }

    #[test]
    fn test_missing_tag_falls_through_to_placeholder() {
        let mut store = store_with_home_active();
        let mut dnd = DragDropController::new();

        let id = dnd.on_drop(&mut store, &DragPayload::default());

        let placeholder = store.find_component(&id).unwrap();
        assert_eq!(placeholder.kind, "");
        assert!(placeholder.props.is_empty());
    }

    #[test]
    fn test_drop_without_active_page_still_resets_flags() {
        let mut store = EditorStore::new("test-site");
        let mut dnd = DragDropController::new();

        let payload = dnd.on_drag_start(&mut store, "Heading");
        dnd.on_drag_over();
        dnd.on_drop(&mut store, &payload);

        // Insertion no-opped, but the gesture is over
        assert!(store.pages()[0].components.is_empty());
        assert!(!dnd.is_dragging_over());
        assert!(!store.is_dragging());
    }
}
