//! # Pagecraft Editor
//!
//! In-memory editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ dom: pages, component trees, palette        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: store + mutations + history         │
//! │  - Structural edits at arbitrary depth      │
//! │  - Bounded snapshot undo/redo               │
//! │  - Drag-drop insertion                      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ host UI: reads trees, renders, raises events│
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The store is the single owner**: collaborators read trees and call
//!    operations; nothing else writes the document.
//! 2. **Stale ids are not errors**: the store mints every id itself, so an
//!    unresolvable id is a UI race, and the operation degrades to a no-op.
//! 3. **History owns its snapshots**: every checkpoint is a deep copy, never
//!    aliased with live state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{DragDropController, DragPayload, EditorStore};
//!
//! let mut store = EditorStore::new("my-site");
//! let home = store.pages()[0].id.clone();
//! store.set_current_page(home);
//!
//! // Drop a palette item onto the canvas
//! let mut dnd = DragDropController::new();
//! let payload = dnd.on_drag_start(&mut store, "Heading");
//! dnd.on_drag_over();
//! dnd.on_drop(&mut store, &payload);
//!
//! // Edit, then step back
//! store.undo();
//! ```

mod drag;
mod history;
mod mutations;
mod store;

pub use drag::{DragDropController, DragPayload};
pub use history::History;
pub use mutations::{ComponentPatch, Mutation, MutationOutcome};
pub use store::{EditorStore, ViewMode};

// Re-export the model types consumers hand back to us
pub use pagecraft_dom::{Component, Page, PageDocument};
