//! # Pagecraft DOM
//!
//! Data model for the page builder: pages, their component trees, the
//! ID generator that keeps the forest collision-free, and the palette
//! registry that maps drop tags to default-initialized components.
//!
//! Everything here is plain owned data. The editing semantics (mutations,
//! history, drag state) live in `pagecraft-editor`.

pub mod error;
pub mod id_generator;
pub mod model;
pub mod registry;
pub mod serialize;

pub use error::DomError;
pub use id_generator::{document_seed, IdGenerator};
pub use model::{Component, Page};
pub use registry::{default_component, palette, resolve, ComponentCategory, ComponentKind};
pub use serialize::PageDocument;
