//! Component palette and default construction.
//!
//! Maps the drop tag carried by a drag gesture to a freshly created
//! component with type-appropriate default props. Unknown tags are never
//! rejected: they produce a generic placeholder so a palette entry the
//! registry has not heard of still drops successfully.

use crate::id_generator::IdGenerator;
use crate::model::Component;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

/// Palette grouping, one per sidebar tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Layout,
    Text,
    Media,
}

/// A draggable palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentKind {
    /// Drop tag carried by the drag payload, e.g. `"Heading"`
    pub tag: &'static str,
    /// Node type stamped onto created components, e.g. `"heading"`
    pub kind: &'static str,
    pub category: ComponentCategory,
}

const PALETTE: &[ComponentKind] = &[
    entry("Section", "section", ComponentCategory::Layout),
    entry("Container", "container", ComponentCategory::Layout),
    entry("Grid", "grid", ComponentCategory::Layout),
    entry("Columns", "columns", ComponentCategory::Layout),
    entry("Heading", "heading", ComponentCategory::Text),
    entry("Paragraph", "paragraph", ComponentCategory::Text),
    entry("List", "list", ComponentCategory::Text),
    entry("Quote", "quote", ComponentCategory::Text),
    entry("Image", "image", ComponentCategory::Media),
    entry("Gallery", "gallery", ComponentCategory::Media),
    entry("Video", "video", ComponentCategory::Media),
    entry("Icon", "icon", ComponentCategory::Media),
];

const fn entry(tag: &'static str, kind: &'static str, category: ComponentCategory) -> ComponentKind {
    ComponentKind {
        tag,
        kind,
        category,
    }
}

/// All registered palette entries, in sidebar order.
pub fn palette() -> &'static [ComponentKind] {
    PALETTE
}

/// Look up a palette entry by its drop tag.
pub fn resolve(tag: &str) -> Option<&'static ComponentKind> {
    PALETTE.iter().find(|k| k.tag == tag)
}

/// Create a default-initialized component for a drop tag.
///
/// Tags with bespoke defaults get their starter props; container kinds get
/// an empty `children` sequence. Every other tag, including the empty one,
/// falls through to a generic placeholder whose type is the lower-cased tag.
pub fn default_component(tag: &str, ids: &mut IdGenerator) -> Component {
    match tag {
        "Heading" => node(
            ids,
            "heading",
            "Heading",
            props([
                ("text", json!("New Heading")),
                ("level", json!(2)),
                ("align", json!("left")),
            ]),
            false,
        ),

        "Paragraph" => node(
            ids,
            "paragraph",
            "Paragraph",
            props([
                (
                    "text",
                    json!("This is a new paragraph. Edit this text to add your own content."),
                ),
                ("align", json!("left")),
            ]),
            false,
        ),

        "Image" => node(
            ids,
            "image",
            "Image",
            props([
                ("src", json!("https://via.placeholder.com/400x300")),
                ("alt", json!("Image description")),
                ("width", json!(400)),
                ("height", json!(300)),
            ]),
            false,
        ),

        "Section" => node(
            ids,
            "section",
            "Section",
            props([
                (
                    "padding",
                    json!({ "top": 20, "right": 20, "bottom": 20, "left": 20 }),
                ),
                ("backgroundColor", json!("#ffffff")),
            ]),
            true,
        ),

        "Container" => node(
            ids,
            "container",
            "Container",
            props([
                ("maxWidth", json!(1200)),
                (
                    "padding",
                    json!({ "top": 0, "right": 0, "bottom": 0, "left": 0 }),
                ),
            ]),
            true,
        ),

        "Grid" => node(
            ids,
            "grid",
            "Grid",
            props([("columns", json!(2)), ("gap", json!(20))]),
            true,
        ),

        "Columns" => node(
            ids,
            "columns",
            "Columns",
            props([
                ("columns", json!([{ "width": "50%" }, { "width": "50%" }])),
                ("gap", json!(20)),
            ]),
            true,
        ),

        // Generic placeholder for anything else
        other => Component {
            id: ids.new_id(),
            kind: other.to_lowercase(),
            name: other.to_string(),
            props: HashMap::new(),
            children: None,
        },
    }
}

fn node(
    ids: &mut IdGenerator,
    kind: &str,
    name: &str,
    props: HashMap<String, Value>,
    container: bool,
) -> Component {
    Component {
        id: ids.new_id(),
        kind: kind.to_string(),
        name: name.to_string(),
        props,
        children: container.then(Vec::new),
    }
}

fn props<const N: usize>(entries: [(&str, Value); N]) -> HashMap<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
