//! Page and component tree model.
//!
//! A page owns an ordered sequence of root-level components; container
//! components own their children directly, so the tree is acyclic by
//! construction. The lookup helpers walk a forest depth-first (a node,
//! then its children in order, then the next sibling) and stop at the
//! first id match.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A node in a page's content tree.
///
/// `props` is an open string-keyed bag; its shape is type-specific and
/// deliberately unvalidated here. `children` is present (possibly empty)
/// only for container kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub name: String,

    #[serde(default)]
    pub props: HashMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
}

impl Component {
    pub fn is_container(&self) -> bool {
        self.children.is_some()
    }
}

/// A named, routable unit of content. The slug is the routing key; the
/// editor does not require it to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub components: Vec<Component>,
}

/// Find the first component with `id` in the forest.
pub fn find<'a>(components: &'a [Component], id: &str) -> Option<&'a Component> {
    for component in components {
        if component.id == id {
            return Some(component);
        }
        if let Some(children) = &component.children {
            if let Some(found) = find(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Find the first component with `id`, mutably.
pub fn find_mut<'a>(components: &'a mut [Component], id: &str) -> Option<&'a mut Component> {
    for component in components {
        if component.id == id {
            return Some(component);
        }
        if let Some(children) = component.children.as_mut() {
            if let Some(found) = find_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Detach the first component with `id` from the forest, returning it
/// together with its entire subtree.
pub fn remove(components: &mut Vec<Component>, id: &str) -> Option<Component> {
    if let Some(pos) = components.iter().position(|c| c.id == id) {
        return Some(components.remove(pos));
    }

    for component in components.iter_mut() {
        if let Some(children) = component.children.as_mut() {
            if let Some(removed) = remove(children, id) {
                return Some(removed);
            }
        }
    }

    None
}

pub fn contains(components: &[Component], id: &str) -> bool {
    find(components, id).is_some()
}

/// Collect every id in the forest, pre-order.
pub fn collect_ids(components: &[Component], out: &mut Vec<String>) {
    for component in components {
        out.push(component.id.clone());
        if let Some(children) = &component.children {
            collect_ids(children, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(id: &str) -> Component {
        Component {
            id: id.to_string(),
            kind: "paragraph".to_string(),
            name: "Paragraph".to_string(),
            props: HashMap::new(),
            children: None,
        }
    }

    fn container(id: &str, children: Vec<Component>) -> Component {
        Component {
            id: id.to_string(),
            kind: "section".to_string(),
            name: "Section".to_string(),
            props: HashMap::new(),
            children: Some(children),
        }
    }

    #[test]
    fn test_find_at_depth() {
        let tree = vec![container("a", vec![container("b", vec![leaf("c")])])];

        assert_eq!(find(&tree, "c").unwrap().id, "c");
        assert_eq!(find(&tree, "b").unwrap().id, "b");
        assert!(find(&tree, "missing").is_none());
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut tree = vec![container("a", vec![leaf("b")])];

        let node = find_mut(&mut tree, "b").unwrap();
        node.props.insert("text".to_string(), json!("hi"));

        assert_eq!(find(&tree, "b").unwrap().props["text"], json!("hi"));
    }

    #[test]
    fn test_remove_detaches_subtree() {
        let mut tree = vec![container("a", vec![container("b", vec![leaf("c")])])];

        let removed = remove(&mut tree, "b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(removed.children.as_ref().unwrap()[0].id, "c");

        // Both b and c are gone from the live tree
        assert!(!contains(&tree, "b"));
        assert!(!contains(&tree, "c"));
        assert!(contains(&tree, "a"));
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut tree = vec![leaf("a")];
        assert!(remove(&mut tree, "x").is_none());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_collect_ids_preorder() {
        let tree = vec![
            container("a", vec![leaf("b"), leaf("c")]),
            leaf("d"),
        ];

        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_component_json_shape() {
        let node = leaf("p1");
        let json = serde_json::to_value(&node).unwrap();

        // Leaves serialize without a children field at all
        assert_eq!(json["type"], "paragraph");
        assert!(json.get("children").is_none());

        let parent = container("s1", vec![]);
        let json = serde_json::to_value(&parent).unwrap();
        assert_eq!(json["children"], json!([]));
    }
}
