//! # Structural Mutations
//!
//! Semantic operations on a page's component tree.
//!
//! ## Mutation Semantics
//!
//! ### Insert
//! - Root-level when no parent is named, otherwise under the first component
//!   matching `parent_id` (depth-first)
//! - Index clamps to the target sequence length; omitted index appends
//! - A leaf parent gains an empty `children` sequence before insertion
//!
//! ### Update
//! - Shallow replacement of the fields present in the patch
//! - Replacing `props` swaps the entire bag; nested prop objects are not
//!   merged
//!
//! ### Delete
//! - Detaches the first matching component and its whole subtree
//!
//! Unresolvable identifiers are not errors. The store mints every id it
//! hands out, so a missing target means the host UI raced a structural
//! change (say, clicking a node that was just deleted); those calls report
//! [`MutationOutcome::Noop`] and leave the tree untouched.

use pagecraft_dom::{model, Component, Page};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Structural operations on the active page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a freshly created component at the root or under a parent
    Insert {
        component: Component,
        parent_id: Option<String>,
        index: Option<usize>,
    },

    /// Shallow-merge a patch into the first matching component
    Update {
        component_id: String,
        patch: ComponentPatch,
    },

    /// Detach the first matching component, subtree included
    Delete { component_id: String },
}

/// Fields replaced wholesale on the target component when present.
///
/// `id` is immutable once minted and children are edited structurally, so
/// neither appears here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComponentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<HashMap<String, Value>>,
}

impl ComponentPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn replace_props(props: HashMap<String, Value>) -> Self {
        Self {
            props: Some(props),
            ..Self::default()
        }
    }
}

/// What a mutation did to the tree
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The tree changed
    Applied,
    /// The tree is untouched (target id unresolved, or no active page)
    Noop { reason: String },
}

impl MutationOutcome {
    pub fn noop(reason: impl Into<String>) -> Self {
        Self::Noop {
            reason: reason.into(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl Mutation {
    /// Apply to a page, reporting whether the tree changed.
    pub fn apply(self, page: &mut Page) -> MutationOutcome {
        match self {
            Mutation::Insert {
                component,
                parent_id,
                index,
            } => Self::apply_insert(page, component, parent_id, index),

            Mutation::Update {
                component_id,
                patch,
            } => Self::apply_update(page, &component_id, patch),

            Mutation::Delete { component_id } => Self::apply_delete(page, &component_id),
        }
    }

    fn apply_insert(
        page: &mut Page,
        component: Component,
        parent_id: Option<String>,
        index: Option<usize>,
    ) -> MutationOutcome {
        match parent_id {
            None => {
                let slot = clamp(index, page.components.len());
                page.components.insert(slot, component);
                MutationOutcome::Applied
            }

            Some(parent_id) => {
                let Some(parent) = model::find_mut(&mut page.components, &parent_id) else {
                    tracing::warn!(%parent_id, "insert parent not found; dropping mutation");
                    return MutationOutcome::noop(format!("parent {parent_id} not found"));
                };

                let children = parent.children.get_or_insert_with(Vec::new);
                let slot = clamp(index, children.len());
                children.insert(slot, component);
                MutationOutcome::Applied
            }
        }
    }

    fn apply_update(page: &mut Page, component_id: &str, patch: ComponentPatch) -> MutationOutcome {
        let Some(target) = model::find_mut(&mut page.components, component_id) else {
            tracing::debug!(%component_id, "update target not found");
            return MutationOutcome::noop(format!("component {component_id} not found"));
        };

        if let Some(name) = patch.name {
            target.name = name;
        }
        if let Some(props) = patch.props {
            target.props = props;
        }
        MutationOutcome::Applied
    }

    fn apply_delete(page: &mut Page, component_id: &str) -> MutationOutcome {
        match model::remove(&mut page.components, component_id) {
            Some(_) => MutationOutcome::Applied,
            None => {
                tracing::debug!(%component_id, "delete target not found");
                MutationOutcome::noop(format!("component {component_id} not found"))
            }
        }
    }
}

fn clamp(index: Option<usize>, len: usize) -> usize {
    index.unwrap_or(len).min(len)
}
