//! Layout documents
//!
//! A layout document describes a whole view tree in TOML. Building it runs
//! [`compose`] bottom-up, so every nested container is laid out before its
//! parent places it.
//!
//! ```toml
//! [root]
//! name = "content"
//! layout = { kind = "vbox", default_margins = [10, 20, 0, 20] }
//!
//! [[root.children]]
//! name = "header"
//! height = 50
//!
//! [[root.children]]
//! name = "body"
//! flex = 1
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tessel_core::{Axis, Insets, LayoutError, ViewId, ViewTree};
use thiserror::Error;

use crate::compose::{compose, Compose};
use crate::item::Item;
use crate::policy::{Align, HAlign, Pack, Policy, Stack, VAlign};

/// Errors raised while loading or building a layout document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The TOML could not be parsed
    #[error("Failed to parse layout document: {0}")]
    Parse(#[from] toml::de::Error),

    /// The view tree rejected a constraint
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Two nodes share a name
    #[error("Duplicate view name: {0}")]
    DuplicateName(String),

    /// No node carries the requested name
    #[error("Unknown view name: {0}")]
    UnknownName(String),

    /// A node lists children but no layout to place them with
    #[error("Node {0} has children but no layout")]
    ChildrenWithoutLayout(String),
}

/// Top-level document
#[derive(Debug, Deserialize, Serialize)]
pub struct LayoutDocument {
    pub root: LayoutNode,
}

/// One view and its options
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutNode {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub flex: Option<f32>,
    #[serde(default)]
    pub layout: Option<PolicyDef>,
    /// (top, left, bottom, right)
    #[serde(default)]
    pub margins: Option<[f32; 4]>,
    #[serde(default)]
    pub margin_top: Option<f32>,
    #[serde(default)]
    pub margin_left: Option<f32>,
    #[serde(default)]
    pub margin_bottom: Option<f32>,
    #[serde(default)]
    pub margin_right: Option<f32>,
    #[serde(default)]
    pub align: Option<Align>,
    #[serde(default)]
    pub halign: Option<HAlign>,
    #[serde(default)]
    pub valign: Option<VAlign>,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

/// Serialized form of a [`Policy`]
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PolicyDef {
    Vbox {
        #[serde(default)]
        align: Align,
        #[serde(default)]
        pack: Pack,
        #[serde(default)]
        default_margins: [f32; 4],
    },
    Hbox {
        #[serde(default)]
        align: Align,
        #[serde(default)]
        pack: Pack,
        #[serde(default)]
        default_margins: [f32; 4],
    },
    Relative {
        #[serde(default)]
        default_margins: [f32; 4],
    },
    Fit {
        #[serde(default)]
        default_margins: [f32; 4],
    },
}

impl From<PolicyDef> for Policy {
    fn from(def: PolicyDef) -> Self {
        let stack = |axis, align, pack, margins: [f32; 4]| {
            Policy::Stack(Stack {
                axis,
                align,
                pack,
                default_margins: Insets::from(margins),
            })
        };
        match def {
            PolicyDef::Vbox {
                align,
                pack,
                default_margins,
            } => stack(Axis::Vertical, align, pack, default_margins),
            PolicyDef::Hbox {
                align,
                pack,
                default_margins,
            } => stack(Axis::Horizontal, align, pack, default_margins),
            PolicyDef::Relative { default_margins } => Policy::relative().default_margins(default_margins),
            PolicyDef::Fit { default_margins } => Policy::fit().default_margins(default_margins),
        }
    }
}

impl LayoutNode {
    /// Options for this node, without children
    fn to_compose(&self, view: ViewId) -> Compose {
        Compose {
            view: Some(view),
            width: self.width,
            height: self.height,
            flex: self.flex,
            layout: self.layout.map(Policy::from),
            margins: self.margins.map(Insets::from),
            margin_top: self.margin_top,
            margin_left: self.margin_left,
            margin_bottom: self.margin_bottom,
            margin_right: self.margin_right,
            align: self.align,
            halign: self.halign,
            valign: self.valign,
            items: None,
        }
    }
}

/// Result of building a document
#[derive(Debug)]
pub struct BuiltLayout {
    pub root: Item,
    /// Named views in document order
    pub views: IndexMap<String, ViewId>,
}

impl BuiltLayout {
    /// Look up a named view
    pub fn view(&self, name: &str) -> Result<ViewId, DocumentError> {
        self.views
            .get(name)
            .copied()
            .ok_or_else(|| DocumentError::UnknownName(name.to_string()))
    }
}

impl LayoutDocument {
    pub fn from_toml_str(source: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(source)?)
    }

    /// Build the document into fresh views
    pub fn build(&self, tree: &mut ViewTree) -> Result<BuiltLayout, DocumentError> {
        self.build_into(tree, None)
    }

    /// Build the document, using `root` as the root view when given
    pub fn build_into(&self, tree: &mut ViewTree, root: Option<ViewId>) -> Result<BuiltLayout, DocumentError> {
        let mut views = IndexMap::new();
        let root = build_node(&self.root, tree, root, &mut views)?;
        tracing::debug!(views = views.len(), constraints = tree.constraint_count(), "built layout document");
        Ok(BuiltLayout { root, views })
    }
}

fn build_node(
    node: &LayoutNode,
    tree: &mut ViewTree,
    existing: Option<ViewId>,
    views: &mut IndexMap<String, ViewId>,
) -> Result<Item, DocumentError> {
    let view = match (existing, &node.name) {
        (Some(view), Some(name)) => {
            tree.set_label(view, name.as_str())?;
            view
        }
        (Some(view), None) => view,
        (None, Some(name)) => tree.create_labeled_view(name.as_str()),
        (None, None) => tree.create_view(),
    };
    if let Some(name) = &node.name {
        if views.insert(name.clone(), view).is_some() {
            return Err(DocumentError::DuplicateName(name.clone()));
        }
    }

    if node.layout.is_none() && !node.children.is_empty() {
        let name = node.name.clone().unwrap_or_else(|| format!("{view:?}"));
        return Err(DocumentError::ChildrenWithoutLayout(name));
    }

    let children = node
        .children
        .iter()
        .map(|child| build_node(child, tree, None, views))
        .collect::<Result<Vec<_>, _>>()?;

    let mut config = node.to_compose(view);
    if node.layout.is_some() {
        config = config.items(children);
    }
    Ok(compose(tree, config).map_err(LayoutError::from)?)
}
