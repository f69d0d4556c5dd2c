//! Layout items
//!
//! An [`Item`] is the result of composing one view: the view itself, the
//! options it was composed with, and handles to the size constraints that
//! were installed for it. Items nest: a container keeps the items it laid
//! out so callers can still reach them for later resizing.

use tessel_core::{Axis, Constraint, ConstraintId, Edge, Insets, Result, ViewId, ViewTree};

use crate::policy::{Align, HAlign, Policy, VAlign};

/// Per-edge margins an item asked for. Unset edges fall back to the
/// container policy's default margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub bottom: Option<f32>,
    pub right: Option<f32>,
}

impl Margins {
    /// The item's margin for `edge`, or the policy default
    pub fn resolve(&self, edge: Edge, defaults: &Insets) -> f32 {
        let explicit = match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Bottom => self.bottom,
            Edge::Right => self.right,
        };
        explicit.unwrap_or_else(|| defaults.edge(edge))
    }

    /// All four edges resolved against `defaults`
    pub fn resolved(&self, defaults: &Insets) -> Insets {
        Insets::new(
            self.resolve(Edge::Top, defaults),
            self.resolve(Edge::Left, defaults),
            self.resolve(Edge::Bottom, defaults),
            self.resolve(Edge::Right, defaults),
        )
    }
}

/// A composed view, ready to be placed in a parent layout
#[derive(Debug)]
pub struct Item {
    pub(crate) view: ViewId,
    pub(crate) width: Option<f32>,
    pub(crate) height: Option<f32>,
    pub(crate) flex: Option<f32>,
    pub(crate) layout: Option<Policy>,
    pub(crate) margins: Margins,
    pub(crate) align: Option<Align>,
    pub(crate) halign: Option<HAlign>,
    pub(crate) valign: Option<VAlign>,
    pub(crate) width_constraint: Option<ConstraintId>,
    pub(crate) height_constraint: Option<ConstraintId>,
    pub(crate) children: Vec<Item>,
}

impl Item {
    pub fn view(&self) -> ViewId {
        self.view
    }

    /// Fixed width, if one is installed
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Fixed height, if one is installed
    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn flex(&self) -> Option<f32> {
        self.flex
    }

    /// Policy used to lay out this item's children
    pub fn layout(&self) -> Option<&Policy> {
        self.layout.as_ref()
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn align(&self) -> Option<Align> {
        self.align
    }

    pub fn halign(&self) -> Option<HAlign> {
        self.halign
    }

    pub fn valign(&self) -> Option<VAlign> {
        self.valign
    }

    pub fn width_constraint(&self) -> Option<ConstraintId> {
        self.width_constraint
    }

    pub fn height_constraint(&self) -> Option<ConstraintId> {
        self.height_constraint
    }

    /// Items this one laid out, in order
    pub fn children(&self) -> &[Item] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Item] {
        &mut self.children
    }

    /// Change the fixed width, replacing the previous width constraint
    pub fn update_width(&mut self, tree: &mut ViewTree, width: f32) -> Result<ConstraintId> {
        let id = self.replace_size(tree, Axis::Horizontal, width)?;
        self.width_constraint = Some(id);
        self.width = Some(width);
        Ok(id)
    }

    /// Change the fixed height, replacing the previous height constraint
    pub fn update_height(&mut self, tree: &mut ViewTree, height: f32) -> Result<ConstraintId> {
        let id = self.replace_size(tree, Axis::Vertical, height)?;
        self.height_constraint = Some(id);
        self.height = Some(height);
        Ok(id)
    }

    fn replace_size(&self, tree: &mut ViewTree, axis: Axis, value: f32) -> Result<ConstraintId> {
        let old = match axis {
            Axis::Horizontal => self.width_constraint,
            Axis::Vertical => self.height_constraint,
        };
        let attribute = axis.dimension();
        tracing::debug!(view = ?self.view, %attribute, value, "updating size");
        tree.replace_constraint(old, self.view, Constraint::fixed(self.view, attribute, value))
    }
}
