//! Constraint emitters
//!
//! One emitter per policy. Each attaches the items' views to the container
//! and installs the constraints on the container; none of them return
//! anything besides errors raised by the view tree.

mod fit;
mod relative;
mod spacer;
mod stack;

use tessel_core::{Axis, Constraint, Edge, Insets, Result, ViewId, ViewTree};

use crate::item::Item;
use crate::policy::{Align, HAlign, Policy, VAlign};

/// Dispatch on the policy variant
pub(crate) fn apply(tree: &mut ViewTree, container: ViewId, policy: &Policy, items: &[Item]) -> Result<()> {
    tracing::debug!(
        view = ?container,
        policy = policy.kind(),
        items = items.len(),
        "emitting layout"
    );
    match policy {
        Policy::Stack(stack) => stack::emit(tree, container, stack, items),
        Policy::Relative { default_margins } => relative::emit(tree, container, default_margins, items),
        Policy::Fit { default_margins } => fit::emit(tree, container, default_margins, items),
    }
}

/// Where a child sits along one axis of its container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Leading,
    Center,
    Trailing,
    /// Span the axis, or center when the child already has a fixed size on it
    Stretch,
}

impl From<Align> for Placement {
    fn from(align: Align) -> Self {
        match align {
            Align::Stretch => Placement::Stretch,
            Align::Start => Placement::Leading,
            Align::Center => Placement::Center,
            Align::End => Placement::Trailing,
        }
    }
}

impl From<HAlign> for Placement {
    fn from(halign: HAlign) -> Self {
        match halign {
            HAlign::Left => Placement::Leading,
            HAlign::Center => Placement::Center,
            HAlign::Right => Placement::Trailing,
        }
    }
}

impl From<VAlign> for Placement {
    fn from(valign: VAlign) -> Self {
        match valign {
            VAlign::Top => Placement::Leading,
            VAlign::Center => Placement::Center,
            VAlign::Bottom => Placement::Trailing,
        }
    }
}

/// Make `view` a subview of `container` that is positioned by constraints only
fn adopt(tree: &mut ViewTree, container: ViewId, view: ViewId) -> Result<()> {
    tree.add_subview(container, view)?;
    tree.set_translates_autoresizing_mask(view, false)
}

/// Pin an edge of `view` to the same edge of `container`, inset by `margin`
fn pin_edge(view: ViewId, edge: Edge, container: ViewId, margin: f32) -> Constraint {
    let constant = if edge.is_leading() { margin } else { -margin };
    Constraint::pin(view, edge, container, edge, constant)
}

/// Position `item` along `axis` inside `container`
fn place(
    tree: &mut ViewTree,
    container: ViewId,
    item: &Item,
    axis: Axis,
    placement: Placement,
    defaults: &Insets,
) -> Result<()> {
    let view = item.view();
    let margin = |edge: Edge| item.margins().resolve(edge, defaults);
    let center = Constraint::pin(view, axis.center(), container, axis.center(), 0.0);

    match placement {
        Placement::Leading => {
            let edge = axis.leading();
            tree.add_constraint(container, pin_edge(view, edge, container, margin(edge)))?;
        }
        Placement::Trailing => {
            let edge = axis.trailing();
            tree.add_constraint(container, pin_edge(view, edge, container, margin(edge)))?;
        }
        Placement::Center => {
            tree.add_constraint(container, center)?;
        }
        Placement::Stretch if tree.size_constraint_of(view, axis.dimension()).is_some() => {
            tree.add_constraint(container, center)?;
        }
        Placement::Stretch => {
            let (leading, trailing) = (axis.leading(), axis.trailing());
            tree.add_constraints(
                container,
                [
                    pin_edge(view, leading, container, margin(leading)),
                    pin_edge(view, trailing, container, margin(trailing)),
                ],
            )?;
        }
    }
    Ok(())
}
