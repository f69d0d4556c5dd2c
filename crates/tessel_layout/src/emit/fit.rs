//! Fit emitter

use tessel_core::{Edge, Insets, Result, ViewId, ViewTree};

use super::{adopt, pin_edge};
use crate::item::Item;

/// Inset every item by its margins on all four edges
pub(super) fn emit(tree: &mut ViewTree, container: ViewId, defaults: &Insets, items: &[Item]) -> Result<()> {
    for item in items {
        let view = item.view();
        adopt(tree, container, view)?;

        let margins = item.margins().resolved(defaults);
        tree.add_constraints(
            container,
            [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom]
                .map(|edge| pin_edge(view, edge, container, margins.edge(edge))),
        )?;
    }
    Ok(())
}
