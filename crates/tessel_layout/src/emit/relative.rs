//! Relative emitter
//!
//! Every item is anchored to the container on its own; siblings never
//! reference each other.

use tessel_core::{Axis, Insets, Result, ViewId, ViewTree};

use super::{adopt, place, Placement};
use crate::item::Item;

pub(super) fn emit(tree: &mut ViewTree, container: ViewId, defaults: &Insets, items: &[Item]) -> Result<()> {
    for item in items {
        adopt(tree, container, item.view())?;

        let horizontal = item.halign().map_or(Placement::Stretch, Placement::from);
        place(tree, container, item, Axis::Horizontal, horizontal, defaults)?;

        let vertical = item.valign().map_or(Placement::Stretch, Placement::from);
        place(tree, container, item, Axis::Vertical, vertical, defaults)?;
    }
    Ok(())
}
