//! Invisible spacers used to center a stack's run of items

use tessel_core::{Axis, Edge, Result, ViewId, ViewTree};

use super::{adopt, pin_edge};

/// Add a non-interactive spacer pinned to `edge` of `container`, spanning
/// the whole cross axis
pub(super) fn create(tree: &mut ViewTree, container: ViewId, axis: Axis, edge: Edge) -> Result<ViewId> {
    let spacer = tree.create_labeled_view("spacer");
    tree.set_user_interaction(spacer, false)?;
    adopt(tree, container, spacer)?;

    let cross = axis.cross();
    tree.add_constraints(
        container,
        [
            pin_edge(spacer, edge, container, 0.0),
            pin_edge(spacer, cross.leading(), container, 0.0),
            pin_edge(spacer, cross.trailing(), container, 0.0),
        ],
    )?;
    Ok(spacer)
}
