//! VBox / HBox emitter

use tessel_core::{Constraint, Result, ViewId, ViewTree};

use super::{adopt, pin_edge, place, spacer, Placement};
use crate::item::Item;
use crate::policy::{Pack, Stack};

pub(super) fn emit(tree: &mut ViewTree, container: ViewId, stack: &Stack, items: &[Item]) -> Result<()> {
    let axis = stack.axis;
    let defaults = &stack.default_margins;

    // Smallest flex weight; ties keep the first item seen.
    let mut base: Option<(usize, f32)> = None;
    for (index, item) in items.iter().enumerate() {
        adopt(tree, container, item.view())?;
        if let Some(flex) = item.flex() {
            if base.map_or(true, |(_, min)| flex < min) {
                base = Some((index, flex));
            }
        }
    }

    let pack = if base.is_some() { Pack::Fit } else { stack.pack };
    anchor_run(tree, container, stack, pack, items)?;

    for (index, item) in items.iter().enumerate() {
        if let (Some(flex), Some((base_index, base_flex))) = (item.flex(), base) {
            if index != base_index {
                if base_flex > 0.0 {
                    let base_view = items[base_index].view();
                    let dimension = axis.dimension();
                    tree.add_constraint(
                        container,
                        Constraint::ratio(item.view(), dimension, base_view, dimension, flex / base_flex),
                    )?;
                } else {
                    tracing::debug!(view = ?item.view(), "zero base flex, skipping ratio");
                }
            }
        }

        if let Some(previous) = index.checked_sub(1).map(|i| &items[i]) {
            let gap = previous.margins().resolve(axis.trailing(), defaults)
                + item.margins().resolve(axis.leading(), defaults);
            tree.add_constraint(
                container,
                Constraint::pin(item.view(), axis.leading(), previous.view(), axis.trailing(), gap),
            )?;
        }

        let align = item.align().unwrap_or(stack.align);
        place(tree, container, item, axis.cross(), Placement::from(align), defaults)?;
    }
    Ok(())
}

/// Anchor the run of items along the main axis
fn anchor_run(tree: &mut ViewTree, container: ViewId, stack: &Stack, pack: Pack, items: &[Item]) -> Result<()> {
    let axis = stack.axis;
    let defaults = &stack.default_margins;
    let (leading, trailing) = (axis.leading(), axis.trailing());

    let pin_first = |tree: &mut ViewTree| -> Result<()> {
        if let Some(first) = items.first() {
            let margin = first.margins().resolve(leading, defaults);
            tree.add_constraint(container, pin_edge(first.view(), leading, container, margin))?;
        }
        Ok(())
    };
    let pin_last = |tree: &mut ViewTree| -> Result<()> {
        if let Some(last) = items.last() {
            let margin = last.margins().resolve(trailing, defaults);
            tree.add_constraint(container, pin_edge(last.view(), trailing, container, margin))?;
        }
        Ok(())
    };

    match pack {
        Pack::Fit => {
            pin_first(tree)?;
            pin_last(tree)
        }
        Pack::Start => pin_first(tree),
        Pack::End => pin_last(tree),
        Pack::Center => {
            let before = spacer::create(tree, container, axis, leading)?;
            let after = spacer::create(tree, container, axis, trailing)?;
            let dimension = axis.dimension();
            tree.add_constraint(container, Constraint::ratio(after, dimension, before, dimension, 1.0))?;

            if let Some(first) = items.first() {
                tree.add_constraint(container, Constraint::pin(first.view(), leading, before, trailing, 0.0))?;
            }
            if let Some(last) = items.last() {
                tree.add_constraint(container, Constraint::pin(last.view(), trailing, after, leading, 0.0))?;
            }
            Ok(())
        }
    }
}
