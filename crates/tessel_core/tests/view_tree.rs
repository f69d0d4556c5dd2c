//! Integration tests for the view tree's constraint bookkeeping

use tessel_core::{Attribute, Constraint, Edge, LayoutError, ViewTree};

#[test]
fn size_constraints_are_installed_on_the_view_itself() {
    let mut tree = ViewTree::new();
    let view = tree.create_view();

    let (width, height) = tree.set_size_constraint(view, Some(120.0), None).unwrap();

    let width = width.expect("width requested");
    assert!(height.is_none());
    assert_eq!(tree.owner_of(width), Some(view));
    assert_eq!(tree.size_constraint_of(view, Attribute::Width), Some(width));
    assert_eq!(tree.size_constraint_of(view, Attribute::Height), None);
}

#[test]
fn size_lookup_ignores_constraints_held_by_the_parent() {
    let mut tree = ViewTree::new();
    let parent = tree.create_view();
    let a = tree.create_view();
    let b = tree.create_view();
    tree.add_subview(parent, a).unwrap();
    tree.add_subview(parent, b).unwrap();

    tree.add_constraint(
        parent,
        Constraint::ratio(a, Attribute::Width, b, Attribute::Width, 2.0),
    )
    .unwrap();

    assert_eq!(tree.size_constraint_of(a, Attribute::Width), None);
}

#[test]
fn contradicting_sizes_are_unsatisfiable() {
    let mut tree = ViewTree::new();
    let view = tree.create_view();
    tree.set_size_constraint(view, Some(50.0), None).unwrap();

    let err = tree.set_size_constraint(view, Some(80.0), None).unwrap_err();

    assert!(
        matches!(
            err,
            LayoutError::Unsatisfiable {
                attribute: Attribute::Width,
                ..
            }
        ),
        "unexpected error: {err}"
    );
    assert_eq!(tree.constraint_count(), 1);
}

#[test]
fn redundant_duplicates_are_accepted() {
    let mut tree = ViewTree::new();
    let parent = tree.create_view();
    let child = tree.create_view();
    let pin = Constraint::pin(child, Edge::Left, parent, Edge::Left, 8.0);

    tree.add_constraint(parent, pin).unwrap();
    tree.add_constraint(parent, pin).unwrap();

    assert_eq!(tree.constraint_count(), 2);
}

#[test]
fn replace_keeps_a_single_constraint() {
    let mut tree = ViewTree::new();
    let view = tree.create_view();
    let first = tree
        .add_constraint(view, Constraint::fixed(view, Attribute::Height, 40.0))
        .unwrap();

    let second = tree
        .replace_constraint(Some(first), view, Constraint::fixed(view, Attribute::Height, 90.0))
        .unwrap();

    assert!(tree.constraint(first).is_none());
    assert_eq!(tree.constraint(second).map(|c| c.constant), Some(90.0));
    assert_eq!(tree.constraints_owned_by(view).count(), 1);
}

#[test]
fn rejected_replacement_leaves_the_old_constraint() {
    let mut tree = ViewTree::new();
    let parent = tree.create_view();
    let view = tree.create_view();
    tree.add_constraint(parent, Constraint::fixed(view, Attribute::Width, 10.0))
        .unwrap();
    let own = tree
        .add_constraint(view, Constraint::fixed(view, Attribute::Height, 10.0))
        .unwrap();

    let result = tree.replace_constraint(Some(own), view, Constraint::fixed(view, Attribute::Width, 30.0));

    assert!(result.is_err());
    assert!(tree.constraint(own).is_some());
    assert_eq!(tree.constraint_count(), 2);
}

#[test]
fn constraints_on_unknown_views_are_rejected() {
    let mut tree = ViewTree::new();
    let view = tree.create_view();
    let mut other = ViewTree::new();
    let _ = other.create_view();
    let stranger = other.create_view();

    let err = tree
        .add_constraint(view, Constraint::pin(stranger, Edge::Top, view, Edge::Top, 0.0))
        .unwrap_err();

    assert_eq!(err, LayoutError::UnknownView(stranger));
}

#[test]
fn constraints_affecting_sees_both_sides() {
    let mut tree = ViewTree::new();
    let parent = tree.create_view();
    let a = tree.create_view();
    let b = tree.create_view();

    tree.add_constraint(parent, Constraint::pin(b, Edge::Top, a, Edge::Bottom, 4.0))
        .unwrap();
    tree.add_constraint(parent, Constraint::pin(a, Edge::Top, parent, Edge::Top, 0.0))
        .unwrap();

    assert_eq!(tree.constraints_affecting(a).count(), 2);
    assert_eq!(tree.constraints_affecting(b).count(), 1);
    assert_eq!(tree.constraints_owned_by(parent).count(), 2);
}

#[test]
fn failed_transaction_restores_the_tree() {
    let mut tree = ViewTree::new();
    let old_parent = tree.create_labeled_view("old");
    let new_parent = tree.create_view();
    let first = tree.create_view();
    let moved = tree.create_view();
    tree.add_subview(old_parent, first).unwrap();
    tree.add_subview(old_parent, moved).unwrap();
    let width = tree.add_constraint(moved, Constraint::fixed(moved, Attribute::Width, 40.0)).unwrap();

    let err = tree
        .transaction(|tree| {
            let spacer = tree.create_labeled_view("spacer");
            tree.add_subview(new_parent, moved)?;
            tree.add_subview(new_parent, spacer)?;
            tree.set_label(old_parent, "renamed")?;
            tree.set_user_interaction(moved, false)?;
            tree.set_translates_autoresizing_mask(moved, false)?;
            tree.add_constraint(new_parent, Constraint::pin(moved, Edge::Top, new_parent, Edge::Top, 0.0))?;
            tree.add_constraint(moved, Constraint::fixed(moved, Attribute::Width, 80.0))
        })
        .unwrap_err();

    assert!(matches!(err, LayoutError::Unsatisfiable { .. }), "got {err:?}");
    assert_eq!(tree.view_count(), 4, "views created inside the transaction are gone");
    assert_eq!(tree.subviews(old_parent), &[first, moved], "original position restored");
    assert!(tree.subviews(new_parent).is_empty());
    assert_eq!(tree.superview(moved), Some(old_parent));
    assert_eq!(tree.label(old_parent), Some("old"));

    let view = tree.view(moved).unwrap();
    assert!(view.user_interaction());
    assert!(view.translates_autoresizing_mask());

    assert_eq!(tree.constraint_count(), 1);
    assert_eq!(tree.size_constraint_of(moved, Attribute::Width), Some(width));
}

#[test]
fn failed_transaction_reinstalls_removed_constraints() {
    let mut tree = ViewTree::new();
    let view = tree.create_view();
    let (width, _) = tree.set_size_constraint(view, Some(10.0), None).unwrap();
    let width = width.unwrap();

    let result = tree.transaction(|tree| {
        tree.remove_constraint(width)?;
        tree.remove_constraint(width).map(|_| ())
    });

    assert_eq!(result, Err(LayoutError::UnknownConstraint(width)));
    let restored = tree.size_constraint_of(view, Attribute::Width).expect("width is back");
    assert_eq!(tree.constraint(restored).map(|c| c.constant), Some(10.0));
}

#[test]
fn nested_transactions_roll_back_with_the_outer_one() {
    let mut tree = ViewTree::new();
    let parent = tree.create_view();

    let result: Result<(), LayoutError> = tree.transaction(|tree| {
        let child = tree.transaction(|tree| {
            let child = tree.create_view();
            tree.add_subview(parent, child)?;
            Ok(child)
        })?;
        assert_eq!(tree.subviews(parent), &[child], "inner commit is visible to the outer");
        Err(LayoutError::UnknownView(child))
    });

    assert!(result.is_err());
    assert!(tree.subviews(parent).is_empty());
    assert_eq!(tree.view_count(), 1);
}

#[test]
fn successful_transaction_keeps_its_changes() {
    let mut tree = ViewTree::new();
    let parent = tree.create_view();

    let child = tree
        .transaction(|tree| {
            let child = tree.create_view();
            tree.add_subview(parent, child)?;
            tree.set_size_constraint(child, Some(5.0), Some(6.0))?;
            Ok(child)
        })
        .unwrap();

    assert_eq!(tree.superview(child), Some(parent));
    assert_eq!(tree.constraint_count(), 2);
}
