//! Relative and Fit constraint emission

use tessel_core::{Attribute, Constraint, ViewId, ViewTree};
use tessel_layout::{compose, ApplyLayout, Compose, HAlign, Item, Policy, VAlign};

fn on(tree: &ViewTree, container: ViewId, view: ViewId) -> Vec<Constraint> {
    tree.constraints_owned_by(container)
        .map(|(_, c)| *c)
        .filter(|c| c.first.view == view)
        .collect()
}

fn attributes(constraints: &[Constraint]) -> Vec<Attribute> {
    constraints.iter().map(|c| c.first.attribute).collect()
}

fn leaf(tree: &mut ViewTree, config: Compose) -> Item {
    compose(tree, config).unwrap()
}

#[test]
fn relative_without_anchor_or_width_stretches_horizontally() {
    let mut tree = ViewTree::new();
    let content = tree.create_view();
    let items = vec![leaf(&mut tree, Compose::new().height(150.0).valign(VAlign::Top))];
    let view = items[0].view();

    tree.apply_layout(content, Policy::relative(), items).unwrap();

    let placed = on(&tree, content, view);
    let horizontal: Vec<Attribute> = attributes(&placed)
        .into_iter()
        .filter(|a| matches!(a, Attribute::Left | Attribute::Right | Attribute::CenterX))
        .collect();
    assert_eq!(horizontal, vec![Attribute::Left, Attribute::Right]);
}

#[test]
fn relative_with_width_and_no_anchor_centers() {
    let mut tree = ViewTree::new();
    let content = tree.create_view();
    let items = vec![leaf(&mut tree, Compose::new().size(200.0, 150.0))];
    let view = items[0].view();

    tree.apply_layout(content, Policy::relative(), items).unwrap();

    assert_eq!(
        attributes(&on(&tree, content, view)),
        vec![Attribute::CenterX, Attribute::CenterY]
    );
}

#[test]
fn relative_anchors_use_margins_and_defaults() {
    let mut tree = ViewTree::new();
    let content = tree.create_view();
    let items = vec![
        leaf(
            &mut tree,
            Compose::new()
                .size(200.0, 100.0)
                .halign(HAlign::Left)
                .valign(VAlign::Top)
                .margin_left(12.0),
        ),
        leaf(
            &mut tree,
            Compose::new()
                .size(200.0, 100.0)
                .halign(HAlign::Right)
                .valign(VAlign::Bottom),
        ),
        leaf(
            &mut tree,
            Compose::new()
                .size(200.0, 100.0)
                .halign(HAlign::Center)
                .valign(VAlign::Center),
        ),
    ];
    let views: Vec<ViewId> = items.iter().map(Item::view).collect();

    tree.apply_layout(
        content,
        Policy::relative().default_margins((4.0, 4.0, 6.0, 6.0)),
        items,
    )
    .unwrap();

    let top_left = on(&tree, content, views[0]);
    assert_eq!(attributes(&top_left), vec![Attribute::Left, Attribute::Top]);
    assert_eq!(top_left[0].constant, 12.0);
    assert_eq!(top_left[1].constant, 4.0);

    let bottom_right = on(&tree, content, views[1]);
    assert_eq!(attributes(&bottom_right), vec![Attribute::Right, Attribute::Bottom]);
    assert_eq!(bottom_right[0].constant, -6.0);
    assert_eq!(bottom_right[1].constant, -6.0);

    let centered = on(&tree, content, views[2]);
    assert_eq!(attributes(&centered), vec![Attribute::CenterX, Attribute::CenterY]);
    assert!(centered.iter().all(|c| c.constant == 0.0));
}

#[test]
fn relative_items_never_reference_siblings() {
    let mut tree = ViewTree::new();
    let content = tree.create_view();
    let items = vec![
        leaf(&mut tree, Compose::new().halign(HAlign::Left)),
        leaf(&mut tree, Compose::new().valign(VAlign::Bottom)),
    ];

    tree.apply_layout(content, Policy::relative(), items).unwrap();

    for (_, constraint) in tree.constraints_owned_by(content) {
        let second = constraint.second.expect("every constraint ties to the container");
        assert_eq!(second.view, content);
    }
}

#[test]
fn fit_insets_every_edge() {
    let mut tree = ViewTree::new();
    let content = tree.create_view();
    let items = vec![leaf(&mut tree, Compose::new().margins((10.0, 10.0, 10.0, 10.0)).margin_right(20.0))];
    let view = items[0].view();

    tree.apply_layout(content, Policy::fit(), items).unwrap();

    let placed = on(&tree, content, view);
    assert_eq!(
        attributes(&placed),
        vec![Attribute::Left, Attribute::Right, Attribute::Top, Attribute::Bottom]
    );
    let constants: Vec<f32> = placed.iter().map(|c| c.constant).collect();
    assert_eq!(constants, vec![10.0, -20.0, 10.0, -10.0]);
    for c in &placed {
        let second = c.second.unwrap();
        assert_eq!((second.view, second.attribute), (content, c.first.attribute));
    }
}

#[test]
fn fit_uses_policy_defaults_for_unset_edges() {
    let mut tree = ViewTree::new();
    let content = tree.create_view();
    let items = vec![leaf(&mut tree, Compose::new().margin_top(1.0))];
    let view = items[0].view();

    tree.apply_layout(content, Policy::fit().default_margins((5.0, 6.0, 7.0, 8.0)), items)
        .unwrap();

    let constants: Vec<f32> = on(&tree, content, view).iter().map(|c| c.constant).collect();
    assert_eq!(constants, vec![6.0, -8.0, 1.0, -7.0]);
}
