//! Composition entry point
//!
//! [`compose`] builds (or reuses) a view, fixes any requested size, and lays
//! out the given child items with the chosen [`Policy`]. Children are always
//! composed first, so a nested container is fully laid out before its
//! parent positions it.
//!
//! ```rust
//! use tessel_core::ViewTree;
//! use tessel_layout::{compose, Compose, Policy};
//!
//! let mut tree = ViewTree::new();
//! let header = compose(&mut tree, Compose::new().height(50.0)).unwrap();
//! let body = compose(&mut tree, Compose::new().flex(1.0)).unwrap();
//!
//! let screen = compose(
//!     &mut tree,
//!     Compose::new().layout(Policy::vbox()).items(vec![header, body]),
//! )
//! .unwrap();
//!
//! assert_eq!(screen.children().len(), 2);
//! assert_eq!(tree.subviews(screen.view()).len(), 2);
//! ```

use tessel_core::{Insets, LayoutError, ViewId, ViewTree};
use thiserror::Error;

use crate::emit;
use crate::item::{Item, Margins};
use crate::policy::{Align, HAlign, Policy, VAlign};

/// Options for composing one view. Every option starts unset.
///
/// | Option | Effect |
/// |---|---|
/// | `width` / `height` | one fixed-size constraint per dimension |
/// | `flex` | main-axis ratio sizing inside a stack |
/// | `margins`, `margin_*` | per-edge spacing, a single edge overrides the tuple |
/// | `align` | cross-axis alignment override inside a stack |
/// | `halign` / `valign` | explicit anchor inside a relative container |
/// | `layout` + `items` | lay out children with a policy |
#[derive(Debug, Default)]
pub struct Compose {
    pub view: Option<ViewId>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub flex: Option<f32>,
    pub layout: Option<Policy>,
    pub margins: Option<Insets>,
    pub margin_top: Option<f32>,
    pub margin_left: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_right: Option<f32>,
    pub align: Option<Align>,
    pub halign: Option<HAlign>,
    pub valign: Option<VAlign>,
    pub items: Option<Vec<Item>>,
}

impl Compose {
    /// Compose a fresh view
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose an existing view
    pub fn with_view(view: ViewId) -> Self {
        Self {
            view: Some(view),
            ..Self::default()
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn size(self, width: f32, height: f32) -> Self {
        self.width(width).height(height)
    }

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn layout(mut self, layout: Policy) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Margins in (top, left, bottom, right) order
    pub fn margins(mut self, margins: impl Into<Insets>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    pub fn margin_top(mut self, margin: f32) -> Self {
        self.margin_top = Some(margin);
        self
    }

    pub fn margin_left(mut self, margin: f32) -> Self {
        self.margin_left = Some(margin);
        self
    }

    pub fn margin_bottom(mut self, margin: f32) -> Self {
        self.margin_bottom = Some(margin);
        self
    }

    pub fn margin_right(mut self, margin: f32) -> Self {
        self.margin_right = Some(margin);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn halign(mut self, halign: HAlign) -> Self {
        self.halign = Some(halign);
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = Some(valign);
        self
    }

    /// Children to lay out with [`layout`](Self::layout)
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Single child to lay out with [`layout`](Self::layout)
    pub fn item(self, item: Item) -> Self {
        self.items(vec![item])
    }

    /// Margins after applying per-edge overrides to the tuple form
    fn resolved_margins(&self) -> Margins {
        Margins {
            top: self.margin_top.or(self.margins.map(|m| m.top)),
            left: self.margin_left.or(self.margins.map(|m| m.left)),
            bottom: self.margin_bottom.or(self.margins.map(|m| m.bottom)),
            right: self.margin_right.or(self.margins.map(|m| m.right)),
        }
    }
}

/// A rejected composition.
///
/// The view tree is left as it was before the call, and the items that
/// were to be laid out are handed back unchanged.
#[derive(Error, Debug)]
#[error("Failed to compose view")]
pub struct ComposeError {
    #[source]
    pub error: LayoutError,
    pub items: Vec<Item>,
}

impl From<ComposeError> for LayoutError {
    fn from(err: ComposeError) -> Self {
        err.error
    }
}

/// Create a layouted view or apply a layout to an existing one.
///
/// Either every constraint is installed or none is.
pub fn compose(tree: &mut ViewTree, config: Compose) -> Result<Item, ComposeError> {
    let margins = config.resolved_margins();
    let Compose {
        view,
        width,
        height,
        flex,
        layout,
        align,
        halign,
        valign,
        items,
        ..
    } = config;

    let items = items.unwrap_or_default();

    let placed = tree.transaction(|tree| {
        let container = match view {
            Some(view) => view,
            None => tree.create_view(),
        };
        let sizes = tree.set_size_constraint(container, width, height)?;
        if let Some(policy) = &layout {
            emit::apply(tree, container, policy, &items)?;
        }
        Ok((container, sizes))
    });
    let (container, (width_constraint, height_constraint)) = match placed {
        Ok(placed) => placed,
        Err(error) => return Err(ComposeError { error, items }),
    };

    let children = if layout.is_some() {
        items
    } else {
        if !items.is_empty() {
            tracing::warn!(
                view = ?container,
                count = items.len(),
                "items given without a layout are not placed"
            );
        }
        Vec::new()
    };

    Ok(Item {
        view: container,
        width,
        height,
        flex,
        layout,
        margins,
        align,
        halign,
        valign,
        width_constraint,
        height_constraint,
        children,
    })
}

/// Lay out children inside a view that already exists
pub trait ApplyLayout {
    fn apply_layout(&mut self, view: ViewId, layout: Policy, items: Vec<Item>) -> Result<Item, ComposeError>;

    fn apply_layout_one(&mut self, view: ViewId, layout: Policy, item: Item) -> Result<Item, ComposeError> {
        self.apply_layout(view, layout, vec![item])
    }
}

impl ApplyLayout for ViewTree {
    fn apply_layout(&mut self, view: ViewId, layout: Policy, items: Vec<Item>) -> Result<Item, ComposeError> {
        compose(self, Compose::with_view(view).layout(layout).items(items))
    }
}
