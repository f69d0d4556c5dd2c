//! Tessel Layout Composer
//!
//! Declarative box layouts translated into view constraints:
//!
//! - **VBox / HBox**: children follow each other along an axis, with flex
//!   ratios, cross-axis alignment and main-axis packing
//! - **Relative**: each child anchored to the container independently
//! - **Fit**: children inset into the container on every edge
//!
//! Layouts run once, while the view tree is being built. The only state
//! kept afterwards is the constraints on the views and the size-constraint
//! handles held by each [`Item`].
//!
//! # Example
//!
//! ```rust
//! use tessel_core::ViewTree;
//! use tessel_layout::{compose, ApplyLayout, Compose, Policy};
//!
//! let mut tree = ViewTree::new();
//! let content = tree.create_view();
//!
//! let view1 = compose(&mut tree, Compose::new().height(50.0)).unwrap();
//! let view2 = compose(&mut tree, Compose::new().height(100.0).margin_top(10.0)).unwrap();
//!
//! let mut layout = tree
//!     .apply_layout(content, Policy::vbox(), vec![view1, view2])
//!     .unwrap();
//!
//! // Resize a child later on; its old height constraint is replaced
//! let child = &mut layout.children_mut()[0];
//! child.update_height(&mut tree, 75.0).unwrap();
//! assert_eq!(child.height(), Some(75.0));
//! ```

pub mod compose;
pub mod document;
mod emit;
pub mod item;
pub mod policy;

pub use compose::{compose, ApplyLayout, Compose, ComposeError};
pub use document::{BuiltLayout, DocumentError, LayoutDocument, LayoutNode, PolicyDef};
pub use item::{Item, Margins};
pub use policy::{Align, HAlign, Pack, Policy, Stack, VAlign};
