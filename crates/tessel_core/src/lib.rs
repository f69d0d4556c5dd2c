//! Tessel Core
//!
//! This crate provides the platform side of the Tessel layout composer:
//!
//! - **View Tree**: an arena of views with superview/subview links
//! - **Constraints**: one-directional linear relations between view anchors
//! - **Conflict Detection**: rejects constraints that can never be satisfied
//!   together with the ones already installed
//!
//! # Example
//!
//! ```rust
//! use tessel_core::{Attribute, Constraint, ViewTree};
//!
//! let mut tree = ViewTree::new();
//! let container = tree.create_view();
//! let child = tree.create_view();
//! tree.add_subview(container, child).unwrap();
//!
//! // Pin the child's top edge 10 points below the container's top edge
//! let pin = Constraint::pin(child, Attribute::Top, container, Attribute::Top, 10.0);
//! let id = tree.add_constraint(container, pin).unwrap();
//!
//! assert_eq!(tree.constraint(id).map(|c| c.constant), Some(10.0));
//! assert_eq!(tree.superview(child), Some(container));
//! ```

pub mod constraint;
pub mod error;
pub mod geometry;
pub mod tree;

pub use constraint::{Anchor, Attribute, Constraint, Relation};
pub use error::{LayoutError, Result};
pub use geometry::{Axis, Edge, Insets};
pub use tree::{ConstraintId, View, ViewId, ViewTree};
