//! Layout error types

use thiserror::Error;

use crate::constraint::Attribute;
use crate::tree::{ConstraintId, ViewId};

/// Errors raised at the view tree boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A new constraint contradicts one that is already installed
    #[error("Unsatisfiable layout: {attribute} of {view:?} is already tied with constant {existing}, cannot also use {requested}")]
    Unsatisfiable {
        view: ViewId,
        attribute: Attribute,
        existing: f32,
        requested: f32,
    },

    /// The view is not part of the tree
    #[error("Unknown view: {0:?}")]
    UnknownView(ViewId),

    /// The constraint is not installed in the tree
    #[error("Unknown constraint: {0:?}")]
    UnknownConstraint(ConstraintId),
}

/// Result type for view tree operations
pub type Result<T> = std::result::Result<T, LayoutError>;
