//! Layout policies
//!
//! A policy decides how a container positions its children. It is chosen
//! once per container and never changes afterwards.

use serde::{Deserialize, Serialize};
use tessel_core::{Axis, Insets};

/// Cross-axis alignment of a stacked child
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Fill the cross axis, or center when the child has a fixed cross size
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

/// Main-axis anchoring of a stack's run of children
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pack {
    /// Pin the first child to the leading edge
    #[default]
    Start,
    /// Split surplus space evenly before and after the run
    Center,
    /// Pin the last child to the trailing edge
    End,
    /// Pin both ends so the container wraps its children
    Fit,
}

/// Horizontal anchor inside a relative container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor inside a relative container
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Sequential layout along one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stack {
    pub axis: Axis,
    pub align: Align,
    pub pack: Pack,
    pub default_margins: Insets,
}

impl Stack {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            align: Align::default(),
            pack: Pack::default(),
            default_margins: Insets::ZERO,
        }
    }
}

/// How a container lays out its children
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Policy {
    /// Children follow each other along an axis (VBox / HBox)
    Stack(Stack),
    /// Each child is anchored to the container on its own
    Relative { default_margins: Insets },
    /// Every child fills the container, inset by its margins
    Fit { default_margins: Insets },
}

impl Policy {
    /// Vertical stack, top to bottom
    pub fn vbox() -> Self {
        Policy::Stack(Stack::new(Axis::Vertical))
    }

    /// Horizontal stack, left to right
    pub fn hbox() -> Self {
        Policy::Stack(Stack::new(Axis::Horizontal))
    }

    pub fn relative() -> Self {
        Policy::Relative {
            default_margins: Insets::ZERO,
        }
    }

    pub fn fit() -> Self {
        Policy::Fit {
            default_margins: Insets::ZERO,
        }
    }

    /// Set the cross-axis alignment. Only stacks align their children.
    pub fn align(mut self, align: Align) -> Self {
        if let Policy::Stack(stack) = &mut self {
            stack.align = align;
        }
        self
    }

    /// Set main-axis packing. Only stacks pack their children.
    pub fn pack(mut self, pack: Pack) -> Self {
        if let Policy::Stack(stack) = &mut self {
            stack.pack = pack;
        }
        self
    }

    /// Margins used for any edge a child leaves unset
    pub fn default_margins(mut self, margins: impl Into<Insets>) -> Self {
        let margins = margins.into();
        match &mut self {
            Policy::Stack(stack) => stack.default_margins = margins,
            Policy::Relative { default_margins } | Policy::Fit { default_margins } => {
                *default_margins = margins
            }
        }
        self
    }

    pub fn defaults(&self) -> Insets {
        match self {
            Policy::Stack(stack) => stack.default_margins,
            Policy::Relative { default_margins } | Policy::Fit { default_margins } => *default_margins,
        }
    }

    /// Short name used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            Policy::Stack(Stack {
                axis: Axis::Vertical,
                ..
            }) => "vbox",
            Policy::Stack(Stack {
                axis: Axis::Horizontal,
                ..
            }) => "hbox",
            Policy::Relative { .. } => "relative",
            Policy::Fit { .. } => "fit",
        }
    }
}
