//! Geometry primitives
//!
//! Edge insets and the axis helpers the layout policies use to treat
//! vertical and horizontal stacking with a single code path.

use crate::constraint::Attribute;

/// One of the four edges of a view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Left,
    Bottom,
    Right,
}

impl Edge {
    /// Whether offsets toward this edge point into the parent.
    ///
    /// Leading edges (top, left) take the margin as a positive constant,
    /// trailing edges (bottom, right) take it negated.
    pub fn is_leading(self) -> bool {
        matches!(self, Edge::Top | Edge::Left)
    }
}

/// Four independent edge offsets
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    /// All edges zero
    pub const ZERO: Insets = Insets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Create insets in (top, left, bottom, right) order
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same offset on every edge
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Offset for a single edge
    pub fn edge(&self, edge: Edge) -> f32 {
        match edge {
            Edge::Top => self.top,
            Edge::Left => self.left,
            Edge::Bottom => self.bottom,
            Edge::Right => self.right,
        }
    }
}

impl From<(f32, f32, f32, f32)> for Insets {
    fn from((top, left, bottom, right): (f32, f32, f32, f32)) -> Self {
        Self::new(top, left, bottom, right)
    }
}

impl From<[f32; 4]> for Insets {
    fn from([top, left, bottom, right]: [f32; 4]) -> Self {
        Self::new(top, left, bottom, right)
    }
}

/// Layout direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Edge where a run along this axis begins
    pub fn leading(self) -> Edge {
        match self {
            Axis::Horizontal => Edge::Left,
            Axis::Vertical => Edge::Top,
        }
    }

    /// Edge where a run along this axis ends
    pub fn trailing(self) -> Edge {
        match self {
            Axis::Horizontal => Edge::Right,
            Axis::Vertical => Edge::Bottom,
        }
    }

    /// Size attribute measured along this axis
    pub fn dimension(self) -> Attribute {
        match self {
            Axis::Horizontal => Attribute::Width,
            Axis::Vertical => Attribute::Height,
        }
    }

    /// Center attribute along this axis
    pub fn center(self) -> Attribute {
        match self {
            Axis::Horizontal => Attribute::CenterX,
            Axis::Vertical => Attribute::CenterY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_order_is_top_left_bottom_right() {
        let insets = Insets::from((1.0, 2.0, 3.0, 4.0));
        assert_eq!(insets.edge(Edge::Top), 1.0);
        assert_eq!(insets.edge(Edge::Left), 2.0);
        assert_eq!(insets.edge(Edge::Bottom), 3.0);
        assert_eq!(insets.edge(Edge::Right), 4.0);
    }

    #[test]
    fn axis_helpers_are_perpendicular() {
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
        assert_eq!(Axis::Vertical.leading(), Edge::Top);
        assert_eq!(Axis::Vertical.cross().leading(), Edge::Left);
        assert_eq!(Axis::Horizontal.dimension(), Attribute::Width);
        assert_eq!(Axis::Horizontal.cross().center(), Attribute::CenterY);
    }
}
