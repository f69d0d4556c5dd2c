//! Geometric constraints
//!
//! A constraint reads `first = second * multiplier + constant`, where each
//! side is an anchor (a view plus one of its attributes). Size constraints
//! have no second anchor and reduce to `first = constant`.

use std::fmt;

use crate::geometry::Edge;
use crate::tree::ViewId;

/// Constants closer than this are treated as equal when checking conflicts
const CONSTANT_TOLERANCE: f32 = 1e-4;

/// A measurable attribute of a view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Left,
    Right,
    Top,
    Bottom,
    Width,
    Height,
    CenterX,
    CenterY,
}

impl Attribute {
    fn name(self) -> &'static str {
        match self {
            Attribute::Left => "left",
            Attribute::Right => "right",
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::Width => "width",
            Attribute::Height => "height",
            Attribute::CenterX => "centerX",
            Attribute::CenterY => "centerY",
        }
    }
}

impl From<Edge> for Attribute {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Top => Attribute::Top,
            Edge::Left => Attribute::Left,
            Edge::Bottom => Attribute::Bottom,
            Edge::Right => Attribute::Right,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the two sides of a constraint relate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Relation {
    #[default]
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::Equal => "==",
            Relation::LessOrEqual => "<=",
            Relation::GreaterOrEqual => ">=",
        })
    }
}

/// A view attribute taking part in a constraint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Anchor {
    pub view: ViewId,
    pub attribute: Attribute,
}

impl Anchor {
    pub fn new(view: ViewId, attribute: impl Into<Attribute>) -> Self {
        Self {
            view,
            attribute: attribute.into(),
        }
    }
}

/// A linear relation `first <relation> second * multiplier + constant`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub first: Anchor,
    pub relation: Relation,
    pub second: Option<Anchor>,
    pub multiplier: f32,
    pub constant: f32,
}

impl Constraint {
    /// Tie one anchor to another with an offset
    pub fn pin(
        view: ViewId,
        attribute: impl Into<Attribute>,
        to: ViewId,
        to_attribute: impl Into<Attribute>,
        constant: f32,
    ) -> Self {
        Self {
            first: Anchor::new(view, attribute),
            relation: Relation::Equal,
            second: Some(Anchor::new(to, to_attribute)),
            multiplier: 1.0,
            constant,
        }
    }

    /// Fix a dimension of a view to a constant
    pub fn fixed(view: ViewId, attribute: Attribute, constant: f32) -> Self {
        Self {
            first: Anchor::new(view, attribute),
            relation: Relation::Equal,
            second: None,
            multiplier: 1.0,
            constant,
        }
    }

    /// Scale one view's attribute from another's
    pub fn ratio(
        view: ViewId,
        attribute: Attribute,
        to: ViewId,
        to_attribute: Attribute,
        multiplier: f32,
    ) -> Self {
        Self {
            first: Anchor::new(view, attribute),
            relation: Relation::Equal,
            second: Some(Anchor::new(to, to_attribute)),
            multiplier,
            constant: 0.0,
        }
    }

    /// Replace the relation
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relation = relation;
        self
    }

    /// Whether the constraint mentions `view` on either side
    pub fn involves(&self, view: ViewId) -> bool {
        self.first.view == view || self.second.is_some_and(|a| a.view == view)
    }

    /// Whether both constraints are equalities over the same terms with
    /// different constants. Such a pair has no solution.
    pub fn conflicts_with(&self, other: &Constraint) -> bool {
        self.relation == Relation::Equal
            && other.relation == Relation::Equal
            && self.first == other.first
            && self.second == other.second
            && (self.multiplier - other.multiplier).abs() < CONSTANT_TOLERANCE
            && (self.constant - other.constant).abs() >= CONSTANT_TOLERANCE
    }
}
