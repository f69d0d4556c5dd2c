//! View tree management
//!
//! Views live in a slotmap arena and are addressed by [`ViewId`]. Each
//! installed constraint is owned by exactly one view, the way a platform
//! view owns the constraints added to it.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::constraint::{Attribute, Constraint};
use crate::error::{LayoutError, Result};

new_key_type! {
    /// Unique identifier for a view in a [`ViewTree`]
    pub struct ViewId;

    /// Unique identifier for a constraint installed in a [`ViewTree`]
    pub struct ConstraintId;
}

/// A node of the view tree
#[derive(Clone, Debug)]
pub struct View {
    label: Option<String>,
    superview: Option<ViewId>,
    subviews: SmallVec<[ViewId; 4]>,
    constraints: SmallVec<[ConstraintId; 4]>,
    user_interaction: bool,
    translates_autoresizing_mask: bool,
}

impl View {
    fn new(label: Option<String>) -> Self {
        Self {
            label,
            superview: None,
            subviews: SmallVec::new(),
            constraints: SmallVec::new(),
            user_interaction: true,
            translates_autoresizing_mask: true,
        }
    }

    /// Debug label, if one was given
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn superview(&self) -> Option<ViewId> {
        self.superview
    }

    /// Children in insertion order
    pub fn subviews(&self) -> &[ViewId] {
        &self.subviews
    }

    /// Constraints installed on this view
    pub fn constraints(&self) -> &[ConstraintId] {
        &self.constraints
    }

    /// Whether the view receives touches
    pub fn user_interaction(&self) -> bool {
        self.user_interaction
    }

    /// Whether the platform derives constraints from the view's frame
    pub fn translates_autoresizing_mask(&self) -> bool {
        self.translates_autoresizing_mask
    }
}

#[derive(Clone, Debug)]
struct Installed {
    owner: ViewId,
    constraint: Constraint,
}

/// One reversible change, recorded while a transaction is open
#[derive(Clone, Debug)]
enum Undo {
    CreateView(ViewId),
    Install(ConstraintId),
    Remove {
        owner: ViewId,
        index: usize,
        constraint: Constraint,
    },
    Attach {
        child: ViewId,
        previous: Option<(ViewId, usize)>,
    },
    Label {
        view: ViewId,
        previous: Option<String>,
    },
    UserInteraction {
        view: ViewId,
        previous: bool,
    },
    Autoresizing {
        view: ViewId,
        previous: bool,
    },
}

/// Arena of views and the constraints installed on them
#[derive(Clone, Debug)]
pub struct ViewTree {
    views: SlotMap<ViewId, View>,
    constraints: SlotMap<ConstraintId, Installed>,
    journal: Option<Vec<Undo>>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self {
            views: SlotMap::with_key(),
            constraints: SlotMap::with_key(),
            journal: None,
        }
    }

    /// Create a detached view
    pub fn create_view(&mut self) -> ViewId {
        let id = self.views.insert(View::new(None));
        self.record(Undo::CreateView(id));
        id
    }

    /// Create a detached view with a debug label
    pub fn create_labeled_view(&mut self, label: impl Into<String>) -> ViewId {
        let id = self.views.insert(View::new(Some(label.into())));
        self.record(Undo::CreateView(id));
        id
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.views.contains_key(id)
    }

    pub fn view(&self, id: ViewId) -> Option<&View> {
        self.views.get(id)
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    pub fn label(&self, id: ViewId) -> Option<&str> {
        self.views.get(id).and_then(View::label)
    }

    pub fn set_label(&mut self, id: ViewId, label: impl Into<String>) -> Result<()> {
        let previous = self.view_mut(id)?.label.replace(label.into());
        self.record(Undo::Label { view: id, previous });
        Ok(())
    }

    pub fn superview(&self, id: ViewId) -> Option<ViewId> {
        self.views.get(id).and_then(View::superview)
    }

    /// Children of a view, empty for unknown views
    pub fn subviews(&self, id: ViewId) -> &[ViewId] {
        self.views.get(id).map(View::subviews).unwrap_or(&[])
    }

    /// Attach `child` as the last subview of `parent`.
    ///
    /// A child that already has a superview is detached from it first.
    pub fn add_subview(&mut self, parent: ViewId, child: ViewId) -> Result<()> {
        self.view(parent).ok_or(LayoutError::UnknownView(parent))?;
        let previous = self.view(child).ok_or(LayoutError::UnknownView(child))?.superview;

        let previous = previous.and_then(|old| {
            let siblings = &mut self.views.get_mut(old)?.subviews;
            let index = siblings.iter().position(|id| *id == child)?;
            siblings.remove(index);
            Some((old, index))
        });

        self.view_mut(parent)?.subviews.push(child);
        self.view_mut(child)?.superview = Some(parent);
        self.record(Undo::Attach { child, previous });
        Ok(())
    }

    pub fn set_user_interaction(&mut self, id: ViewId, enabled: bool) -> Result<()> {
        let view = self.view_mut(id)?;
        let previous = std::mem::replace(&mut view.user_interaction, enabled);
        self.record(Undo::UserInteraction { view: id, previous });
        Ok(())
    }

    pub fn set_translates_autoresizing_mask(&mut self, id: ViewId, enabled: bool) -> Result<()> {
        let view = self.view_mut(id)?;
        let previous = std::mem::replace(&mut view.translates_autoresizing_mask, enabled);
        self.record(Undo::Autoresizing { view: id, previous });
        Ok(())
    }

    /// Install a constraint on `owner`
    pub fn add_constraint(&mut self, owner: ViewId, constraint: Constraint) -> Result<ConstraintId> {
        self.check(owner, &constraint, None)?;
        Ok(self.insert(owner, constraint))
    }

    /// Install every constraint in order, stopping at the first failure
    pub fn add_constraints(
        &mut self,
        owner: ViewId,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<SmallVec<[ConstraintId; 4]>> {
        constraints
            .into_iter()
            .map(|c| self.add_constraint(owner, c))
            .collect()
    }

    /// Swap `old` for a new constraint.
    ///
    /// The new constraint is validated as if `old` were already gone; `old`
    /// is only removed once the new one is accepted, so a rejected
    /// replacement leaves the tree untouched.
    pub fn replace_constraint(
        &mut self,
        old: Option<ConstraintId>,
        owner: ViewId,
        constraint: Constraint,
    ) -> Result<ConstraintId> {
        self.check(owner, &constraint, old)?;
        if let Some(old) = old {
            self.remove_constraint(old)?;
        }
        Ok(self.insert(owner, constraint))
    }

    /// Uninstall a constraint, returning it
    pub fn remove_constraint(&mut self, id: ConstraintId) -> Result<Constraint> {
        let installed = self
            .constraints
            .remove(id)
            .ok_or(LayoutError::UnknownConstraint(id))?;
        let index = self.views.get_mut(installed.owner).and_then(|owner| {
            let index = owner.constraints.iter().position(|c| *c == id)?;
            owner.constraints.remove(index);
            Some(index)
        });
        self.record(Undo::Remove {
            owner: installed.owner,
            index: index.unwrap_or(usize::MAX),
            constraint: installed.constraint,
        });
        tracing::trace!(?id, "removed constraint");
        Ok(installed.constraint)
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(id).map(|i| &i.constraint)
    }

    /// View a constraint is installed on
    pub fn owner_of(&self, id: ConstraintId) -> Option<ViewId> {
        self.constraints.get(id).map(|i| i.owner)
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Every installed constraint
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint)> {
        self.constraints.iter().map(|(id, i)| (id, &i.constraint))
    }

    /// Constraints installed on `view`, in installation order
    pub fn constraints_owned_by(
        &self,
        view: ViewId,
    ) -> impl Iterator<Item = (ConstraintId, &Constraint)> + '_ {
        self.views
            .get(view)
            .map(View::constraints)
            .unwrap_or(&[])
            .iter()
            .filter_map(move |id| self.constraint(*id).map(|c| (*id, c)))
    }

    /// Constraints mentioning `view` on either side, wherever installed
    pub fn constraints_affecting(
        &self,
        view: ViewId,
    ) -> impl Iterator<Item = (ConstraintId, &Constraint)> + '_ {
        self.constraints().filter(move |(_, c)| c.involves(view))
    }

    /// The view's own fixed width or height constraint, if any.
    ///
    /// Only constraints installed on the view itself are considered, so
    /// ratio constraints a container holds for its children do not count.
    pub fn size_constraint_of(&self, view: ViewId, attribute: Attribute) -> Option<ConstraintId> {
        self.constraints_owned_by(view)
            .find(|(_, c)| c.first.view == view && c.first.attribute == attribute)
            .map(|(id, _)| id)
    }

    /// Install fixed size constraints for the dimensions that are given
    pub fn set_size_constraint(
        &mut self,
        view: ViewId,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Result<(Option<ConstraintId>, Option<ConstraintId>)> {
        let width = width
            .map(|w| self.add_constraint(view, Constraint::fixed(view, Attribute::Width, w)))
            .transpose()?;
        let height = height
            .map(|h| self.add_constraint(view, Constraint::fixed(view, Attribute::Height, h)))
            .transpose()?;
        Ok((width, height))
    }

    /// Run `f` as one unit: if it fails, every view, constraint, attachment
    /// and flag change it made is undone before the error is returned.
    ///
    /// Constraints that `f` removed are reinstalled under fresh ids.
    /// Transactions nest; an inner one that succeeds is only kept if the
    /// outer one does too.
    pub fn transaction<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let outer = self.journal.replace(Vec::new());
        let result = f(self);
        let journal = std::mem::replace(&mut self.journal, outer).unwrap_or_default();

        match result {
            Ok(value) => {
                if let Some(outer) = &mut self.journal {
                    outer.extend(journal);
                }
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(changes = journal.len(), "rolling back: {err}");
                for undo in journal.into_iter().rev() {
                    self.undo(undo);
                }
                Err(err)
            }
        }
    }

    /// Human readable form of a constraint, using view labels where present
    pub fn describe(&self, constraint: &Constraint) -> String {
        let first = format!(
            "{}.{}",
            self.display_name(constraint.first.view),
            constraint.first.attribute
        );
        let mut rhs = match constraint.second {
            Some(second) => {
                let anchor = format!("{}.{}", self.display_name(second.view), second.attribute);
                if constraint.multiplier == 1.0 {
                    anchor
                } else {
                    format!("{anchor} * {}", constraint.multiplier)
                }
            }
            None => format!("{}", constraint.constant),
        };
        if constraint.second.is_some() && constraint.constant != 0.0 {
            if constraint.constant < 0.0 {
                rhs.push_str(&format!(" - {}", -constraint.constant));
            } else {
                rhs.push_str(&format!(" + {}", constraint.constant));
            }
        }
        format!("{first} {} {rhs}", constraint.relation)
    }

    fn display_name(&self, id: ViewId) -> String {
        match self.label(id) {
            Some(label) => label.to_string(),
            None => format!("{id:?}"),
        }
    }

    fn view_mut(&mut self, id: ViewId) -> Result<&mut View> {
        self.views.get_mut(id).ok_or(LayoutError::UnknownView(id))
    }

    fn check(&self, owner: ViewId, constraint: &Constraint, ignoring: Option<ConstraintId>) -> Result<()> {
        for view in [Some(owner), Some(constraint.first.view), constraint.second.map(|a| a.view)]
            .into_iter()
            .flatten()
        {
            if !self.contains(view) {
                return Err(LayoutError::UnknownView(view));
            }
        }

        let conflict = self
            .constraints
            .iter()
            .filter(|(id, _)| Some(*id) != ignoring)
            .find(|(_, i)| i.constraint.conflicts_with(constraint));

        if let Some((id, existing)) = conflict {
            tracing::warn!(
                existing = ?id,
                "rejecting constraint: {} contradicts {}",
                self.describe(constraint),
                self.describe(&existing.constraint)
            );
            return Err(LayoutError::Unsatisfiable {
                view: constraint.first.view,
                attribute: constraint.first.attribute,
                existing: existing.constraint.constant,
                requested: constraint.constant,
            });
        }
        Ok(())
    }

    fn insert(&mut self, owner: ViewId, constraint: Constraint) -> ConstraintId {
        let id = self.constraints.insert(Installed { owner, constraint });
        if let Some(view) = self.views.get_mut(owner) {
            view.constraints.push(id);
        }
        self.record(Undo::Install(id));
        tracing::trace!(?id, "installed constraint {}", self.describe(&constraint));
        id
    }

    fn record(&mut self, undo: Undo) {
        if let Some(journal) = &mut self.journal {
            journal.push(undo);
        }
    }

    fn undo(&mut self, undo: Undo) {
        match undo {
            Undo::CreateView(id) => {
                self.views.remove(id);
            }
            Undo::Install(id) => {
                if let Some(installed) = self.constraints.remove(id) {
                    if let Some(owner) = self.views.get_mut(installed.owner) {
                        owner.constraints.retain(|c| *c != id);
                    }
                }
            }
            Undo::Remove {
                owner,
                index,
                constraint,
            } => {
                let id = self.constraints.insert(Installed { owner, constraint });
                if let Some(view) = self.views.get_mut(owner) {
                    let index = index.min(view.constraints.len());
                    view.constraints.insert(index, id);
                }
            }
            Undo::Attach { child, previous } => {
                if let Some(parent) = self.superview(child) {
                    if let Some(parent) = self.views.get_mut(parent) {
                        parent.subviews.retain(|id| *id != child);
                    }
                }
                if let Some((parent, index)) = previous {
                    if let Some(parent) = self.views.get_mut(parent) {
                        let index = index.min(parent.subviews.len());
                        parent.subviews.insert(index, child);
                    }
                }
                if let Some(view) = self.views.get_mut(child) {
                    view.superview = previous.map(|(parent, _)| parent);
                }
            }
            Undo::Label { view, previous } => {
                if let Some(view) = self.views.get_mut(view) {
                    view.label = previous;
                }
            }
            Undo::UserInteraction { view, previous } => {
                if let Some(view) = self.views.get_mut(view) {
                    view.user_interaction = previous;
                }
            }
            Undo::Autoresizing { view, previous } => {
                if let Some(view) = self.views.get_mut(view) {
                    view.translates_autoresizing_mask = previous;
                }
            }
        }
    }
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}
