use alloc::vec::Vec;

use crate::translator::{child_rows, find_parent_of_cell, parent_row};
use crate::{
    AccordionResult, DataModel, Diagnostic, ExpandedParent, ExpansionMode, ExpansionState,
    RowMutation, RowPath, Transition,
};

/// Decides which parents expand or collapse when a parent row is tapped, updates the model and
/// reports the row mutations the list view has to apply.
///
/// | current   | mode     | action                                                   |
/// |-----------|----------|----------------------------------------------------------|
/// | expanded  | any      | collapse it                                              |
/// | collapsed | single   | collapse the previously expanded parent, then expand it  |
/// | collapsed | multiple | expand it                                                |
///
/// Parents without children never change state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionMachine {
    mode: ExpansionMode,
    expanded: Option<ExpandedParent>,
}

impl ExpansionMachine {
    pub fn new(mode: ExpansionMode) -> Self {
        Self {
            mode,
            expanded: None,
        }
    }

    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    /// The parent currently expanded in single mode.
    ///
    /// Always `None` in multiple mode.
    pub fn expanded(&self) -> Option<ExpandedParent> {
        self.expanded
    }

    /// Handles a tap on flat `row` of `section`.
    ///
    /// Returns `None` when nothing changes: child rows, rows out of range and parents without
    /// children.
    pub fn tap<P, C>(
        &mut self,
        model: &mut DataModel<P, C>,
        section: usize,
        row: usize,
    ) -> Option<Transition> {
        let loc = find_parent_of_cell(model, section, row)?;
        if !loc.is_parent {
            return None;
        }
        self.toggle(model, section, loc.parent, loc.position)
    }

    /// Expands a parent by ordinal, following the same rules as a tap.
    ///
    /// Returns `Ok(None)` when the parent is already expanded or has no children.
    pub fn expand<P, C>(
        &mut self,
        model: &mut DataModel<P, C>,
        section: usize,
        parent: usize,
    ) -> AccordionResult<Option<Transition>> {
        if model.item_mut(section, parent)?.is_expanded() {
            return Ok(None);
        }
        let Some(position) = parent_row(model, section, parent) else {
            return Ok(None);
        };
        Ok(self.toggle(model, section, parent, position))
    }

    /// Collapses a parent by ordinal.
    ///
    /// Returns `Ok(None)` when the parent is already collapsed or has no children.
    pub fn collapse<P, C>(
        &mut self,
        model: &mut DataModel<P, C>,
        section: usize,
        parent: usize,
    ) -> AccordionResult<Option<Transition>> {
        if !model.item_mut(section, parent)?.is_expanded() {
            return Ok(None);
        }
        let Some(position) = parent_row(model, section, parent) else {
            return Ok(None);
        };
        Ok(self.toggle(model, section, parent, position))
    }

    /// Collapses every expanded parent.
    ///
    /// Deletions are ordered bottom-up so each range stays valid when the mutations are applied
    /// one after another.
    pub fn collapse_all<P, C>(&mut self, model: &mut DataModel<P, C>) -> Vec<RowMutation> {
        self.expanded = None;
        let out = Self::collapse_expanded(model);
        adebug!(deleted = out.len(), "collapse_all");
        out
    }

    /// Re-derives the expanded reference from the model after it was mutated directly.
    ///
    /// In single mode, a model with more than one expanded parent is collapsed entirely and a
    /// [`Diagnostic::ConflictingExpansionState`] is returned. No row mutations are produced; the
    /// list view must be reloaded.
    pub fn sync<P, C>(&mut self, model: &mut DataModel<P, C>) -> Option<Diagnostic> {
        self.expanded = None;
        if self.mode == ExpansionMode::Multiple {
            return None;
        }

        let expanded = model.number_of_expanded_parents();
        if expanded > 1 {
            awarn!(
                expanded,
                "single mode data arrived with several parents expanded"
            );
            model.collapse_all();
            return Some(Diagnostic::ConflictingExpansionState { expanded });
        }

        if let Some((section, parent)) = model.expanded_parents().next() {
            let row = parent_row(model, section, parent).unwrap_or(parent);
            self.expanded = Some(ExpandedParent {
                section,
                row,
                parent,
            });
        }
        None
    }

    fn toggle<P, C>(
        &mut self,
        model: &mut DataModel<P, C>,
        section: usize,
        parent: usize,
        position: usize,
    ) -> Option<Transition> {
        let item = model.item(section, parent)?;
        let count = item.children.len();
        if count == 0 {
            atrace!(section, parent, "toggle: parent has no children");
            return None;
        }
        match item.state {
            ExpansionState::Expanded => self.collapse_at(model, section, parent, position, count),
            ExpansionState::Collapsed => self.expand_at(model, section, parent, position, count),
        }
    }

    fn collapse_at<P, C>(
        &mut self,
        model: &mut DataModel<P, C>,
        section: usize,
        parent: usize,
        position: usize,
        count: usize,
    ) -> Option<Transition> {
        model
            .toggle_parent(ExpansionState::Collapsed, section, parent)
            .ok()?;
        if self
            .expanded
            .is_some_and(|e| e.section == section && e.parent == parent)
        {
            self.expanded = None;
        }

        let rows = child_rows(position, count);
        adebug!(
            section,
            parent,
            start = rows.start_index,
            end = rows.end_index,
            "collapse"
        );
        Some(Transition {
            section,
            parent,
            state: ExpansionState::Collapsed,
            mutations: alloc::vec![RowMutation::Delete { section, rows }],
            scroll_to: None,
        })
    }

    fn expand_at<P, C>(
        &mut self,
        model: &mut DataModel<P, C>,
        section: usize,
        parent: usize,
        position: usize,
        count: usize,
    ) -> Option<Transition> {
        let mut mutations = Vec::with_capacity(2);

        let start = match self.mode {
            ExpansionMode::Single => {
                // The model may have been expanded behind our back; collapse whatever it holds.
                self.expanded = None;
                mutations.extend(Self::collapse_expanded(model));
                // With nothing else expanded, a parent's flat row is its ordinal.
                parent
            }
            ExpansionMode::Multiple => position,
        };

        model
            .toggle_parent(ExpansionState::Expanded, section, parent)
            .ok()?;

        let rows = child_rows(start, count);
        mutations.push(RowMutation::Insert { section, rows });
        if self.mode == ExpansionMode::Single {
            self.expanded = Some(ExpandedParent {
                section,
                row: start,
                parent,
            });
        }

        adebug!(
            section,
            parent,
            start = rows.start_index,
            end = rows.end_index,
            "expand"
        );
        Some(Transition {
            section,
            parent,
            state: ExpansionState::Expanded,
            mutations,
            scroll_to: rows.last().map(|row| RowPath::new(section, row)),
        })
    }

    /// Collapses every expanded parent, returning one delete per parent, last row first.
    fn collapse_expanded<P, C>(model: &mut DataModel<P, C>) -> Vec<RowMutation> {
        // Pre-collapse ranges: compute every row before flipping any state.
        let targets: Vec<(usize, usize, usize)> = model
            .expanded_parents()
            .filter_map(|(section, parent)| {
                parent_row(model, section, parent).map(|row| (section, parent, row))
            })
            .collect();

        let mut out = Vec::with_capacity(targets.len());
        for &(section, parent, position) in targets.iter().rev() {
            let Ok(item) = model.item_mut(section, parent) else {
                continue;
            };
            item.state = ExpansionState::Collapsed;
            let rows = child_rows(position, item.children.len());
            if !rows.is_empty() {
                out.push(RowMutation::Delete { section, rows });
            }
        }
        out
    }
}
