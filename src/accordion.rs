use alloc::vec::Vec;

use crate::expansion::ExpansionMachine;
use crate::translator;
use crate::{
    AccordionOptions, AccordionResult, DataModel, Diagnostic, ExpandedParent, ExpansionMode,
    ExpansionState, ParentLocation, RowKind, RowMutation, Transition,
};

/// A headless two-level accordion: the data model plus the expansion rules applied to it.
///
/// This type does not hold any UI objects. Adapters feed it taps (as flat row indexes) and apply
/// the returned [`Transition`]s to their list view.
#[derive(Clone, Debug)]
pub struct Accordion<P, C> {
    model: DataModel<P, C>,
    machine: ExpansionMachine,
    options: AccordionOptions,
    diagnostics: Vec<Diagnostic>,
}

impl<P, C> Accordion<P, C> {
    /// Creates an accordion that owns `model`.
    ///
    /// Inconsistent input is repaired rather than rejected; every repair is recorded as a
    /// [`Diagnostic`]:
    /// - a model without parents is kept as-is (`EmptyDataSource`)
    /// - in single mode, conflicting pre-expanded parents are collapsed
    ///   (`ConflictingExpansionState`)
    /// - an out-of-range `initially_expanded` falls back to the first parent
    ///   (`InvalidInitialExpansionIndex`)
    pub fn new(model: DataModel<P, C>, options: AccordionOptions) -> Self {
        adebug!(
            mode = ?options.mode,
            sections = model.number_of_sections(),
            parents = model.number_of_parents(),
            "Accordion::new"
        );
        let mut a = Self {
            model,
            machine: ExpansionMachine::new(options.mode),
            options,
            diagnostics: Vec::new(),
        };
        a.validate();
        a
    }

    fn validate(&mut self) {
        let parents = self.model.number_of_parents();
        if parents == 0 {
            awarn!("data source has no parents");
            self.diagnostics.push(Diagnostic::EmptyDataSource);
            return;
        }

        if let Some(d) = self.machine.sync(&mut self.model) {
            self.diagnostics.push(d);
        }

        let Some(index) = self.options.initially_expanded else {
            return;
        };
        let (section, parent) = match self.locate_parent(index) {
            Some(found) => found,
            None => {
                awarn!(index, parents, "initial expansion index out of range");
                self.diagnostics
                    .push(Diagnostic::InvalidInitialExpansionIndex { index, parents });
                match self.locate_parent(0) {
                    Some(found) => found,
                    None => return,
                }
            }
        };

        if self.options.mode == ExpansionMode::Single {
            if let Some(prev) = self.machine.expanded() {
                if (prev.section, prev.parent) != (section, parent) {
                    awarn!(
                        section = prev.section,
                        parent = prev.parent,
                        "pre-expanded parent conflicts with initial expansion"
                    );
                    self.diagnostics
                        .push(Diagnostic::ConflictingExpansionState { expanded: 1 });
                    self.model.collapse_all();
                }
            }
        }

        let has_children = self
            .model
            .item(section, parent)
            .is_some_and(|it| !it.children.is_empty());
        if has_children {
            if let Ok(item) = self.model.item_mut(section, parent) {
                item.state = ExpansionState::Expanded;
            }
        } else {
            adebug!(
                section,
                parent,
                "initial parent has no children; left collapsed"
            );
        }
        self.machine.sync(&mut self.model);
    }

    /// Maps a parent index counted across all sections to `(section, ordinal)`.
    fn locate_parent(&self, mut index: usize) -> Option<(usize, usize)> {
        for (section, s) in self.model.sections().iter().enumerate() {
            if index < s.items.len() {
                return Some((section, index));
            }
            index -= s.items.len();
        }
        None
    }

    pub fn options(&self) -> &AccordionOptions {
        &self.options
    }

    pub fn mode(&self) -> ExpansionMode {
        self.machine.mode()
    }

    pub fn model(&self) -> &DataModel<P, C> {
        &self.model
    }

    /// Direct access to the model.
    ///
    /// After changing expansion states or the parent lists, call [`Self::sync`] and reload the
    /// list view.
    pub fn model_mut(&mut self) -> &mut DataModel<P, C> {
        &mut self.model
    }

    pub fn into_model(self) -> DataModel<P, C> {
        self.model
    }

    /// Re-derives the expansion bookkeeping after direct model mutation.
    pub fn sync(&mut self) -> Option<Diagnostic> {
        let d = self.machine.sync(&mut self.model);
        if let Some(d) = d {
            self.diagnostics.push(d);
        }
        d
    }

    pub fn expanded(&self) -> Option<ExpandedParent> {
        self.machine.expanded()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        core::mem::take(&mut self.diagnostics)
    }

    pub fn number_of_sections(&self) -> usize {
        self.model.number_of_sections()
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        self.model.number_of_rows(section)
    }

    pub fn find_parent_of_cell(&self, section: usize, row: usize) -> Option<ParentLocation> {
        translator::find_parent_of_cell(&self.model, section, row)
    }

    pub fn resolve_row(&self, section: usize, row: usize) -> Option<RowKind> {
        translator::resolve_row(&self.model, section, row)
    }

    pub fn parent_row(&self, section: usize, parent: usize) -> Option<usize> {
        translator::parent_row(&self.model, section, parent)
    }

    /// Handles a tap on a flat row. See [`ExpansionMachine::tap`].
    pub fn tap(&mut self, section: usize, row: usize) -> Option<Transition> {
        self.machine.tap(&mut self.model, section, row)
    }

    pub fn expand(&mut self, section: usize, parent: usize) -> AccordionResult<Option<Transition>> {
        self.machine.expand(&mut self.model, section, parent)
    }

    pub fn collapse(
        &mut self,
        section: usize,
        parent: usize,
    ) -> AccordionResult<Option<Transition>> {
        self.machine.collapse(&mut self.model, section, parent)
    }

    pub fn collapse_all(&mut self) -> Vec<RowMutation> {
        self.machine.collapse_all(&mut self.model)
    }
}
