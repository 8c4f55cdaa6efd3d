use accordion::{
    Accordion, AccordionOptions, AccordionResult, DataModel, RowKind, RowMutation, RowPath,
    ScrollPosition, Transition,
};

use crate::{AccordionDelegate, CellFactory, ListView};

/// A framework-neutral binding between an [`Accordion`] and a list view.
///
/// This type does not hold any UI objects. The view, cell factory and delegate are passed to
/// each call, so nothing keeps a reference back to the binding.
///
/// - Pull queries (`number_of_rows`, `cell_for_row`, titles, heights) answer from the model.
/// - `did_select_row` runs the expansion rules and pushes row inserts/deletes to the view.
/// - `did_scroll` forwards to the delegate.
#[derive(Clone, Debug)]
pub struct Binding<P, C> {
    accordion: Accordion<P, C>,
}

impl<P, C> Binding<P, C> {
    pub fn new(model: DataModel<P, C>, options: AccordionOptions) -> Self {
        Self {
            accordion: Accordion::new(model, options),
        }
    }

    pub fn from_accordion(accordion: Accordion<P, C>) -> Self {
        Self { accordion }
    }

    pub fn accordion(&self) -> &Accordion<P, C> {
        &self.accordion
    }

    pub fn accordion_mut(&mut self) -> &mut Accordion<P, C> {
        &mut self.accordion
    }

    pub fn into_accordion(self) -> Accordion<P, C> {
        self.accordion
    }

    pub fn number_of_sections(&self) -> usize {
        self.accordion.number_of_sections()
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        self.accordion.number_of_rows(section)
    }

    pub fn title_for_header(&self, section: usize) -> Option<&str> {
        self.accordion.model().header_title(section)
    }

    pub fn title_for_footer(&self, section: usize) -> Option<&str> {
        self.accordion.model().footer_title(section)
    }

    /// Builds the cell shown at `path`.
    ///
    /// Returns `None` when `path` does not address a row.
    pub fn cell_for_row<V: ?Sized, F: CellFactory<P, C, V>>(
        &self,
        view: &mut V,
        cells: &mut F,
        path: RowPath,
    ) -> Option<F::Cell> {
        let model = self.accordion.model();
        match self.accordion.resolve_row(path.section, path.row)? {
            RowKind::Parent { parent } => {
                let item = model.item(path.section, parent)?;
                Some(cells.parent_cell(view, path, item))
            }
            RowKind::Child { parent, child } => {
                let item = model.item(path.section, parent)?;
                let c = item.children.get(child)?;
                Some(cells.child_cell(view, path, item, c))
            }
        }
    }

    /// Handles a row tap.
    ///
    /// Parent rows are toggled (the resulting rows are applied to `view`) before the delegate is
    /// told about the selection. Returns the applied transition, if any.
    pub fn did_select_row<V: ListView + ?Sized, D: AccordionDelegate<P, C> + ?Sized>(
        &mut self,
        view: &mut V,
        delegate: &mut D,
        path: RowPath,
    ) -> Option<Transition> {
        let loc = self.accordion.find_parent_of_cell(path.section, path.row)?;
        if !loc.is_parent {
            let model = self.accordion.model();
            let item = model.item(path.section, loc.parent)?;
            let child = model.child_at(path.section, path.row, loc)?;
            delegate.on_child_selected(path, item, child);
            return None;
        }

        let transition = self.accordion.tap(path.section, path.row);
        if let Some(t) = &transition {
            self.apply(view, t);
        }
        // The tapped parent keeps its ordinal; its row may have moved in single mode.
        if let Some(item) = self.accordion.model().item(path.section, loc.parent) {
            let row = self
                .accordion
                .parent_row(path.section, loc.parent)
                .unwrap_or(path.row);
            delegate.on_parent_selected(RowPath::new(path.section, row), item);
        }
        transition
    }

    /// Row height for `path`, as decided by the delegate.
    pub fn height_for_row<D: AccordionDelegate<P, C> + ?Sized>(
        &self,
        delegate: &D,
        path: RowPath,
    ) -> Option<u32> {
        let loc = self.accordion.find_parent_of_cell(path.section, path.row)?;
        let model = self.accordion.model();
        let item = model.item(path.section, loc.parent)?;
        if loc.is_parent {
            delegate.parent_row_height(path, item)
        } else {
            let child = model.child_at(path.section, path.row, loc)?;
            delegate.child_row_height(path, item, child)
        }
    }

    pub fn did_scroll<D: AccordionDelegate<P, C> + ?Sized>(&self, delegate: &mut D, offset: u64) {
        atrace!(offset, "did_scroll");
        delegate.on_scroll(offset);
    }

    /// Expands a parent by ordinal and applies the rows to `view`.
    pub fn expand<V: ListView + ?Sized>(
        &mut self,
        view: &mut V,
        section: usize,
        parent: usize,
    ) -> AccordionResult<Option<Transition>> {
        let transition = self.accordion.expand(section, parent)?;
        if let Some(t) = &transition {
            self.apply(view, t);
        }
        Ok(transition)
    }

    /// Collapses a parent by ordinal and applies the rows to `view`.
    pub fn collapse<V: ListView + ?Sized>(
        &mut self,
        view: &mut V,
        section: usize,
        parent: usize,
    ) -> AccordionResult<Option<Transition>> {
        let transition = self.accordion.collapse(section, parent)?;
        if let Some(t) = &transition {
            self.apply(view, t);
        }
        Ok(transition)
    }

    /// Collapses every parent and deletes their rows from `view`.
    pub fn collapse_all<V: ListView + ?Sized>(&mut self, view: &mut V) {
        let mutations = self.accordion.collapse_all();
        self.apply_mutations(view, &mutations);
    }

    /// Applies a transition: one batched update with its deletes and inserts, then a scroll to
    /// the last inserted row when it ended up outside the visible bounds.
    pub fn apply<V: ListView + ?Sized>(&self, view: &mut V, transition: &Transition) {
        self.apply_mutations(view, &transition.mutations);

        if !self.accordion.options().scroll_on_expand {
            return;
        }
        let Some(last) = transition.scroll_to else {
            return;
        };
        let rect = view.rect_for_row(last);
        if view.visible_bounds().contains(&rect) {
            return;
        }
        adebug!(
            section = last.section,
            row = last.row,
            "scroll to last inserted row"
        );
        view.scroll_to_row(last, ScrollPosition::Bottom, true);
    }

    fn apply_mutations<V: ListView + ?Sized>(&self, view: &mut V, mutations: &[RowMutation]) {
        if mutations.is_empty() {
            return;
        }
        let options = self.accordion.options();
        view.begin_updates();
        for m in mutations {
            match *m {
                RowMutation::Delete { section, rows } => {
                    atrace!(
                        section,
                        start = rows.start_index,
                        end = rows.end_index,
                        "delete_rows"
                    );
                    view.delete_rows(section, rows, options.delete_animation);
                }
                RowMutation::Insert { section, rows } => {
                    atrace!(
                        section,
                        start = rows.start_index,
                        end = rows.end_index,
                        "insert_rows"
                    );
                    view.insert_rows(section, rows, options.insert_animation);
                }
            }
        }
        view.end_updates();
    }
}
