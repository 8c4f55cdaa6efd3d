use alloc::vec::Vec;

use crate::translator;
use crate::{AccordionError, AccordionResult, ExpansionState, Item, ParentLocation, Section};

/// The hierarchical data behind an accordion list: sections of parents, each owning its
/// children and expansion state.
///
/// Flat row numbering is scoped per section and restarts at 0.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataModel<P, C> {
    sections: Vec<Section<P, C>>,
}

impl<P, C> Default for DataModel<P, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, C> DataModel<P, C> {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub fn from_sections(sections: impl IntoIterator<Item = Section<P, C>>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// Builds a model with a single untitled section.
    pub fn from_items(items: impl IntoIterator<Item = Item<P, C>>) -> Self {
        Self {
            sections: alloc::vec![Section::new(items)],
        }
    }

    pub fn push_section(&mut self, section: Section<P, C>) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section<P, C>] {
        &self.sections
    }

    pub fn section(&self, section: usize) -> Option<&Section<P, C>> {
        self.sections.get(section)
    }

    pub(crate) fn items(&self, section: usize) -> &[Item<P, C>] {
        self.sections
            .get(section)
            .map(|s| s.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn number_of_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn number_of_parents(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn number_of_parents_in(&self, section: usize) -> usize {
        self.items(section).len()
    }

    pub fn number_of_expanded_parents(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|it| it.is_expanded())
            .count()
    }

    /// Iterates `(section, parent)` for every expanded parent, in row order.
    pub fn expanded_parents(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sections.iter().enumerate().flat_map(|(s, sec)| {
            sec.items
                .iter()
                .enumerate()
                .filter(|(_, it)| it.is_expanded())
                .map(move |(p, _)| (s, p))
        })
    }

    /// Number of flat rows in a section (parents plus children of expanded parents).
    ///
    /// Unknown sections have no rows.
    pub fn number_of_rows(&self, section: usize) -> usize {
        self.sections
            .get(section)
            .map(Section::number_of_rows)
            .unwrap_or(0)
    }

    pub fn number_of_rows_total(&self) -> usize {
        self.sections.iter().map(Section::number_of_rows).sum()
    }

    pub fn header_title(&self, section: usize) -> Option<&str> {
        self.sections.get(section)?.header.as_deref()
    }

    pub fn footer_title(&self, section: usize) -> Option<&str> {
        self.sections.get(section)?.footer.as_deref()
    }

    pub fn is_expanded(&self, section: usize, parent: usize) -> bool {
        self.item(section, parent).is_some_and(Item::is_expanded)
    }

    /// Collapses every parent. No row mutations are produced; call this before the list view
    /// is populated, or reload the view afterwards.
    pub fn collapse_all(&mut self) {
        for item in self.sections.iter_mut().flat_map(|s| s.items.iter_mut()) {
            item.state = ExpansionState::Collapsed;
        }
    }

    /// Sets the state of the parent at `parent` (an ordinal) in `section`.
    pub fn toggle_parent(
        &mut self,
        state: ExpansionState,
        section: usize,
        parent: usize,
    ) -> AccordionResult<()> {
        let item = self.item_mut(section, parent)?;
        item.state = state;
        Ok(())
    }

    /// Returns the parent addressed by its ordinal within the section.
    pub fn item(&self, section: usize, parent: usize) -> Option<&Item<P, C>> {
        self.sections.get(section)?.items.get(parent)
    }

    pub fn item_mut(&mut self, section: usize, parent: usize) -> AccordionResult<&mut Item<P, C>> {
        let sections = self.sections.len();
        let sec = self
            .sections
            .get_mut(section)
            .ok_or(AccordionError::SectionOutOfRange {
                section,
                len: sections,
            })?;
        let len = sec.items.len();
        sec.items
            .get_mut(parent)
            .ok_or(AccordionError::ParentOutOfRange {
                section,
                parent,
                len,
            })
    }

    /// Returns the parent whose current flat row is `row`.
    ///
    /// Child rows and rows past the end of the section yield `None`.
    pub fn item_at_row(&self, section: usize, row: usize) -> Option<&Item<P, C>> {
        let loc = translator::find_parent_of_cell(self, section, row)?;
        if !loc.is_parent {
            return None;
        }
        self.item(section, loc.parent)
    }

    /// Returns the child shown at flat `row`, given the owning parent's ordinal and flat row.
    ///
    /// Inconsistent inputs (row not after `position`, offset past the children) yield `None`.
    pub fn child_item(
        &self,
        section: usize,
        row: usize,
        parent: usize,
        position: usize,
    ) -> Option<&C> {
        let offset = row.checked_sub(position)?.checked_sub(1)?;
        self.item(section, parent)?.children.get(offset)
    }

    /// Same as [`Self::child_item`], taking the location returned by the translator.
    pub fn child_at(&self, section: usize, row: usize, loc: ParentLocation) -> Option<&C> {
        if loc.is_parent {
            return None;
        }
        self.child_item(section, row, loc.parent, loc.position)
    }
}
