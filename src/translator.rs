//! Mapping between flat rows and the parent/child hierarchy.
//!
//! Every lookup is a linear scan over the parents of one section (`O(parents)`). This is the
//! operation that limits scalability; typical accordion lists are small enough for it not to
//! matter.

use crate::{DataModel, ParentLocation, RowKind, RowRange};

/// Resolves a flat row to the parent that owns it.
///
/// The rows `[position, position + visible_children]` belong to the parent at `position`. A row
/// equal to a parent's `position` is always that parent, never a child of the previous one.
///
/// Returns `None` for rows past the end of the section and for unknown sections.
pub fn find_parent_of_cell<P, C>(
    model: &DataModel<P, C>,
    section: usize,
    row: usize,
) -> Option<ParentLocation> {
    let mut position = 0usize;
    for (parent, item) in model.items(section).iter().enumerate() {
        let span = item.visible_rows();
        if row < position + span {
            return Some(ParentLocation {
                parent,
                is_parent: row == position,
                position,
            });
        }
        position += span;
    }
    atrace!(
        section,
        row,
        rows = position,
        "find_parent_of_cell: row out of range"
    );
    None
}

/// Rows occupied by `count` children of a parent whose row is `start`.
pub fn child_rows(start: usize, count: usize) -> RowRange {
    RowRange {
        start_index: start + 1,
        end_index: start + 1 + count,
    }
}

/// Flat row of the parent with ordinal `parent`, given the current expansion state.
pub fn parent_row<P, C>(model: &DataModel<P, C>, section: usize, parent: usize) -> Option<usize> {
    let items = model.items(section);
    if parent >= items.len() {
        return None;
    }
    Some(items[..parent].iter().map(|it| it.visible_rows()).sum())
}

/// Resolves a flat row to a parent or a `(parent, child)` pair.
pub fn resolve_row<P, C>(model: &DataModel<P, C>, section: usize, row: usize) -> Option<RowKind> {
    let loc = find_parent_of_cell(model, section, row)?;
    if loc.is_parent {
        Some(RowKind::Parent { parent: loc.parent })
    } else {
        Some(RowKind::Child {
            parent: loc.parent,
            child: row - loc.position - 1,
        })
    }
}

/// Walks the flat rows of a section in order without allocating.
pub fn for_each_row<P, C>(model: &DataModel<P, C>, section: usize, mut f: impl FnMut(RowKind)) {
    for (parent, item) in model.items(section).iter().enumerate() {
        f(RowKind::Parent { parent });
        if item.is_expanded() {
            for child in 0..item.children.len() {
                f(RowKind::Child { parent, child });
            }
        }
    }
}
