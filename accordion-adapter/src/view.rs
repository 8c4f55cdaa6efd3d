use accordion::{Item, RowAnimation, RowPath, RowRange, RowRect, ScrollPosition};

/// The list view surface an adapter drives.
///
/// Implemented by the embedding UI layer. Rows are addressed per section, in the flat row
/// space. Deletions inside a `begin_updates`/`end_updates` bracket are given in pre-update
/// indexes, insertions in post-update indexes.
pub trait ListView {
    fn begin_updates(&mut self) {}

    fn end_updates(&mut self) {}

    fn insert_rows(&mut self, section: usize, rows: RowRange, animation: RowAnimation);

    fn delete_rows(&mut self, section: usize, rows: RowRange, animation: RowAnimation);

    /// Extent of a row along the scroll axis.
    fn rect_for_row(&self, path: RowPath) -> RowRect;

    /// Currently visible extent along the scroll axis.
    fn visible_bounds(&self) -> RowRect;

    fn scroll_to_row(&mut self, path: RowPath, position: ScrollPosition, animated: bool);
}

/// Builds cells for parent and child rows.
///
/// The view is passed in so implementations can reuse cells the view keeps around.
pub trait CellFactory<P, C, V: ?Sized> {
    type Cell;

    fn parent_cell(&mut self, view: &mut V, path: RowPath, item: &Item<P, C>) -> Self::Cell;

    fn child_cell(
        &mut self,
        view: &mut V,
        path: RowPath,
        parent: &Item<P, C>,
        child: &C,
    ) -> Self::Cell;
}
