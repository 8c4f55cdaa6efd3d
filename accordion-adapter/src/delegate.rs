use accordion::{Item, RowPath};

/// Hooks the embedding application implements to observe selection and scrolling and to size
/// rows.
///
/// Every method has a no-op default. Height hooks return `None` to let the list view pick its
/// own row height.
pub trait AccordionDelegate<P, C> {
    /// Called after a parent row was tapped and its expansion (if any) was applied.
    fn on_parent_selected(&mut self, _path: RowPath, _item: &Item<P, C>) {}

    fn on_child_selected(&mut self, _path: RowPath, _parent: &Item<P, C>, _child: &C) {}

    fn parent_row_height(&self, _path: RowPath, _item: &Item<P, C>) -> Option<u32> {
        None
    }

    fn child_row_height(&self, _path: RowPath, _parent: &Item<P, C>, _child: &C) -> Option<u32> {
        None
    }

    /// Forwarded scroll offset changes, unmodified.
    fn on_scroll(&mut self, _offset: u64) {}
}

/// A delegate that ignores every hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopDelegate;

impl<P, C> AccordionDelegate<P, C> for NoopDelegate {}
