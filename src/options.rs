use crate::{ExpansionMode, RowAnimation};

/// Configuration for [`crate::Accordion`].
///
/// `mode` is fixed for the lifetime of the accordion. The remaining fields are read by the list
/// binding when it drives a list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccordionOptions {
    pub mode: ExpansionMode,

    /// Parent to expand on construction, counted across all sections in row order.
    ///
    /// An index past the last parent falls back to the first parent.
    pub initially_expanded: Option<usize>,

    /// Scroll to the last inserted child when an expansion pushes it out of view.
    pub scroll_on_expand: bool,

    pub insert_animation: RowAnimation,
    pub delete_animation: RowAnimation,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self::new(ExpansionMode::default())
    }
}

impl AccordionOptions {
    pub fn new(mode: ExpansionMode) -> Self {
        Self {
            mode,
            initially_expanded: None,
            scroll_on_expand: true,
            insert_animation: RowAnimation::Fade,
            delete_animation: RowAnimation::Fade,
        }
    }

    pub fn single() -> Self {
        Self::new(ExpansionMode::Single)
    }

    pub fn multiple() -> Self {
        Self::new(ExpansionMode::Multiple)
    }

    pub fn with_initially_expanded(mut self, index: Option<usize>) -> Self {
        self.initially_expanded = index;
        self
    }

    pub fn with_scroll_on_expand(mut self, scroll_on_expand: bool) -> Self {
        self.scroll_on_expand = scroll_on_expand;
        self
    }

    pub fn with_animations(mut self, insert: RowAnimation, delete: RowAnimation) -> Self {
        self.insert_animation = insert;
        self.delete_animation = delete;
        self
    }
}
