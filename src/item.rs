use alloc::string::String;
use alloc::vec::Vec;

use crate::ExpansionState;

/// A collapsible parent row and the children it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<P, C> {
    pub value: P,
    pub children: Vec<C>,
    pub state: ExpansionState,
}

impl<P, C> Item<P, C> {
    pub fn new(value: P) -> Self {
        Self {
            value,
            children: Vec::new(),
            state: ExpansionState::Collapsed,
        }
    }

    pub fn with_children(value: P, children: impl IntoIterator<Item = C>) -> Self {
        Self {
            value,
            children: children.into_iter().collect(),
            state: ExpansionState::Collapsed,
        }
    }

    /// Marks the item as expanded before it is handed to an accordion.
    pub fn expanded(mut self) -> Self {
        self.state = ExpansionState::Expanded;
        self
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn number_of_children(&self) -> usize {
        self.children.len()
    }

    /// Rows this item occupies in the flat row space: itself plus its visible children.
    pub fn visible_rows(&self) -> usize {
        if self.is_expanded() {
            1 + self.children.len()
        } else {
            1
        }
    }
}

/// An ordered group of parents with its own row numbering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section<P, C> {
    pub header: Option<String>,
    pub footer: Option<String>,
    pub items: Vec<Item<P, C>>,
}

impl<P, C> Default for Section<P, C> {
    fn default() -> Self {
        Self {
            header: None,
            footer: None,
            items: Vec::new(),
        }
    }
}

impl<P, C> Section<P, C> {
    pub fn new(items: impl IntoIterator<Item = Item<P, C>>) -> Self {
        Self {
            header: None,
            footer: None,
            items: items.into_iter().collect(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn push(&mut self, item: Item<P, C>) {
        self.items.push(item);
    }

    pub fn number_of_rows(&self) -> usize {
        self.items.iter().map(Item::visible_rows).sum()
    }
}
