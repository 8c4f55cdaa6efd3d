use alloc::vec::Vec;

/// Expansion state of a single parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpansionState {
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// How many parents may be expanded at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExpansionMode {
    /// At most one parent across the whole data source.
    #[default]
    Single,
    /// Any number of parents.
    Multiple,
}

/// A `(section, row)` address in the flat row space the list view sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowPath {
    pub section: usize,
    pub row: usize,
}

impl RowPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// A contiguous run of flat rows inside one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl RowRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.start_index && row < self.end_index
    }

    pub fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end_index - 1)
        }
    }

    pub fn indexes(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.indexes().collect()
    }
}

/// What a flat row resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowKind {
    Parent { parent: usize },
    Child { parent: usize, child: usize },
}

/// Result of resolving a flat row to its owning parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentLocation {
    /// Ordinal of the parent within its section.
    pub parent: usize,
    /// `true` when the row is the parent row itself.
    pub is_parent: bool,
    /// Flat row of the parent.
    pub position: usize,
}

/// The parent currently expanded in [`ExpansionMode::Single`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandedParent {
    pub section: usize,
    /// Flat row of the parent at the time it was expanded.
    pub row: usize,
    /// Ordinal of the parent within its section.
    pub parent: usize,
}

/// Visual transition hint passed through to the list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowAnimation {
    #[default]
    Fade,
    Top,
    Bottom,
    Automatic,
    None,
}

/// Where a scrolled-to row should end up inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPosition {
    Top,
    Middle,
    #[default]
    Bottom,
    None,
}

/// An extent along the scroll axis, used for row rects and the visible bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRect {
    pub start: u64,
    pub size: u32,
}

impl RowRect {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.size as u64)
    }

    pub fn contains(&self, other: &RowRect) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }
}

/// A single row mutation the list view must apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowMutation {
    /// Rows addressed in the pre-update row space.
    Delete { section: usize, rows: RowRange },
    /// Rows addressed in the post-update row space.
    Insert { section: usize, rows: RowRange },
}

impl RowMutation {
    pub fn section(&self) -> usize {
        match self {
            Self::Delete { section, .. } | Self::Insert { section, .. } => *section,
        }
    }

    pub fn rows(&self) -> RowRange {
        match self {
            Self::Delete { rows, .. } | Self::Insert { rows, .. } => *rows,
        }
    }

    /// Signed change this mutation applies to its section's row count.
    pub fn delta(&self) -> isize {
        match self {
            Self::Delete { rows, .. } => -(rows.len() as isize),
            Self::Insert { rows, .. } => rows.len() as isize,
        }
    }
}

/// Everything a single toggle changed, in the order the list view must apply it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub section: usize,
    pub parent: usize,
    /// State of the toggled parent after the transition.
    pub state: ExpansionState,
    pub mutations: Vec<RowMutation>,
    /// Last inserted row, set when the transition expanded a parent.
    pub scroll_to: Option<RowPath>,
}

impl Transition {
    pub fn deletions(&self) -> impl Iterator<Item = (usize, RowRange)> + '_ {
        self.mutations.iter().filter_map(|m| match *m {
            RowMutation::Delete { section, rows } => Some((section, rows)),
            RowMutation::Insert { .. } => None,
        })
    }

    pub fn insertions(&self) -> impl Iterator<Item = (usize, RowRange)> + '_ {
        self.mutations.iter().filter_map(|m| match *m {
            RowMutation::Insert { section, rows } => Some((section, rows)),
            RowMutation::Delete { .. } => None,
        })
    }
}
