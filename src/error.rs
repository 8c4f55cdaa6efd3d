//! Error and diagnostic types.

use thiserror::Error;

/// Errors returned by operations that address a parent directly.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccordionError {
    /// The section index does not exist.
    #[error("section {section} out of range (sections: {len})")]
    SectionOutOfRange { section: usize, len: usize },

    /// The parent ordinal does not exist in the section.
    #[error("parent {parent} out of range in section {section} (parents: {len})")]
    ParentOutOfRange {
        section: usize,
        parent: usize,
        len: usize,
    },
}

/// Result type for accordion operations.
pub type AccordionResult<T> = Result<T, AccordionError>;

/// A condition detected while setting up an accordion and recovered from locally.
///
/// These never fail construction. They are logged (with `feature = "tracing"`) and kept on the
/// [`crate::Accordion`] so callers can inspect them.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// The data source has no parents; nothing will be displayed.
    #[error("data source has no parents")]
    EmptyDataSource,

    /// The initially expanded index does not name a parent; the first parent was used instead.
    #[error("initial expansion index {index} out of range (parents: {parents}); using 0")]
    InvalidInitialExpansionIndex { index: usize, parents: usize },

    /// Several parents arrived expanded in single mode; all were collapsed.
    #[error("{expanded} parents arrived expanded in single mode; collapsed all")]
    ConflictingExpansionState { expanded: usize },
}
