//! A headless expand/collapse engine for two-level accordion lists.
//!
//! For driving a concrete list view (row insert/delete, cells, selection hooks), see the
//! `accordion-adapter` crate.
//!
//! This crate holds the parts with actual logic:
//! - a hierarchical data model of sections, parents and children
//! - translation between flat row indexes and parent/child positions
//! - the expansion rules for single and multiple mode, producing row mutations
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to:
//! - ask for row counts per section and resolve rows with [`Accordion::resolve_row`]
//! - forward taps with [`Accordion::tap`]
//! - apply the returned [`Transition`] (deletes, then inserts) to its list view
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod accordion;
mod error;
mod expansion;
mod item;
mod model;
mod options;
pub mod translator;
mod types;


pub use accordion::Accordion;
pub use error::{AccordionError, AccordionResult, Diagnostic};
pub use expansion::ExpansionMachine;
pub use item::{Item, Section};
pub use model::DataModel;
pub use options::AccordionOptions;
pub use types::{
    ExpandedParent, ExpansionMode, ExpansionState, ParentLocation, RowAnimation, RowKind,
    RowMutation, RowPath, RowRange, RowRect, ScrollPosition, Transition,
};
