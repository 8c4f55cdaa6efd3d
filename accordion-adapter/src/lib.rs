//! List view binding for the `accordion` crate.
//!
//! The `accordion` crate is UI-agnostic and owns the model and expansion rules. This crate
//! connects it to a list view:
//!
//! - [`ListView`]: the row insert/delete/scroll surface your UI implements
//! - [`CellFactory`]: builds parent and child cells
//! - [`AccordionDelegate`]: selection, height and scroll hooks
//! - [`Binding`]: answers the view's queries and applies taps as row updates
//!
//! No bindings for a specific UI framework are included.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binding;
mod delegate;
mod view;

#[cfg(test)]
mod tests;

pub use binding::Binding;
pub use delegate::{AccordionDelegate, NoopDelegate};
pub use view::{CellFactory, ListView};
