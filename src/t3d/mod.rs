//! T3D actor text generation.
//!
//! Converts decoded objects into `Begin Actor ... End Actor` blocks for the
//! level editor's importer.
//!
//! # Modules
//!
//! - [`format`] - per-kind literal formatting (block and inline mode)
//! - `structs` - struct literals and inline property lists
//! - [`policy`] - which references expand into their own actor block
//! - `properties` - property list decompilation
//! - `actor` - actor block emission and document rendering
//! - `error` - error types

mod actor;
mod error;
pub mod format;
pub mod policy;
mod properties;
mod session;
mod structs;
mod writer;

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod scenarios;

pub use error::RenderError;
pub use format::{format_float, format_reference, Mode};
pub use policy::needs_export;
pub use properties::Rendered;
pub use writer::T3d;
