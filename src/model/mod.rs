//! Typed property tree consumed by the T3D writer.
//!
//! Everything here is a read-only snapshot produced by the package decoder:
//!
//! - [`PropertyTemplate`] - declared shape (kind, dimension, flags)
//! - [`Property`] / [`Value`] - decoded values per dimension index
//! - [`ObjectInstance`] - an export entry with its ordered properties
//! - [`ImportEntry`] / [`ExportEntry`] / [`EntryRef`] - package entries

mod object;
mod template;
mod value;

pub use object::{EntryId, EntryRef, ExportEntry, ImportEntry, ObjectInstance};
pub use template::{EnumType, PropertyFlags, PropertyKind, PropertyTemplate};
pub use value::{Property, Value};
