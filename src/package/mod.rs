//! Package collaborator interface.
//!
//! The T3D writer never parses binary data. It reads a decoded package
//! through the [`Package`] trait:
//!
//! - [`Package::object_reference`] - raw reference index → [`EntryRef`]
//! - [`Package::name_reference`] - raw name index → string
//! - [`Package::instantiate`] - export entry → decoded [`ObjectInstance`]
//!
//! [`MemoryPackage`] is an in-memory implementation for callers that already
//! hold decoded tables.

mod cache;
mod memory;
mod reference;

use std::sync::Arc;

use crate::model::{EntryId, EntryRef, ExportEntry, ObjectInstance};
use crate::t3d::RenderError;

pub use cache::ObjectCache;
#[cfg(feature = "json")]
pub use memory::SnapshotError;
pub use memory::MemoryPackage;
pub use reference::ObjectReference;

/// Read access to a decoded package.
///
/// Implementations must return the same instance from [`instantiate`]
/// for the same entry for as long as a render is running.
///
/// [`instantiate`]: Package::instantiate
pub trait Package {
    /// Resolve a raw object reference index.
    ///
    /// Fails with [`RenderError::UnresolvedReference`] when the index points
    /// outside both tables.
    fn object_reference(&self, index: i32) -> Result<EntryRef<'_>, RenderError>;

    /// Resolve a raw name-table index.
    fn name_reference(&self, index: i32) -> Result<&str, RenderError>;

    /// Look up an export entry by identity.
    fn export_entry(&self, id: EntryId) -> Option<&ExportEntry>;

    /// Decode (or fetch from cache) the object behind an export entry.
    fn instantiate(&self, entry: &ExportEntry) -> Result<Arc<ObjectInstance>, RenderError>;
}
