//! # unreal-t3d
//!
//! Renders decoded Unreal package objects as T3D actor text, the format the
//! level editor imports with *Edit → Paste* or *File → Import*.
//!
//! The crate never parses binary data. A package decoder hands it a typed
//! property tree through the [`Package`] trait, and the writer produces
//! deterministic text:
//!
//! - **Type-dispatched literals**: bytes, enums, ints, bools, floats
//!   (exactly six fractional digits), object and name references, dynamic
//!   arrays, structs and strings
//! - **Inline sub-objects**: references through an export-flagged property
//!   are written as their own actor block ahead of the referencing actor
//! - **Fail-closed recursion**: reference cycles among export-flagged
//!   objects are reported instead of looping
//!
//! ## Quick Start
//!
//! ```ignore
//! use unreal_t3d::prelude::*;
//!
//! let mut pkg = MemoryPackage::new("MyMap");
//! let cube = pkg.add_export(Some("StaticMesh"), "Cube");
//! let actor = pkg.add_export(Some("StaticMeshActor"), "SM1");
//! let cube_ref = pkg.reference(cube).unwrap();
//! pkg.set_properties(actor, vec![
//!     Property::new("Tag", PropertyTemplate::int()).with_value(5),
//!     Property::new("Mesh", PropertyTemplate::object().exported())
//!         .with_value(Value::Object(cube_ref)),
//! ]);
//!
//! let text = T3d::new(&pkg).render_export(actor, 0)?;
//! // Begin Actor Class=StaticMesh Name=Cube
//! // End Actor
//! // Begin Actor Class=StaticMeshActor Name=SM1
//! //   Tag=5
//! //   Mesh="Cube"
//! // End Actor
//! ```
//!
//! ## Modules
//!
//! - [`model`]: typed property tree
//! - [`package`]: package collaborator trait, reference decoding, object cache
//! - [`t3d`]: the writer
//! - [`config`]: indentation, line endings, depth limit

#![forbid(unsafe_code)]

#[cfg(feature = "batch")]
mod batch;
pub mod config;
pub mod model;
pub mod package;
pub mod t3d;

// =============================================================================
// Prelude - import commonly used items with a single `use`
// =============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use unreal_t3d::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{Config, ConfigBuilder, LineEnding};
    pub use crate::model::{
        EntryId, EntryRef, EnumType, ExportEntry, ImportEntry, ObjectInstance, Property,
        PropertyFlags, PropertyKind, PropertyTemplate, Value,
    };
    pub use crate::package::{MemoryPackage, Package};
    pub use crate::t3d::{RenderError, Rendered, T3d};
}

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Config, ConfigBuilder, LineEnding};
pub use package::{MemoryPackage, ObjectCache, ObjectReference, Package};
pub use t3d::{needs_export, RenderError, Rendered, T3d};
