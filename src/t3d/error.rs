//! Error types for T3D rendering.

use thiserror::Error;

use crate::model::EntryId;

/// Error during T3D rendering.
///
/// Every variant is a data-integrity or schema violation: nothing is
/// retried and no partial output is returned.
///
/// # Example
///
/// ```ignore
/// match T3d::new(&pkg).render_export(id, 0) {
///     Ok(text) => println!("{text}"),
///     Err(RenderError::CyclicExport { entry, chain }) => {
///         eprintln!("{entry} exports itself via {}", chain.join(" -> "));
///     }
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Object reference index resolves to neither null, an import nor an export.
    #[error("unresolved object reference {index}")]
    UnresolvedReference {
        /// Raw reference index.
        index: i32,
    },

    /// Export identity not present in the package.
    #[error("unknown export {id}")]
    UnknownExport {
        /// Requested identity.
        id: EntryId,
    },

    /// Name index outside the name table.
    #[error("unresolved name reference {index}")]
    UnresolvedName {
        /// Raw name index.
        index: i32,
    },

    /// Export-flagged expansion revisited an entry already being expanded.
    #[error("cyclic export of '{entry}' ({})", .chain.join(" -> "))]
    CyclicExport {
        /// Full name of the revisited entry.
        entry: String,
        /// Full names from the outermost actor down to the revisit.
        chain: Vec<String>,
    },

    /// Property class the T3D format has no syntax for.
    #[error("property '{property}' has unsupported kind {kind}")]
    UnsupportedPropertyKind {
        /// Property name.
        property: String,
        /// Property class name.
        kind: String,
    },

    /// Decoded value does not match the template kind.
    #[error("property '{property}'[{index}]: expected {expected} value, got {found}")]
    ValueMismatch {
        /// Property name.
        property: String,
        /// Dimension or element index.
        index: usize,
        /// Kind required by the template.
        expected: &'static str,
        /// Kind actually decoded.
        found: &'static str,
    },

    /// No value decoded for a dimension index below `array_dimension`.
    #[error("property '{property}' has no value at index {index}")]
    MissingValue {
        /// Property name.
        property: String,
        /// Missing dimension index.
        index: usize,
    },

    /// Enum byte outside the enum's value table.
    #[error("property '{property}': value {index} out of range for enum {enum_name}")]
    EnumOutOfRange {
        /// Property name.
        property: String,
        /// Enum name.
        enum_name: String,
        /// Stored byte.
        index: u8,
    },

    /// Template violates its shape invariants.
    #[error("property '{property}': {reason}")]
    InvalidTemplate {
        /// Property name.
        property: String,
        /// Violated rule.
        reason: &'static str,
    },

    /// Export nesting deeper than the configured limit.
    #[error("export of '{entry}' exceeds nesting depth {limit}")]
    DepthLimit {
        /// Full name of the entry that would exceed the limit.
        entry: String,
        /// Configured maximum depth.
        limit: usize,
    },
}
