//! Package entries and decoded object instances.

use std::fmt;
use std::sync::Arc;

use super::value::Property;

/// Identity of an export entry within its package (its export-table slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to an object defined in another package.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportEntry {
    pub class_name: String,
    pub full_name: String,
}

impl ImportEntry {
    pub fn new(class_name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            full_name: full_name.into(),
        }
    }
}

/// Object defined in this package.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ExportEntry {
    pub id: EntryId,
    /// Class name, `None` when the entry is itself a class.
    #[cfg_attr(feature = "json", serde(default))]
    pub class_name: Option<String>,
    /// Short object name.
    pub object_name: String,
    /// Name qualified with the package name.
    pub full_name: String,
    /// Name qualified with its outers, without the package name.
    pub inner_full_name: String,
}

impl ExportEntry {
    /// Class name for T3D output, `Class` when unset.
    pub fn class_or_default(&self) -> &str {
        self.class_name.as_deref().unwrap_or("Class")
    }
}

/// Resolved object reference: the three cases a reference index can denote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef<'a> {
    Null,
    Import(&'a ImportEntry),
    Export(&'a ExportEntry),
}

/// Decoded object: its entry plus properties in declared order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInstance {
    pub entry: Arc<ExportEntry>,
    pub properties: Vec<Property>,
}

impl ObjectInstance {
    pub fn new(entry: impl Into<Arc<ExportEntry>>, properties: Vec<Property>) -> Self {
        Self {
            entry: entry.into(),
            properties,
        }
    }
}
