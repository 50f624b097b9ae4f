//! In-memory package tables.

use std::sync::Arc;

use super::cache::ObjectCache;
use super::reference::ObjectReference;
use super::Package;
use crate::model::{EntryId, EntryRef, ExportEntry, ImportEntry, ObjectInstance, Property};
use crate::t3d::RenderError;

/// Export table slot: entry metadata plus its decoded properties.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
struct ExportSlot {
    #[cfg_attr(feature = "json", serde(flatten))]
    entry: Arc<ExportEntry>,
    #[cfg_attr(feature = "json", serde(default))]
    properties: Vec<Property>,
}

/// A decoded package held entirely in memory.
///
/// # Example
///
/// ```ignore
/// use unreal_t3d::prelude::*;
///
/// let mut pkg = MemoryPackage::new("MyMap");
/// let mesh = pkg.add_export(Some("StaticMesh"), "Cube");
/// let actor = pkg.add_export(Some("StaticMeshActor"), "SM1");
/// pkg.set_properties(actor, vec![
///     Property::new("Mesh", PropertyTemplate::object().exported())
///         .with_value(Value::Object(pkg.reference(mesh).unwrap())),
/// ]);
/// let text = T3d::new(&pkg).render_export(actor, 0)?;
/// ```
pub struct MemoryPackage {
    package_name: String,
    names: Vec<String>,
    imports: Vec<ImportEntry>,
    exports: Vec<ExportSlot>,
    cache: ObjectCache,
}

impl MemoryPackage {
    /// Create an empty package.
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            names: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
            cache: ObjectCache::new(),
        }
    }

    /// Package name used as the prefix of export full names.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Intern a name, returning its name-table index.
    pub fn intern_name(&mut self, name: impl AsRef<str>) -> i32 {
        let name = name.as_ref();
        let slot = match self.names.iter().position(|n| n == name) {
            Some(slot) => slot,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        };
        slot as i32
    }

    /// Add an import, returning its raw reference index.
    pub fn add_import(&mut self, class_name: impl Into<String>, full_name: impl Into<String>) -> i32 {
        self.imports.push(ImportEntry::new(class_name, full_name));
        ObjectReference::import_index(self.imports.len() - 1)
    }

    /// Add a top-level export with no properties.
    pub fn add_export(&mut self, class_name: Option<&str>, object_name: &str) -> EntryId {
        self.push_export(class_name, object_name, object_name.to_string())
    }

    /// Add an export nested inside `outer` (a group or owning object).
    pub fn add_child_export(
        &mut self,
        outer: EntryId,
        class_name: Option<&str>,
        object_name: &str,
    ) -> EntryId {
        let inner_full_name = match self.exports.get(outer.0 as usize) {
            Some(slot) => format!("{}.{}", slot.entry.inner_full_name, object_name),
            None => object_name.to_string(),
        };
        self.push_export(class_name, object_name, inner_full_name)
    }

    fn push_export(
        &mut self,
        class_name: Option<&str>,
        object_name: &str,
        inner_full_name: String,
    ) -> EntryId {
        let id = EntryId(self.exports.len() as u32);
        let entry = ExportEntry {
            id,
            class_name: class_name.map(str::to_string),
            object_name: object_name.to_string(),
            full_name: format!("{}.{}", self.package_name, inner_full_name),
            inner_full_name,
        };
        self.exports.push(ExportSlot {
            entry: Arc::new(entry),
            properties: Vec::new(),
        });
        id
    }

    /// Replace the properties of an export.
    ///
    /// Drops any cached instance so the next instantiation sees the change.
    pub fn set_properties(&mut self, id: EntryId, properties: Vec<Property>) {
        if let Some(slot) = self.exports.get_mut(id.0 as usize) {
            slot.properties = properties;
            self.cache.clear();
        }
    }

    /// Raw reference index for export `id`, `None` if `id` is not in this
    /// package.
    pub fn reference(&self, id: EntryId) -> Option<i32> {
        self.export_entry(id)?;
        ObjectReference::export_index(id)
    }

    /// All export entries in table order.
    pub fn exports(&self) -> impl Iterator<Item = &ExportEntry> {
        self.exports.iter().map(|slot| slot.entry.as_ref())
    }

    /// The instantiation cache.
    pub fn cache(&self) -> &ObjectCache {
        &self.cache
    }
}

impl Package for MemoryPackage {
    fn object_reference(&self, index: i32) -> Result<EntryRef<'_>, RenderError> {
        let resolved = match ObjectReference::decode(index) {
            ObjectReference::Null => Some(EntryRef::Null),
            ObjectReference::Export(slot) => self
                .exports
                .get(slot)
                .map(|s| EntryRef::Export(s.entry.as_ref())),
            ObjectReference::Import(slot) => self.imports.get(slot).map(EntryRef::Import),
        };
        resolved.ok_or(RenderError::UnresolvedReference { index })
    }

    fn name_reference(&self, index: i32) -> Result<&str, RenderError> {
        usize::try_from(index)
            .ok()
            .and_then(|slot| self.names.get(slot))
            .map(String::as_str)
            .ok_or(RenderError::UnresolvedName { index })
    }

    fn export_entry(&self, id: EntryId) -> Option<&ExportEntry> {
        self.exports.get(id.0 as usize).map(|slot| slot.entry.as_ref())
    }

    fn instantiate(&self, entry: &ExportEntry) -> Result<Arc<ObjectInstance>, RenderError> {
        let slot = self
            .exports
            .get(entry.id.0 as usize)
            .ok_or_else(|| RenderError::UnknownExport { id: entry.id })?;
        self.cache.get_or_create(entry.id, || {
            Ok(ObjectInstance::new(
                Arc::clone(&slot.entry),
                slot.properties.clone(),
            ))
        })
    }
}

// =============================================================================
// JSON snapshots
// =============================================================================

/// Error loading a package snapshot.
#[cfg(feature = "json")]
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Malformed JSON or a shape mismatch.
    #[error("invalid package snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// An export's `id` does not match its table slot.
    #[error("export at slot {slot} declares id {id}")]
    EntryIdMismatch {
        /// Table position.
        slot: usize,
        /// Declared identity.
        id: EntryId,
    },
}

#[cfg(feature = "json")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Snapshot {
    name: String,
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    imports: Vec<ImportEntry>,
    #[serde(default)]
    exports: Vec<ExportSlot>,
}

#[cfg(feature = "json")]
impl MemoryPackage {
    /// Load a package from a JSON snapshot.
    ///
    /// ```json
    /// {
    ///   "name": "MyMap",
    ///   "names": ["Default"],
    ///   "imports": [{"class_name": "Texture", "full_name": "Engine.Black"}],
    ///   "exports": [{
    ///     "id": 0, "class_name": "Light", "object_name": "Light0",
    ///     "full_name": "MyMap.Light0", "inner_full_name": "Light0",
    ///     "properties": [
    ///       {"name": "LightBrightness", "template": {"kind": "Float"}, "values": [{"Float": 64.0}]}
    ///     ]
    ///   }]
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        for (slot, export) in snapshot.exports.iter().enumerate() {
            if export.entry.id.0 as usize != slot {
                return Err(SnapshotError::EntryIdMismatch {
                    slot,
                    id: export.entry.id,
                });
            }
        }
        tracing::debug!(
            package = %snapshot.name,
            exports = snapshot.exports.len(),
            imports = snapshot.imports.len(),
            "loaded package snapshot"
        );
        Ok(Self {
            package_name: snapshot.name,
            names: snapshot.names,
            imports: snapshot.imports,
            exports: snapshot.exports,
            cache: ObjectCache::new(),
        })
    }

    /// Serialize the package tables (not the cache) to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        let snapshot = Snapshot {
            name: self.package_name.clone(),
            names: self.names.clone(),
            imports: self.imports.clone(),
            exports: self.exports.clone(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}
