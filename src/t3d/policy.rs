//! Export-necessity policy.

use crate::model::{EntryRef, ExportEntry, PropertyTemplate};

/// Whether a referenced entry must be written out as its own actor block.
///
/// Only locally defined exports referenced through a template carrying
/// [`EXPORT_OBJECT`](crate::model::PropertyFlags::EXPORT_OBJECT) qualify.
pub fn needs_export(entry: &EntryRef<'_>, template: &PropertyTemplate) -> bool {
    export_target(*entry, template).is_some()
}

/// The export to expand, if [`needs_export`] holds.
pub fn export_target<'a>(
    entry: EntryRef<'a>,
    template: &PropertyTemplate,
) -> Option<&'a ExportEntry> {
    match entry {
        EntryRef::Export(export) if template.is_export_object() => Some(export),
        _ => None,
    }
}
