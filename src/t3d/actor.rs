//! Actor block emission.
//!
//! ```text
//! Begin Actor Class=StaticMesh Name=Cube        <- preceding sibling block
//! End Actor
//! Begin Actor Class=StaticMeshActor Name=SM1
//!   Tag=5
//!   Mesh="Cube"
//! End Actor
//! ```
//!
//! The first line carries no indentation; the caller positions it.

use crate::model::{EntryId, ExportEntry, ObjectInstance};
use crate::package::Package;

use super::error::RenderError;
use super::session::Session;
use super::writer::T3d;

impl<P: Package + ?Sized> T3d<'_, P> {
    /// Render `object` as an actor block at `indent`, preceded by the blocks
    /// of every export-flagged sub-object it references.
    pub fn render_actor(&self, object: &ObjectInstance, indent: usize) -> Result<String, RenderError> {
        tracing::debug!(entry = %object.entry.full_name, "rendering actor");
        let mut session = Session::new(self.config().max_depth);
        let text = self.actor_block(object, indent, &mut session)?;
        tracing::debug!(entry = %object.entry.full_name, bytes = text.len(), "rendered actor");
        Ok(text)
    }

    /// Instantiate `entry` through the package and render it.
    pub fn render_entry(&self, entry: &ExportEntry, indent: usize) -> Result<String, RenderError> {
        let object = self.package().instantiate(entry)?;
        self.render_actor(&object, indent)
    }

    /// Render the export with identity `id`.
    pub fn render_export(&self, id: EntryId, indent: usize) -> Result<String, RenderError> {
        let entry = self
            .package()
            .export_entry(id)
            .ok_or_else(|| RenderError::UnknownExport { id })?;
        self.render_entry(entry, indent)
    }

    /// Render several top-level exports into one document.
    ///
    /// Each export is an independent render: a sub-object shared by two of
    /// them is written once per export that references it.
    pub fn render_document(&self, ids: &[EntryId]) -> Result<String, RenderError> {
        let blocks = ids
            .iter()
            .map(|id| self.render_export(*id, 0))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks.join(self.config().line_ending.as_str()))
    }

    pub(crate) fn actor_block(
        &self,
        object: &ObjectInstance,
        indent: usize,
        session: &mut Session,
    ) -> Result<String, RenderError> {
        session.enter(&object.entry)?;
        let rendered = self.decompile_properties(object, indent + 1, session)?;
        session.leave();

        let entry = &object.entry;
        let mut block = format!(
            "Begin Actor Class={} Name={}",
            entry.class_or_default(),
            entry.object_name
        );
        if !rendered.lines.is_empty() {
            let separator = self.new_line(indent + 1);
            block.push_str(&separator);
            block.push_str(&rendered.text(&separator));
        }
        block.push_str(&self.new_line(indent));
        block.push_str("End Actor");

        let mut blocks = rendered.preceding;
        blocks.push(block);
        Ok(blocks.join(&self.new_line(indent)))
    }
}
