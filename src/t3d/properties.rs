//! Property list decompilation.
//!
//! Walks an object's properties in declared order and produces one line
//! per dimension index (or per dynamic-array element):
//!
//! ```text
//! Tag=5
//! Slots[0]=1
//! Slots[1]=2
//! Points(0)=(X=0.000000,Y=0.000000)
//! Points(1)=(X=1.000000,Y=0.000000)
//! ```
//!
//! Export-flagged references to local exports are expanded on the way and
//! handed back as preceding actor blocks.

use crate::model::{ObjectInstance, Property, PropertyKind, PropertyTemplate, Value};
use crate::package::Package;

use super::error::RenderError;
use super::format::{label, Mode};
use super::policy::export_target;
use super::session::Session;
use super::writer::T3d;

/// Output of one property pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Property lines in declared order.
    pub lines: Vec<String>,
    /// Actor blocks of expanded sub-objects, in encounter order.
    pub preceding: Vec<String>,
}

impl Rendered {
    /// Property lines joined with `separator`.
    pub fn text(&self, separator: &str) -> String {
        self.lines.join(separator)
    }
}

impl<P: Package + ?Sized> T3d<'_, P> {
    /// Render the properties of `object` with lines at `indent`.
    ///
    /// Sub-object blocks in [`Rendered::preceding`] are rendered one level
    /// out, at the enclosing actor's indent.
    pub fn render_properties(
        &self,
        object: &ObjectInstance,
        indent: usize,
    ) -> Result<Rendered, RenderError> {
        let mut session = Session::new(self.config().max_depth);
        session.enter(&object.entry)?;
        self.decompile_properties(object, indent, &mut session)
    }

    pub(crate) fn decompile_properties(
        &self,
        object: &ObjectInstance,
        indent: usize,
        session: &mut Session,
    ) -> Result<Rendered, RenderError> {
        let block_indent = indent.saturating_sub(1);
        let mut out = Rendered::default();

        for property in &object.properties {
            let template = &property.template;
            template
                .check()
                .map_err(|reason| RenderError::InvalidTemplate {
                    property: property.name.clone(),
                    reason,
                })?;

            match &template.kind {
                PropertyKind::Array { inner } => {
                    let items = match value_at(property, 0)? {
                        Value::Array(items) => items,
                        other => {
                            return Err(RenderError::ValueMismatch {
                                property: property.name.clone(),
                                index: 0,
                                expected: "array",
                                found: other.type_name(),
                            });
                        }
                    };
                    for (j, item) in items.iter().enumerate() {
                        self.expand_reference(inner, item, block_indent, session, &mut out)?;
                        let literal =
                            self.format_value(&property.name, j, inner, item, Mode::Inline)?;
                        out.lines.push(format!("{}({})={}", property.name, j, literal));
                    }
                }
                _ => {
                    let dimension = template.array_dimension;
                    for i in 0..dimension as usize {
                        let value = value_at(property, i)?;
                        self.expand_reference(template, value, block_indent, session, &mut out)?;
                        let literal =
                            self.format_value(&property.name, i, template, value, Mode::Block)?;
                        out.lines
                            .push(format!("{}={}", label(&property.name, i, dimension), literal));
                    }
                }
            }
        }

        Ok(out)
    }

    /// Emit the actor block of an export-flagged reference, once per render.
    fn expand_reference(
        &self,
        template: &PropertyTemplate,
        value: &Value,
        indent: usize,
        session: &mut Session,
        out: &mut Rendered,
    ) -> Result<(), RenderError> {
        let (PropertyKind::Object, Value::Object(index)) = (&template.kind, value) else {
            return Ok(());
        };
        let entry = self.package().object_reference(*index)?;
        let Some(export) = export_target(entry, template) else {
            return Ok(());
        };
        if session.is_emitted(export.id) {
            tracing::debug!(entry = %export.full_name, "export already written, skipping duplicate block");
            return Ok(());
        }

        tracing::trace!(entry = %export.full_name, depth = session.depth(), "expanding exported object");
        let object = self.package().instantiate(export)?;
        let block = self.actor_block(&object, indent, session)?;
        out.preceding.push(block);
        Ok(())
    }
}

fn value_at(property: &Property, index: usize) -> Result<&Value, RenderError> {
    property.get_at(index).ok_or_else(|| RenderError::MissingValue {
        property: property.name.clone(),
        index,
    })
}
