//! Struct and inline property rendering.

use crate::model::Property;
use crate::package::Package;

use super::error::RenderError;
use super::format::{label, Mode};
use super::writer::T3d;

impl<P: Package + ?Sized> T3d<'_, P> {
    /// Render struct members as `(a=1,b="x")`. Empty structs render `()`.
    pub fn render_struct(&self, members: &[Property]) -> Result<String, RenderError> {
        let members = members
            .iter()
            .map(|member| self.inline_property(member, false))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("({})", members.join(",")))
    }

    /// Render every dimension of a property in inline mode, comma-joined.
    ///
    /// With `value_only` the `name=` / `name[i]=` labels are omitted.
    pub fn inline_property(
        &self,
        property: &Property,
        value_only: bool,
    ) -> Result<String, RenderError> {
        let template = &property.template;
        template
            .check()
            .map_err(|reason| RenderError::InvalidTemplate {
                property: property.name.clone(),
                reason,
            })?;

        let dimension = template.array_dimension;
        let mut parts = Vec::with_capacity(dimension as usize);
        for i in 0..dimension as usize {
            let value = property.get_at(i).ok_or_else(|| RenderError::MissingValue {
                property: property.name.clone(),
                index: i,
            })?;
            let literal = self.format_value(&property.name, i, template, value, Mode::Inline)?;
            if value_only {
                parts.push(literal);
            } else {
                parts.push(format!("{}={}", label(&property.name, i, dimension), literal));
            }
        }
        Ok(parts.join(","))
    }
}
