//! Type-dispatched literal formatting.
//!
//! Renders one value of one property kind. Block and inline mode only
//! differ for object references to non-flagged exports:
//!
//! ```text
//! Block:  StaticMesh'Group.Rock'   (inner full name)
//! Inline: StaticMesh'Rock'         (short name)
//! ```
//!
//! Labels (`name=`, `name[i]=`, `name(j)=`) are added by the callers.

use crate::model::{EntryRef, PropertyKind, PropertyTemplate, Value};
use crate::package::Package;

use super::error::RenderError;
use super::writer::T3d;

/// Rendering context of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Top-level property line inside an actor block.
    Block,
    /// Element of a struct or array literal.
    Inline,
}

/// Left-hand label of a property line, indexed only for multi-dimension
/// properties.
pub fn label(name: &str, index: usize, array_dimension: u32) -> String {
    if array_dimension > 1 {
        format!("{name}[{index}]")
    } else {
        name.to_string()
    }
}

/// Format a float with exactly six fractional digits.
///
/// Rounds half away from zero on the exact binary value, independent of
/// host locale. Non-finite values print as `NaN`, `Infinity`, `-Infinity`.
pub fn format_float(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let s = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return s.to_string();
    }

    // Every f32 has a finite decimal expansion of at most 149 fractional digits.
    let exact = format!("{:.149}", f64::from(value).abs());
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(6))
        .collect();
    if frac.as_bytes().get(6).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - 6;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| d as char));
    out.push('.');
    out.extend(digits[split..].iter().map(|&d| d as char));
    out
}

/// Add one unit in the last place of an ASCII decimal digit string.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Format a resolved object reference.
pub fn format_reference(entry: EntryRef<'_>, template: &PropertyTemplate, mode: Mode) -> String {
    match entry {
        EntryRef::Null => "None".to_string(),
        EntryRef::Import(import) => format!("{}'{}'", import.class_name, import.full_name),
        EntryRef::Export(export) if template.is_export_object() => {
            format!("\"{}\"", export.object_name)
        }
        EntryRef::Export(export) => {
            let name = match mode {
                Mode::Block => &export.inner_full_name,
                Mode::Inline => &export.object_name,
            };
            format!("{}'{}'", export.class_or_default(), name)
        }
    }
}

fn mismatch(property: &str, index: usize, expected: &'static str, found: &Value) -> RenderError {
    RenderError::ValueMismatch {
        property: property.to_string(),
        index,
        expected,
        found: found.type_name(),
    }
}

impl<P: Package + ?Sized> T3d<'_, P> {
    /// Render one value of `template` without its label.
    ///
    /// `property` and `index` only feed error reports.
    pub fn format_value(
        &self,
        property: &str,
        index: usize,
        template: &PropertyTemplate,
        value: &Value,
        mode: Mode,
    ) -> Result<String, RenderError> {
        match (&template.kind, value) {
            (PropertyKind::Byte { enum_type: Some(en) }, Value::Byte(b)) => en
                .value(usize::from(*b))
                .map(str::to_string)
                .ok_or_else(|| RenderError::EnumOutOfRange {
                    property: property.to_string(),
                    enum_name: en.name.clone(),
                    index: *b,
                }),
            (PropertyKind::Byte { enum_type: None }, Value::Byte(b)) => Ok(b.to_string()),
            (PropertyKind::Int, Value::Int(v)) => Ok(v.to_string()),
            (PropertyKind::Bool, Value::Bool(v)) => Ok(v.to_string()),
            (PropertyKind::Float, Value::Float(v)) => Ok(format_float(*v)),
            (PropertyKind::Object, Value::Object(reference)) => {
                let entry = self.package().object_reference(*reference)?;
                Ok(format_reference(entry, template, mode))
            }
            (PropertyKind::Name, Value::Name(name)) => {
                Ok(format!("'{}'", self.package().name_reference(*name)?))
            }
            (PropertyKind::Array { inner }, Value::Array(items)) => {
                let items = items
                    .iter()
                    .enumerate()
                    .map(|(j, item)| self.format_value(property, j, inner, item, Mode::Inline))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("({})", items.join(",")))
            }
            (PropertyKind::Struct { .. }, Value::Struct(None)) => Ok("None".to_string()),
            (PropertyKind::Struct { .. }, Value::Struct(Some(members))) => {
                self.render_struct(members)
            }
            (PropertyKind::Str, Value::Str(s)) => Ok(format!("\"{s}\"")),
            (PropertyKind::Other { class }, _) => Err(RenderError::UnsupportedPropertyKind {
                property: property.to_string(),
                kind: class.clone(),
            }),
            (PropertyKind::Byte { .. }, v) => Err(mismatch(property, index, "byte", v)),
            (PropertyKind::Int, v) => Err(mismatch(property, index, "int", v)),
            (PropertyKind::Bool, v) => Err(mismatch(property, index, "bool", v)),
            (PropertyKind::Float, v) => Err(mismatch(property, index, "float", v)),
            (PropertyKind::Object, v) => Err(mismatch(property, index, "object", v)),
            (PropertyKind::Name, v) => Err(mismatch(property, index, "name", v)),
            (PropertyKind::Array { .. }, v) => Err(mismatch(property, index, "array", v)),
            (PropertyKind::Struct { .. }, v) => Err(mismatch(property, index, "struct", v)),
            (PropertyKind::Str, v) => Err(mismatch(property, index, "str", v)),
        }
    }
}
