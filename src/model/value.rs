//! Decoded property values.

use std::sync::Arc;

use super::template::PropertyTemplate;

/// One decoded value of a property.
///
/// Object and name values are still raw package indices; resolving them is
/// the job of the [`Package`](crate::package::Package) the renderer reads.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Byte(u8),
    Int(i32),
    Bool(bool),
    Float(f32),
    /// Raw object reference index.
    Object(i32),
    /// Raw name-table index.
    Name(i32),
    /// Elements of a dynamic array.
    Array(Vec<Value>),
    /// Struct members in declared order; `None` for an absent struct.
    Struct(Option<Vec<Property>>),
    Str(String),
}

impl Value {
    /// Short variant name, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Byte(_) => "byte",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Object(_) => "object",
            Self::Name(_) => "name",
            Self::Array(_) => "array",
            Self::Struct(_) => "struct",
            Self::Str(_) => "str",
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// A named property instance: a template plus one value per dimension index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub name: String,
    pub template: Arc<PropertyTemplate>,
    pub values: Vec<Value>,
}

impl Property {
    /// Create a property with no values yet.
    pub fn new(name: impl Into<String>, template: impl Into<Arc<PropertyTemplate>>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
            values: Vec::new(),
        }
    }

    /// Append the value for the next dimension index.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append values for consecutive dimension indices.
    pub fn with_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// Value at dimension index `i`.
    pub fn get_at(&self, i: usize) -> Option<&Value> {
        self.values.get(i)
    }
}
