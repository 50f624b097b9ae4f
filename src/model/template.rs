//! Property templates: the declared shape of a property.
//!
//! A template is shared by every instance of the property, so it is held
//! behind an [`Arc`] and never mutated once the decoder produced it.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

bitflags! {
    /// Property flags propagated from the declaring class (`CPF_*`).
    ///
    /// Only [`PropertyFlags::EXPORT_OBJECT`] influences T3D output; the rest
    /// are carried so decoded flag words survive unchanged.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
    pub struct PropertyFlags: u32 {
        const EDIT            = 0x0000_0001;
        const CONST           = 0x0000_0002;
        const INPUT           = 0x0000_0004;
        /// Referenced export objects are written out as their own actor block.
        const EXPORT_OBJECT   = 0x0000_0008;
        const OPTIONAL_PARM   = 0x0000_0010;
        const NET             = 0x0000_0020;
        const CONST_REF       = 0x0000_0040;
        const PARM            = 0x0000_0080;
        const OUT_PARM        = 0x0000_0100;
        const SKIP_PARM       = 0x0000_0200;
        const RETURN_PARM     = 0x0000_0400;
        const COERCE_PARM     = 0x0000_0800;
        const NATIVE          = 0x0000_1000;
        const TRANSIENT       = 0x0000_2000;
        const CONFIG          = 0x0000_4000;
        const LOCALIZED       = 0x0000_8000;
        const TRAVEL          = 0x0001_0000;
        const EDIT_CONST      = 0x0002_0000;
        const GLOBAL_CONFIG   = 0x0004_0000;
        const ON_DEMAND       = 0x0010_0000;
        const NEW             = 0x0020_0000;
        const NEED_CTOR_LINK  = 0x0040_0000;
        const NO_EXPORT       = 0x0080_0000;
        const EDIT_INLINE     = 0x0400_0000;
        const DEPRECATED      = 0x2000_0000;
    }
}

/// Enumeration referenced by an enum-typed byte property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumType {
    /// Enum name as declared in script.
    pub name: String,
    /// Value names, indexed by the stored byte.
    pub values: Vec<String>,
}

impl EnumType {
    /// Create an enum from its name and ordered value names.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Look up the value name for a stored index.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

/// Closed set of property kinds, with the metadata each kind needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKind {
    /// `ByteProperty`, optionally enum-typed.
    Byte {
        /// Enum the byte indexes into, if any.
        enum_type: Option<Arc<EnumType>>,
    },
    /// `IntProperty`.
    Int,
    /// `BoolProperty`.
    Bool,
    /// `FloatProperty`.
    Float,
    /// `ObjectProperty`: a package reference index.
    Object,
    /// `NameProperty`: a name-table index.
    Name,
    /// `ArrayProperty`: a dynamic list of `inner` values.
    Array {
        /// Template shared by every element.
        inner: Arc<PropertyTemplate>,
    },
    /// `StructProperty`.
    Struct {
        /// Declared struct name.
        struct_name: String,
    },
    /// `StrProperty`.
    Str,
    /// Any property class the T3D writer has no syntax for
    /// (`ClassProperty`, `DelegateProperty`, `PointerProperty`, ...).
    Other {
        /// Property class name as decoded.
        class: String,
    },
}

impl PropertyKind {
    /// Script-side class name of this kind.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Byte { .. } => "ByteProperty",
            Self::Int => "IntProperty",
            Self::Bool => "BoolProperty",
            Self::Float => "FloatProperty",
            Self::Object => "ObjectProperty",
            Self::Name => "NameProperty",
            Self::Array { .. } => "ArrayProperty",
            Self::Struct { .. } => "StructProperty",
            Self::Str => "StrProperty",
            Self::Other { class } => class,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Declared shape of a property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyTemplate {
    /// Kind and kind-specific metadata.
    pub kind: PropertyKind,
    /// Fixed repetition count. Always 1 for array-typed properties.
    #[cfg_attr(feature = "json", serde(default = "default_dimension"))]
    pub array_dimension: u32,
    /// Propagated property flags.
    #[cfg_attr(feature = "json", serde(default))]
    pub flags: PropertyFlags,
}

#[cfg(feature = "json")]
fn default_dimension() -> u32 {
    1
}

impl PropertyTemplate {
    /// Create a single-dimension template without flags.
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            array_dimension: 1,
            flags: PropertyFlags::empty(),
        }
    }

    /// Plain byte.
    pub fn byte() -> Self {
        Self::new(PropertyKind::Byte { enum_type: None })
    }

    /// Byte indexing into `enum_type`.
    pub fn enum_byte(enum_type: Arc<EnumType>) -> Self {
        Self::new(PropertyKind::Byte {
            enum_type: Some(enum_type),
        })
    }

    pub fn int() -> Self {
        Self::new(PropertyKind::Int)
    }

    pub fn bool() -> Self {
        Self::new(PropertyKind::Bool)
    }

    pub fn float() -> Self {
        Self::new(PropertyKind::Float)
    }

    pub fn object() -> Self {
        Self::new(PropertyKind::Object)
    }

    pub fn name() -> Self {
        Self::new(PropertyKind::Name)
    }

    pub fn str() -> Self {
        Self::new(PropertyKind::Str)
    }

    /// Dynamic array of `inner`.
    pub fn array(inner: impl Into<Arc<PropertyTemplate>>) -> Self {
        Self::new(PropertyKind::Array {
            inner: inner.into(),
        })
    }

    /// Struct named `struct_name`.
    pub fn structure(struct_name: impl Into<String>) -> Self {
        Self::new(PropertyKind::Struct {
            struct_name: struct_name.into(),
        })
    }

    /// Set the fixed repetition count.
    pub fn with_array_dimension(mut self, array_dimension: u32) -> Self {
        self.array_dimension = array_dimension;
        self
    }

    /// Add flags to the template.
    pub fn with_flags(mut self, flags: PropertyFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Shorthand for adding [`PropertyFlags::EXPORT_OBJECT`].
    pub fn exported(self) -> Self {
        self.with_flags(PropertyFlags::EXPORT_OBJECT)
    }

    /// Whether referenced export objects are inlined as their own block.
    pub fn is_export_object(&self) -> bool {
        self.flags.contains(PropertyFlags::EXPORT_OBJECT)
    }

    /// Check the shape invariants, returning the violated rule.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.array_dimension == 0 {
            return Err("array dimension must be at least 1");
        }
        if matches!(self.kind, PropertyKind::Array { .. }) && self.array_dimension != 1 {
            return Err("array-typed properties must have array dimension 1");
        }
        Ok(())
    }
}
