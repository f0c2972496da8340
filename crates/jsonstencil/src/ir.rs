//! Intermediate representation for resolved class definitions.
//!
//! The input parser normalizes source text to this catalog before it is
//! passed to ordering and template synthesis. Object references are held
//! by name and are guaranteed resolved: every [`FieldKind::Object`] names
//! a [`TypeDef`] present in the same catalog.

use serde::{Deserialize, Serialize};

/// A complete catalog of resolved type definitions, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeCatalog {
    /// All type definitions in the catalog.
    pub types: Vec<TypeDef>,
}

/// A named type definition with its fields flattened.
///
/// Inherited fields are already merged in: a definition lists its own
/// fields first, then the base chain's, nearest base first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDef {
    /// Type name (e.g., "Person", "Address").
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

/// A single named field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Field name as declared in the source.
    pub name: String,
    /// The field's resolved shape.
    pub kind: FieldKind,
}

/// The resolved shape of a field, as far as template synthesis cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// A plain primitive (`int`, `double`, `bool`, `string`).
    Primitive(PrimitiveKind),
    /// A nullable value-type primitive (`int?`, `bool?`).
    Nullable(PrimitiveKind),
    /// An array or list, with its element shape.
    Collection(Box<FieldKind>),
    /// A reference to another definition in the catalog, by name.
    Object(String),
}

/// Primitive families that share a default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Integer types of any width or signedness.
    Int,
    /// Floating-point and decimal types.
    Float,
    /// Booleans.
    Bool,
    /// Strings.
    Str,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, def: TypeDef) {
        self.types.push(def);
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|def| def.name == name)
    }
}

impl TypeDef {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
