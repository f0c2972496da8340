//! Template synthesis: the default-instance JSON object for a catalog.
//!
//! Definitions are merged in processing order into one tree. Every field
//! writes at most once per conversion: a set of formatted keys is shared
//! across all types and all nesting levels, and later fields that format
//! to an already-claimed key are skipped wherever they appear.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::ir::{FieldKind, PrimitiveKind, TypeCatalog, TypeDef};

/// Builds the template tree for `ordered` definitions.
///
/// `catalog` backs object-reference lookups and must be the catalog the
/// ordering was computed from. `format_key` is applied to each field name
/// exactly once; the formatted key is also the duplicate-suppression
/// identity, so names that collide after formatting keep the first value.
pub fn synthesize<F>(
    ordered: &[&TypeDef],
    catalog: &TypeCatalog,
    format_key: F,
) -> Map<String, Value>
where
    F: Fn(&str) -> String,
{
    let mut claimed = HashSet::new();
    let mut tree = Map::new();
    for def in ordered {
        merge_fields(def, catalog, &mut tree, &mut claimed, &format_key);
    }
    tree
}

/// Merges one definition's fields into `target`, claiming keys as it goes.
///
/// The key is claimed *before* the value is computed, so recursion through
/// reference cycles bottoms out: by the time a definition is re-entered,
/// the field that led there is already claimed and is skipped.
fn merge_fields<F>(
    def: &TypeDef,
    catalog: &TypeCatalog,
    target: &mut Map<String, Value>,
    claimed: &mut HashSet<String>,
    format_key: &F,
) where
    F: Fn(&str) -> String,
{
    for field in &def.fields {
        let key = format_key(&field.name);
        if !claimed.insert(key.clone()) {
            continue;
        }
        let value = default_value(&field.kind, catalog, claimed, format_key);
        target.insert(key, value);
    }
}

fn default_value<F>(
    kind: &FieldKind,
    catalog: &TypeCatalog,
    claimed: &mut HashSet<String>,
    format_key: &F,
) -> Value
where
    F: Fn(&str) -> String,
{
    match kind {
        FieldKind::Primitive(kind) => zero_value(*kind),
        FieldKind::Nullable(_) => Value::Null,
        FieldKind::Collection(_) => Value::Array(Vec::new()),
        FieldKind::Object(name) => {
            let def = catalog.get(name).unwrap_or_else(|| {
                panic!("catalog invariant broken: unresolved reference `{name}`")
            });
            let mut nested = Map::new();
            merge_fields(def, catalog, &mut nested, claimed, format_key);
            // Inserted even when every nested field was already claimed.
            Value::Object(nested)
        }
    }
}

/// The zero value a primitive family contributes to the template.
fn zero_value(kind: PrimitiveKind) -> Value {
    match kind {
        // Floats render as plain `0` in the template, same as integers.
        PrimitiveKind::Int | PrimitiveKind::Float => Value::from(0),
        PrimitiveKind::Bool => Value::Bool(false),
        PrimitiveKind::Str => Value::String(String::new()),
    }
}
