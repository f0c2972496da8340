//! Default-instance JSON templates from class definitions.
//!
//! `jsonstencil` reads structural class definitions (named, typed fields,
//! single inheritance) and produces the canonical JSON object describing
//! the empty/default instance of the whole type graph: zeros for numbers,
//! `""` for strings, `false` for booleans, `null` for nullable value
//! types, `[]` for collections, and nested objects for references.
//!
//! # Architecture
//!
//! ```text
//! Input               IR                    Core
//! ─────────────   ─────────────   ──────────────────────────
//! class source ─> TypeCatalog ──> processing_order (order.rs)
//!   (input/)        (ir.rs)            │ roots first
//!                                      ▼
//!                                 synthesize (synth.rs)
//!                                      │ first write wins
//!                                      ▼
//!                                 serde_json::Value template
//! ```
//!
//! # Example
//!
//! ```
//! use jsonstencil::{KeyCase, convert_to_string};
//!
//! let source = r#"
//!     public class Address {
//!         public string Street { get; set; }
//!         public string City { get; set; }
//!     }
//!     public class Person {
//!         public string Name { get; set; }
//!         public Address Address { get; set; }
//!     }
//! "#;
//!
//! let json = convert_to_string(source, KeyCase::Camel).unwrap();
//! assert_eq!(json, r#"{"name":"","address":{"street":"","city":""}}"#);
//! ```
//!
//! Types nobody references come first, so their fields claim the top
//! level; every field writes at most once across the whole template, so
//! a nested object never repeats a key that some outer level already
//! produced.

pub mod casing;
pub mod input;
pub mod ir;
pub mod order;
pub mod synth;

use serde_json::Value;

// Re-export commonly used items
pub use casing::KeyCase;
pub use input::{ResolveError, parse_classes};
pub use ir::{Field, FieldKind, PrimitiveKind, TypeCatalog, TypeDef};
pub use order::processing_order;
pub use synth::synthesize;

/// Converts class definition source into its default-instance template.
///
/// Returns `Ok(None)` when the source is blank (empty or whitespace
/// only). A source with no class declarations, such as one holding only
/// comments, still produces `Some` empty object.
pub fn convert(source: &str, key_case: KeyCase) -> Result<Option<Value>, ResolveError> {
    if source.trim().is_empty() {
        return Ok(None);
    }
    let catalog = parse_classes(source)?;
    let ordered = processing_order(&catalog);
    let tree = synthesize(&ordered, &catalog, |name| key_case.apply(name));
    Ok(Some(Value::Object(tree)))
}

/// Converts class definition source straight to a JSON string.
///
/// Blank input renders as the empty string; everything else is the
/// compact serialization of [`convert`]'s template, keys in synthesis
/// order.
pub fn convert_to_string(source: &str, key_case: KeyCase) -> Result<String, ResolveError> {
    match convert(source, key_case)? {
        Some(tree) => Ok(tree.to_string()),
        None => Ok(String::new()),
    }
}
