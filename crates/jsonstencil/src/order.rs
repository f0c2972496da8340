//! Root-first processing order for template synthesis.
//!
//! Types nobody points at are merged first so their fields claim the top
//! level of the template; the types they reference follow, and so on down
//! the graph. The order is a pseudo-topological sort over direct object
//! references, with a declaration-order fallback once only cycles remain.

use crate::ir::{FieldKind, TypeCatalog, TypeDef};

/// Orders the catalog's definitions for synthesis.
///
/// Repeatedly extracts the first definition (in declaration order) that no
/// *other* definition still in the working set references through a plain
/// object field. Self-references never disqualify a candidate, and neither
/// do references buried inside collections: an element type of a list is
/// not owned by the list's declarer, so it remains a root of its own.
///
/// When every remaining definition is referenced by another remaining one,
/// the remainder is appended in declaration order. Every input definition
/// appears in the result exactly once.
pub fn processing_order(catalog: &TypeCatalog) -> Vec<&TypeDef> {
    let mut remaining: Vec<&TypeDef> = catalog.types.iter().collect();
    let mut ordered = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let unreferenced = remaining.iter().position(|candidate| {
            !remaining
                .iter()
                .any(|other| other.name != candidate.name && references(other, &candidate.name))
        });
        match unreferenced {
            Some(index) => ordered.push(remaining.remove(index)),
            None => {
                // Only cycles left; keep declaration order.
                ordered.append(&mut remaining);
            }
        }
    }

    ordered
}

/// Whether `def` has a field that is a direct object reference to `target`.
fn references(def: &TypeDef, target: &str) -> bool {
    def.fields
        .iter()
        .any(|field| matches!(&field.kind, FieldKind::Object(name) if name == target))
}
