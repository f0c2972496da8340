//! Input format parsers.
//!
//! Each parser reads one definition format and produces a resolved
//! [`TypeCatalog`](crate::ir::TypeCatalog).

pub(crate) mod classes;

pub use classes::{ResolveError, parse_classes};
