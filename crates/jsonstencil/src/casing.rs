//! Key formatting for synthesized templates.
//!
//! Field names pass through exactly one formatter on their way into the
//! template; the formatted string is also the identity used for duplicate
//! suppression, so two fields that format alike are one key.

/// Casing policy applied to every field name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyCase {
    /// Lowercase the first character when it is uppercase
    /// (`FirstName` -> `firstName`, `URL` -> `uRL`). Default.
    #[default]
    Camel,
    /// Emit field names exactly as declared.
    Preserve,
}

impl KeyCase {
    /// Formats one field name under this policy.
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Camel => lower_first(name),
            Self::Preserve => name.to_string(),
        }
    }
}

/// Lowercases the first character only, and only when it is uppercase.
///
/// This is deliberately not a full camel-case conversion: `URL` becomes
/// `uRL`, not `url`, and names that already start lowercase (or with a
/// non-letter) come back unchanged.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => name.to_string(),
    }
}
