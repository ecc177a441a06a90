//! Structured-data syntax check used by body validation.

/// Answers whether a body is well-formed structured data.
///
/// The validator depends on this trait only, so a different syntax (or a
/// stub in tests) can be swapped in without touching validation rules.
pub trait StructuredData {
    fn is_well_formed(&self, text: &str) -> bool;
}

/// JSON syntax check backed by serde_json. The parsed value is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSyntax;

impl StructuredData for JsonSyntax {
    fn is_well_formed(&self, text: &str) -> bool {
        serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok()
    }
}
