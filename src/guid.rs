//! GUID-style reference handling
//!
//! Identifier references are stored as `GUID:` followed by the asset's hex
//! GUID. The addressing mode of a reference list is sniffed from its first
//! entry because the document format does not record it explicitly.

use uuid::Uuid;

/// Literal tag prefixing identifier-style references
pub const GUID_TAG: &str = "GUID:";

/// True if `reference` is written in identifier style
pub fn is_guid_reference(reference: &str) -> bool {
    reference.starts_with(GUID_TAG)
}

/// True if `value` is a bare well-formed asset GUID (32 hex digits, with or
/// without hyphens)
pub fn is_bare_guid(value: &str) -> bool {
    Uuid::try_parse(value).is_ok()
}

/// Bring `value` into tagged identifier form.
///
/// Already-tagged input passes through unchanged; a bare GUID gets the tag
/// prepended; anything else is rejected.
pub fn normalize_guid(value: &str) -> Option<String> {
    if is_guid_reference(value) {
        return Some(value.to_string());
    }
    if is_bare_guid(value) {
        return Some(format!("{GUID_TAG}{value}"));
    }
    None
}
