//! Shared interaction-layer rules.

/// Blank test applied before add and rename. Trimming happens only
/// here; the value that reaches the store is the raw input.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
