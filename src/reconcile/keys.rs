//! Join-key normalization.

/// Canonicalize an administrative code for use as a join key
///
/// Trims surrounding whitespace and left-pads with `'0'` to a minimum width
/// of two characters, so `"5"`, `"05"` and the integer `5` all compare equal.
/// The normalization is purely lexical; it does not check that the result is
/// a real administrative code. A value that is empty after trimming stays
/// empty rather than being padded into a fake `"00"` code, so codeless rows
/// can never join a reference row by accident.
#[must_use]
pub fn normalize_key(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{trimmed:0>2}")
}
