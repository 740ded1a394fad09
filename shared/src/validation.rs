//! Validation and normalization utilities
//!
//! Input checks for barcodes and tag normalization for upstream tag lists.

/// Longest barcode accepted by the product lookup
pub const MAX_BARCODE_LENGTH: usize = 32;

// ============================================================================
// Barcode Validations
// ============================================================================

/// Validate barcode format (non-empty, ASCII digits only)
pub fn validate_barcode(barcode: &str) -> Result<(), &'static str> {
    if barcode.is_empty() {
        return Err("Barcode must not be empty");
    }
    if barcode.len() > MAX_BARCODE_LENGTH {
        return Err("Barcode must be at most 32 digits");
    }
    if !barcode.chars().all(|c| c.is_ascii_digit()) {
        return Err("Barcode must contain digits only");
    }
    Ok(())
}

// ============================================================================
// Tag Normalization
// ============================================================================

/// Strip a leading locale marker such as `en:` from a tag
///
/// Only a two-letter ASCII code followed by a colon counts as a marker;
/// anything else is returned unchanged.
pub fn strip_locale_prefix(tag: &str) -> &str {
    let bytes = tag.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
    {
        &tag[3..]
    } else {
        tag
    }
}

/// Normalize label tags by stripping locale markers, preserving order
pub fn normalize_labels(labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .map(|tag| strip_locale_prefix(tag).to_string())
        .collect()
}
