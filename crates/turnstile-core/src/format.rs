//! # Formatting Helpers
//!
//! Pure string helpers for receipt labels.
//!
//! ## Label Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      How a receipt line is built                        │
//! │                                                                         │
//! │  entrant  "adult"        admission desc  "general"                      │
//! │     │                        │                                          │
//! │     ▼                        ▼                                          │
//! │  capitalize ───► "Adult"  capitalize ───► "General"                     │
//! │     │                        │                                          │
//! │     └──────────┬─────────────┘                                          │
//! │                ▼                                                        │
//! │  admission_label ───► "Adult General Admission"                         │
//! │                                                                         │
//! │  extra desc "movie" ──► access_label ──► "Movie Access"                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure: no state, no catalog access, input strings
//! are never mutated.

// =============================================================================
// Capitalization
// =============================================================================

/// Uppercases the first character of a string, leaving the rest unchanged.
///
/// ## Rules
/// - Not a title-case transform: `"general admission"` becomes
///   `"General admission"`, interior words stay as they are
/// - Already-capitalized input passes through unchanged
/// - The empty string stays empty
/// - Multi-char uppercase mappings expand (`"ß"` becomes `"SS"`)
///
/// ## Example
/// ```rust
/// use turnstile_core::format::capitalize;
///
/// assert_eq!(capitalize("adult"), "Adult");
/// assert_eq!(capitalize("General"), "General");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
    }
}

// =============================================================================
// Receipt Labels
// =============================================================================

/// Builds the admission label for a receipt line.
///
/// `entrant_type` is the request's entrant key; `description` is the
/// admission category's display noun from the catalog.
///
/// ## Example
/// ```rust
/// use turnstile_core::format::admission_label;
///
/// assert_eq!(admission_label("adult", "General"), "Adult General Admission");
/// assert_eq!(admission_label("child", "membership"), "Child Membership Admission");
/// ```
pub fn admission_label(entrant_type: &str, description: &str) -> String {
    format!(
        "{} {} Admission",
        capitalize(entrant_type),
        capitalize(description)
    )
}

/// Builds the access label for one extra on a receipt line.
///
/// ## Example
/// ```rust
/// use turnstile_core::format::access_label;
///
/// assert_eq!(access_label("movie"), "Movie Access");
/// assert_eq!(access_label("Terrace"), "Terrace Access");
/// ```
pub fn access_label(description: &str) -> String {
    format!("{} Access", capitalize(description))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("adult"), "Adult");
        assert_eq!(capitalize("senior"), "Senior");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_leaves_rest_unchanged() {
        // Only the first character moves; this is not title case
        assert_eq!(capitalize("general admission"), "General admission");
        assert_eq!(capitalize("vIP"), "VIP");
    }

    #[test]
    fn test_capitalize_already_capitalized() {
        assert_eq!(capitalize("Movie"), "Movie");
    }

    #[test]
    fn test_capitalize_multibyte_first_char() {
        assert_eq!(capitalize("élite"), "Élite");
        // German sharp s expands to two characters when uppercased
        assert_eq!(capitalize("ßuper"), "SSuper");
    }

    #[test]
    fn test_capitalize_does_not_mutate_input() {
        let original = String::from("adult");
        let _ = capitalize(&original);
        assert_eq!(original, "adult");
    }

    #[test]
    fn test_admission_label() {
        assert_eq!(admission_label("adult", "General"), "Adult General Admission");
        assert_eq!(
            admission_label("senior", "membership"),
            "Senior Membership Admission"
        );
    }

    #[test]
    fn test_access_label() {
        assert_eq!(access_label("movie"), "Movie Access");
        assert_eq!(access_label("education"), "Education Access");
    }
}
