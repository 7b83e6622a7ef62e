//! # Error Types
//!
//! Domain-specific error types for turnstile-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  turnstile-core errors (this file)                                      │
//! │  └── TicketError      - A purchase referenced a key the catalog         │
//! │                         does not carry                                  │
//! │                                                                         │
//! │  Host errors (out of tree)                                              │
//! │  └── whatever the CLI/HTTP/kiosk layer wraps TicketError in             │
//! │                                                                         │
//! │  Every TicketError is "bad input", never "system fault": the catalog    │
//! │  lookup failed, nothing broke.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every message reproduces the exact key the caller supplied
//! 3. Errors are enum variants, never String
//! 4. The `Display` text is the user-facing message, verbatim

use thiserror::Error;

// =============================================================================
// Ticket Error
// =============================================================================

/// A ticket request referenced a key that is not in the catalog.
///
/// The pricing step reports the **first** failing key and stops; it never
/// aggregates several failures for one request. Batch purchasing propagates
/// the first failing ticket's error unchanged.
///
/// ## Example
/// ```rust
/// use turnstile_core::TicketError;
///
/// let err = TicketError::UnknownEntrantType("kid".to_string());
/// assert_eq!(err.to_string(), "Entrant type 'kid' cannot be found.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    /// The requested ticket type is not an admission category.
    ///
    /// ## When This Occurs
    /// - The key is absent from the catalog's admissions
    /// - The key is the reserved `"extras"` table name, which can never be
    ///   purchased as an admission
    #[error("Ticket type '{0}' cannot be found.")]
    UnknownTicketType(String),

    /// The requested entrant type has no price.
    ///
    /// ## When This Occurs
    /// - The admission category's price table has no such entrant
    /// - A requested extra's price table has no such entrant
    #[error("Entrant type '{0}' cannot be found.")]
    UnknownEntrantType(String),

    /// A requested extra is not in the catalog's extras table.
    #[error("Extra type '{0}' cannot be found.")]
    UnknownExtra(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with TicketError.
pub type TicketResult<T> = Result<T, TicketError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TicketError::UnknownTicketType("discount".to_string());
        assert_eq!(err.to_string(), "Ticket type 'discount' cannot be found.");

        let err = TicketError::UnknownEntrantType("kid".to_string());
        assert_eq!(err.to_string(), "Entrant type 'kid' cannot be found.");

        let err = TicketError::UnknownExtra("incorrect-extra".to_string());
        assert_eq!(
            err.to_string(),
            "Extra type 'incorrect-extra' cannot be found."
        );
    }

    #[test]
    fn test_errors_compare_as_data() {
        assert_eq!(
            TicketError::UnknownExtra("movie".to_string()),
            TicketError::UnknownExtra("movie".to_string())
        );
        assert_ne!(
            TicketError::UnknownTicketType("movie".to_string()),
            TicketError::UnknownExtra("movie".to_string())
        );
    }
}
