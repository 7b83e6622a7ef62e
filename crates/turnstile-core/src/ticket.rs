//! # Ticket Types
//!
//! A purchase as the caller states it, and a purchase as pricing resolved it.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One ticket, two shapes                             │
//! │                                                                         │
//! │  caller builds              pricing validates           receipt reads   │
//! │  ─────────────              ─────────────────           ─────────────   │
//! │                                                                         │
//! │  TicketRequest ───────────► price_ticket() ───────────► PricedTicket    │
//! │  { ticket_type,             (consumes the request,      { request,      │
//! │    entrant_type,             every key checked           total_cents,   │
//! │    extras[] }                against the Catalog)        label,         │
//! │                                                          extra_labels } │
//! │                                                                         │
//! │  A PricedTicket only exists for requests the catalog fully resolved;    │
//! │  it is dropped as soon as its receipt line is written.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Ticket Request
// =============================================================================

/// A single ticket purchase as requested by the caller.
///
/// All three fields are catalog keys, not display strings. `extras` keeps the
/// caller's order and may repeat - a repeated extra is priced once per
/// occurrence.
///
/// ## Example
/// ```rust
/// use turnstile_core::TicketRequest;
///
/// let request = TicketRequest::new("general", "adult")
///     .with_extras(["movie", "terrace"]);
///
/// assert_eq!(request.ticket_type, "general");
/// assert_eq!(request.extras, ["movie", "terrace"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    /// Admission category key ("general", "membership").
    pub ticket_type: String,

    /// Entrant key the price tables are indexed by ("child", "adult").
    pub entrant_type: String,

    /// Extra keys in purchase order; may be empty, may repeat.
    #[serde(default)]
    pub extras: Vec<String>,
}

impl TicketRequest {
    /// Creates a request with no extras.
    pub fn new(ticket_type: impl Into<String>, entrant_type: impl Into<String>) -> Self {
        TicketRequest {
            ticket_type: ticket_type.into(),
            entrant_type: entrant_type.into(),
            extras: Vec::new(),
        }
    }

    /// Appends one extra, keeping order.
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extras.push(extra.into());
        self
    }

    /// Appends several extras, keeping order.
    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras.extend(extras.into_iter().map(Into::into));
        self
    }
}

// =============================================================================
// Priced Ticket
// =============================================================================

/// A request the catalog fully resolved: total cost plus display labels.
///
/// Built only by the pricing step, so an instance is proof that every key in
/// its request was validated. Fields are read-only; `Display` renders the
/// receipt line.
///
/// ## Receipt Line Format
/// ```text
/// Adult General Admission: $50.00 (Movie Access, Terrace Access)
/// └────────┬─────────────┘  └─┬──┘ └───────────┬────────────────┘
///        label              total   extra_labels, only when extras
///                                   were requested, in request order
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricedTicket {
    /// The request this ticket was priced from.
    request: TicketRequest,

    /// Total cost in cents: base price plus every requested extra.
    total_cents: i64,

    /// Assembled admission label ("Adult General Admission").
    label: String,

    /// Assembled access labels ("Movie Access"), one per requested extra,
    /// in request order.
    extra_labels: Vec<String>,
}

impl PricedTicket {
    /// Assembled by pricing once every catalog lookup has succeeded.
    pub(crate) fn new(
        request: TicketRequest,
        total: Money,
        label: String,
        extra_labels: Vec<String>,
    ) -> Self {
        PricedTicket {
            request,
            total_cents: total.cents(),
            label,
            extra_labels,
        }
    }

    /// Returns the originating request.
    #[inline]
    pub fn request(&self) -> &TicketRequest {
        &self.request
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the admission label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the access labels in request order.
    #[inline]
    pub fn extra_labels(&self) -> &[String] {
        &self.extra_labels
    }
}

/// Renders the receipt line for this ticket.
impl fmt::Display for PricedTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.total())?;
        if !self.extra_labels.is_empty() {
            write!(f, " ({})", self.extra_labels.join(", "))?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = TicketRequest::new("membership", "child")
            .with_extra("movie")
            .with_extras(["education", "terrace"]);

        assert_eq!(request.ticket_type, "membership");
        assert_eq!(request.entrant_type, "child");
        assert_eq!(request.extras, ["movie", "education", "terrace"]);
    }

    #[test]
    fn test_request_deserializes_original_shape() {
        // The exact ticketInfo shape the JavaScript host sends
        let json = r#"{ "ticketType": "general", "entrantType": "child", "extras": ["movie"] }"#;
        let request: TicketRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, TicketRequest::new("general", "child").with_extra("movie"));
    }

    #[test]
    fn test_request_extras_default_to_empty() {
        let json = r#"{ "ticketType": "general", "entrantType": "adult" }"#;
        let request: TicketRequest = serde_json::from_str(json).unwrap();
        assert!(request.extras.is_empty());
    }

    #[test]
    fn test_display_with_extras() {
        let ticket = PricedTicket::new(
            TicketRequest::new("general", "adult").with_extras(["movie", "terrace"]),
            Money::from_cents(5000),
            "Adult General Admission".to_string(),
            vec!["Movie Access".to_string(), "Terrace Access".to_string()],
        );
        assert_eq!(
            ticket.to_string(),
            "Adult General Admission: $50.00 (Movie Access, Terrace Access)"
        );
    }

    #[test]
    fn test_display_without_extras() {
        let ticket = PricedTicket::new(
            TicketRequest::new("general", "senior"),
            Money::from_cents(2500),
            "Senior General Admission".to_string(),
            Vec::new(),
        );
        // No parenthesized list at all when nothing was added
        assert_eq!(ticket.to_string(), "Senior General Admission: $25.00");
    }
}
