//! # Receipt Module
//!
//! Batches priced tickets into the rendered purchase receipt.
//!
//! ## Receipt Assembly
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              purchase_tickets(catalog, purchases)                       │
//! │                                                                         │
//! │  requests, in order      price_ticket()         Receipt                 │
//! │  ─────────────────       ──────────────         ───────                 │
//! │                                                                         │
//! │  request #1 ───────────► PricedTicket ────────► line 1, total += …      │
//! │  request #2 ───────────► PricedTicket ────────► line 2, total += …      │
//! │  request #3 ───────────► TicketError ──► return Err - whole batch       │
//! │                                          dropped, lines 1-2 included    │
//! │                                                                         │
//! │  All tickets valid:                                                     │
//! │                                                                         │
//! │     Thank you for visiting the Dinosaur Museum!                         │
//! │     -------------------------------------------                         │
//! │     Adult General Admission: $50.00 (Movie Access, Terrace Access)      │
//! │     …one line per ticket, input order…                                  │
//! │     -------------------------------------------                         │
//! │     TOTAL: $175.00                                                      │
//! │                                                                         │
//! │  One bad ticket invalidates the whole purchase - a receipt either       │
//! │  covers every requested ticket or does not exist.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::TicketResult;
use crate::money::Money;
use crate::pricing::price_ticket;
use crate::ticket::{PricedTicket, TicketRequest};

// =============================================================================
// Fixed Text
// =============================================================================

/// First line of every receipt.
pub const RECEIPT_HEADER: &str = "Thank you for visiting the Dinosaur Museum!";

/// Separator printed before and after the ticket lines.
/// Exactly as wide as the header (43 dashes).
pub const RECEIPT_SEPARATOR: &str = "-------------------------------------------";

// =============================================================================
// Receipt
// =============================================================================

/// A purchase receipt under construction: ticket lines plus a running total.
///
/// Built incrementally with [`Receipt::add`] and finalized once with
/// [`Receipt::render`]. Most callers never touch this type directly and go
/// through [`purchase_tickets`] instead.
///
/// ## Example
/// ```rust
/// use turnstile_core::{price_ticket, Catalog, Offering, Receipt, TicketRequest};
///
/// let catalog = Catalog::new()
///     .with_admission("general", Offering::new("General").with_price("adult", 3000));
///
/// let mut receipt = Receipt::new();
/// let ticket = price_ticket(&catalog, TicketRequest::new("general", "adult")).unwrap();
/// receipt.add(&ticket);
///
/// assert_eq!(receipt.lines(), ["Adult General Admission: $30.00"]);
/// assert_eq!(receipt.total().cents(), 3000);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Formatted ticket lines in purchase order.
    lines: Vec<String>,

    /// Grand total in cents across all added tickets.
    total_cents: i64,
}

impl Receipt {
    /// Creates an empty receipt.
    pub fn new() -> Self {
        Receipt::default()
    }

    /// Appends one priced ticket: its formatted line and its total.
    pub fn add(&mut self, ticket: &PricedTicket) {
        self.lines.push(ticket.to_string());
        self.total_cents += ticket.total().cents();
    }

    /// Returns the ticket lines appended so far.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Checks whether any ticket has been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the final receipt text.
    ///
    /// Header, separator, every ticket line in order, the separator again,
    /// and the total line - joined with `\n`, no trailing newline. An empty
    /// receipt still renders the frame around `TOTAL: $0.00`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Renders the full receipt text (same as [`Receipt::render`]).
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RECEIPT_HEADER)?;
        writeln!(f, "{}", RECEIPT_SEPARATOR)?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "{}", RECEIPT_SEPARATOR)?;
        write!(f, "TOTAL: {}", self.total())
    }
}

// =============================================================================
// Batch Purchase
// =============================================================================

/// Prices a batch of requests and renders the receipt.
///
/// Requests are priced in input order. The first validation failure is
/// returned as-is and the whole batch is discarded - there is no partial or
/// best-effort receipt, no matter how many earlier requests were fine.
///
/// ## Example
/// ```rust
/// use turnstile_core::{purchase_tickets, Catalog, Offering, TicketRequest};
///
/// let catalog = Catalog::new()
///     .with_admission("general", Offering::new("General").with_price("adult", 3000))
///     .with_extra("movie", Offering::new("Movie").with_price("adult", 1000));
///
/// let receipt = purchase_tickets(
///     &catalog,
///     vec![TicketRequest::new("general", "adult").with_extra("movie")],
/// )
/// .unwrap();
///
/// assert!(receipt.contains("Adult General Admission: $40.00 (Movie Access)"));
/// assert!(receipt.ends_with("TOTAL: $40.00"));
/// ```
pub fn purchase_tickets<I>(catalog: &Catalog, purchases: I) -> TicketResult<String>
where
    I: IntoIterator<Item = TicketRequest>,
{
    let mut receipt = Receipt::new();
    for purchase in purchases {
        receipt.add(&price_ticket(catalog, purchase)?);
    }
    Ok(receipt.render())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Offering;
    use crate::error::TicketError;
    use crate::pricing::calculate_ticket_price;

    /// Same catalog as the pricing tests: the original exercise's data.
    fn museum_catalog() -> Catalog {
        Catalog::new()
            .with_admission(
                "general",
                Offering::new("General")
                    .with_price("child", 2000)
                    .with_price("adult", 3000)
                    .with_price("senior", 2500),
            )
            .with_admission(
                "membership",
                Offering::new("Membership")
                    .with_price("child", 1500)
                    .with_price("adult", 2800)
                    .with_price("senior", 2300),
            )
            .with_extra(
                "movie",
                Offering::new("Movie")
                    .with_price("child", 1000)
                    .with_price("adult", 1000)
                    .with_price("senior", 1000),
            )
            .with_extra(
                "education",
                Offering::new("Education")
                    .with_price("child", 1000)
                    .with_price("adult", 1200)
                    .with_price("senior", 1200),
            )
            .with_extra(
                "terrace",
                Offering::new("Terrace")
                    .with_price("child", 500)
                    .with_price("adult", 1000)
                    .with_price("senior", 1000),
            )
    }

    #[test]
    fn test_separator_matches_header_width() {
        assert_eq!(RECEIPT_SEPARATOR.len(), RECEIPT_HEADER.len());
        assert!(RECEIPT_SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_empty_batch_renders_frame_only() {
        let receipt = purchase_tickets(&museum_catalog(), Vec::new()).unwrap();
        assert_eq!(
            receipt,
            concat!(
                "Thank you for visiting the Dinosaur Museum!\n",
                "-------------------------------------------\n",
                "-------------------------------------------\n",
                "TOTAL: $0.00",
            )
        );
    }

    #[test]
    fn test_golden_four_ticket_receipt() {
        // The original exercise's documented example, byte for byte
        let purchases = vec![
            TicketRequest::new("general", "adult").with_extras(["movie", "terrace"]),
            TicketRequest::new("general", "senior").with_extra("terrace"),
            TicketRequest::new("general", "child")
                .with_extras(["education", "movie", "terrace"]),
            TicketRequest::new("general", "child")
                .with_extras(["education", "movie", "terrace"]),
        ];

        let receipt = purchase_tickets(&museum_catalog(), purchases).unwrap();
        assert_eq!(
            receipt,
            concat!(
                "Thank you for visiting the Dinosaur Museum!\n",
                "-------------------------------------------\n",
                "Adult General Admission: $50.00 (Movie Access, Terrace Access)\n",
                "Senior General Admission: $35.00 (Terrace Access)\n",
                "Child General Admission: $45.00 (Education Access, Movie Access, Terrace Access)\n",
                "Child General Admission: $45.00 (Education Access, Movie Access, Terrace Access)\n",
                "-------------------------------------------\n",
                "TOTAL: $175.00",
            )
        );
    }

    #[test]
    fn test_two_ticket_total() {
        let purchases = vec![
            TicketRequest::new("general", "adult"),
            TicketRequest::new("membership", "child").with_extra("movie"),
        ];

        // 3000 + 2500 cents
        let receipt = purchase_tickets(&museum_catalog(), purchases).unwrap();
        assert!(receipt.contains("Adult General Admission: $30.00\n"));
        assert!(receipt.contains("Child Membership Admission: $25.00 (Movie Access)\n"));
        assert!(receipt.ends_with("TOTAL: $55.00"));
    }

    #[test]
    fn test_extras_render_in_request_order() {
        let purchases = vec![
            TicketRequest::new("general", "adult").with_extras(["terrace", "movie"])
        ];
        let receipt = purchase_tickets(&museum_catalog(), purchases).unwrap();
        assert!(receipt.contains("(Terrace Access, Movie Access)"));
    }

    #[test]
    fn test_batch_is_all_or_nothing() {
        let catalog = museum_catalog();
        let bad = TicketRequest::new("general", "adult").with_extra("vip");
        let purchases = vec![
            TicketRequest::new("general", "adult"),
            TicketRequest::new("general", "senior"),
            bad.clone(),
            TicketRequest::new("general", "child"),
            TicketRequest::new("membership", "adult"),
        ];

        // The batch fails with exactly the error the bad request fails with
        // on its own; the two good tickets before it leave no trace
        let err = purchase_tickets(&catalog, purchases).unwrap_err();
        assert_eq!(err, calculate_ticket_price(&catalog, &bad).unwrap_err());
        assert_eq!(err, TicketError::UnknownExtra("vip".to_string()));
    }

    #[test]
    fn test_first_failing_request_wins() {
        let catalog = museum_catalog();
        let purchases = vec![
            TicketRequest::new("discount", "adult"),
            TicketRequest::new("general", "kid"),
        ];
        assert_eq!(
            purchase_tickets(&catalog, purchases).unwrap_err(),
            TicketError::UnknownTicketType("discount".to_string())
        );
    }

    #[test]
    fn test_receipt_accumulates() {
        let catalog = museum_catalog();
        let mut receipt = Receipt::new();
        assert!(receipt.is_empty());
        assert!(receipt.total().is_zero());

        let first = price_ticket(&catalog, TicketRequest::new("general", "adult")).unwrap();
        let second = price_ticket(&catalog, TicketRequest::new("general", "child")).unwrap();
        receipt.add(&first);
        receipt.add(&second);

        assert!(!receipt.is_empty());
        assert_eq!(receipt.lines().len(), 2);
        assert_eq!(receipt.total().cents(), 5000);
    }

    #[test]
    fn test_render_and_display_agree() {
        let catalog = museum_catalog();
        let mut receipt = Receipt::new();
        receipt.add(&price_ticket(&catalog, TicketRequest::new("general", "senior")).unwrap());
        assert_eq!(receipt.render(), receipt.to_string());
    }
}
