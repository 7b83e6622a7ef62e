//! # Pricing Module
//!
//! Validates one ticket request against the catalog and totals it.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │               calculate_ticket_price(catalog, request)                  │
//! │                                                                         │
//! │  1. ticket_type in catalog admissions?                                  │
//! │        no ──► UnknownTicketType('<key>')                                │
//! │  2. entrant_type in that price table?                                   │
//! │        no ──► UnknownEntrantType('<key>')                               │
//! │  3. total = base price                                                  │
//! │  4. for each extra, in request order:                                   │
//! │        extra in catalog extras?    no ──► UnknownExtra('<key>')         │
//! │        entrant in its price table? no ──► UnknownEntrantType('<key>')   │
//! │        total += extra price                                             │
//! │  5. Ok(total)                                                           │
//! │                                                                         │
//! │  First failure wins. A failing extra aborts the whole ticket - there    │
//! │  is no partial total to return.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure: same catalog + same request = same answer, and
//! nothing is written anywhere.

use crate::catalog::Catalog;
use crate::error::{TicketError, TicketResult};
use crate::format::{access_label, admission_label};
use crate::money::Money;
use crate::ticket::{PricedTicket, TicketRequest};

// =============================================================================
// Price Calculation
// =============================================================================

/// Totals one ticket request in integer cents.
///
/// The base price is the admission category's price for the request's
/// entrant; every requested extra adds its own per-entrant price, once per
/// occurrence. All arithmetic is integer - no rounding happens here.
///
/// ## Example
/// ```rust
/// use turnstile_core::{calculate_ticket_price, Catalog, Offering, TicketRequest};
///
/// let catalog = Catalog::new()
///     .with_admission("membership", Offering::new("Membership").with_price("child", 1500))
///     .with_extra("movie", Offering::new("Movie").with_price("child", 1000));
///
/// let request = TicketRequest::new("membership", "child").with_extra("movie");
/// let total = calculate_ticket_price(&catalog, &request).unwrap();
/// assert_eq!(total.cents(), 2500);
/// ```
///
/// ## Errors
/// The first unknown key wins, checked in the order above:
/// ```rust
/// use turnstile_core::{calculate_ticket_price, Catalog, TicketRequest};
///
/// let err = calculate_ticket_price(&Catalog::new(), &TicketRequest::new("discount", "adult"))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Ticket type 'discount' cannot be found.");
/// ```
pub fn calculate_ticket_price(
    catalog: &Catalog,
    request: &TicketRequest,
) -> TicketResult<Money> {
    let admission = catalog
        .admission(&request.ticket_type)
        .ok_or_else(|| TicketError::UnknownTicketType(request.ticket_type.clone()))?;

    let mut total = admission
        .price_for(&request.entrant_type)
        .ok_or_else(|| TicketError::UnknownEntrantType(request.entrant_type.clone()))?;

    for extra in &request.extras {
        let offering = catalog
            .extra(extra)
            .ok_or_else(|| TicketError::UnknownExtra(extra.clone()))?;
        total += offering
            .price_for(&request.entrant_type)
            .ok_or_else(|| TicketError::UnknownEntrantType(request.entrant_type.clone()))?;
    }

    Ok(total)
}

/// Prices a request and resolves its receipt labels, consuming the request.
///
/// ## Example
/// ```rust
/// use turnstile_core::{price_ticket, Catalog, Offering, TicketRequest};
///
/// let catalog = Catalog::new()
///     .with_admission("general", Offering::new("General").with_price("adult", 3000))
///     .with_extra("terrace", Offering::new("Terrace").with_price("adult", 1000));
///
/// let ticket = price_ticket(&catalog, TicketRequest::new("general", "adult")
///     .with_extra("terrace"))
///     .unwrap();
///
/// assert_eq!(ticket.total().cents(), 4000);
/// assert_eq!(ticket.label(), "Adult General Admission");
/// assert_eq!(ticket.extra_labels(), ["Terrace Access"]);
/// ```
pub fn price_ticket(catalog: &Catalog, request: TicketRequest) -> TicketResult<PricedTicket> {
    let total = calculate_ticket_price(catalog, &request)?;

    // Pricing already validated every key; the lookups below only fetch
    // descriptions for the labels.
    let admission = catalog
        .admission(&request.ticket_type)
        .ok_or_else(|| TicketError::UnknownTicketType(request.ticket_type.clone()))?;
    let label = admission_label(&request.entrant_type, admission.description());

    let mut extra_labels = Vec::with_capacity(request.extras.len());
    for extra in &request.extras {
        let offering = catalog
            .extra(extra)
            .ok_or_else(|| TicketError::UnknownExtra(extra.clone()))?;
        extra_labels.push(access_label(offering.description()));
    }

    Ok(PricedTicket::new(request, total, label, extra_labels))
}

// =============================================================================
// Unit Tests
// =============================================================================
