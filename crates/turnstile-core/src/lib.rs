//! # turnstile-core: Pure Business Logic for Turnstile
//!
//! This crate is the **heart** of Turnstile. It contains all admission
//! pricing and receipt logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Turnstile Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host (out of tree)                              │   │
//! │  │    catalog provider ──► CLI / kiosk UI / HTTP handler           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &Catalog + TicketRequests              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ turnstile-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │  catalog  │  │   money   │  │  pricing  │  │  receipt  │   │   │
//! │  │   │  Catalog  │  │   Money   │  │ calculate │  │  Receipt  │   │   │
//! │  │   │  Offering │  │   $X.XX   │  │  + labels │  │   batch   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The read-only price catalog ([`Catalog`], [`Offering`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ticket`] - [`TicketRequest`] in, [`PricedTicket`] out
//! - [`error`] - The ticket validation error taxonomy
//! - [`format`] - Pure receipt-label helpers
//! - [`pricing`] - Validate one request and total it
//! - [`receipt`] - Batch purchases into the rendered receipt
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same catalog +
//!    same request = same answer
//! 2. **No I/O**: The catalog is supplied by the host; nothing here loads,
//!    stores, or serves anything
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All errors are typed values, never strings or
//!    panics
//!
//! ## Example Usage
//!
//! ```rust
//! use turnstile_core::{purchase_tickets, Catalog, Offering, TicketRequest};
//!
//! // The host builds the catalog once (never from floats!)
//! let catalog = Catalog::new()
//!     .with_admission(
//!         "general",
//!         Offering::new("General")
//!             .with_price("adult", 3000)
//!             .with_price("child", 2000),
//!     )
//!     .with_extra("movie", Offering::new("Movie").with_price("adult", 1000));
//!
//! // One call per purchase transaction
//! let receipt = purchase_tickets(
//!     &catalog,
//!     vec![TicketRequest::new("general", "adult").with_extra("movie")],
//! )
//! .unwrap();
//!
//! assert!(receipt.ends_with("TOTAL: $40.00"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod format;
pub mod money;
pub mod pricing;
pub mod receipt;
pub mod ticket;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use turnstile_core::Catalog` instead of
// `use turnstile_core::catalog::Catalog`

pub use catalog::{Catalog, Offering};
pub use error::{TicketError, TicketResult};
pub use money::Money;
pub use pricing::{calculate_ticket_price, price_ticket};
pub use receipt::{purchase_tickets, Receipt, RECEIPT_HEADER, RECEIPT_SEPARATOR};
pub use ticket::{PricedTicket, TicketRequest};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Reserved key naming the extras table in the original flat catalog data.
///
/// ## Why a constant?
/// The original exercise stored extras under the same object as the admission
/// categories, so `"extras"` could never be a purchasable category. The typed
/// [`Catalog`] keeps the two tables apart, but [`Catalog::admission`] still
/// refuses this key so provider data that carries the old shape cannot sell
/// the table name as a ticket.
pub const EXTRAS_KEY: &str = "extras";
