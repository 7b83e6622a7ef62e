//! # Catalog Types
//!
//! The read-only price catalog every purchase is validated against.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Catalog                                       │
//! │                                                                         │
//! │  admissions: BTreeMap<key, Offering>     extras: BTreeMap<key, Offering>│
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐    │
//! │  │ "general" ──► Offering       │   │ "movie" ────► Offering       │    │
//! │  │ "membership" ► Offering      │   │ "education" ► Offering       │    │
//! │  └──────────────────────────────┘   │ "terrace" ──► Offering       │    │
//! │                                     └──────────────────────────────┘    │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │  Offering                                                       │    │
//! │  │  ─────────────────────────                                      │    │
//! │  │  description     "General"          (display noun)              │    │
//! │  │  price_in_cents  child: 2000        (per-entrant price table)   │    │
//! │  │                  adult: 3000                                    │    │
//! │  │                  senior: 2500                                   │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Model
//! The host constructs the catalog once at startup (in code via the builders
//! below, or by deserializing provider JSON) and passes `&Catalog` into every
//! pricing call. Nothing in this crate ever writes to it, so one catalog can
//! safely back any number of threads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::EXTRAS_KEY;

// =============================================================================
// Offering
// =============================================================================

/// One priced entry of the catalog.
///
/// Admission categories and extras share this shape: a display noun plus a
/// per-entrant price table. Prices are stored as raw `i64` cents (the wire
/// format) and handed out as [`Money`].
///
/// ## Price Table Invariant
/// An entrant key that is absent from the table has **no** price - lookups
/// return `None` and pricing turns that into a validation error. Absence is
/// never treated as zero.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    /// Display noun for receipts ("General", "Movie"). The receipt formatter
    /// appends the " Admission" / " Access" words itself.
    description: String,

    /// Price per entrant key, in cents.
    price_in_cents: BTreeMap<String, i64>,
}

impl Offering {
    /// Creates an offering with an empty price table.
    ///
    /// ## Example
    /// ```rust
    /// use turnstile_core::Offering;
    ///
    /// let general = Offering::new("General")
    ///     .with_price("child", 2000)
    ///     .with_price("adult", 3000);
    ///
    /// assert_eq!(general.description(), "General");
    /// assert_eq!(general.price_for("adult").unwrap().cents(), 3000);
    /// assert!(general.price_for("senior").is_none());
    /// ```
    pub fn new(description: impl Into<String>) -> Self {
        Offering {
            description: description.into(),
            price_in_cents: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the price for one entrant key, in cents.
    pub fn with_price(mut self, entrant_type: impl Into<String>, cents: i64) -> Self {
        self.price_in_cents.insert(entrant_type.into(), cents);
        self
    }

    /// Returns the display noun.
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the price for an entrant key, if the table carries one.
    pub fn price_for(&self, entrant_type: &str) -> Option<Money> {
        self.price_in_cents
            .get(entrant_type)
            .map(|cents| Money::from_cents(*cents))
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The full admission catalog: categories plus optional extras.
///
/// ## The Reserved `"extras"` Key
/// The original duck-typed data kept the extras table under the same object
/// as the admission categories, reserving the key `"extras"`. The typed split
/// below makes that collision impossible, and [`Catalog::admission`] refuses
/// the reserved key outright so `"extras"` can never price as an admission.
///
/// ## Example
/// ```rust
/// use turnstile_core::{Catalog, Offering};
///
/// let catalog = Catalog::new()
///     .with_admission("general", Offering::new("General").with_price("adult", 3000))
///     .with_extra("movie", Offering::new("Movie").with_price("adult", 1000));
///
/// assert!(catalog.admission("general").is_some());
/// assert!(catalog.admission("movie").is_none()); // extras are not admissions
/// assert!(catalog.extra("movie").is_some());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// Admission categories by ticket-type key.
    #[serde(default)]
    admissions: BTreeMap<String, Offering>,

    /// Optional add-ons by extra key.
    #[serde(default)]
    extras: BTreeMap<String, Offering>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Adds (or replaces) an admission category.
    ///
    /// The reserved `"extras"` key can be inserted like any other but will
    /// never resolve through [`Catalog::admission`].
    pub fn with_admission(mut self, ticket_type: impl Into<String>, offering: Offering) -> Self {
        self.admissions.insert(ticket_type.into(), offering);
        self
    }

    /// Adds (or replaces) an extra.
    pub fn with_extra(mut self, extra: impl Into<String>, offering: Offering) -> Self {
        self.extras.insert(extra.into(), offering);
        self
    }

    /// Looks up an admission category by ticket-type key.
    ///
    /// Returns `None` for unknown keys and for the reserved `"extras"` key,
    /// which is a table name and never a purchasable category.
    pub fn admission(&self, ticket_type: &str) -> Option<&Offering> {
        if ticket_type == EXTRAS_KEY {
            return None;
        }
        self.admissions.get(ticket_type)
    }

    /// Looks up an extra by key.
    pub fn extra(&self, extra: &str) -> Option<&Offering> {
        self.extras.get(extra)
    }

    /// Iterates the admission category keys in sorted order.
    ///
    /// For hosts that render a menu; pricing itself never enumerates.
    pub fn admission_keys(&self) -> impl Iterator<Item = &str> {
        self.admissions.keys().map(String::as_str)
    }

    /// Iterates the extra keys in sorted order.
    pub fn extra_keys(&self) -> impl Iterator<Item = &str> {
        self.extras.keys().map(String::as_str)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
