//! Billing Module
//!
//! Stripe subscription checkout. The Stripe REST API is the only
//! external payment surface; webhooks and customer portals are not
//! part of this service.

/// Checkout session creation
pub mod checkout;

pub use checkout::{checkout, BillingConfig};
