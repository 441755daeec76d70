//! Service layer for repair-quote
//!
//! Business logic that sits beside the wizard controller: the pricing
//! heuristic and exports of recorded submissions.

pub mod export;
pub mod pricing;

pub use pricing::{Multiplier, Pricing, QuoteBreakdown};
