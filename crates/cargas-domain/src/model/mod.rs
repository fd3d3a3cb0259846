//! Domain model types

pub mod quote;

pub use quote::{PriceQuote, QuoteRequest};
