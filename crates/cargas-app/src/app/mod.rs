//! Application use cases

pub mod quote_service;

pub use quote_service::{
    quote, quote_batch, BatchQuoteEntry, BatchQuoteResults, QuoteOutcome,
};
