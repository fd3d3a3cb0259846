//! Quote use cases - single and batch pricing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cargas_domain::model::{PriceQuote, QuoteRequest};
use cargas_domain::service::{calculate_with_rate, resolve_rate};
use cargas_types::Result;

/// A priced request with its display context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteOutcome {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    pub quote: PriceQuote,
    /// total / distance
    pub per_km: f64,
    /// False when the route could not be matched to a UF pair and the
    /// quote was produced with a zero tax rate
    pub route_resolved: bool,
}

/// One row of a batch run; `outcome` is absent for skipped rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchQuoteEntry {
    /// 1-based file row, counting the header line
    pub row: usize,
    pub outcome: Option<QuoteOutcome>,
}

/// Aggregated results of a batch run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchQuoteResults {
    pub started_at: DateTime<Utc>,
    pub total_processed: usize,
    pub quoted: usize,
    pub skipped: usize,
    pub entries: Vec<BatchQuoteEntry>,
}

/// Price a single request
///
/// `Ok(None)` mirrors the calculator's "not enough information" outcome
/// for a missing or non-positive distance.
pub fn quote(request: QuoteRequest) -> Result<Option<QuoteOutcome>> {
    let resolution = resolve_rate(&request.origin, &request.destination);
    let Some(priced) = calculate_with_rate(&request, resolution)? else {
        return Ok(None);
    };
    Ok(Some(QuoteOutcome {
        per_km: priced.total / request.distance_km,
        origin: request.origin,
        destination: request.destination,
        distance_km: request.distance_km,
        quote: priced,
        route_resolved: resolution.resolved,
    }))
}

/// Price every request, counting skipped rows instead of aborting on them
pub fn quote_batch(requests: Vec<QuoteRequest>) -> Result<BatchQuoteResults> {
    let started_at = Utc::now();
    let mut entries = Vec::with_capacity(requests.len());
    let mut quoted = 0;
    let mut skipped = 0;

    for (i, request) in requests.into_iter().enumerate() {
        let outcome = quote(request)?;
        match outcome {
            Some(_) => quoted += 1,
            None => skipped += 1,
        }
        entries.push(BatchQuoteEntry { row: i + 2, outcome });
    }

    Ok(BatchQuoteResults {
        started_at,
        total_processed: entries.len(),
        quoted,
        skipped,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_carries_route_context() {
        let request = QuoteRequest::new(500.0, "São Paulo, SP", "Rio de Janeiro, RJ");
        let outcome = quote(request).unwrap().unwrap();
        assert_eq!(outcome.origin, "São Paulo, SP");
        assert!(outcome.route_resolved);
        assert!((outcome.per_km - outcome.quote.total / 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_quote_flags_unresolved_routes() {
        let request = QuoteRequest::new(500.0, "Nowhere", "Elsewhere");
        let outcome = quote(request).unwrap().unwrap();
        assert!(!outcome.route_resolved);
        assert_eq!(outcome.quote.icms_rate, 0.0);
    }

    #[test]
    fn test_batch_counts_skipped_rows() {
        let requests = vec![
            QuoteRequest::new(500.0, "São Paulo, SP", "Rio de Janeiro, RJ"),
            QuoteRequest::new(0.0, "Santos, SP", "Campinas, SP"),
            QuoteRequest::new(120.0, "Santos, SP", "Campinas, SP"),
        ];
        let results = quote_batch(requests).unwrap();
        assert_eq!(results.total_processed, 3);
        assert_eq!(results.quoted, 2);
        assert_eq!(results.skipped, 1);
        assert!(results.entries[1].outcome.is_none());
        assert_eq!(results.entries[1].row, 3);
    }
}
