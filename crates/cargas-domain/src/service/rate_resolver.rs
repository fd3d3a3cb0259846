//! Route tax-rate resolution
//!
//! Maps two free-text route endpoints ("City, UF") to an interstate ICMS
//! rate. Only the token after the last comma is significant. A route the
//! table cannot classify degrades to a zero rate with `resolved = false`
//! instead of failing, so a quote can still be produced without tax.

use serde::{Deserialize, Serialize};

use crate::tariff::icms;

/// Outcome of a rate lookup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateResolution {
    /// ICMS rate, whole-number percent
    pub rate: f64,
    /// False when either endpoint could not be matched to a UF
    pub resolved: bool,
}

impl RateResolution {
    /// Zero-rate fallback for unclassifiable routes
    pub fn unresolved() -> Self {
        Self {
            rate: 0.0,
            resolved: false,
        }
    }
}

/// Extract the UF token from a "City, UF" endpoint
///
/// Takes the substring after the last comma, trimmed and upper-cased. A
/// string without a comma yields the whole string, which then fails the
/// table lookup downstream.
pub fn state_code(endpoint: &str) -> Option<String> {
    let token = endpoint.rsplit(',').next()?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_uppercase())
}

/// Resolve the ICMS rate for a route
pub fn resolve_rate(origin: &str, destination: &str) -> RateResolution {
    let (Some(origin_uf), Some(dest_uf)) = (state_code(origin), state_code(destination)) else {
        return RateResolution::unresolved();
    };
    match icms::rate_between(&origin_uf, &dest_uf) {
        Some(rate) => RateResolution { rate, resolved: true },
        None => RateResolution::unresolved(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_interstate_route() {
        let resolution = resolve_rate("São Paulo, SP", "Rio de Janeiro, RJ");
        assert!(resolution.resolved);
        assert_eq!(resolution.rate, 12.0);
    }

    #[test]
    fn test_resolves_internal_route() {
        let resolution = resolve_rate("Belo Horizonte, MG", "Uberlândia, MG");
        assert!(resolution.resolved);
        assert_eq!(resolution.rate, 18.0);
    }

    #[test]
    fn test_lower_case_state_codes_resolve() {
        let resolution = resolve_rate("são paulo, sp", "rio de janeiro, rj");
        assert!(resolution.resolved);
        assert_eq!(resolution.rate, 12.0);
    }

    #[test]
    fn test_last_comma_wins() {
        let resolution = resolve_rate("Santa Bárbara d'Oeste, interior, SP", "Niterói, RJ");
        assert!(resolution.resolved);
        assert_eq!(resolution.rate, 12.0);
    }

    // The next three pin down the permissive fallback: a route that cannot
    // be classified silently prices with a zero tax rate.

    #[test]
    fn test_fallback_endpoint_without_state_suffix() {
        let resolution = resolve_rate("Unknown Place", "Also Unknown");
        assert!(!resolution.resolved);
        assert_eq!(resolution.rate, 0.0);
    }

    #[test]
    fn test_fallback_unknown_state_code() {
        let resolution = resolve_rate("Somewhere, ZZ", "Rio de Janeiro, RJ");
        assert!(!resolution.resolved);
        assert_eq!(resolution.rate, 0.0);
    }

    #[test]
    fn test_fallback_empty_endpoint() {
        let resolution = resolve_rate("", "Rio de Janeiro, RJ");
        assert!(!resolution.resolved);
        assert_eq!(resolution.rate, 0.0);

        let resolution = resolve_rate("São Paulo, SP", "Campinas, ");
        assert!(!resolution.resolved);
        assert_eq!(resolution.rate, 0.0);
    }

    #[test]
    fn test_state_code_extraction() {
        assert_eq!(state_code("São Paulo, SP").as_deref(), Some("SP"));
        assert_eq!(state_code("  Recife ,  pe ").as_deref(), Some("PE"));
        assert_eq!(state_code("NoComma").as_deref(), Some("NOCOMMA"));
        assert_eq!(state_code("Campinas, "), None);
        assert_eq!(state_code(""), None);
    }
}
