//! ANTT freight price composition
//!
//! Combines the regulatory floor price with tolls, fees, ad-valorem
//! insurance, the "por dentro" ICMS gross-up, and the profit margin. The
//! margin applies to the floor price only, never to taxes or fees.

use cargas_types::{Error, Result};

use crate::model::{PriceQuote, QuoteRequest};
use crate::service::rate_resolver::{resolve_rate, RateResolution};
use crate::tariff::antt;

/// Price a request, resolving the ICMS rate from the route endpoints
///
/// Returns `Ok(None)` when the distance is missing or non-positive; the
/// caller is expected to ask for more input, not to treat this as a
/// failure.
pub fn calculate(request: &QuoteRequest) -> Result<Option<PriceQuote>> {
    let resolution = resolve_rate(&request.origin, &request.destination);
    calculate_with_rate(request, resolution)
}

/// Price a request against an already-resolved ICMS rate
///
/// A rate of 100% or more zeroes or negates the gross-up denominator and
/// is rejected as corrupted tariff data.
pub fn calculate_with_rate(
    request: &QuoteRequest,
    resolution: RateResolution,
) -> Result<Option<PriceQuote>> {
    if request.distance_km.is_nan() || request.distance_km <= 0.0 {
        return Ok(None);
    }
    if resolution.rate >= 100.0 {
        return Err(Error::InvalidIcmsRate(resolution.rate));
    }

    let coef = antt::coefficient(request.cargo_class, request.vehicle_class);
    let floor = coef.ccd * request.distance_km + coef.cc;
    let ad_valorem_value = request.invoice_value * request.ad_valorem_rate_percent / 100.0;

    // ICMS is charged "por dentro": the nominal rate applies to the
    // tax-inclusive total, so the tax-exclusive base is grossed up.
    // Profit is not part of the base.
    let base_for_icms = floor + request.toll_cost + request.collection_fee + ad_valorem_value;
    let icms_value = if resolution.rate > 0.0 {
        base_for_icms / (1.0 - resolution.rate / 100.0) - base_for_icms
    } else {
        0.0
    };

    let price_before_profit = base_for_icms + icms_value;
    let profit = floor * request.profit_margin_percent / 100.0;

    Ok(Some(PriceQuote {
        floor,
        ad_valorem_value,
        collection_fee: request.collection_fee,
        icms_rate: resolution.rate,
        icms_value,
        profit,
        total: price_before_profit + profit,
    }))
}
