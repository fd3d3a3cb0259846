//! Quote request and priced-result types

use serde::{Deserialize, Serialize};

use cargas_types::{CargoClass, VehicleClass};

/// Parameters for a single freight price calculation
///
/// Percentage fields are whole-number percents (18 means 18%). Monetary
/// fields are in R$.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Route distance in kilometers
    pub distance_km: f64,
    /// Cargo classification (ANTT table row)
    #[serde(default)]
    pub cargo_class: CargoClass,
    /// Vehicle axle configuration (ANTT table column)
    #[serde(default)]
    pub vehicle_class: VehicleClass,
    /// Toll costs along the route
    #[serde(default)]
    pub toll_cost: f64,
    /// Collection fee
    #[serde(default)]
    pub collection_fee: f64,
    /// Declared cargo value for ad-valorem purposes
    #[serde(default)]
    pub invoice_value: f64,
    /// Ad-valorem insurance rate over the invoice value
    #[serde(default)]
    pub ad_valorem_rate_percent: f64,
    /// Profit margin over the regulatory floor
    #[serde(default)]
    pub profit_margin_percent: f64,
    /// Origin endpoint, free text "City, UF"
    pub origin: String,
    /// Destination endpoint, free text "City, UF"
    pub destination: String,
}

impl QuoteRequest {
    pub fn new(distance_km: f64, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            distance_km,
            cargo_class: CargoClass::default(),
            vehicle_class: VehicleClass::default(),
            toll_cost: 0.0,
            collection_fee: 0.0,
            invoice_value: 0.0,
            ad_valorem_rate_percent: 0.0,
            profit_margin_percent: 0.0,
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn with_classes(mut self, cargo: CargoClass, vehicle: VehicleClass) -> Self {
        self.cargo_class = cargo;
        self.vehicle_class = vehicle;
        self
    }

    pub fn with_toll(mut self, toll_cost: f64) -> Self {
        self.toll_cost = toll_cost;
        self
    }

    pub fn with_margin(mut self, profit_margin_percent: f64) -> Self {
        self.profit_margin_percent = profit_margin_percent;
        self
    }

    pub fn with_ad_valorem(mut self, invoice_value: f64, rate_percent: f64) -> Self {
        self.invoice_value = invoice_value;
        self.ad_valorem_rate_percent = rate_percent;
        self
    }
}

/// A fully composed freight price
///
/// Every field is derived from the request and the static tables; a quote
/// has no identity and is recomputed fresh on each invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceQuote {
    /// ANTT minimum: ccd * distance + cc
    pub floor: f64,
    /// invoice_value * ad_valorem_rate / 100
    pub ad_valorem_value: f64,
    /// Pass-through collection fee
    pub collection_fee: f64,
    /// Resolved ICMS rate, whole-number percent
    pub icms_rate: f64,
    /// ICMS grossed up "por dentro" from the tax-exclusive subtotal
    pub icms_value: f64,
    /// Margin over the floor price only
    pub profit: f64,
    /// Final freight price
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = QuoteRequest::new(350.0, "Campinas, SP", "Santos, SP");
        assert_eq!(request.cargo_class, CargoClass::General);
        assert_eq!(request.vehicle_class.axles(), 6);
        assert_eq!(request.toll_cost, 0.0);
        assert_eq!(request.profit_margin_percent, 0.0);
    }

    #[test]
    fn test_request_deserializes_with_missing_optionals() {
        let json = r#"{
            "distance_km": 500,
            "origin": "São Paulo, SP",
            "destination": "Rio de Janeiro, RJ"
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.distance_km, 500.0);
        assert_eq!(request.cargo_class, CargoClass::General);
        assert_eq!(request.invoice_value, 0.0);
    }
}
