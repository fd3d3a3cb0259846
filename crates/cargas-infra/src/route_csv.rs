//! CSV loader for batch quote requests
//!
//! Expected header:
//! origin,destination,distance_km,cargo,axles,toll,collection_fee,invoice_value,ad_valorem_pct,margin_pct
//!
//! The first three columns are required; the rest may be omitted entirely
//! or left empty per row, in which case the request falls back to the
//! field defaults (general cargo, 6 axles, zero fees).

use std::path::Path;

use thiserror::Error;

use cargas_domain::model::QuoteRequest;
use cargas_types::{CargoClass, VehicleClass};

#[derive(Error, Debug)]
pub enum RouteCsvError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid number in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid cargo class in row {row}: {value}")]
    InvalidCargoClass { row: usize, value: String },

    #[error("Invalid axle count in row {row}: {value}")]
    InvalidAxles { row: usize, value: String },
}

struct ColumnIndex {
    origin: usize,
    destination: usize,
    distance_km: usize,
    cargo: Option<usize>,
    axles: Option<usize>,
    toll: Option<usize>,
    collection_fee: Option<usize>,
    invoice_value: Option<usize>,
    ad_valorem_pct: Option<usize>,
    margin_pct: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, RouteCsvError> {
        let position = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let required = |name: &str| {
            position(name).ok_or_else(|| RouteCsvError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            origin: required("origin")?,
            destination: required("destination")?,
            distance_km: required("distance_km")?,
            cargo: position("cargo"),
            axles: position("axles"),
            toll: position("toll"),
            collection_fee: position("collection_fee"),
            invoice_value: position("invoice_value"),
            ad_valorem_pct: position("ad_valorem_pct"),
            margin_pct: position("margin_pct"),
        })
    }
}

/// Load quote requests from a UTF-8 CSV route file
pub fn load_requests_from_csv<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<QuoteRequest>, RouteCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::from_headers(&headers)?;

    let mut requests = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based file row, counting the header line
        let row = i + 2;
        requests.push(parse_record(&record, &index, row)?);
    }
    Ok(requests)
}

fn parse_record(
    record: &csv::StringRecord,
    index: &ColumnIndex,
    row: usize,
) -> Result<QuoteRequest, RouteCsvError> {
    let cell = |idx: Option<usize>| {
        idx.and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    };

    let origin = record.get(index.origin).unwrap_or_default().to_string();
    let destination = record
        .get(index.destination)
        .unwrap_or_default()
        .to_string();
    let distance_km = parse_number(
        record.get(index.distance_km).unwrap_or_default(),
        "distance_km",
        row,
    )?;

    let cargo_class = match cell(index.cargo) {
        Some(value) => value
            .parse::<CargoClass>()
            .map_err(|_| RouteCsvError::InvalidCargoClass {
                row,
                value: value.to_string(),
            })?,
        None => CargoClass::default(),
    };

    let vehicle_class = match cell(index.axles) {
        Some(value) => {
            let axles: u8 = value.parse().map_err(|_| RouteCsvError::InvalidAxles {
                row,
                value: value.to_string(),
            })?;
            VehicleClass::from_axles(axles).ok_or_else(|| RouteCsvError::InvalidAxles {
                row,
                value: value.to_string(),
            })?
        }
        None => VehicleClass::default(),
    };

    let optional_number = |idx: Option<usize>, column: &str| -> Result<f64, RouteCsvError> {
        match cell(idx) {
            Some(value) => parse_number(value, column, row),
            None => Ok(0.0),
        }
    };

    Ok(QuoteRequest {
        distance_km,
        cargo_class,
        vehicle_class,
        toll_cost: optional_number(index.toll, "toll")?,
        collection_fee: optional_number(index.collection_fee, "collection_fee")?,
        invoice_value: optional_number(index.invoice_value, "invoice_value")?,
        ad_valorem_rate_percent: optional_number(index.ad_valorem_pct, "ad_valorem_pct")?,
        profit_margin_percent: optional_number(index.margin_pct, "margin_pct")?,
        origin,
        destination,
    })
}

fn parse_number(value: &str, column: &str, row: usize) -> Result<f64, RouteCsvError> {
    value.parse().map_err(|_| RouteCsvError::InvalidNumber {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_rows() {
        let file = write_csv(
            "origin,destination,distance_km,cargo,axles,toll,collection_fee,invoice_value,ad_valorem_pct,margin_pct\n\
             \"São Paulo, SP\",\"Rio de Janeiro, RJ\",430,general,6,85.50,0,120000,0.3,20\n\
             \"Curitiba, PR\",\"Salvador, BA\",2385,frigo,7,310,50,80000,0.5,18\n",
        );
        let requests = load_requests_from_csv(file.path()).unwrap();
        assert_eq!(requests.len(), 2);

        assert_eq!(requests[0].origin, "São Paulo, SP");
        assert_eq!(requests[0].distance_km, 430.0);
        assert_eq!(requests[0].toll_cost, 85.50);
        assert_eq!(requests[0].profit_margin_percent, 20.0);

        assert_eq!(requests[1].cargo_class, CargoClass::Frigo);
        assert_eq!(requests[1].vehicle_class, VehicleClass::Bitrem);
        assert_eq!(requests[1].ad_valorem_rate_percent, 0.5);
    }

    #[test]
    fn test_optional_columns_default() {
        let file = write_csv(
            "origin,destination,distance_km\n\
             \"São Paulo, SP\",\"Rio de Janeiro, RJ\",430\n",
        );
        let requests = load_requests_from_csv(file.path()).unwrap();
        assert_eq!(requests[0].cargo_class, CargoClass::General);
        assert_eq!(requests[0].vehicle_class.axles(), 6);
        assert_eq!(requests[0].toll_cost, 0.0);
        assert_eq!(requests[0].profit_margin_percent, 0.0);
    }

    #[test]
    fn test_empty_optional_cells_default() {
        let file = write_csv(
            "origin,destination,distance_km,cargo,axles,toll\n\
             \"São Paulo, SP\",\"Rio de Janeiro, RJ\",430,,,\n",
        );
        let requests = load_requests_from_csv(file.path()).unwrap();
        assert_eq!(requests[0].cargo_class, CargoClass::General);
        assert_eq!(requests[0].toll_cost, 0.0);
    }

    #[test]
    fn test_missing_required_column() {
        let file = write_csv("origin,distance_km\n\"São Paulo, SP\",430\n");
        let err = load_requests_from_csv(file.path()).unwrap_err();
        assert!(matches!(err, RouteCsvError::MissingColumn(c) if c == "destination"));
    }

    #[test]
    fn test_invalid_distance_reports_row() {
        let file = write_csv(
            "origin,destination,distance_km\n\
             \"São Paulo, SP\",\"Rio de Janeiro, RJ\",430\n\
             \"Santos, SP\",\"Campinas, SP\",abc\n",
        );
        let err = load_requests_from_csv(file.path()).unwrap_err();
        match err {
            RouteCsvError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, "distance_km");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_untabled_axle_count_is_rejected() {
        let file = write_csv(
            "origin,destination,distance_km,axles\n\
             \"São Paulo, SP\",\"Rio de Janeiro, RJ\",430,8\n",
        );
        let err = load_requests_from_csv(file.path()).unwrap_err();
        assert!(matches!(err, RouteCsvError::InvalidAxles { row: 2, .. }));
    }
}
