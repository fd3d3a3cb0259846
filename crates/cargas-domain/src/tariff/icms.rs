//! Interstate ICMS rate table for freight transport
//!
//! Simplified table based on the general CONFAZ rules. Rows are keyed by
//! the origin UF, entries by the destination UF; internal (same-UF) rates
//! sit on the diagonal. Special fiscal regimes and exceptions are not
//! covered. Rates are whole-number percents.

type Row = (&'static str, &'static [(&'static str, f64)]);

pub const ICMS_RATES: &[Row] = &[
    // Sudeste
    ("SP", &[("AC", 7.0), ("AL", 7.0), ("AM", 7.0), ("AP", 7.0), ("BA", 7.0), ("CE", 7.0), ("DF", 7.0), ("ES", 7.0), ("GO", 7.0), ("MA", 7.0), ("MT", 7.0), ("MS", 7.0), ("MG", 12.0), ("PA", 7.0), ("PB", 7.0), ("PR", 12.0), ("PE", 7.0), ("PI", 7.0), ("RJ", 12.0), ("RN", 7.0), ("RS", 12.0), ("RO", 7.0), ("RR", 7.0), ("SC", 12.0), ("SP", 18.0), ("SE", 7.0), ("TO", 7.0)]),
    ("RJ", &[("AC", 7.0), ("AL", 7.0), ("AM", 7.0), ("AP", 7.0), ("BA", 7.0), ("CE", 7.0), ("DF", 7.0), ("ES", 7.0), ("GO", 7.0), ("MA", 7.0), ("MT", 7.0), ("MS", 7.0), ("MG", 12.0), ("PA", 7.0), ("PB", 7.0), ("PR", 12.0), ("PE", 7.0), ("PI", 7.0), ("RJ", 20.0), ("RN", 7.0), ("RS", 12.0), ("RO", 7.0), ("RR", 7.0), ("SC", 12.0), ("SP", 12.0), ("SE", 7.0), ("TO", 7.0)]),
    ("MG", &[("AC", 7.0), ("AL", 7.0), ("AM", 7.0), ("AP", 7.0), ("BA", 7.0), ("CE", 7.0), ("DF", 7.0), ("ES", 7.0), ("GO", 7.0), ("MA", 7.0), ("MT", 7.0), ("MS", 7.0), ("MG", 18.0), ("PA", 7.0), ("PB", 7.0), ("PR", 12.0), ("PE", 7.0), ("PI", 7.0), ("RJ", 12.0), ("RN", 7.0), ("RS", 12.0), ("RO", 7.0), ("RR", 7.0), ("SC", 12.0), ("SP", 12.0), ("SE", 7.0), ("TO", 7.0)]),
    ("ES", &[("AC", 7.0), ("AL", 7.0), ("AM", 7.0), ("AP", 7.0), ("BA", 7.0), ("CE", 7.0), ("DF", 7.0), ("ES", 17.0), ("GO", 7.0), ("MA", 7.0), ("MT", 7.0), ("MS", 7.0), ("MG", 12.0), ("PA", 7.0), ("PB", 7.0), ("PR", 12.0), ("PE", 7.0), ("PI", 7.0), ("RJ", 12.0), ("RN", 7.0), ("RS", 12.0), ("RO", 7.0), ("RR", 7.0), ("SC", 12.0), ("SP", 12.0), ("SE", 7.0), ("TO", 7.0)]),
    // Sul
    ("PR", &[("AC", 7.0), ("AL", 7.0), ("AM", 7.0), ("AP", 7.0), ("BA", 7.0), ("CE", 7.0), ("DF", 7.0), ("ES", 7.0), ("GO", 7.0), ("MA", 7.0), ("MT", 7.0), ("MS", 7.0), ("MG", 12.0), ("PA", 7.0), ("PB", 7.0), ("PR", 19.0), ("PE", 7.0), ("PI", 7.0), ("RJ", 12.0), ("RN", 7.0), ("RS", 12.0), ("RO", 7.0), ("RR", 7.0), ("SC", 12.0), ("SP", 12.0), ("SE", 7.0), ("TO", 7.0)]),
    ("SC", &[("AC", 7.0), ("AL", 7.0), ("AM", 7.0), ("AP", 7.0), ("BA", 7.0), ("CE", 7.0), ("DF", 7.0), ("ES", 7.0), ("GO", 7.0), ("MA", 7.0), ("MT", 7.0), ("MS", 7.0), ("MG", 12.0), ("PA", 7.0), ("PB", 7.0), ("PR", 12.0), ("PE", 7.0), ("PI", 7.0), ("RJ", 12.0), ("RN", 7.0), ("RS", 12.0), ("RO", 7.0), ("RR", 7.0), ("SC", 17.0), ("SP", 12.0), ("SE", 7.0), ("TO", 7.0)]),
    ("RS", &[("AC", 7.0), ("AL", 7.0), ("AM", 7.0), ("AP", 7.0), ("BA", 7.0), ("CE", 7.0), ("DF", 7.0), ("ES", 7.0), ("GO", 7.0), ("MA", 7.0), ("MT", 7.0), ("MS", 7.0), ("MG", 12.0), ("PA", 7.0), ("PB", 7.0), ("PR", 12.0), ("PE", 7.0), ("PI", 7.0), ("RJ", 12.0), ("RN", 7.0), ("RS", 17.0), ("RO", 7.0), ("RR", 7.0), ("SC", 12.0), ("SP", 12.0), ("SE", 7.0), ("TO", 7.0)]),
    // Centro-Oeste
    ("GO", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 17.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("MT", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 17.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("MS", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 17.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("DF", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 18.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    // Nordeste
    ("MA", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 20.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("PI", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 21.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("CE", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 20.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("RN", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 20.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("PB", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 18.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("PE", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 20.5), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("AL", &[("AC", 12.0), ("AL", 19.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("SE", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 19.0), ("TO", 12.0)]),
    ("BA", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 19.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    // Norte
    ("RO", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 17.5), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("AC", &[("AC", 17.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("AM", &[("AC", 12.0), ("AL", 12.0), ("AM", 20.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("RR", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 20.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("PA", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 19.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("AP", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 18.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 12.0)]),
    ("TO", &[("AC", 12.0), ("AL", 12.0), ("AM", 12.0), ("AP", 12.0), ("BA", 12.0), ("CE", 12.0), ("DF", 12.0), ("ES", 12.0), ("GO", 12.0), ("MA", 12.0), ("MT", 12.0), ("MS", 12.0), ("MG", 7.0), ("PA", 12.0), ("PB", 12.0), ("PR", 7.0), ("PE", 12.0), ("PI", 12.0), ("RJ", 7.0), ("RN", 12.0), ("RS", 7.0), ("RO", 12.0), ("RR", 12.0), ("SC", 7.0), ("SP", 7.0), ("SE", 12.0), ("TO", 20.0)]),
];

/// Rate for an origin/destination UF pair, if both are in the table
pub fn rate_between(origin_uf: &str, dest_uf: &str) -> Option<f64> {
    let (_, row) = ICMS_RATES.iter().find(|(uf, _)| *uf == origin_uf)?;
    row.iter().find(|(uf, _)| *uf == dest_uf).map(|&(_, rate)| rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sp_to_rj_interstate_rate() {
        assert_eq!(rate_between("SP", "RJ"), Some(12.0));
    }

    #[test]
    fn test_internal_rates_on_the_diagonal() {
        assert_eq!(rate_between("SP", "SP"), Some(18.0));
        assert_eq!(rate_between("RJ", "RJ"), Some(20.0));
        assert_eq!(rate_between("PE", "PE"), Some(20.5));
    }

    #[test]
    fn test_unknown_uf_has_no_rate() {
        assert_eq!(rate_between("XX", "SP"), None);
        assert_eq!(rate_between("SP", "XX"), None);
    }

    #[test]
    fn test_every_origin_covers_all_27_destinations() {
        assert_eq!(ICMS_RATES.len(), 27);
        for (origin, row) in ICMS_RATES {
            assert_eq!(row.len(), 27, "origin {} row is incomplete", origin);
            for (_, other) in ICMS_RATES {
                for (dest, _) in *other {
                    assert!(
                        row.iter().any(|(uf, _)| uf == dest),
                        "origin {} is missing destination {}",
                        origin,
                        dest
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_rate_stays_below_the_gross_up_limit() {
        // The "por dentro" gross-up divides by (1 - rate/100); the table
        // must never reach 100%.
        for (_, row) in ICMS_RATES {
            for (_, rate) in *row {
                assert!(*rate > 0.0 && *rate < 100.0);
            }
        }
    }

    #[test]
    fn test_internal_rate_is_highest_in_each_row() {
        for (origin, row) in ICMS_RATES {
            let internal = rate_between(origin, origin).unwrap();
            for (dest, rate) in *row {
                if dest != origin {
                    assert!(
                        internal > *rate,
                        "origin {}: internal {} not above interstate {} to {}",
                        origin,
                        internal,
                        rate,
                        dest
                    );
                }
            }
        }
    }
}
