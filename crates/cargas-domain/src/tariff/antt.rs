//! ANTT minimum-freight coefficient table
//!
//! Simplified coefficients following the ANTT price-floor methodology.
//! CCD is the displacement cost in R$/km; CC is the fixed
//! loading/unloading cost in R$. The table is total over every cargo
//! class and axle configuration.

use cargas_types::{CargoClass, VehicleClass};

/// Cost pair for one (cargo class, vehicle class) cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnttCoefficient {
    /// Displacement cost (R$/km)
    pub ccd: f64,
    /// Loading/unloading cost (R$)
    pub cc: f64,
}

/// Look up the coefficient cell for a cargo/vehicle pair
pub fn coefficient(cargo: CargoClass, vehicle: VehicleClass) -> AnttCoefficient {
    use CargoClass::{Bulk, Dangerous, Frigo, General};
    use VehicleClass::{Bitrem, Bitruck, Carreta, CarretaLs, Rodotrem, Toco, Truck};

    let (ccd, cc) = match (cargo, vehicle) {
        (General, Toco) => (3.50, 280.00),
        (General, Truck) => (4.20, 350.00),
        (General, Bitruck) => (5.10, 420.00),
        (General, Carreta) => (5.80, 500.00),
        (General, CarretaLs) => (6.50, 580.00),
        (General, Bitrem) => (7.20, 650.00),
        (General, Rodotrem) => (8.50, 750.00),

        (Bulk, Toco) => (3.60, 290.00),
        (Bulk, Truck) => (4.40, 360.00),
        (Bulk, Bitruck) => (5.30, 430.00),
        (Bulk, Carreta) => (6.00, 510.00),
        (Bulk, CarretaLs) => (6.80, 600.00),
        (Bulk, Bitrem) => (7.50, 680.00),
        (Bulk, Rodotrem) => (8.80, 780.00),

        (Frigo, Toco) => (4.10, 320.00),
        (Frigo, Truck) => (4.90, 400.00),
        (Frigo, Bitruck) => (5.90, 480.00),
        (Frigo, Carreta) => (6.80, 560.00),
        (Frigo, CarretaLs) => (7.60, 650.00),
        (Frigo, Bitrem) => (8.40, 720.00),
        (Frigo, Rodotrem) => (9.80, 850.00),

        (Dangerous, Toco) => (4.50, 350.00),
        (Dangerous, Truck) => (5.40, 450.00),
        (Dangerous, Bitruck) => (6.50, 520.00),
        (Dangerous, Carreta) => (7.40, 600.00),
        (Dangerous, CarretaLs) => (8.30, 700.00),
        (Dangerous, Bitrem) => (9.20, 800.00),
        (Dangerous, Rodotrem) => (10.50, 950.00),
    };
    AnttCoefficient { ccd, cc }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_six_axle_cell() {
        let coef = coefficient(CargoClass::General, VehicleClass::CarretaLs);
        assert_eq!(coef.ccd, 6.50);
        assert_eq!(coef.cc, 580.00);
    }

    #[test]
    fn test_every_cell_is_positive() {
        for cargo in CargoClass::ALL {
            for vehicle in VehicleClass::ALL {
                let coef = coefficient(cargo, vehicle);
                assert!(coef.ccd > 0.0, "{:?}/{:?} ccd", cargo, vehicle);
                assert!(coef.cc > 0.0, "{:?}/{:?} cc", cargo, vehicle);
            }
        }
    }

    #[test]
    fn test_costs_grow_with_axle_count() {
        for cargo in CargoClass::ALL {
            let mut previous: Option<AnttCoefficient> = None;
            for vehicle in VehicleClass::ALL {
                let coef = coefficient(cargo, vehicle);
                if let Some(prev) = previous {
                    assert!(coef.ccd > prev.ccd, "{:?}/{:?}", cargo, vehicle);
                    assert!(coef.cc > prev.cc, "{:?}/{:?}", cargo, vehicle);
                }
                previous = Some(coef);
            }
        }
    }

    #[test]
    fn test_dangerous_cargo_costs_most() {
        for vehicle in VehicleClass::ALL {
            let general = coefficient(CargoClass::General, vehicle);
            let dangerous = coefficient(CargoClass::Dangerous, vehicle);
            assert!(dangerous.ccd > general.ccd);
            assert!(dangerous.cc > general.cc);
        }
    }
}
