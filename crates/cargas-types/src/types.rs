//! Classification keys for the ANTT coefficient table

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Cargo classification (ANTT table row)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CargoClass {
    /// Carga geral
    #[default]
    General,
    /// Granel sólido
    Bulk,
    /// Frigorificada
    Frigo,
    /// Perigosa
    Dangerous,
}

impl CargoClass {
    pub const ALL: [CargoClass; 4] = [
        CargoClass::General,
        CargoClass::Bulk,
        CargoClass::Frigo,
        CargoClass::Dangerous,
    ];

    /// Display label in Portuguese
    pub fn label(&self) -> &'static str {
        match self {
            CargoClass::General => "Carga Geral",
            CargoClass::Bulk => "Granel Sólido",
            CargoClass::Frigo => "Frigorificada",
            CargoClass::Dangerous => "Perigosa",
        }
    }
}

impl std::str::FromStr for CargoClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(CargoClass::General),
            "bulk" => Ok(CargoClass::Bulk),
            "frigo" => Ok(CargoClass::Frigo),
            "dangerous" => Ok(CargoClass::Dangerous),
            other => Err(format!("unknown cargo class: {}", other)),
        }
    }
}

impl std::fmt::Display for CargoClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CargoClass::General => write!(f, "general"),
            CargoClass::Bulk => write!(f, "bulk"),
            CargoClass::Frigo => write!(f, "frigo"),
            CargoClass::Dangerous => write!(f, "dangerous"),
        }
    }
}

/// Vehicle axle configuration (ANTT table column)
///
/// The regulated configurations skip 8 axles; `from_axles` rejects any
/// count outside the seven tabled ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    /// 2 eixos
    Toco,
    /// 3 eixos
    Truck,
    /// 4 eixos
    Bitruck,
    /// 5 eixos (carreta 2 eixos)
    Carreta,
    /// 6 eixos (carreta 3 eixos)
    #[default]
    CarretaLs,
    /// 7 eixos
    Bitrem,
    /// 9 eixos
    Rodotrem,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 7] = [
        VehicleClass::Toco,
        VehicleClass::Truck,
        VehicleClass::Bitruck,
        VehicleClass::Carreta,
        VehicleClass::CarretaLs,
        VehicleClass::Bitrem,
        VehicleClass::Rodotrem,
    ];

    /// Determine vehicle class from axle count
    pub fn from_axles(axles: u8) -> Option<Self> {
        match axles {
            2 => Some(VehicleClass::Toco),
            3 => Some(VehicleClass::Truck),
            4 => Some(VehicleClass::Bitruck),
            5 => Some(VehicleClass::Carreta),
            6 => Some(VehicleClass::CarretaLs),
            7 => Some(VehicleClass::Bitrem),
            9 => Some(VehicleClass::Rodotrem),
            _ => None,
        }
    }

    pub fn axles(&self) -> u8 {
        match self {
            VehicleClass::Toco => 2,
            VehicleClass::Truck => 3,
            VehicleClass::Bitruck => 4,
            VehicleClass::Carreta => 5,
            VehicleClass::CarretaLs => 6,
            VehicleClass::Bitrem => 7,
            VehicleClass::Rodotrem => 9,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleClass::Toco => "Toco",
            VehicleClass::Truck => "Truck",
            VehicleClass::Bitruck => "Bitruck",
            VehicleClass::Carreta => "Carreta 2 Eixos",
            VehicleClass::CarretaLs => "Carreta LS",
            VehicleClass::Bitrem => "Bitrem",
            VehicleClass::Rodotrem => "Rodotrem",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} eixos)", self.label(), self.axles())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_axles_covers_tabled_configurations() {
        for class in VehicleClass::ALL {
            assert_eq!(VehicleClass::from_axles(class.axles()), Some(class));
        }
    }

    #[test]
    fn test_from_axles_rejects_untabled_counts() {
        assert_eq!(VehicleClass::from_axles(0), None);
        assert_eq!(VehicleClass::from_axles(1), None);
        assert_eq!(VehicleClass::from_axles(8), None);
        assert_eq!(VehicleClass::from_axles(10), None);
    }

    #[test]
    fn test_cargo_class_from_str() {
        assert_eq!("general".parse::<CargoClass>(), Ok(CargoClass::General));
        assert_eq!(" Frigo ".parse::<CargoClass>(), Ok(CargoClass::Frigo));
        assert!("refrigerated".parse::<CargoClass>().is_err());
    }

    #[test]
    fn test_defaults_match_calculator_form() {
        // The quote form pre-selects general cargo on a 6-axle rig
        assert_eq!(CargoClass::default(), CargoClass::General);
        assert_eq!(VehicleClass::default().axles(), 6);
    }
}
