//! Conductor Materials
//!
//! Electrical resistivity at 20 °C and linear temperature coefficient for
//! common wire and resistance-alloy materials.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Quantity, ResistivityUnit};

/// Conductor materials with tabulated resistivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireMaterial {
    #[default]
    Copper,
    #[serde(alias = "aluminium")]
    Aluminum,
    Silver,
    Gold,
    Nickel,
    Tungsten,
    Iron,
    StainlessSteel,
    Nichrome,
    Constantan,
    Manganin,
    /// User-supplied resistivity, no temperature correction
    Custom,
}

impl WireMaterial {
    /// All materials for UI selection
    pub const ALL: [WireMaterial; 12] = [
        WireMaterial::Copper,
        WireMaterial::Aluminum,
        WireMaterial::Silver,
        WireMaterial::Gold,
        WireMaterial::Nickel,
        WireMaterial::Tungsten,
        WireMaterial::Iron,
        WireMaterial::StainlessSteel,
        WireMaterial::Nichrome,
        WireMaterial::Constantan,
        WireMaterial::Manganin,
        WireMaterial::Custom,
    ];

    /// Resistivity at 20 °C in Ω·mm²/m, `None` for [`WireMaterial::Custom`]
    pub fn resistivity_ohm_mm2_per_m(&self) -> Option<f64> {
        match self {
            WireMaterial::Copper => Some(0.0172),
            WireMaterial::Aluminum => Some(0.0282),
            WireMaterial::Silver => Some(0.0159),
            WireMaterial::Gold => Some(0.0244),
            WireMaterial::Nickel => Some(0.0699),
            WireMaterial::Tungsten => Some(0.0533),
            WireMaterial::Iron => Some(0.0974),
            WireMaterial::StainlessSteel => Some(0.72),
            WireMaterial::Nichrome => Some(1.1),
            WireMaterial::Constantan => Some(0.49),
            WireMaterial::Manganin => Some(0.44),
            WireMaterial::Custom => None,
        }
    }

    /// Tabulated resistivity as a quantity
    pub fn resistivity(&self) -> Option<Quantity<ResistivityUnit>> {
        self.resistivity_ohm_mm2_per_m()
            .map(|rho| Quantity::new(rho, ResistivityUnit::OhmSquareMillimeterPerMeter))
    }

    /// Temperature coefficient of resistance α (1/°C)
    pub fn temp_coefficient(&self) -> f64 {
        match self {
            WireMaterial::Copper => 0.00393,
            WireMaterial::Aluminum => 0.00391,
            WireMaterial::Silver => 0.0038,
            WireMaterial::Gold => 0.0034,
            WireMaterial::Nickel => 0.006,
            WireMaterial::Tungsten => 0.0045,
            WireMaterial::Iron => 0.0055,
            WireMaterial::StainlessSteel => 0.0005,
            WireMaterial::Nichrome => 0.0004,
            WireMaterial::Constantan => 0.000008,
            WireMaterial::Manganin => 0.00001,
            WireMaterial::Custom => 0.0,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "copper" | "cu" => Ok(WireMaterial::Copper),
            "aluminum" | "aluminium" | "al" => Ok(WireMaterial::Aluminum),
            "silver" | "ag" => Ok(WireMaterial::Silver),
            "gold" | "au" => Ok(WireMaterial::Gold),
            "nickel" | "ni" => Ok(WireMaterial::Nickel),
            "tungsten" | "w" => Ok(WireMaterial::Tungsten),
            "iron" | "fe" => Ok(WireMaterial::Iron),
            "stainless_steel" | "stainless" => Ok(WireMaterial::StainlessSteel),
            "nichrome" => Ok(WireMaterial::Nichrome),
            "constantan" => Ok(WireMaterial::Constantan),
            "manganin" => Ok(WireMaterial::Manganin),
            "custom" => Ok(WireMaterial::Custom),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WireMaterial::Copper => "Copper",
            WireMaterial::Aluminum => "Aluminum",
            WireMaterial::Silver => "Silver",
            WireMaterial::Gold => "Gold",
            WireMaterial::Nickel => "Nickel",
            WireMaterial::Tungsten => "Tungsten",
            WireMaterial::Iron => "Iron",
            WireMaterial::StainlessSteel => "Stainless Steel",
            WireMaterial::Nichrome => "Nichrome",
            WireMaterial::Constantan => "Constantan",
            WireMaterial::Manganin => "Manganin",
            WireMaterial::Custom => "Custom",
        }
    }
}

impl std::fmt::Display for WireMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for WireMaterial {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_flexible(s)
    }
}
