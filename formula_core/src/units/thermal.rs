//! Thermal and fluid units: temperature, energy, viscosity.
//!
//! Temperature is the one affine family. Its base is kelvin and the Celsius
//! and Fahrenheit scales carry an offset as well as a factor, so conversion
//! must always go through [`Unit::to_base`] / [`Unit::from_base`] rather than
//! multiplying by [`Unit::factor`] alone.

use serde::{Deserialize, Serialize};

use crate::units::Unit;

/// Temperature scales. Base: kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "°C", alias = "C", alias = "degC", alias = "celsius")]
    Celsius,
    #[serde(rename = "°F", alias = "F", alias = "degF", alias = "fahrenheit")]
    Fahrenheit,
    #[serde(rename = "K", alias = "kelvin")]
    Kelvin,
}

const CELSIUS_OFFSET_K: f64 = 273.15;
const FAHRENHEIT_ZERO_K: f64 = 459.67 * 5.0 / 9.0;

impl Unit for TemperatureUnit {
    const QUANTITY: &'static str = "temperature";
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            TemperatureUnit::Celsius => &["C", "degC", "celsius"],
            TemperatureUnit::Fahrenheit => &["F", "degF", "fahrenheit"],
            TemperatureUnit::Kelvin => &["kelvin"],
        }
    }

    fn factor(&self) -> f64 {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => 1.0,
            TemperatureUnit::Fahrenheit => 5.0 / 9.0,
        }
    }

    fn offset(&self) -> f64 {
        match self {
            TemperatureUnit::Celsius => CELSIUS_OFFSET_K,
            TemperatureUnit::Fahrenheit => FAHRENHEIT_ZERO_K,
            TemperatureUnit::Kelvin => 0.0,
        }
    }
}

impl_unit_text!(TemperatureUnit);

/// Convert a temperature in any scale to degrees Celsius
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    TemperatureUnit::Celsius.from_base(unit.to_base(value))
}

/// Convert degrees Celsius to any scale
pub fn from_celsius(celsius: f64, unit: TemperatureUnit) -> f64 {
    unit.from_base(TemperatureUnit::Celsius.to_base(celsius))
}

unit_enum! {
    /// Energy units. Base: joule.
    EnergyUnit, "energy" {
        #[default]
        Joule => "J", 1.0, ["joule", "joules"],
        Kilojoule => "kJ", 1.0e3, ["kilojoule", "kilojoules"],
        Megajoule => "MJ", 1.0e6, ["megajoule", "megajoules"],
        Millijoule => "mJ", 1.0e-3, ["millijoule", "millijoules"],
        Microjoule => "μJ", 1.0e-6, ["uJ", "µJ", "microjoule"],
        Nanojoule => "nJ", 1.0e-9, ["nanojoule"],
        WattHour => "Wh", 3600.0, ["watt hour", "watt hours"],
        MilliwattHour => "mWh", 3.6, [],
        KilowattHour => "kWh", 3.6e6, ["kilowatt hour", "kilowatt hours"],
        Calorie => "cal", 4.184, ["calorie", "calories"],
        Kilocalorie => "kcal", 4184.0, ["kilocalorie", "kilocalories", "Cal"],
        Electronvolt => "eV", 1.602176634e-19, ["electronvolt", "electronvolts"],
        FootPound => "ft·lbf", 1.3558179483314, ["ft-lb", "ft·lb", "ft-lbf"],
    }
}

unit_enum! {
    /// Dynamic (absolute) viscosity units. Base: pascal-second.
    DynamicViscosityUnit, "dynamic viscosity" {
        #[default]
        PascalSecond => "Pa·s", 1.0, ["Pa-s", "Pa s", "N·s/m²", "N-s/m2"],
        MillipascalSecond => "mPa·s", 1.0e-3, ["mPa-s", "mPa s"],
        Centipoise => "cP", 1.0e-3, ["cp", "centipoise"],
        Poise => "P", 0.1, ["poise"],
    }
}

unit_enum! {
    /// Kinematic viscosity units. Base: square metre per second.
    KinematicViscosityUnit, "kinematic viscosity" {
        #[default]
        SquareMeterPerSecond => "m²/s", 1.0, ["m2/s", "m^2/s"],
        Stokes => "St", 1.0e-4, ["stokes"],
        Centistokes => "cSt", 1.0e-6, ["cst", "centistokes"],
        SquareFootPerSecond => "ft²/s", 0.09290304, ["ft2/s", "ft^2/s"],
        SquareInchPerSecond => "in²/s", 0.00064516, ["in2/s", "in^2/s"],
    }
}
