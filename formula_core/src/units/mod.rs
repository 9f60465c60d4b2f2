//! # Unit Types
//!
//! Every physical quantity the calculators accept has its own unit enum
//! (e.g. [`LengthUnit`], [`PressureUnit`]). Each unit knows how to convert a
//! value to and from the family's canonical base unit, and a [`Quantity`]
//! pairs a number with one of those units.
//!
//! ## Design
//!
//! - Conversion is a single multiplicative factor for nearly every unit. The
//!   only affine family is temperature, which also carries an offset.
//! - Units serialize as their display symbol (`"μF"`, `"kPa"`), and accept
//!   ASCII aliases on input (`"uF"`), so JSON stays readable.
//! - Unknown symbols are reported as [`CalcError::UnknownUnit`], never guessed.
//!
//! ## Base Units
//!
//! | Family | Base |
//! |--------|------|
//! | Length | m |
//! | Volume | m³ |
//! | Mass | kg |
//! | Time | s |
//! | Force | N |
//! | Pressure / stress | Pa |
//! | Energy | J |
//! | Temperature | K |
//! | Electrical | SI (F, C, V, H, Ω, A, W, Hz) |
//!
//! ## Example
//!
//! ```rust
//! use formula_core::units::{Quantity, LengthUnit, Unit};
//!
//! let bore = Quantity::new(86.0, LengthUnit::Millimeter);
//! assert!((bore.to_base() - 0.086).abs() < 1e-12);
//!
//! let inches = bore.convert_to(LengthUnit::Inch);
//! assert!((inches.value - 3.3858).abs() < 1e-4);
//!
//! assert_eq!(LengthUnit::parse("um").unwrap(), LengthUnit::Micrometer);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Unit Trait
// ============================================================================

/// A unit of measure belonging to one physical quantity family.
pub trait Unit: Copy + Eq + std::fmt::Debug + 'static {
    /// Name of the quantity family, used in error messages ("length", "mass")
    const QUANTITY: &'static str;

    /// Every unit in the family, in selector order
    const ALL: &'static [Self];

    /// Display symbol (also the serialized form)
    fn symbol(&self) -> &'static str;

    /// Alternative spellings accepted on input
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Multiplicative factor from this unit to the base unit
    fn factor(&self) -> f64;

    /// Additive offset applied after scaling (non-zero only for affine scales)
    fn offset(&self) -> f64 {
        0.0
    }

    /// Convert a value expressed in this unit to the base unit
    fn to_base(&self, value: f64) -> f64 {
        value * self.factor() + self.offset()
    }

    /// Convert a base-unit value into this unit
    fn from_base(&self, base: f64) -> f64 {
        (base - self.offset()) / self.factor()
    }

    /// Resolve a unit from user text.
    ///
    /// Matching order: exact symbol, exact alias, then case-insensitive match
    /// against spelled-out names only. Short symbols are never matched
    /// case-insensitively since `mJ`/`MJ` and `mΩ`/`MΩ` differ by case alone.
    fn parse(text: &str) -> CalcResult<Self> {
        let wanted = text.trim();
        if let Some(unit) = Self::ALL
            .iter()
            .find(|u| u.symbol() == wanted || u.aliases().iter().any(|a| *a == wanted))
        {
            return Ok(*unit);
        }

        let lowered = wanted.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.aliases().iter().any(|a| is_spelled_out(a) && *a == lowered))
            .ok_or_else(|| CalcError::unknown_unit(Self::QUANTITY, wanted))
    }
}

fn is_spelled_out(alias: &str) -> bool {
    alias.len() > 3 && alias.chars().all(|c| c.is_ascii_lowercase() || c == ' ')
}

/// Generates a factor-only unit enum together with its [`Unit`],
/// `Display` and `FromStr` implementations.
///
/// Each line reads `Variant => "symbol", factor_to_base, ["alias", ...]`.
/// Mark the default selector unit with `#[default]`.
macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $quantity:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $symbol:literal, $factor:expr, [$($alias:literal),* $(,)?]
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $symbol $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $crate::units::Unit for $name {
            const QUANTITY: &'static str = $quantity;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn symbol(&self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)+
                }
            }

            fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*],)+
                }
            }

            fn factor(&self) -> f64 {
                match self {
                    $($name::$variant => $factor,)+
                }
            }
        }

        impl_unit_text!($name);
    };
}

/// `Display` (symbol) and `FromStr` (via [`Unit::parse`]) for a unit enum.
macro_rules! impl_unit_text {
    ($name:ty) => {
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::units::Unit::symbol(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::units::Unit>::parse(s)
            }
        }
    };
}

pub mod electrical;
pub mod geometry;
pub mod mechanics;
pub mod thermal;

pub use electrical::{
    CapacitanceUnit, ChargeUnit, CurrentUnit, FrequencyUnit, InductanceUnit, PowerUnit,
    ResistanceUnit, ResistivityUnit, VoltageUnit,
};
pub use geometry::{LengthUnit, VolumeUnit};
pub use mechanics::{
    AccelerationUnit, ForceUnit, MassUnit, PressureUnit, SpringConstantUnit, TimeUnit,
};
pub use thermal::{
    DynamicViscosityUnit, EnergyUnit, KinematicViscosityUnit, TemperatureUnit,
};

// ============================================================================
// Quantity
// ============================================================================

/// A numeric value paired with the unit it is expressed in.
///
/// ## JSON Example
///
/// ```json
/// { "value": 100.0, "unit": "μF" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity<U> {
    pub value: f64,
    pub unit: U,
}

impl<U: Unit> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// Build a quantity in `unit` from a base-unit value
    pub fn from_base(base: f64, unit: U) -> Self {
        Self {
            value: unit.from_base(base),
            unit,
        }
    }

    /// Value in the family's base unit
    pub fn to_base(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// Same physical quantity expressed in another unit
    pub fn convert_to(&self, unit: U) -> Self {
        Self::from_base(self.to_base(), unit)
    }

    /// Value in the requested unit
    pub fn in_unit(&self, unit: U) -> f64 {
        unit.from_base(self.to_base())
    }
}

impl<U: Unit> std::fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

// ============================================================================
// String-Driven Conversion
// ============================================================================

/// Quantity families addressable by name, for free-form conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Length,
    Volume,
    Mass,
    Time,
    Force,
    Acceleration,
    SpringConstant,
    Pressure,
    Capacitance,
    Charge,
    Voltage,
    Inductance,
    Resistance,
    Resistivity,
    Current,
    Power,
    Frequency,
    Energy,
    Temperature,
    DynamicViscosity,
    KinematicViscosity,
}

impl UnitFamily {
    /// All families for listing
    pub const ALL: [UnitFamily; 21] = [
        UnitFamily::Length,
        UnitFamily::Volume,
        UnitFamily::Mass,
        UnitFamily::Time,
        UnitFamily::Force,
        UnitFamily::Acceleration,
        UnitFamily::SpringConstant,
        UnitFamily::Pressure,
        UnitFamily::Capacitance,
        UnitFamily::Charge,
        UnitFamily::Voltage,
        UnitFamily::Inductance,
        UnitFamily::Resistance,
        UnitFamily::Resistivity,
        UnitFamily::Current,
        UnitFamily::Power,
        UnitFamily::Frequency,
        UnitFamily::Energy,
        UnitFamily::Temperature,
        UnitFamily::DynamicViscosity,
        UnitFamily::KinematicViscosity,
    ];

    /// Family name as used in error messages and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            UnitFamily::Length => LengthUnit::QUANTITY,
            UnitFamily::Volume => VolumeUnit::QUANTITY,
            UnitFamily::Mass => MassUnit::QUANTITY,
            UnitFamily::Time => TimeUnit::QUANTITY,
            UnitFamily::Force => ForceUnit::QUANTITY,
            UnitFamily::Acceleration => AccelerationUnit::QUANTITY,
            UnitFamily::SpringConstant => SpringConstantUnit::QUANTITY,
            UnitFamily::Pressure => PressureUnit::QUANTITY,
            UnitFamily::Capacitance => CapacitanceUnit::QUANTITY,
            UnitFamily::Charge => ChargeUnit::QUANTITY,
            UnitFamily::Voltage => VoltageUnit::QUANTITY,
            UnitFamily::Inductance => InductanceUnit::QUANTITY,
            UnitFamily::Resistance => ResistanceUnit::QUANTITY,
            UnitFamily::Resistivity => ResistivityUnit::QUANTITY,
            UnitFamily::Current => CurrentUnit::QUANTITY,
            UnitFamily::Power => PowerUnit::QUANTITY,
            UnitFamily::Frequency => FrequencyUnit::QUANTITY,
            UnitFamily::Energy => EnergyUnit::QUANTITY,
            UnitFamily::Temperature => TemperatureUnit::QUANTITY,
            UnitFamily::DynamicViscosity => DynamicViscosityUnit::QUANTITY,
            UnitFamily::KinematicViscosity => KinematicViscosityUnit::QUANTITY,
        }
    }

    /// Parse a family name ("length", "spring-constant", "Dynamic Viscosity")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        UnitFamily::ALL
            .iter()
            .copied()
            .find(|family| family.name().replace(' ', "_") == normalized)
            .ok_or_else(|| CalcError::invalid_input("family", s, "Unknown quantity family"))
    }

    /// Symbols of every unit in the family, in selector order
    pub fn symbols(&self) -> Vec<&'static str> {
        match self {
            UnitFamily::Length => symbols_of::<LengthUnit>(),
            UnitFamily::Volume => symbols_of::<VolumeUnit>(),
            UnitFamily::Mass => symbols_of::<MassUnit>(),
            UnitFamily::Time => symbols_of::<TimeUnit>(),
            UnitFamily::Force => symbols_of::<ForceUnit>(),
            UnitFamily::Acceleration => symbols_of::<AccelerationUnit>(),
            UnitFamily::SpringConstant => symbols_of::<SpringConstantUnit>(),
            UnitFamily::Pressure => symbols_of::<PressureUnit>(),
            UnitFamily::Capacitance => symbols_of::<CapacitanceUnit>(),
            UnitFamily::Charge => symbols_of::<ChargeUnit>(),
            UnitFamily::Voltage => symbols_of::<VoltageUnit>(),
            UnitFamily::Inductance => symbols_of::<InductanceUnit>(),
            UnitFamily::Resistance => symbols_of::<ResistanceUnit>(),
            UnitFamily::Resistivity => symbols_of::<ResistivityUnit>(),
            UnitFamily::Current => symbols_of::<CurrentUnit>(),
            UnitFamily::Power => symbols_of::<PowerUnit>(),
            UnitFamily::Frequency => symbols_of::<FrequencyUnit>(),
            UnitFamily::Energy => symbols_of::<EnergyUnit>(),
            UnitFamily::Temperature => symbols_of::<TemperatureUnit>(),
            UnitFamily::DynamicViscosity => symbols_of::<DynamicViscosityUnit>(),
            UnitFamily::KinematicViscosity => symbols_of::<KinematicViscosityUnit>(),
        }
    }

    /// Convert `value` between two units of this family given as text
    pub fn convert(&self, value: f64, from: &str, to: &str) -> CalcResult<f64> {
        match self {
            UnitFamily::Length => convert_text::<LengthUnit>(value, from, to),
            UnitFamily::Volume => convert_text::<VolumeUnit>(value, from, to),
            UnitFamily::Mass => convert_text::<MassUnit>(value, from, to),
            UnitFamily::Time => convert_text::<TimeUnit>(value, from, to),
            UnitFamily::Force => convert_text::<ForceUnit>(value, from, to),
            UnitFamily::Acceleration => convert_text::<AccelerationUnit>(value, from, to),
            UnitFamily::SpringConstant => convert_text::<SpringConstantUnit>(value, from, to),
            UnitFamily::Pressure => convert_text::<PressureUnit>(value, from, to),
            UnitFamily::Capacitance => convert_text::<CapacitanceUnit>(value, from, to),
            UnitFamily::Charge => convert_text::<ChargeUnit>(value, from, to),
            UnitFamily::Voltage => convert_text::<VoltageUnit>(value, from, to),
            UnitFamily::Inductance => convert_text::<InductanceUnit>(value, from, to),
            UnitFamily::Resistance => convert_text::<ResistanceUnit>(value, from, to),
            UnitFamily::Resistivity => convert_text::<ResistivityUnit>(value, from, to),
            UnitFamily::Current => convert_text::<CurrentUnit>(value, from, to),
            UnitFamily::Power => convert_text::<PowerUnit>(value, from, to),
            UnitFamily::Frequency => convert_text::<FrequencyUnit>(value, from, to),
            UnitFamily::Energy => convert_text::<EnergyUnit>(value, from, to),
            UnitFamily::Temperature => convert_text::<TemperatureUnit>(value, from, to),
            UnitFamily::DynamicViscosity => convert_text::<DynamicViscosityUnit>(value, from, to),
            UnitFamily::KinematicViscosity => {
                convert_text::<KinematicViscosityUnit>(value, from, to)
            }
        }
    }
}

impl std::fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn symbols_of<U: Unit>() -> Vec<&'static str> {
    U::ALL.iter().map(|u| u.symbol()).collect()
}

fn convert_text<U: Unit>(value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let from = U::parse(from)?;
    let to = U::parse(to)?;
    Ok(Quantity::new(value, from).in_unit(to))
}

/// Convert a value between two units of the named family.
///
/// ```rust
/// use formula_core::units::convert;
///
/// let psi = convert("pressure", 1.0, "bar", "psi").unwrap();
/// assert!((psi - 14.5038).abs() < 1e-3);
/// ```
pub fn convert(family: &str, value: f64, from: &str, to: &str) -> CalcResult<f64> {
    UnitFamily::from_str_flexible(family)?.convert(value, from, to)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn round_trips<U: Unit>(value: f64) -> bool {
        U::ALL.iter().all(|unit| {
            let back = unit.from_base(unit.to_base(value));
            (back - value).abs() <= 1e-9 * value.abs().max(1.0)
        })
    }

    proptest! {
        #[test]
        fn every_unit_round_trips_through_base(value in -1.0e6f64..1.0e6) {
            prop_assert!(round_trips::<LengthUnit>(value));
            prop_assert!(round_trips::<VolumeUnit>(value));
            prop_assert!(round_trips::<MassUnit>(value));
            prop_assert!(round_trips::<TimeUnit>(value));
            prop_assert!(round_trips::<ForceUnit>(value));
            prop_assert!(round_trips::<AccelerationUnit>(value));
            prop_assert!(round_trips::<SpringConstantUnit>(value));
            prop_assert!(round_trips::<PressureUnit>(value));
            prop_assert!(round_trips::<CapacitanceUnit>(value));
            prop_assert!(round_trips::<ChargeUnit>(value));
            prop_assert!(round_trips::<VoltageUnit>(value));
            prop_assert!(round_trips::<InductanceUnit>(value));
            prop_assert!(round_trips::<ResistanceUnit>(value));
            prop_assert!(round_trips::<ResistivityUnit>(value));
            prop_assert!(round_trips::<CurrentUnit>(value));
            prop_assert!(round_trips::<PowerUnit>(value));
            prop_assert!(round_trips::<FrequencyUnit>(value));
            prop_assert!(round_trips::<EnergyUnit>(value));
            prop_assert!(round_trips::<TemperatureUnit>(value));
            prop_assert!(round_trips::<DynamicViscosityUnit>(value));
            prop_assert!(round_trips::<KinematicViscosityUnit>(value));
        }
    }

    #[test]
    fn test_parse_symbol_and_alias() {
        assert_eq!(CapacitanceUnit::parse("μF").unwrap(), CapacitanceUnit::Microfarad);
        assert_eq!(CapacitanceUnit::parse("uF").unwrap(), CapacitanceUnit::Microfarad);
        assert_eq!(LengthUnit::parse("Meters").unwrap(), LengthUnit::Meter);
    }

    #[test]
    fn test_parse_is_case_sensitive_for_symbols() {
        assert_eq!(EnergyUnit::parse("mJ").unwrap(), EnergyUnit::Millijoule);
        assert_eq!(EnergyUnit::parse("MJ").unwrap(), EnergyUnit::Megajoule);
        assert_eq!(ResistanceUnit::parse("MΩ").unwrap(), ResistanceUnit::Megaohm);
        assert_eq!(ResistanceUnit::parse("mΩ").unwrap(), ResistanceUnit::Milliohm);
    }

    #[test]
    fn test_unknown_unit() {
        let err = LengthUnit::parse("furlong").unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("length", "furlong"));
    }

    #[test]
    fn test_convert_by_family_name() {
        let ft = convert("length", 1.0, "m", "ft").unwrap();
        assert!((ft - 3.28084).abs() < 1e-5);

        let fahrenheit = convert("temperature", 100.0, "°C", "°F").unwrap();
        assert!((fahrenheit - 212.0).abs() < 1e-9);

        assert!(convert("flux", 1.0, "Wb", "Mx").is_err());
    }

    #[test]
    fn test_family_names_parse() {
        for family in UnitFamily::ALL {
            assert_eq!(UnitFamily::from_str_flexible(family.name()).unwrap(), family);
            assert!(!family.symbols().is_empty());
        }
        assert_eq!(
            UnitFamily::from_str_flexible("spring-constant").unwrap(),
            UnitFamily::SpringConstant
        );
    }

    #[test]
    fn test_quantity_serializes_symbol() {
        let q = Quantity::new(100.0, CapacitanceUnit::Microfarad);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"value":100.0,"unit":"μF"}"#);

        let parsed: Quantity<CapacitanceUnit> =
            serde_json::from_str(r#"{"value":1.0,"unit":"uF"}"#).unwrap();
        assert_eq!(parsed.unit, CapacitanceUnit::Microfarad);
    }
}
