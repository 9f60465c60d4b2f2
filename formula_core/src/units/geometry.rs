//! Length and volume units.
//!
//! Length covers everything from micrometres (wire gauges) to parsecs
//! (orbital distances) so one selector serves every calculator.

unit_enum! {
    /// Length units. Base: metre.
    LengthUnit, "length" {
        #[default]
        Meter => "m", 1.0, ["meter", "meters", "metre"],
        Kilometer => "km", 1.0e3, ["kilometer", "kilometers"],
        Centimeter => "cm", 1.0e-2, ["centimeter", "centimeters"],
        Millimeter => "mm", 1.0e-3, ["millimeter", "millimeters"],
        Micrometer => "μm", 1.0e-6, ["um", "micron", "microns"],
        Inch => "in", 0.0254, ["inch", "inches"],
        Foot => "ft", 0.3048, ["foot", "feet"],
        Yard => "yd", 0.9144, ["yard", "yards"],
        Mile => "mi", 1609.344, ["mile", "miles"],
        AstronomicalUnit => "AU", 1.496e11, ["au"],
        LightYear => "ly", 9.461e15, ["light year", "light years"],
        Parsec => "pc", 3.086e16, ["parsec", "parsecs"],
    }
}

unit_enum! {
    /// Volume units. Base: cubic metre.
    VolumeUnit, "volume" {
        #[default]
        CubicCentimeter => "cc", 1.0e-6, ["cm³", "cm3", "mL", "ml"],
        Liter => "L", 1.0e-3, ["l", "liter", "liters", "litre"],
        CubicMeter => "m³", 1.0, ["m3"],
        CubicInch => "in³", 1.6387064e-5, ["in3", "cid"],
        CubicFoot => "ft³", 0.028316846592, ["ft3"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Quantity, Unit};

    #[test]
    fn test_inch_is_exact() {
        let q = Quantity::new(1.0, LengthUnit::Inch);
        assert!((q.in_unit(LengthUnit::Millimeter) - 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_engine_volumes() {
        // 2.0 L engine in cubic inches
        let q = Quantity::new(2.0, VolumeUnit::Liter);
        assert!((q.in_unit(VolumeUnit::CubicInch) - 122.047).abs() < 1e-3);
        assert!((q.in_unit(VolumeUnit::CubicCentimeter) - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_and_symbols() {
        assert_eq!(LengthUnit::default(), LengthUnit::Meter);
        assert_eq!(LengthUnit::ALL.len(), 12);
        assert_eq!(LengthUnit::Micrometer.to_string(), "μm");
        assert_eq!("ml".parse::<VolumeUnit>().unwrap(), VolumeUnit::CubicCentimeter);
    }
}
