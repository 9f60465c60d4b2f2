//! Mechanical units: mass, time, force, acceleration, stiffness, pressure.

unit_enum! {
    /// Mass units, including astronomical reference masses. Base: kilogram.
    MassUnit, "mass" {
        #[default]
        Kilogram => "kg", 1.0, ["kilogram", "kilograms"],
        Gram => "g", 1.0e-3, ["gram", "grams"],
        Milligram => "mg", 1.0e-6, ["milligram", "milligrams"],
        Pound => "lb", 0.45359237, ["lbm", "pound", "pounds"],
        Ounce => "oz", 0.028349523125, ["ounce", "ounces"],
        MetricTon => "t", 1000.0, ["ton", "tonne", "tonnes"],
        ShortTon => "US ton", 907.18474, ["short ton", "us_ton"],
        SolarMass => "M☉", 1.989e30, ["Msun", "solar mass"],
        EarthMass => "M🜨", 5.972e24, ["M⊕", "Mearth", "earth mass"],
        JupiterMass => "MJ", 1.898e27, ["Mjup", "jupiter mass"],
    }
}

unit_enum! {
    /// Time units. Base: second. A year is 365.25 days.
    TimeUnit, "time" {
        #[default]
        Second => "s", 1.0, ["sec", "second", "seconds"],
        Millisecond => "ms", 1.0e-3, ["millisecond", "milliseconds"],
        Minute => "min", 60.0, ["minute", "minutes"],
        Hour => "h", 3600.0, ["hr", "hour", "hours"],
        Day => "d", 86_400.0, ["day", "days"],
        Year => "yr", 31_557_600.0, ["y", "year", "years"],
    }
}

unit_enum! {
    /// Force units. Base: newton.
    ForceUnit, "force" {
        #[default]
        Newton => "N", 1.0, ["newton", "newtons"],
        Kilonewton => "kN", 1.0e3, ["kilonewton", "kilonewtons"],
        Millinewton => "mN", 1.0e-3, ["millinewton"],
        PoundForce => "lbf", 4.4482216152605, ["lb", "pound force"],
        OunceForce => "ozf", 0.27801385095378, ["oz", "ounce force"],
        Dyne => "dyn", 1.0e-5, ["dyne", "dynes"],
    }
}

unit_enum! {
    /// Acceleration units. Base: metre per second squared.
    AccelerationUnit, "acceleration" {
        #[default]
        MeterPerSecondSquared => "m/s²", 1.0, ["m/s2", "m/s^2"],
        CentimeterPerSecondSquared => "cm/s²", 1.0e-2, ["cm/s2", "cm/s^2", "gal"],
        FootPerSecondSquared => "ft/s²", 0.3048, ["ft/s2", "ft/s^2"],
        StandardGravity => "g", 9.80665, ["g0", "gee"],
        KilometerPerHourSquared => "km/h²", 1000.0 / (3600.0 * 3600.0), ["km/h2", "km/h^2"],
    }
}

unit_enum! {
    /// Spring constant (stiffness) units. Base: newton per metre.
    SpringConstantUnit, "spring constant" {
        #[default]
        NewtonPerMeter => "N/m", 1.0, [],
        NewtonPerCentimeter => "N/cm", 100.0, [],
        NewtonPerMillimeter => "N/mm", 1000.0, [],
        PoundPerInch => "lb/in", 175.126835246, ["lbf/in"],
        PoundPerFoot => "lb/ft", 14.593902937, ["lbf/ft"],
    }
}

unit_enum! {
    /// Pressure and stress units. Base: pascal.
    PressureUnit, "pressure" {
        #[default]
        Pascal => "Pa", 1.0, ["pascal", "pascals"],
        Kilopascal => "kPa", 1.0e3, ["kilopascal"],
        Megapascal => "MPa", 1.0e6, ["megapascal", "N/mm²", "N/mm2"],
        Gigapascal => "GPa", 1.0e9, ["gigapascal"],
        Atmosphere => "atm", 101_325.0, ["atmosphere", "atmospheres"],
        Bar => "bar", 1.0e5, [],
        Psi => "psi", 6894.757293168, ["lbf/in²"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Quantity, Unit};

    #[test]
    fn test_bar_to_psi() {
        let q = Quantity::new(1.0, PressureUnit::Bar);
        assert!((q.in_unit(PressureUnit::Psi) - 14.5038).abs() < 1e-4);
    }

    #[test]
    fn test_spring_constant_imperial() {
        // 1 lbf/in = 4.44822 N / 0.0254 m
        let expected = 4.4482216152605 / 0.0254;
        assert!((SpringConstantUnit::PoundPerInch.factor() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_force_accepts_plain_pound() {
        assert_eq!(ForceUnit::parse("lb").unwrap(), ForceUnit::PoundForce);
        assert_eq!(MassUnit::parse("lb").unwrap(), MassUnit::Pound);
    }

    #[test]
    fn test_year_is_julian() {
        let q = Quantity::new(1.0, TimeUnit::Year);
        assert!((q.in_unit(TimeUnit::Day) - 365.25).abs() < 1e-12);
    }
}
