//! Electrical units. All bases are SI.

unit_enum! {
    /// Capacitance units. Base: farad.
    CapacitanceUnit, "capacitance" {
        #[default]
        Farad => "F", 1.0, ["farad", "farads"],
        Millifarad => "mF", 1.0e-3, ["millifarad"],
        Microfarad => "μF", 1.0e-6, ["uF", "µF", "microfarad"],
        Nanofarad => "nF", 1.0e-9, ["nanofarad"],
        Picofarad => "pF", 1.0e-12, ["picofarad"],
    }
}

unit_enum! {
    /// Electric charge units. Base: coulomb.
    ChargeUnit, "charge" {
        #[default]
        Coulomb => "C", 1.0, ["coulomb", "coulombs"],
        Millicoulomb => "mC", 1.0e-3, ["millicoulomb"],
        Microcoulomb => "μC", 1.0e-6, ["uC", "µC", "microcoulomb"],
        Nanocoulomb => "nC", 1.0e-9, ["nanocoulomb"],
        Picocoulomb => "pC", 1.0e-12, ["picocoulomb"],
    }
}

unit_enum! {
    /// Voltage units. Base: volt.
    VoltageUnit, "voltage" {
        #[default]
        Volt => "V", 1.0, ["volt", "volts"],
        Kilovolt => "kV", 1.0e3, ["kilovolt", "kilovolts"],
        Millivolt => "mV", 1.0e-3, ["millivolt", "millivolts"],
        Microvolt => "μV", 1.0e-6, ["uV", "µV", "microvolt"],
    }
}

unit_enum! {
    /// Inductance units. Base: henry.
    InductanceUnit, "inductance" {
        #[default]
        Henry => "H", 1.0, ["henry", "henries"],
        Millihenry => "mH", 1.0e-3, ["millihenry"],
        Microhenry => "μH", 1.0e-6, ["uH", "µH", "microhenry"],
        Nanohenry => "nH", 1.0e-9, ["nanohenry"],
    }
}

unit_enum! {
    /// Resistance units. Base: ohm.
    ResistanceUnit, "resistance" {
        #[default]
        Ohm => "Ω", 1.0, ["ohm", "ohms", "Ohm"],
        Milliohm => "mΩ", 1.0e-3, ["mohm", "milliohm"],
        Kiloohm => "kΩ", 1.0e3, ["kohm", "kiloohm"],
        Megaohm => "MΩ", 1.0e6, ["Mohm", "megaohm"],
    }
}

unit_enum! {
    /// Electrical resistivity units. Base: ohm-metre.
    ///
    /// Wire tables usually quote Ω·mm²/m, which equals μΩ·m.
    ResistivityUnit, "resistivity" {
        #[default]
        OhmMeter => "Ω·m", 1.0, ["ohm-m", "ohm m"],
        OhmSquareMillimeterPerMeter => "Ω·mm²/m", 1.0e-6, ["ohm-mm2/m", "μΩ·m", "uohm-m"],
        MicroohmCentimeter => "μΩ·cm", 1.0e-8, ["uohm-cm"],
        OhmCentimeter => "Ω·cm", 1.0e-2, ["ohm-cm"],
    }
}

unit_enum! {
    /// Current units. Base: ampere.
    CurrentUnit, "current" {
        #[default]
        Ampere => "A", 1.0, ["amp", "amps", "ampere", "amperes"],
        Milliampere => "mA", 1.0e-3, ["milliamp", "milliamps"],
        Microampere => "μA", 1.0e-6, ["uA", "µA", "microamp"],
        Kiloampere => "kA", 1.0e3, ["kiloamp", "kiloamps"],
    }
}

unit_enum! {
    /// Power units. Base: watt.
    PowerUnit, "power" {
        #[default]
        Watt => "W", 1.0, ["watt", "watts"],
        Milliwatt => "mW", 1.0e-3, ["milliwatt", "milliwatts"],
        Kilowatt => "kW", 1.0e3, ["kilowatt", "kilowatts"],
        Megawatt => "MW", 1.0e6, ["megawatt", "megawatts"],
    }
}

unit_enum! {
    /// Frequency units. Base: hertz.
    FrequencyUnit, "frequency" {
        #[default]
        Hertz => "Hz", 1.0, ["hertz"],
        Kilohertz => "kHz", 1.0e3, ["kilohertz"],
        Megahertz => "MHz", 1.0e6, ["megahertz"],
        Gigahertz => "GHz", 1.0e9, ["gigahertz"],
    }
}
