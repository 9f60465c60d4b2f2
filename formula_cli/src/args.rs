//! Command line arguments for each calculator.
//!
//! Every calculator subcommand maps one-to-one onto a
//! [`CalculationItem`]; numeric fields left off the command line stay
//! blank, exactly as an omitted JSON key would.

use clap::{Args, ValueEnum};

use formula_core::calculations::capacitor_energy::CapacitorMode;
use formula_core::calculations::golden_ratio::GoldenRatioMode;
use formula_core::calculations::hoop_stress::HoopStressMode;
use formula_core::calculations::orbital_period::OrbitalMode;
use formula_core::calculations::resonant_frequency::ResonatorKind;
use formula_core::calculations::slope_percentage::SlopeMode;
use formula_core::calculations::tension::{MotionDirection, TensionMode};
use formula_core::calculations::watts_to_amps::CircuitType;
use formula_core::calculations::wire_resistance::WireMode;
use formula_core::calculations::*;
use formula_core::materials::WireMaterial;
use formula_core::settings::DryBulbStrategy;
use formula_core::units::*;

#[derive(Args, Debug)]
pub struct GoldenRatioArgs {
    /// value | multiply | divide | rectangle | check
    #[arg(long, default_value = "value")]
    pub mode: GoldenRatioMode,
    /// Length or ratio, depending on mode
    pub value: Option<f64>,
}

impl From<GoldenRatioArgs> for CalculationItem {
    fn from(a: GoldenRatioArgs) -> Self {
        CalculationItem::GoldenRatio(GoldenRatioInput {
            mode: a.mode,
            value: a.value,
        })
    }
}

#[derive(Args, Debug)]
pub struct PercentageChangeArgs {
    /// Original value
    #[arg(long = "old")]
    pub old_value: Option<f64>,
    /// New value
    #[arg(long = "new")]
    pub new_value: Option<f64>,
}

impl From<PercentageChangeArgs> for CalculationItem {
    fn from(a: PercentageChangeArgs) -> Self {
        CalculationItem::PercentageChange(PercentageChangeInput {
            old_value: a.old_value,
            new_value: a.new_value,
        })
    }
}

#[derive(Args, Debug)]
pub struct PercentageDifferenceArgs {
    #[arg(long)]
    pub value_a: Option<f64>,
    #[arg(long)]
    pub value_b: Option<f64>,
}

impl From<PercentageDifferenceArgs> for CalculationItem {
    fn from(a: PercentageDifferenceArgs) -> Self {
        CalculationItem::PercentageDifference(PercentageDifferenceInput {
            value_a: a.value_a,
            value_b: a.value_b,
        })
    }
}

#[derive(Args, Debug)]
pub struct SlopeArgs {
    /// rise_run | two_points | slope
    #[arg(long, default_value = "rise_run")]
    pub mode: SlopeMode,
    #[arg(long)]
    pub rise: Option<f64>,
    #[arg(long)]
    pub run: Option<f64>,
    #[arg(long)]
    pub x1: Option<f64>,
    #[arg(long)]
    pub y1: Option<f64>,
    #[arg(long)]
    pub x2: Option<f64>,
    #[arg(long)]
    pub y2: Option<f64>,
    /// Slope as a ratio (rise per unit run)
    #[arg(long)]
    pub slope: Option<f64>,
}

impl From<SlopeArgs> for CalculationItem {
    fn from(a: SlopeArgs) -> Self {
        CalculationItem::SlopePercentage(SlopeInput {
            mode: a.mode,
            rise: a.rise,
            run: a.run,
            x1: a.x1,
            y1: a.y1,
            x2: a.x2,
            y2: a.y2,
            slope: a.slope,
        })
    }
}

#[derive(Args, Debug)]
pub struct CapacitorEnergyArgs {
    /// energy_from_cv | energy_from_qv | voltage_charge_from_energy | voltage_from_energy_charge
    #[arg(long, default_value = "energy_from_cv")]
    pub mode: CapacitorMode,
    #[arg(long)]
    pub capacitance: Option<f64>,
    #[arg(long, default_value_t)]
    pub capacitance_unit: CapacitanceUnit,
    #[arg(long)]
    pub voltage: Option<f64>,
    #[arg(long, default_value_t)]
    pub voltage_unit: VoltageUnit,
    #[arg(long)]
    pub charge: Option<f64>,
    #[arg(long, default_value_t)]
    pub charge_unit: ChargeUnit,
    #[arg(long)]
    pub energy: Option<f64>,
    #[arg(long, default_value_t)]
    pub energy_unit: EnergyUnit,
}

impl From<CapacitorEnergyArgs> for CalculationItem {
    fn from(a: CapacitorEnergyArgs) -> Self {
        CalculationItem::CapacitorEnergy(CapacitorEnergyInput {
            mode: a.mode,
            capacitance: a.capacitance,
            capacitance_unit: a.capacitance_unit,
            voltage: a.voltage,
            voltage_unit: a.voltage_unit,
            charge: a.charge,
            charge_unit: a.charge_unit,
            energy: a.energy,
            energy_unit: a.energy_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct HoopStressArgs {
    /// stress | strain | thickness | pressure
    #[arg(long, default_value = "stress")]
    pub mode: HoopStressMode,
    #[arg(long)]
    pub pressure: Option<f64>,
    #[arg(long, default_value_t)]
    pub pressure_unit: PressureUnit,
    /// Mean radius
    #[arg(long)]
    pub radius: Option<f64>,
    #[arg(long, default_value_t)]
    pub radius_unit: LengthUnit,
    #[arg(long)]
    pub thickness: Option<f64>,
    #[arg(long, default_value_t)]
    pub thickness_unit: LengthUnit,
    #[arg(long = "modulus")]
    pub youngs_modulus: Option<f64>,
    #[arg(long, default_value_t)]
    pub modulus_unit: PressureUnit,
    #[arg(long = "poisson")]
    pub poisson_ratio: Option<f64>,
    #[arg(long = "allowable")]
    pub allowable_stress: Option<f64>,
    /// Unit for stresses, in and out
    #[arg(long, default_value_t)]
    pub stress_unit: PressureUnit,
}

impl From<HoopStressArgs> for CalculationItem {
    fn from(a: HoopStressArgs) -> Self {
        CalculationItem::HoopStress(HoopStressInput {
            mode: a.mode,
            pressure: a.pressure,
            pressure_unit: a.pressure_unit,
            radius: a.radius,
            radius_unit: a.radius_unit,
            thickness: a.thickness,
            thickness_unit: a.thickness_unit,
            youngs_modulus: a.youngs_modulus,
            modulus_unit: a.modulus_unit,
            poisson_ratio: a.poisson_ratio,
            allowable_stress: a.allowable_stress,
            stress_unit: a.stress_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct OrbitalPeriodArgs {
    /// period | semi_major_axis | central_mass
    #[arg(long, default_value = "period")]
    pub mode: OrbitalMode,
    #[arg(long = "axis")]
    pub semi_major_axis: Option<f64>,
    #[arg(long, default_value_t)]
    pub distance_unit: LengthUnit,
    #[arg(long = "mass")]
    pub central_mass: Option<f64>,
    #[arg(long, default_value_t)]
    pub mass_unit: MassUnit,
    #[arg(long)]
    pub period: Option<f64>,
    #[arg(long, default_value_t)]
    pub time_unit: TimeUnit,
}

impl From<OrbitalPeriodArgs> for CalculationItem {
    fn from(a: OrbitalPeriodArgs) -> Self {
        CalculationItem::OrbitalPeriod(OrbitalPeriodInput {
            mode: a.mode,
            semi_major_axis: a.semi_major_axis,
            distance_unit: a.distance_unit,
            central_mass: a.central_mass,
            mass_unit: a.mass_unit,
            period: a.period,
            time_unit: a.time_unit,
        })
    }
}

/// Dry-bulb search strategy
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    Bisection,
    FixedStep,
}

impl From<StrategyArg> for DryBulbStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bisection => Self::Bisection,
            StrategyArg::FixedStep => Self::FixedStep,
        }
    }
}

#[derive(Args, Debug)]
pub struct RelativeHumidityArgs {
    #[arg(long = "dry-bulb")]
    pub dry_bulb: Option<f64>,
    #[arg(long = "dew-point")]
    pub dew_point: Option<f64>,
    /// Percent
    #[arg(long = "rh")]
    pub relative_humidity: Option<f64>,
    #[arg(long, default_value_t)]
    pub temperature_unit: TemperatureUnit,
    /// Overrides the configured dry-bulb solver strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

impl RelativeHumidityArgs {
    pub fn input(&self) -> RelativeHumidityInput {
        RelativeHumidityInput {
            dry_bulb: self.dry_bulb,
            dew_point: self.dew_point,
            relative_humidity: self.relative_humidity,
            temperature_unit: self.temperature_unit,
        }
    }
}

#[derive(Args, Debug)]
pub struct ResonantFrequencyArgs {
    /// lc_circuit | mechanical
    #[arg(long, default_value = "lc_circuit")]
    pub mode: ResonatorKind,
    #[arg(long)]
    pub inductance: Option<f64>,
    #[arg(long, default_value_t)]
    pub inductance_unit: InductanceUnit,
    #[arg(long)]
    pub capacitance: Option<f64>,
    #[arg(long, default_value_t)]
    pub capacitance_unit: CapacitanceUnit,
    #[arg(long = "spring")]
    pub spring_constant: Option<f64>,
    #[arg(long, default_value_t)]
    pub spring_constant_unit: SpringConstantUnit,
    #[arg(long)]
    pub mass: Option<f64>,
    #[arg(long, default_value_t)]
    pub mass_unit: MassUnit,
    #[arg(long, default_value_t)]
    pub frequency_unit: FrequencyUnit,
    #[arg(long, default_value_t)]
    pub period_unit: TimeUnit,
}

impl From<ResonantFrequencyArgs> for CalculationItem {
    fn from(a: ResonantFrequencyArgs) -> Self {
        CalculationItem::ResonantFrequency(ResonantFrequencyInput {
            mode: a.mode,
            inductance: a.inductance,
            inductance_unit: a.inductance_unit,
            capacitance: a.capacitance,
            capacitance_unit: a.capacitance_unit,
            spring_constant: a.spring_constant,
            spring_constant_unit: a.spring_constant_unit,
            mass: a.mass,
            mass_unit: a.mass_unit,
            frequency_unit: a.frequency_unit,
            period_unit: a.period_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct TensionArgs {
    /// mass_acceleration | force
    #[arg(long, default_value = "mass_acceleration")]
    pub mode: TensionMode,
    #[arg(long)]
    pub mass: Option<f64>,
    #[arg(long, default_value_t)]
    pub mass_unit: MassUnit,
    /// static | up | down
    #[arg(long, default_value = "static")]
    pub direction: MotionDirection,
    /// Magnitude of the vertical acceleration
    #[arg(long)]
    pub acceleration: Option<f64>,
    #[arg(long, default_value_t)]
    pub acceleration_unit: AccelerationUnit,
    #[arg(long)]
    pub force: Option<f64>,
    #[arg(long, default_value_t)]
    pub force_unit: ForceUnit,
    #[arg(long, default_value_t)]
    pub tension_unit: ForceUnit,
}

impl From<TensionArgs> for CalculationItem {
    fn from(a: TensionArgs) -> Self {
        CalculationItem::Tension(TensionInput {
            mode: a.mode,
            mass: a.mass,
            mass_unit: a.mass_unit,
            direction: a.direction,
            acceleration: a.acceleration,
            acceleration_unit: a.acceleration_unit,
            force: a.force,
            force_unit: a.force_unit,
            tension_unit: a.tension_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct WaterViscosityArgs {
    pub temperature: Option<f64>,
    #[arg(long, default_value_t)]
    pub temperature_unit: TemperatureUnit,
    #[arg(long, default_value_t)]
    pub viscosity_unit: DynamicViscosityUnit,
    #[arg(long, default_value_t)]
    pub kinematic_unit: KinematicViscosityUnit,
}

impl From<WaterViscosityArgs> for CalculationItem {
    fn from(a: WaterViscosityArgs) -> Self {
        CalculationItem::WaterViscosity(WaterViscosityInput {
            temperature: a.temperature,
            temperature_unit: a.temperature_unit,
            viscosity_unit: a.viscosity_unit,
            kinematic_unit: a.kinematic_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct WattsToAmpsArgs {
    /// dc | ac
    #[arg(long, default_value = "dc")]
    pub circuit: CircuitType,
    #[arg(long)]
    pub power: Option<f64>,
    #[arg(long, default_value_t)]
    pub power_unit: PowerUnit,
    #[arg(long)]
    pub voltage: Option<f64>,
    #[arg(long, default_value_t)]
    pub voltage_unit: VoltageUnit,
    /// AC only, defaults to 1
    #[arg(long = "pf")]
    pub power_factor: Option<f64>,
    #[arg(long, default_value_t)]
    pub current_unit: CurrentUnit,
}

impl From<WattsToAmpsArgs> for CalculationItem {
    fn from(a: WattsToAmpsArgs) -> Self {
        CalculationItem::WattsToAmps(WattsToAmpsInput {
            circuit: a.circuit,
            power: a.power,
            power_unit: a.power_unit,
            voltage: a.voltage,
            voltage_unit: a.voltage_unit,
            power_factor: a.power_factor,
            current_unit: a.current_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct WireResistanceArgs {
    /// resistance | length | diameter | resistivity
    #[arg(long, default_value = "resistance")]
    pub mode: WireMode,
    #[arg(long, default_value = "copper", value_parser = WireMaterial::from_str_flexible)]
    pub material: WireMaterial,
    /// Resistivity at 20 °C for a custom material
    #[arg(long = "resistivity")]
    pub custom_resistivity: Option<f64>,
    #[arg(long, default_value_t)]
    pub resistivity_unit: ResistivityUnit,
    /// Temperature coefficient α, 1/°C
    #[arg(long = "alpha")]
    pub temperature_coefficient: Option<f64>,
    #[arg(long)]
    pub temperature: Option<f64>,
    #[arg(long, default_value_t)]
    pub temperature_unit: TemperatureUnit,
    #[arg(long)]
    pub length: Option<f64>,
    #[arg(long, default_value_t)]
    pub length_unit: LengthUnit,
    #[arg(long)]
    pub diameter: Option<f64>,
    #[arg(long, default_value_t)]
    pub diameter_unit: LengthUnit,
    #[arg(long)]
    pub resistance: Option<f64>,
    #[arg(long, default_value_t)]
    pub resistance_unit: ResistanceUnit,
}

impl From<WireResistanceArgs> for CalculationItem {
    fn from(a: WireResistanceArgs) -> Self {
        CalculationItem::WireResistance(WireResistanceInput {
            mode: a.mode,
            material: a.material,
            custom_resistivity: a.custom_resistivity,
            resistivity_unit: a.resistivity_unit,
            temperature_coefficient: a.temperature_coefficient,
            temperature: a.temperature,
            temperature_unit: a.temperature_unit,
            length: a.length,
            length_unit: a.length_unit,
            diameter: a.diameter,
            diameter_unit: a.diameter_unit,
            resistance: a.resistance,
            resistance_unit: a.resistance_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct EngineDisplacementArgs {
    #[arg(long)]
    pub bore: Option<f64>,
    #[arg(long)]
    pub stroke: Option<f64>,
    /// Unit of bore and stroke
    #[arg(long, default_value = "mm")]
    pub length_unit: LengthUnit,
    #[arg(long)]
    pub cylinders: Option<u32>,
    #[arg(long, default_value_t)]
    pub volume_unit: VolumeUnit,
}

impl From<EngineDisplacementArgs> for CalculationItem {
    fn from(a: EngineDisplacementArgs) -> Self {
        CalculationItem::EngineDisplacement(EngineDisplacementInput {
            bore: a.bore,
            stroke: a.stroke,
            length_unit: a.length_unit,
            cylinders: a.cylinders,
            volume_unit: a.volume_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct ElongationArgs {
    #[arg(long = "original")]
    pub original_length: Option<f64>,
    #[arg(long = "final")]
    pub final_length: Option<f64>,
    #[arg(long = "change")]
    pub elongation: Option<f64>,
    #[arg(long, default_value_t)]
    pub length_unit: LengthUnit,
}

impl From<ElongationArgs> for CalculationItem {
    fn from(a: ElongationArgs) -> Self {
        CalculationItem::Elongation(ElongationInput {
            original_length: a.original_length,
            final_length: a.final_length,
            elongation: a.elongation,
            length_unit: a.length_unit,
        })
    }
}

#[derive(Args, Debug)]
pub struct WorkArgs {
    #[arg(long)]
    pub work: Option<f64>,
    #[arg(long, default_value_t)]
    pub energy_unit: EnergyUnit,
    #[arg(long)]
    pub force: Option<f64>,
    #[arg(long, default_value_t)]
    pub force_unit: ForceUnit,
    #[arg(long)]
    pub distance: Option<f64>,
    #[arg(long, default_value_t)]
    pub distance_unit: LengthUnit,
    /// Degrees between force and displacement
    #[arg(long)]
    pub angle: Option<f64>,
}

impl From<WorkArgs> for CalculationItem {
    fn from(a: WorkArgs) -> Self {
        CalculationItem::Work(WorkInput {
            work: a.work,
            energy_unit: a.energy_unit,
            force: a.force,
            force_unit: a.force_unit,
            distance: a.distance,
            distance_unit: a.distance_unit,
            angle: a.angle,
        })
    }
}
