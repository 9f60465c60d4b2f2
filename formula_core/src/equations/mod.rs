//! # Formula Library
//!
//! Every closed-form relationship the calculators use lives here as a pure
//! function over SI base units. Keeping them in one place enables:
//! - Easy verification against published references
//! - Documentation of assumptions and sign conventions
//! - Consistent implementation across calculators
//!
//! ## Modules
//!
//! - [`ratios`] - Golden ratio, percentage change and difference, slopes
//! - [`mechanics`] - Cord tension, work, strain, engine displacement, spring-mass systems
//! - [`pressure_vessel`] - Thin-walled cylinder stresses and strains
//! - [`orbital`] - Kepler's third law
//! - [`electrical`] - Capacitors, LC resonance, current draw, wire resistance
//! - [`psychrometrics`] - Saturation pressure, humidity and dew point, dry-bulb solver
//! - [`fluids`] - Water viscosity and density
//! - [`registry`] - Equation metadata and the `EQUATIONS.md` generator
//!
//! ## Sign Conventions
//!
//! - **Stress**: Positive in tension, so radial stress at the bore is −p
//! - **Vertical acceleration**: Positive upward
//! - **Percentage change**: Positive for an increase
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Bolton (1980) for the Magnus coefficients
//! - Al-Shemmeri (2012), Engineering Fluid Mechanics

pub mod electrical;
pub mod fluids;
pub mod mechanics;
pub mod orbital;
pub mod pressure_vessel;
pub mod psychrometrics;
pub mod ratios;
pub mod registry;

// Re-export commonly used items
pub use ratios::{
    golden_split,
    is_golden_ratio,
    percentage_change,
    percentage_difference,
    slope_angle_degrees,
    slope_from_points,
    slope_from_rise_run,
    slope_percentage,
};

pub use mechanics::{
    accelerating_tension,
    engine_displacement,
    engineering_strain,
    spring_mass_frequency,
    static_tension,
    work_done,
};

pub use pressure_vessel::{
    axial_stress,
    hoop_stress,
    principal_strains,
    radial_stress,
    PrincipalStrains,
};

pub use orbital::{central_mass, orbital_period, semi_major_axis};

pub use electrical::{
    ac_current,
    capacitor_energy_cv,
    dc_current,
    lc_resonant_frequency,
    wire_resistance,
};

pub use psychrometrics::{
    dew_point,
    relative_humidity,
    saturation_vapor_pressure,
    solve_dry_bulb,
    DryBulbSolution,
};

pub use fluids::{kinematic_viscosity, water_density, water_dynamic_viscosity};

pub use registry::{
    Equation,
    EquationCategory,
    EquationMetadata,
    Reference,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
