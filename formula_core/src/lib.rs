//! # formula_core - Physics and Math Calculator Engine
//!
//! `formula_core` is the computational heart of Formulary: a set of small,
//! independent calculators (golden ratio, hoop stress, relative humidity,
//! wire resistance and more) with a clean, JSON-friendly API. Every input and
//! result is serializable, so the same engine can sit behind a CLI, a web
//! front end or a batch runner.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Typed units**: Every quantity carries its unit; formulas only see SI
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Each result lists its derivation steps and the
//!   registered equations they used
//!
//! ## Quick Start
//!
//! ```rust
//! use formula_core::calculations::hoop_stress::{calculate, HoopStressInput};
//! use formula_core::units::{LengthUnit, PressureUnit};
//!
//! let input = HoopStressInput {
//!     pressure: Some(2.0),
//!     pressure_unit: PressureUnit::Megapascal,
//!     radius: Some(100.0),
//!     radius_unit: LengthUnit::Millimeter,
//!     thickness: Some(5.0),
//!     thickness_unit: LengthUnit::Millimeter,
//!     stress_unit: PressureUnit::Megapascal,
//!     ..Default::default()
//! };
//! let result = calculate(&input).unwrap();
//! assert!((result.hoop_stress.unwrap().value - 40.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The calculators and the tagged [`CalculationItem`] dispatch
//! - [`equations`] - Pure formula functions and the equation registry
//! - [`units`] - Unit enums and [`Quantity`]
//! - [`materials`] - Conductor material table
//! - [`steps`] - Structured derivation steps
//! - [`settings`] - Formatting and solver settings (TOML)
//! - [`format`] - Number formatting
//! - [`validation`] - Shared input checks
//! - [`constants`] - Physical and empirical constants
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod equations;
pub mod errors;
pub mod format;
pub mod materials;
pub mod settings;
pub mod steps;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput, CalculationReport};
pub use errors::{CalcError, CalcResult};
pub use settings::Settings;
pub use steps::{Step, Term};
pub use units::{Quantity, Unit};
