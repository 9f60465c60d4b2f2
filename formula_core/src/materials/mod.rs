//! # Materials Database
//!
//! Static property tables used by the calculators.
//!
//! - [`wire`] - Conductor resistivity and temperature coefficient
//!
//! ## Example
//!
//! ```rust
//! use formula_core::materials::WireMaterial;
//!
//! let copper = WireMaterial::from_str_flexible("copper").unwrap();
//! assert_eq!(copper.resistivity_ohm_mm2_per_m(), Some(0.0172));
//! assert!((copper.temp_coefficient() - 0.00393).abs() < 1e-12);
//! ```

pub mod wire;

pub use wire::WireMaterial;
