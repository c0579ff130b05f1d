//! Canonical fuel types and their carbon-intensity and color constants.
//!
//! - [`canonical`] - the [`CanonicalFuelType`] taxonomy, ordering, and unit conversions
//! - [`constants`] - per-fuel [`FuelProfile`] values and unit scale factors
//!
//! # Example
//!
//! ```
//! use timeofemissions_lib::fuel::CanonicalFuelType;
//!
//! let gas = CanonicalFuelType::NaturalGas;
//! assert_eq!(gas.carbon_intensity_grams_per_kwh(), 469.0);
//! assert_eq!(gas.carbon_dioxide_kilograms_for_mwh(2.0), 938.0);
//! assert_eq!(gas.display_color(), Some("#A52A2A"));
//! assert!(CanonicalFuelType::Wind < CanonicalFuelType::Coal);
//! ```

pub mod canonical;
pub mod constants;

pub use canonical::CanonicalFuelType;
pub use constants::{FuelProfile, GRAMS_PER_KILOGRAM, KILOGRAMS_PER_METRIC_TONNE};
