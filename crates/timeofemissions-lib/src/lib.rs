//! timeofemissions library entry points.
//!
//! This crate normalizes the fuel classifications published by grid
//! operators (IESO, MISO, AESO) into one canonical fuel taxonomy and exposes
//! per-fuel carbon intensities, unit conversions, and graph colors. Reporting
//! and graphing consumers should depend on the items exported here instead of
//! keeping their own fuel tables.
//!

#![deny(warnings)]

pub mod diagnostics;
pub mod error;
pub mod fuel;
pub mod mix;
pub mod vendor;

pub use diagnostics::{DiagnosticSink, NoopSink, RecordingSink, TracingSink, Vendor};
pub use error::{Error, Result};
pub use fuel::{CanonicalFuelType, FuelProfile};
pub use mix::{summarize_generation, EmissionsSummary, GenerationSample};
pub use vendor::{
    from_aeso_generator_type, from_aeso_generator_type_with, from_ieso_fuel_type,
    from_ieso_fuel_type_with, from_miso_fuel_category, from_miso_fuel_category_with,
};
