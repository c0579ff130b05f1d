//! Emissions totals for a mix of generation by fuel.
//!
//! Reports usually arrive as energy per fuel per interval. This module folds
//! those samples into total energy, total CO2, and the average intensity of
//! the mix.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fuel::{CanonicalFuelType, KILOGRAMS_PER_METRIC_TONNE};

/// Energy generated by a single fuel over some interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSample {
    pub fuel: CanonicalFuelType,
    pub megawatt_hours: f64,
}

impl GenerationSample {
    pub fn new(fuel: CanonicalFuelType, megawatt_hours: f64) -> Self {
        Self {
            fuel,
            megawatt_hours,
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.megawatt_hours.is_finite() || self.megawatt_hours < 0.0 {
            return Err(Error::InvalidGeneration {
                fuel: self.fuel,
                megawatt_hours: self.megawatt_hours,
            });
        }
        Ok(())
    }
}

/// Aggregated emissions for a generation mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionsSummary {
    /// Total energy across all samples (MWh).
    pub total_megawatt_hours: f64,
    /// Total CO2 across all samples (metric tonnes).
    pub total_metric_tonnes: f64,
    /// Average intensity of the mix (kg CO2 per MWh); `None` with no energy.
    pub intensity_kilograms_per_mwh: Option<f64>,
    /// Metric tonnes of CO2 per fuel, in canonical order.
    pub by_fuel: BTreeMap<CanonicalFuelType, f64>,
}

/// Sum energy and emissions for `samples`.
///
/// Samples for the same fuel are combined. Every sample must carry a finite,
/// non-negative energy value.
///
/// # Examples
///
/// ```
/// use timeofemissions_lib::mix::{summarize_generation, GenerationSample};
/// use timeofemissions_lib::CanonicalFuelType;
///
/// let summary = summarize_generation(&[
///     GenerationSample::new(CanonicalFuelType::Coal, 1.0),
///     GenerationSample::new(CanonicalFuelType::Wind, 1.0),
/// ])
/// .unwrap();
///
/// assert_eq!(summary.total_megawatt_hours, 2.0);
/// let intensity = summary.intensity_kilograms_per_mwh.unwrap();
/// assert!((intensity - 506.5).abs() < 1e-9);
/// ```
pub fn summarize_generation(samples: &[GenerationSample]) -> Result<EmissionsSummary> {
    let mut total_megawatt_hours = 0.0;
    let mut total_metric_tonnes = 0.0;
    let mut by_fuel = BTreeMap::new();

    for sample in samples {
        sample.validate()?;

        let tonnes = sample
            .fuel
            .carbon_dioxide_metric_tonnes_for_mwh(sample.megawatt_hours);
        total_megawatt_hours += sample.megawatt_hours;
        total_metric_tonnes += tonnes;
        *by_fuel.entry(sample.fuel).or_insert(0.0) += tonnes;
    }

    let intensity_kilograms_per_mwh = if total_megawatt_hours > 0.0 {
        Some(total_metric_tonnes * KILOGRAMS_PER_METRIC_TONNE / total_megawatt_hours)
    } else {
        None
    };

    Ok(EmissionsSummary {
        total_megawatt_hours,
        total_metric_tonnes,
        intensity_kilograms_per_mwh,
        by_fuel,
    })
}
