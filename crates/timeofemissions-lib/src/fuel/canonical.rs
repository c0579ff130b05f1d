//! The canonical fuel taxonomy shared by every grid operator translation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{self, FuelProfile, GRAMS_PER_KILOGRAM, KILOGRAMS_PER_METRIC_TONNE};

/// Minimum Jaro-Winkler similarity for a canonical name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Unified fuel category, independent of any one operator's reporting schema.
///
/// Ordering follows [`CanonicalFuelType::rank`]: roughly ascending emissions
/// intensity, with dispatchable load placed before the combustion fuels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalFuelType {
    Nuclear,
    Wind,
    SolarPv,
    SolarThermal,
    Geothermal,
    Hydroelectric,
    DispatchableLoad,
    Other,
    Biomass,
    NaturalGas,
    Coal,
}

impl CanonicalFuelType {
    /// Every canonical fuel type, in rank order.
    pub const ALL: [CanonicalFuelType; 11] = [
        CanonicalFuelType::Nuclear,
        CanonicalFuelType::Wind,
        CanonicalFuelType::SolarPv,
        CanonicalFuelType::SolarThermal,
        CanonicalFuelType::Geothermal,
        CanonicalFuelType::Hydroelectric,
        CanonicalFuelType::DispatchableLoad,
        CanonicalFuelType::Other,
        CanonicalFuelType::Biomass,
        CanonicalFuelType::NaturalGas,
        CanonicalFuelType::Coal,
    ];

    /// Constant attributes for this fuel type.
    pub const fn profile(self) -> FuelProfile {
        match self {
            CanonicalFuelType::Nuclear => constants::NUCLEAR,
            CanonicalFuelType::Wind => constants::WIND,
            CanonicalFuelType::SolarPv => constants::SOLAR_PV,
            CanonicalFuelType::SolarThermal => constants::SOLAR_THERMAL,
            CanonicalFuelType::Geothermal => constants::GEOTHERMAL,
            CanonicalFuelType::Hydroelectric => constants::HYDROELECTRIC,
            CanonicalFuelType::DispatchableLoad => constants::DISPATCHABLE_LOAD,
            CanonicalFuelType::Other => constants::OTHER,
            CanonicalFuelType::Biomass => constants::BIOMASS,
            CanonicalFuelType::NaturalGas => constants::NATURAL_GAS,
            CanonicalFuelType::Coal => constants::COAL,
        }
    }

    /// Position in the canonical ordering (0 sorts first).
    pub const fn rank(self) -> u8 {
        self.profile().rank
    }

    /// Upper snake case label, e.g. `NATURAL_GAS`.
    pub const fn name(self) -> &'static str {
        match self {
            CanonicalFuelType::Nuclear => "NUCLEAR",
            CanonicalFuelType::Wind => "WIND",
            CanonicalFuelType::SolarPv => "SOLAR_PV",
            CanonicalFuelType::SolarThermal => "SOLAR_THERMAL",
            CanonicalFuelType::Geothermal => "GEOTHERMAL",
            CanonicalFuelType::Hydroelectric => "HYDROELECTRIC",
            CanonicalFuelType::DispatchableLoad => "DISPATCHABLE_LOAD",
            CanonicalFuelType::Other => "OTHER",
            CanonicalFuelType::Biomass => "BIOMASS",
            CanonicalFuelType::NaturalGas => "NATURAL_GAS",
            CanonicalFuelType::Coal => "COAL",
        }
    }

    /// Grams of CO2 per kWh of electricity, exactly as tabulated.
    pub const fn carbon_intensity_grams_per_kwh(self) -> f64 {
        self.profile().grams_co2_per_kwh
    }

    /// Grams of CO2 emitted generating `kilowatt_hours`.
    pub fn carbon_dioxide_grams_for_kwh(self, kilowatt_hours: f64) -> f64 {
        self.carbon_intensity_grams_per_kwh() * kilowatt_hours
    }

    pub fn carbon_intensity_kilograms_per_kwh(self) -> f64 {
        self.carbon_intensity_grams_per_kwh() / GRAMS_PER_KILOGRAM
    }

    /// Kilograms of CO2 emitted generating `kilowatt_hours`.
    pub fn carbon_dioxide_kilograms_for_kwh(self, kilowatt_hours: f64) -> f64 {
        self.carbon_intensity_kilograms_per_kwh() * kilowatt_hours
    }

    /// Kilograms of CO2 per MWh.
    ///
    /// g/kWh and kg/MWh share the same 1000:1 scaling on both sides, so this
    /// returns the gram value unchanged rather than multiplying and dividing.
    pub const fn carbon_intensity_kilograms_per_mwh(self) -> f64 {
        self.carbon_intensity_grams_per_kwh()
    }

    /// Kilograms of CO2 emitted generating `megawatt_hours`.
    pub fn carbon_dioxide_kilograms_for_mwh(self, megawatt_hours: f64) -> f64 {
        self.carbon_intensity_kilograms_per_mwh() * megawatt_hours
    }

    pub fn carbon_intensity_metric_tonnes_per_mwh(self) -> f64 {
        self.carbon_intensity_kilograms_per_mwh() / KILOGRAMS_PER_METRIC_TONNE
    }

    /// Metric tonnes of CO2 emitted generating `megawatt_hours`.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeofemissions_lib::CanonicalFuelType;
    ///
    /// assert_eq!(CanonicalFuelType::Coal.carbon_dioxide_metric_tonnes_for_mwh(1.0), 1.001);
    /// ```
    pub fn carbon_dioxide_metric_tonnes_for_mwh(self, megawatt_hours: f64) -> f64 {
        self.carbon_intensity_metric_tonnes_per_mwh() * megawatt_hours
    }

    /// Hex RGB graph color, or `None` when no color has been assigned.
    pub const fn display_color(self) -> Option<&'static str> {
        self.profile().graph_color
    }

    pub const fn has_display_color(self) -> bool {
        self.display_color().is_some()
    }

    /// Canonical names resembling `label`, most similar first, at most `limit`.
    pub fn fuzzy_matches(label: &str, limit: usize) -> Vec<String> {
        let normalized = normalize_label(label);
        let mut scored: Vec<(CanonicalFuelType, f64)> = Self::ALL
            .iter()
            .map(|fuel| (*fuel, strsim::jaro_winkler(&normalized, fuel.name())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        scored
            .into_iter()
            .take(limit)
            .map(|(fuel, _)| fuel.name().to_string())
            .collect()
    }
}

/// Upper-cases `label` and turns hyphens and spaces into underscores.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

impl PartialOrd for CanonicalFuelType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalFuelType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for CanonicalFuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanonicalFuelType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize_label(s);
        Self::ALL
            .iter()
            .copied()
            .find(|fuel| fuel.name() == normalized)
            .ok_or_else(|| Error::UnknownFuelType {
                label: s.to_string(),
                suggestions: Self::fuzzy_matches(s, 3),
            })
    }
}
