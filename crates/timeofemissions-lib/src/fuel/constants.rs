//! Per-fuel constants backing [`CanonicalFuelType`](super::CanonicalFuelType).
//!
//! Intensities are life-cycle grams of CO2 per kWh of electricity generated.
//! Ranks order fuels by emissions intensity and dispatchability; they are the
//! only source of truth for sorting and must stay dense from 0.

use serde::Serialize;

/// Grams in one kilogram.
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Kilograms in one metric tonne.
pub const KILOGRAMS_PER_METRIC_TONNE: f64 = 1000.0;

/// Immutable attributes attached to a canonical fuel type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FuelProfile {
    /// Position in the canonical ordering.
    pub rank: u8,
    /// Grams of CO2 emitted per kWh of electricity.
    pub grams_co2_per_kwh: f64,
    /// Hex RGB color used when graphing this fuel, if one is assigned.
    pub graph_color: Option<&'static str>,
}

pub const NUCLEAR: FuelProfile = FuelProfile {
    rank: 0,
    grams_co2_per_kwh: 16.0,
    graph_color: Some("#F9A848"),
};

pub const WIND: FuelProfile = FuelProfile {
    rank: 1,
    grams_co2_per_kwh: 12.0,
    graph_color: Some("#79D24C"),
};

pub const SOLAR_PV: FuelProfile = FuelProfile {
    rank: 2,
    grams_co2_per_kwh: 46.0,
    graph_color: None,
};

pub const SOLAR_THERMAL: FuelProfile = FuelProfile {
    rank: 3,
    grams_co2_per_kwh: 22.0,
    graph_color: None,
};

pub const GEOTHERMAL: FuelProfile = FuelProfile {
    rank: 4,
    grams_co2_per_kwh: 45.0,
    graph_color: None,
};

pub const HYDROELECTRIC: FuelProfile = FuelProfile {
    rank: 5,
    grams_co2_per_kwh: 4.0,
    graph_color: Some("#204C79"),
};

/// Curtailable demand; zero emissions, but ranked after the clean generators.
pub const DISPATCHABLE_LOAD: FuelProfile = FuelProfile {
    rank: 6,
    grams_co2_per_kwh: 0.0,
    graph_color: None,
};

/// Ontario's "Other" generators are mostly biomass, so OTHER carries the
/// biomass intensity and color. Provisional until confirmed for other regions.
pub const OTHER: FuelProfile = FuelProfile {
    rank: 7,
    grams_co2_per_kwh: BIOMASS.grams_co2_per_kwh,
    graph_color: BIOMASS.graph_color,
};

pub const BIOMASS: FuelProfile = FuelProfile {
    rank: 8,
    grams_co2_per_kwh: 18.0,
    graph_color: Some("#999966"),
};

pub const NATURAL_GAS: FuelProfile = FuelProfile {
    rank: 9,
    grams_co2_per_kwh: 469.0,
    graph_color: Some("#A52A2A"),
};

pub const COAL: FuelProfile = FuelProfile {
    rank: 10,
    grams_co2_per_kwh: 1001.0,
    graph_color: Some("#000000"),
};
