use thiserror::Error;

use crate::fuel::CanonicalFuelType;

/// Convenient result alias for the timeofemissions library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Vendor translations and the per-fuel accessors are total and never
/// produce one of these; only caller-supplied labels and generation
/// totals are validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Raised when a label does not name any canonical fuel type.
    #[error("unknown fuel type: {label}{}", format_suggestions(.suggestions))]
    UnknownFuelType {
        label: String,
        suggestions: Vec<String>,
    },

    /// Raised when a generation sample carries an unusable energy value.
    #[error("invalid generation for {fuel}: {megawatt_hours} MWh must be finite and non-negative")]
    InvalidGeneration {
        fuel: CanonicalFuelType,
        megawatt_hours: f64,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
