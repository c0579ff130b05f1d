//! Advisory side channel for vendor values that fall back to `OTHER`.
//!
//! Translations report here instead of logging directly so callers can route,
//! record, or silence the notices. Sinks are fire-and-forget and cannot fail
//! a translation.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::info;

/// Grid operator whose reporting vocabulary produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// Independent Electricity System Operator (Ontario).
    Ieso,
    /// Midcontinent Independent System Operator.
    Miso,
    /// Alberta Electric System Operator.
    Aeso,
}

impl Vendor {
    /// Name of the vendor's classification field, as used in log output.
    pub const fn category_field(self) -> &'static str {
        match self {
            Vendor::Ieso => "fuel_type",
            Vendor::Miso => "fuel_category",
            Vendor::Aeso => "generator_type",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Vendor::Ieso => "IESO",
            Vendor::Miso => "MISO",
            Vendor::Aeso => "AESO",
        };
        f.write_str(value)
    }
}

/// Receives notices about unrecognized vendor values.
pub trait DiagnosticSink: Send + Sync {
    /// Called once each time a translation falls back to `OTHER`.
    fn unrecognized_vendor_value(&self, vendor: Vendor, value: &str);
}

/// Emits an `info` level `tracing` event per notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unrecognized_vendor_value(&self, vendor: Vendor, value: &str) {
        info!(
            vendor = %vendor,
            field = vendor.category_field(),
            value,
            "unrecognized vendor fuel value; mapping to OTHER"
        );
    }
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn unrecognized_vendor_value(&self, _vendor: Vendor, _value: &str) {}
}

/// A single notice captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognizedValue {
    pub vendor: Vendor,
    pub value: String,
}

/// Keeps every notice in memory, for tests and batch reports.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<UnrecognizedValue>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far, oldest first.
    pub fn records(&self) -> Vec<UnrecognizedValue> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn unrecognized_vendor_value(&self, vendor: Vendor, value: &str) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(UnrecognizedValue {
                vendor,
                value: value.to_string(),
            });
    }
}
