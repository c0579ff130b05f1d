//! Common test utilities shared by the integration tests.
//!
//! Provides the canonical reference table and a `tracing` layer that counts
//! the events emitted while a closure runs.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use timeofemissions_lib::CanonicalFuelType;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Reference table: fuel, g CO2/kWh, graph color.
pub const REFERENCE_TABLE: [(CanonicalFuelType, f64, Option<&str>); 11] = [
    (CanonicalFuelType::Nuclear, 16.0, Some("#F9A848")),
    (CanonicalFuelType::Wind, 12.0, Some("#79D24C")),
    (CanonicalFuelType::SolarPv, 46.0, None),
    (CanonicalFuelType::SolarThermal, 22.0, None),
    (CanonicalFuelType::Geothermal, 45.0, None),
    (CanonicalFuelType::Hydroelectric, 4.0, Some("#204C79")),
    (CanonicalFuelType::DispatchableLoad, 0.0, None),
    (CanonicalFuelType::Other, 18.0, Some("#999966")),
    (CanonicalFuelType::Biomass, 18.0, Some("#999966")),
    (CanonicalFuelType::NaturalGas, 469.0, Some("#A52A2A")),
    (CanonicalFuelType::Coal, 1001.0, Some("#000000")),
];

/// Assert two floats agree to within `1e-9`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected approx {}, got {}",
        expected,
        actual
    );
}

/// Events captured by [`capture_events`].
#[derive(Debug, Default)]
pub struct CapturedEvents {
    pub count: usize,
    /// The `value` field of each event, when present.
    pub values: Vec<String>,
}

#[derive(Clone, Default)]
struct CountingLayer {
    count: Arc<AtomicUsize>,
    values: Arc<Mutex<Vec<String>>>,
}

struct ValueVisitor<'a>(&'a mut Option<String>);

impl Visit for ValueVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "value" {
            *self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "value" {
            *self.0 = Some(format!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for CountingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.count.fetch_add(1, Ordering::SeqCst);
        let mut value = None;
        event.record(&mut ValueVisitor(&mut value));
        if let Some(value) = value {
            self.values
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(value);
        }
    }
}

/// Run `f` with a thread-local subscriber and return its result together
/// with every `tracing` event emitted meanwhile.
pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, CapturedEvents) {
    let layer = CountingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let result = tracing::subscriber::with_default(subscriber, f);

    let values = layer
        .values
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    let captured = CapturedEvents {
        count: layer.count.load(Ordering::SeqCst),
        values,
    };
    (result, captured)
}
