//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It records the `tracing` events a closure emits on the current thread, so
//! tests can count and inspect the records violations produce without
//! touching the global subscriber.

#![doc(hidden)]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// One recorded `tracing` event.
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub fields: BTreeMap<String, String>,
}

impl CapturedRecord {
    /// The rendered value of a field. The event message is the `message`
    /// field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor(&mut fields));

        let metadata = event.metadata();
        self.records.lock().push(CapturedRecord {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            fields,
        });
    }
}

/// Run `f` with a capturing subscriber as the thread's default and return
/// its result together with every event it emitted.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedRecord>) {
    let layer = CaptureLayer::default();
    let records = Arc::clone(&layer.records);
    let subscriber = Registry::default().with(layer);

    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = std::mem::take(&mut *records.lock());
    (result, captured)
}

/// Records emitted for contract violations.
pub fn violations(records: &[CapturedRecord]) -> Vec<&CapturedRecord> {
    records
        .iter()
        .filter(|record| record.target == crate::logging::LOG_TARGET)
        .collect()
}
