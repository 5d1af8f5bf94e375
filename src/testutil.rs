use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub level: Level,
    pub target: &'static str,
    pub message: Option<String>,
    pub fields: BTreeMap<&'static str, String>,
}

/// Layer capturing emitted events for assertions in tests.
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl CaptureLayer {
    pub fn new(store: Arc<Mutex<Vec<RecordedEvent>>>) -> Self {
        Self { events: store }
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: BTreeMap<&'static str, String>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record(field, format!("{value:?}"));
    }
}

impl FieldVisitor {
    fn record(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.insert(field.name(), value);
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        if let Ok(mut guard) = self.events.lock() {
            guard.push(RecordedEvent {
                level: *event.metadata().level(),
                target: event.metadata().target(),
                message: visitor.message,
                fields: visitor.fields,
            });
        }
    }
}

/// Returns a capture layer and shared storage to inspect events in tests.
pub fn event_recorder() -> (CaptureLayer, Arc<Mutex<Vec<RecordedEvent>>>) {
    let storage = Arc::new(Mutex::new(Vec::new()));
    let layer = CaptureLayer::new(Arc::clone(&storage));
    (layer, storage)
}
