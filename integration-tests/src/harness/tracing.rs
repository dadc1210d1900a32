use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

/// One event as seen by [`capture_events`]. The `message` field is split off
/// from the structured fields.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub target: String,
    pub level: Level,
    pub message: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Events recorded during one [`capture_events`] call, in emission order.
#[derive(Debug, Clone, Default)]
pub struct CapturedEvents(Vec<CapturedEvent>);

impl CapturedEvents {
    /// The first event logged with `message`.
    pub fn with_message(&self, message: &str) -> Option<&CapturedEvent> {
        self.0
            .iter()
            .find(|event| event.message.as_deref() == Some(message))
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &CapturedEvent> {
        self.0.iter().filter(move |event| event.level == level)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

type Sink = Arc<Mutex<Vec<CapturedEvent>>>;

struct RecordingLayer(Sink);

/// Runs `f` with a thread-local subscriber and returns its output along with
/// every event it emitted. Safe to use from parallel tests.
pub fn capture_events<T>(f: impl FnOnce() -> T) -> (T, CapturedEvents) {
    let sink = Sink::default();
    let subscriber = tracing_subscriber::registry().with(RecordingLayer(sink.clone()));

    let out = tracing::subscriber::with_default(subscriber, f);

    let events = std::mem::take(&mut *sink.lock().unwrap_or_else(PoisonError::into_inner));
    (out, CapturedEvents(events))
}

impl<S: Subscriber> Layer<S> for RecordingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut captured = CapturedEvent {
            target: meta.target().to_owned(),
            level: *meta.level(),
            message: None,
            fields: BTreeMap::new(),
        };
        event.record(&mut captured);

        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

impl Visit for CapturedEvent {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.record_text(field, format!("{value:?}"));
    }
}

impl CapturedEvent {
    fn record_text(&mut self, field: &Field, text: String) {
        match field.name() {
            "message" => self.message = Some(text),
            name => {
                self.fields.insert(name.to_owned(), text);
            }
        }
    }
}
