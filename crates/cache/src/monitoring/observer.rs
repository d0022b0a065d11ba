//! Observer hooks for load events

use parking_lot::Mutex;
use phonemeta_core::Error;
use std::time::Duration;

/// Receives load events from the metadata sources. Every hook defaults to a no-op.
pub trait MetadataObserver: Send + Sync {
    /// A key was loaded from its backing blob and published
    fn on_cold_load(&self, _source_name: &str, _elapsed: Duration) {}

    /// A concurrent load finished second; its record was discarded
    fn on_redundant_load(&self, _source_name: &str) {}

    /// A blob expected to hold one record held more; the first was kept
    fn on_anomaly(&self, _source_name: &str, _discarded: usize) {}

    /// Loading failed and nothing was published
    fn on_load_failure(&self, _source_name: &str, _error: &Error) {}
}

/// Reports events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MetadataObserver for TracingObserver {
    fn on_cold_load(&self, source_name: &str, elapsed: Duration) {
        tracing::debug!(
            source = source_name,
            elapsed_us = elapsed.as_micros() as u64,
            "loaded metadata"
        );
    }

    fn on_redundant_load(&self, source_name: &str) {
        tracing::debug!(
            source = source_name,
            "concurrent load lost the race, using published record"
        );
    }

    fn on_anomaly(&self, source_name: &str, discarded: usize) {
        tracing::warn!(
            source = source_name,
            discarded,
            "more than one metadata record found, using the first"
        );
    }

    fn on_load_failure(&self, source_name: &str, error: &Error) {
        tracing::error!(source = source_name, error = %error, "failed to load metadata");
    }
}

/// An event captured by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    ColdLoad { source_name: String },
    RedundantLoad { source_name: String },
    Anomaly { source_name: String, discarded: usize },
    LoadFailure { source_name: String, message: String },
}

/// Keeps every event in memory, in arrival order
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().clone()
    }

    pub fn anomalies(&self) -> Vec<(String, usize)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ObservedEvent::Anomaly {
                    source_name,
                    discarded,
                } => Some((source_name.clone(), *discarded)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ObservedEvent) {
        self.events.lock().push(event);
    }
}

impl MetadataObserver for RecordingObserver {
    fn on_cold_load(&self, source_name: &str, _elapsed: Duration) {
        self.push(ObservedEvent::ColdLoad {
            source_name: source_name.to_string(),
        });
    }

    fn on_redundant_load(&self, source_name: &str) {
        self.push(ObservedEvent::RedundantLoad {
            source_name: source_name.to_string(),
        });
    }

    fn on_anomaly(&self, source_name: &str, discarded: usize) {
        self.push(ObservedEvent::Anomaly {
            source_name: source_name.to_string(),
            discarded,
        });
    }

    fn on_load_failure(&self, source_name: &str, error: &Error) {
        self.push(ObservedEvent::LoadFailure {
            source_name: source_name.to_string(),
            message: error.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_keeps_order() {
        let observer = RecordingObserver::new();
        observer.on_cold_load("a", Duration::from_millis(1));
        observer.on_anomaly("b", 2);
        observer.on_load_failure("c", &Error::missing_data("c"));

        let events = observer.events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            ObservedEvent::ColdLoad {
                source_name: "a".to_string()
            }
        );
        assert_eq!(observer.anomalies(), vec![("b".to_string(), 2)]);
        assert!(matches!(
            &events[2],
            ObservedEvent::LoadFailure { message, .. } if message.contains("'c'")
        ));
    }
}
