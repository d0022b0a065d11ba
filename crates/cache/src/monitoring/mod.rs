//! Observability for the metadata sources
//!
//! Sources report cold loads, redundant loads, anomalies and failures to a
//! [`MetadataObserver`] and keep lock-free counters in [`MetadataStats`].

mod observer;
mod stats;

pub use observer::{MetadataObserver, ObservedEvent, RecordingObserver, TracingObserver};
pub use stats::{MetadataStats, StatsSnapshot};
