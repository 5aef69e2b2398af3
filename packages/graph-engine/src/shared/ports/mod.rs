//! Ports shared by the algorithm engines

pub mod observer;

pub use observer::{GraphEvent, GraphObserver, NoopObserver, RecordingObserver};
