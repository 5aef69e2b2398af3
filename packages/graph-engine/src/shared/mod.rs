//! Shared models, ports and containers used by every feature

pub mod collections;
pub mod models;
pub mod ports;

pub use collections::{AdaptablePriorityQueue, Decorator, EntryHandle};
pub use models::{Edge, EdgeId, Vertex, VertexId};
pub use ports::{GraphEvent, GraphObserver, NoopObserver, RecordingObserver};
