//! PageRank
//!
//! ```text
//! PR(v) = (1-d)/N + d * Σ PR(u) / outdegree(u)
//!                       u→v
//! ```
//!
//! Directed graphs only. With the default [`SinkStrategy::Materialize`] the
//! engine MUTATES the graph it is given: every vertex without outgoing edges
//! receives a real edge to every vertex (itself included), carrying
//! `EdgeElement::default()`. Use [`SinkStrategy::Redistribute`] for the same
//! ranks without touching the graph.
//!
//! [`SinkStrategy::Materialize`]: crate::config::SinkStrategy::Materialize
//! [`SinkStrategy::Redistribute`]: crate::config::SinkStrategy::Redistribute

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{PageRankEngine, PageRankReport};
pub use ports::PageRank;
