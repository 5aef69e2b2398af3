//! Edge model

use super::vertex::VertexId;
use std::fmt;

/// Edge identity; `epoch` plays the same role as on [`VertexId`]
///
/// ```compile_fail
/// let forged: graph_engine::EdgeId =
///     serde_json::from_str(r#"{"epoch":0,"serial":1}"#).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    epoch: u32,
    serial: u32,
}

impl EdgeId {
    pub(crate) const fn new(serial: u32, epoch: u32) -> Self {
        Self { epoch, serial }
    }

    pub(crate) fn epoch(self) -> u32 {
        self.epoch
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.serial)
    }
}

/// A live edge: payload plus the ordered endpoint pair
///
/// Directionality belongs to the owning graph. In a directed graph the edge
/// runs `first → second` only.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    pub id: EdgeId,
    pub element: E,
    pub first: VertexId,
    pub second: VertexId,
}

impl<E> Edge<E> {
    pub fn new(id: EdgeId, element: E, first: VertexId, second: VertexId) -> Self {
        Self {
            id,
            element,
            first,
            second,
        }
    }

    pub fn is_incident(&self, v: VertexId) -> bool {
        self.first == v || self.second == v
    }

    /// Endpoint other than `v`, if `v` is an endpoint at all
    pub fn other(&self, v: VertexId) -> Option<VertexId> {
        if self.first == v {
            Some(self.second)
        } else if self.second == v {
            Some(self.first)
        } else {
            None
        }
    }
}
