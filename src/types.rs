//! Unique identifiers for graph vertices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a vertex in the graph.
///
/// Vertices carry no payload beyond their identity. The identifier is
/// totally ordered numerically; that ordering is what ancestry queries
/// use to break ties between equally distant candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Create a new `VertexId` from a raw u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_roundtrip() {
        let id = VertexId::new(42);
        assert_eq!(id.as_u64(), 42);
    }

    #[test]
    fn vertex_ids_are_ordered() {
        let a = VertexId::new(1);
        let b = VertexId::new(2);
        assert!(a < b);
    }

    #[test]
    fn vertex_id_display() {
        assert_eq!(VertexId::new(7).to_string(), "7");
    }
}
