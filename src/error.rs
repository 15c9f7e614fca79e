use thiserror::Error;

use crate::graph::Vertex;

/// Errors surfaced by the mutating and lookup operations of
/// [`WeightedDigraph`](crate::weightdigraph::WeightedDigraph). The store
/// never silently swallows an invalid operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex with this key already exists. Re-adding a key would
    /// otherwise discard the existing vertex's arcs.
    #[error("vertex `{0}` already exists")]
    DuplicateVertex(Vertex),

    /// An arc operation or weight query referenced a key that is not
    /// contained in the graph.
    #[error("vertex `{0}` does not exist")]
    UnknownVertex(Vertex),

    /// A weight query referenced an arc that is not present.
    #[error("no arc from `{0}` to `{1}`")]
    NoSuchArc(Vertex, Vertex),
}
