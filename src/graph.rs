use fxhash::{FxHashMap, FxHashSet};

pub type Vertex = String;
pub type Weight = f64;
pub type VertexSet = FxHashSet<Vertex>;
pub type VertexMap<T> = FxHashMap<Vertex, T>;

/// Weight assigned to arcs when the caller does not supply one.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Read-only view of a weighted digraph. Everything the bipartiteness
/// check and the display layer need lives here; mutation stays on the
/// concrete store.
pub trait Graph {
    fn num_vertices(&self) -> usize;
    fn num_arcs(&self) -> usize;

    fn contains(&self, u:&str) -> bool;

    fn has_arc(&self, u:&str, v:&str) -> bool;

    /// Returns whether both `(u,v)` and `(v,u)` are present. Symmetric in
    /// its arguments by construction.
    fn has_edge(&self, u:&str, v:&str) -> bool {
        self.has_arc(u, v) && self.has_arc(v, u)
    }

    fn out_degree(&self, u:&str) -> usize;

    /// All vertices of the graph, in insertion order.
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Vertex> + 'a>;

    /// The out-neighbours of `u`, in no particular order.
    ///
    /// Panics if `u` is not contained in the graph.
    fn out_neighbours<'a>(&'a self, u:&str) -> Box<dyn Iterator<Item=&'a Vertex> + 'a>;
}
