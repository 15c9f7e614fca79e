//!
//! A weighted digraph over string keys. Adjacency is stored as nested hash
//! maps (vertex → out-neighbour → weight), trading memory for $O(1)$ edits
//! and lookups.
//!
//! Vertices are identified by externally supplied keys and must be added
//! before any arc can reference them; undirected edges are stored as matched
//! arc pairs. The struct offers a few constructors for named graphs:
//!
//! ```rust
//! use twocolour::graph::*;
//! use twocolour::weightdigraph::WeightedDigraph;
//!
//! fn main() {
//!     let graph = WeightedDigraph::path(3);
//!     assert!(graph.has_edge("0", "1"));
//!     assert!(graph.has_edge("1", "2"));
//!     assert!(!graph.has_edge("0", "2"));
//!
//!     let graph = WeightedDigraph::cycle(4);
//!     assert_eq!(graph.num_vertices(), 4);
//!     assert_eq!(graph.num_arcs(), 8); // Two arcs per undirected edge
//!
//!     let graph = WeightedDigraph::biclique(2, 3);
//!     assert_eq!(graph.num_vertices(), 5);
//!     assert_eq!(graph.num_arcs(), 12);
//! }
//! ```
//!
//! ## Editing operations
//!
//! Vertices and arcs are added in $O(1)$ time. Every operation that could
//! violate the store's invariants returns a [GraphError](crate::error::GraphError)
//! instead of mutating:
//!
//! ```rust
//! use twocolour::graph::*;
//! use twocolour::error::GraphError;
//! use twocolour::weightdigraph::WeightedDigraph;
//!
//! fn main() {
//!     let mut graph = WeightedDigraph::new();
//!     graph.add_vertex("a").unwrap();
//!     graph.add_vertex("b").unwrap();
//!     graph.add_edge("a", "b").unwrap();
//!
//!     assert_eq!(graph.add_vertex("a"), Err(GraphError::DuplicateVertex("a".into())));
//!     assert_eq!(graph.add_arc("a", "c"), Err(GraphError::UnknownVertex("c".into())));
//!     assert_eq!(graph.weight("a", "b"), Ok(DEFAULT_WEIGHT));
//! }
//! ```

use fxhash::FxHashMap;

use crate::error::GraphError;
use crate::graph::*;

/// A mutable weighted digraph with string-keyed vertices. Whole-graph vertex
/// iteration follows insertion order so that repeated displays of the same
/// graph agree.
#[derive(Debug, Clone)]
pub struct WeightedDigraph {
    adj: FxHashMap<Vertex, FxHashMap<Vertex, Weight>>,
    order: Vec<Vertex>,
    m: usize
}

impl PartialEq for WeightedDigraph {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_arcs() != other.num_arcs() {
            return false
        }
        self.adj == other.adj
    }
}

impl Graph for WeightedDigraph {
    /*
        Basic properties and queries
    */
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_arcs(&self) -> usize {
        self.m
    }

    fn has_arc(&self, u:&str, v:&str) -> bool {
        match self.adj.get(u) {
            Some(N) => N.contains_key(v),
            _ => false
        }
    }

    fn out_degree(&self, u:&str) -> usize {
        self.adj.get(u).map_or(0, |N| N.len())
    }

    /*
        Iteration and access
    */
    fn contains(&self, u:&str) -> bool {
        self.adj.contains_key(u)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Vertex> + 'a> {
        Box::new(self.order.iter())
    }

    fn out_neighbours<'a>(&'a self, u:&str) -> Box<dyn Iterator<Item=&'a Vertex> + 'a> {
        match self.adj.get(u) {
            Some(N) => Box::new(N.keys()),
            None => panic!("Vertex not contained in WeightedDigraph")
        }
    }
}

impl Default for WeightedDigraph {
    fn default() -> Self {
        WeightedDigraph::new()
    }
}

impl WeightedDigraph {
    pub fn new() -> WeightedDigraph {
        WeightedDigraph{adj: FxHashMap::default(),
              order: Vec::new(),
              m: 0}
    }

    pub fn with_capacity(n_guess:usize) -> Self {
        WeightedDigraph {
            adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            order: Vec::with_capacity(n_guess),
            m: 0
        }
    }

    /// Adds a vertex with the given key and no arcs.
    ///
    /// Returns [GraphError::DuplicateVertex] if the key is already taken,
    /// leaving the existing vertex and its arcs untouched.
    pub fn add_vertex(&mut self, key:&str) -> Result<(), GraphError> {
        if self.adj.contains_key(key) {
            return Err(GraphError::DuplicateVertex(key.to_string()));
        }
        self.insert_vertex(key.to_string());
        Ok(())
    }

    /// Adds the arc `(src,dest)` with the default weight, see [add_arc_weighted](WeightedDigraph::add_arc_weighted).
    pub fn add_arc(&mut self, src:&str, dest:&str) -> Result<(), GraphError> {
        self.add_arc_weighted(src, dest, DEFAULT_WEIGHT)
    }

    /// Adds the arc `(src,dest)` with the given weight. If the arc is already
    /// present only its weight is updated.
    ///
    /// Returns [GraphError::UnknownVertex] if either endpoint is not
    /// contained in the graph.
    pub fn add_arc_weighted(&mut self, src:&str, dest:&str, weight:Weight) -> Result<(), GraphError> {
        self.check_contains(src)?;
        self.check_contains(dest)?;
        self.insert_arc(src, dest, weight);
        Ok(())
    }

    /// Adds the undirected edge `{u,v}` with the default weight, see [add_edge_weighted](WeightedDigraph::add_edge_weighted).
    pub fn add_edge(&mut self, u:&str, v:&str) -> Result<(), GraphError> {
        self.add_edge_weighted(u, v, DEFAULT_WEIGHT)
    }

    /// Adds the undirected edge `{u,v}` as the matched arc pair `(u,v)`,
    /// `(v,u)`, both carrying the given weight. Both endpoints are validated
    /// before either arc is inserted, so a failed call leaves the graph
    /// unchanged.
    pub fn add_edge_weighted(&mut self, u:&str, v:&str, weight:Weight) -> Result<(), GraphError> {
        self.check_contains(u)?;
        self.check_contains(v)?;
        self.insert_arc(u, v, weight);
        self.insert_arc(v, u, weight);
        Ok(())
    }

    /// Returns the weight stored on the arc `(src,dest)`.
    ///
    /// Returns [GraphError::UnknownVertex] if either endpoint is not
    /// contained in the graph and [GraphError::NoSuchArc] if `dest` is not an
    /// out-neighbour of `src`.
    pub fn weight(&self, src:&str, dest:&str) -> Result<Weight, GraphError> {
        self.check_contains(src)?;
        self.check_contains(dest)?;
        self.adj[src].get(dest).copied()
            .ok_or_else(|| GraphError::NoSuchArc(src.to_string(), dest.to_string()))
    }

    fn check_contains(&self, u:&str) -> Result<(), GraphError> {
        if !self.adj.contains_key(u) {
            return Err(GraphError::UnknownVertex(u.to_string()));
        }
        Ok(())
    }

    // Primitive insertions. Callers must have validated the keys.
    fn insert_vertex(&mut self, key:Vertex) {
        self.adj.insert(key.clone(), FxHashMap::default());
        self.order.push(key);
    }

    fn insert_arc(&mut self, src:&str, dest:&str, weight:Weight) {
        let prev = self.adj.get_mut(src).unwrap().insert(dest.to_string(), weight);
        if prev.is_none() {
            self.m += 1;
        }
    }

    pub(crate) fn out_map(&self, u:&str) -> &FxHashMap<Vertex, Weight> {
        match self.adj.get(u) {
            Some(N) => N,
            None => panic!("Vertex not contained in WeightedDigraph")
        }
    }

    // Internal edge between decimal-keyed vertices, used by the named
    // constructors below.
    fn link(&mut self, u:u32, v:u32) {
        let (u, v) = (u.to_string(), v.to_string());
        self.insert_arc(&u, &v, DEFAULT_WEIGHT);
        self.insert_arc(&v, &u, DEFAULT_WEIGHT);
    }

    fn with_decimal_keys(n:u32) -> WeightedDigraph {
        let mut res = WeightedDigraph::with_capacity(n as usize);
        for u in 0..n {
            res.insert_vertex(u.to_string());
        }
        res
    }

    /// Generates a path on `n` vertices keyed `"0"` to `"n-1"`.
    pub fn path(n:u32) -> WeightedDigraph {
        let mut res = WeightedDigraph::with_decimal_keys(n);
        for u in 1..n {
            res.link(u-1, u);
        }

        res
    }

    /// Generates a cycle on `n` vertices.
    pub fn cycle(n:u32) -> WeightedDigraph {
        let mut res = WeightedDigraph::with_decimal_keys(n);
        for u in 0..n {
            let v = (u+1) % n;
            res.link(u, v);
        }

        res
    }

    /// Generates a matching on `2n` vertices.
    pub fn matching(n:u32) -> WeightedDigraph {
        let mut res = WeightedDigraph::with_decimal_keys(2*n);
        for u in 0..n {
            let v = u+n;
            res.link(u, v);
        }

        res
    }

    /// Generates a star with `n` leaves, so `n+1` vertices total.
    pub fn star(n:u32) -> WeightedDigraph {
        WeightedDigraph::biclique(1, n)
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    pub fn biclique(s:u32, t:u32) -> WeightedDigraph {
        let mut res = WeightedDigraph::with_decimal_keys(s+t);
        for u in 0..s {
            for v in s..(s+t) {
                res.link(u, v);
            }
        }

        res
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
