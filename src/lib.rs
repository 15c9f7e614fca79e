#![allow(non_snake_case)]

//! A small in-memory graph library: a string-keyed, arc-weighted digraph
//! plus a bipartiteness test. Undirected edges are stored as matched arc
//! pairs; the checker two-colours every connected component and reports
//! whether a proper 2-colouring exists for the whole graph.
//!
//! ```rust
//! use twocolour::graph::*;
//! use twocolour::algorithms::GraphAlgorithms;
//! use twocolour::weightdigraph::WeightedDigraph;
//!
//! fn main() {
//!     let mut graph = WeightedDigraph::new();
//!     for key in ["a", "b", "c", "d"] {
//!         graph.add_vertex(key).unwrap();
//!     }
//!     graph.add_edge("a", "b").unwrap();
//!     graph.add_edge("b", "c").unwrap();
//!     graph.add_edge("c", "d").unwrap();
//!     graph.add_edge("d", "a").unwrap();
//!
//!     assert!(graph.is_bipartite());
//!
//!     // A chord turns the square into two triangles
//!     graph.add_edge("a", "c").unwrap();
//!     assert!(!graph.is_bipartite());
//! }
//! ```
//!
//! Edge weights are carried (default $1.0$) but never interpreted by the
//! bipartiteness check. Display layers consume the vertex sequence via
//! [Graph::vertices](crate::graph::Graph::vertices) and the full arc list via
//! [ArcIteration::arcs](crate::iterators::ArcIteration::arcs); neither
//! surface permits mutation.

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod iterators;
pub mod weightdigraph;
