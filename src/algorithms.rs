use itertools::{Either, Itertools};
use log::{debug, trace};
use union_find_rs::prelude::*;

use crate::graph::*;

/// Whole-graph queries implemented on top of the read-only [Graph] view.
pub trait GraphAlgorithms {
    /// Returns whether every connected component of the graph admits a
    /// proper 2-colouring.
    fn is_bipartite(&self) -> bool;

    /// Two-colours the graph and returns the colour classes, or `None` if
    /// some component contains an odd cycle.
    fn bipartition(&self) -> Option<(VertexSet, VertexSet)>;

    /// Returns the connected components of the graph, arcs treated as
    /// traversable in both directions.
    fn components(&self) -> Vec<VertexSet>;
}

impl<G> GraphAlgorithms for G where G: Graph {

    fn is_bipartite(&self) -> bool {
        self.bipartition().is_some()
    }

    /// Depth-first two-colouring over an explicit stack. The colour map
    /// doubles as the visited set, so each vertex and arc is handled at most
    /// once and the whole run is $O(n+m)$. A conflict anywhere aborts the
    /// remaining traversal.
    ///
    /// Only out-arcs are followed. For graphs built from matched arc pairs
    /// (the [add_edge](crate::weightdigraph::WeightedDigraph::add_edge)
    /// family) this visits the full undirected adjacency; an unmatched
    /// one-directional arc is only checked from its source side.
    fn bipartition(&self) -> Option<(VertexSet, VertexSet)> {
        let mut colour:VertexMap<u8> = VertexMap::default();
        let mut stack:Vec<Vertex> = Vec::new();

        for root in self.vertices() {
            if colour.contains_key(root) {
                continue;
            }
            trace!("colouring component rooted at {root}");

            colour.insert(root.clone(), 0);
            stack.push(root.clone());

            while let Some(v) = stack.pop() {
                let next = 1 - colour[&v];
                for u in self.out_neighbours(&v) {
                    match colour.get(u) {
                        Some(&c) if c != next => {
                            debug!("odd cycle through {v} and {u}");
                            return None;
                        },
                        Some(_) => {},
                        None => {
                            colour.insert(u.clone(), next);
                            stack.push(u.clone());
                        }
                    }
                }
            }
        }

        Some(colour.into_iter().partition_map(|(v, c)|
            if c == 0 { Either::Left(v) } else { Either::Right(v) }
        ))
    }

    #[allow(unused_must_use)]
    fn components(&self) -> Vec<VertexSet> {
        let mut dsets:DisjointSets<&Vertex> = DisjointSets::new();

        for v in self.vertices() {
            // This returns a Result<()> but the potential 'error' (adding
            // an element that already exists) will not happen.
            dsets.make_set(v);
        }

        for v in self.vertices() {
            for u in self.out_neighbours(v) {
                // This returns a Result<()> but the potential 'error'
                // (joining two already joined elements) does not matter to us.
                dsets.union(&v, &u);
            }
        }

        let mut res = Vec::new();
        for comp in dsets {
            res.push(comp.iter().map(|v| (*v).clone()).collect())
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


#[cfg(test)]
mod test {
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::iterators::*;
    use crate::weightdigraph::WeightedDigraph;

    #[test]
    fn no_arcs_is_bipartite() {
        let mut G = WeightedDigraph::new();
        assert!(G.is_bipartite());

        for key in ["a", "b", "c", "d"] {
            G.add_vertex(key).unwrap();
        }
        assert!(G.is_bipartite());
    }

    #[test]
    fn single_edge() {
        let mut G = WeightedDigraph::new();
        G.add_vertex("a").unwrap();
        G.add_vertex("b").unwrap();
        G.add_edge("a", "b").unwrap();

        assert!(G.is_bipartite());

        let (left, right) = G.bipartition().unwrap();
        assert_ne!(left.contains("a"), left.contains("b"));
        assert_ne!(right.contains("a"), right.contains("b"));
        assert_eq!(left.len() + right.len(), 2);
    }

    #[test]
    fn odd_cycles() {
        assert!(!WeightedDigraph::cycle(3).is_bipartite());
        assert!(!WeightedDigraph::cycle(5).is_bipartite());
        assert!(!WeightedDigraph::cycle(7).is_bipartite());
    }

    #[test]
    fn even_cycles() {
        assert!(WeightedDigraph::cycle(2).is_bipartite());
        assert!(WeightedDigraph::cycle(4).is_bipartite());
        assert!(WeightedDigraph::cycle(6).is_bipartite());
    }

    #[test]
    fn paths_and_stars() {
        assert!(WeightedDigraph::path(1).is_bipartite());
        assert!(WeightedDigraph::path(10).is_bipartite());
        assert!(WeightedDigraph::matching(4).is_bipartite());
        assert!(WeightedDigraph::star(6).is_bipartite());
        assert!(WeightedDigraph::biclique(3, 4).is_bipartite());
    }

    #[test]
    fn self_loop() {
        let mut G = WeightedDigraph::new();
        G.add_vertex("a").unwrap();
        G.add_arc("a", "a").unwrap();

        assert!(!G.is_bipartite());
    }

    #[test]
    fn disconnected_and_semantics() {
        // Component A: triangle, component B: single edge
        let mut G = WeightedDigraph::new();
        for key in ["1", "2", "3", "x", "y"] {
            G.add_vertex(key).unwrap();
        }
        G.add_edge("x", "y").unwrap();
        assert!(G.is_bipartite());

        G.add_edge("1", "2").unwrap();
        G.add_edge("2", "3").unwrap();
        assert!(G.is_bipartite());

        G.add_edge("3", "1").unwrap();
        assert!(!G.is_bipartite());
    }

    #[test]
    fn two_bipartite_components() {
        let mut G = WeightedDigraph::new();
        for key in ["a", "b", "c", "d", "e", "f"] {
            G.add_vertex(key).unwrap();
        }
        // Square a-b-c-d plus edge e-f
        G.add_edge("a", "b").unwrap();
        G.add_edge("b", "c").unwrap();
        G.add_edge("c", "d").unwrap();
        G.add_edge("d", "a").unwrap();
        G.add_edge("e", "f").unwrap();

        assert!(G.is_bipartite());
        assert_eq!(G.components().len(), 2);
    }

    #[test]
    fn checker_does_not_mutate() {
        let mut G = WeightedDigraph::new();
        G.add_vertex("a").unwrap();
        G.add_vertex("b").unwrap();
        G.add_vertex("c").unwrap();
        G.add_edge_weighted("a", "b", 4.0).unwrap();
        G.add_edge("b", "c").unwrap();
        let H = G.clone();

        assert_eq!(G.is_bipartite(), G.is_bipartite());
        assert_eq!(G, H);
        assert_eq!(G.weight("a", "b"), Ok(4.0));
        assert_eq!(G.arcs().count(), H.arcs().count());
    }

    #[test]
    fn weights_are_immaterial() {
        let mut G = WeightedDigraph::cycle(4);
        G.add_edge_weighted("0", "1", -17.5).unwrap();
        assert!(G.is_bipartite());

        let mut G = WeightedDigraph::cycle(3);
        G.add_edge_weighted("0", "1", 0.0).unwrap();
        assert!(!G.is_bipartite());
    }

    #[test]
    fn components() {
        let G = WeightedDigraph::matching(5);
        let comps = G.components();
        assert_eq!(comps.len(), 5);
        for comp in &comps {
            assert_eq!(comp.len(), 2);
        }

        let G = WeightedDigraph::cycle(6);
        assert_eq!(G.components().len(), 1);

        let mut G = WeightedDigraph::new();
        G.add_vertex("solo").unwrap();
        let comps = G.components();
        assert_eq!(comps.len(), 1);
        assert!(comps[0].contains("solo"));
    }

    #[test]
    fn one_directional_arc_joins_components() {
        let mut G = WeightedDigraph::new();
        G.add_vertex("u").unwrap();
        G.add_vertex("v").unwrap();
        G.add_arc("u", "v").unwrap();

        assert_eq!(G.components().len(), 1);
    }

    #[test]
    fn random_trees_are_bipartite() {
        let mut rng = ChaCha8Rng::seed_from_u64(20010);

        for n in [2usize, 10, 50, 200] {
            let mut G = WeightedDigraph::new();
            G.add_vertex("0").unwrap();
            for v in 1..n {
                let u = rng.gen_range(0..v);
                G.add_vertex(&v.to_string()).unwrap();
                G.add_edge(&v.to_string(), &u.to_string()).unwrap();
            }

            assert!(G.is_bipartite());
            assert_eq!(G.components().len(), 1);
        }
    }
}
