use crate::graph::{Vertex, Weight};
use crate::graph::Graph;
use crate::weightdigraph::WeightedDigraph;

pub type OutArcIterator<'a> = std::collections::hash_map::Iter<'a, Vertex, Weight>;

/*
    Neighbourhood iterator for weighted digraphs. At each step, the iterator
    returns a pair (v, N(v)) where N(v) iterates the weighted out-arcs of v.
    Vertices are visited in insertion order.
*/
pub struct NIterator<'a> {
    G: &'a WeightedDigraph,
    v_it: Box<dyn Iterator<Item=&'a Vertex> + 'a>,
}

impl<'a> NIterator<'a> {
    pub fn new(G: &'a WeightedDigraph) -> NIterator<'a> {
        NIterator {
            G,
            v_it: G.vertices(),
        }
    }
}

impl<'a> Iterator for NIterator<'a> {
    type Item = (&'a Vertex, OutArcIterator<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.v_it.next()?;
        let N = self.G.out_map(v).iter();

        Some((v, N))
    }
}

/*
    Arc iterator for weighted digraphs. Every stored arc is returned once,
    so both directions of an undirected edge appear; this is the sequence
    a display layer renders.
*/
pub struct ArcIterator<'a> {
    N_it: NIterator<'a>,
    curr_v: Option<&'a Vertex>,
    curr_it: Option<OutArcIterator<'a>>,
}

impl<'a> ArcIterator<'a> {
    pub fn new(G: &'a WeightedDigraph) -> ArcIterator<'a> {
        let mut res = ArcIterator {
            N_it: NIterator::new(G),
            curr_v: None,
            curr_it: None,
        };
        res.advance();
        res
    }

    fn advance(&mut self) {
        if let Some((v, it)) = self.N_it.next() {
            self.curr_v = Some(v);
            self.curr_it = Some(it);
        } else {
            self.curr_it = None;
        }
    }
}

impl<'a> Iterator for ArcIterator<'a> {
    type Item = (&'a Vertex, &'a Vertex, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        while self.curr_it.is_some() {
            let uu = self.curr_it.as_mut().unwrap().next();
            if uu.is_none() {
                self.advance();
                continue;
            }

            let v = self.curr_v.unwrap();
            let (u, w) = uu.unwrap();
            return Some((v, u, *w));
        }

        None
    }
}

/// Iteration surface consumed by display layers: the full vertex sequence
/// comes from [Graph::vertices], the full arc list from [arcs](ArcIteration::arcs).
pub trait ArcIteration {
    fn neighbourhoods(&self) -> NIterator;
    fn arcs(&self) -> ArcIterator;
}

impl ArcIteration for WeightedDigraph {
    fn neighbourhoods(&self) -> NIterator {
        NIterator::new(self)
    }

    fn arcs(&self) -> ArcIterator {
        ArcIterator::new(self)
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
