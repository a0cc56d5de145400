//! Positions over the ordered edge sequence of a [`Graph`].
//!
//! A cursor does not borrow the graph. It records the `(from, to, weight)` triple it sits on (or
//! the end state) and the identity of the graph that produced it, and resolves neighbors against
//! the graph it is stepped with. This keeps positions usable across `&mut` calls such as
//! [`Graph::erase_edge_at`].

use std::borrow::Borrow;
use std::ops::Bound::{Excluded, Unbounded};

use super::adjacency;
use super::{Edge, Graph, GraphId};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Position<N, E> {
    Edge(Edge<N, E>),
    End,
}

/// A bidirectional position over the edges of a graph, in ascending `(from, to, weight)` order.
///
/// Cursors compare equal only when they sit on the same position *and* were produced by the
/// same graph instance. Cursors of two graphs holding identical data are never equal.
///
/// Each step is a fresh `O(log n)` lookup that clones the new triple. Use [`Graph::edges`] for a
/// full walk.
#[derive(Debug, Clone)]
pub struct Cursor<N, E> {
    pub(in crate::graph) graph: GraphId,
    position: Position<N, E>,
}

impl<N, E> Cursor<N, E> {
    pub(in crate::graph) fn new(graph: GraphId, edge: Option<Edge<N, E>>) -> Self {
        let position = match edge {
            Some(edge) => Position::Edge(edge),
            None => Position::End,
        };
        Self { graph, position }
    }

    /// The edge under the cursor, or `None` at the end position.
    ///
    /// The triple is a copy taken when the cursor moved; later mutations of the graph do not
    /// change it.
    pub fn get(&self) -> Option<&Edge<N, E>> {
        match &self.position {
            Position::Edge(edge) => Some(edge),
            Position::End => None,
        }
    }

    pub fn into_edge(self) -> Option<Edge<N, E>> {
        match self.position {
            Position::Edge(edge) => Some(edge),
            Position::End => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Cursor<N, E> {
    /// Steps to the next edge, or to the end position after the last one.
    pub fn move_next(&mut self, graph: &Graph<N, E>) {
        debug_assert_eq!(self.graph, graph.id, "cursor belongs to another graph");
        if let Position::Edge(edge) = &self.position {
            self.position = match graph.edge_after(edge) {
                Some(next) => Position::Edge(next),
                None => Position::End,
            };
        }
    }

    /// Steps to the previous edge. From the end position this is the last edge.
    ///
    /// At the first edge (or at the end of a graph without edges) the cursor stays put.
    pub fn move_prev(&mut self, graph: &Graph<N, E>) {
        debug_assert_eq!(self.graph, graph.id, "cursor belongs to another graph");
        let prev = match &self.position {
            Position::Edge(edge) => graph.edge_before(edge),
            Position::End => graph.last_edge(),
        };
        if let Some(prev) = prev {
            self.position = Position::Edge(prev);
        }
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for Cursor<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph && self.position == other.position
    }
}

impl<N: Eq, E: Eq> Eq for Cursor<N, E> {}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// Position of the first edge, or [`end`](Self::end) when there are no edges.
    pub fn begin(&self) -> Cursor<N, E> {
        Cursor::new(self.id, self.first_edge())
    }

    pub fn end(&self) -> Cursor<N, E> {
        Cursor::new(self.id, None)
    }

    /// Position of the edge `src -> dst` with `weight`, or [`end`](Self::end) if it is absent.
    pub fn find<Q, W>(&self, src: &Q, dst: &Q, weight: &W) -> Cursor<N, E>
    where
        N: Borrow<Q>,
        E: Borrow<W>,
        Q: Ord + ?Sized,
        W: Ord + ?Sized,
    {
        let edge = self.nodes.get_key_value(src).and_then(|(from, table)| {
            let (to, bucket) = table.get_key_value(dst)?;
            let weight = bucket.get(weight)?;
            Some(Edge::new(from.clone(), to.clone(), weight.clone()))
        });
        Cursor::new(self.id, edge)
    }

    fn first_edge(&self) -> Option<Edge<N, E>> {
        self.nodes
            .iter()
            .find_map(|(from, table)| adjacency::first_edge(from, table))
    }

    fn last_edge(&self) -> Option<Edge<N, E>> {
        self.nodes
            .iter()
            .rev()
            .find_map(|(from, table)| adjacency::last_edge(from, table))
    }

    /// The smallest stored edge greater than `at`. `at` itself need not be stored.
    pub(in crate::graph) fn edge_after(&self, at: &Edge<N, E>) -> Option<Edge<N, E>> {
        if let Some((from, table)) = self.nodes.get_key_value(&at.from) {
            if let Some((to, bucket)) = table.get_key_value(&at.to) {
                let next = bucket.range::<E, _>((Excluded(&at.weight), Unbounded)).next();
                if let Some(weight) = next {
                    return Some(Edge::new(from.clone(), to.clone(), weight.clone()));
                }
            }
            let next = table.range::<N, _>((Excluded(&at.to), Unbounded)).next();
            if let Some((to, bucket)) = next {
                if let Some(weight) = bucket.first() {
                    return Some(Edge::new(from.clone(), to.clone(), weight.clone()));
                }
            }
        }
        self.nodes
            .range::<N, _>((Excluded(&at.from), Unbounded))
            .find_map(|(from, table)| adjacency::first_edge(from, table))
    }

    /// The largest stored edge smaller than `at`.
    pub(in crate::graph) fn edge_before(&self, at: &Edge<N, E>) -> Option<Edge<N, E>> {
        if let Some((from, table)) = self.nodes.get_key_value(&at.from) {
            if let Some((to, bucket)) = table.get_key_value(&at.to) {
                if let Some(weight) = bucket.range::<E, _>(..&at.weight).next_back() {
                    return Some(Edge::new(from.clone(), to.clone(), weight.clone()));
                }
            }
            if let Some((to, bucket)) = table.range::<N, _>(..&at.to).next_back() {
                if let Some(weight) = bucket.last() {
                    return Some(Edge::new(from.clone(), to.clone(), weight.clone()));
                }
            }
        }
        self.nodes
            .range::<N, _>(..&at.from)
            .rev()
            .find_map(|(from, table)| adjacency::last_edge(from, table))
    }
}
