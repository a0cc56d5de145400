//! Borrowing iterator over every edge of a [`Graph`](super::Graph).
//!
//! The three storage levels are walked with their own B-tree iterators. Each of the two upper
//! levels keeps a front and a back child so the sequence can be consumed from both ends; when
//! one side runs out of parents it drains the other side's partially consumed child. Tables with
//! no destinations yield nothing and are skipped.

use std::collections::{btree_map, btree_set};
use std::iter::FusedIterator;

use super::adjacency::{Adjacency, Bucket};
use super::{EdgeRef, Graph};

/// Runs `f` on the child in `slot`, clearing the slot once the child is exhausted.
fn next_or_clear<T, U>(slot: &mut Option<T>, f: impl FnOnce(&mut T) -> Option<U>) -> Option<U> {
    let item = f(slot.as_mut()?);
    if item.is_none() {
        *slot = None;
    }
    item
}

struct Weights<'a, N, E> {
    from: &'a N,
    to: &'a N,
    iter: btree_set::Iter<'a, E>,
}

impl<'a, N, E> Weights<'a, N, E> {
    fn next(&mut self) -> Option<EdgeRef<'a, N, E>> {
        let weight = self.iter.next()?;
        Some(EdgeRef {
            from: self.from,
            to: self.to,
            weight,
        })
    }

    fn next_back(&mut self) -> Option<EdgeRef<'a, N, E>> {
        let weight = self.iter.next_back()?;
        Some(EdgeRef {
            from: self.from,
            to: self.to,
            weight,
        })
    }
}

struct Destinations<'a, N, E> {
    from: &'a N,
    tables: btree_map::Iter<'a, N, Bucket<E>>,
    front: Option<Weights<'a, N, E>>,
    back: Option<Weights<'a, N, E>>,
}

impl<'a, N, E> Destinations<'a, N, E> {
    fn new(from: &'a N, table: &'a Adjacency<N, E>) -> Self {
        Self {
            from,
            tables: table.iter(),
            front: None,
            back: None,
        }
    }

    fn weights(&self, to: &'a N, bucket: &'a Bucket<E>) -> Weights<'a, N, E> {
        Weights {
            from: self.from,
            to,
            iter: bucket.iter(),
        }
    }

    fn next(&mut self) -> Option<EdgeRef<'a, N, E>> {
        loop {
            if let Some(edge) = next_or_clear(&mut self.front, Weights::next) {
                return Some(edge);
            }
            match self.tables.next() {
                Some((to, bucket)) => self.front = Some(self.weights(to, bucket)),
                None => return next_or_clear(&mut self.back, Weights::next),
            }
        }
    }

    fn next_back(&mut self) -> Option<EdgeRef<'a, N, E>> {
        loop {
            if let Some(edge) = next_or_clear(&mut self.back, Weights::next_back) {
                return Some(edge);
            }
            match self.tables.next_back() {
                Some((to, bucket)) => self.back = Some(self.weights(to, bucket)),
                None => return next_or_clear(&mut self.front, Weights::next_back),
            }
        }
    }
}

/// Edges in ascending `(from, to, weight)` order. Created by [`Graph::edges`].
pub struct Edges<'a, N, E> {
    nodes: btree_map::Iter<'a, N, Adjacency<N, E>>,
    front: Option<Destinations<'a, N, E>>,
    back: Option<Destinations<'a, N, E>>,
    remaining: usize,
}

impl<'a, N, E> Iterator for Edges<'a, N, E> {
    type Item = EdgeRef<'a, N, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = loop {
            if let Some(edge) = next_or_clear(&mut self.front, Destinations::next) {
                break edge;
            }
            match self.nodes.next() {
                Some((from, table)) => self.front = Some(Destinations::new(from, table)),
                None => break next_or_clear(&mut self.back, Destinations::next)?,
            }
        };
        self.remaining -= 1;
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, E> DoubleEndedIterator for Edges<'_, N, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let edge = loop {
            if let Some(edge) = next_or_clear(&mut self.back, Destinations::next_back) {
                break edge;
            }
            match self.nodes.next_back() {
                Some((from, table)) => self.back = Some(Destinations::new(from, table)),
                None => break next_or_clear(&mut self.front, Destinations::next_back)?,
            }
        };
        self.remaining -= 1;
        Some(edge)
    }
}

impl<N, E> ExactSizeIterator for Edges<'_, N, E> {}

impl<N, E> FusedIterator for Edges<'_, N, E> {}

impl<N, E> Graph<N, E> {
    /// Borrowing iterator over all edges, ascending. Reverse it for descending order.
    pub fn edges(&self) -> Edges<'_, N, E> {
        Edges {
            nodes: self.nodes.iter(),
            front: None,
            back: None,
            remaining: self.edge_count,
        }
    }
}
