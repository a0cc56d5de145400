//! The `Graph` container.
//!
//! Storage is a three-level ordered structure:
//!
//! - the node store maps every node value to its adjacency table,
//! - an adjacency table maps a destination node to the bucket of weights for that pair,
//! - a bucket is the ordered, duplicate-free set of weights.
//!
//! Adjacency tables never hold an empty bucket. A reverse index of incoming sources is kept next
//! to the store so node erasure, renaming and merging only visit the tables that reference the
//! node.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

mod adjacency;
mod cursor;
mod edge;
mod edges;
mod incoming;
mod mutate;
mod query;
mod render;

pub use cursor::Cursor;
pub use edge::{Edge, EdgeRef};
pub use edges::Edges;

use adjacency::Adjacency;
use incoming::Incoming;

/// Identity of one graph instance. Cursors carry it so positions from different instances never
/// compare equal, even when the instances hold identical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GraphId(u64);

impl GraphId {
    fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

pub struct Graph<N, E> {
    id: GraphId,
    nodes: BTreeMap<N, Adjacency<N, E>>,
    incoming: Incoming<N>,
    edge_count: usize,
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: BTreeMap::new(),
            incoming: Incoming::new(),
            edge_count: 0,
        }
    }

    /// Moves the contents out in constant time, leaving `self` empty.
    ///
    /// The returned graph keeps this instance's identity; `self` gets a new one.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        tracing::debug!(
            target: "narwhal::graph",
            nodes = self.nodes.len(),
            edges = self.edge_count,
            "clearing graph"
        );
        self.nodes.clear();
        self.incoming.clear();
        self.edge_count = 0;
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone, E: Clone> Clone for Graph<N, E> {
    fn clone(&self) -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: self.nodes.clone(),
            incoming: self.incoming.clone(),
            edge_count: self.edge_count,
        }
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq for Graph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<N: Eq, E: Eq> Eq for Graph<N, E> {}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.nodes.iter()).finish()
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Extend<N> for Graph<N, E> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for value in iter {
            self.insert_node(value);
        }
    }
}

impl<N: Ord + Clone, E: Ord + Clone> FromIterator<N> for Graph<N, E> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<N: Ord + Clone, E: Ord + Clone, const K: usize> From<[N; K]> for Graph<N, E> {
    fn from(values: [N; K]) -> Self {
        values.into_iter().collect()
    }
}

impl<'a, N: Ord + Clone, E: Ord + Clone> IntoIterator for &'a Graph<N, E> {
    type Item = EdgeRef<'a, N, E>;
    type IntoIter = Edges<'a, N, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges()
    }
}

#[cfg(test)]
impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// Checks the reverse index and the edge counter against the node store.
    pub(crate) fn assert_consistent(&self) {
        let mut edges = 0;
        for (src, table) in &self.nodes {
            for (dst, bucket) in table {
                assert!(!bucket.is_empty(), "empty bucket left in an adjacency table");
                assert!(self.nodes.contains_key(dst), "destination is not a node");
                assert!(self.incoming.sources(dst).contains(src), "missing incoming link");
                edges += bucket.len();
            }
        }
        assert_eq!(edges, self.edge_count);
        for dst in self.nodes.keys() {
            for src in self.incoming.sources(dst) {
                let linked = self.nodes.get(&src).is_some_and(|t| t.contains_key(dst));
                assert!(linked, "stale incoming link");
            }
        }
    }
}
