//! Adjacency tables and weight buckets.

use std::collections::{BTreeMap, BTreeSet};

use super::Edge;

/// Ordered, duplicate-free weights of the edges between one `(from, to)` pair.
pub(in crate::graph) type Bucket<E> = BTreeSet<E>;

/// Destinations of one source node. An entry exists only while its bucket is non-empty.
pub(in crate::graph) type Adjacency<N, E> = BTreeMap<N, Bucket<E>>;

/// Unions `bucket` into the table entry for `dst`, returning how many weights collapsed into an
/// already present one.
pub(in crate::graph) fn absorb<N: Ord, E: Ord>(
    adjacency: &mut Adjacency<N, E>,
    dst: N,
    bucket: Bucket<E>,
) -> usize {
    let into = adjacency.entry(dst).or_default();
    let total = into.len() + bucket.len();
    into.extend(bucket);
    total - into.len()
}

pub(in crate::graph) fn weight_count<N, E>(adjacency: &Adjacency<N, E>) -> usize {
    adjacency.values().map(BTreeSet::len).sum()
}

pub(in crate::graph) fn first_edge<N: Ord + Clone, E: Ord + Clone>(
    from: &N,
    adjacency: &Adjacency<N, E>,
) -> Option<Edge<N, E>> {
    let (to, bucket) = adjacency.first_key_value()?;
    let weight = bucket.first()?;
    Some(Edge::new(from.clone(), to.clone(), weight.clone()))
}

pub(in crate::graph) fn last_edge<N: Ord + Clone, E: Ord + Clone>(
    from: &N,
    adjacency: &Adjacency<N, E>,
) -> Option<Edge<N, E>> {
    let (to, bucket) = adjacency.last_key_value()?;
    let weight = bucket.last()?;
    Some(Edge::new(from.clone(), to.clone(), weight.clone()))
}
