//! Insert / replace / merge / erase operations.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use super::adjacency::{self, Adjacency};
use super::{Cursor, Graph};
use crate::error::{Error, Result};

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    /// Adds `value` as a node unless an equal node already exists.
    pub fn insert_node(&mut self, value: N) -> bool {
        if self.nodes.contains_key(&value) {
            return false;
        }
        self.nodes.insert(value, Adjacency::new());
        true
    }

    /// Adds the edge `src -> dst` with `weight`.
    ///
    /// Returns `Ok(false)` when that exact edge already exists. Both endpoints must be nodes.
    pub fn insert_edge<Q>(&mut self, src: &Q, dst: &Q, weight: E) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.nodes.contains_key(dst) {
            return Err(Error::InsertEdge);
        }
        let adjacency = self.nodes.get_mut(src).ok_or(Error::InsertEdge)?;
        if let Some(bucket) = adjacency.get_mut(dst) {
            if !bucket.insert(weight) {
                return Ok(false);
            }
            self.edge_count += 1;
            return Ok(true);
        }

        let (Some(src), Some(dst)) = (self.stored_node(src), self.stored_node(dst)) else {
            return Err(Error::InsertEdge);
        };
        let (src, dst) = (src.clone(), dst.clone());
        self.link_pair(src, dst, weight);
        Ok(true)
    }

    /// Renames `old` to `new`, keeping every outgoing and incoming edge.
    ///
    /// Returns `Ok(false)` without touching the graph when `new` is already a node.
    pub fn replace_node<Q>(&mut self, old: &Q, new: N) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let old = self.stored_node(old).cloned().ok_or(Error::ReplaceNode)?;
        Ok(self.rename_stored(old, new))
    }

    /// Folds `old` into the existing node `new` and removes `old`.
    ///
    /// Edges leaving `old` now leave `new`, edges reaching `old` now reach `new`. Edges that end
    /// up identical to an existing one collapse into it.
    pub fn merge_replace_node<Q>(&mut self, old: &Q, new: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (Some(old), Some(new)) = (
            self.stored_node(old).cloned(),
            self.stored_node(new).cloned(),
        ) else {
            return Err(Error::MergeReplaceNode);
        };
        if old != new {
            self.merge_stored(old, new);
        }
        Ok(())
    }

    /// Removes `value` together with every edge touching it. Returns `false` if it is not a node.
    pub fn erase_node<Q>(&mut self, value: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some((value, outgoing)) = self.nodes.remove_entry(value) else {
            return false;
        };
        self.detach_node(value, outgoing);
        true
    }

    /// Removes the edge `src -> dst` with `weight`. Returns `Ok(false)` if there is no such edge.
    pub fn erase_edge<Q, W>(&mut self, src: &Q, dst: &Q, weight: &W) -> Result<bool>
    where
        N: Borrow<Q>,
        E: Borrow<W>,
        Q: Ord + ?Sized,
        W: Ord + ?Sized,
    {
        if !(self.nodes.contains_key(src) && self.nodes.contains_key(dst)) {
            return Err(Error::EraseEdge);
        }
        Ok(self.remove_edge(src, dst, weight))
    }

    /// Removes the edge under `at` and returns the position of the edge that followed it.
    ///
    /// Erasing at [`end`](Self::end) does nothing and returns `end`.
    pub fn erase_edge_at(&mut self, at: Cursor<N, E>) -> Cursor<N, E> {
        debug_assert_eq!(at.graph, self.id, "cursor belongs to another graph");
        let Some(edge) = at.get() else {
            return self.end();
        };
        let next = self.edge_after(edge);
        self.remove_edge(&edge.from, &edge.to, &edge.weight);
        Cursor::new(self.id, next)
    }

    /// Removes every edge in `[first, last)` and returns the position that followed the range.
    pub fn erase_edge_range(&mut self, first: Cursor<N, E>, last: Cursor<N, E>) -> Cursor<N, E> {
        let mut at = first;
        let mut erased = 0usize;
        while at != last && !at.is_end() {
            at = self.erase_edge_at(at);
            erased += 1;
        }
        tracing::debug!(target: "narwhal::graph", erased, "erased edge range");
        at
    }

    fn link_pair(&mut self, src: N, dst: N, weight: E) {
        self.incoming.link(&src, &dst);
        if let Some(adjacency) = self.nodes.get_mut(&src) {
            adjacency.insert(dst, BTreeSet::from([weight]));
        }
        self.edge_count += 1;
    }

    fn rename_stored(&mut self, old: N, new: N) -> bool {
        if self.nodes.contains_key(&new) {
            return false;
        }
        let Some(mut outgoing) = self.nodes.remove(&old) else {
            return false;
        };
        let sources = self.incoming.take(&old);

        if let Some(bucket) = outgoing.remove(&old) {
            outgoing.insert(new.clone(), bucket);
        }
        for dst in outgoing.keys() {
            if *dst != new {
                self.incoming.unlink(&old, dst);
                self.incoming.link(&new, dst);
            }
        }

        for src in &sources {
            if *src == old {
                continue;
            }
            if let Some(table) = self.nodes.get_mut(src) {
                if let Some(bucket) = table.remove(&old) {
                    table.insert(new.clone(), bucket);
                }
            }
        }
        let sources: BTreeSet<N> = sources
            .into_iter()
            .map(|src| if src == old { new.clone() } else { src })
            .collect();

        tracing::debug!(
            target: "narwhal::graph",
            outgoing = outgoing.len(),
            incoming = sources.len(),
            "renamed node"
        );
        self.incoming.restore(new.clone(), sources);
        self.nodes.insert(new, outgoing);
        true
    }

    fn merge_stored(&mut self, old: N, new: N) {
        let Some(outgoing) = self.nodes.remove(&old) else {
            return;
        };
        let sources = self.incoming.take(&old);

        let mut collapsed = 0;
        for (dst, bucket) in outgoing {
            let dst = if dst == old {
                new.clone()
            } else {
                self.incoming.unlink(&old, &dst);
                dst
            };
            collapsed += self.absorb(&new, dst, bucket);
        }
        for src in sources {
            if src == old {
                continue;
            }
            let Some(bucket) = self.nodes.get_mut(&src).and_then(|t| t.remove(&old)) else {
                continue;
            };
            collapsed += self.absorb(&src, new.clone(), bucket);
        }
        self.edge_count -= collapsed;

        tracing::debug!(
            target: "narwhal::graph",
            collapsed,
            edges = self.edge_count,
            "merged node"
        );
    }

    fn detach_node(&mut self, value: N, outgoing: Adjacency<N, E>) {
        let mut removed = adjacency::weight_count(&outgoing);
        for dst in outgoing.keys() {
            self.incoming.unlink(&value, dst);
        }
        for src in self.incoming.take(&value) {
            if let Some(bucket) = self.nodes.get_mut(&src).and_then(|t| t.remove(&value)) {
                removed += bucket.len();
            }
        }
        self.edge_count -= removed;

        tracing::debug!(target: "narwhal::graph", removed_edges = removed, "erased node");
    }

    fn stored_node<Q>(&self, value: &Q) -> Option<&N>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.nodes.get_key_value(value).map(|(node, _)| node)
    }

    fn remove_edge<Q, W>(&mut self, src: &Q, dst: &Q, weight: &W) -> bool
    where
        N: Borrow<Q>,
        E: Borrow<W>,
        Q: Ord + ?Sized,
        W: Ord + ?Sized,
    {
        let Some(table) = self.nodes.get_mut(src) else {
            return false;
        };
        let Some(bucket) = table.get_mut(dst) else {
            return false;
        };
        if !bucket.remove(weight) {
            return false;
        }
        if bucket.is_empty() {
            table.remove(dst);
            self.incoming.unlink(src, dst);
        }
        self.edge_count -= 1;
        true
    }

    fn absorb(&mut self, src: &N, dst: N, bucket: adjacency::Bucket<E>) -> usize {
        let Some(table) = self.nodes.get_mut(src) else {
            return 0;
        };
        self.incoming.link(src, &dst);
        adjacency::absorb(table, dst, bucket)
    }
}
