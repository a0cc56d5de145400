//! Reverse adjacency index used by [`Graph`](super::Graph).
//!
//! `sources[d]` holds every node `s` whose adjacency table has an entry for `d`. Nodes without
//! incoming edges have no entry at all.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub(in crate::graph) struct Incoming<N> {
    sources: BTreeMap<N, BTreeSet<N>>,
}

impl<N> Incoming<N> {
    pub(in crate::graph) fn new() -> Self {
        Self {
            sources: BTreeMap::new(),
        }
    }

    pub(in crate::graph) fn clear(&mut self) {
        self.sources.clear();
    }
}

impl<N: Ord + Clone> Incoming<N> {
    pub(in crate::graph) fn link(&mut self, src: &N, dst: &N) {
        if let Some(sources) = self.sources.get_mut(dst) {
            if !sources.contains(src) {
                sources.insert(src.clone());
            }
            return;
        }
        self.sources
            .insert(dst.clone(), BTreeSet::from([src.clone()]));
    }

    pub(in crate::graph) fn unlink<Q>(&mut self, src: &Q, dst: &Q)
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(sources) = self.sources.get_mut(dst) else {
            return;
        };
        sources.remove(src);
        if sources.is_empty() {
            self.sources.remove(dst);
        }
    }

    /// Detaches and returns every source of `dst`.
    pub(in crate::graph) fn take<Q>(&mut self, dst: &Q) -> BTreeSet<N>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.sources.remove(dst).unwrap_or_default()
    }

    pub(in crate::graph) fn restore(&mut self, dst: N, sources: BTreeSet<N>) {
        if !sources.is_empty() {
            self.sources.insert(dst, sources);
        }
    }

    #[cfg(test)]
    pub(in crate::graph) fn sources<Q>(&self, dst: &Q) -> Vec<N>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.sources
            .get(dst)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(in crate::graph) fn len(&self) -> usize {
        self.sources.len()
    }
}
