//! Read-only accessors.

use std::borrow::Borrow;

use super::Graph;
use crate::error::{Error, Result};

impl<N, E> Graph<N, E> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<N: Ord + Clone, E: Ord + Clone> Graph<N, E> {
    pub fn is_node<Q>(&self, value: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.nodes.contains_key(value)
    }

    /// Whether at least one edge leads from `src` to `dst`.
    pub fn is_connected<Q>(&self, src: &Q, dst: &Q) -> Result<bool>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.nodes.contains_key(dst) {
            return Err(Error::IsConnected);
        }
        let table = self.nodes.get(src).ok_or(Error::IsConnected)?;
        Ok(table.contains_key(dst))
    }

    /// All nodes, ascending.
    pub fn nodes(&self) -> Vec<N> {
        self.nodes.keys().cloned().collect()
    }

    /// Weights of the edges from `src` to `dst`, ascending. Empty if the two are not connected.
    pub fn weights<Q>(&self, src: &Q, dst: &Q) -> Result<Vec<E>>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if !self.nodes.contains_key(dst) {
            return Err(Error::Weights);
        }
        let table = self.nodes.get(src).ok_or(Error::Weights)?;
        Ok(table
            .get(dst)
            .map(|bucket| bucket.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Distinct direct successors of `src`, ascending.
    pub fn connections<Q>(&self, src: &Q) -> Result<Vec<N>>
    where
        N: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let table = self.nodes.get(src).ok_or(Error::Connections)?;
        Ok(table.keys().cloned().collect())
    }
}
