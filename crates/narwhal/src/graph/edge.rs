//! Edge value types.
//!
//! [`Edge`] is the owned `(from, to, weight)` triple produced by cursors; [`EdgeRef`] is the
//! borrowed view produced by [`Edges`](super::Edges).

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<N, E> {
    pub from: N,
    pub to: N,
    pub weight: E,
}

impl<N, E> Edge<N, E> {
    pub fn new(from: N, to: N, weight: E) -> Self {
        Self { from, to, weight }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeRef<'a, N, E> {
    pub from: &'a N,
    pub to: &'a N,
    pub weight: &'a E,
}

impl<N, E> Clone for EdgeRef<'_, N, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, E> Copy for EdgeRef<'_, N, E> {}

impl<N: Clone, E: Clone> EdgeRef<'_, N, E> {
    pub fn cloned(self) -> Edge<N, E> {
        Edge::new(self.from.clone(), self.to.clone(), self.weight.clone())
    }
}

impl<N: PartialEq, E: PartialEq> PartialEq<Edge<N, E>> for EdgeRef<'_, N, E> {
    fn eq(&self, other: &Edge<N, E>) -> bool {
        *self.from == other.from && *self.to == other.to && *self.weight == other.weight
    }
}
