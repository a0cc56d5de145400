//! Ordered, weighted, directed multigraph container.
//!
//! Nodes are identified by their value. Every edge is keyed by `(from, to, weight)`, so the same
//! ordered pair of nodes may be joined by several edges as long as their weights differ.
//! Everything is kept sorted: nodes, the destinations of each node, and the weights of each
//! `(from, to)` pair. Traversal therefore yields edges in ascending `(from, to, weight)` order.
//!
//! ```
//! use narwhal::Graph;
//!
//! let mut g: Graph<String, i32> = Graph::from(["a".to_string(), "b".to_string()]);
//! g.insert_edge("a", "b", 2)?;
//! g.insert_edge("a", "b", 1)?;
//! assert_eq!(g.weights("a", "b")?, vec![1, 2]);
//! assert_eq!(g.to_string(), "a (\n  b | 1\n  b | 2\n)\nb (\n)\n");
//! # Ok::<(), narwhal::Error>(())
//! ```

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{Cursor, Edge, EdgeRef, Edges, Graph};
