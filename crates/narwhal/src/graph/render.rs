//! Canonical text rendering.
//!
//! ```text
//! <node> (
//!   <to> | <weight>
//! )
//! ```
//!
//! One block per node in ascending order, one line per edge. A node without outgoing edges
//! still renders its (empty) block; an empty graph renders as the empty string.

use std::fmt;

use super::Graph;

impl<N: fmt::Display, E: fmt::Display> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, table) in &self.nodes {
            writeln!(f, "{from} (")?;
            for (to, bucket) in table {
                for weight in bucket {
                    writeln!(f, "  {to} | {weight}")?;
                }
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
