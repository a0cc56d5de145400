//! Precondition failures reported by [`Graph`](crate::Graph).
//!
//! Absence that is a normal outcome (a duplicate insert, erasing something that is not there,
//! `find` on a missing edge) is reported through `bool` / end cursors instead.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Cannot call Graph::insert_edge when either src or dst node does not exist")]
    InsertEdge,

    #[error("Cannot call Graph::replace_node on a node that doesn't exist")]
    ReplaceNode,

    #[error(
        "Cannot call Graph::merge_replace_node on old or new data if they don't exist in the graph"
    )]
    MergeReplaceNode,

    #[error("Cannot call Graph::erase_edge on src or dst if they don't exist in the graph")]
    EraseEdge,

    #[error("Cannot call Graph::is_connected if src or dst node don't exist in the graph")]
    IsConnected,

    #[error("Cannot call Graph::weights if src or dst node don't exist in the graph")]
    Weights,

    #[error("Cannot call Graph::connections if src doesn't exist in the graph")]
    Connections,
}

pub type Result<T> = std::result::Result<T, Error>;
