/*!
# Errors

Two error families are kept apart:
- [`GraphError`] reports graphs that violate the input contract (asymmetric adjacency,
  out-of-range ids, self-loops, duplicate edges). These are detected once at construction.
- [`MatchingError`] reports invalid user-provided matchings as well as broken internal invariants
  of the matching engine. The latter indicate a bug rather than bad input.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Result type for graph construction
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Result type for matching computations
pub type MatchingResult<T> = std::result::Result<T, MatchingError>;

/// A graph does not satisfy the requirements of a simple undirected graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A neighbor id is not in `0..n`
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange {
        /// The offending id
        node: Node,
        /// Number of nodes of the graph
        n: NumNodes,
    },

    /// An edge `{u, u}` was given
    #[error("self-loop at node {node}")]
    SelfLoop {
        /// The node with the loop
        node: Node,
    },

    /// `v` is a neighbor of `u` but `u` is not a neighbor of `v`
    #[error("edge ({u},{v}) has no reverse edge ({v},{u})")]
    Asymmetric {
        /// Source of the one-sided edge
        u: Node,
        /// Target of the one-sided edge
        v: Node,
    },

    /// The edge `{u, v}` occurs more than once
    #[error("duplicate edge ({u},{v})")]
    DuplicateEdge {
        /// First endpoint
        u: Node,
        /// Second endpoint
        v: Node,
    },

    /// The number of edges does not fit into a `NumEdges`
    #[error("graph with {m} edges exceeds the maximum supported number of edges")]
    TooManyEdges {
        /// Number of undirected edges
        m: usize,
    },

    /// The number of nodes does not fit into a `Node`
    #[error("graph with {n} nodes exceeds the maximum supported number of nodes")]
    TooManyNodes {
        /// Requested number of nodes
        n: usize,
    },
}

/// A matching could not be computed or validated
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchingError {
    /// A matching edge is not usable: it is not an edge of the graph, shares an endpoint with
    /// another matching edge or is not stored symmetrically
    #[error("invalid matching edge ({u},{v}): {reason}")]
    InvalidMatchingEdge {
        /// First endpoint
        u: Node,
        /// Second endpoint
        v: Node,
        /// What is wrong with the edge
        reason: &'static str,
    },

    /// Matching and graph disagree on the number of nodes
    #[error("matching covers {found} nodes but the graph has {expected}")]
    NodeCountMismatch {
        /// Number of nodes of the graph
        expected: NumNodes,
        /// Number of nodes of the matching
        found: NumNodes,
    },

    /// The engine reached a state that its invariants rule out
    #[error("internal invariant violated: {0}")]
    InvariantViolation(&'static str),

    /// The graph handed to the engine has a neighbor out of range or a self-loop
    #[error(transparent)]
    InvalidGraph(#[from] GraphError),
}

impl MatchingError {
    /// Returns *true* if the error was caused by a bug rather than by the input
    pub fn is_internal(&self) -> bool {
        matches!(self, MatchingError::InvariantViolation(_))
    }
}
