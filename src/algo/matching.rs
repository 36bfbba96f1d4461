/*!
# Matching Algorithms

This module provides algorithms for computing **matchings** in undirected graphs.

- Supports **maximal matchings** (greedy, not necessarily optimal).
- Supports **maximum matchings** in general graphs using Edmonds' blossom algorithm
  (see [`MaximumMatching`]).

A *matching* is a set of edges without shared endpoints.
- A **maximal matching** cannot be extended by adding another edge, but may not be optimal in size.
- A **maximum matching** is the largest possible matching.
*/

use super::*;
use itertools::Itertools;

/// The result of a matching computation: the partner of every node, if any.
///
/// The partner relation is always mutual, i.e. `partner_of(u) == Some(v)` iff
/// `partner_of(v) == Some(u)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mates {
    mates: Vec<Option<OptionalNode>>,
}

impl Mates {
    pub(crate) fn from_raw(mates: Vec<Option<OptionalNode>>) -> Self {
        Self { mates }
    }

    /// Number of nodes covered by this assignment (matched or not)
    pub fn number_of_nodes(&self) -> NumNodes {
        self.mates.len() as NumNodes
    }

    /// Returns the matched partner of `u` or `None` if `u` is exposed.
    /// ** Panics if `u >= n` **
    pub fn partner_of(&self, u: Node) -> Option<Node> {
        self.mates[u as usize].unpack()
    }

    /// Returns *true* if `u` has a partner.
    /// ** Panics if `u >= n` **
    pub fn is_matched(&self, u: Node) -> bool {
        self.mates[u as usize].is_some()
    }

    /// Returns the number of matched edges
    pub fn cardinality(&self) -> NumNodes {
        (self.mates.iter().filter(|m| m.is_some()).count() / 2) as NumNodes
    }

    /// Returns an iterator over all matched edges `(u, v)` with `u < v` in ascending order of `u`
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.mates.iter().enumerate().filter_map(|(u, m)| {
            let u = u as Node;
            m.unpack().filter(|&v| u < v).map(|v| Edge(u, v))
        })
    }

    /// Returns an iterator over all exposed nodes in ascending order
    pub fn unmatched(&self) -> impl Iterator<Item = Node> + '_ {
        self.mates
            .iter()
            .positions(|m| m.is_none())
            .map(|u| u as Node)
    }

    /// Checks that this is a valid matching of `graph`: the node counts agree, the partner
    /// relation is mutual and every matched pair is an edge of `graph`.
    ///
    /// # Errors
    /// Returns [`MatchingError::NodeCountMismatch`] or [`MatchingError::InvalidMatchingEdge`].
    pub fn verify<G>(&self, graph: &G) -> MatchingResult<()>
    where
        G: AdjacencyList,
    {
        if graph.number_of_nodes() != self.number_of_nodes() {
            return Err(MatchingError::NodeCountMismatch {
                expected: graph.number_of_nodes(),
                found: self.number_of_nodes(),
            });
        }

        for u in graph.vertices() {
            let Some(v) = self.partner_of(u) else {
                continue;
            };

            let reason = if v >= self.number_of_nodes() {
                "partner out of range"
            } else if v == u {
                "node is matched to itself"
            } else if self.partner_of(v) != Some(u) {
                "partner relation is not mutual"
            } else if !graph.neighbors_of(u).any(|w| w == v) {
                "not an edge of the graph"
            } else {
                continue;
            };

            return Err(MatchingError::InvalidMatchingEdge { u, v, reason });
        }

        Ok(())
    }
}

/// A trait providing matching algorithms on undirected graphs.
///
/// Implementations provide:
/// - Greedy maximal matching
/// - Maximum matching in general graphs via Edmonds' blossom algorithm
///
/// The graph must store every edge in both neighborhoods; [`AdjArrayUndir`] guarantees this.
pub trait Matching: AdjacencyList {
    /// Computes a **maximal matching** greedily.
    ///
    /// Each edge `{u, v}` in the matching is returned only once as `(u, v)` with `u <= v`.
    /// The resulting vector is sorted lexicographically.
    fn maximal_undirected_matching(&self) -> Vec<(Node, Node)>;

    /// Computes a **maximum matching** with the default configuration of [`MaximumMatching`].
    ///
    /// Each edge `{u, v}` in the matching is returned only once as `(u, v)` with `u < v`.
    /// The resulting vector is sorted lexicographically.
    ///
    /// # Examples
    /// ```
    /// use ublossom::{prelude::*, algo::*};
    ///
    /// let graph = AdjArrayUndir::try_from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// assert_eq!(graph.maximum_undirected_matching().unwrap(), vec![(0, 1)]);
    /// ```
    fn maximum_undirected_matching(&self) -> MatchingResult<Vec<(Node, Node)>> {
        Ok(self
            .maximum_matching_mates()?
            .edges()
            .map(|e| e.as_tuple())
            .collect_vec())
    }

    /// Computes a **maximum matching** with the default configuration of [`MaximumMatching`]
    /// and returns the partner of every node.
    fn maximum_matching_mates(&self) -> MatchingResult<Mates>;
}

impl<G> Matching for G
where
    G: AdjacencyList,
{
    /// Greedy maximal matching implementation:
    /// - Iterates through vertices
    /// - Picks the first available unmatched neighbor
    /// - Marks both endpoints as matched
    fn maximal_undirected_matching(&self) -> Vec<(Node, Node)> {
        let mut matching = Vec::new();
        let mut matched = vec![false; self.len()];

        for u in self.vertices() {
            if matched[u as usize] {
                continue;
            }

            if let Some(v) = self
                .neighbors_of(u)
                .find(|&v| v != u && !matched[v as usize])
            {
                matched[u as usize] = true;
                matched[v as usize] = true;
                matching.push(Edge(u, v).normalized().as_tuple());
            }
        }

        matching.sort_unstable();
        matching
    }

    fn maximum_matching_mates(&self) -> MatchingResult<Mates> {
        MaximumMatching::new().compute(self)
    }
}
