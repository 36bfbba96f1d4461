use fxhash::FxHashSet;

use super::*;

/// An undirected graph stored as an adjacency array.
///
/// Invariants (established by every constructor):
/// - `v` is a neighbor of `u` iff `u` is a neighbor of `v`,
/// - all neighbors are in `0..n`,
/// - there are no self-loops and no duplicate edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjArrayUndir {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl AdjArrayUndir {
    /// Creates a graph with `n` isolated nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Creates a graph from explicit adjacency lists where `adjacency[u]` lists the neighbors of `u`.
    ///
    /// The neighbor order is kept as is.
    ///
    /// # Errors
    /// Returns a [`GraphError`] if a neighbor is out of range, a self-loop or duplicate edge
    /// exists, or an edge is only present in one direction.
    ///
    /// # Examples
    /// ```
    /// use ublossom::prelude::*;
    ///
    /// let graph = AdjArrayUndir::try_from_adjacency(vec![vec![1, 2], vec![0], vec![0]]).unwrap();
    /// assert_eq!(graph.number_of_edges(), 2);
    ///
    /// let err = AdjArrayUndir::try_from_adjacency(vec![vec![1], vec![]]).unwrap_err();
    /// assert_eq!(err, GraphError::Asymmetric { u: 0, v: 1 });
    /// ```
    pub fn try_from_adjacency(adjacency: Vec<Vec<Node>>) -> GraphResult<Self> {
        let n = adjacency.len();
        if n > INVALID_NODE as usize {
            return Err(GraphError::TooManyNodes { n });
        }
        let n = n as NumNodes;

        let total: usize = adjacency.iter().map(|nbs| nbs.len()).sum();
        let num_edges = edge_count(total / 2)?;
        let mut arcs: FxHashSet<Edge> = FxHashSet::default();
        arcs.reserve(total);

        for (u, nbs) in adjacency.iter().enumerate() {
            let u = u as Node;
            for &v in nbs {
                if v >= n {
                    return Err(GraphError::NodeOutOfRange { node: v, n });
                }
                if v == u {
                    return Err(GraphError::SelfLoop { node: u });
                }
                if !arcs.insert(Edge(u, v)) {
                    let Edge(u, v) = Edge(u, v).normalized();
                    return Err(GraphError::DuplicateEdge { u, v });
                }
            }
        }

        for (u, nbs) in adjacency.iter().enumerate() {
            let u = u as Node;
            if let Some(&v) = nbs.iter().find(|&&v| !arcs.contains(&Edge(v, u))) {
                return Err(GraphError::Asymmetric { u, v });
            }
        }

        Ok(Self {
            nbs: adjacency,
            num_edges,
        })
    }

    /// Creates a graph with `n` nodes from a list of undirected edges.
    /// Each edge must be given exactly once (in either orientation).
    ///
    /// For an edge `(u, v)`, `v` is appended to the neighbors of `u` and `u` to the neighbors of
    /// `v`, so neighbor order follows the order of `edges`.
    ///
    /// # Errors
    /// Returns a [`GraphError`] on out-of-range endpoints, self-loops or duplicate edges.
    pub fn try_from_edges<I, E>(n: NumNodes, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        let mut seen: FxHashSet<Edge> = FxHashSet::default();
        let mut m = 0usize;

        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            if let Some(&node) = [u, v].iter().find(|&&x| x >= n) {
                return Err(GraphError::NodeOutOfRange { node, n });
            }
            if u == v {
                return Err(GraphError::SelfLoop { node: u });
            }
            if !seen.insert(Edge(u, v).normalized()) {
                let Edge(u, v) = Edge(u, v).normalized();
                return Err(GraphError::DuplicateEdge { u, v });
            }

            graph.nbs[u as usize].push(v);
            graph.nbs[v as usize].push(u);
            m += 1;
        }

        graph.num_edges = edge_count(m)?;
        Ok(graph)
    }

    /// Builds the graph from edges that are known to be distinct, loop-free and in range
    pub(crate) fn from_valid_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges {
            debug_assert!(u != v && u < n && v < n);
            graph.nbs[u as usize].push(v);
            graph.nbs[v as usize].push(u);
            graph.num_edges += 1;
        }
        graph
    }

    /// Consumes the graph and returns its adjacency lists
    pub fn into_adjacency(self) -> Vec<Vec<Node>> {
        self.nbs
    }
}

impl GraphNodeOrder for AdjArrayUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjArrayUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArrayUndir {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArrayUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // scan the shorter neighborhood; both contain the edge by symmetry
        let (a, b) = if self.degree_of(u) <= self.degree_of(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.nbs[a as usize].contains(&b)
    }
}

/// Converts a number of undirected edges into [`NumEdges`]
fn edge_count(m: usize) -> GraphResult<NumEdges> {
    NumEdges::try_from(m).map_err(|_| GraphError::TooManyEdges { m })
}
