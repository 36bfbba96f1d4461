use fxhash::FxHashSet;

use super::*;

/// Collects undirected edges for a graph with a fixed number of nodes and turns them into an
/// [`AdjArrayUndir`].
///
/// Duplicate edges are dropped on insertion; self-loops and out-of-range endpoints are kept until
/// [`GraphBuilder::build`] rejects them.
///
/// # Examples
/// ```
/// use ublossom::prelude::*;
///
/// let mut builder = GraphBuilder::new(3);
/// builder.add_edges([(0, 1), (1, 2)]);
/// assert!(builder.try_add_edge(2, 1));
///
/// let graph = builder.build().unwrap();
/// assert_eq!(graph.number_of_edges(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    n: NumNodes,
    edges: Vec<Edge>,
    seen: FxHashSet<Edge>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `n` nodes and no edges
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            edges: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    /// Returns the edges added so far in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds the graph; neighbor order follows the insertion order of the edges.
    ///
    /// # Errors
    /// Returns a [`GraphError`] if an edge is a self-loop or has an endpoint outside `0..n`.
    pub fn build(self) -> GraphResult<AdjArrayUndir> {
        AdjArrayUndir::try_from_edges(self.n, self.edges)
    }
}

impl GraphNodeOrder for GraphBuilder {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for GraphBuilder {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphEdgeEditing for GraphBuilder {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.seen.insert(Edge(u, v).normalized()) {
            self.edges.push(Edge(u, v));
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_dropped() {
        let mut builder = GraphBuilder::new(4);
        assert!(!builder.try_add_edge(0, 1));
        assert!(builder.try_add_edge(1, 0));
        builder.add_edges([(1, 2), (2, 1), (2, 3)]);

        assert_eq!(builder.number_of_edges(), 3);
        assert_eq!(builder.edges(), &[Edge(0, 1), Edge(1, 2), Edge(2, 3)]);

        let graph = builder.build().unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(1).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn build_rejects_invalid_edges() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(1, 1);
        assert_eq!(builder.build(), Err(GraphError::SelfLoop { node: 1 }));

        let mut builder = GraphBuilder::new(2);
        builder.add_edge(0, 2);
        assert_eq!(
            builder.build(),
            Err(GraphError::NodeOutOfRange { node: 2, n: 2 })
        );
    }
}
