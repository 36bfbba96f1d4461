/*!
# Substructure Generators

Adds common motifs to a graph under construction:

- **Paths**
- **Cycles**
- **Cliques**

Odd cycles and cliques force the blossom algorithm to contract, so they are handy building blocks
for test instances.

# Example

```rust
use ublossom::{prelude::*, gens::*};

let mut builder = GraphBuilder::new(5);
builder.connect_path([0, 1, 2]);
builder.connect_cycle([2, 3, 4]);

let graph = builder.build().unwrap();
assert_eq!(
    graph.ordered_edges(true),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside a graph under construction.
///
/// Edges that already exist are skipped.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: consecutive nodes are connected and the last
    /// node is connected back to the first. Fewer than three nodes yield a path.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph) without self-loops.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes_in_cycle.into_iter().collect_vec();
        self.connect_path(nodes.iter().copied());

        if nodes.len() > 2 {
            self.add_edge(nodes[nodes.len() - 1], nodes[0]);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.iter().copied().tuple_combinations() {
            if u != v {
                self.add_edge(u, v);
            }
        }
    }
}
