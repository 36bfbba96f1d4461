/*!
`ublossom` computes **maximum matchings** in graphs that are
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`
- **u**nweighted : Only the number of matched edges counts
- **u**ndirected : Every edge `{u, v}` is stored in both neighborhoods

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

The only graph representation is [`AdjArrayUndir`](crate::repr::AdjArrayUndir): an immutable
adjacency array that is validated once when it is built. Use a [`GraphBuilder`](crate::repr::GraphBuilder)
to collect edges incrementally.

# Matchings

A *matching* is a set of edges without shared endpoints. The [`algo`] module provides
- a greedy **maximal** matching (cheap, but not necessarily optimal), and
- a **maximum** matching via Edmonds' blossom algorithm, which handles odd cycles and thus works on
  general (non-bipartite) graphs.

As in the rest of the crate, the algorithm is a configurable struct ([`MaximumMatching`](crate::algo::MaximumMatching))
while the common case is available as a trait method directly on the graph:

```rust
use ublossom::{prelude::*, algo::*};

// a 5-cycle needs a blossom contraction
let graph = AdjArrayUndir::try_from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]).unwrap();
let mates = graph.maximum_matching_mates().unwrap();

assert_eq!(mates.cardinality(), 2);
assert_eq!(mates.unmatched().count(), 1);
```

# Usage

In most use-cases, `use ublossom::{prelude::*, algo::*};` suffices for your needs.
The [`gens`] module contains random graph generators and substructure helpers that are mostly
useful for testing.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

/// `ublossom::prelude` includes definitions for nodes and edges, all basic graph operation traits, the graph representation and error types.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
