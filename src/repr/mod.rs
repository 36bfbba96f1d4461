/*!
# Graph Representations

Matching only needs to read neighborhoods, so there is a single immutable representation:

- [`AdjArrayUndir`]: one `Vec<Node>` per node holding its neighbors in a caller-defined order.
  Symmetry, range, loop and duplicate checks happen once at construction; afterwards the graph
  can not be modified.
- [`GraphBuilder`]: a mutable edge collector that produces an [`AdjArrayUndir`].

The neighbor order is preserved exactly as given since it determines which of several maximum
matchings the engine reports.
*/

use crate::{edge::*, error::*, node::*, ops::*};

mod adj_array;
mod builder;

pub use adj_array::*;
pub use builder::*;
