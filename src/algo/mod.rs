/*!
# Graph Algorithms

This module provides the **matching algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use ublossom::algo::*;
```
and gain access to the [`Matching`] trait, the configurable [`MaximumMatching`] engine and its
[`Mates`] result.
*/

mod blossom;
mod matching;

use crate::{prelude::*, utils::*};

pub use blossom::*;
pub use matching::*;
