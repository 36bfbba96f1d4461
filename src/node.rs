/*!
# Node Representation

We choose `Node = u32` as matching instances rarely exceed `2^32` nodes.
This saves space in the per-node arrays of the matching engine (partners, tree depths, parents,
blossom representatives) compared to `usize`.
*/

use std::num::NonZero;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper so that `Option<OptionalNodeImpl<N>>` occupies exactly one `Node`
/// with `N` acting as the `None`-Value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// Converts between the compact and the plain optional representation of a node
pub trait CompactNode {
    /// Unpacks into a plain `Option<Node>`
    fn unpack(self) -> Option<Node>;
}

impl<const N: Node> CompactNode for Option<OptionalNodeImpl<N>> {
    #[inline]
    fn unpack(self) -> Option<Node> {
        self.map(|x| x.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_node_is_compact() {
        assert_eq!(
            std::mem::size_of::<Option<OptionalNode>>(),
            std::mem::size_of::<Node>()
        );
    }

    #[test]
    fn optional_node_roundtrip() {
        for u in [0, 1, 17, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).unpack(), Some(u));
        }
        assert_eq!(OptionalNode::new(INVALID_NODE), None);
        assert_eq!(OptionalNodeImpl::<0>::new(0), None);
        assert_eq!(OptionalNodeImpl::<0>::new(5).unpack(), Some(5));
    }
}
