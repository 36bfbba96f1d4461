/*!
# Versioned Union-Find

A union-find over the nodes `0..n` that supports an `O(1)` reset.

Every node carries the epoch in which it was last activated. Advancing the epoch therefore turns
every node back into a singleton without touching the arrays: a node whose stamp does not match
the current epoch is *stale* and [`VersionedUnionFind::find`] returns the node itself.

Note that [`VersionedUnionFind::link`] does not use union-by-rank. Callers control which root
survives (the blossom shrinking in [`crate::algo`] relies on this) and rely on path compression
alone.
*/

use crate::node::*;

/// Generation counter of a [`VersionedUnionFind`]
pub type Epoch = u32;

/// Union-find with epoch-scoped membership, see the [module documentation](self)
#[derive(Debug, Clone)]
pub struct VersionedUnionFind {
    parents: Vec<Node>,
    epochs: Vec<Epoch>,
    epoch: Epoch,
}

impl VersionedUnionFind {
    /// Creates a structure for `n` nodes; all nodes are stale
    pub fn new(n: NumNodes) -> Self {
        Self {
            parents: (0..n).collect(),
            epochs: vec![0; n as usize],
            // stamp 0 is never current
            epoch: 1,
        }
    }

    /// Starts a new epoch which logically turns every node into a stale singleton.
    ///
    /// Runs in `O(1)` except when the counter wraps around, in which case all stamps are cleared.
    pub fn advance_epoch(&mut self) {
        if self.epoch == Epoch::MAX {
            self.epochs.fill(0);
            self.epoch = 0;
        }
        self.epoch += 1;
    }

    /// Adds `u` to the current epoch as its own singleton set
    pub fn activate(&mut self, u: Node) {
        self.epochs[u as usize] = self.epoch;
        self.parents[u as usize] = u;
    }

    /// Returns *true* if `u` was activated in the current epoch
    #[inline]
    pub fn is_active(&self, u: Node) -> bool {
        self.epochs[u as usize] == self.epoch
    }

    /// Returns the representative of `u`'s set; stale nodes represent themselves.
    /// Compresses the traversed path.
    pub fn find(&mut self, u: Node) -> Node {
        if !self.is_active(u) {
            return u;
        }

        let mut root = u;
        while self.parents[root as usize] != root {
            root = self.parents[root as usize];
            if !self.is_active(root) {
                break;
            }
        }

        let mut v = u;
        while v != root && self.is_active(v) {
            let next = self.parents[v as usize];
            self.parents[v as usize] = root;
            v = next;
        }

        root
    }

    /// Merges the sets of `u` and `v`; the representative of `v` becomes the representative of both
    pub fn link(&mut self, u: Node, v: Node) {
        let ru = self.find(u);
        let rv = self.find(v);
        self.parents[ru as usize] = rv;
    }

    /// Makes `u` the representative of its set
    pub fn make_representative(&mut self, u: Node) {
        let root = self.find(u);
        self.parents[root as usize] = u;
        self.parents[u as usize] = u;
    }
}
