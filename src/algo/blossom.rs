/*!
# Maximum Matchings via Edmonds' Blossom Algorithm

Computes a maximum-cardinality matching in a general undirected graph:

1. A greedy pass matches every exposed node with its first exposed neighbor. This yields a
   maximal matching and leaves a worklist of exposed nodes.
2. For every node of the worklist that is still exposed, a single BFS grows an alternating tree
   rooted at that node. Odd cycles (*blossoms*) found during the search are contracted into their
   base via a [`VersionedUnionFind`] so that the search can treat them as one even node.
3. If the search reaches an exposed node, the augmenting path is unrolled through all contracted
   blossoms and flipped, which increases the matching by one. Otherwise the root stays exposed
   for good: if no augmenting path starts at an exposed node, later augmentations elsewhere can
   not create one.

Each search costs `O(m α(n))`, so the whole computation runs in `O(n m α(n))`.

All per-search arrays live in a single alternating forest that is allocated once per run.
Starting a new search only advances the epoch of the union-find: every node whose stamp is
outdated is considered to be outside the tree.
*/

use std::collections::VecDeque;

use log::{debug, trace};

use super::*;

/// Configures Edmonds' blossom algorithm for **maximum matchings** in general graphs.
///
/// # Examples
/// ```
/// use ublossom::{prelude::*, algo::*};
///
/// let graph = AdjArrayUndir::try_from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
/// let (mates, stats) = MaximumMatching::new()
///     .initial_matching([(1, 2), (3, 4)])
///     .compute_with_stats(&graph)
///     .unwrap();
///
/// assert_eq!(mates.cardinality(), 3);
/// assert_eq!(stats.augmentations, 1);
/// ```
#[derive(Debug, Clone)]
pub struct MaximumMatching {
    greedy: bool,
    initial: Vec<Edge>,
}

impl Default for MaximumMatching {
    fn default() -> Self {
        Self {
            greedy: true,
            initial: Vec::new(),
        }
    }
}

/// Counters collected while computing a maximum matching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchingStats {
    /// Number of edges provided as initial matching
    pub initial_edges: NumNodes,
    /// Number of edges added by the greedy bootstrap
    pub greedy_edges: NumNodes,
    /// Number of augmenting-path searches started
    pub searches: NumNodes,
    /// Number of successful searches (each adds one edge)
    pub augmentations: NumNodes,
    /// Number of blossoms contracted over all searches
    pub blossoms: u64,
}

impl MatchingStats {
    /// Number of searches that did not find an augmenting path
    pub fn failed_searches(&self) -> NumNodes {
        self.searches - self.augmentations
    }
}

impl MaximumMatching {
    /// Creates the default configuration: greedy bootstrap enabled, no initial matching
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the greedy bootstrap.
    /// Without it, every exposed node triggers an augmenting-path search.
    pub fn greedy_initialization(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    /// Starts the computation from the given matching instead of the empty one.
    /// The greedy bootstrap (if enabled) extends it.
    pub fn initial_matching<I, E>(mut self, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        self.initial = edges.into_iter().map(|e| e.into()).collect();
        self
    }

    /// Computes a maximum matching of `graph`.
    ///
    /// Neighbors are checked to be in range and distinct from their node. Symmetry is not
    /// checked; for one-sided neighborhoods the result is a mutual pairing along arcs of `graph`
    /// rather than a matching of an undirected graph.
    ///
    /// # Errors
    /// Returns [`MatchingError::InvalidGraph`] if a neighborhood is out of range or contains its
    /// node, [`MatchingError::InvalidMatchingEdge`] if the initial matching is not a matching
    /// of `graph` and [`MatchingError::InvariantViolation`] if the engine hits an inconsistent
    /// state.
    pub fn compute<G>(&self, graph: &G) -> MatchingResult<Mates>
    where
        G: AdjacencyList,
    {
        self.compute_with_stats(graph).map(|(mates, _)| mates)
    }

    /// Same as [`MaximumMatching::compute`] but also returns statistics of the run
    pub fn compute_with_stats<G>(&self, graph: &G) -> MatchingResult<(Mates, MatchingStats)>
    where
        G: AdjacencyList,
    {
        check_neighborhoods(graph)?;

        let mut engine = BlossomEngine::new(graph);
        engine.seed(&self.initial)?;
        engine.run(self.greedy)
    }
}

/// Rejects neighborhoods with ids outside `0..n` or self-loops
fn check_neighborhoods<G>(graph: &G) -> GraphResult<()>
where
    G: AdjacencyList,
{
    let n = graph.number_of_nodes();
    for u in graph.vertices() {
        for v in graph.neighbors_of(u) {
            if v >= n {
                return Err(GraphError::NodeOutOfRange { node: v, n });
            }
            if v == u {
                return Err(GraphError::SelfLoop { node: u });
            }
        }
    }

    Ok(())
}

/// One pending step of path reconstruction
#[derive(Debug, Clone, Copy)]
enum PathFrame {
    /// Emit the tree path from `from` up to `to`
    Walk { from: Node, to: Node },
    /// Reverse everything emitted since `offset`
    Reverse { offset: usize },
}

/// State of a single augmenting-path search.
///
/// Tree membership and blossom representatives are both answered by the union-find: a node is
/// in the current tree iff it was activated in the current epoch.
struct AlternatingForest {
    depth: Vec<NumNodes>,
    parent: Vec<Node>,
    bridges: Vec<(Node, Node)>,
    blossoms: VersionedUnionFind,
    queue: VecDeque<Node>,
}

impl AlternatingForest {
    fn new(n: NumNodes) -> Self {
        Self {
            depth: vec![0; n as usize],
            parent: vec![INVALID_NODE; n as usize],
            bridges: vec![(INVALID_NODE, INVALID_NODE); n as usize],
            blossoms: VersionedUnionFind::new(n),
            queue: VecDeque::new(),
        }
    }

    /// Discards the previous tree and plants a new one at `root`
    fn reset(&mut self, root: Node) {
        self.blossoms.advance_epoch();
        self.queue.clear();
        self.attach(root, INVALID_NODE, 0);
        self.queue.push_back(root);
    }

    fn attach(&mut self, u: Node, parent: Node, depth: NumNodes) {
        self.depth[u as usize] = depth;
        self.parent[u as usize] = parent;
        self.blossoms.activate(u);
    }

    #[inline]
    fn contains(&self, u: Node) -> bool {
        self.blossoms.is_active(u)
    }

    #[inline]
    fn is_even(&self, u: Node) -> bool {
        self.depth[u as usize] % 2 == 0
    }
}

struct BlossomEngine<'a, G> {
    graph: &'a G,
    mates: Vec<Option<OptionalNode>>,
    forest: AlternatingForest,
    stats: MatchingStats,
}

impl<'a, G> BlossomEngine<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            mates: vec![None; n as usize],
            forest: AlternatingForest::new(n),
            stats: MatchingStats::default(),
        }
    }

    #[inline]
    fn mate_of(&self, u: Node) -> Option<Node> {
        self.mates[u as usize].unpack()
    }

    fn mate_or_err(&self, u: Node, context: &'static str) -> MatchingResult<Node> {
        self.mate_of(u)
            .ok_or(MatchingError::InvariantViolation(context))
    }

    fn set_mates(&mut self, u: Node, v: Node) {
        self.mates[u as usize] = OptionalNode::new(v);
        self.mates[v as usize] = OptionalNode::new(u);
    }

    /// Installs a user-provided matching after checking that it is one
    fn seed(&mut self, edges: &[Edge]) -> MatchingResult<()> {
        let n = self.graph.number_of_nodes();
        for &Edge(u, v) in edges {
            let reason = if u >= n || v >= n {
                "endpoint out of range"
            } else if u == v {
                "self-loop"
            } else if !self.graph.neighbors_of(u).any(|w| w == v) {
                "not an edge of the graph"
            } else if self.mate_of(u).is_some() || self.mate_of(v).is_some() {
                "endpoint is already matched"
            } else {
                self.set_mates(u, v);
                continue;
            };

            return Err(MatchingError::InvalidMatchingEdge { u, v, reason });
        }

        self.stats.initial_edges = edges.len() as NumNodes;
        Ok(())
    }

    /// Greedily matches exposed nodes with their first exposed neighbor.
    /// Returns the nodes that are left exposed.
    fn bootstrap(&mut self, greedy: bool) -> Vec<Node> {
        let graph = self.graph;
        let mut exposed = Vec::new();

        for u in graph.vertices() {
            if self.mate_of(u).is_some() {
                continue;
            }

            let partner = if greedy {
                graph.neighbors_of(u).find(|&v| self.mate_of(v).is_none())
            } else {
                None
            };

            match partner {
                Some(v) => {
                    self.set_mates(u, v);
                    self.stats.greedy_edges += 1;
                }
                None => exposed.push(u),
            }
        }

        exposed
    }

    fn run(mut self, greedy: bool) -> MatchingResult<(Mates, MatchingStats)> {
        let exposed = self.bootstrap(greedy);
        let mut path = Vec::new();

        for root in exposed {
            if self.mate_of(root).is_some() {
                continue;
            }

            self.stats.searches += 1;
            if self.find_augmenting_path(root, &mut path)? {
                trace!("augmenting path of length {} from root {root}", path.len());
                self.augment(&path)?;
                self.stats.augmentations += 1;
            }
        }

        let mates = Mates::from_raw(self.mates);
        debug!(
            "maximum matching on {} nodes: {} edges ({} initial, {} greedy, {} augmentations in {} searches, {} blossoms)",
            mates.number_of_nodes(),
            mates.cardinality(),
            self.stats.initial_edges,
            self.stats.greedy_edges,
            self.stats.augmentations,
            self.stats.searches,
            self.stats.blossoms,
        );

        Ok((mates, self.stats))
    }

    /// Flips the matching along `path`: `(p0, p1), (p2, p3), ...` become partners
    fn augment(&mut self, path: &[Node]) -> MatchingResult<()> {
        if path.len() % 2 != 0 {
            return Err(MatchingError::InvariantViolation(
                "augmenting path has odd length",
            ));
        }

        for pair in path.chunks_exact(2) {
            self.set_mates(pair[0], pair[1]);
        }

        Ok(())
    }

    /// Runs one BFS from the exposed node `root`.
    /// On success, `path` holds an augmenting path ending in `root`.
    fn find_augmenting_path(&mut self, root: Node, path: &mut Vec<Node>) -> MatchingResult<bool> {
        let graph = self.graph;
        self.forest.reset(root);

        while let Some(v) = self.forest.queue.pop_front() {
            for w in graph.neighbors_of(v) {
                if self.examine_edge(root, v, w, path)? {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    fn examine_edge(
        &mut self,
        root: Node,
        v: Node,
        w: Node,
        path: &mut Vec<Node>,
    ) -> MatchingResult<bool> {
        let v_bar = self.forest.blossoms.find(v);
        let w_bar = self.forest.blossoms.find(w);

        if v_bar == w_bar {
            return Ok(false);
        }

        if !self.forest.contains(w_bar) {
            if self.mate_of(w).is_none() {
                self.build_augmenting_path(root, v, w, path)?;
                return Ok(true);
            }
            self.extend_tree(v, w)?;
        } else if self.forest.is_even(w_bar) {
            self.shrink_blossom(v, w)?;
        }

        Ok(false)
    }

    /// Adds the matched edge `{w, mate(w)}` below `v`
    fn extend_tree(&mut self, v: Node, w: Node) -> MatchingResult<()> {
        let u = self.mate_or_err(w, "tree is extended by an exposed node")?;

        let depth_v = self.forest.depth[v as usize];
        // `w` must be odd, so we add either 1 or 2
        let depth_w = depth_v + 1 + (depth_v & 1);

        self.forest.attach(w, v, depth_w);
        self.forest.attach(u, w, depth_w + 1);
        self.forest.queue.push_back(u);

        Ok(())
    }

    /// Contracts the odd cycle closed by the edge `{v, w}` between two even nodes
    fn shrink_blossom(&mut self, v: Node, w: Node) -> MatchingResult<()> {
        let base = self.common_ancestor(v, w)?;
        trace!("contracting blossom at base {base} closed by ({v},{w})");

        self.shrink_path(base, v, w)?;
        self.shrink_path(base, w, v)?;
        self.stats.blossoms += 1;

        Ok(())
    }

    /// Merges every blossom on the tree path from `v` up to `base` into `base`
    fn shrink_path(&mut self, base: Node, v: Node, w: Node) -> MatchingResult<()> {
        let mut u = self.forest.blossoms.find(v);

        while u != base {
            if u == INVALID_NODE {
                return Err(MatchingError::InvariantViolation(
                    "blossom path passes the root",
                ));
            }
            self.forest.blossoms.link(base, u);
            u = self.mate_or_err(u, "blossom path contains an exposed node")?;
            self.forest.blossoms.link(base, u);
            self.forest.blossoms.make_representative(base);

            // odd nodes become even inside the blossom and need to be scanned
            self.forest.queue.push_back(u);
            self.forest.bridges[u as usize] = (v, w);

            let parent = self.forest.parent[u as usize];
            u = if parent == INVALID_NODE {
                INVALID_NODE
            } else {
                self.forest.blossoms.find(parent)
            };
        }

        Ok(())
    }

    /// Returns the blossom containing the lowest common ancestor of `v` and `w`
    fn common_ancestor(&mut self, mut v: Node, mut w: Node) -> MatchingResult<Node> {
        while v != w {
            if self.forest.depth[v as usize] > self.forest.depth[w as usize] {
                v = self.forest.parent[v as usize];
            } else {
                w = self.forest.parent[w as usize];
            }

            if v == INVALID_NODE || w == INVALID_NODE {
                return Err(MatchingError::InvariantViolation(
                    "tree nodes without common ancestor",
                ));
            }
        }

        Ok(self.forest.blossoms.find(v))
    }

    /// Writes the augmenting path `w, v, ..., root` into `path`
    fn build_augmenting_path(
        &self,
        root: Node,
        v: Node,
        w: Node,
        path: &mut Vec<Node>,
    ) -> MatchingResult<()> {
        path.clear();
        path.push(w);
        self.unroll_tree_path(v, root, path)
    }

    /// Appends the alternating path from `s` to its ancestor `t` to `path`, expanding all
    /// contracted blossoms on the way.
    ///
    /// An even node continues through its mate. An odd node has been absorbed into a blossom and
    /// is left through the bridge `(x, y)` recorded during contraction: the path first goes from
    /// `x` back to the mate of the odd node (emitted in reverse) and then from `y` onwards to `t`.
    fn unroll_tree_path(&self, s: Node, t: Node, path: &mut Vec<Node>) -> MatchingResult<()> {
        let n = self.graph.len();
        let mut frames = vec![PathFrame::Walk { from: s, to: t }];

        while let Some(frame) = frames.pop() {
            if path.len() > n {
                return Err(MatchingError::InvariantViolation(
                    "augmenting path is longer than the number of nodes",
                ));
            }

            let (s, t) = match frame {
                PathFrame::Reverse { offset } => {
                    path[offset..].reverse();
                    continue;
                }
                PathFrame::Walk { from, to } => (from, to),
            };

            if s as usize >= n {
                return Err(MatchingError::InvariantViolation(
                    "augmenting path leaves the tree",
                ));
            }

            path.push(s);
            if s == t {
                continue;
            }

            let mate = self.mate_or_err(s, "inner path node is exposed")?;
            if self.forest.is_even(s) {
                path.push(mate);
                frames.push(PathFrame::Walk {
                    from: self.forest.parent[mate as usize],
                    to: t,
                });
            } else {
                let (x, y) = self.forest.bridges[s as usize];
                frames.push(PathFrame::Walk { from: y, to: t });
                frames.push(PathFrame::Reverse { offset: path.len() });
                frames.push(PathFrame::Walk { from: x, to: mate });
            }
        }

        Ok(())
    }
}
