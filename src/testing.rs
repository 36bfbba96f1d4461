//! Reference solvers used to check matchings in tests

use fxhash::FxHashMap;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::{algo::Mates, prelude::*};

/// Graphs up to this size are solved exactly by [`brute_force_maximum_matching_size`]
pub const BRUTE_FORCE_LIMIT: NumNodes = 20;

const PRIME: u64 = 1_000_000_007;

/// Converts plain partners into the compact representation used by [`Mates`]
pub fn raw_mates(partners: &[Option<Node>]) -> Vec<Option<OptionalNode>> {
    partners
        .iter()
        .map(|p| p.and_then(OptionalNode::new))
        .collect()
}

/// Computes the size of a maximum matching by trying every way to match the smallest
/// remaining node. Memoised over the set of remaining nodes.
/// ** Panics if `n > BRUTE_FORCE_LIMIT` **
pub fn brute_force_maximum_matching_size<G: AdjacencyList>(graph: &G) -> NumNodes {
    assert!(graph.number_of_nodes() <= BRUTE_FORCE_LIMIT);

    fn solve<G: AdjacencyList>(
        graph: &G,
        remaining: u32,
        memo: &mut FxHashMap<u32, NumNodes>,
    ) -> NumNodes {
        if remaining == 0 {
            return 0;
        }
        if let Some(&size) = memo.get(&remaining) {
            return size;
        }

        let u = remaining.trailing_zeros();
        let without_u = remaining & !(1 << u);

        let mut best = solve(graph, without_u, memo);
        for v in graph.neighbors_of(u) {
            if without_u & (1 << v) != 0 {
                best = best.max(1 + solve(graph, without_u & !(1 << v), memo));
            }
        }

        memo.insert(remaining, best);
        best
    }

    let all = ((1u64 << graph.number_of_nodes()) - 1) as u32;
    solve(graph, all, &mut FxHashMap::default())
}

/// Computes the size of a maximum matching as half the rank of a randomly instantiated Tutte
/// matrix over `GF(PRIME)`. The rank never exceeds twice the matching size and matches it with
/// probability at least `1 - n / PRIME`.
pub fn tutte_matrix_matching_size<G: AdjacencyList>(graph: &G, seed: u64) -> NumNodes {
    let n = graph.len();
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);

    let mut matrix = vec![vec![0u64; n]; n];
    for Edge(u, v) in graph.edges(true) {
        let x = rng.random_range(1..PRIME);
        matrix[u as usize][v as usize] = x;
        matrix[v as usize][u as usize] = PRIME - x;
    }

    let mut rank = 0;
    for col in 0..n {
        let Some(pivot) = (rank..n).find(|&r| matrix[r][col] != 0) else {
            continue;
        };
        matrix.swap(rank, pivot);

        let inv = pow_mod(matrix[rank][col], PRIME - 2);
        for r in 0..n {
            if r == rank || matrix[r][col] == 0 {
                continue;
            }
            let factor = matrix[r][col] * inv % PRIME;
            for c in col..n {
                let sub = factor * matrix[rank][c] % PRIME;
                matrix[r][c] = (matrix[r][c] + PRIME - sub) % PRIME;
            }
        }
        rank += 1;
    }

    (rank / 2) as NumNodes
}

fn pow_mod(mut base: u64, mut exp: u64) -> u64 {
    let mut result = 1;
    base %= PRIME;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % PRIME;
        }
        base = base * base % PRIME;
        exp >>= 1;
    }
    result
}

/// Searches all simple alternating paths starting at exposed nodes for one that ends in another
/// exposed node. Exponential; only meant for tiny graphs.
/// ** Panics if `n > 32` **
pub fn has_augmenting_path<G: AdjacencyList>(graph: &G, mates: &Mates) -> bool {
    assert!(graph.number_of_nodes() <= 32);

    fn extend<G: AdjacencyList>(graph: &G, mates: &Mates, x: Node, visited: u32) -> bool {
        for y in graph.neighbors_of(x) {
            if visited & (1 << y) != 0 || mates.partner_of(x) == Some(y) {
                continue;
            }
            match mates.partner_of(y) {
                None => return true,
                Some(z) if visited & (1 << z) == 0 => {
                    if extend(graph, mates, z, visited | (1 << y) | (1 << z)) {
                        return true;
                    }
                }
                Some(_) => {}
            }
        }
        false
    }

    mates
        .unmatched()
        .any(|root| extend(graph, mates, root, 1 << root))
}

/// Asserts that `mates` is a valid matching of `graph` and that no larger matching exists
pub fn assert_matching_is_maximum<G: AdjacencyList>(graph: &G, mates: &Mates) {
    assert_eq!(mates.verify(graph), Ok(()));

    let expected = if graph.number_of_nodes() <= BRUTE_FORCE_LIMIT {
        brute_force_maximum_matching_size(graph)
    } else {
        tutte_matrix_matching_size(graph, 0x5eed)
    };
    assert_eq!(mates.cardinality(), expected);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_solvers_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [0 as NumNodes, 1, 4, 9, 14] {
            for _ in 0..10 {
                let n_edges = rng.random_range(0..=n * 2);
                let mut builder = GraphBuilder::new(n);
                for _ in 0..n_edges {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    if u != v {
                        builder.add_edge(u, v);
                    }
                }
                let graph = builder.build().unwrap();

                assert_eq!(
                    brute_force_maximum_matching_size(&graph),
                    tutte_matrix_matching_size(&graph, 1)
                );
            }
        }
    }

    #[test]
    fn known_sizes() {
        let star = AdjArrayUndir::try_from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(brute_force_maximum_matching_size(&star), 1);
        assert_eq!(tutte_matrix_matching_size(&star, 2), 1);

        let path = AdjArrayUndir::try_from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(brute_force_maximum_matching_size(&path), 2);
        assert_eq!(tutte_matrix_matching_size(&path, 2), 2);
    }

    #[test]
    fn augmenting_paths() {
        let path = AdjArrayUndir::try_from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();

        let middle = Mates::from_raw(raw_mates(&[None, Some(2), Some(1), None]));
        assert!(has_augmenting_path(&path, &middle));

        let perfect = Mates::from_raw(raw_mates(&[Some(1), Some(0), Some(3), Some(2)]));
        assert!(!has_augmenting_path(&path, &perfect));

        // a triangle with a matched edge has no augmenting path
        let triangle = AdjArrayUndir::try_from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
        let one_edge = Mates::from_raw(raw_mates(&[Some(1), Some(0), None]));
        assert!(!has_augmenting_path(&triangle, &one_edge));
    }
}
