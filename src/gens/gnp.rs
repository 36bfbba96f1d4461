use rand::Rng;

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible undirected edge `{u, v}` with `u != v` with
/// probability `p` independent from each other.
///
/// Edges are emitted normalized (`u < v`) in lexicographic order, so the output can be used
/// for simple undirected graphs without further filtering.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probility of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                // every node has `n - 1` potential neighbors
                let p = if self.n > 1 {
                    d / (self.n - 1) as f64
                } else {
                    0.0
                };
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n-1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Creates a streaming generator over random `G(n,p)` edges
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let n = self.n;
        let p = self.probability();

        (0..n)
            .flat_map(move |u| (u + 1..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn edges_are_simple() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        let edges = Gnp::new().nodes(30).prob(0.2).generate(rng);

        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(edges.iter().all(|&Edge(u, v)| u < 30 && v < 30));
    }

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        assert!(Gnp::new().nodes(10).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(10).prob(1.0).generate(rng).len(), 45);
        assert!(Gnp::new().nodes(0).prob(1.0).generate(rng).is_empty());
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 2000;
        let m = Gnp::new().nodes(n).avg_deg(4.0).stream(rng).count();

        let avg = 2.0 * m as f64 / n as f64;
        assert!((3.5..4.5).contains(&avg), "average degree {avg}");
    }

    #[test]
    #[should_panic]
    fn invalid_probability() {
        let _ = Gnp::new().nodes(3).prob(1.5);
    }
}
