use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// A deterministic generator for `Some(seed)`, an entropy-seeded one otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Using fixed random seed {}.", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_seed_gives_same_sequence() {
        let a: Vec<u32> = rng_from_seed(Some(42)).sample_iter(rand::distributions::Standard).take(8).collect();
        let b: Vec<u32> = rng_from_seed(Some(42)).sample_iter(rand::distributions::Standard).take(8).collect();
        assert_eq!(a, b);
    }
}
