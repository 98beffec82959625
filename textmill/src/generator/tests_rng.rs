#[cfg(test)]
mod tests {
    use crate::generator::rng::SampleRng;

    #[test]
    fn test_derive_is_stable_per_index() {
        let rng = SampleRng::new(42);

        assert_eq!(rng.derive(0), rng.derive(0));
        assert_ne!(rng.derive(0), rng.derive(1));
    }

    #[test]
    fn test_next_seed_walks_the_call_indices() {
        let mut rng = SampleRng::new(7);
        let first = rng.next_seed();
        let second = rng.next_seed();

        assert_eq!(first, rng.derive(0));
        assert_eq!(second, rng.derive(1));
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_base_seed_gives_same_sequence() {
        let mut left = SampleRng::new(123);
        let mut right = SampleRng::new(123);
        for _ in 0..8 {
            assert_eq!(left.next_seed(), right.next_seed());
        }
    }

    #[test]
    fn test_different_base_seeds_diverge() {
        let mut left = SampleRng::new(1);
        let mut right = SampleRng::new(2);

        assert_ne!(left.next_seed(), right.next_seed());
    }
}
