//! Fisher-Yates shuffle and random selection helpers.
//!
//! Every helper comes in two flavours: one drawing from the thread-local RNG and a
//! `*_with` variant taking an explicit RNG so callers (and tests) can seed it.

use rand::Rng;

/// Return a uniformly shuffled copy of `items`. The input is left untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::rng())
}

pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();

    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }

    shuffled
}

/// Pick one element uniformly. `None` when `items` is empty.
pub fn pick_one<T>(items: &[T]) -> Option<&T> {
    pick_one_with(items, &mut rand::rng())
}

pub fn pick_one_with<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}

/// Pick up to `count` distinct elements (without replacement)
pub fn pick_many<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    pick_many_with(items, count, &mut rand::rng())
}

pub fn pick_many_with<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut shuffled = shuffle_with(items, rng);
    shuffled.truncate(count.min(items.len()));
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(mut items: Vec<u32>) -> Vec<u32> {
        items.sort_unstable();
        items
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let items = vec![1, 2, 3, 4, 5];
        let _ = shuffle(&items);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_small_inputs() {
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[42]), vec![42]);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let items: Vec<u32> = (0..20).collect();
        let a = shuffle_with(&items, &mut StdRng::seed_from_u64(7));
        let b = shuffle_with(&items, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_position_distribution_is_roughly_uniform() {
        let items = [0usize, 1, 2, 3];
        let trials = 40_000;
        let mut counts = [[0u32; 4]; 4];
        let mut rng = StdRng::seed_from_u64(1234);

        for _ in 0..trials {
            for (position, value) in shuffle_with(&items, &mut rng).into_iter().enumerate() {
                counts[position][value] += 1;
            }
        }

        // Expected 10_000 per cell; allow 5% slack
        let expected = trials as f64 / items.len() as f64;
        for row in counts {
            for count in row {
                let deviation = (count as f64 - expected).abs() / expected;
                assert!(deviation < 0.05, "count {} deviates {:.3}", count, deviation);
            }
        }
    }

    #[test]
    fn test_pick_one() {
        let empty: [u32; 0] = [];
        assert_eq!(pick_one(&empty), None);

        let items = ["a", "b", "c"];
        let picked = pick_one(&items).unwrap();
        assert!(items.contains(picked));
    }

    #[test]
    fn test_pick_many_caps_at_length() {
        let items = vec![1, 2, 3];
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(pick_many_with(&items, 2, &mut rng).len(), 2);
        assert_eq!(sorted(pick_many_with(&items, 10, &mut rng)), vec![1, 2, 3]);
        assert!(pick_many(&items, 0).is_empty());
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(items in proptest::collection::vec(any::<u32>(), 0..64), seed in any::<u64>()) {
            let shuffled = shuffle_with(&items, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(sorted(shuffled), sorted(items.clone()));
        }

        #[test]
        fn pick_many_has_no_repeats(count in 0usize..20, seed in any::<u64>()) {
            let items: Vec<u32> = (0..10).collect();
            let picked = pick_many_with(&items, count, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(picked.len(), count.min(items.len()));
            let mut deduped = sorted(picked.clone());
            deduped.dedup();
            prop_assert_eq!(deduped.len(), picked.len());
        }
    }
}
