/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

use rand::{thread_rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates a random generator from `seed`, or from a fresh random seed if none is given.
///
/// Returns the generator and the seed actually used, so that a run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().next_u64());
    (ChaCha8Rng::seed_from_u64(seed), seed)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use crate::seeded_rng;

    #[test]
    fn same_seed_same_sequence() {
        let (mut a, seed_a) = seeded_rng(Some(42));
        let (mut b, seed_b) = seeded_rng(Some(42));
        assert_eq!(seed_a, 42);
        assert_eq!(seed_a, seed_b);
        for _ in 0..10 {
            assert_eq!(a.gen::<u32>(), b.gen::<u32>());
        }
    }

    #[test]
    fn fresh_seed_is_reported() {
        let (mut rng, seed) = seeded_rng(None);
        let (mut replay, _) = seeded_rng(Some(seed));
        assert_eq!(rng.gen::<u64>(), replay.gen::<u64>());
    }
}
