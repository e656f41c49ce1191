//! Property-based tests for the blows table and the normal sampler
//!
//! - Blows never decrease as strength or dexterity buckets grow
//! - Attack resolution never yields zero blows
//! - The table sampler is symmetric and bounded

use delve_core::GameRng;
use delve_core::combat::{DEX_BUCKETS, STR_BUCKETS, attack_blows, blows_per_round};
use delve_core::sampler::{
    NORMAL_DRAW_RANGE, NORMAL_TABLE_MAX, NORMAL_TABLE_SIZE, normal_magnitude, randnor,
    sample_normal,
};
use proptest::prelude::*;

proptest! {
    /// Property: blows are non-decreasing along both axes
    #[test]
    fn blows_are_monotonic(s in 0..STR_BUCKETS, d in 0..DEX_BUCKETS) {
        let here = blows_per_round(s, d);
        if s + 1 < STR_BUCKETS {
            prop_assert!(blows_per_round(s + 1, d) >= here);
        }
        if d + 1 < DEX_BUCKETS {
            prop_assert!(blows_per_round(s, d + 1) >= here);
        }
    }

    /// Property: stronger or nimbler wielders never lose blows
    #[test]
    fn attack_blows_monotonic_in_stats(
        strength in 3u8..118,
        dexterity in 3u8..118,
        weight in 1u16..600,
    ) {
        let base = attack_blows(strength, dexterity, weight);
        prop_assert!(base.blows >= 1);
        prop_assert!(base.weight_to_hit <= 0);
        prop_assert!(attack_blows(strength + 1, dexterity, weight).blows >= base.blows);
        prop_assert!(attack_blows(strength, dexterity + 1, weight).blows >= base.blows);
    }

    /// Property: mirrored draws give opposite offsets
    #[test]
    fn sample_normal_is_symmetric(draw in 0..=NORMAL_TABLE_MAX) {
        let positive = sample_normal(draw);
        let negative = sample_normal(draw + NORMAL_TABLE_MAX + 1);
        prop_assert!(positive >= 0);
        prop_assert_eq!(positive, -negative);
        prop_assert!(draw + NORMAL_TABLE_MAX + 1 < NORMAL_DRAW_RANGE);
    }

    /// Property: table lookups stay inside the table and are monotonic
    #[test]
    fn normal_magnitude_is_monotonic(draw in 0..NORMAL_TABLE_MAX) {
        let index = normal_magnitude(draw);
        prop_assert!(index < NORMAL_TABLE_SIZE);
        prop_assert!(normal_magnitude(draw + 1) >= index);
    }

    /// Property: randnor stays within five standard deviations of the mean
    #[test]
    fn randnor_is_bounded(seed in any::<u64>(), mean in -1000i32..1000, sd in 0i32..200) {
        let mut rng = GameRng::new(seed);
        for _ in 0..32 {
            let value = randnor(&mut rng, mean, sd);
            prop_assert!((value - mean).abs() <= 5 * sd);
        }
    }
}
