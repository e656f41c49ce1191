//! Blows-per-round lookup
//!
//! Stats use the legacy 3..=118 scale where 18/xx is stored as 18 + xx.
//! Weights are in tenths of a pound.

use serde::{Deserialize, Serialize};

/// Number of strength buckets (rows of [`BLOWS_TABLE`])
pub const STR_BUCKETS: usize = 7;

/// Number of dexterity buckets (columns of [`BLOWS_TABLE`])
pub const DEX_BUCKETS: usize = 6;

/// Blows per round, indexed by `[strength bucket][dexterity bucket]`.
///
/// Non-decreasing along both axes.
pub static BLOWS_TABLE: [[u8; DEX_BUCKETS]; STR_BUCKETS] = [
    // DEX:  <10 <19 <68 <108 <118 118+
    [1, 1, 1, 1, 1, 1], // STR*10/W < 2
    [1, 1, 1, 1, 2, 2], // < 3
    [1, 1, 1, 2, 2, 3], // < 4
    [1, 1, 2, 2, 3, 3], // < 5
    [1, 2, 2, 3, 3, 4], // < 7
    [1, 2, 2, 3, 4, 4], // < 9
    [2, 2, 3, 3, 4, 4], // 9+
];

/// Look up blows per round for pre-bucketed stats.
///
/// Buckets must already be clamped to `0..STR_BUCKETS` and `0..DEX_BUCKETS`;
/// this is a precondition, not a runtime check.
#[inline]
pub fn blows_per_round(str_bucket: usize, dex_bucket: usize) -> u8 {
    BLOWS_TABLE[str_bucket][dex_bucket]
}

/// Bucket the strength-to-weight ratio of a wielded weapon.
pub fn strength_bucket(strength: u8, weight: u16) -> usize {
    let adjusted = u32::from(strength) * 10 / u32::from(weight.max(1));
    match adjusted {
        0..=1 => 0,
        2 => 1,
        3 => 2,
        4 => 3,
        5..=6 => 4,
        7..=8 => 5,
        _ => 6,
    }
}

/// Bucket a dexterity score.
pub fn dexterity_bucket(dexterity: u8) -> usize {
    match dexterity {
        0..=9 => 0,
        10..=18 => 1,
        19..=67 => 2,
        68..=107 => 3,
        108..=117 => 4,
        _ => 5,
    }
}

/// Result of resolving a weapon against the wielder's stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttackProfile {
    /// Blows per round
    pub blows: u8,
    /// To-hit adjustment for a weapon too heavy to wield well (zero or negative)
    pub weight_to_hit: i32,
}

/// Resolve blows per round for a weapon of `weight` in the hands of a
/// character with the given strength and dexterity.
///
/// A weapon heavier than fifteen times the strength score is swung once per
/// round at a to-hit penalty equal to the excess weight.
pub fn attack_blows(strength: u8, dexterity: u8, weight: u16) -> AttackProfile {
    let capacity = i32::from(strength) * 15;
    let weight_i = i32::from(weight);
    if capacity < weight_i {
        return AttackProfile {
            blows: 1,
            weight_to_hit: capacity - weight_i,
        };
    }

    AttackProfile {
        blows: blows_per_round(strength_bucket(strength, weight), dexterity_bucket(dexterity)),
        weight_to_hit: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_corners() {
        assert_eq!(blows_per_round(0, 0), 1);
        assert_eq!(blows_per_round(6, 5), 4);
        assert_eq!(blows_per_round(6, 0), 2);
        assert_eq!(blows_per_round(2, 5), 3);
    }

    #[test]
    fn test_table_range() {
        for row in BLOWS_TABLE.iter() {
            for &blows in row {
                assert!((1..=4).contains(&blows));
            }
        }
    }

    #[test]
    fn test_monotonic_both_axes() {
        for s in 0..STR_BUCKETS {
            for d in 0..DEX_BUCKETS {
                if s + 1 < STR_BUCKETS {
                    assert!(blows_per_round(s, d) <= blows_per_round(s + 1, d));
                }
                if d + 1 < DEX_BUCKETS {
                    assert!(blows_per_round(s, d) <= blows_per_round(s, d + 1));
                }
            }
        }
    }

    #[test]
    fn test_strength_bucket_breakpoints() {
        // Dagger weighs 12; strength 18 gives 180 / 12 = 15.
        assert_eq!(strength_bucket(18, 12), 6);
        assert_eq!(strength_bucket(10, 60), 0);
        assert_eq!(strength_bucket(12, 60), 1);
        assert_eq!(strength_bucket(24, 60), 3);
        assert_eq!(strength_bucket(30, 60), 4);
        assert_eq!(strength_bucket(42, 60), 5);
        assert_eq!(strength_bucket(54, 60), 6);
    }

    #[test]
    fn test_zero_weight_does_not_divide_by_zero() {
        assert_eq!(strength_bucket(3, 0), 6);
    }

    #[test]
    fn test_dexterity_bucket_breakpoints() {
        assert_eq!(dexterity_bucket(3), 0);
        assert_eq!(dexterity_bucket(9), 0);
        assert_eq!(dexterity_bucket(10), 1);
        assert_eq!(dexterity_bucket(18), 1);
        assert_eq!(dexterity_bucket(19), 2);
        assert_eq!(dexterity_bucket(67), 2);
        assert_eq!(dexterity_bucket(68), 3);
        assert_eq!(dexterity_bucket(108), 4);
        assert_eq!(dexterity_bucket(118), 5);
    }

    #[test]
    fn test_heavy_weapon_penalty() {
        // Strength 10 can swing 150 without penalty.
        let profile = attack_blows(10, 18, 280);
        assert_eq!(profile.blows, 1);
        assert_eq!(profile.weight_to_hit, -130);
    }

    #[test]
    fn test_light_weapon_profile() {
        let profile = attack_blows(18, 68, 12);
        assert_eq!(profile.weight_to_hit, 0);
        assert_eq!(profile.blows, 3);
    }
}
