//! Attribute sampler
//!
//! Produces normally distributed integers from a uniform source using a
//! precomputed inverse-CDF table instead of transcendental functions.
//!
//! The table holds the cumulative distribution of the positive half of a
//! normal curve with a standard deviation of [`NORMAL_TABLE_SD`] entries,
//! scaled so that the last entry is [`NORMAL_TABLE_MAX`]. A draw is mapped to
//! the smallest index whose entry is at least the draw; that index is the
//! magnitude of the offset.

use crate::rng::GameRng;

/// Number of entries in [`NORMAL_TABLE`]
pub const NORMAL_TABLE_SIZE: usize = 256;

/// Standard deviation of the table, in table entries
pub const NORMAL_TABLE_SD: i32 = 64;

/// Half-Gaussian partial sums, monotonically non-decreasing
pub static NORMAL_TABLE: [u16; NORMAL_TABLE_SIZE] = [
    206, 613, 1022, 1430, 1838, 2245, 2652, 3058,
    3463, 3867, 4271, 4673, 5075, 5475, 5874, 6271,
    6667, 7061, 7454, 7845, 8234, 8621, 9006, 9389,
    9770, 10148, 10524, 10898, 11269, 11638, 12004, 12367,
    12727, 13085, 13440, 13792, 14140, 14486, 14828, 15168,
    15504, 15836, 16166, 16492, 16814, 17133, 17449, 17761,
    18069, 18374, 18675, 18972, 19266, 19556, 19842, 20124,
    20403, 20678, 20949, 21216, 21479, 21738, 21994, 22245,
    22493, 22737, 22977, 23213, 23446, 23674, 23899, 24120,
    24336, 24550, 24759, 24965, 25166, 25365, 25559, 25750,
    25937, 26120, 26300, 26476, 26649, 26818, 26983, 27146,
    27304, 27460, 27612, 27760, 27906, 28048, 28187, 28323,
    28455, 28585, 28711, 28835, 28955, 29073, 29188, 29299,
    29409, 29515, 29619, 29720, 29818, 29914, 30007, 30098,
    30186, 30272, 30356, 30437, 30516, 30593, 30668, 30740,
    30810, 30879, 30945, 31010, 31072, 31133, 31192, 31249,
    31304, 31358, 31410, 31460, 31509, 31556, 31601, 31646,
    31688, 31730, 31770, 31808, 31846, 31882, 31917, 31950,
    31983, 32014, 32044, 32074, 32102, 32129, 32155, 32180,
    32205, 32228, 32251, 32273, 32294, 32314, 32333, 32352,
    32370, 32387, 32404, 32420, 32435, 32450, 32464, 32477,
    32490, 32503, 32515, 32526, 32537, 32548, 32558, 32568,
    32577, 32586, 32595, 32603, 32611, 32618, 32625, 32632,
    32639, 32645, 32651, 32657, 32662, 32667, 32672, 32677,
    32682, 32686, 32690, 32694, 32698, 32702, 32705, 32708,
    32711, 32714, 32717, 32720, 32722, 32725, 32727, 32729,
    32731, 32733, 32735, 32737, 32739, 32740, 32742, 32743,
    32745, 32746, 32747, 32748, 32749, 32750, 32751, 32752,
    32753, 32754, 32755, 32756, 32757, 32757, 32758, 32758,
    32759, 32760, 32760, 32761, 32761, 32761, 32762, 32762,
    32763, 32763, 32763, 32764, 32764, 32764, 32764, 32765,
    32765, 32765, 32765, 32766, 32766, 32766, 32766, 32766,
];

/// Largest partial sum in [`NORMAL_TABLE`]
pub const NORMAL_TABLE_MAX: u32 = NORMAL_TABLE[NORMAL_TABLE_SIZE - 1] as u32;

/// Draws in `0..HALF_RANGE` map to non-negative offsets, the rest mirror them.
const HALF_RANGE: u32 = NORMAL_TABLE_MAX + 1;

/// Exclusive upper bound for [`sample_normal`] draws, covering both signs
pub const NORMAL_DRAW_RANGE: u32 = 2 * HALF_RANGE;

/// Upper bound of the legacy draw used by [`randnor`]; hitting it selects the tail.
const TAIL_DRAW: u32 = 32767;

/// Smallest table index whose partial sum is at least `draw`.
///
/// `draw` must not exceed [`NORMAL_TABLE_MAX`]; larger draws are clamped to
/// the last index.
pub fn normal_magnitude(draw: u32) -> usize {
    debug_assert!(draw <= NORMAL_TABLE_MAX, "draw {draw} outside normal table");
    NORMAL_TABLE
        .partition_point(|&entry| u32::from(entry) < draw)
        .min(NORMAL_TABLE_SIZE - 1)
}

/// Map a uniform draw in `0..NORMAL_DRAW_RANGE` to a signed offset in table
/// units (one standard deviation is [`NORMAL_TABLE_SD`]).
///
/// The lower half of the range yields non-negative offsets and the upper
/// half mirrors it, so `+m` and `-m` are produced by equally many draws.
/// Callers must scale their source to the range; out-of-range draws are a
/// contract violation and are clamped.
pub fn sample_normal(draw: u32) -> i32 {
    debug_assert!(draw < NORMAL_DRAW_RANGE, "draw {draw} outside sampler range");
    let draw = draw.min(NORMAL_DRAW_RANGE - 1);
    if draw < HALF_RANGE {
        normal_magnitude(draw) as i32
    } else {
        -(normal_magnitude(draw - HALF_RANGE) as i32)
    }
}

/// Draw from a normal distribution with the given mean and standard deviation.
///
/// One draw in 32767 lands in the tail and yields an offset between four
/// and five standard deviations. Every other draw goes through the table and
/// is rescaled from table units to `std_dev`, rounding half up. The sign is
/// an independent coin flip.
pub fn randnor(rng: &mut GameRng, mean: i32, std_dev: i32) -> i32 {
    let std_dev = std_dev.max(0);
    let draw = rng.rnd(TAIL_DRAW);

    let mut offset = if draw == TAIL_DRAW {
        4 * std_dev + rng.rnd(std_dev as u32) as i32
    } else {
        let index = normal_magnitude(draw) as i32;
        (std_dev * index + NORMAL_TABLE_SD / 2) / NORMAL_TABLE_SD
    };

    if rng.rnd(2) == 1 {
        offset = -offset;
    }
    tracing::trace!(mean, std_dev, draw, offset, "randnor");
    mean + offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_monotonic() {
        assert!(NORMAL_TABLE.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(NORMAL_TABLE_MAX, 32766);
        assert_eq!(NORMAL_DRAW_RANGE, 65534);
    }

    #[test]
    fn test_magnitude_edges() {
        assert_eq!(normal_magnitude(0), 0);
        assert_eq!(normal_magnitude(206), 0);
        assert_eq!(normal_magnitude(207), 1);
        assert_eq!(normal_magnitude(613), 1);
        assert_eq!(normal_magnitude(32766), 251);
    }

    #[test]
    fn test_median_near_two_thirds_sd() {
        // Half of all draws fall below the median of the half-normal,
        // about 0.674 standard deviations.
        assert_eq!(normal_magnitude(16384), 43);
    }

    #[test]
    fn test_sample_normal_sign_halves() {
        assert_eq!(sample_normal(0), 0);
        assert_eq!(sample_normal(207), 1);
        assert_eq!(sample_normal(HALF_RANGE + 207), -1);
        assert_eq!(sample_normal(NORMAL_DRAW_RANGE - 1), -251);
    }

    #[test]
    fn test_sample_normal_mean_and_symmetry() {
        let mut rng = GameRng::new(42);
        let draws = 200_000;
        let mut sum: i64 = 0;
        let mut positive = [0u32; NORMAL_TABLE_SIZE];
        let mut negative = [0u32; NORMAL_TABLE_SIZE];

        for _ in 0..draws {
            let value = sample_normal(rng.rn2(NORMAL_DRAW_RANGE));
            sum += i64::from(value);
            if value > 0 {
                positive[value as usize] += 1;
            } else if value < 0 {
                negative[(-value) as usize] += 1;
            }
        }

        let mean = sum as f64 / draws as f64;
        assert!(mean.abs() < 1.0, "mean {mean} too far from zero");

        // The commonest magnitudes carry enough mass to compare directly.
        for m in 1..=32 {
            let (p, n) = (f64::from(positive[m]), f64::from(negative[m]));
            let ratio = p / n;
            assert!((0.8..1.25).contains(&ratio), "magnitude {m}: +{p} vs -{n}");
        }
    }

    #[test]
    fn test_randnor_statistics() {
        let mut rng = GameRng::new(7);
        let draws = 100_000;
        let mut sum = 0f64;
        let mut sum_sq = 0f64;
        for _ in 0..draws {
            let value = f64::from(randnor(&mut rng, 0, 64));
            sum += value;
            sum_sq += value * value;
        }
        let mean = sum / draws as f64;
        let sd = (sum_sq / draws as f64 - mean * mean).sqrt();
        assert!(mean.abs() < 1.5, "mean {mean}");
        assert!((60.0..68.0).contains(&sd), "sd {sd}");
    }

    #[test]
    fn test_randnor_zero_sd_returns_mean() {
        let mut rng = GameRng::new(1);
        for _ in 0..100 {
            assert_eq!(randnor(&mut rng, 12, 0), 12);
        }
    }
}
