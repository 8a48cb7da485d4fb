//! Points-to-level progression — threshold table and level queries.
//!
//! Levels 1..=20 are delimited by a cumulative point-threshold table built
//! from three fixed constants (max level, max points, growth factor). Gaps
//! between consecutive thresholds grow roughly geometrically while staying
//! multiples of 10, and the table always tops out at exactly
//! [`ProgressionConfig::max_points`].
//!
//! ```
//! use lanvoyage_logic::progression::{level_for, level_thresholds, ProgressionConfig};
//!
//! let thresholds = level_thresholds(&ProgressionConfig::default());
//! assert_eq!(thresholds.len(), 20);
//! assert_eq!(level_for(0, &thresholds), 1);
//! assert_eq!(level_for(10_000, &thresholds), 20);
//! ```
//!
//! The table depends only on the config, never on the queried point total,
//! so callers that query repeatedly build it once and pass the slice to
//! each query. Every function here is total over its input domain: no
//! error paths, no I/O, no shared state.

use serde::{Deserialize, Serialize};

/// Fixed progression constants.
///
/// Not runtime-configurable in the app, but exposed as named parameters so
/// smaller tables can be built in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Number of levels (and table entries).
    pub max_level: u32,
    /// Point total at which the final level is reached.
    pub max_points: u32,
    /// Geometric ratio controlling how quickly level gaps grow.
    pub growth_factor: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_level: 20,
            max_points: 10_000,
            growth_factor: 1.22,
        }
    }
}

/// Point band of the current level: previous and next cumulative threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelBounds {
    /// Threshold of the previous level (0 at level 1).
    pub prev: u32,
    /// Threshold that completes the current level. Equals `prev` only at
    /// max-level saturation.
    pub next: u32,
}

/// Everything the profile and home screens read in one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub points: u32,
    pub level: u32,
    pub points_to_next: u32,
    pub progress_percent: f64,
    pub bounds: LevelBounds,
}

/// Build the cumulative level-threshold table.
///
/// Increments between thresholds follow normalized geometric weights,
/// rounded to the nearest 10 with a floor of 10, then patched to be
/// non-decreasing and to sum to exactly `max_points`:
///
/// 1. weights `w[i] = growth_factor^i`
/// 2. `increment[i] = round(w[i] / sum(w) * max_points / 10) * 10`, min 10
/// 3. non-decreasing fix-up (left to right)
/// 4. rounding drift folded into the last increment (floored at 10)
/// 5. cumulative sums, last entry forced to `max_points`
///
/// The fix-up in step 3 can leave equal adjacent increments, so the table
/// is non-decreasing rather than strictly increasing; the level queries
/// treat a plateau as an empty band and skip it.
pub fn level_thresholds(config: &ProgressionConfig) -> Vec<u32> {
    let levels = config.max_level as usize;
    let max_points = i64::from(config.max_points);

    let weights: Vec<f64> = (0..levels)
        .map(|i| config.growth_factor.powi(i as i32))
        .collect();
    let sum_w: f64 = weights.iter().sum();

    let mut increments: Vec<i64> = weights
        .iter()
        .map(|w| {
            let v = ((w / sum_w) * max_points as f64 / 10.0).round() as i64 * 10;
            v.max(10)
        })
        .collect();

    for i in 1..increments.len() {
        if increments[i] < increments[i - 1] {
            increments[i] = increments[i - 1];
        }
    }

    let total: i64 = increments.iter().sum();
    let diff = max_points - total;
    if diff != 0 {
        if let Some(last) = increments.last_mut() {
            *last = (*last + diff).max(10);
        }
    }

    let mut thresholds: Vec<i64> = Vec::with_capacity(levels);
    let mut sum = 0i64;
    for inc in &increments {
        sum += inc;
        thresholds.push(sum);
    }

    // Rounding can still leave the top short or over; pin it.
    if let Some(last) = thresholds.last_mut() {
        *last = max_points;
    }

    thresholds.into_iter().map(|t| t.max(0) as u32).collect()
}

/// Current level for a point total: 1-based index of the first threshold
/// strictly greater than `points`, or the max level once `points` reaches
/// the last threshold.
pub fn level_for(points: u32, thresholds: &[u32]) -> u32 {
    for (index, &threshold) in thresholds.iter().enumerate() {
        if points < threshold {
            return index as u32 + 1;
        }
    }
    thresholds.len().max(1) as u32
}

/// Points still needed to reach the next level. 0 at max level.
pub fn points_to_next_level(points: u32, thresholds: &[u32]) -> u32 {
    for &threshold in thresholds {
        if points < threshold {
            return threshold - points;
        }
    }
    0
}

/// Progress through the current level band as a percentage in `[0, 100]`.
/// Returns exactly 100.0 at max level.
pub fn level_progress_percent(points: u32, thresholds: &[u32]) -> f64 {
    let mut prev = 0u32;
    for &threshold in thresholds {
        if points < threshold {
            // prev <= points here, so the subtraction cannot wrap.
            let span = (threshold - prev).max(1);
            let progress = f64::from(points - prev) / f64::from(span) * 100.0;
            return progress.clamp(0.0, 100.0);
        }
        prev = threshold;
    }
    100.0
}

/// Previous/next thresholds bounding the current level band. At max level
/// both bounds equal the last threshold.
pub fn current_level_bounds(points: u32, thresholds: &[u32]) -> LevelBounds {
    let mut prev = 0u32;
    for &threshold in thresholds {
        if points < threshold {
            return LevelBounds {
                prev,
                next: threshold,
            };
        }
        prev = threshold;
    }
    let last = thresholds.last().copied().unwrap_or(0);
    LevelBounds {
        prev: last,
        next: last,
    }
}

/// All four level queries bundled for display.
pub fn progress_snapshot(points: u32, thresholds: &[u32]) -> ProgressSnapshot {
    ProgressSnapshot {
        points,
        level: level_for(points, thresholds),
        points_to_next: points_to_next_level(points, thresholds),
        progress_percent: level_progress_percent(points, thresholds),
        bounds: current_level_bounds(points, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Default table, worked out by hand from the algorithm. Rounding
    /// happens to land the raw increments on exactly 10,000, so step 4
    /// is a no-op for these constants.
    const DEFAULT_TABLE: [u32; 20] = [
        40, 90, 150, 230, 320, 430, 570, 740, 950, 1200, 1510, 1880, 2340, 2900, 3580, 4410, 5420,
        6650, 8160, 10000,
    ];

    fn default_thresholds() -> Vec<u32> {
        level_thresholds(&ProgressionConfig::default())
    }

    #[test]
    fn default_table_exact() {
        assert_eq!(default_thresholds(), DEFAULT_TABLE);
    }

    #[test]
    fn table_invariants() {
        let t = default_thresholds();
        assert_eq!(t.len(), 20);
        assert_eq!(*t.last().unwrap(), 10_000);
        for (i, &v) in t.iter().enumerate() {
            assert!(v > 0);
            assert_eq!(v % 10, 0, "threshold {} not a multiple of 10", v);
            if i > 0 {
                assert!(v >= t[i - 1], "table decreases at index {}", i);
            }
        }
    }

    #[test]
    fn table_independent_of_points_queried() {
        // Purity: two builds from the same config are identical.
        let config = ProgressionConfig::default();
        assert_eq!(level_thresholds(&config), level_thresholds(&config));
    }

    #[test]
    fn small_custom_table() {
        let config = ProgressionConfig {
            max_level: 5,
            max_points: 100,
            growth_factor: 1.22,
        };
        let t = level_thresholds(&config);
        assert_eq!(t.len(), 5);
        assert_eq!(*t.last().unwrap(), 100);
        for w in t.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn shrinking_weights_trigger_fixup() {
        // growth < 1 makes raw increments decrease (110,110,110,100,...,90
        // here); the fix-up flattens them to 110 each, and the resulting
        // overshoot is folded into the last increment, floored at 10.
        let config = ProgressionConfig {
            max_level: 10,
            max_points: 1_000,
            growth_factor: 0.97,
        };
        let t = level_thresholds(&config);
        assert_eq!(
            t,
            [110, 220, 330, 440, 550, 660, 770, 880, 990, 1000]
        );
    }

    #[test]
    fn flat_growth_is_uniform() {
        let config = ProgressionConfig {
            max_level: 20,
            max_points: 10_000,
            growth_factor: 1.0,
        };
        let t = level_thresholds(&config);
        assert_eq!(t[0], 500);
        assert_eq!(t[19], 10_000);
        for (i, &v) in t.iter().enumerate() {
            assert_eq!(v, 500 * (i as u32 + 1));
        }
    }

    #[test]
    fn level_at_zero_is_one() {
        let t = default_thresholds();
        assert_eq!(level_for(0, &t), 1);
        assert_eq!(level_progress_percent(0, &t), 0.0);
        assert_eq!(current_level_bounds(0, &t).prev, 0);
    }

    #[test]
    fn level_at_max_is_twenty() {
        let t = default_thresholds();
        assert_eq!(level_for(10_000, &t), 20);
        assert_eq!(points_to_next_level(10_000, &t), 0);
        assert_eq!(level_progress_percent(10_000, &t), 100.0);
        assert_eq!(
            current_level_bounds(10_000, &t),
            LevelBounds {
                prev: 10_000,
                next: 10_000
            }
        );
    }

    #[test]
    fn far_beyond_max_saturates() {
        let t = default_thresholds();
        assert_eq!(level_for(1_000_000, &t), 20);
        assert_eq!(points_to_next_level(1_000_000, &t), 0);
        assert_eq!(level_progress_percent(1_000_000, &t), 100.0);
    }

    #[test]
    fn level_in_range_and_monotone() {
        let t = default_thresholds();
        let mut last_level = 0;
        for points in (0..=10_000).step_by(7) {
            let level = level_for(points, &t);
            assert!((1..=20).contains(&level));
            assert!(level >= last_level, "level dropped at {} points", points);
            last_level = level;
        }
    }

    #[test]
    fn crossing_a_threshold_bumps_the_level() {
        let t = default_thresholds();
        // 1200 is t[9]; 1199 sits inside band 10, 1200 starts band 11.
        assert_eq!(level_for(1_199, &t), 10);
        assert_eq!(level_for(1_200, &t), 11);
        assert_eq!(points_to_next_level(1_199, &t), 1);
    }

    #[test]
    fn mid_band_progress_strictly_inside() {
        let t = default_thresholds();
        // t[8] = 950 < 1000 < t[9] = 1200, so 1000 points is level 10.
        assert_eq!(level_for(1_000, &t), 10);
        let pct = level_progress_percent(1_000, &t);
        assert!(pct > 0.0 && pct < 100.0);
        assert!((pct - 20.0).abs() < 1e-9); // (1000-950)/(1200-950) = 20%
        let bounds = current_level_bounds(1_000, &t);
        assert_eq!(bounds, LevelBounds { prev: 950, next: 1200 });
    }

    #[test]
    fn bounds_bracket_points_below_max() {
        let t = default_thresholds();
        for points in (0..10_000).step_by(13) {
            let bounds = current_level_bounds(points, &t);
            assert!(bounds.prev <= points);
            assert!(bounds.next > points);
        }
    }

    #[test]
    fn progress_in_range_everywhere() {
        let t = default_thresholds();
        for points in (0..=11_000).step_by(11) {
            let pct = level_progress_percent(points, &t);
            assert!((0.0..=100.0).contains(&pct), "pct {} at {}", pct, points);
        }
    }

    #[test]
    fn points_to_next_matches_bounds() {
        let t = default_thresholds();
        for points in (0..10_000).step_by(17) {
            let bounds = current_level_bounds(points, &t);
            assert_eq!(points_to_next_level(points, &t), bounds.next - points);
        }
    }

    #[test]
    fn plateau_thresholds_skip_empty_bands() {
        // A plateau at 10 means band 2 is empty: 10 points jumps straight
        // past it to the first threshold above.
        let t = [10, 10, 30];
        assert_eq!(level_for(5, &t), 1);
        assert_eq!(level_for(10, &t), 3);
        assert_eq!(points_to_next_level(10, &t), 20);
        let bounds = current_level_bounds(10, &t);
        assert_eq!(bounds, LevelBounds { prev: 10, next: 30 });
    }

    #[test]
    fn snapshot_agrees_with_individual_queries() {
        let t = default_thresholds();
        for points in [0, 35, 950, 1_000, 4_409, 10_000, 12_345] {
            let snap = progress_snapshot(points, &t);
            assert_eq!(snap.points, points);
            assert_eq!(snap.level, level_for(points, &t));
            assert_eq!(snap.points_to_next, points_to_next_level(points, &t));
            assert_eq!(snap.progress_percent, level_progress_percent(points, &t));
            assert_eq!(snap.bounds, current_level_bounds(points, &t));
        }
    }

    #[test]
    fn queries_total_on_empty_table() {
        // Degenerate input; queries must not panic.
        let t: [u32; 0] = [];
        assert_eq!(level_for(100, &t), 1);
        assert_eq!(points_to_next_level(100, &t), 0);
        assert_eq!(level_progress_percent(100, &t), 100.0);
        assert_eq!(current_level_bounds(100, &t), LevelBounds { prev: 0, next: 0 });
    }
}
