//! Point placement along a category axis.
//!
//! [`beeswarm_layout`] packs points deterministically so they do not overlap,
//! keeping each value as its vertical position. [`add_jitter`] is the cheap
//! random alternative used for strip plots.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Point radius used when the caller does not pick one.
pub const DEFAULT_RADIUS: f64 = 3.0;

/// Horizontal spread used by [`add_jitter`] when the caller does not pick one.
pub const DEFAULT_JITTER_AMOUNT: f64 = 0.3;

/// Maximum number of candidate positions tried for a single point.
///
/// Without overlapping coordinates a free slot always exists within
/// `12 * n` candidates, so the cap only binds on swarms of several hundred
/// coincident values. A point that exhausts it is placed on the first grid
/// position past the outer edge of its neighbours instead. It still does not
/// overlap anything, but it may sit farther out than an unbounded search
/// would put it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Candidate spacing, as a multiple of the radius.
const STEP_FACTOR: f64 = 0.8;

/// Minimum centre distance between placed points, as a multiple of the radius.
const SPACING_FACTOR: f64 = 2.2;

/// A value positioned by [`beeswarm_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPoint {
    /// Horizontal position, the category index plus the packing offset.
    pub x: f64,
    /// Vertical position, equal to `value`.
    pub y: f64,
    /// The original value.
    pub value: f64,
}

/// Places `values` around `category_index` so no two points overlap.
///
/// Values are processed in ascending order. Each one is first tried at
/// `x = category_index`; while an already placed point lies closer than
/// `2.2 * radius`, the candidate moves outward in alternating directions
/// (`+s`, `-s`, `+2s`, `-2s`, ... with `s = 0.8 * radius`). The packing is
/// greedy and order dependent, not globally optimal.
///
/// Returns one point per value in ascending value order. See
/// [`MAX_PLACEMENT_ATTEMPTS`] for the approximate placement of very dense swarms.
///
/// # Examples
///
/// ```
/// use vizstats::beeswarm::beeswarm_layout;
///
/// let points = beeswarm_layout(&[5.0, 5.0, 5.0], 0.0, Some(1.0));
/// assert_eq!(points[0].x, 0.0);
/// assert!(points[1].x > 0.0);
/// assert!(points[2].x < 0.0);
/// ```
#[must_use]
pub fn beeswarm_layout(
    values: &[f64],
    category_index: f64,
    radius: Option<f64>,
) -> Vec<PlacedPoint> {
    layout(
        values,
        category_index,
        radius.unwrap_or(DEFAULT_RADIUS),
        MAX_PLACEMENT_ATTEMPTS,
    )
}

fn layout(
    values: &[f64],
    category_index: f64,
    radius: f64,
    max_attempts: usize,
) -> Vec<PlacedPoint> {
    let step = radius * STEP_FACTOR;
    let min_distance = radius * SPACING_FACTOR;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut placed = Vec::<PlacedPoint>::with_capacity(sorted.len());
    let mut capped = 0;
    for value in sorted {
        let blocked = Blocked::around(&placed, value, min_distance);
        let x = (0..max_attempts)
            .map(|attempt| candidate_x(category_index, attempt, step))
            .find(|&x| !blocked.contains(x))
            .unwrap_or_else(|| {
                capped += 1;
                blocked.outer_slot(category_index, step)
            });
        placed.push(PlacedPoint { x, y: value, value });
    }

    if capped > 0 {
        tracing::warn!(
            capped,
            total = placed.len(),
            max_attempts,
            "beeswarm placement attempts exhausted, points moved to the swarm edge"
        );
    }
    tracing::debug!(points = placed.len(), radius, "beeswarm layout computed");
    placed
}

fn candidate_x(category_index: f64, attempt: usize, step: f64) -> f64 {
    if attempt == 0 {
        category_index
    } else {
        category_index + candidate_offset(attempt) * step
    }
}

/// Offset, in steps, of the `attempt`-th candidate: `+1, -1, +2, -2, ...`.
#[expect(clippy::cast_precision_loss)]
fn candidate_offset(attempt: usize) -> f64 {
    let magnitude = attempt.div_ceil(2) as f64;
    if attempt % 2 == 1 {
        magnitude
    } else {
        -magnitude
    }
}

/// Horizontal positions ruled out for a new point by the points already placed.
///
/// Held as sorted, disjoint open intervals, so a lookup is a binary search.
#[derive(Debug)]
struct Blocked(Vec<(f64, f64)>);

impl Blocked {
    fn around(placed: &[PlacedPoint], y: f64, min_distance: f64) -> Self {
        let mut intervals = Vec::new();
        // Placed points are in ascending `y`; only the trailing ones can be close.
        for point in placed.iter().rev() {
            let dy = y - point.y;
            if dy.is_nan() || dy >= min_distance {
                break;
            }
            let half_width = (min_distance * min_distance - dy * dy).sqrt();
            intervals.push((point.x - half_width, point.x + half_width));
        }
        intervals.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut merged = Vec::<(f64, f64)>::with_capacity(intervals.len());
        for (start, end) in intervals {
            match merged.last_mut() {
                Some(last) if start < last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        Self(merged)
    }

    fn contains(&self, x: f64) -> bool {
        let i = self.0.partition_point(|&(start, _)| start < x);
        i > 0 && x < self.0[i - 1].1
    }

    /// The first grid position past the outer edge of the blocked region, on
    /// whichever side the candidate order reaches first.
    fn outer_slot(&self, category_index: f64, step: f64) -> f64 {
        let (Some(&(lower, _)), Some(&(_, upper))) = (self.0.first(), self.0.last()) else {
            return category_index;
        };

        let mut right = ((upper - category_index) / step).ceil().max(1.0);
        if category_index + right * step < upper {
            right += 1.0;
        }
        let mut left = ((category_index - lower) / step).ceil().max(1.0);
        if category_index - left * step > lower {
            left += 1.0;
        }

        // `+k` is tried before `-k`
        if right <= left {
            category_index + right * step
        } else {
            category_index - left * step
        }
    }
}

/// Draws `count` horizontal positions scattered around `category_index`.
///
/// Each position is `category_index + (u - 0.5) * jitter_amount` with `u`
/// uniform in `[0, 1)`, so all of them fall within half the jitter amount of the
/// category. Uses the thread-local generator; see [`add_jitter_with_rng`] for
/// reproducible output.
///
/// # Examples
///
/// ```
/// use vizstats::beeswarm::add_jitter;
///
/// let xs = add_jitter(2.0, 100, None);
/// assert_eq!(xs.len(), 100);
/// assert!(xs.iter().all(|x| (x - 2.0).abs() <= 0.15));
/// ```
#[must_use]
pub fn add_jitter(category_index: f64, count: usize, jitter_amount: Option<f64>) -> Vec<f64> {
    add_jitter_with_rng(&mut rand::rng(), category_index, count, jitter_amount)
}

/// Same as [`add_jitter`], drawing from the given generator.
pub fn add_jitter_with_rng<R>(
    rng: &mut R,
    category_index: f64,
    count: usize,
    jitter_amount: Option<f64>,
) -> Vec<f64>
where
    R: Rng + ?Sized,
{
    let amount = jitter_amount.unwrap_or(DEFAULT_JITTER_AMOUNT);
    (0..count)
        .map(|_| category_index + (rng.random::<f64>() - 0.5) * amount)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn min_pairwise_distance(points: &[PlacedPoint]) -> f64 {
        let mut min = f64::INFINITY;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                min = min.min((a.x - b.x).hypot(a.y - b.y));
            }
        }
        min
    }

    #[test]
    fn test_candidate_offsets_alternate_outward() {
        let offsets = (1..=6).map(candidate_offset).collect::<Vec<_>>();
        assert_eq!(offsets, vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0]);
    }

    #[test]
    fn test_spread_values_stay_on_axis() {
        let points = beeswarm_layout(&[30.0, 10.0, 20.0], 1.0, None);
        let ys = points.iter().map(|p| p.y).collect::<Vec<_>>();
        assert_eq!(ys, vec![10.0, 20.0, 30.0]);
        assert!(points.iter().all(|p| p.x == 1.0));
        assert!(points.iter().all(|p| p.y == p.value));
    }

    #[test]
    fn test_coincident_values_pack_sideways() {
        let radius = 1.0;
        let points = beeswarm_layout(&[0.0; 5], 0.0, Some(radius));
        let xs = points.iter().map(|p| p.x).collect::<Vec<_>>();

        // 2.2 / 0.8 rounds up to three steps between neighbours
        let step = radius * STEP_FACTOR;
        let expected = [0.0, 3.0, -3.0, 6.0, -6.0].map(|k| k * step);
        for (x, e) in xs.iter().zip(expected) {
            assert_relative_eq!(*x, e);
        }
        assert!(min_pairwise_distance(&points) >= radius * SPACING_FACTOR - 1e-9);
    }

    #[test]
    fn test_empty_layout() {
        assert!(beeswarm_layout(&[], 0.0, None).is_empty());
    }

    #[test]
    fn test_capped_points_move_to_swarm_edge() {
        let radius = 1.0;
        let points = layout(&[1.0; 10], 0.0, radius, 4);
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| p.value == 1.0));

        // Same packing as the unbounded search for a single coincident group.
        let step = radius * STEP_FACTOR;
        let expected = [0.0, 3.0, -3.0, 6.0, -6.0, 9.0, -9.0, 12.0, -12.0, 15.0];
        for (point, k) in points.iter().zip(expected) {
            assert_relative_eq!(point.x, k * step, max_relative = 1e-12);
        }
        assert!(min_pairwise_distance(&points) >= radius * SPACING_FACTOR - 1e-9);
    }

    #[test]
    fn test_no_attempts_still_places_every_point() {
        let points = layout(&[2.0; 3], 0.0, 1.0, 0);
        assert_eq!(points.len(), 3);
        assert!(min_pairwise_distance(&points) >= SPACING_FACTOR - 1e-9);
    }

    #[test]
    fn test_large_coincident_swarm_is_bounded_and_spread() {
        let n = 2_000;
        let radius = 1.0;

        let start = Instant::now();
        let points = beeswarm_layout(&vec![1.0; n], 0.0, Some(radius));
        let elapsed = start.elapsed();
        assert!(elapsed < Duration::from_secs(10), "took {elapsed:?}");

        assert_eq!(points.len(), n);
        let mut xs = points.iter().map(|p| p.x).collect::<Vec<_>>();
        xs.sort_by(f64::total_cmp);
        assert!(
            xs.windows(2).all(|w| w[1] - w[0] >= radius * SPACING_FACTOR - 1e-9),
            "points share or crowd an x position"
        );
    }

    #[test]
    fn test_blocked_intervals_merge() {
        let placed = [
            PlacedPoint { x: 0.0, y: 0.0, value: 0.0 },
            PlacedPoint { x: 1.0, y: 0.0, value: 0.0 },
            PlacedPoint { x: 10.0, y: 0.0, value: 0.0 },
        ];
        let blocked = Blocked::around(&placed, 0.0, 2.0);
        assert_eq!(blocked.0, vec![(-2.0, 3.0), (8.0, 12.0)]);
        assert!(blocked.contains(2.9));
        assert!(!blocked.contains(3.0));
        assert!(!blocked.contains(5.0));
        assert!(blocked.contains(8.5));
        assert_eq!(blocked.outer_slot(0.0, 1.0), -2.0);
    }

    #[test]
    fn test_jitter_with_seeded_rng_is_reproducible() {
        let a = add_jitter_with_rng(&mut Pcg64::seed_from_u64(7), 3.0, 20, Some(0.5));
        let b = add_jitter_with_rng(&mut Pcg64::seed_from_u64(7), 3.0, 20, Some(0.5));
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (x - 3.0).abs() <= 0.25));
    }

    #[test]
    fn test_jitter_is_centred_on_category() {
        let xs = add_jitter_with_rng(&mut Pcg64::seed_from_u64(11), 0.0, 10_000, None);
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!(mean.abs() < 0.01, "mean = {mean}");
        assert!(xs.iter().all(|x| x.abs() <= DEFAULT_JITTER_AMOUNT / 2.0));
    }

    #[test]
    fn test_jitter_zero_count() {
        assert!(add_jitter(0.0, 0, None).is_empty());
    }

    proptest! {
        #[test]
        fn prop_no_two_points_overlap(
            values in prop::collection::vec(0.0f64..20.0, 0..80),
            radius in 0.5f64..5.0,
        ) {
            let points = beeswarm_layout(&values, 0.0, Some(radius));
            prop_assert_eq!(points.len(), values.len());
            prop_assert!(min_pairwise_distance(&points) >= radius * SPACING_FACTOR - 1e-9);
        }
    }
}
