//! Input-shape detectors that steer strategy selection.
//!
//! Two classifiers run before any data is moved: a constant-work pattern
//! check that spots already-sorted or reversed inputs, and a two-stage
//! min/max estimator that decides whether an integer input is dense enough
//! for counting sort.

use crate::key::{RadixWord, RecordKey, Sortable};

/// Number of positions visited by the range estimator's sampling stage.
pub const RANGE_SAMPLES: usize = 64;

/// The sampling stage accepts when the estimated range is at most
/// `n * SAMPLE_DENSITY_FACTOR`.
///
/// This is tighter than [`DENSE_DENSITY_FACTOR`]; an input whose true range
/// lies between the two bounds only reaches the confirming scan when the
/// samples miss its extremes.
pub const SAMPLE_DENSITY_FACTOR: u64 = 1;

/// The confirming full scan accepts when the exact range is at most
/// `n * DENSE_DENSITY_FACTOR`.
pub const DENSE_DENSITY_FACTOR: u64 = 2;

/// Returns true when three sentinel windows (prefix, midpoint, suffix) are
/// each monotone, in either direction.
///
/// Sorted and reversed inputs always pass; random inputs essentially never
/// do. A false positive only costs the caller a comparison sort, so the
/// check stays deliberately cheap: twelve key reads, nine comparisons.
/// Inputs shorter than eight elements are reported as patterned
/// unconditionally.
///
/// Comparisons run on the unsigned key encoding, so float inputs are judged
/// under the same total order the sorting tiers use.
pub fn looks_presorted<T: Sortable>(data: &[T]) -> bool {
    sentinel_windows_monotone(data.len(), |i| data[i].to_key())
}

/// [`looks_presorted`] over the keys of a record slice.
pub fn keys_look_presorted<T, K, F>(items: &[T], key_fn: &mut F) -> bool
where
    K: RecordKey,
    F: FnMut(&T) -> K,
{
    sentinel_windows_monotone(items.len(), |i| key_fn(&items[i]))
}

fn sentinel_windows_monotone<K: Ord>(n: usize, mut key_at: impl FnMut(usize) -> K) -> bool {
    if n < 8 {
        return true;
    }
    for start in [0, n / 2 - 1, n - 4] {
        let w = [
            key_at(start),
            key_at(start + 1),
            key_at(start + 2),
            key_at(start + 3),
        ];
        let ascending = w[0] <= w[1] && w[1] <= w[2] && w[2] <= w[3];
        let descending = w[0] >= w[1] && w[1] >= w[2] && w[2] >= w[3];
        if !ascending && !descending {
            return false;
        }
    }
    true
}

/// Reports `(min, max)` when an integer input is dense enough for counting
/// sort, `None` otherwise.
///
/// Stage one strides through [`RANGE_SAMPLES`] positions and rejects early
/// when even the sampled estimate exceeds [`SAMPLE_DENSITY_FACTOR`]` * n`.
/// Stage two refines min and max with a full scan and accepts when the exact
/// range is within [`DENSE_DENSITY_FACTOR`]` * n`.
///
/// Only meaningful for integer element types; the dispatch engine never
/// calls it for floats.
pub fn dense_bounds<T: Sortable>(data: &[T]) -> Option<(T, T)> {
    let n = data.len();
    if n == 0 {
        return None;
    }

    let stride = (n / RANGE_SAMPLES).max(1);
    let mut min = data[0];
    let mut max = data[0];
    let mut i = 0;
    while i < n {
        let x = data[i];
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
        i += stride;
    }

    let estimate = key_span(min, max)?;
    if estimate > (n as u64).saturating_mul(SAMPLE_DENSITY_FACTOR) {
        return None;
    }

    for &x in data {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    let range = key_span(min, max)?;
    if range <= (n as u64).saturating_mul(DENSE_DENSITY_FACTOR) {
        Some((min, max))
    } else {
        None
    }
}

/// [`dense_bounds`] over the keys of a record slice.
///
/// Both stages accept up to [`DENSE_DENSITY_FACTOR`]` * n`: with keys capped
/// at 32 bits the estimate cannot wrap, and the cost of a rare confirming
/// scan on a sparse input is one extra key evaluation per record.
pub fn dense_key_bounds<T, K, F>(items: &[T], key_fn: &mut F) -> Option<(K, K)>
where
    K: RecordKey,
    F: FnMut(&T) -> K,
{
    let n = items.len();
    if n == 0 {
        return None;
    }

    let stride = (n / RANGE_SAMPLES).max(1);
    let mut min = key_fn(&items[0]);
    let mut max = min;
    let mut i = 0;
    while i < n {
        let k = key_fn(&items[i]);
        min = min.min(k);
        max = max.max(k);
        i += stride;
    }

    let limit = (n as u64).saturating_mul(DENSE_DENSITY_FACTOR) as i64;
    let estimate = max.widen() - min.widen() + 1;
    if estimate > limit {
        return None;
    }

    for item in items {
        let k = key_fn(item);
        min = min.min(k);
        max = max.max(k);
    }

    let range = max.widen() - min.widen() + 1;
    if range <= limit { Some((min, max)) } else { None }
}

/// Exact `max - min + 1` computed over the unsigned encoding, so the
/// subtraction cannot overflow for any supported width. Returns `None` when
/// the range spans the full 64-bit domain and the `+ 1` itself would wrap;
/// such a range exceeds every density bound anyway.
fn key_span<T: Sortable>(min: T, max: T) -> Option<u64> {
    (max.to_key().widen() - min.to_key().widen()).checked_add(1)
}
