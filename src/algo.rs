//! Tier dispatch and the public sorting entry points.
//!
//! Every entry point funnels into the same cascade:
//! - **Small** inputs go straight to the standard library comparison sort,
//!   which wins below a few hundred elements.
//! - **Patterned** inputs (sorted or reversed sentinel windows) also take the
//!   comparison sort, which finishes them in linear time.
//! - **Dense** integer inputs (exact range at most twice the length) take a
//!   counting sort.
//! - Everything else takes the LSD byte-radix sort.
//!
//! The main entry points are [`sort`], [`stable_sort`], their caller-buffer
//! variants, and [`sort_by_key`].

use crate::counting;
use crate::detect;
use crate::key::{RecordKey, Sortable};
use crate::radix;

/// Inputs shorter than this skip detection and go straight to the standard
/// library comparison sort.
pub const SMALL_SORT_THRESHOLD: usize = 256;

/// Sorts the slice into non-decreasing order.
///
/// Equal elements may be reordered; for primitive element types this is not
/// observable. Float slices are ordered by the IEEE 754 total order: `-0.0`
/// before `0.0`, NaNs at the extremes according to their sign bit.
///
/// Allocates a scratch buffer the size of the slice; use [`sort_with`] to
/// supply one instead.
///
/// # Examples
///
/// ```
/// let mut data = vec![5, 2, 8, 1, 9, 3, 7, 4, 6];
/// stratasort::sort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub fn sort<T: Sortable>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let mut scratch = vec![T::zeroed(); data.len()];
    dispatch(data, &mut scratch, false);
}

/// [`sort`] with a caller-supplied scratch buffer.
///
/// Useful on hot paths that sort repeatedly and want to reuse one
/// allocation. The buffer contents on entry are irrelevant and unspecified
/// on return.
///
/// # Panics
///
/// Panics if `scratch` is shorter than `data`.
///
/// # Examples
///
/// ```
/// let mut data = vec![-3i64, 7, 0, -9, 4];
/// let mut scratch = vec![0i64; data.len()];
/// stratasort::sort_with(&mut data, &mut scratch);
///
/// assert_eq!(data, vec![-9, -3, 0, 4, 7]);
/// ```
pub fn sort_with<T: Sortable>(data: &mut [T], scratch: &mut [T]) {
    assert!(
        scratch.len() >= data.len(),
        "scratch buffer shorter than input: {} < {}",
        scratch.len(),
        data.len()
    );
    if data.len() <= 1 {
        return;
    }
    dispatch(data, scratch, false);
}

/// Sorts the slice into non-decreasing order, preserving the relative order
/// of equal elements.
///
/// For primitive element types equal values are indistinguishable, so the
/// output is identical to [`sort`]; the stable cascade exists for callers
/// that need the guarantee to hold regardless of which tier runs. To sort
/// records with observable stability, use [`sort_by_key`].
///
/// Allocates a scratch buffer the size of the slice; use
/// [`stable_sort_with`] to supply one instead.
pub fn stable_sort<T: Sortable>(data: &mut [T]) {
    if data.len() <= 1 {
        return;
    }
    let mut scratch = vec![T::zeroed(); data.len()];
    dispatch(data, &mut scratch, true);
}

/// [`stable_sort`] with a caller-supplied scratch buffer.
///
/// # Panics
///
/// Panics if `scratch` is shorter than `data`.
pub fn stable_sort_with<T: Sortable>(data: &mut [T], scratch: &mut [T]) {
    assert!(
        scratch.len() >= data.len(),
        "scratch buffer shorter than input: {} < {}",
        scratch.len(),
        data.len()
    );
    if data.len() <= 1 {
        return;
    }
    dispatch(data, scratch, true);
}

/// Sorts records by a 32-bit integer key. Always stable with respect to the
/// key: records with equal keys keep their original relative order.
///
/// The key function must be pure; it is invoked several times per record
/// within one call (during detection and again during placement). Dense key
/// ranges take a counting sort directly over the records; sparse ranges fall
/// back to the standard library's stable sort.
///
/// # Examples
///
/// ```
/// struct Person {
///     age: i32,
///     id: usize,
/// }
///
/// let mut people = vec![
///     Person { age: 30, id: 0 },
///     Person { age: 25, id: 1 },
///     Person { age: 30, id: 2 },
///     Person { age: 25, id: 3 },
/// ];
/// stratasort::sort_by_key(&mut people, |p| p.age);
///
/// let ids: Vec<usize> = people.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![1, 3, 0, 2]);
/// ```
pub fn sort_by_key<T, K, F>(items: &mut [T], mut key_fn: F)
where
    K: RecordKey,
    F: FnMut(&T) -> K,
{
    let n = items.len();
    if n <= 1 {
        return;
    }
    if n < SMALL_SORT_THRESHOLD {
        items.sort_by_key(|item| key_fn(item));
        return;
    }
    if detect::keys_look_presorted(items, &mut key_fn) {
        items.sort_by_key(|item| key_fn(item));
        return;
    }
    if let Some((min, max)) = detect::dense_key_bounds(items, &mut key_fn) {
        counting::counting_sort_records(items, &mut key_fn, min, max);
        return;
    }
    // Sparse keys: no radix tier for records.
    items.sort_by_key(|item| key_fn(item));
}

fn dispatch<T: Sortable>(data: &mut [T], scratch: &mut [T], stable: bool) {
    if data.len() < SMALL_SORT_THRESHOLD {
        comparison_sort(data, stable);
        return;
    }
    if detect::looks_presorted(data) {
        // Adaptive O(n) on genuinely sorted or reversed input; a false
        // positive still sorts correctly at O(n log n).
        comparison_sort(data, stable);
        return;
    }
    if T::COUNTABLE {
        if let Some((min, max)) = detect::dense_bounds(data) {
            if stable {
                counting::counting_sort_stable(data, scratch, min, max);
            } else {
                counting::counting_sort(data, min, max);
            }
            return;
        }
    }
    radix::radix_sort(data, scratch);
}

fn comparison_sort<T: Sortable>(data: &mut [T], stable: bool) {
    if stable {
        data.sort_by_key(|x| x.to_key());
    } else {
        data.sort_unstable_by_key(|x| x.to_key());
    }
}
