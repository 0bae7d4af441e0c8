//! # Stratasort
//!
//! `stratasort` is an adaptive in-place sorting library for fixed-width
//! numeric types: `i32`, `u32`, `i64`, `u64`, `f32`, and `f64`.
//!
//! It inspects the input before committing to an algorithm and picks the
//! cheapest strategy that fits, combining the strengths of comparison
//! sorting, counting sort, and radix sort:
//!
//! - **Small inputs** (fewer than 256 elements) use the standard library
//!   comparison sort, which is unbeatable at that size.
//! - **Sorted and reversed inputs** are recognized in constant time by a
//!   three-window pattern check and finished in linear time.
//! - **Dense integer inputs**, where the value range is at most twice the
//!   length, use counting sort at O(n + range).
//! - **Everything else** uses an LSD byte-radix sort over an
//!   order-preserving unsigned encoding, O(n) with a constant factor of one
//!   pass per key byte.
//!
//! ## Key Features
//!
//! - **Signed and floating-point keys**: A reversible bit encoding maps each
//!   element type onto a same-width unsigned integer with the same order, so
//!   one radix engine covers all six types. Floats sort by the IEEE 754
//!   total order (`-0.0` before `0.0`, NaNs at the extremes).
//! - **Stable twin pipeline**: [`stable_sort`] runs the same cascade with
//!   stable leaves throughout, and [`sort_by_key`] sorts arbitrary records
//!   by a 32-bit key with observable stability.
//! - **Zero-allocation hot paths**: [`sort_with`] and [`stable_sort_with`]
//!   accept a caller-owned scratch buffer, so repeated sorts reuse one
//!   allocation. Only the counting tier allocates beyond that, for its
//!   range-sized histogram.
//!
//! ## Usage
//!
//! ### Primitive slices
//!
//! ```rust
//! let mut data = vec![5, 2, 8, 1, 9];
//! stratasort::sort(&mut data);
//!
//! assert_eq!(data, vec![1, 2, 5, 8, 9]);
//! ```
//!
//! ### Reusing a scratch buffer
//!
//! ```rust
//! let mut scratch = vec![0.0f64; 4];
//!
//! let mut a = vec![3.14159, -2.71828, 1.41421];
//! stratasort::sort_with(&mut a, &mut scratch);
//! assert_eq!(a, vec![-2.71828, 1.41421, 3.14159]);
//!
//! let mut b = vec![0.5, -0.5, 0.0, 1.5];
//! stratasort::sort_with(&mut b, &mut scratch);
//! assert_eq!(b, vec![-0.5, 0.0, 0.5, 1.5]);
//! ```
//!
//! ### Sorting records by key
//!
//! ```rust
//! let mut readings = vec![(22i32, "kitchen"), (19, "cellar"), (22, "attic")];
//! stratasort::sort_by_key(&mut readings, |r| r.0);
//!
//! // Stable: the two 22-degree readings keep their original order.
//! assert_eq!(readings, vec![(19, "cellar"), (22, "kitchen"), (22, "attic")]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Best case**: O(n) on sorted, reversed, dense, and random inputs alike;
//!   only the constant differs per tier.
//! - **Worst case**: O(n log n), reached only when the pattern check
//!   misclassifies an input and hands it to the comparison sort.
//! - **Memory**: one scratch buffer of n elements (caller-suppliable), plus
//!   a 256-entry stack histogram per radix pass or one range-sized heap
//!   histogram for the counting tier.
//!
//! The detectors and their thresholds are exposed in [`detect`] so their
//! classification behavior can be pinned down in tests.

pub mod algo;
mod counting;
pub mod detect;
pub mod key;
mod radix;

pub use algo::{SMALL_SORT_THRESHOLD, sort, sort_by_key, sort_with, stable_sort, stable_sort_with};
pub use key::{RadixWord, RecordKey, Sortable};

pub mod prelude {
    pub use crate::algo::{sort, sort_by_key, sort_with, stable_sort, stable_sort_with};
    pub use crate::key::{RecordKey, Sortable};
}
