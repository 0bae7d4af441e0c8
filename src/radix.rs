//! LSD byte-radix sort over the unsigned key encoding.
//!
//! The element slice is reinterpreted as its same-width unsigned words,
//! encoded in place, sorted by one stable counting pass per byte while
//! ping-ponging between the data and the scratch buffer, and decoded back.

use crate::key::{RadixWord, Sortable};
use cuneiform::cuneiform;
use std::mem;

/// Number of buckets per 8-bit digit pass.
pub(crate) const RADIX_BUCKETS: usize = 256;

// Cache-aligned counts struct.
#[cuneiform]
struct PassCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts `data` into non-decreasing key order using `scratch` as the
/// alternate pass destination. `scratch` must hold at least `data.len()`
/// elements.
pub(crate) fn radix_sort<T: Sortable>(data: &mut [T], scratch: &mut [T]) {
    let n = data.len();

    let words = bytemuck::cast_slice_mut::<T, T::Key>(data);
    for w in words.iter_mut() {
        *w = bytemuck::cast::<T::Key, T>(*w).to_key();
    }

    let spare = &mut bytemuck::cast_slice_mut::<T, T::Key>(scratch)[..n];
    sort_words(words, spare);

    for w in words.iter_mut() {
        *w = bytemuck::cast::<T, T::Key>(T::from_key(*w));
    }
}

fn sort_words<W: RadixWord>(data: &mut [W], scratch: &mut [W]) {
    let mut src: &mut [W] = data;
    let mut dst: &mut [W] = scratch;

    for pass in 0..W::BYTES {
        let shift = (pass * 8) as u32;

        let mut counts = PassCounts {
            data: [0; RADIX_BUCKETS],
        };
        let counts = &mut counts.data;

        for &word in src.iter() {
            counts[word.digit(shift)] += 1;
        }

        // Exclusive bucket end positions.
        let mut sum = 0usize;
        for c in counts.iter_mut() {
            sum += *c;
            *c = sum;
        }

        // High-to-low placement keeps each pass stable; composing stable
        // passes makes the whole sort stable.
        for &word in src.iter().rev() {
            let bucket = word.digit(shift);
            counts[bucket] -= 1;
            dst[counts[bucket]] = word;
        }

        mem::swap(&mut src, &mut dst);
    }

    // Both supported widths take an even number of passes, so the final
    // destination is `data` and no copy back is needed.
    debug_assert!(W::BYTES % 2 == 0);
}
