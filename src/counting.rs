//! Histogram sorts for dense integer ranges.
//!
//! All three variants allocate one `range`-sized histogram, sized from the
//! observed min and max, and release it on return. The stable variants place
//! back-to-front through exclusive bucket end positions; that traversal
//! direction is what preserves the original order among equal values.

use crate::key::{RadixWord, RecordKey, Sortable};

/// Unstable counting sort: histogram the values, then regenerate the slice
/// bucket by bucket. Input ordering among equal values is destroyed.
pub(crate) fn counting_sort<T: Sortable>(data: &mut [T], min: T, max: T) {
    let base = min.to_key().widen();
    let range = (max.to_key().widen() - base) as usize + 1;
    let mut counts = vec![0usize; range];

    for &x in data.iter() {
        counts[(x.to_key().widen() - base) as usize] += 1;
    }

    let mut idx = 0;
    for (offset, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let value = T::from_key(<T::Key>::narrow(base + offset as u64));
        data[idx..idx + count].fill(value);
        idx += count;
    }
}

/// Stable counting sort through the scratch buffer.
pub(crate) fn counting_sort_stable<T: Sortable>(data: &mut [T], scratch: &mut [T], min: T, max: T) {
    let n = data.len();
    let base = min.to_key().widen();
    let range = (max.to_key().widen() - base) as usize + 1;
    let mut counts = vec![0usize; range];

    for &x in data.iter() {
        counts[(x.to_key().widen() - base) as usize] += 1;
    }

    // Exclusive bucket end positions.
    let mut sum = 0usize;
    for c in counts.iter_mut() {
        sum += *c;
        *c = sum;
    }

    let out = &mut scratch[..n];
    for &x in data.iter().rev() {
        let bucket = (x.to_key().widen() - base) as usize;
        counts[bucket] -= 1;
        out[counts[bucket]] = x;
    }

    data.copy_from_slice(out);
}

/// Stable counting sort of records by a 32-bit key.
///
/// Histograms the keys, derives the stable destination of every record from
/// the exclusive bucket ends, and realizes that permutation in place. Records
/// are only ever swapped with each other; no placeholder values are
/// constructed and `T` needs no `Clone`.
pub(crate) fn counting_sort_records<T, K, F>(items: &mut [T], key_fn: &mut F, min: K, max: K)
where
    K: RecordKey,
    F: FnMut(&T) -> K,
{
    let n = items.len();
    let base = min.widen();
    let range = (max.widen() - base) as usize + 1;
    let mut counts = vec![0usize; range];

    for item in items.iter() {
        counts[(key_fn(item).widen() - base) as usize] += 1;
    }

    let mut sum = 0usize;
    for c in counts.iter_mut() {
        sum += *c;
        *c = sum;
    }

    // Source index for every destination slot, filled back-to-front so that
    // equal keys keep their original relative order.
    let mut source = vec![0usize; n];
    for i in (0..n).rev() {
        let bucket = (key_fn(&items[i]).widen() - base) as usize;
        counts[bucket] -= 1;
        source[counts[bucket]] = i;
    }

    apply_permutation(items, source);
}

/// Moves every element to its destination slot in place by walking the
/// permutation cycles. `source[i]` names the element that must end up at
/// position `i`; entries are rewritten as slots are settled.
fn apply_permutation<T>(data: &mut [T], mut source: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while source[current] != i {
            let next = source[current];
            data.swap(current, next);
            source[current] = current; // Mark as placed
            current = next;
        }
        source[current] = current;
    }
}
