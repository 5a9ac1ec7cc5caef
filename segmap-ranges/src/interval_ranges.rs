//! Interval set algebra over sorted, non-overlapping interval lists.
//!
//! Every list argument must be sorted by start and internally non-overlapping (see
//! [`segmap_core::chain::validate_sorted`]); this is assumed, not re-checked. All
//! intervals are closed, so `[1,3]` and `[3,5]` share the position `3`. Results are
//! fresh `Vec`s; an empty result is a normal outcome.

use std::cmp::Ordering;

use num_traits::identities::{one, zero};

use segmap_core::models::{Coordinate, Interval, Span};

///
/// Two-pointer sweep over two sorted lists, comparing the extent each `key` function
/// projects out of an element.
///
/// For every pair whose extents overlap, `merge(a, b, overlap)` is called once with the
/// shared range `[max(starts), min(ends)]`. After each step the element ending first
/// is advanced, or both when they end at the same position. Runs in O(|A| + |B|).
///
/// # Arguments
/// - list_a, key_a: first list and the extent to sweep on
/// - list_b, key_b: second list and the extent to sweep on
/// - merge: builds one output item per overlapping pair
///
/// # Returns
/// - merge results in ascending order of overlap
pub fn intersect_by<I, A, B, R, KA, KB, F>(
    list_a: &[A],
    key_a: KA,
    list_b: &[B],
    key_b: KB,
    mut merge: F,
) -> Vec<R>
where
    I: Coordinate,
    KA: Fn(&A) -> Interval<I>,
    KB: Fn(&B) -> Interval<I>,
    F: FnMut(&A, &B, Interval<I>) -> R,
{
    let mut result = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < list_a.len() && j < list_b.len() {
        let a = key_a(&list_a[i]);
        let b = key_b(&list_b[j]);

        if let Some(overlap) = a.overlap(&b) {
            result.push(merge(&list_a[i], &list_b[j], overlap));
        }

        match a.end().cmp(&b.end()) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    result
}

///
/// [`intersect_by`] over the natural extent of each element.
///
/// ```
/// use segmap_core::models::Interval;
/// use segmap_ranges::interval_ranges::intersect;
///
/// let a = vec![Interval::new(4u32, 8)?, Interval::new(12, 17)?];
/// let b = vec![Interval::new(5u32, 7)?, Interval::new(16, 20)?];
/// let widths: Vec<u32> = intersect(&a, &b, |_, _, overlap| overlap.len());
/// assert_eq!(widths, vec![3, 2]);
/// # Ok::<(), segmap_core::errors::SegmentError>(())
/// ```
pub fn intersect<I, A, B, R, F>(list_a: &[A], list_b: &[B], merge: F) -> Vec<R>
where
    I: Coordinate,
    A: Span<I>,
    B: Span<I>,
    F: FnMut(&A, &B, Interval<I>) -> R,
{
    intersect_by(list_a, |a| a.extent(), list_b, |b| b.extent(), merge)
}

/// The overlapping regions of two lists, as plain intervals.
pub fn intersect_intervals<I, A, B>(list_a: &[A], list_b: &[B]) -> Vec<Interval<I>>
where
    I: Coordinate,
    A: Span<I>,
    B: Span<I>,
{
    intersect(list_a, list_b, |_, _, overlap| overlap)
}

///
/// Check that every interval of `target` lies inside the union of `covering`.
///
/// Abutting covering pieces (`[1,5]`, `[6,9]`) jointly cover what spans them. An empty
/// target is always covered.
///
/// ```
/// use segmap_core::models::Interval;
/// use segmap_ranges::interval_ranges::covers;
///
/// let covering = vec![Interval::new(1u32, 5)?, Interval::new(6, 9)?];
/// assert!(covers(&covering, &[Interval::new(3u32, 8)?]));
/// assert!(!covers(&covering, &[Interval::new(8u32, 10)?]));
/// # Ok::<(), segmap_core::errors::SegmentError>(())
/// ```
pub fn covers<I, C, T>(covering: &[C], target: &[T]) -> bool
where
    I: Coordinate,
    C: Span<I>,
    T: Span<I>,
{
    let mut k = 0;

    'targets: for t in target {
        let t = t.extent();

        // pieces ending before this target can't help it or any later one
        while k < covering.len() && covering[k].end() < t.start() {
            k += 1;
        }

        // first position of t not yet accounted for
        let mut reached = t.start();
        for c in &covering[k..] {
            let c = c.extent();
            if c.start() > reached {
                return false;
            }
            if c.end() >= t.end() {
                continue 'targets;
            }
            reached = c.end() + one::<I>();
        }
        return false;
    }

    true
}

/// The holes strictly between consecutive intervals of a sorted list.
pub fn gaps<I, S>(list: &[S]) -> Vec<Interval<I>>
where
    I: Coordinate,
    S: Span<I>,
{
    list.windows(2)
        .filter_map(|pair| {
            let (prev, next) = (pair[0].extent(), pair[1].extent());
            if next.start() > prev.end() && !prev.abuts(&next) {
                Interval::new(prev.end() + one::<I>(), next.start() - one::<I>()).ok()
            } else {
                None
            }
        })
        .collect()
}

///
/// Sort and merge overlapping or abutting intervals into a minimal list.
///
/// Unlike the other operations the input need not be sorted.
///
pub fn reduce<I, S>(list: &[S]) -> Vec<Interval<I>>
where
    I: Coordinate,
    S: Span<I>,
{
    let mut sorted: Vec<Interval<I>> = list.iter().map(|s| s.extent()).collect();
    sorted.sort();

    let mut merged: Vec<Interval<I>> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match merged.last_mut() {
            Some(current) if iv.start() <= current.end() || current.abuts(&iv) => {
                *current = current.hull(&iv);
            }
            _ => merged.push(iv),
        }
    }

    merged
}

///
/// Remove from `list_a` every position covered by `list_b`.
///
/// Both inputs are reduced first, so overlapping input is tolerated.
///
/// # Example
/// ```text
/// A: [0, 20]
/// B: [2, 5], [8, 12], [15, 18]
/// subtract(A, B): [0, 1], [6, 7], [13, 14], [19, 20]
/// ```
pub fn subtract<I, A, B>(list_a: &[A], list_b: &[B]) -> Vec<Interval<I>>
where
    I: Coordinate,
    A: Span<I>,
    B: Span<I>,
{
    let a = reduce(list_a);
    let b = reduce(list_b);

    let mut result = Vec::new();
    let mut b_idx = 0;

    for a_iv in &a {
        // advance b cursor past intervals that end before this one starts
        while b_idx < b.len() && b[b_idx].end() < a_iv.start() {
            b_idx += 1;
        }

        let mut pos = a_iv.start();
        let mut exhausted = false;
        for b_iv in b[b_idx..].iter().take_while(|b_iv| b_iv.start() <= a_iv.end()) {
            if b_iv.start() > pos {
                result.extend(Interval::new(pos, b_iv.start() - one::<I>()).ok());
            }
            if b_iv.end() >= a_iv.end() {
                exhausted = true;
                break;
            }
            pos = pos.max(b_iv.end() + one::<I>());
        }

        if !exhausted {
            result.extend(Interval::new(pos, a_iv.end()).ok());
        }
    }

    result
}

/// Summed length of all intervals, counting both ends of each. Saturates at
/// `I::max_value()`.
pub fn total_length<I, S>(list: &[S]) -> I
where
    I: Coordinate,
    S: Span<I>,
{
    list.iter()
        .fold(zero::<I>(), |acc, s| acc.saturating_add(s.extent().len()))
}
