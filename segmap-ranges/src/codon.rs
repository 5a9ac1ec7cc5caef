//! Reading-frame alignment of chains, as integer arithmetic on primary positions.
//!
//! A region is read in codons of three positions counted from `codon1_start`, the
//! first position of codon 1 in the primary space. Before a region is interpreted as
//! coding, each aligned block must start on the first position of a codon and end on
//! the last.

use num_traits::identities::{one, zero};

use segmap_core::models::{AlignedSegment, Coordinate};

#[inline]
fn three<I: Coordinate>() -> I {
    one::<I>() + one::<I>() + one::<I>()
}

///
/// Position of `pos` within its codon: 0, 1 or 2. Positions before `codon1_start`
/// continue the frame backwards.
///
pub fn codon_frame<I: Coordinate>(pos: I, codon1_start: I) -> I {
    // residues are taken separately, so no distance between the two is ever formed
    let (p, c) = (residue(pos), residue(codon1_start));
    if p >= c { p - c } else { p + three::<I>() - c }
}

/// `x` mod 3 in `0..3`, also for negative `x`.
#[inline]
fn residue<I: Coordinate>(x: I) -> I {
    let r = x % three::<I>();
    if r < zero::<I>() { r + three::<I>() } else { r }
}

/// Whether a segment covers only whole codons.
pub fn is_codon_aligned<I: Coordinate>(segment: &AlignedSegment<I>, codon1_start: I) -> bool {
    codon_frame(segment.primary_start(), codon1_start) == zero::<I>()
        && codon_frame(segment.primary_end(), codon1_start) == three::<I>() - one::<I>()
}

///
/// Trim each segment of a chain to the whole codons it contains.
///
/// Leading positions before the next codon start and trailing positions after the last
/// complete codon are cut from both sides of the segment; segments that hold no
/// complete codon are dropped.
///
/// ```
/// use segmap_core::models::AlignedSegment;
/// use segmap_ranges::codon::codon_align;
///
/// // codon 1 starts at 10: codons are 10..=12, 13..=15, 16..=18, ...
/// let chain = vec![
///     AlignedSegment::new(11u32, 19, 111, 119)?,
///     AlignedSegment::new(25, 26, 130, 131)?,
/// ];
/// assert_eq!(
///     codon_align(&chain, 10),
///     vec![AlignedSegment::new(13, 18, 113, 118)?]
/// );
/// # Ok::<(), segmap_core::errors::SegmentError>(())
/// ```
pub fn codon_align<I: Coordinate>(
    chain: &[AlignedSegment<I>],
    codon1_start: I,
) -> Vec<AlignedSegment<I>> {
    chain
        .iter()
        .filter_map(|seg| {
            let lead = (three::<I>() - codon_frame(seg.primary_start(), codon1_start)) % three::<I>();
            let trail = (codon_frame(seg.primary_end(), codon1_start) + one::<I>()) % three::<I>();
            if seg.primary_end() - seg.primary_start() < lead + trail {
                return None;
            }
            seg.slice_primary(seg.primary_start() + lead, seg.primary_end() - trail)
        })
        .collect()
}
