//! Composition of aligned-segment chains through a shared coordinate space.
//!
//! Given a chain relating X to Y and one relating Y to Z, [`compose`] derives the
//! chain relating X to Z directly, keeping only the Y positions both chains cover.
//! Chained repeatedly this projects positions along an arbitrary path of pairwise
//! alignments (a reference, its parent reference, a member sequence, ...) without
//! building a joint multiple alignment.

use log::trace;

use segmap_core::models::{AlignedSegment, Coordinate, Interval};

use crate::interval_ranges::intersect_by;

///
/// Compose `chain_xy` (X primary, Y secondary) with `chain_yz` (Y primary, Z
/// secondary) into the X <-> Z chain.
///
/// Both inputs must be valid chains; the output is one too, ascending in X, Y and Z.
/// Positions of Y covered by only one input have no transitive mapping and are
/// dropped, so an empty result simply means the chains share nothing.
///
/// ```
/// use segmap_core::models::AlignedSegment;
/// use segmap_ranges::compose::compose;
///
/// let member_to_ref = vec![
///     AlignedSegment::new(1u32, 20, 5, 24)?,
///     AlignedSegment::new(29, 50, 25, 46)?,
/// ];
/// let ref_to_root = vec![AlignedSegment::new(1u32, 47, 3, 49)?];
///
/// let member_to_root = compose(&member_to_ref, &ref_to_root);
/// assert_eq!(
///     member_to_root,
///     vec![
///         AlignedSegment::new(1, 20, 7, 26)?,
///         AlignedSegment::new(29, 50, 27, 48)?,
///     ]
/// );
/// # Ok::<(), segmap_core::errors::SegmentError>(())
/// ```
pub fn compose<I: Coordinate>(
    chain_xy: &[AlignedSegment<I>],
    chain_yz: &[AlignedSegment<I>],
) -> Vec<AlignedSegment<I>> {
    let composed: Vec<AlignedSegment<I>> = intersect_by(
        chain_xy,
        |xy| *xy.secondary(),
        chain_yz,
        |yz| *yz.primary(),
        |xy, yz, _shared| xy.chain_with(yz),
    )
    .into_iter()
    .flatten()
    .collect();

    trace!(
        "composed {} x {} segments into {}",
        chain_xy.len(),
        chain_yz.len(),
        composed.len()
    );

    composed
}

///
/// Fold [`compose`] along a path of chains, each sharing its primary space with the
/// previous chain's secondary space. An empty path gives an empty chain.
///
pub fn compose_all<I: Coordinate>(chains: &[&[AlignedSegment<I>]]) -> Vec<AlignedSegment<I>> {
    let Some((first, rest)) = chains.split_first() else {
        return Vec::new();
    };
    rest.iter()
        .fold(first.to_vec(), |acc, next| compose(&acc, next))
}

/// Merge consecutive segments that continue each other in both spaces.
pub fn normalize<I: Coordinate>(chain: &[AlignedSegment<I>]) -> Vec<AlignedSegment<I>> {
    let mut merged: Vec<AlignedSegment<I>> = Vec::with_capacity(chain.len());
    for seg in chain {
        match merged.last().and_then(|last| last.join(seg)) {
            Some(joined) => {
                if let Some(last) = merged.last_mut() {
                    *last = joined;
                }
            }
            None => merged.push(*seg),
        }
    }
    merged
}

/// The same alignment seen from its secondary space.
pub fn invert<I: Coordinate>(chain: &[AlignedSegment<I>]) -> Vec<AlignedSegment<I>> {
    chain.iter().map(AlignedSegment::invert).collect()
}

///
/// Map one primary-space position through a chain. `None` when the position falls in
/// a gap or outside the chain.
///
pub fn map_position<I: Coordinate>(chain: &[AlignedSegment<I>], pos: I) -> Option<I> {
    let idx = chain.partition_point(|seg| seg.primary_end() < pos);
    chain.get(idx)?.primary_to_secondary(pos)
}

///
/// The pieces of a chain that fall inside a primary-space interval, sliced to it.
///
/// Useful to carry a feature location through an alignment: the secondary sides of
/// the result are where the feature lands, and gaps between them are positions with
/// no counterpart.
///
pub fn map_interval<I: Coordinate>(
    chain: &[AlignedSegment<I>],
    interval: &Interval<I>,
) -> Vec<AlignedSegment<I>> {
    let first = chain.partition_point(|seg| seg.primary_end() < interval.start());
    chain[first..]
        .iter()
        .take_while(|seg| seg.primary_start() <= interval.end())
        .filter_map(|seg| seg.slice_primary(interval.start(), interval.end()))
        .collect()
}

/// The primary side of every segment, as a sorted interval list.
pub fn primary_extents<I: Coordinate>(chain: &[AlignedSegment<I>]) -> Vec<Interval<I>> {
    chain.iter().map(|seg| *seg.primary()).collect()
}

/// The secondary side of every segment, as a sorted interval list.
pub fn secondary_extents<I: Coordinate>(chain: &[AlignedSegment<I>]) -> Vec<Interval<I>> {
    chain.iter().map(|seg| *seg.secondary()).collect()
}
