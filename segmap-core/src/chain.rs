//! Explicit validation of the chain invariant.
//!
//! A chain is an ordered list of [`AlignedSegment`]s that is non-overlapping and
//! strictly increasing in both of its spaces. Algorithms downstream assume this without
//! re-checking it, so chains built from stored or otherwise external data should go
//! through [`validate_chain`] first. Chains produced by coordinate arithmetic inside
//! this workspace need not.

use log::debug;

use crate::errors::{Result, SegmentError};
use crate::models::{AlignedSegment, Coordinate, Span};

///
/// Check that `chain` is strictly increasing and non-overlapping in both spaces.
///
/// Fails with [`SegmentError::MalformedChain`] on the first offending segment.
///
/// ```
/// use segmap_core::chain::validate_chain;
/// use segmap_core::models::AlignedSegment;
///
/// let chain = vec![
///     AlignedSegment::new(1u32, 20, 5, 24).unwrap(),
///     AlignedSegment::new(29, 50, 25, 46).unwrap(),
/// ];
/// assert!(validate_chain(&chain).is_ok());
///
/// let crossed = vec![chain[1], chain[0]];
/// assert!(validate_chain(&crossed).is_err());
/// ```
pub fn validate_chain<I: Coordinate>(chain: &[AlignedSegment<I>]) -> Result<()> {
    for (index, pair) in chain.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let reason = if next.primary_start() <= prev.primary_end() {
            Some(format!(
                "primary {} does not start after {}",
                next.primary(),
                prev.primary()
            ))
        } else if next.secondary_start() <= prev.secondary_end() {
            Some(format!(
                "secondary {} does not start after {}",
                next.secondary(),
                prev.secondary()
            ))
        } else {
            None
        };

        if let Some(reason) = reason {
            debug!("rejecting chain of {} segments: {}", chain.len(), reason);
            return Err(SegmentError::MalformedChain {
                index: index + 1,
                reason,
            });
        }
    }
    Ok(())
}

///
/// Check that a plain interval list is sorted by start and non-overlapping, the
/// precondition of the sweep algorithms.
///
pub fn validate_sorted<I, S>(list: &[S]) -> Result<()>
where
    I: Coordinate,
    S: Span<I>,
{
    for (index, pair) in list.windows(2).enumerate() {
        let (prev, next) = (pair[0].extent(), pair[1].extent());
        if next.start() <= prev.end() {
            let reason = format!("{} does not start after {}", next, prev);
            debug!("rejecting interval list of {} entries: {}", list.len(), reason);
            return Err(SegmentError::MalformedChain {
                index: index + 1,
                reason,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Interval;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn chain() -> Vec<AlignedSegment<u32>> {
        vec![
            AlignedSegment::new(1, 20, 5, 24).unwrap(),
            AlignedSegment::new(29, 50, 25, 46).unwrap(),
        ]
    }

    #[rstest]
    fn test_valid_chain(chain: Vec<AlignedSegment<u32>>) {
        assert_eq!(validate_chain(&chain), Ok(()));
        assert_eq!(validate_chain::<u32>(&[]), Ok(()));
        assert_eq!(validate_chain(&chain[..1]), Ok(()));
    }

    #[rstest]
    fn test_overlap_in_primary_space(mut chain: Vec<AlignedSegment<u32>>) {
        chain.push(AlignedSegment::new(50, 52, 60, 62).unwrap());
        match validate_chain(&chain) {
            Err(SegmentError::MalformedChain { index, reason }) => {
                assert_eq!(index, 2);
                assert!(reason.starts_with("primary"));
            }
            other => panic!("expected a malformed chain, got {:?}", other),
        }
    }

    #[rstest]
    fn test_non_monotonic_secondary_space(mut chain: Vec<AlignedSegment<u32>>) {
        chain.push(AlignedSegment::new(60, 62, 10, 12).unwrap());
        match validate_chain(&chain) {
            Err(SegmentError::MalformedChain { index, reason }) => {
                assert_eq!(index, 2);
                assert!(reason.starts_with("secondary"));
            }
            other => panic!("expected a malformed chain, got {:?}", other),
        }
    }

    #[rstest]
    fn test_validate_sorted() {
        let sorted = vec![
            Interval::new(1u32, 3).unwrap(),
            Interval::new(4, 9).unwrap(),
        ];
        assert_eq!(validate_sorted(&sorted), Ok(()));

        let touching = vec![
            Interval::new(1u32, 3).unwrap(),
            Interval::new(3, 9).unwrap(),
        ];
        assert!(validate_sorted(&touching).is_err());
    }
}
