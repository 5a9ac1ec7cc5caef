use std::fmt::{self, Display};

use num_traits::identities::one;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::interval::{Coordinate, Interval};
use super::span::Span;
use crate::errors::{Result, SegmentError};

/// One maximal, ungapped, strictly 1:1 aligned block between two coordinate spaces.
///
/// The primary and secondary intervals always have the same length, so position `p` in
/// the primary space corresponds to `secondary_start + (p - primary_start)` and back.
/// As a [`Span`] the segment is positioned by its primary side.
///
/// `end - start` of either side must fit in `I`, which keeps every position mapping
/// free of overflow. Signed segments wider than that, such as `[i32::MIN, 0]`, are
/// rejected as [`SegmentError::InvalidAlignedSegment`].
///
/// # Examples
///
/// ```
/// use segmap_core::models::AlignedSegment;
///
/// // reference positions 1..=20 aligned to member positions 5..=24
/// let seg = AlignedSegment::new(1u32, 20, 5, 24).unwrap();
/// assert_eq!(seg.primary_to_secondary(10), Some(14));
/// assert_eq!(seg.secondary_to_primary(5), Some(1));
/// assert_eq!(seg.primary_to_secondary(21), None);
///
/// // unequal lengths are rejected up front
/// assert!(AlignedSegment::new(1u32, 20, 5, 30).is_err());
/// ```
#[derive(Eq, PartialEq, Hash, PartialOrd, Ord, Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        try_from = "(Interval<I>, Interval<I>)",
        into = "(Interval<I>, Interval<I>)"
    )
)]
pub struct AlignedSegment<I: Coordinate> {
    pub(crate) primary: Interval<I>,
    pub(crate) secondary: Interval<I>,
}

impl<I: Coordinate> AlignedSegment<I> {
    pub fn new(primary_start: I, primary_end: I, secondary_start: I, secondary_end: I) -> Result<Self> {
        Self::from_intervals(
            Interval::new(primary_start, primary_end)?,
            Interval::new(secondary_start, secondary_end)?,
        )
    }

    pub fn from_intervals(primary: Interval<I>, secondary: Interval<I>) -> Result<Self> {
        let equal = match (primary.span(), secondary.span()) {
            (Some(p), Some(s)) => p == s,
            _ => false,
        };
        if !equal {
            return Err(SegmentError::InvalidAlignedSegment(
                primary.to_string(),
                secondary.to_string(),
            ));
        }
        Ok(AlignedSegment { primary, secondary })
    }

    ///
    /// Build a segment from a stored alignment row: the two start positions and the
    /// number of aligned positions. A length below one cannot describe a segment.
    ///
    pub fn from_row(primary_start: I, secondary_start: I, length: I) -> Result<Self> {
        let span = length.checked_sub(&one::<I>()).filter(|s| *s >= I::zero());
        let (primary_end, secondary_end) = match span {
            Some(span) => (
                primary_start.checked_add(&span),
                secondary_start.checked_add(&span),
            ),
            None => (None, None),
        };
        match (primary_end, secondary_end) {
            (Some(primary_end), Some(secondary_end)) => Ok(AlignedSegment {
                primary: Interval {
                    start: primary_start,
                    end: primary_end,
                },
                secondary: Interval {
                    start: secondary_start,
                    end: secondary_end,
                },
            }),
            _ => Err(SegmentError::InvalidInterval(
                format!("{:?}", primary_start),
                format!("{:?} + {:?} - 1", primary_start, length),
            )),
        }
    }

    #[inline]
    pub fn primary(&self) -> &Interval<I> {
        &self.primary
    }

    #[inline]
    pub fn secondary(&self) -> &Interval<I> {
        &self.secondary
    }

    #[inline]
    pub fn primary_start(&self) -> I {
        self.primary.start
    }

    #[inline]
    pub fn primary_end(&self) -> I {
        self.primary.end
    }

    #[inline]
    pub fn secondary_start(&self) -> I {
        self.secondary.start
    }

    #[inline]
    pub fn secondary_end(&self) -> I {
        self.secondary.end
    }

    /// Number of aligned positions.
    #[inline]
    pub fn len(&self) -> I {
        self.primary.len()
    }

    pub fn primary_to_secondary(&self, pos: I) -> Option<I> {
        if self.primary.contains(pos) {
            Some(self.secondary.start + (pos - self.primary.start))
        } else {
            None
        }
    }

    pub fn secondary_to_primary(&self, pos: I) -> Option<I> {
        if self.secondary.contains(pos) {
            Some(self.primary.start + (pos - self.secondary.start))
        } else {
            None
        }
    }

    ///
    /// The part of this segment whose primary positions fall in `[start, end]`,
    /// with the secondary side cut down to match.
    ///
    pub fn slice_primary(&self, start: I, end: I) -> Option<Self> {
        let primary = self.primary.clip(start, end)?;
        let secondary = Interval {
            start: self.secondary.start + (primary.start - self.primary.start),
            end: self.secondary.start + (primary.end - self.primary.start),
        };
        Some(AlignedSegment { primary, secondary })
    }

    /// Like [`slice_primary`](Self::slice_primary), restricting the secondary side.
    pub fn slice_secondary(&self, start: I, end: I) -> Option<Self> {
        self.invert().slice_primary(start, end).map(|s| s.invert())
    }

    /// The same block seen from the other side: primary and secondary swap.
    #[inline]
    pub fn invert(&self) -> Self {
        AlignedSegment {
            primary: self.secondary,
            secondary: self.primary,
        }
    }

    /// `next` continues this segment without a gap in either space.
    #[inline]
    pub fn abuts(&self, next: &AlignedSegment<I>) -> bool {
        self.primary.abuts(&next.primary) && self.secondary.abuts(&next.secondary)
    }

    /// Join with an abutting successor into one segment. `None` when they don't abut
    /// or the joined segment would be too wide.
    pub fn join(&self, next: &AlignedSegment<I>) -> Option<Self> {
        if !self.abuts(next) {
            return None;
        }
        // the joined block may be too wide for I
        Self::from_intervals(
            Interval {
                start: self.primary.start,
                end: next.primary.end,
            },
            Interval {
                start: self.secondary.start,
                end: next.secondary.end,
            },
        )
        .ok()
    }

    ///
    /// Compose this segment (X <-> Y) with `next` (Y <-> Z) over the Y positions they
    /// share, giving the X <-> Z block. `None` when their Y extents are disjoint.
    ///
    /// ```
    /// use segmap_core::models::AlignedSegment;
    ///
    /// let xy = AlignedSegment::new(29u32, 50, 25, 46).unwrap();
    /// let yz = AlignedSegment::new(1u32, 30, 3, 32).unwrap();
    /// assert_eq!(xy.chain_with(&yz), Some(AlignedSegment::new(29, 34, 27, 32).unwrap()));
    /// ```
    pub fn chain_with(&self, next: &AlignedSegment<I>) -> Option<Self> {
        let shared = self.secondary.overlap(&next.primary)?;
        let primary = Interval {
            start: self.primary.start + (shared.start - self.secondary.start),
            end: self.primary.start + (shared.end - self.secondary.start),
        };
        let secondary = Interval {
            start: next.secondary.start + (shared.start - next.primary.start),
            end: next.secondary.start + (shared.end - next.primary.start),
        };
        Some(AlignedSegment { primary, secondary })
    }
}

impl<I: Coordinate> Span<I> for AlignedSegment<I> {
    #[inline]
    fn start(&self) -> I {
        self.primary.start
    }

    #[inline]
    fn end(&self) -> I {
        self.primary.end
    }
}

impl<I: Coordinate> TryFrom<(Interval<I>, Interval<I>)> for AlignedSegment<I> {
    type Error = SegmentError;

    fn try_from(value: (Interval<I>, Interval<I>)) -> Result<Self> {
        AlignedSegment::from_intervals(value.0, value.1)
    }
}

impl<I: Coordinate> From<AlignedSegment<I>> for (Interval<I>, Interval<I>) {
    fn from(value: AlignedSegment<I>) -> Self {
        (value.primary, value.secondary)
    }
}

impl<I: Coordinate> Display for AlignedSegment<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <-> {}", self.primary, self.secondary)
    }
}
