use std::fmt::{self, Debug, Display};

use num_traits::{PrimInt, identities::one};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SegmentError};

/// Integer type usable as a position in a coordinate space.
///
/// Blanket-implemented for every primitive integer, signed or unsigned.
pub trait Coordinate: PrimInt + Debug + Send + Sync {}

impl<I> Coordinate for I where I: PrimInt + Debug + Send + Sync {}

///
/// Represent a range [start, end], inclusive of both ends.
///
/// `start <= end` always holds; single-point intervals (`start == end`) are valid.
/// Equality and ordering are by `(start, end)`.
///
#[derive(Eq, PartialEq, Hash, PartialOrd, Ord, Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(I, I)", into = "(I, I)")
)]
pub struct Interval<I: Coordinate> {
    pub(crate) start: I,
    pub(crate) end: I,
}

impl<I: Coordinate> Interval<I> {
    ///
    /// Create a new [Interval], failing when `start > end`.
    ///
    /// ```
    /// use segmap_core::models::Interval;
    ///
    /// let iv = Interval::new(3u32, 5).unwrap();
    /// assert_eq!(iv.len(), 3);
    /// assert!(Interval::new(5u32, 3).is_err());
    /// ```
    pub fn new(start: I, end: I) -> Result<Self> {
        if start > end {
            return Err(SegmentError::InvalidInterval(
                format!("{:?}", start),
                format!("{:?}", end),
            ));
        }
        Ok(Interval { start, end })
    }

    /// A single-position interval.
    pub fn point(pos: I) -> Self {
        Interval {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn start(&self) -> I {
        self.start
    }

    #[inline]
    pub fn end(&self) -> I {
        self.end
    }

    /// Number of positions covered, counting both ends. Saturates at `I::max_value()`
    /// for intervals wider than the coordinate type can count, e.g. `[i32::MIN, 0]`.
    #[inline]
    pub fn len(&self) -> I {
        self.checked_len().unwrap_or_else(I::max_value)
    }

    /// Number of positions covered, or `None` when it doesn't fit in `I`.
    #[inline]
    pub fn checked_len(&self) -> Option<I> {
        self.span()?.checked_add(&one::<I>())
    }

    /// `end - start`, or `None` when it doesn't fit in `I`.
    #[inline]
    pub fn span(&self) -> Option<I> {
        self.end.checked_sub(&self.start)
    }

    #[inline]
    pub fn contains(&self, pos: I) -> bool {
        self.start <= pos && pos <= self.end
    }

    #[inline]
    pub fn contains_interval(&self, other: &Interval<I>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Check if two intervals share at least one position. Touching ends count.
    #[inline]
    pub fn overlaps(&self, other: &Interval<I>) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The shared sub-range `[max(starts), min(ends)]`, if there is one.
    #[inline]
    pub fn overlap(&self, other: &Interval<I>) -> Option<Interval<I>> {
        self.clip(other.start, other.end)
    }

    /// Clip this interval to `[start, end]`. An inverted bound pair yields `None`.
    #[inline]
    pub fn clip(&self, start: I, end: I) -> Option<Interval<I>> {
        let start = self.start.max(start);
        let end = self.end.min(end);
        if start <= end {
            Some(Interval { start, end })
        } else {
            None
        }
    }

    /// The smallest interval containing both.
    #[inline]
    pub fn hull(&self, other: &Interval<I>) -> Interval<I> {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The interval directly following this one starts at `end + 1`.
    #[inline]
    pub fn abuts(&self, next: &Interval<I>) -> bool {
        self.end
            .checked_add(&one::<I>())
            .is_some_and(|after| after == next.start)
    }
}

impl<I: Coordinate> TryFrom<(I, I)> for Interval<I> {
    type Error = SegmentError;

    fn try_from(value: (I, I)) -> Result<Self> {
        Interval::new(value.0, value.1)
    }
}

impl<I: Coordinate> From<Interval<I>> for (I, I) {
    fn from(value: Interval<I>) -> Self {
        (value.start, value.end)
    }
}

impl<I: Coordinate> Display for Interval<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}]", self.start, self.end)
    }
}
