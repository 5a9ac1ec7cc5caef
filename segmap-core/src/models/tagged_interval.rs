#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::interval::{Coordinate, Interval};
use super::span::Span;
use crate::errors::Result;

///
/// An interval carrying an opaque payload, e.g. the identifier of the annotation it
/// represents. Payloads are compared only for equality; index ordering uses
/// `(start, end)` and leaves remaining ties in insertion order.
///
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedInterval<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    pub(crate) interval: Interval<I>,
    pub val: T,
}

impl<I, T> TaggedInterval<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    pub fn new(start: I, end: I, val: T) -> Result<Self> {
        Ok(TaggedInterval {
            interval: Interval::new(start, end)?,
            val,
        })
    }

    pub fn from_interval(interval: Interval<I>, val: T) -> Self {
        TaggedInterval { interval, val }
    }

    #[inline]
    pub fn interval(&self) -> &Interval<I> {
        &self.interval
    }

    #[inline]
    pub fn start(&self) -> I {
        self.interval.start
    }

    #[inline]
    pub fn end(&self) -> I {
        self.interval.end
    }

    /// Check whether this entry intersects `[start, end]`, closed on both ends.
    #[inline]
    pub fn overlap(&self, start: I, end: I) -> bool {
        self.interval.start <= end && start <= self.interval.end
    }

    #[inline]
    pub fn key(&self) -> (I, I) {
        (self.interval.start, self.interval.end)
    }
}

impl<I, T> Span<I> for TaggedInterval<I, T>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn start(&self) -> I {
        self.interval.start
    }

    #[inline]
    fn end(&self) -> I {
        self.interval.end
    }
}
