use super::interval::{Coordinate, Interval};

/// Read access to the extent of anything positioned in a single coordinate space.
///
/// Plain [`Interval`]s, [`AlignedSegment`](super::AlignedSegment)s (through their
/// primary side) and [`TaggedInterval`](super::TaggedInterval)s all implement it, which
/// lets the sweep algorithms in `segmap-ranges` work over any of them.
pub trait Span<I: Coordinate> {
    fn start(&self) -> I;

    fn end(&self) -> I;

    #[inline]
    fn extent(&self) -> Interval<I> {
        Interval {
            start: self.start(),
            end: self.end(),
        }
    }
}

impl<I: Coordinate> Span<I> for Interval<I> {
    #[inline]
    fn start(&self) -> I {
        self.start
    }

    #[inline]
    fn end(&self) -> I {
        self.end
    }

    #[inline]
    fn extent(&self) -> Interval<I> {
        *self
    }
}

impl<I: Coordinate, S: Span<I>> Span<I> for &S {
    #[inline]
    fn start(&self) -> I {
        S::start(*self)
    }

    #[inline]
    fn end(&self) -> I {
        S::end(*self)
    }
}
