pub mod aligned_segment;
pub mod interval;
pub mod segment_row;
pub mod span;
pub mod tagged_interval;

// re-export for cleaner imports
pub use self::aligned_segment::AlignedSegment;
pub use self::interval::{Coordinate, Interval};
pub use self::segment_row::SegmentRow;
pub use self::span::Span;
pub use self::tagged_interval::TaggedInterval;
