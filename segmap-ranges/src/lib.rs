//! Set algebra and chain composition over segmap intervals.
//!
//! Everything here is a pure function over immutable inputs:
//!
//! - [`interval_ranges`]: sweep-based intersection, coverage, gaps, subtraction
//! - [`compose`]: composing X <-> Y and Y <-> Z chains into X <-> Z, and projecting
//!   positions and intervals through a chain
//! - [`codon`]: trimming chains to whole codons before reading them as coding regions
//!
//! ## Quick Start
//!
//! ```rust
//! use segmap_core::models::{AlignedSegment, Interval};
//! use segmap_ranges::{compose, covers, primary_extents};
//!
//! // a member sequence aligned to its reference, and the reference to a root
//! let member_to_ref = vec![
//!     AlignedSegment::new(1u32, 20, 5, 24)?,
//!     AlignedSegment::new(29, 50, 25, 46)?,
//! ];
//! let ref_to_root = vec![AlignedSegment::new(1u32, 30, 3, 32)?];
//!
//! let member_to_root = compose(&member_to_ref, &ref_to_root);
//! assert_eq!(member_to_root.len(), 2);
//!
//! // is a detected variation at member positions 30..=32 inside the mapped part?
//! let variation = Interval::new(30u32, 32)?;
//! assert!(covers(&primary_extents(&member_to_root), &[variation]));
//! # Ok::<(), segmap_core::errors::SegmentError>(())
//! ```

/// Interval set algebra.
pub mod interval_ranges;

/// Aligned-segment chain composition.
pub mod compose;

/// Reading-frame alignment.
pub mod codon;

// re-exports
pub use self::codon::codon_align;
pub use self::compose::{
    compose, compose_all, invert, map_interval, map_position, normalize, primary_extents,
    secondary_extents,
};
pub use self::interval_ranges::{
    covers, gaps, intersect, intersect_by, intersect_intervals, reduce, subtract, total_length,
};
