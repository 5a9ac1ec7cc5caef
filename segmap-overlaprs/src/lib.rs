//! Overlap indexes for tagged intervals.
//!
//! This crate answers "which stored regions intersect this one?" for many-to-many
//! overlap discovery, e.g. matching one catalog of annotated regions against another
//! on the same reference.
//!
//! ## Features
//!
//! - **Incremental or bulk construction**: [`OverlapIndex::insert`] one entry at a time
//!   or [`Overlapper::build`] from a vector
//! - **Closed intervals**: entries touching the query at a single position are hits
//! - **Iterator-based API**: [`Overlapper::find_iter`] avoids allocating result vectors
//! - **Multiple spaces**: [`multi_space::MultiSpaceOverlapper`] keeps one index per
//!   reference sequence
//!
//! ## Quick Start
//!
//! ```rust
//! use segmap_core::models::TaggedInterval;
//! use segmap_overlaprs::{OverlapIndex, Overlapper};
//!
//! let regions = vec![
//!     TaggedInterval::new(100u32, 200, "ORF1")?,
//!     TaggedInterval::new(150, 300, "ORF2")?,
//!     TaggedInterval::new(400, 500, "ORF3")?,
//! ];
//!
//! let index = OverlapIndex::build(regions);
//!
//! let overlaps = index.find(180, 250);
//! assert_eq!(overlaps.len(), 2);
//!
//! for region in index.find_iter(180, 250) {
//!     println!("Found overlap: {:?}", region);
//! }
//! # Ok::<(), segmap_core::errors::SegmentError>(())
//! ```

/// Insertable interval tree.
///
/// See [`OverlapIndex`] for details.
pub mod index;

/// Per-space indexing and catalog-vs-catalog overlap reporting.
pub mod multi_space;

/// Core trait for overlap queries.
///
/// See [`Overlapper`].
pub mod traits;

// re-exports
pub use self::index::OverlapIndex;
pub use self::multi_space::{MultiSpaceOverlapper, overlap_pairs};
pub use self::traits::Overlapper;
