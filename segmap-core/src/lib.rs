//! Core value types for segment algebra between integer coordinate spaces.
//!
//! This crate holds the immutable building blocks shared by the rest of the
//! workspace:
//!
//! - [`Interval`](models::Interval): a closed range `[start, end]` in one space
//! - [`AlignedSegment`](models::AlignedSegment): an ungapped 1:1 block between a primary
//!   and a secondary space
//! - [`TaggedInterval`](models::TaggedInterval): an interval with an opaque payload, the
//!   unit stored in overlap indexes
//!
//! Chains of aligned segments coming from storage are checked with
//! [`chain::validate_chain`] or built directly from rows with
//! [`models::segment_row::materialize_chains`].
//!
//! ```rust
//! use segmap_core::models::{AlignedSegment, Interval};
//! use segmap_core::chain::validate_chain;
//!
//! let chain = vec![
//!     AlignedSegment::new(1u32, 20, 5, 24)?,
//!     AlignedSegment::new(29, 50, 25, 46)?,
//! ];
//! validate_chain(&chain)?;
//! assert_eq!(chain[1].primary_to_secondary(30), Some(26));
//! assert!(Interval::new(3u32, 1).is_err());
//! # Ok::<(), segmap_core::errors::SegmentError>(())
//! ```

pub mod chain;
pub mod errors;
pub mod models;
