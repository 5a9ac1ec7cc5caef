//! Overlap queries across several named coordinate spaces.
//!
//! [`MultiSpaceOverlapper`] keeps one overlap index per coordinate space (typically one
//! per reference sequence), so two independently curated catalogs of regions can be
//! matched against each other with [`overlap_pairs`].
//!
//! # Examples
//!
//! ```
//! use segmap_core::models::TaggedInterval;
//! use segmap_overlaprs::multi_space::overlap_pairs;
//!
//! let features = vec![
//!     ("REF_A".to_string(), TaggedInterval::new(10u32, 20, "gene1")?),
//!     ("REF_A".to_string(), TaggedInterval::new(50, 60, "gene2")?),
//!     ("REF_B".to_string(), TaggedInterval::new(10, 20, "gene3")?),
//! ];
//! let epitopes = vec![
//!     ("REF_A".to_string(), TaggedInterval::new(18u32, 22, "ep1")?),
//!     ("REF_B".to_string(), TaggedInterval::new(30, 40, "ep2")?),
//! ];
//!
//! let pairs = overlap_pairs(features, &epitopes);
//! assert_eq!(pairs, vec![("gene1", "ep1")]);
//! # Ok::<(), segmap_core::errors::SegmentError>(())
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;

use log::debug;

use segmap_core::models::{Coordinate, Interval, TaggedInterval};

use crate::{OverlapIndex, Overlapper};

/// One overlap index per named coordinate space.
///
/// The index type defaults to [`OverlapIndex`]; any [`Overlapper`] works.
pub struct MultiSpaceOverlapper<I, T, O = OverlapIndex<I, T>>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
    O: Overlapper<I, T>,
{
    index_maps: HashMap<String, O>,
    _marker: PhantomData<fn() -> (I, T)>,
}

/// An iterator over stored entries that overlap a list of `(space, query)` pairs.
///
/// Created by [`MultiSpaceOverlapper::find_overlaps_iter`]; yields the query's space
/// together with each matching entry, query by query.
pub struct IterFindOverlaps<'a, 'b, I, T, O>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
    O: Overlapper<I, T>,
{
    inner: &'a HashMap<String, O>,
    queries: &'b [(String, Interval<I>)],
    query_idx: usize,
    current_space: Option<&'b str>,
    current_iter: Option<Box<dyn Iterator<Item = &'a TaggedInterval<I, T>> + 'a>>,
}

impl<'a, 'b, I, T, O> Iterator for IterFindOverlaps<'a, 'b, I, T, O>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
    O: Overlapper<I, T>,
{
    type Item = (&'b str, &'a TaggedInterval<I, T>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // first, try to get next item from current iterator
            if let (Some(iter), Some(space)) = (self.current_iter.as_mut(), self.current_space) {
                if let Some(interval) = iter.next() {
                    return Some((space, interval));
                }
            }

            // current iterator exhausted or doesn't exist, move to next query
            let (space, query) = self.queries.get(self.query_idx)?;
            self.query_idx += 1;

            // a space with no stored entries yields nothing for this query
            self.current_space = Some(space.as_str());
            self.current_iter = self
                .inner
                .get(space)
                .map(|lapper| lapper.find_iter(query.start(), query.end()));
        }
    }
}

impl<I, T, O> MultiSpaceOverlapper<I, T, O>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
    O: Overlapper<I, T>,
{
    /// Group `(space, entry)` pairs by space and build one index per space.
    pub fn build<S, It>(entries: It) -> Self
    where
        S: Into<String>,
        It: IntoIterator<Item = (S, TaggedInterval<I, T>)>,
    {
        let mut intervals: HashMap<String, Vec<TaggedInterval<I, T>>> = HashMap::new();
        for (space, interval) in entries {
            intervals.entry(space.into()).or_default().push(interval);
        }

        let index_maps: HashMap<String, O> = intervals
            .into_iter()
            .map(|(space, space_intervals)| (space, O::build(space_intervals)))
            .collect();

        debug!("built overlap indexes for {} spaces", index_maps.len());

        MultiSpaceOverlapper {
            index_maps,
            _marker: PhantomData,
        }
    }

    /// The index of one space, if anything was stored there.
    pub fn get(&self, space: &str) -> Option<&O> {
        self.index_maps.get(space)
    }

    /// Names of all spaces holding entries, in no particular order.
    pub fn spaces(&self) -> impl Iterator<Item = &str> {
        self.index_maps.keys().map(String::as_str)
    }

    /// Returns an iterator over all stored entries overlapping the queries.
    ///
    /// Each item is a tuple of (space, entry reference).
    pub fn find_overlaps_iter<'a, 'b>(
        &'a self,
        queries: &'b [(String, Interval<I>)],
    ) -> IterFindOverlaps<'a, 'b, I, T, O> {
        IterFindOverlaps {
            inner: &self.index_maps,
            queries,
            query_idx: 0,
            current_space: None,
            current_iter: None,
        }
    }

    /// Collect all overlaps into a Vec. Prefer
    /// [`find_overlaps_iter`](Self::find_overlaps_iter) for large query sets.
    pub fn find_overlaps(
        &self,
        queries: &[(String, Interval<I>)],
    ) -> Vec<(String, TaggedInterval<I, T>)> {
        self.find_overlaps_iter(queries)
            .map(|(space, interval)| (space.to_string(), interval.clone()))
            .collect()
    }
}

impl<I, T, O, S> FromIterator<(S, TaggedInterval<I, T>)> for MultiSpaceOverlapper<I, T, O>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
    O: Overlapper<I, T>,
    S: Into<String>,
{
    fn from_iter<It: IntoIterator<Item = (S, TaggedInterval<I, T>)>>(iter: It) -> Self {
        MultiSpaceOverlapper::build(iter)
    }
}

///
/// Every intersecting pair between two catalogs of tagged regions.
///
/// `catalog_a` is indexed per space and each entry of `catalog_b` is queried once, so
/// the cost is O(n log n) to build plus one search per entry of `b` and the size of the
/// output. Pairs come out in `catalog_b` order; pairs for the same `b` entry follow
/// `catalog_a`'s `(start, end)` order.
///
pub fn overlap_pairs<I, T, U, S>(
    catalog_a: Vec<(S, TaggedInterval<I, T>)>,
    catalog_b: &[(String, TaggedInterval<I, U>)],
) -> Vec<(T, U)>
where
    I: Coordinate,
    T: Eq + Clone + Send + Sync,
    U: Eq + Clone + Send + Sync,
    S: Into<String>,
{
    let index: MultiSpaceOverlapper<I, T> = MultiSpaceOverlapper::build(catalog_a);

    let mut pairs = Vec::new();
    for (space, entry) in catalog_b {
        if let Some(lapper) = index.get(space) {
            pairs.extend(
                lapper
                    .find_iter(entry.start(), entry.end())
                    .map(|hit| (hit.val.clone(), entry.val.clone())),
            );
        }
    }

    debug!(
        "found {} overlapping pairs for {} query regions",
        pairs.len(),
        catalog_b.len()
    );

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn entry(space: &str, start: u32, end: u32, val: u32) -> (String, TaggedInterval<u32, u32>) {
        (space.to_string(), TaggedInterval::new(start, end, val).unwrap())
    }

    fn query(space: &str, start: u32, end: u32) -> (String, Interval<u32>) {
        (space.to_string(), Interval::new(start, end).unwrap())
    }

    #[fixture]
    fn catalog() -> Vec<(String, TaggedInterval<u32, u32>)> {
        vec![
            entry("ref1", 100, 200, 1),
            entry("ref1", 300, 400, 2),
            entry("ref1", 600, 800, 3),
            entry("ref2", 100, 200, 4),
        ]
    }

    #[rstest]
    fn test_find_overlaps_per_space(catalog: Vec<(String, TaggedInterval<u32, u32>)>) {
        let index: MultiSpaceOverlapper<u32, u32> = catalog.into_iter().collect();

        let queries = vec![
            query("ref1", 110, 210),
            query("ref2", 200, 250),
            query("ref3", 0, 1000),
            query("ref1", 401, 599),
        ];
        let hits: Vec<(String, u32)> = index
            .find_overlaps(&queries)
            .into_iter()
            .map(|(space, iv)| (space, iv.val))
            .collect();

        assert_eq!(hits, vec![("ref1".to_string(), 1), ("ref2".to_string(), 4)]);
    }

    #[rstest]
    fn test_spaces(catalog: Vec<(String, TaggedInterval<u32, u32>)>) {
        let index: MultiSpaceOverlapper<u32, u32> = MultiSpaceOverlapper::build(catalog);
        let mut spaces: Vec<&str> = index.spaces().collect();
        spaces.sort();
        assert_eq!(spaces, vec!["ref1", "ref2"]);
        assert_eq!(index.get("ref1").map(|lapper| lapper.len()), Some(3));
        assert!(index.get("ref9").is_none());
    }

    #[rstest]
    fn test_overlap_pairs(catalog: Vec<(String, TaggedInterval<u32, u32>)>) {
        let other = vec![
            entry("ref1", 150, 350, 10),
            entry("ref1", 800, 900, 11),
            entry("ref2", 50, 99, 12),
            entry("ref2", 50, 100, 13),
        ];
        let pairs = overlap_pairs(catalog, &other);
        assert_eq!(pairs, vec![(1, 10), (2, 10), (3, 11), (4, 13)]);
    }

    #[rstest]
    fn test_overlap_pairs_empty_catalogs() {
        let empty: Vec<(String, TaggedInterval<u32, u32>)> = vec![];
        assert!(overlap_pairs(empty.clone(), &[entry("ref1", 1, 2, 1)]).is_empty());
        assert!(overlap_pairs(vec![entry("ref1", 1, 2, 1)], &empty).is_empty());
    }
}
