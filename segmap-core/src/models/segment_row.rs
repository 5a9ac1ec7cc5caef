use std::collections::HashMap;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::aligned_segment::AlignedSegment;
use super::interval::Coordinate;
use crate::chain::validate_chain;
use crate::errors::Result;

///
/// One stored alignment row, as handed over by the persistence layer: the owning
/// alignment, the start of the block in each space and the block length.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentRow<I: Coordinate> {
    pub alignment_id: String,
    pub primary_start: I,
    pub secondary_start: I,
    pub length: I,
}

impl<I: Coordinate> SegmentRow<I> {
    pub fn to_segment(&self) -> Result<AlignedSegment<I>> {
        AlignedSegment::from_row(self.primary_start, self.secondary_start, self.length)
    }
}

impl<I: Coordinate> TryFrom<&SegmentRow<I>> for AlignedSegment<I> {
    type Error = crate::errors::SegmentError;

    fn try_from(value: &SegmentRow<I>) -> Result<Self> {
        value.to_segment()
    }
}

///
/// Turn stored rows into one validated chain per alignment.
///
/// Rows may arrive in any order; each alignment's segments are sorted by primary
/// start and then checked with [`validate_chain`]. The first bad row or chain aborts
/// the whole batch.
///
/// # Arguments
/// - rows: stored alignment rows, possibly from several alignments
///
/// # Returns
/// - map from alignment identifier to its chain
pub fn materialize_chains<I, R>(rows: R) -> Result<HashMap<String, Vec<AlignedSegment<I>>>>
where
    I: Coordinate,
    R: IntoIterator<Item = SegmentRow<I>>,
{
    let mut chains: HashMap<String, Vec<AlignedSegment<I>>> = HashMap::new();
    let mut n_rows = 0;

    for row in rows {
        let segment = row.to_segment()?;
        chains.entry(row.alignment_id).or_default().push(segment);
        n_rows += 1;
    }

    for chain in chains.values_mut() {
        chain.sort();
        validate_chain(chain)?;
    }

    debug!(
        "materialized {} rows into {} alignment chains",
        n_rows,
        chains.len()
    );

    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SegmentError;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn row(id: &str, primary_start: u32, secondary_start: u32, length: u32) -> SegmentRow<u32> {
        SegmentRow {
            alignment_id: id.to_string(),
            primary_start,
            secondary_start,
            length,
        }
    }

    #[rstest]
    fn test_groups_and_sorts_rows() {
        let rows = vec![
            row("aln2", 10, 10, 5),
            row("aln1", 29, 25, 22),
            row("aln1", 1, 5, 20),
        ];
        let chains = materialize_chains(rows).unwrap();

        assert_eq!(chains.len(), 2);
        assert_eq!(
            chains["aln1"],
            vec![
                AlignedSegment::new(1, 20, 5, 24).unwrap(),
                AlignedSegment::new(29, 50, 25, 46).unwrap(),
            ]
        );
        assert_eq!(chains["aln2"], vec![AlignedSegment::new(10, 14, 10, 14).unwrap()]);
    }

    #[rstest]
    fn test_rejects_crossing_rows() {
        let rows = vec![row("aln1", 1, 30, 10), row("aln1", 20, 5, 10)];
        let err = materialize_chains(rows).unwrap_err();
        assert!(matches!(err, SegmentError::MalformedChain { index: 1, .. }));
    }

    #[rstest]
    fn test_rejects_zero_length_row() {
        let rows = vec![row("aln1", 1, 30, 0)];
        assert!(matches!(
            materialize_chains(rows),
            Err(SegmentError::InvalidInterval(_, _))
        ));
    }

    #[rstest]
    fn test_empty_input() {
        let chains = materialize_chains(Vec::<SegmentRow<u32>>::new()).unwrap();
        assert!(chains.is_empty());
    }
}
