use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Invalid interval: start {0} is greater than end {1}")]
    InvalidInterval(String, String),

    #[error("Invalid aligned segment: primary {0} and secondary {1} differ in length")]
    InvalidAlignedSegment(String, String),

    #[error("Malformed chain at segment {index}: {reason}")]
    MalformedChain { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, SegmentError>;
