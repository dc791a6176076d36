//! Assembly Error Types

use encoder::EncodeError;
use segmenter::SegmentError;
use thiserror::Error;

/// Errors during dataset assembly
#[derive(Debug, Error)]
pub enum AssembleError {
    /// A series could not be parsed or encoded
    #[error("Encoding failed: {0}")]
    Encode(#[from] EncodeError),

    /// Invalid window configuration
    #[error("Segmentation failed: {0}")]
    Segment(#[from] SegmentError),

    /// Subsampling request exceeds available rows, or a partition is empty
    #[error("Requested {requested} samples but only {available} are available")]
    InsufficientSamples { requested: usize, available: usize },

    /// Test fraction outside the open unit interval
    #[error("Test fraction {0} must lie strictly between 0 and 1")]
    InvalidTestFraction(f64),

    /// Series, group, and label vectors differ in length
    #[error("Misaligned input: {series} series, {groups} groups, {labels} labels")]
    MisalignedInput {
        series: usize,
        groups: usize,
        labels: usize,
    },

    /// Window rows, labels, and groups differ in length
    #[error("Misaligned partition: {rows} rows, {groups} groups, {labels} labels")]
    MisalignedRows {
        rows: usize,
        groups: usize,
        labels: usize,
    },

    /// Accumulated windows do not form a rectangular matrix
    #[error("Window stacking failed: {0}")]
    Shape(#[from] ndarray::ShapeError),
}
