//! Rolling-Window Segmentation
//!
//! Cuts a variable-length spike-train series into fixed-length overlapping
//! windows for downstream feature extraction.

mod error;
mod segmenter;

pub use error::SegmentError;
pub use segmenter::Segmenter;
