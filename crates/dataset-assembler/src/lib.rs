//! Dataset Assembly
//!
//! Turns raw delimited spike-train recordings into fixed-width, group-aware
//! train/test datasets ready for statistical feature extraction.

mod assembler;
mod dataset;
mod error;
mod long_format;
mod split;

pub use assembler::{AssemblerConfig, DatasetAssembler, SplitDataset};
pub use dataset::{RawDataset, SegmentedDataset};
pub use error::AssembleError;
pub use long_format::{ExtractionRequest, LongFormatTable};
pub use split::GroupShuffleSplit;
