//! Spike-Train Encoding
//!
//! Parses delimited spike-train strings and re-encodes inter-spike-interval
//! (ISI) vectors into binarized spike-count (SCE) form.

mod error;
mod parse;
mod sce;

pub use error::EncodeError;
pub use parse::{parse_series, serialize_series};
pub use sce::{SpikeCountEncoder, MAX_BINS};

use serde::{Deserialize, Serialize};

/// Spike-train representation produced by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Encoding {
    /// Inter-spike intervals, passed through unchanged
    #[default]
    Isi,
    /// Spike counts per fixed-width time bin
    Sce,
}
