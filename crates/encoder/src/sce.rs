//! Binarized Spike-Count Encoding

use crate::error::EncodeError;
use crate::parse::{parse_series, serialize_series};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on bins per encoded series
///
/// Guards against degenerate inputs (a huge interval or a tiny bin width)
/// allocating an absurd count vector; such series fail with
/// [`EncodeError::TooManyBins`] instead.
pub const MAX_BINS: usize = 1 << 20;

/// Encoder from inter-spike intervals to spike counts per time bin
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpikeCountEncoder {
    /// Width of one time bin, in the same units as the intervals
    bin_size: f64,
}

impl SpikeCountEncoder {
    /// Create a new encoder with the given bin width
    pub fn new(bin_size: f64) -> Result<Self, EncodeError> {
        if !bin_size.is_finite() || bin_size <= 0.0 {
            return Err(EncodeError::InvalidBinSize(bin_size));
        }
        Ok(Self { bin_size })
    }

    /// Bin width
    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    /// Count spike events per fixed-width bin
    ///
    /// Interval magnitudes are cumulatively summed into event times; each
    /// event lands in bin `floor(time / bin_size)`. The output covers every
    /// bin up to and including the last event's bin, with empty bins as zero
    /// counts. An empty interval vector yields an empty count vector.
    ///
    /// Intervals must be non-negative and finite; anything else fails with
    /// [`EncodeError::InvalidInterval`]. A series spanning more than
    /// [`MAX_BINS`] bins fails with [`EncodeError::TooManyBins`].
    pub fn encode(&self, intervals: &[f64]) -> Result<Vec<f64>, EncodeError> {
        if intervals.is_empty() {
            return Ok(Vec::new());
        }
        let mut time = 0.0;
        let mut bin_indices = Vec::with_capacity(intervals.len());
        for (position, &interval) in intervals.iter().enumerate() {
            if !interval.is_finite() || interval < 0.0 {
                return Err(EncodeError::InvalidInterval {
                    value: interval,
                    position,
                });
            }
            time += interval;
            let bin = (time / self.bin_size).floor();
            if bin >= MAX_BINS as f64 {
                return Err(EncodeError::TooManyBins {
                    required: bin + 1.0,
                    limit: MAX_BINS,
                });
            }
            bin_indices.push(bin as usize);
        }
        let n_bins = bin_indices.iter().copied().max().unwrap_or(0) + 1;
        let mut counts = vec![0.0; n_bins];
        for index in bin_indices {
            counts[index] += 1.0;
        }
        Ok(counts)
    }

    /// Encode one window through the delimited-string boundary
    ///
    /// The window is serialized to a space-delimited string and reparsed
    /// before binning, decoupling this stage from the numeric pipeline. The
    /// round trip uses shortest round-trip formatting and is lossless.
    pub fn encode_window(&self, window: &[f64]) -> Result<Vec<f64>, EncodeError> {
        let intervals = parse_series(&serialize_series(window), None)?;
        self.encode(&intervals)
    }

    /// Encode a batch of windows into a rectangular matrix
    ///
    /// Encoded rows vary in bin count with their total duration, so every row
    /// is padded with trailing zero-count bins up to the batch-wide maximum.
    pub fn encode_batch(&self, windows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, EncodeError> {
        let mut encoded = Vec::with_capacity(windows.len());
        for window in windows {
            encoded.push(self.encode_window(window)?);
        }
        let n_bins = encoded.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut encoded {
            row.resize(n_bins, 0.0);
        }
        debug!(
            "SCE-encoded {} windows into {} bins (bin_size={})",
            encoded.len(),
            n_bins,
            self.bin_size
        );
        Ok(encoded)
    }
}
