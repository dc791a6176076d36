//! Rolling-Window Segmenter

use crate::error::SegmentError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rolling-window segmenter for one-dimensional series
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segmenter {
    /// Window length (number of samples per chunk)
    window: usize,
    /// Step size between consecutive window starts
    step: usize,
}

impl Segmenter {
    /// Create a new segmenter with given window and step
    pub fn new(window: usize, step: usize) -> Result<Self, SegmentError> {
        if window == 0 || step == 0 {
            return Err(SegmentError::InvalidWindowConfig { window, step });
        }
        Ok(Self { window, step })
    }

    /// Window length
    pub fn window(&self) -> usize {
        self.window
    }

    /// Step size
    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of windows a series of length `len` yields
    ///
    /// Equals `floor((len - window) / step) + 1`, or zero when the series is
    /// shorter than one window.
    pub fn window_count(&self, len: usize) -> usize {
        if len < self.window {
            0
        } else {
            (len - self.window) / self.step + 1
        }
    }

    /// Slide a length-`window` cursor across `series` in increments of `step`
    ///
    /// Any tail shorter than `window` is discarded. A series too short to fill
    /// a single window yields an empty result rather than an error.
    pub fn segment(&self, series: &[f64]) -> Vec<Vec<f64>> {
        let n_chunks = self.window_count(series.len());
        let mut chunks = Vec::with_capacity(n_chunks);
        for index in 0..n_chunks {
            let start = self.step * index;
            chunks.push(series[start..start + self.window].to_vec());
        }
        debug!(
            "Segmented series of length {} into {} windows (window={}, step={})",
            series.len(),
            chunks.len(),
            self.window,
            self.step
        );
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_windows() {
        let segmenter = Segmenter::new(3, 2).unwrap();
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let chunks = segmenter.segment(&series);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(chunks[1], vec![3.0, 4.0, 5.0]);
        assert_eq!(chunks[2], vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_step_larger_than_window() {
        let segmenter = Segmenter::new(3, 5).unwrap();
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let chunks = segmenter.segment(&series);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_short_series_yields_no_windows() {
        let segmenter = Segmenter::new(10, 5).unwrap();
        let chunks = segmenter.segment(&[1.0, 2.0, 3.0]);
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_exact_fit() {
        let segmenter = Segmenter::new(4, 4).unwrap();
        let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let chunks = segmenter.segment(&series);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], vec![5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Segmenter::new(0, 1).is_err());
        assert!(Segmenter::new(1, 0).is_err());
        assert!(Segmenter::new(0, 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_window_count_formula(len in 0usize..500, window in 1usize..50, step in 1usize..50) {
            let segmenter = Segmenter::new(window, step).unwrap();
            let series: Vec<f64> = (0..len).map(|i| i as f64).collect();
            let chunks = segmenter.segment(&series);
            let expected = if len >= window { (len - window) / step + 1 } else { 0 };
            prop_assert_eq!(chunks.len(), expected);
            for (i, chunk) in chunks.iter().enumerate() {
                prop_assert_eq!(chunk.len(), window);
                prop_assert_eq!(&chunk[..], &series[step * i..step * i + window]);
            }
        }
    }
}
