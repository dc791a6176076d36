//! Segmentation Error Types

use thiserror::Error;

/// Errors during window segmentation
#[derive(Debug, Clone, Error)]
pub enum SegmentError {
    /// Window length or step size is zero
    #[error("Invalid window config: window={window}, step={step} (both must be positive)")]
    InvalidWindowConfig { window: usize, step: usize },
}
