//! Low-Variance Column Policy

/// Default coefficient-of-variation cutoff for dropping a column
///
/// A heuristic threshold, not a statistically derived one; override it via
/// [`crate::PreprocessorConfig::low_variance_threshold`].
pub const DEFAULT_LOW_VARIANCE_THRESHOLD: f64 = 0.2;

/// Small constant added to the mean so near-zero-mean columns do not divide
/// by zero
pub const VARIATION_EPSILON: f64 = 1e-9;

/// Whether a column with the given statistics falls under the drop policy
///
/// A column is low-variance when `|std / (mean + VARIATION_EPSILON)|` does
/// not exceed `threshold`. Pure predicate; the executing collaborator applies
/// it with copy-on-write semantics so the unfiltered table stays available.
pub fn is_low_variance(std_dev: f64, mean: f64, threshold: f64) -> bool {
    (std_dev / (mean + VARIATION_EPSILON)).abs() <= threshold
}
