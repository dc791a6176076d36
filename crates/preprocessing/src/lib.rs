//! Preprocessing Pipeline Assembly
//!
//! Builds the ordered chain of optional transform steps applied to the
//! feature table after external extraction. The chain is a plan only;
//! execution belongs to the pipeline-running collaborator.

mod pipeline;
mod variance;

pub use pipeline::{PipelineSpec, PipelineStep, PreprocessorConfig};
pub use variance::{is_low_variance, DEFAULT_LOW_VARIANCE_THRESHOLD, VARIATION_EPSILON};
