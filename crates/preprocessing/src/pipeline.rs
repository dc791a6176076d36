//! Ordered Pipeline Step Plan

use crate::variance::DEFAULT_LOW_VARIANCE_THRESHOLD;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One optional preprocessing step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PipelineStep {
    /// Keep only the listed feature columns
    SelectFeatures { keep: Vec<String> },
    /// Replace missing values in place
    Impute,
    /// Standard (zero-mean, unit-variance) scaling
    StandardScale,
    /// Drop columns under the coefficient-of-variation cutoff
    ///
    /// Applied copy-on-write: the collaborator filters a copy so the caller
    /// keeps the unfiltered table.
    LowVarianceRemoval { threshold: f64 },
}

impl PipelineStep {
    /// Step name as the executing collaborator addresses it
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectFeatures { .. } => "select_features",
            Self::Impute => "imputation",
            Self::StandardScale => "standard_scaling",
            Self::LowVarianceRemoval { .. } => "low_var_removal",
        }
    }

    /// Whether the step's fit is an identity (pure table-to-table transform)
    ///
    /// Standard scaling is the only step that learns state during fit.
    pub fn is_stateless(&self) -> bool {
        !matches!(self, Self::StandardScale)
    }
}

/// Ordered step plan handed to the pipeline-execution collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineSpec {
    steps: Vec<PipelineStep>,
}

impl PipelineSpec {
    /// Steps in execution order
    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Step names in execution order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(PipelineStep::name).collect()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Configuration for assembling a preprocessing plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessorConfig {
    /// Explicit keep-list of feature columns (column subset selection)
    pub keep_features: Option<Vec<String>>,
    /// Enable missing-value imputation
    pub impute: bool,
    /// Enable standard scaling
    pub scale: bool,
    /// Enable low-variance column removal
    pub remove_low_variance: bool,
    /// Coefficient-of-variation cutoff for the removal step
    pub low_variance_threshold: f64,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            keep_features: None,
            impute: true,
            scale: false,
            remove_low_variance: true,
            low_variance_threshold: DEFAULT_LOW_VARIANCE_THRESHOLD,
        }
    }
}

impl PreprocessorConfig {
    /// Assemble the ordered step plan
    ///
    /// One pass over a fixed enumeration of candidate steps, each gated by
    /// its inclusion predicate. Order is select -> impute -> scale ->
    /// low-variance removal regardless of how the flags were set; disabled
    /// steps are simply absent.
    pub fn build(&self) -> PipelineSpec {
        let candidates = [
            self.keep_features
                .as_ref()
                .map(|keep| PipelineStep::SelectFeatures { keep: keep.clone() }),
            self.impute.then_some(PipelineStep::Impute),
            self.scale.then_some(PipelineStep::StandardScale),
            self.remove_low_variance.then_some(PipelineStep::LowVarianceRemoval {
                threshold: self.low_variance_threshold,
            }),
        ];
        let steps: Vec<PipelineStep> = candidates.into_iter().flatten().collect();
        debug!("Assembled preprocessing plan: {:?}", steps.iter().map(PipelineStep::name).collect::<Vec<_>>());
        PipelineSpec { steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan() {
        let spec = PreprocessorConfig::default().build();
        assert_eq!(spec.step_names(), vec!["imputation", "low_var_removal"]);
    }

    #[test]
    fn test_all_steps_enabled_preserve_order() {
        let config = PreprocessorConfig {
            keep_features: Some(vec!["mean".to_string(), "kurtosis".to_string()]),
            impute: true,
            scale: true,
            remove_low_variance: true,
            ..Default::default()
        };
        let spec = config.build();
        assert_eq!(
            spec.step_names(),
            vec!["select_features", "imputation", "standard_scaling", "low_var_removal"]
        );
    }

    #[test]
    fn test_every_flag_combination_keeps_fixed_order() {
        let canonical = ["select_features", "imputation", "standard_scaling", "low_var_removal"];
        for mask in 0u8..16 {
            let config = PreprocessorConfig {
                keep_features: (mask & 1 != 0).then(|| vec!["mean".to_string()]),
                impute: mask & 2 != 0,
                scale: mask & 4 != 0,
                remove_low_variance: mask & 8 != 0,
                ..Default::default()
            };
            let names = config.build().step_names();
            // Enabled steps appear, disabled are absent, order never changes
            let expected: Vec<&str> = canonical
                .iter()
                .zip([mask & 1, mask & 2, mask & 4, mask & 8])
                .filter(|(_, bit)| *bit != 0)
                .map(|(name, _)| *name)
                .collect();
            assert_eq!(names, expected, "mask {mask:#06b}");
        }
    }

    #[test]
    fn test_empty_plan() {
        let config = PreprocessorConfig {
            keep_features: None,
            impute: false,
            scale: false,
            remove_low_variance: false,
            ..Default::default()
        };
        assert!(config.build().is_empty());
    }

    #[test]
    fn test_threshold_is_tunable() {
        let config = PreprocessorConfig {
            low_variance_threshold: 0.5,
            ..Default::default()
        };
        let spec = config.build();
        assert!(spec
            .steps()
            .iter()
            .any(|step| matches!(step, PipelineStep::LowVarianceRemoval { threshold } if *threshold == 0.5)));
    }

    #[test]
    fn test_statefulness_contract() {
        let config = PreprocessorConfig {
            keep_features: Some(vec!["mean".to_string()]),
            scale: true,
            ..Default::default()
        };
        for step in config.build().steps() {
            match step {
                PipelineStep::StandardScale => assert!(!step.is_stateless()),
                _ => assert!(step.is_stateless()),
            }
        }
    }
}
