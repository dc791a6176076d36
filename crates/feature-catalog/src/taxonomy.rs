//! Feature Set Taxonomy

use crate::catalog::{FeatureCatalog, ParamValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Named subset of the feature catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeatureSet {
    /// Six parameterless summary statistics
    SimpleBaseline,
    /// Shape and spread statistics of the value distribution
    Distribution,
    /// Everything in the catalog that is not a distribution feature
    Temporal,
    /// The whole catalog
    #[default]
    Full,
}

impl FeatureSet {
    /// Resolve a feature-set name
    ///
    /// Unknown names resolve to [`FeatureSet::Full`]. The fallback is a
    /// deliberate permissive default so callers can probe with free-form
    /// configuration strings without an error path.
    pub fn from_name(name: &str) -> Self {
        match name {
            "simple_baseline" => Self::SimpleBaseline,
            "distribution_features" => Self::Distribution,
            "temporal_features" => Self::Temporal,
            other => {
                if other != "full" {
                    debug!("Unknown feature set {other:?}, falling back to full catalog");
                }
                Self::Full
            }
        }
    }

    /// Materialize the catalog subset this set names
    pub fn catalog(&self) -> FeatureCatalog {
        match self {
            Self::SimpleBaseline => simple_baseline(),
            Self::Distribution => distribution_features(),
            Self::Temporal => temporal_features(),
            Self::Full => FeatureCatalog::comprehensive(),
        }
    }
}

/// Six-feature parameterless baseline
pub fn simple_baseline() -> FeatureCatalog {
    let mut catalog = FeatureCatalog::new();
    for name in [
        "abs_energy",
        "mean",
        "median",
        "minimum",
        "maximum",
        "standard_deviation",
    ] {
        catalog.insert_plain(name);
    }
    catalog
}

/// Distribution-shape features with their literal parameter grids
///
/// Fixed explicit enumeration; these describe the value distribution of a
/// window irrespective of sample order.
pub fn distribution_features() -> FeatureCatalog {
    let mut catalog = FeatureCatalog::new();
    for name in [
        "abs_energy",
        "count_above_mean",
        "count_below_mean",
        "kurtosis",
        "length",
        "maximum",
        "mean",
        "median",
        "minimum",
        "ratio_value_number_to_time_series_length",
        "skewness",
        "standard_deviation",
        "sum_values",
        "variance",
        "variance_larger_than_standard_deviation",
    ] {
        catalog.insert_plain(name);
    }
    let r_grid: Vec<ParamValue> = (1..20)
        .map(|i| ParamValue::Float((i * 5) as f64 / 100.0))
        .collect();
    catalog.insert_sweep("symmetry_looking", "r", &r_grid);
    catalog.insert_sweep("large_standard_deviation", "r", &r_grid);
    catalog.insert_sweep(
        "ratio_beyond_r_sigma",
        "r",
        &[1.0, 1.5, 2.0, 2.5, 3.0, 5.0, 6.0, 7.0, 10.0].map(ParamValue::Float),
    );
    catalog.insert_sweep(
        "quantile",
        "q",
        &(1..10)
            .map(|i| ParamValue::Float(i as f64 / 10.0))
            .collect::<Vec<_>>(),
    );
    catalog
}

/// Order-sensitive features: the catalog's complement of the distribution set
pub fn temporal_features() -> FeatureCatalog {
    FeatureCatalog::comprehensive().complement(&distribution_features())
}
