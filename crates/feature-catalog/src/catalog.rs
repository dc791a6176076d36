//! Feature Catalog Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single feature parameter value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
}

/// One parameterization of a feature (parameter name -> value)
pub type ParamSet = BTreeMap<String, ParamValue>;

/// Mapping from feature name to its parameterizations
///
/// `None` means the feature takes no parameters; `Some(grid)` lists every
/// parameter combination the extraction engine should evaluate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCatalog {
    features: BTreeMap<String, Option<Vec<ParamSet>>>,
}

impl FeatureCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of feature names in the catalog
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Whether the catalog contains `name`
    pub fn contains(&self, name: &str) -> bool {
        self.features.contains_key(name)
    }

    /// Parameterizations registered for `name`, if present
    pub fn get(&self, name: &str) -> Option<&Option<Vec<ParamSet>>> {
        self.features.get(name)
    }

    /// Iterate over feature names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    /// Register a parameterless feature
    pub fn insert_plain(&mut self, name: &str) {
        self.features.insert(name.to_string(), None);
    }

    /// Register a feature with an explicit parameter grid
    pub fn insert_grid(&mut self, name: &str, grid: Vec<ParamSet>) {
        self.features.insert(name.to_string(), Some(grid));
    }

    /// Register a single-parameter feature swept over `values`
    pub fn insert_sweep(&mut self, name: &str, param: &str, values: &[ParamValue]) {
        let grid = values
            .iter()
            .map(|&value| {
                let mut params = ParamSet::new();
                params.insert(param.to_string(), value);
                params
            })
            .collect();
        self.insert_grid(name, grid);
    }

    /// Catalog restricted to names NOT present in `other` (set complement)
    pub fn complement(&self, other: &FeatureCatalog) -> FeatureCatalog {
        let features = self
            .features
            .iter()
            .filter(|(name, _)| !other.contains(name))
            .map(|(name, params)| (name.clone(), params.clone()))
            .collect();
        Self { features }
    }

    /// The full canonical catalog of the extraction engine
    ///
    /// Names and literal parameter grids mirror the engine's comprehensive
    /// defaults so a catalog subset can be handed over verbatim. The mirror
    /// is a representative subset: the engine's coefficient families with
    /// string-valued parameters (fft_coefficient, ar_coefficient,
    /// cwt_coefficients, linear_trend, agg_autocorrelation) are not
    /// reproduced here, and the taxonomy partitions whatever this catalog
    /// holds.
    pub fn comprehensive() -> Self {
        let mut catalog = Self::new();

        // Shape and spread statistics
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
        catalog.insert_sweep("symmetry_looking", "r", &r_grid_5_to_95());
        catalog.insert_sweep("large_standard_deviation", "r", &r_grid_5_to_95());
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

        // Change and derivative statistics
        for name in [
            "absolute_sum_of_changes",
            "mean_abs_change",
            "mean_change",
            "mean_second_derivative_central",
        ] {
            catalog.insert_plain(name);
        }

        // Location and run-length statistics
        for name in [
            "first_location_of_maximum",
            "first_location_of_minimum",
            "last_location_of_maximum",
            "last_location_of_minimum",
            "longest_strike_above_mean",
            "longest_strike_below_mean",
            "has_duplicate",
            "has_duplicate_max",
            "has_duplicate_min",
            "sum_of_reoccurring_values",
            "sum_of_reoccurring_data_points",
            "percentage_of_reoccurring_values_to_all_values",
        ] {
            catalog.insert_plain(name);
        }
        catalog.insert_sweep(
            "number_crossing_m",
            "m",
            &[-1i64, 0, 1].map(ParamValue::Int),
        );
        catalog.insert_sweep(
            "number_peaks",
            "n",
            &[1i64, 3, 5, 10, 50].map(ParamValue::Int),
        );

        // Autocorrelation and nonlinearity statistics
        catalog.insert_sweep(
            "autocorrelation",
            "lag",
            &(0..10i64).map(ParamValue::Int).collect::<Vec<_>>(),
        );
        catalog.insert_sweep(
            "partial_autocorrelation",
            "lag",
            &(0..10i64).map(ParamValue::Int).collect::<Vec<_>>(),
        );
        catalog.insert_sweep("c3", "lag", &[1, 2, 3].map(ParamValue::Int));
        catalog.insert_sweep(
            "time_reversal_asymmetry_statistic",
            "lag",
            &[1, 2, 3].map(ParamValue::Int),
        );
        catalog.insert_grid(
            "cid_ce",
            [0i64, 1]
                .iter()
                .map(|&normalize| {
                    let mut params = ParamSet::new();
                    params.insert("normalize".to_string(), ParamValue::Int(normalize));
                    params
                })
                .collect(),
        );

        // Entropy statistics
        catalog.insert_sweep("binned_entropy", "max_bins", &[10i64].map(ParamValue::Int));
        catalog.insert_plain("sample_entropy");
        catalog.insert_grid(
            "approximate_entropy",
            [0.1, 0.3, 0.5, 0.7, 0.9]
                .iter()
                .map(|&r| {
                    let mut params = ParamSet::new();
                    params.insert("m".to_string(), ParamValue::Int(2));
                    params.insert("r".to_string(), ParamValue::Float(r));
                    params
                })
                .collect(),
        );

        catalog
    }
}

/// The r = 0.05, 0.10, ..., 0.95 grid shared by several spread features
fn r_grid_5_to_95() -> Vec<ParamValue> {
    (1..20)
        .map(|i| ParamValue::Float((i * 5) as f64 / 100.0))
        .collect()
}
